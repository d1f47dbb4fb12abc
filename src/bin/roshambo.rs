//! Interactive rock-paper-scissors against adaptive opponents.
//!
//! Options: --mode, --opponent, --rounds, --history, --decay

use clap::Parser;
use roshambo::*;

fn main() -> anyhow::Result<()> {
    log()?;
    cli::Args::parse().run()
}
