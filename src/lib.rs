//! Adaptive rock-paper-scissors opponents.
//!
//! Two cheap opponent models play repeated rounds against each other or
//! against a human at the terminal:
//!
//! - [`Markov`] — learns a decayed transition table over the opponent's
//!   consecutive hands and counters the most likely next one.
//! - [`Sequence`] — replays a fixed three-hand cycle chosen from the last
//!   round's verdict.
//!
//! [`Arena`] drives rounds between any two [`Player`]s, judges them with
//! [`judge`], keeps a [`Tally`], and feeds each side its learning signal.

mod arena;
mod fish;
mod hand;
#[cfg(feature = "cli")]
mod human;
mod markov;
mod outcome;
mod player;
mod round;
mod sequence;
mod tally;

#[cfg(feature = "cli")]
pub mod cli;

pub use arena::*;
pub use fish::*;
pub use hand::*;
#[cfg(feature = "cli")]
pub use human::*;
pub use markov::*;
pub use outcome::*;
pub use player::*;
pub use round::*;
pub use sequence::*;
pub use tally::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Accumulated transition weight in the Markov table.
pub type Weight = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for fallbacks and testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// MARKOV PREDICTOR PARAMETERS
// Recent transitions count fully; older ones fade linearly toward eviction.
// ============================================================================
/// Transitions retained before the oldest is evicted.
pub const MAX_HISTORY: usize = 30;
/// History index at which decay begins.
pub const DECAY_START: usize = 20;

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Rounds played by the "consecutive" battle option.
pub const BATCH_ROUNDS: usize = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
