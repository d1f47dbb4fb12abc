//! Terminal front end: argument parsing, menus, and score printing.
use super::*;
use clap::Parser;
use clap::ValueEnum;
use colored::*;
use dialoguer::Confirm;
use dialoguer::Select;

/// Who sits in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Markov predictor against the pattern sequencer.
    Ai,
    /// You against an AI of your choice.
    Human,
}

/// Which AI a human plays against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Opponent {
    Markov,
    Sequence,
}

impl Opponent {
    fn name(&self) -> &'static str {
        match self {
            Opponent::Markov => "Markov AI",
            Opponent::Sequence => "Sequence AI",
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "roshambo", about = "Rock-paper-scissors against adaptive opponents")]
pub struct Args {
    /// Skip the main menu and start in this mode.
    #[arg(long, value_enum)]
    mode: Option<Mode>,
    /// Opponent for human mode.
    #[arg(long, value_enum, default_value_t = Opponent::Sequence)]
    opponent: Opponent,
    /// Play this many AI rounds without menus, print the score, and exit.
    #[arg(long)]
    rounds: Option<usize>,
    /// Transitions the Markov predictor remembers.
    #[arg(long, default_value_t = MAX_HISTORY)]
    history: usize,
    /// History index at which Markov weights start to fade.
    #[arg(long, default_value_t = DECAY_START)]
    decay: usize,
}

/// A match in progress with display names for both seats.
struct Session {
    mode: Mode,
    names: [&'static str; 2],
    arena: Arena<Box<dyn Player>, Box<dyn Player>>,
}

impl Session {
    fn new(args: &Args, mode: Mode, opponent: Opponent) -> Self {
        let markov = || -> Box<dyn Player> { Box::new(Markov::new(args.history, args.decay)) };
        let names = match mode {
            Mode::Ai => [Opponent::Markov.name(), Opponent::Sequence.name()],
            Mode::Human => ["You", opponent.name()],
        };
        let a: Box<dyn Player> = match mode {
            Mode::Ai => markov(),
            Mode::Human => Box::new(Human),
        };
        let b: Box<dyn Player> = match (mode, opponent) {
            (Mode::Human, Opponent::Markov) => markov(),
            _ => Box::new(Sequence::default()),
        };
        log::info!("[cli] starting {:?} session: {} vs {}", mode, names[0], names[1]);
        Self {
            mode,
            names,
            arena: Arena::new(a, b),
        }
    }

    /// Play and print one round. `false` when the round was aborted.
    fn round(&mut self) -> bool {
        match self.arena.play() {
            Some(round) => {
                self.print(self.arena.tally().rounds(), &round);
                true
            }
            None => false,
        }
    }

    /// One round with feedback when it was aborted.
    fn single(&mut self) -> bool {
        let played = self.round();
        if !played {
            println!("\nStopping.");
        }
        played
    }

    fn print(&self, n: usize, round: &Round) {
        println!("\n--- Round {} ---", n);
        println!("{:<12} {}", format!("{}:", self.names[0]), round.a());
        println!("{:<12} {}", format!("{}:", self.names[1]), round.b());
        let result = match (self.mode, round.outcome()) {
            (_, Outcome::Draw) => "Draw".yellow(),
            (Mode::Human, Outcome::First) => "You win!".green(),
            (Mode::Human, Outcome::Second) => format!("{} wins", self.names[1]).red(),
            (Mode::Ai, Outcome::First) => format!("{} wins", self.names[0]).cyan(),
            (Mode::Ai, Outcome::Second) => format!("{} wins", self.names[1]).magenta(),
        };
        println!("Result: {}", result);
    }

    fn summary(&self) {
        let tally = self.arena.tally();
        println!("\n=== Score ===");
        println!("Rounds played: {}", tally.rounds());
        println!("{} wins: {}", self.names[0], tally.count(Outcome::First));
        println!("{} wins: {}", self.names[1], tally.count(Outcome::Second));
        println!("Draws: {}", tally.count(Outcome::Draw));
        match tally.leader() {
            Outcome::First => println!("{}", format!("{} leads", self.names[0]).bold()),
            Outcome::Second => println!("{}", format!("{} leads", self.names[1]).bold()),
            Outcome::Draw => println!("{}", "Level".bold()),
        }
    }

    fn unlimited(&mut self) -> anyhow::Result<()> {
        loop {
            if !self.round() {
                println!("\nStopping.");
                break;
            }
            if self.mode == Mode::Ai
                && !Confirm::new()
                    .with_prompt("Continue?")
                    .default(true)
                    .interact()?
            {
                println!("\nStopping.");
                break;
            }
        }
        self.summary();
        Ok(())
    }

    fn battle(&mut self) -> anyhow::Result<()> {
        const ITEMS: [&str; 5] = [
            "Play 10 rounds",
            "Play one round",
            "Play until stopped",
            "Show score",
            "Back to main menu",
        ];
        loop {
            let choice = Select::new()
                .with_prompt(format!("{} vs {}", self.names[0], self.names[1]))
                .items(&ITEMS)
                .default(0)
                .interact()?;
            match choice {
                0 => {
                    for _ in 0..BATCH_ROUNDS {
                        if !self.round() {
                            break;
                        }
                    }
                }
                1 => {
                    self.single();
                }
                2 => self.unlimited()?,
                3 => self.summary(),
                _ => break Ok(()),
            }
        }
    }
}

impl Args {
    /// Entry point for the binary.
    pub fn run(self) -> anyhow::Result<()> {
        match (self.mode, self.rounds) {
            (Some(Mode::Human), Some(_)) => anyhow::bail!("--rounds only applies to ai mode"),
            (_, Some(n)) => {
                let mut session = Session::new(&self, Mode::Ai, self.opponent);
                for _ in 0..n {
                    session.round();
                }
                session.summary();
                Ok(())
            }
            (Some(mode), None) => Session::new(&self, mode, self.opponent).battle(),
            (None, None) => self.menu(),
        }
    }

    fn menu(&self) -> anyhow::Result<()> {
        const MODES: [&str; 3] = ["AI vs AI", "Player vs AI", "Quit"];
        const OPPONENTS: [&str; 2] = [
            "Markov AI (predicts your next hand)",
            "Sequence AI (cycles patterns)",
        ];
        loop {
            let choice = Select::new()
                .with_prompt("Rock-paper-scissors")
                .items(&MODES)
                .default(0)
                .interact()?;
            match choice {
                0 => Session::new(self, Mode::Ai, self.opponent).battle()?,
                1 => {
                    let opponent = match Select::new()
                        .with_prompt("Choose your opponent")
                        .items(&OPPONENTS)
                        .default(0)
                        .interact()?
                    {
                        0 => Opponent::Markov,
                        _ => Opponent::Sequence,
                    };
                    Session::new(self, Mode::Human, opponent).battle()?
                }
                _ => break,
            }
        }
        println!("Thanks for playing.");
        Ok(())
    }
}
