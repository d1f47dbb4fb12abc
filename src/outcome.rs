use super::*;

/// Result of comparing the first seat's hand against the second's.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    First,
    Second,
    Draw,
}

/// Result of a round from one side's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verdict {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub const fn all() -> [Outcome; 3] {
        [Outcome::First, Outcome::Second, Outcome::Draw]
    }
    /// Seen from the first seat.
    pub fn first(&self) -> Verdict {
        match self {
            Outcome::First => Verdict::Win,
            Outcome::Second => Verdict::Lose,
            Outcome::Draw => Verdict::Draw,
        }
    }
    /// Seen from the second seat.
    pub fn second(&self) -> Verdict {
        self.swap().first()
    }
    /// Same round with seats exchanged.
    pub fn swap(&self) -> Outcome {
        match self {
            Outcome::First => Outcome::Second,
            Outcome::Second => Outcome::First,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

/// Judge one round. Total over all nine pairs of hands.
pub fn judge(a: Hand, b: Hand) -> Outcome {
    if a == b {
        Outcome::Draw
    } else if a.beats(&b) {
        Outcome::First
    } else {
        Outcome::Second
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Verdict::Win => write!(f, "win"),
            Verdict::Lose => write!(f, "lose"),
            Verdict::Draw => write!(f, "draw"),
        }
    }
}
