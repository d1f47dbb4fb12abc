use crate::Arbitrary;

/// A thrown hand: rock, scissors, paper.
///
/// The discriminants follow the cycle of domination: each hand beats the
/// one with the next index (mod 3) and loses to the one with the previous
/// index. Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Hand {
    #[default]
    R = 0,
    S = 1,
    P = 2,
}

impl Hand {
    /// All three hands in canonical order.
    pub const fn all() -> [Hand; 3] {
        [Hand::R, Hand::S, Hand::P]
    }
    /// The hand this one defeats.
    pub fn victim(&self) -> Hand {
        Hand::from((u8::from(*self) + 1) % 3)
    }
    /// The hand that defeats this one.
    pub fn counter(&self) -> Hand {
        Hand::from((u8::from(*self) + 2) % 3)
    }
    pub fn beats(&self, other: &Hand) -> bool {
        self.victim() == *other
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Hand::R => "Rock",
            Hand::S => "Scissors",
            Hand::P => "Paper",
        }
    }
    /// Unicode glyph for display.
    pub const fn glyph(&self) -> &'static str {
        match self {
            Hand::R => "✊",
            Hand::S => "✌️",
            Hand::P => "✋",
        }
    }
}

/// u8 isomorphism
impl From<u8> for Hand {
    fn from(n: u8) -> Hand {
        match n {
            0 => Hand::R,
            1 => Hand::S,
            2 => Hand::P,
            _ => unreachable!("invalid hand"),
        }
    }
}
impl From<Hand> for u8 {
    fn from(h: Hand) -> u8 {
        h as u8
    }
}

/// str isomorphism. Accepts menu digits, initials, English and Japanese names.
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "1" | "r" | "rock" | "グー" | "✊" => Ok(Hand::R),
            "2" | "s" | "scissors" | "チョキ" | "✌️" => Ok(Hand::S),
            "3" | "p" | "paper" | "パー" | "✋" => Ok(Hand::P),
            _ => Err(format!("invalid hand str: {}", s)),
        }
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        use rand::Rng;
        Hand::from(rand::rng().random_range(0..3u8))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.glyph(), self.label())
    }
}
