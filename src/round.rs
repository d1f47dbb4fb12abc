use super::*;

/// One judged round: the first seat's hand, the second's, and who won.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Round {
    a: Hand,
    b: Hand,
    outcome: Outcome,
}

impl From<(Hand, Hand)> for Round {
    fn from((a, b): (Hand, Hand)) -> Self {
        Self {
            a,
            b,
            outcome: judge(a, b),
        }
    }
}

impl Round {
    pub fn a(&self) -> Hand {
        self.a
    }
    pub fn b(&self) -> Hand {
        self.b
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let sign = match self.outcome {
            Outcome::First => ">",
            Outcome::Second => "<",
            Outcome::Draw => "=",
        };
        write!(f, "{} {} {}", self.a, sign, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judged_on_construction() {
        let round = Round::from((Hand::S, Hand::R));
        assert!(round.outcome() == Outcome::Second);
        assert!(round.a() == Hand::S);
        assert!(round.b() == Hand::R);
    }
}
