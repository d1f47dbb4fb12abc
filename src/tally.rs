use super::*;
use std::collections::BTreeMap;

/// Running score of a match: per-outcome counts and every judged round.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    counts: BTreeMap<Outcome, usize>,
    history: Vec<Round>,
}

impl Tally {
    pub fn record(&mut self, round: Round) {
        *self.counts.entry(round.outcome()).or_default() += 1;
        self.history.push(round);
    }
    pub fn count(&self, outcome: Outcome) -> usize {
        self.counts.get(&outcome).copied().unwrap_or_default()
    }
    pub fn rounds(&self) -> usize {
        self.history.len()
    }
    pub fn history(&self) -> &[Round] {
        &self.history
    }
    /// Seat currently ahead, or `Draw` when level.
    pub fn leader(&self) -> Outcome {
        match self.count(Outcome::First).cmp(&self.count(Outcome::Second)) {
            std::cmp::Ordering::Greater => Outcome::First,
            std::cmp::Ordering::Less => Outcome::Second,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} rounds: {} - {} ({} drawn)",
            self.rounds(),
            self.count(Outcome::First),
            self.count(Outcome::Second),
            self.count(Outcome::Draw),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_outcome() {
        let mut tally = Tally::default();
        tally.record(Round::from((Hand::R, Hand::S)));
        tally.record(Round::from((Hand::R, Hand::S)));
        tally.record(Round::from((Hand::R, Hand::P)));
        tally.record(Round::from((Hand::R, Hand::R)));
        assert!(tally.count(Outcome::First) == 2);
        assert!(tally.count(Outcome::Second) == 1);
        assert!(tally.count(Outcome::Draw) == 1);
        assert!(tally.rounds() == 4);
        assert!(tally.leader() == Outcome::First);
    }

    #[test]
    fn level_score_has_no_leader() {
        let mut tally = Tally::default();
        assert!(tally.leader() == Outcome::Draw);
        tally.record(Round::from((Hand::P, Hand::R)));
        tally.record(Round::from((Hand::S, Hand::R)));
        assert!(tally.leader() == Outcome::Draw);
        assert!(tally.to_string() == "2 rounds: 1 - 1 (0 drawn)");
    }
}
