use super::*;

/// Match driver between two players.
///
/// Each round asks the first seat, then the second, for a hand; neither
/// sees the other's choice. The round is judged and recorded, then both
/// players are notified with the opponent's hand and their own verdict.
/// If either player aborts, the round is dropped before judging and the
/// arena stays playable.
#[derive(Debug, Default)]
pub struct Arena<A, B>
where
    A: Player,
    B: Player,
{
    a: A,
    b: B,
    tally: Tally,
}

impl<A, B> Arena<A, B>
where
    A: Player,
    B: Player,
{
    pub fn new(a: A, b: B) -> Self {
        Self {
            a,
            b,
            tally: Tally::default(),
        }
    }

    /// Play one round. `None` if a player aborted.
    pub fn play(&mut self) -> Option<Round> {
        let Some(a) = self.a.decide() else {
            log::warn!("[arena] first seat aborted round {}", self.tally.rounds() + 1);
            return None;
        };
        let Some(b) = self.b.decide() else {
            log::warn!("[arena] second seat aborted round {}", self.tally.rounds() + 1);
            return None;
        };
        let round = Round::from((a, b));
        self.tally.record(round);
        self.a.notify(b, round.outcome().first());
        self.b.notify(a, round.outcome().second());
        log::info!(
            "[arena] round {}: {:?} vs {:?} -> {:?}",
            self.tally.rounds(),
            a,
            b,
            round.outcome()
        );
        Some(round)
    }

    /// Play up to `n` rounds, stopping at the first abort.
    pub fn batch(&mut self, n: usize) -> Vec<Round> {
        (0..n).map_while(|_| self.play()).collect()
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }
    pub fn first(&self) -> &A {
        &self.a
    }
    pub fn second(&self) -> &B {
        &self.b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plays a fixed script; `None` entries abort. Remembers what it was told.
    #[derive(Default)]
    struct Script {
        hands: Vec<Option<Hand>>,
        heard: Vec<(Hand, Verdict)>,
    }

    impl Script {
        fn new(hands: &[Option<Hand>]) -> Self {
            Self {
                hands: hands.iter().rev().copied().collect(),
                heard: Vec::new(),
            }
        }
    }

    impl Player for Script {
        fn decide(&mut self) -> Option<Hand> {
            self.hands.pop().flatten()
        }
        fn notify(&mut self, opponent: Hand, verdict: Verdict) {
            self.heard.push((opponent, verdict));
        }
    }

    #[test]
    fn ten_rounds_ten_records() {
        let mut arena = Arena::new(Markov::default(), Sequence::default());
        for _ in 0..10 {
            assert!(arena.play().is_some());
        }
        let tally = arena.tally();
        assert!(tally.rounds() == 10);
        assert!(tally.history().len() == 10);
        assert!(Outcome::all().iter().map(|o| tally.count(*o)).sum::<usize>() == 10);
    }

    #[test]
    fn notifies_both_sides() {
        let a = Script::new(&[Some(Hand::R)]);
        let b = Script::new(&[Some(Hand::S)]);
        let mut arena = Arena::new(a, b);
        let round = arena.play();
        assert!(round.map(|r| r.outcome()) == Some(Outcome::First));
        assert!(arena.first().heard == vec![(Hand::S, Verdict::Win)]);
        assert!(arena.second().heard == vec![(Hand::R, Verdict::Lose)]);
    }

    #[test]
    fn abort_leaves_no_trace() {
        let a = Script::new(&[Some(Hand::P), None, Some(Hand::S)]);
        let b = Script::new(&[Some(Hand::R), Some(Hand::P)]);
        let mut arena = Arena::new(a, b);
        assert!(arena.play().is_some());
        assert!(arena.play().is_none());
        assert!(arena.tally().rounds() == 1);
        assert!(arena.tally().count(Outcome::First) == 1);
        assert!(arena.first().heard.len() == 1);
        assert!(arena.second().heard.len() == 1);
        let resumed = arena.play();
        assert!(resumed.map(|r| r.outcome()) == Some(Outcome::First));
        assert!(arena.tally().rounds() == 2);
    }

    #[test]
    fn second_seat_abort_skips_judging() {
        let a = Script::new(&[Some(Hand::R)]);
        let b = Script::new(&[None]);
        let mut arena = Arena::new(a, b);
        assert!(arena.play().is_none());
        assert!(arena.tally().rounds() == 0);
        assert!(arena.first().heard.is_empty());
    }

    #[test]
    fn batch_stops_at_abort() {
        let a = Script::new(&[Some(Hand::R), Some(Hand::R), None, Some(Hand::R)]);
        let mut arena = Arena::new(a, Fish);
        assert!(arena.batch(4).len() == 2);
        assert!(arena.tally().rounds() == 2);
    }

    #[test]
    fn markov_exploits_constant_opponent() {
        let constant = Script::new(&[Some(Hand::P); 20]);
        let mut arena = Arena::new(Markov::default(), constant);
        arena.batch(20);
        let late = &arena.tally().history()[2..];
        assert!(late.iter().all(|r| r.a() == Hand::S));
        assert!(late.iter().all(|r| r.outcome() == Outcome::First));
    }

    #[test]
    fn boxed_players_share_the_arena() {
        let a: Box<dyn Player> = Box::new(Markov::default());
        let b: Box<dyn Player> = Box::new(Sequence::default());
        let mut arena = Arena::new(a, b);
        assert!(arena.batch(BATCH_ROUNDS).len() == BATCH_ROUNDS);
    }
}
