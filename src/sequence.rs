use super::*;
use std::collections::VecDeque;

/// Cyclic bluffing pattern.
///
/// After each round the pending queue is regenerated from the verdict and
/// the hand just played, then consumed front to back. An empty queue means
/// a uniformly random throw. The pattern assumes an opponent who reacts to
/// this player's own previous hand.
///
/// With `h` the last hand played:
/// - win:  `[victim(h), counter(h), h]`
/// - lose: `[counter(h), victim(h), h]`
/// - draw: `[]`
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    queue: VecDeque<Hand>,
    last: Option<Hand>,
}

impl Sequence {
    /// Pop the next scripted hand, or guess when the script is exhausted.
    pub fn next(&mut self) -> Hand {
        let hand = self.queue.pop_front().unwrap_or_else(Hand::random);
        self.last = Some(hand);
        hand
    }

    /// Replace the pending script based on how `played` fared.
    pub fn on_outcome(&mut self, verdict: Verdict, played: Hand) {
        self.queue = match verdict {
            Verdict::Win => VecDeque::from([played.victim(), played.counter(), played]),
            Verdict::Lose => VecDeque::from([played.counter(), played.victim(), played]),
            Verdict::Draw => VecDeque::new(),
        };
        log::debug!("[sequence] {} with {:?}, queued {:?}", verdict, played, self.queue);
    }

    pub fn pending(&self) -> &VecDeque<Hand> {
        &self.queue
    }
    pub fn last(&self) -> Option<Hand> {
        self.last
    }
}

impl Player for Sequence {
    fn decide(&mut self) -> Option<Hand> {
        Some(self.next())
    }
    fn notify(&mut self, _: Hand, verdict: Verdict) {
        match self.last {
            Some(played) => self.on_outcome(verdict, played),
            None => log::warn!("[sequence] notified before playing a hand"),
        }
    }
}
