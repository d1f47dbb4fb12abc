use super::*;
use std::collections::BTreeMap;
use std::collections::VecDeque;

/// Opponent model over consecutive hands.
///
/// Keeps a bounded FIFO of `(previous, next)` transitions observed from the
/// opponent and a table of decay-weighted transition counts derived from it.
/// Prediction looks up the row of the last observed hand, takes the most
/// heavily weighted successor, and throws its counter.
///
/// # Decay
///
/// History index `i` (oldest first) carries weight `1` while `i < decay`,
/// then falls linearly: `1 - (i - decay + 1) / (max - decay + 1)`, floored
/// at zero. The table is rebuilt from the full history on every update so
/// weights always reflect each entry's current position.
///
/// # Ties
///
/// Rows are ordered by [`Hand`], and the first encountered maximum wins, so
/// ties resolve toward the lowest hand (Rock, then Scissors, then Paper).
#[derive(Debug, Clone)]
pub struct Markov {
    max: usize,
    decay: usize,
    last: Option<Hand>,
    history: VecDeque<(Hand, Hand)>,
    table: BTreeMap<Hand, BTreeMap<Hand, Weight>>,
}

impl Default for Markov {
    fn default() -> Self {
        Self::new(MAX_HISTORY, DECAY_START)
    }
}

impl Markov {
    /// Capacity is at least one; decay never starts past capacity.
    pub fn new(max: usize, decay: usize) -> Self {
        let max = max.max(1);
        Self {
            max,
            decay: decay.min(max),
            last: None,
            history: VecDeque::with_capacity(max),
            table: BTreeMap::new(),
        }
    }

    /// Fold an explicit list of transitions into history, then resume
    /// from `last` as the most recently observed hand.
    pub fn replay<I>(mut self, transitions: I, last: Hand) -> Self
    where
        I: IntoIterator<Item = (Hand, Hand)>,
    {
        transitions.into_iter().for_each(|t| self.push(t));
        self.rebuild();
        self.last = Some(last);
        self
    }

    /// Learn the opponent's latest hand.
    pub fn observe(&mut self, hand: Hand) {
        if let Some(prev) = self.last {
            self.push((prev, hand));
            self.rebuild();
            log::debug!(
                "[markov] observed {:?} -> {:?} ({} retained)",
                prev,
                hand,
                self.len()
            );
        }
        self.last = Some(hand);
    }

    /// Learn from untrusted input. Rejected input leaves the model untouched.
    pub fn learn(&mut self, input: &str) -> Result<(), String> {
        Hand::try_from(input)
            .map(|hand| self.observe(hand))
            .inspect_err(|e| log::warn!("[markov] ignoring input: {}", e))
    }

    /// Counter the opponent's most likely next hand, or guess uniformly
    /// when there is nothing to go on.
    pub fn predict(&self) -> Hand {
        match self.expect() {
            Some(guess) => {
                log::debug!("[markov] expecting {:?}, countering", guess);
                guess.counter()
            }
            None => Hand::random(),
        }
    }

    /// Most heavily weighted successor of the last observed hand.
    pub fn expect(&self) -> Option<Hand> {
        self.last
            .and_then(|last| self.table.get(&last))
            .and_then(|row| {
                row.iter().fold(None, |best, (hand, weight)| match best {
                    Some((_, top)) if top >= *weight => best,
                    _ => Some((*hand, *weight)),
                })
            })
            .map(|(hand, _)| hand)
    }

    /// Decay weight of the history entry at `index`.
    pub fn weight(&self, index: usize) -> Weight {
        if index < self.decay {
            return 1.;
        }
        let fade = (index - self.decay + 1) as Weight;
        let span = (self.max - self.decay + 1) as Weight;
        (1. - fade / span).max(0.)
    }
    /// Weights of every retained transition, oldest first.
    pub fn weights(&self) -> Vec<Weight> {
        (0..self.len()).map(|i| self.weight(i)).collect()
    }
    /// Accumulated successor weights for `hand`.
    pub fn row(&self, hand: Hand) -> Option<&BTreeMap<Hand, Weight>> {
        self.table.get(&hand)
    }
    pub fn last(&self) -> Option<Hand> {
        self.last
    }
    pub fn len(&self) -> usize {
        self.history.len()
    }
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.max
    }

    fn push(&mut self, transition: (Hand, Hand)) {
        if self.history.len() == self.max {
            self.history.pop_front();
        }
        self.history.push_back(transition);
    }
    fn rebuild(&mut self) {
        self.table.clear();
        for (i, (prev, next)) in self.history.iter().enumerate() {
            let weight = self.weight(i);
            *self
                .table
                .entry(*prev)
                .or_default()
                .entry(*next)
                .or_default() += weight;
        }
    }
}

impl Player for Markov {
    fn decide(&mut self) -> Option<Hand> {
        Some(self.predict())
    }
    fn notify(&mut self, opponent: Hand, _: Verdict) {
        self.observe(opponent);
    }
}
