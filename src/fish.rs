use super::*;

/// Baseline player that throws uniformly at random and never learns.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fish;

impl Player for Fish {
    fn decide(&mut self) -> Option<Hand> {
        Some(Hand::random())
    }
    fn notify(&mut self, _: Hand, _: Verdict) {}
}
