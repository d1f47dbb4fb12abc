use super::*;

/// Anything that can throw hands in an [`Arena`].
///
/// Both operations are required, so the arena never needs to ask what a
/// player supports: a player that does not learn simply ignores `notify`.
pub trait Player {
    /// Produce the next hand, or `None` to abort the round.
    /// Called before the opponent's hand is known.
    fn decide(&mut self) -> Option<Hand>;
    /// Receive the opponent's hand and the round's verdict from this
    /// player's side, after judging.
    fn notify(&mut self, opponent: Hand, verdict: Verdict);
}

impl<P> Player for Box<P>
where
    P: Player + ?Sized,
{
    fn decide(&mut self) -> Option<Hand> {
        self.as_mut().decide()
    }
    fn notify(&mut self, opponent: Hand, verdict: Verdict) {
        self.as_mut().notify(opponent, verdict)
    }
}
