use super::*;
use dialoguer::Select;

/// Interactive player choosing hands at the terminal.
/// Picking "Quit" (or a terminal failure) aborts the round.
#[derive(Debug, Default)]
pub struct Human;

impl Human {
    const QUIT: &'static str = "Quit";
    fn selection() -> Option<usize> {
        let labels = Hand::all()
            .iter()
            .map(Hand::to_string)
            .chain(std::iter::once(String::from(Self::QUIT)))
            .collect::<Vec<_>>();
        Select::new()
            .with_prompt("Your hand")
            .report(false)
            .items(&labels)
            .default(0)
            .interact()
            .inspect_err(|e| log::warn!("[human] terminal input failed: {}", e))
            .ok()
    }
}

impl Player for Human {
    fn decide(&mut self) -> Option<Hand> {
        Self::selection()
            .filter(|i| *i < Hand::all().len())
            .map(|i| Hand::all()[i])
    }
    fn notify(&mut self, _: Hand, _: Verdict) {}
}
