//! Toggle Board
//!
//! Lookup table from entity id to the state of every toggle button rendered for it.
//! Several buttons may share a key (e.g. the same cart listed twice on a page).

use std::cell::RefCell;
use std::collections::HashMap;

use leptos::prelude::*;

use crate::api::Channel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleKey {
    Cart { cart_id: u64, channel: Channel },
    Lead { lead_id: u64 },
}

impl ToggleKey {
    pub fn cart(cart_id: u64, channel: Channel) -> Self {
        ToggleKey::Cart { cart_id, channel }
    }

    pub fn lead(lead_id: u64) -> Self {
        ToggleKey::Lead { lead_id }
    }
}

/// What a toggle button shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub sent: bool,
    /// `HH:MM` of the last mark
    pub sent_at: Option<String>,
}

impl ToggleState {
    pub fn sent(at: impl Into<String>) -> Self {
        Self { sent: true, sent_at: Some(at.into()) }
    }

    pub fn unsent() -> Self {
        Self::default()
    }
}

/// Sink for in-place toggle updates
pub trait ToggleView {
    fn show(&self, key: ToggleKey, state: ToggleState);
}

thread_local! {
    static BOARD: RefCell<HashMap<ToggleKey, Vec<RwSignal<ToggleState>>>> = RefCell::new(HashMap::new());
}

/// Board backed by the signals of the mounted `ToggleButton`s
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalBoard;

impl SignalBoard {
    pub fn register(key: ToggleKey, state: RwSignal<ToggleState>) {
        BOARD.with(|board| board.borrow_mut().entry(key).or_default().push(state));
    }

    pub fn len() -> usize {
        BOARD.with(|board| board.borrow().values().map(Vec::len).sum())
    }
}

impl ToggleView for SignalBoard {
    fn show(&self, key: ToggleKey, state: ToggleState) {
        // Clone the handles out so signal subscribers can't re-enter the borrow
        let signals = BOARD.with(|board| board.borrow().get(&key).cloned().unwrap_or_default());
        for signal in signals {
            signal.set(state.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_updates_every_button_of_the_key() {
        let first = RwSignal::new(ToggleState::unsent());
        let second = RwSignal::new(ToggleState::unsent());
        let email = RwSignal::new(ToggleState::unsent());
        SignalBoard::register(ToggleKey::cart(5, Channel::Whatsapp), first);
        SignalBoard::register(ToggleKey::cart(5, Channel::Whatsapp), second);
        SignalBoard::register(ToggleKey::cart(5, Channel::Email), email);
        assert_eq!(SignalBoard::len(), 3);

        SignalBoard.show(ToggleKey::cart(5, Channel::Whatsapp), ToggleState::sent("10:00"));

        assert_eq!(first.get_untracked(), ToggleState::sent("10:00"));
        assert_eq!(second.get_untracked(), ToggleState::sent("10:00"));
        // Other channel of the same cart is untouched
        assert_eq!(email.get_untracked(), ToggleState::unsent());
    }

    #[test]
    fn test_show_for_unregistered_key_is_a_no_op() {
        let lead = RwSignal::new(ToggleState::sent("09:00"));
        SignalBoard::register(ToggleKey::lead(77), lead);

        SignalBoard.show(ToggleKey::lead(78), ToggleState::unsent());

        assert_eq!(lead.get_untracked(), ToggleState::sent("09:00"));
    }
}
