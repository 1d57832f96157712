//! Session-wide game state

use serde::{Deserialize, Serialize};

/// Round counter and the witch's one-shot potions
///
/// Each potion can be consumed at most once per session. Consuming an
/// exhausted potion is a no-op that reports `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    round: u32,
    healing_available: bool,
    poison_available: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            round: 1,
            healing_available: true,
            poison_available: true,
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Move to the next round and return it
    pub fn advance_round(&mut self) -> u32 {
        self.round += 1;
        self.round
    }

    pub fn healing_available(&self) -> bool {
        self.healing_available
    }

    pub fn poison_available(&self) -> bool {
        self.poison_available
    }

    /// Use the healing potion. Returns whether it was still available.
    pub fn consume_healing(&mut self) -> bool {
        std::mem::replace(&mut self.healing_available, false)
    }

    /// Use the poison. Returns whether it was still available.
    pub fn consume_poison(&mut self) -> bool {
        std::mem::replace(&mut self.poison_available, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_round_one_with_both_potions() {
        let state = GameState::new();
        assert_eq!(state.round(), 1);
        assert!(state.healing_available());
        assert!(state.poison_available());
    }

    #[test]
    fn test_potions_are_one_shot() {
        let mut state = GameState::new();

        assert!(state.consume_healing());
        assert!(!state.consume_healing());
        assert!(!state.healing_available());
        assert!(state.poison_available());

        assert!(state.consume_poison());
        assert!(!state.consume_poison());
        assert!(!state.poison_available());
    }

    #[test]
    fn test_round_is_monotonic() {
        let mut state = GameState::new();
        assert_eq!(state.advance_round(), 2);
        assert_eq!(state.advance_round(), 3);
        assert_eq!(state.round(), 3);
    }
}
