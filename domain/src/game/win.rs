//! Win condition evaluation

use crate::player::{Faction, Roster};

/// Result of a win check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinCheck {
    Winner(Faction),
    Continue,
}

impl WinCheck {
    pub fn winner(&self) -> Option<Faction> {
        match self {
            WinCheck::Winner(faction) => Some(*faction),
            WinCheck::Continue => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WinCheck::Winner(_))
    }
}

/// Pure win-condition rules, checked after every committed death set
pub struct WinEvaluator;

impl WinEvaluator {
    /// Werewolves win once they make up at least half of the living.
    /// Villagers win once no werewolf is left among a non-empty table.
    ///
    /// # Example
    ///
    /// ```
    /// use werewolf_domain::game::{WinCheck, WinEvaluator};
    /// use werewolf_domain::Faction;
    ///
    /// assert_eq!(WinEvaluator::evaluate(8, 3), WinCheck::Continue);
    /// assert_eq!(WinEvaluator::evaluate(2, 1), WinCheck::Winner(Faction::Werewolves));
    /// assert_eq!(WinEvaluator::evaluate(4, 0), WinCheck::Winner(Faction::Villagers));
    /// ```
    pub fn evaluate(alive: usize, werewolves: usize) -> WinCheck {
        if werewolves * 2 >= alive {
            WinCheck::Winner(Faction::Werewolves)
        } else if alive > 0 && werewolves == 0 {
            WinCheck::Winner(Faction::Villagers)
        } else {
            WinCheck::Continue
        }
    }

    pub fn evaluate_roster(roster: &Roster) -> WinCheck {
        Self::evaluate(roster.alive_count(), roster.alive_werewolf_count())
    }

    /// Winner when the round cap runs out: werewolves if any survive
    pub fn round_cap_winner(roster: &Roster) -> Faction {
        if roster.alive_werewolf_count() > 0 {
            Faction::Werewolves
        } else {
            Faction::Villagers
        }
    }
}
