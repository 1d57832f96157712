//! Game rules domain
//!
//! - [`state::GameState`]: round counter and the one-shot potions
//! - [`night::PendingNightOutcome`]: a night's deaths before commit
//! - [`win::WinEvaluator`]: the win condition
//! - [`phase::GamePhase`]: the round state machine

pub mod night;
pub mod phase;
pub mod state;
pub mod win;

pub use night::{DeathSet, PendingNightOutcome};
pub use phase::{CheckPoint, GamePhase};
pub use state::GameState;
pub use win::{WinCheck, WinEvaluator};
