//! Game phase state machine

use super::win::WinCheck;
use crate::player::Faction;
use serde::{Deserialize, Serialize};

/// When within a round a win check happens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckPoint {
    /// After the night's deaths are committed
    Dawn,
    /// After the day vote and any revenge shot
    Dusk,
}

/// Phase of a running game
///
/// ```text
/// Night(n) → Dawn(n) → CheckWin(n, Dawn) → DayDiscussion(n) → DayVote(n)
///          → RevengeCheck(n) → CheckWin(n, Dusk) → Night(n + 1)
/// ```
///
/// Either `CheckWin` can end the game in `Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Night(u32),
    Dawn(u32),
    CheckWin(u32, CheckPoint),
    DayDiscussion(u32),
    DayVote(u32),
    RevengeCheck(u32),
    Finished(Faction),
}

impl GamePhase {
    pub fn initial() -> Self {
        GamePhase::Night(1)
    }

    pub fn round(&self) -> Option<u32> {
        match self {
            GamePhase::Night(n)
            | GamePhase::Dawn(n)
            | GamePhase::CheckWin(n, _)
            | GamePhase::DayDiscussion(n)
            | GamePhase::DayVote(n)
            | GamePhase::RevengeCheck(n) => Some(*n),
            GamePhase::Finished(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Finished(_))
    }

    /// The phase that follows this one.
    ///
    /// `win` is only consulted in `CheckWin`; `Finished` is absorbing.
    pub fn next(self, win: WinCheck) -> Self {
        match self {
            GamePhase::Night(n) => GamePhase::Dawn(n),
            GamePhase::Dawn(n) => GamePhase::CheckWin(n, CheckPoint::Dawn),
            GamePhase::CheckWin(n, point) => match (win, point) {
                (WinCheck::Winner(faction), _) => GamePhase::Finished(faction),
                (WinCheck::Continue, CheckPoint::Dawn) => GamePhase::DayDiscussion(n),
                (WinCheck::Continue, CheckPoint::Dusk) => GamePhase::Night(n + 1),
            },
            GamePhase::DayDiscussion(n) => GamePhase::DayVote(n),
            GamePhase::DayVote(n) => GamePhase::RevengeCheck(n),
            GamePhase::RevengeCheck(n) => GamePhase::CheckWin(n, CheckPoint::Dusk),
            GamePhase::Finished(faction) => GamePhase::Finished(faction),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GamePhase::Night(_) => "night",
            GamePhase::Dawn(_) => "dawn",
            GamePhase::CheckWin(_, _) => "check_win",
            GamePhase::DayDiscussion(_) => "day_discussion",
            GamePhase::DayVote(_) => "day_vote",
            GamePhase::RevengeCheck(_) => "revenge_check",
            GamePhase::Finished(_) => "finished",
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::Finished(faction) => write!(f, "finished ({} win)", faction),
            other => match other.round() {
                Some(n) => write!(f, "{} (round {})", other.label(), n),
                None => write!(f, "{}", other.label()),
            },
        }
    }
}
