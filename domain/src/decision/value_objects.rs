//! Structured decisions returned by players

use serde::{Deserialize, Serialize};

/// The structured part of a player's reply
///
/// Each variant answers exactly one [`ResponseSchema`](super::ResponseSchema)
/// kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decision {
    /// Free-form public speech, no structured payload
    Speech,
    /// Werewolf deliberation turn
    Discussion { reach_agreement: bool },
    /// Elimination vote; abstaining is not possible
    Vote { target: String },
    /// Witch: use the healing potion on tonight's victim?
    Resurrect { resurrect: bool },
    /// Witch: use the poison, and on whom
    Poison { poison: bool, target: Option<String> },
    /// Seer: whose role to reveal
    Seer { target: String },
    /// Hunter: shoot someone on the way out?
    Hunter { shoot: bool, target: Option<String> },
}

impl Decision {
    pub fn kind(&self) -> &'static str {
        match self {
            Decision::Speech => "speech",
            Decision::Discussion { .. } => "discussion",
            Decision::Vote { .. } => "vote",
            Decision::Resurrect { .. } => "resurrect",
            Decision::Poison { .. } => "poison",
            Decision::Seer { .. } => "seer",
            Decision::Hunter { .. } => "hunter",
        }
    }

    pub fn reached_agreement(&self) -> bool {
        matches!(
            self,
            Decision::Discussion {
                reach_agreement: true
            }
        )
    }

    pub fn vote_target(&self) -> Option<&str> {
        match self {
            Decision::Vote { target } => Some(target),
            _ => None,
        }
    }

    pub fn resurrects(&self) -> bool {
        matches!(self, Decision::Resurrect { resurrect: true })
    }

    /// The chosen target of a targeted action, if the action is taken.
    ///
    /// A poison or shot with the flag set but no name is not taken.
    pub fn action_target(&self) -> Option<&str> {
        match self {
            Decision::Poison {
                poison: true,
                target,
            }
            | Decision::Hunter {
                shoot: true,
                target,
            } => target.as_deref(),
            Decision::Seer { target } | Decision::Vote { target } => Some(target),
            _ => None,
        }
    }
}
