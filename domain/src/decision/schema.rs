//! Response schemas offered to players
//!
//! A schema tells a player what shape of answer is allowed and, for targeted
//! actions, which names may be chosen. Candidate lists are always built from
//! the *current* alive roster by the caller.

use super::value_objects::Decision;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// The allowed output shape of one solicitation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseSchema {
    /// Free public speech
    Speech,
    /// Werewolf deliberation with an agreement flag
    Discussion,
    /// Mandatory vote for one of `candidates`
    Vote { candidates: Vec<String> },
    /// Witch healing yes/no
    Resurrect,
    /// Witch poison yes/no plus optional target
    Poison { candidates: Vec<String> },
    /// Seer reveal target
    Seer { candidates: Vec<String> },
    /// Hunter shot yes/no plus optional target
    Hunter { candidates: Vec<String> },
}

impl ResponseSchema {
    pub fn kind(&self) -> &'static str {
        match self {
            ResponseSchema::Speech => "speech",
            ResponseSchema::Discussion => "discussion",
            ResponseSchema::Vote { .. } => "vote",
            ResponseSchema::Resurrect => "resurrect",
            ResponseSchema::Poison { .. } => "poison",
            ResponseSchema::Seer { .. } => "seer",
            ResponseSchema::Hunter { .. } => "hunter",
        }
    }

    /// Names that may be chosen (empty for untargeted schemas)
    pub fn candidates(&self) -> &[String] {
        match self {
            ResponseSchema::Vote { candidates }
            | ResponseSchema::Poison { candidates }
            | ResponseSchema::Seer { candidates }
            | ResponseSchema::Hunter { candidates } => candidates,
            _ => &[],
        }
    }

    /// Check that `decision` answers this schema and picks an allowed target
    pub fn validate(&self, decision: &Decision) -> Result<(), DomainError> {
        if self.kind() != decision.kind() {
            return Err(DomainError::SchemaMismatch {
                expected: self.kind(),
                actual: decision.kind(),
            });
        }

        if let Some(target) = decision.action_target()
            && !self.candidates().iter().any(|c| c == target)
        {
            return Err(DomainError::InvalidTarget {
                target: target.to_string(),
                allowed: self.candidates().join(", "),
            });
        }

        Ok(())
    }

    /// JSON Schema describing the expected answer object.
    ///
    /// Returns `None` for [`ResponseSchema::Speech`], which has no structured
    /// part.
    pub fn json_schema(&self) -> Option<Value> {
        let schema = match self {
            ResponseSchema::Speech => return None,
            ResponseSchema::Discussion => object(
                json!({
                    "reach_agreement": {
                        "type": "boolean",
                        "description": "Whether your team has agreed on tonight's target"
                    }
                }),
                &["reach_agreement"],
            ),
            ResponseSchema::Vote { candidates } => object(
                json!({
                    "vote": {
                        "type": "string",
                        "enum": candidates,
                        "description": "The player you vote for. Abstaining is not allowed."
                    }
                }),
                &["vote"],
            ),
            ResponseSchema::Resurrect => object(
                json!({
                    "resurrect": {
                        "type": "boolean",
                        "description": "Whether to save tonight's victim"
                    }
                }),
                &["resurrect"],
            ),
            ResponseSchema::Poison { candidates } => object(
                json!({
                    "poison": {
                        "type": "boolean",
                        "description": "Whether to use the poison"
                    },
                    "name": nullable_enum(candidates, "The player to poison; null if not poisoning")
                }),
                &["poison"],
            ),
            ResponseSchema::Seer { candidates } => object(
                json!({
                    "name": {
                        "type": "string",
                        "enum": candidates,
                        "description": "The player whose role you want to learn"
                    }
                }),
                &["name"],
            ),
            ResponseSchema::Hunter { candidates } => object(
                json!({
                    "shoot": {
                        "type": "boolean",
                        "description": "Whether to use your shot"
                    },
                    "name": nullable_enum(candidates, "The player to shoot; null if not shooting")
                }),
                &["shoot"],
            ),
        };
        Some(schema)
    }
}

fn object(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn nullable_enum(candidates: &[String], description: &str) -> Value {
    let mut values: Vec<Value> = candidates.iter().map(|c| json!(c)).collect();
    values.push(Value::Null);
    json!({
        "type": ["string", "null"],
        "enum": values,
        "description": description,
    })
}
