//! Parsing structured answers out of model output.
//!
//! Pure text and JSON handling, no I/O. Field names follow the wire format
//! of each schema (`vote`, `name`, `poison`, `shoot`, ...).

use super::schema::ResponseSchema;
use super::value_objects::Decision;
use crate::core::error::DomainError;
use serde_json::Value;

/// Find the outermost JSON object in free-form text.
///
/// Models often wrap their JSON in prose or code fences; this takes the span
/// from the first `{` to the last `}` and tries to parse it.
///
/// ```
/// use werewolf_domain::decision::extract_json_object;
///
/// let value = extract_json_object("Sure!\n```json\n{\"vote\": \"Bob\"}\n```").unwrap();
/// assert_eq!(value["vote"], "Bob");
/// assert!(extract_json_object("no json here").is_none());
/// ```
pub fn extract_json_object(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(value @ Value::Object(_)) => Some(value),
        _ => None,
    }
}

impl ResponseSchema {
    /// Turn a JSON answer into a validated [`Decision`]
    pub fn parse_response(&self, value: &Value) -> Result<Decision, DomainError> {
        let decision = match self {
            ResponseSchema::Speech => Decision::Speech,
            ResponseSchema::Discussion => Decision::Discussion {
                reach_agreement: require_bool(value, "reach_agreement")?,
            },
            ResponseSchema::Vote { .. } => Decision::Vote {
                target: require_str(value, "vote")?,
            },
            ResponseSchema::Resurrect => Decision::Resurrect {
                resurrect: require_bool(value, "resurrect")?,
            },
            ResponseSchema::Poison { .. } => Decision::Poison {
                poison: require_bool(value, "poison")?,
                target: optional_str(value, "name"),
            },
            ResponseSchema::Seer { .. } => Decision::Seer {
                target: require_str(value, "name")?,
            },
            ResponseSchema::Hunter { .. } => Decision::Hunter {
                shoot: require_bool(value, "shoot")?,
                target: optional_str(value, "name"),
            },
        };

        self.validate(&decision)?;
        Ok(decision)
    }
}

fn require_bool(value: &Value, field: &str) -> Result<bool, DomainError> {
    value.get(field).and_then(Value::as_bool).ok_or_else(|| {
        DomainError::MalformedResponse(format!("missing boolean field '{}'", field))
    })
}

fn require_str(value: &Value, field: &str) -> Result<String, DomainError> {
    optional_str(value, field).ok_or_else(|| {
        DomainError::MalformedResponse(format!("missing string field '{}'", field))
    })
}

fn optional_str(value: &Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidates() -> Vec<String> {
        vec!["Alice".to_string(), "Bob".to_string()]
    }

    #[test]
    fn test_parse_vote() {
        let schema = ResponseSchema::Vote {
            candidates: candidates(),
        };
        let decision = schema.parse_response(&json!({"vote": "Bob"})).unwrap();
        assert_eq!(
            decision,
            Decision::Vote {
                target: "Bob".to_string()
            }
        );
    }

    #[test]
    fn test_parse_vote_rejects_unknown_name() {
        let schema = ResponseSchema::Vote {
            candidates: candidates(),
        };
        assert!(matches!(
            schema.parse_response(&json!({"vote": "Mallory"})),
            Err(DomainError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn test_parse_missing_field() {
        assert!(matches!(
            ResponseSchema::Discussion.parse_response(&json!({})),
            Err(DomainError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_poison_with_null_name() {
        let schema = ResponseSchema::Poison {
            candidates: candidates(),
        };
        let decision = schema
            .parse_response(&json!({"poison": true, "name": null}))
            .unwrap();
        assert_eq!(
            decision,
            Decision::Poison {
                poison: true,
                target: None
            }
        );
        assert_eq!(decision.action_target(), None);
    }

    #[test]
    fn test_parse_hunter_shot() {
        let schema = ResponseSchema::Hunter {
            candidates: candidates(),
        };
        let decision = schema
            .parse_response(&json!({"shoot": true, "name": " Alice "}))
            .unwrap();
        assert_eq!(decision.action_target(), Some("Alice"));
    }

    #[test]
    fn test_extract_json_object_rejects_arrays() {
        assert!(extract_json_object("[1, 2]").is_none());
        assert!(extract_json_object("} backwards {").is_none());
    }
}
