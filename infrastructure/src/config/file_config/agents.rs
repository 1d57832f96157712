//! Agent configuration from TOML (`[agents]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use werewolf_domain::Role;

/// Which implementation drives the players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    /// Local rule-following bots
    #[default]
    Heuristic,
    /// A chat completion model, see `[llm]`
    Llm,
}

impl std::str::FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "heuristic" | "bot" => Ok(AgentKind::Heuristic),
            "llm" | "model" => Ok(AgentKind::Llm),
            other => Err(format!("Unknown agent kind: {}. Valid: heuristic, llm", other)),
        }
    }
}

/// Raw agent configuration from TOML
///
/// # Example
///
/// ```toml
/// [agents]
/// kind = "heuristic"              # or "llm"
/// seed = 42                       # optional, for reproducible batches
/// enhanced_roles = ["werewolf"]   # roles that receive extra strategy guidance
/// save_probability = 0.5          # heuristic witch
/// poison_probability = 0.3        # heuristic witch
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentsConfig {
    pub kind: AgentKind,
    pub seed: Option<u64>,
    pub enhanced_roles: Vec<Role>,
    /// Chance that a heuristic witch uses her healing potion when offered
    pub save_probability: f64,
    /// Chance that a heuristic witch uses her poison when offered
    pub poison_probability: f64,
}

impl Default for FileAgentsConfig {
    fn default() -> Self {
        Self {
            kind: AgentKind::default(),
            seed: None,
            enhanced_roles: Vec::new(),
            save_probability: 0.5,
            poison_probability: 0.3,
        }
    }
}

impl FileAgentsConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (field, value) in [
            ("agents.save_probability", self.save_probability),
            ("agents.poison_probability", self.poison_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigValidationError::InvalidProbability { field, value });
            }
        }
        Ok(())
    }

    pub fn is_enhanced(&self, role: Role) -> bool {
        self.enhanced_roles.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_agents_section() {
        let toml_str = r#"
[agents]
kind = "llm"
seed = 7
enhanced_roles = ["werewolf", "seer"]
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.agents.kind, AgentKind::Llm);
        assert_eq!(config.agents.seed, Some(7));
        assert!(config.agents.is_enhanced(Role::Seer));
        assert!(!config.agents.is_enhanced(Role::Witch));
        assert_eq!(config.agents.save_probability, 0.5);
    }

    #[test]
    fn test_probability_out_of_range() {
        let config = FileAgentsConfig {
            poison_probability: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidProbability {
                field: "agents.poison_probability",
                ..
            })
        ));
    }

    #[test]
    fn test_agent_kind_from_str() {
        assert_eq!("LLM".parse::<AgentKind>().ok(), Some(AgentKind::Llm));
        assert_eq!("bot".parse::<AgentKind>().ok(), Some(AgentKind::Heuristic));
        assert!("human".parse::<AgentKind>().is_err());
    }
}
