//! Rule-following bots that need no model
//!
//! They play legally and a little sensibly: nobody votes for themselves
//! when there is another choice, werewolves spare their teammates, the
//! seer does not check the same player twice.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use werewolf_application::ports::player_agent::{
    AgentError, AgentFactory, AgentSeat, PlayerAgent, Reply,
};
use werewolf_domain::{Decision, Message, ResponseSchema};

use crate::config::FileAgentsConfig;

const SPEECHES: [&str; 4] = [
    "I have nothing solid yet. Let's hear from everyone before we vote.",
    "Last night's result tells us something. Watch who stays quiet.",
    "I'm a simple villager. I'll follow whoever makes the most sense.",
    "Someone here is lying. I'll vote on the arguments, not the noise.",
];

/// How often a heuristic witch spends her potions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicProfile {
    pub save_probability: f64,
    pub poison_probability: f64,
}

impl Default for HeuristicProfile {
    fn default() -> Self {
        Self {
            save_probability: 0.5,
            poison_probability: 0.3,
        }
    }
}

impl From<&FileAgentsConfig> for HeuristicProfile {
    fn from(config: &FileAgentsConfig) -> Self {
        Self {
            save_probability: config.save_probability,
            poison_probability: config.poison_probability,
        }
    }
}

struct Mind {
    rng: StdRng,
    checked: HashSet<String>,
}

pub struct HeuristicAgent {
    name: String,
    allies: Vec<String>,
    profile: HeuristicProfile,
    mind: Mutex<Mind>,
}

impl HeuristicAgent {
    pub fn new(seat: &AgentSeat, profile: HeuristicProfile, rng: StdRng) -> Self {
        Self {
            name: seat.name.clone(),
            allies: seat.known_allies.clone(),
            profile,
            mind: Mutex::new(Mind {
                rng,
                checked: HashSet::new(),
            }),
        }
    }

    /// Candidates other than this player and its allies, or all of them
    /// if that leaves nobody
    fn preferred<'c>(&self, candidates: &'c [String], exclude: &HashSet<String>) -> Vec<&'c String> {
        let preferred: Vec<&String> = candidates
            .iter()
            .filter(|c| **c != self.name && !self.allies.contains(c) && !exclude.contains(*c))
            .collect();
        if preferred.is_empty() {
            candidates.iter().collect()
        } else {
            preferred
        }
    }

    fn choose(&self, mind: &mut Mind, candidates: &[String]) -> Result<String, AgentError> {
        let exclude = HashSet::new();
        self.preferred(candidates, &exclude)
            .choose(&mut mind.rng)
            .map(|c| (*c).clone())
            .ok_or_else(|| AgentError::request_failed(&self.name, "no candidates offered"))
    }

    fn think(&self, schema: &ResponseSchema) -> Result<(Decision, String), AgentError> {
        let mut guard = self
            .mind
            .lock()
            .map_err(|_| AgentError::request_failed(&self.name, "agent state poisoned"))?;
        let mind = &mut *guard;

        let answer = match schema {
            ResponseSchema::Speech => {
                let line = SPEECHES[mind.rng.random_range(0..SPEECHES.len())];
                (Decision::Speech, line.to_string())
            }
            ResponseSchema::Discussion => (
                Decision::Discussion {
                    reach_agreement: true,
                },
                "Agreed. Let's settle it in the vote.".to_string(),
            ),
            ResponseSchema::Vote { candidates } => {
                let target = self.choose(mind, candidates)?;
                let content = format!("I vote for {target}.");
                (Decision::Vote { target }, content)
            }
            ResponseSchema::Resurrect => {
                let resurrect = mind.rng.random_bool(self.profile.save_probability);
                let content = if resurrect {
                    "I'll use my healing potion."
                } else {
                    "I'll keep my potion."
                };
                (Decision::Resurrect { resurrect }, content.to_string())
            }
            ResponseSchema::Poison { candidates } => {
                if !candidates.is_empty() && mind.rng.random_bool(self.profile.poison_probability) {
                    let target = self.choose(mind, candidates)?;
                    let content = format!("I poison {target}.");
                    (
                        Decision::Poison {
                            poison: true,
                            target: Some(target),
                        },
                        content,
                    )
                } else {
                    (
                        Decision::Poison {
                            poison: false,
                            target: None,
                        },
                        "I'll keep my poison.".to_string(),
                    )
                }
            }
            ResponseSchema::Seer { candidates } => {
                let unchecked = self.preferred(candidates, &mind.checked);
                let target = unchecked
                    .choose(&mut mind.rng)
                    .map(|c| (*c).clone())
                    .ok_or_else(|| AgentError::request_failed(&self.name, "no candidates offered"))?;
                mind.checked.insert(target.clone());
                let content = format!("I check {target}.");
                (Decision::Seer { target }, content)
            }
            ResponseSchema::Hunter { candidates } => match self.choose(mind, candidates) {
                Ok(target) => {
                    let content = format!("I take {target} with me.");
                    (
                        Decision::Hunter {
                            shoot: true,
                            target: Some(target),
                        },
                        content,
                    )
                }
                Err(_) => (
                    Decision::Hunter {
                        shoot: false,
                        target: None,
                    },
                    "I hold my fire.".to_string(),
                ),
            },
        };
        Ok(answer)
    }
}

#[async_trait]
impl PlayerAgent for HeuristicAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn observe(&self, _messages: &[Message]) -> Result<(), AgentError> {
        Ok(())
    }

    async fn decide(
        &self,
        _prompt: Option<&Message>,
        schema: &ResponseSchema,
    ) -> Result<Reply, AgentError> {
        let (decision, content) = self.think(schema)?;
        Ok(Reply::new(&self.name, content, decision))
    }
}

/// Creates [`HeuristicAgent`]s with per-seat random streams.
///
/// With a base seed every agent gets `seed + n` where `n` counts the agents
/// created so far, so sequential batches replay exactly.
pub struct HeuristicAgentFactory {
    profile: HeuristicProfile,
    seed: Option<u64>,
    created: AtomicU64,
}

impl HeuristicAgentFactory {
    pub fn new(profile: HeuristicProfile, seed: Option<u64>) -> Self {
        Self {
            profile,
            seed,
            created: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &FileAgentsConfig) -> Self {
        Self::new(HeuristicProfile::from(config), config.seed)
    }
}

impl AgentFactory for HeuristicAgentFactory {
    fn create(&self, seat: &AgentSeat) -> Result<Arc<dyn PlayerAgent>, AgentError> {
        let n = self.created.fetch_add(1, Ordering::Relaxed);
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(n)),
            None => StdRng::from_os_rng(),
        };
        Ok(Arc::new(HeuristicAgent::new(seat, self.profile, rng)))
    }
}
