//! Lookup from player names to their agents

use crate::ports::player_agent::PlayerAgent;
use std::sync::Arc;

/// The agents seated at one game, addressable by player name
#[derive(Clone, Default)]
pub struct Seats {
    agents: Vec<Arc<dyn PlayerAgent>>,
}

impl Seats {
    pub fn new(agents: Vec<Arc<dyn PlayerAgent>>) -> Self {
        Self { agents }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn PlayerAgent>> {
        self.agents.iter().find(|a| a.name() == name)
    }

    /// The agents for `names`, in the order given; unknown names are skipped
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Vec<Arc<dyn PlayerAgent>> {
        names
            .iter()
            .filter_map(|n| self.get(n.as_ref()).cloned())
            .collect()
    }
}
