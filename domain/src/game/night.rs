//! Per-round pending deaths

use serde::{Deserialize, Serialize};

/// Deaths accumulated during one night, before they are committed
///
/// Filled in step by step by the night resolver: the werewolves' nomination,
/// the witch's poison, and the hunter's revenge shot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingNightOutcome {
    pub nominated_kill: Option<String>,
    pub poisoned: Option<String>,
    pub shot: Option<String>,
}

impl PendingNightOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the nomination (life-saving). Returns the saved player.
    pub fn cancel_nomination(&mut self) -> Option<String> {
        self.nominated_kill.take()
    }

    /// Whether `name` gets a revenge shot tonight: killed by the nomination,
    /// and not poisoned.
    pub fn grants_revenge_to(&self, name: &str) -> bool {
        self.nominated_kill.as_deref() == Some(name) && self.poisoned.as_deref() != Some(name)
    }

    /// Whether `name` is already going to die tonight
    pub fn is_pending_death(&self, name: &str) -> bool {
        [&self.nominated_kill, &self.poisoned, &self.shot]
            .into_iter()
            .any(|slot| slot.as_deref() == Some(name))
    }

    /// The de-duplicated union of nomination, poison and shot, in that order
    pub fn death_set(&self) -> DeathSet {
        DeathSet::from_slots([
            self.nominated_kill.clone(),
            self.poisoned.clone(),
            self.shot.clone(),
        ])
    }
}

/// An ordered set of names to be marked dead together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathSet(Vec<String>);

impl DeathSet {
    /// Collect the filled slots, keeping the first occurrence of each name
    pub fn from_slots<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in slots.into_iter().flatten() {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Self(names)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
