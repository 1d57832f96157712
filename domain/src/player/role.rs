//! Roles and factions
//!
//! Every role-specific behavior parameter lives in one static
//! [`RoleProfile`] table, looked up with [`Role::profile`].

use crate::prompt::guidance;
use serde::{Deserialize, Serialize};

/// The two opposed win-condition groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    /// The hidden minority that eliminates at night
    Werewolves,
    /// Everyone else
    Villagers,
}

impl Faction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Faction::Werewolves => "werewolves",
            Faction::Villagers => "villagers",
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a role does when the night comes around
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NightAction {
    /// Joins the werewolf deliberation and nomination vote
    Nominate,
    /// May save the nominated player or poison someone (one-shot each)
    SaveOrPoison,
    /// Learns one living player's true role
    Divine,
}

/// Static behavior parameters of a role
#[derive(Debug)]
pub struct RoleProfile {
    pub faction: Faction,
    pub night_action: Option<NightAction>,
    /// Whether dying by nomination or day vote grants a revenge shot
    pub revenge_on_death: bool,
    pub display_name: &'static str,
    pub guidance: &'static str,
}

static VILLAGER: RoleProfile = RoleProfile {
    faction: Faction::Villagers,
    night_action: None,
    revenge_on_death: false,
    display_name: "Villager",
    guidance: guidance::VILLAGER_NOTES,
};

static WEREWOLF: RoleProfile = RoleProfile {
    faction: Faction::Werewolves,
    night_action: Some(NightAction::Nominate),
    revenge_on_death: false,
    display_name: "Werewolf",
    guidance: guidance::WEREWOLF_NOTES,
};

static SEER: RoleProfile = RoleProfile {
    faction: Faction::Villagers,
    night_action: Some(NightAction::Divine),
    revenge_on_death: false,
    display_name: "Seer",
    guidance: guidance::SEER_NOTES,
};

static WITCH: RoleProfile = RoleProfile {
    faction: Faction::Villagers,
    night_action: Some(NightAction::SaveOrPoison),
    revenge_on_death: false,
    display_name: "Witch",
    guidance: guidance::WITCH_NOTES,
};

static HUNTER: RoleProfile = RoleProfile {
    faction: Faction::Villagers,
    night_action: None,
    revenge_on_death: true,
    display_name: "Hunter",
    guidance: guidance::HUNTER_NOTES,
};

/// A player's secret role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Villager,
    Werewolf,
    Seer,
    Witch,
    Hunter,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Villager,
        Role::Werewolf,
        Role::Seer,
        Role::Witch,
        Role::Hunter,
    ];

    pub fn profile(&self) -> &'static RoleProfile {
        match self {
            Role::Villager => &VILLAGER,
            Role::Werewolf => &WEREWOLF,
            Role::Seer => &SEER,
            Role::Witch => &WITCH,
            Role::Hunter => &HUNTER,
        }
    }

    pub fn faction(&self) -> Faction {
        self.profile().faction
    }

    pub fn is_werewolf(&self) -> bool {
        self.faction() == Faction::Werewolves
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Villager => "villager",
            Role::Werewolf => "werewolf",
            Role::Seer => "seer",
            Role::Witch => "witch",
            Role::Hunter => "hunter",
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.profile().display_name
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "villager" => Ok(Role::Villager),
            "werewolf" | "wolf" => Ok(Role::Werewolf),
            "seer" => Ok(Role::Seer),
            "witch" => Ok(Role::Witch),
            "hunter" => Ok(Role::Hunter),
            other => Err(format!(
                "Unknown role: {}. Valid: villager, werewolf, seer, witch, hunter",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_werewolves_are_minority() {
        for role in Role::ALL {
            assert_eq!(role.is_werewolf(), role == Role::Werewolf);
        }
    }

    #[test]
    fn test_profile_table() {
        assert_eq!(
            Role::Werewolf.profile().night_action,
            Some(NightAction::Nominate)
        );
        assert_eq!(
            Role::Witch.profile().night_action,
            Some(NightAction::SaveOrPoison)
        );
        assert_eq!(Role::Seer.profile().night_action, Some(NightAction::Divine));
        assert!(Role::Villager.profile().night_action.is_none());
        assert!(Role::Hunter.profile().revenge_on_death);
        assert!(!Role::Witch.profile().revenge_on_death);
    }

    #[test]
    fn test_parse_role() {
        assert_eq!("Werewolf".parse::<Role>().ok(), Some(Role::Werewolf));
        assert_eq!("wolf".parse::<Role>().ok(), Some(Role::Werewolf));
        assert_eq!(" seer ".parse::<Role>().ok(), Some(Role::Seer));
        assert!("mayor".parse::<Role>().is_err());
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Hunter).unwrap(), "\"hunter\"");
        assert_eq!(
            serde_json::to_string(&Faction::Werewolves).unwrap(),
            "\"werewolves\""
        );
    }
}
