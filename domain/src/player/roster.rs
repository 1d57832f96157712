//! The roster of all players in a game

use super::entities::Player;
use super::role::{Faction, Role};
use crate::core::error::DomainError;
use std::collections::HashSet;

/// All players of one game, kept in speaking order (sorted by name)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster, rejecting empty and duplicate-name rosters.
    pub fn new(mut players: Vec<Player>) -> Result<Self, DomainError> {
        if players.is_empty() {
            return Err(DomainError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        for player in &players {
            if !seen.insert(player.name()) {
                return Err(DomainError::DuplicatePlayer(player.name().to_string()));
            }
        }

        players.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(Self { players })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    pub fn role_of(&self, name: &str) -> Option<Role> {
        self.get(name).map(|p| p.role())
    }

    pub fn is_alive(&self, name: &str) -> bool {
        self.get(name).is_some_and(|p| p.is_alive())
    }

    pub fn alive(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_alive())
    }

    pub fn alive_names(&self) -> Vec<String> {
        self.alive().map(|p| p.name().to_string()).collect()
    }

    /// Names of living players holding `role`, in speaking order
    pub fn alive_with_role(&self, role: Role) -> Vec<String> {
        self.alive()
            .filter(|p| p.role() == role)
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Names of living players of `faction`, in speaking order
    pub fn alive_in_faction(&self, faction: Faction) -> Vec<String> {
        self.alive()
            .filter(|p| p.faction() == faction)
            .map(|p| p.name().to_string())
            .collect()
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    pub fn alive_werewolf_count(&self) -> usize {
        self.alive().filter(|p| p.role().is_werewolf()).count()
    }

    /// Living players other than `excluded`, in speaking order
    pub fn alive_names_except(&self, excluded: &[&str]) -> Vec<String> {
        self.alive()
            .filter(|p| !excluded.contains(&p.name()))
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Commit a set of deaths for `round`.
    ///
    /// Unknown or already-dead names are skipped. Returns the names that
    /// actually died, in the order given.
    pub fn commit_deaths(&mut self, names: &[String], round: u32) -> Vec<String> {
        let mut died = Vec::new();
        for name in names {
            if let Some(player) = self.players.iter_mut().find(|p| p.name() == name)
                && player.kill(round)
            {
                died.push(name.clone());
            }
        }
        died
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Roster {
        Roster::new(vec![
            Player::new("Eve", Role::Werewolf),
            Player::new("Alice", Role::Villager),
            Player::new("Carol", Role::Seer),
            Player::new("Bob", Role::Werewolf),
            Player::new("Dave", Role::Hunter),
        ])
        .unwrap()
    }

    #[test]
    fn test_sorted_by_name() {
        let roster = sample();
        assert_eq!(
            roster.alive_names(),
            vec!["Alice", "Bob", "Carol", "Dave", "Eve"]
        );
    }

    #[test]
    fn test_rejects_empty_and_duplicates() {
        assert_eq!(Roster::new(vec![]), Err(DomainError::EmptyRoster));
        assert_eq!(
            Roster::new(vec![
                Player::new("Alice", Role::Villager),
                Player::new("Alice", Role::Seer),
            ]),
            Err(DomainError::DuplicatePlayer("Alice".to_string()))
        );
    }

    #[test]
    fn test_faction_queries() {
        let roster = sample();
        assert_eq!(roster.alive_with_role(Role::Werewolf), vec!["Bob", "Eve"]);
        assert_eq!(roster.alive_werewolf_count(), 2);
        assert_eq!(
            roster.alive_in_faction(Faction::Villagers),
            vec!["Alice", "Carol", "Dave"]
        );
    }

    #[test]
    fn test_commit_deaths_skips_dead_and_unknown() {
        let mut roster = sample();
        let died = roster.commit_deaths(
            &["Alice".to_string(), "Nobody".to_string(), "Alice".to_string()],
            1,
        );
        assert_eq!(died, vec!["Alice"]);
        assert!(!roster.is_alive("Alice"));
        assert_eq!(roster.alive_count(), 4);

        let died_again = roster.commit_deaths(&["Alice".to_string()], 2);
        assert!(died_again.is_empty());
        assert_eq!(roster.get("Alice").unwrap().died_in_round(), Some(1));
    }

    #[test]
    fn test_alive_names_except() {
        let roster = sample();
        assert_eq!(
            roster.alive_names_except(&["Carol", "Eve"]),
            vec!["Alice", "Bob", "Dave"]
        );
    }
}
