//! Moderator narration for each step of the game

use crate::core::string::join_names;
use crate::player::Role;

/// Texts the moderator announces
pub struct Narration;

impl Narration {
    /// Prefix for messages only one player should see
    pub fn private(name: &str, text: &str) -> String {
        format!("[Only for {}] {}", name, text)
    }

    pub fn role_assignment(name: &str, role: Role) -> String {
        Self::private(
            name,
            &format!("{}, your role is {}.", name, role.display_name()),
        )
    }

    pub fn night_falls() -> &'static str {
        "Night falls. Everyone close your eyes."
    }

    pub fn werewolf_discussion<S: AsRef<str>>(werewolves: &[S], others: &[S]) -> String {
        format!(
            "Werewolves, open your eyes. Your team is {}. The other living players are {}. \
             Discuss and agree on tonight's target.",
            join_names(werewolves),
            join_names(others)
        )
    }

    pub fn werewolf_vote() -> &'static str {
        "Which player do you want to eliminate tonight? Vote now."
    }

    pub fn werewolf_result(tally: &str, target: &str) -> String {
        format!("Votes: {}. The werewolves chose {}.", tally, target)
    }

    pub fn witch_turn() -> &'static str {
        "Witch, open your eyes."
    }

    pub fn witch_resurrect(witch: &str, victim: &str) -> String {
        Self::private(
            witch,
            &format!(
                "{} was attacked tonight. Do you want to use your healing potion to save them?",
                victim
            ),
        )
    }

    pub fn witch_poison(witch: &str) -> String {
        Self::private(
            witch,
            "Do you want to use your poison tonight? If so, name the player.",
        )
    }

    pub fn seer_turn() -> &'static str {
        "Seer, open your eyes."
    }

    pub fn seer_prompt<S: AsRef<str>>(seer: &str, candidates: &[S]) -> String {
        Self::private(
            seer,
            &format!(
                "Whose role do you want to check tonight? Choose from {}.",
                join_names(candidates)
            ),
        )
    }

    pub fn seer_result(seer: &str, target: &str, role: Role) -> String {
        Self::private(
            seer,
            &format!("{} is a {}.", target, role.display_name()),
        )
    }

    pub fn hunter_prompt(hunter: &str) -> String {
        Self::private(
            hunter,
            "You have been eliminated. Do you want to shoot a player? If so, name them.",
        )
    }

    pub fn dawn_with_deaths<S: AsRef<str>>(dead: &[S]) -> String {
        format!(
            "Day breaks. Last night {} died.",
            join_names(dead)
        )
    }

    pub fn peaceful_night() -> &'static str {
        "Day breaks. Nobody died last night."
    }

    pub fn day_discussion<S: AsRef<str>>(alive: &[S]) -> String {
        format!(
            "The living players are {}. Discuss in turn who you suspect.",
            join_names(alive)
        )
    }

    pub fn day_vote<S: AsRef<str>>(alive: &[S]) -> String {
        format!(
            "Time to vote. Choose one of {} to eliminate. You must vote.",
            join_names(alive)
        )
    }

    pub fn day_result(tally: &str, target: &str) -> String {
        format!("Votes: {}. {} has been voted out.", tally, target)
    }

    pub fn hunter_shot(hunter: &str, target: &str) -> String {
        format!("The hunter {} fired and took {} with them.", hunter, target)
    }

    pub fn werewolves_win<S: AsRef<str>>(werewolves: &[S], villagers_left: usize) -> String {
        format!(
            "Game over: the werewolves win. {} werewolves ({}) remain against {} villagers.",
            werewolves.len(),
            join_names(werewolves),
            villagers_left
        )
    }

    pub fn villagers_win() -> &'static str {
        "Game over: every werewolf is dead. The villagers win."
    }

    pub fn round_cap_reached(max_rounds: u32) -> String {
        format!("The game reached its limit of {} rounds.", max_rounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_prefix() {
        let text = Narration::role_assignment("Alice", Role::Seer);
        assert_eq!(text, "[Only for Alice] Alice, your role is Seer.");
    }

    #[test]
    fn test_dawn_lists_deaths() {
        assert_eq!(
            Narration::dawn_with_deaths(&["Bob", "Carol"]),
            "Day breaks. Last night Bob and Carol died."
        );
    }

    #[test]
    fn test_werewolf_result() {
        assert_eq!(
            Narration::werewolf_result("Bob: 2 votes", "Bob"),
            "Votes: Bob: 2 votes. The werewolves chose Bob."
        );
    }
}
