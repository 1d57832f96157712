//! Ordered resolution of the night's secret actions
//!
//! One night runs these steps, in order, over a single
//! [`PendingNightOutcome`]:
//!
//! 1. Werewolf nomination: deliberation then a vote in a werewolf-only group
//! 2. Healing (witch): may cancel the nomination, once per game
//! 3. Poison (witch): an independent kill, once per game, never on a night
//!    the same witch healed
//! 4. Clairvoyance (seer): one role revealed privately to the seer
//! 5. Revenge shot (hunter): only if the hunter was nominated and not poisoned
//!
//! Nothing is committed here; the caller turns the outcome into a death set.

use crate::ports::player_agent::PlayerAgent;
use crate::use_cases::broadcast::BroadcastGroup;
use crate::use_cases::narrator::Narrator;
use crate::use_cases::seats::Seats;
use crate::use_cases::turn_scheduler::{ScheduleError, TurnScheduler};
use tracing::{debug, info};
use werewolf_domain::{
    GameState, Message, Narration, NightAction, PendingNightOutcome, ResponseSchema, Role, Roster,
};

/// Applies each role's night action
#[derive(Debug, Clone, Copy)]
pub struct RoleResolver {
    scheduler: TurnScheduler,
    max_discussion_rounds: usize,
    narrator: Narrator,
}

impl RoleResolver {
    pub fn new(scheduler: TurnScheduler, max_discussion_rounds: usize) -> Self {
        Self {
            scheduler,
            max_discussion_rounds,
            narrator: Narrator,
        }
    }

    /// Run every night step for the living players of `roster`.
    ///
    /// `town` is the group of every living player; role turns are announced
    /// there while the actions themselves stay private.
    pub async fn resolve_night(
        &self,
        roster: &Roster,
        state: &mut GameState,
        seats: &Seats,
        town: &mut BroadcastGroup<'_>,
    ) -> Result<PendingNightOutcome, ScheduleError> {
        let mut pending = PendingNightOutcome::new();

        pending.nominated_kill = self.nominate(roster, seats, town).await?;
        self.witch_turn(roster, state, seats, town, &mut pending)
            .await?;
        self.seer_turn(roster, seats, town).await?;

        for hunter in avengers(roster) {
            if !pending.grants_revenge_to(&hunter) {
                continue;
            }
            let candidates: Vec<String> = roster
                .alive_names()
                .into_iter()
                .filter(|n| !pending.is_pending_death(n))
                .collect();
            pending.shot = self.revenge_shot(&hunter, candidates, seats, town).await?;
        }

        debug!("Night outcome: {:?}", pending);
        Ok(pending)
    }

    /// Werewolf deliberation and vote. Returns the nominated player.
    async fn nominate(
        &self,
        roster: &Roster,
        seats: &Seats,
        town: &BroadcastGroup<'_>,
    ) -> Result<Option<String>, ScheduleError> {
        let wolves = holders(roster, NightAction::Nominate);
        if wolves.is_empty() {
            return Ok(None);
        }
        let excluded: Vec<&str> = wolves.iter().map(String::as_str).collect();
        let others = roster.alive_names_except(&excluded);

        let mut den = BroadcastGroup::open(
            "werewolves",
            seats.select(&wolves),
            Some(
                self.narrator
                    .announce(Narration::werewolf_discussion(&wolves, &others)),
            ),
            town.transcript(),
        )
        .await?;

        let talk = self
            .scheduler
            .round_robin_discussion(&mut den, self.max_discussion_rounds)
            .await?;
        debug!(
            "Werewolf discussion: agreed={} after {} solicitations",
            talk.agreed, talk.solicitations
        );

        den.broadcast(&[self.narrator.announce(Narration::werewolf_vote())])
            .await?;
        let vote = self
            .scheduler
            .fanout_vote(&den, &roster.alive_names())
            .await?;

        let mut results: Vec<Message> = vote.replies.iter().map(|r| r.message.clone()).collect();
        results.push(self.narrator.announce(Narration::werewolf_result(
            &vote.outcome.tally,
            &vote.outcome.target,
        )));
        den.broadcast(&results).await?;
        den.close();

        info!("Werewolves nominated {}", vote.outcome.target);
        Ok(Some(vote.outcome.target))
    }

    async fn witch_turn(
        &self,
        roster: &Roster,
        state: &mut GameState,
        seats: &Seats,
        town: &mut BroadcastGroup<'_>,
        pending: &mut PendingNightOutcome,
    ) -> Result<(), ScheduleError> {
        let witches = holders(roster, NightAction::SaveOrPoison);
        if witches.is_empty() {
            return Ok(());
        }
        town.broadcast(&[self.narrator.announce(Narration::witch_turn())])
            .await?;

        for name in witches {
            let Some(witch) = seats.get(&name) else {
                continue;
            };

            let mut saved = false;
            if state.healing_available()
                && let Some(victim) = pending.nominated_kill.clone()
                && victim != name
            {
                let prompt = self
                    .narrator
                    .announce(Narration::witch_resurrect(&name, &victim));
                let reply = town
                    .ask(witch.as_ref(), Some(&prompt), &ResponseSchema::Resurrect)
                    .await?;
                if reply.decision.resurrects() {
                    pending.cancel_nomination();
                    state.consume_healing();
                    saved = true;
                    info!("{} saved {}", name, victim);
                }
            }

            if state.poison_available() && !saved {
                let schema = ResponseSchema::Poison {
                    candidates: roster.alive_names_except(&[name.as_str()]),
                };
                let prompt = self.narrator.announce(Narration::witch_poison(&name));
                let reply = town.ask(witch.as_ref(), Some(&prompt), &schema).await?;
                if let Some(target) = reply.decision.action_target() {
                    pending.poisoned = Some(target.to_string());
                    state.consume_poison();
                    info!("{} poisoned {}", name, target);
                }
            }
        }
        Ok(())
    }

    async fn seer_turn(
        &self,
        roster: &Roster,
        seats: &Seats,
        town: &mut BroadcastGroup<'_>,
    ) -> Result<(), ScheduleError> {
        let seers = holders(roster, NightAction::Divine);
        if seers.is_empty() {
            return Ok(());
        }
        town.broadcast(&[self.narrator.announce(Narration::seer_turn())])
            .await?;

        for name in seers {
            let Some(seer) = seats.get(&name) else {
                continue;
            };
            let candidates = roster.alive_names_except(&[name.as_str()]);
            if candidates.is_empty() {
                continue;
            }

            let prompt = self
                .narrator
                .announce(Narration::seer_prompt(&name, &candidates));
            let schema = ResponseSchema::Seer { candidates };
            let reply = town.ask(seer.as_ref(), Some(&prompt), &schema).await?;

            if let Some(target) = reply.decision.action_target()
                && let Some(role) = roster.role_of(target)
            {
                let reveal = self
                    .narrator
                    .announce(Narration::seer_result(&name, target, role));
                town.transcript().private_message(&name, &reveal);
                seer.observe(std::slice::from_ref(&reveal)).await?;
                debug!("{} checked {}", name, target);
            }
        }
        Ok(())
    }

    /// Offer `hunter` a shot at one of `candidates`. Returns the target.
    pub async fn revenge_shot(
        &self,
        hunter: &str,
        candidates: Vec<String>,
        seats: &Seats,
        town: &BroadcastGroup<'_>,
    ) -> Result<Option<String>, ScheduleError> {
        let Some(agent) = seats.get(hunter) else {
            return Ok(None);
        };
        if candidates.is_empty() {
            return Ok(None);
        }

        let prompt = self.narrator.announce(Narration::hunter_prompt(hunter));
        let schema = ResponseSchema::Hunter { candidates };
        let reply = town.ask(agent.as_ref(), Some(&prompt), &schema).await?;

        let shot = reply.decision.action_target().map(str::to_string);
        if let Some(target) = &shot {
            info!("{} shot {}", hunter, target);
        }
        Ok(shot)
    }
}

/// Living players whose role performs `action` at night, in speaking order
fn holders(roster: &Roster, action: NightAction) -> Vec<String> {
    roster
        .alive()
        .filter(|p| p.role().profile().night_action == Some(action))
        .map(|p| p.name().to_string())
        .collect()
}

/// Living players whose role grants a revenge shot on death
fn avengers(roster: &Roster) -> Vec<String> {
    roster
        .alive()
        .filter(|p| grants_revenge(p.role()))
        .map(|p| p.name().to_string())
        .collect()
}

pub fn grants_revenge(role: Role) -> bool {
    role.profile().revenge_on_death
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::conversation_logger::NoConversationLogger;
    use crate::ports::progress::NoProgress;
    use crate::testing::{ScriptedAgent, vote};
    use crate::use_cases::transcript::Transcript;
    use std::sync::Arc;
    use werewolf_domain::{Decision, Player};

    struct Table {
        roster: Roster,
        agents: Vec<Arc<ScriptedAgent>>,
        seats: Seats,
    }

    impl Table {
        fn agent(&self, name: &str) -> &Arc<ScriptedAgent> {
            self.agents.iter().find(|a| a.name() == name).unwrap()
        }
    }

    /// Wolves: Ann, Ben. Seer: Cat. Witch: Dan. Hunter: Eve. Villager: Fay.
    fn table(scripts: Vec<ScriptedAgent>) -> Table {
        let roster = Roster::new(vec![
            Player::new("Ann", Role::Werewolf),
            Player::new("Ben", Role::Werewolf),
            Player::new("Cat", Role::Seer),
            Player::new("Dan", Role::Witch),
            Player::new("Eve", Role::Hunter),
            Player::new("Fay", Role::Villager),
        ])
        .unwrap();

        let mut agents: Vec<Arc<ScriptedAgent>> = scripts.into_iter().map(Arc::new).collect();
        for p in roster.players() {
            if !agents.iter().any(|a| a.name() == p.name()) {
                agents.push(Arc::new(ScriptedAgent::new(p.name())));
            }
        }
        let seats = Seats::new(
            agents
                .iter()
                .map(|a| Arc::clone(a) as Arc<dyn PlayerAgent>)
                .collect(),
        );
        Table {
            roster,
            agents,
            seats,
        }
    }

    fn wolves_pick(target: &str) -> Vec<ScriptedAgent> {
        vec![
            ScriptedAgent::new("Ann").script(vote(target)),
            ScriptedAgent::new("Ben").script(vote(target)),
        ]
    }

    async fn resolve(table: &Table, state: &mut GameState) -> PendingNightOutcome {
        let transcript = Transcript::new(1, &NoProgress, &NoConversationLogger);
        let mut town = BroadcastGroup::open(
            "town",
            table.seats.select(&table.roster.alive_names()),
            None,
            transcript,
        )
        .await
        .unwrap();
        RoleResolver::new(TurnScheduler::default(), 3)
            .resolve_night(&table.roster, state, &table.seats, &mut town)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_plain_kill_without_abilities() {
        let table = table(wolves_pick("Fay"));
        let mut state = GameState::new();

        let pending = resolve(&table, &mut state).await;

        assert_eq!(pending.nominated_kill.as_deref(), Some("Fay"));
        assert_eq!(pending.death_set().names(), &["Fay".to_string()]);
        assert!(state.healing_available());
        assert!(state.poison_available());
        // The witch was offered both potions and declined
        assert_eq!(table.agent("Dan").asked_kinds(), vec!["resurrect", "poison"]);
    }

    #[tokio::test]
    async fn test_witch_save_cancels_nomination_and_skips_poison() {
        let mut scripts = wolves_pick("Fay");
        scripts.push(ScriptedAgent::new("Dan").script(Decision::Resurrect { resurrect: true }));
        let table = table(scripts);
        let mut state = GameState::new();

        let pending = resolve(&table, &mut state).await;

        assert!(pending.nominated_kill.is_none());
        assert!(pending.death_set().is_empty());
        assert!(!state.healing_available());
        assert!(state.poison_available());
        assert_eq!(table.agent("Dan").asked_kinds(), vec!["resurrect"]);
    }

    #[tokio::test]
    async fn test_witch_cannot_save_herself() {
        let table = table(wolves_pick("Dan"));
        let mut state = GameState::new();

        let pending = resolve(&table, &mut state).await;

        assert_eq!(pending.nominated_kill.as_deref(), Some("Dan"));
        assert_eq!(table.agent("Dan").asked_kinds(), vec!["poison"]);
        assert!(state.healing_available());
    }

    #[tokio::test]
    async fn test_exhausted_healing_is_not_offered() {
        let table = table(wolves_pick("Fay"));
        let mut state = GameState::new();
        state.consume_healing();
        state.consume_poison();

        resolve(&table, &mut state).await;

        assert!(table.agent("Dan").asked().is_empty());
    }

    #[tokio::test]
    async fn test_poison_adds_independent_death() {
        let mut scripts = wolves_pick("Fay");
        scripts.push(ScriptedAgent::new("Dan").script(Decision::Poison {
            poison: true,
            target: Some("Ann".to_string()),
        }));
        let table = table(scripts);
        let mut state = GameState::new();

        let pending = resolve(&table, &mut state).await;

        assert_eq!(
            pending.death_set().names(),
            &["Fay".to_string(), "Ann".to_string()]
        );
        assert!(!state.poison_available());
    }

    #[tokio::test]
    async fn test_seer_learns_role_privately() {
        let mut scripts = wolves_pick("Fay");
        scripts.push(ScriptedAgent::new("Cat").script(Decision::Seer {
            target: "Ben".to_string(),
        }));
        let table = table(scripts);

        resolve(&table, &mut GameState::new()).await;

        let reveal = "[Only for Cat] Ben is a Werewolf.";
        assert!(table.agent("Cat").observed().iter().any(|m| m.content == reveal));
        assert!(!table.agent("Fay").observed().iter().any(|m| m.content == reveal));
    }

    #[tokio::test]
    async fn test_hunter_shoots_when_killed_by_wolves() {
        let mut scripts = wolves_pick("Eve");
        scripts.push(ScriptedAgent::new("Eve").script(Decision::Hunter {
            shoot: true,
            target: Some("Ann".to_string()),
        }));
        let table = table(scripts);

        let pending = resolve(&table, &mut GameState::new()).await;

        assert_eq!(pending.shot.as_deref(), Some("Ann"));
        assert_eq!(
            pending.death_set().names(),
            &["Eve".to_string(), "Ann".to_string()]
        );
        // The hunter may not target himself
        let (_, schema) = table.agent("Eve").asked().pop().unwrap();
        assert!(!schema.candidates().contains(&"Eve".to_string()));
    }

    #[tokio::test]
    async fn test_hunter_cannot_shoot_players_already_dying() {
        let mut scripts = wolves_pick("Eve");
        scripts.push(ScriptedAgent::new("Dan").script(Decision::Poison {
            poison: true,
            target: Some("Fay".to_string()),
        }));
        let table = table(scripts);

        let pending = resolve(&table, &mut GameState::new()).await;

        let (_, schema) = table.agent("Eve").asked().pop().unwrap();
        assert_eq!(schema.kind(), "hunter");
        assert_eq!(schema.candidates(), &["Ann", "Ben", "Cat", "Dan"]);
        assert_eq!(pending.death_set().len(), 2);
    }

    #[tokio::test]
    async fn test_wolf_discussion_stops_at_round_cap_without_agreement() {
        let mut scripts = Vec::new();
        for name in ["Ann", "Ben"] {
            let mut agent = ScriptedAgent::new(name).script(vote("Fay"));
            for _ in 0..5 {
                agent = agent.script(Decision::Discussion {
                    reach_agreement: false,
                });
            }
            scripts.push(agent);
        }
        let table = table(scripts);

        resolve(&table, &mut GameState::new()).await;

        // 3 rounds of 2 speakers, then the vote
        for wolf in ["Ann", "Ben"] {
            let talks = table
                .agent(wolf)
                .asked_kinds()
                .into_iter()
                .filter(|k| *k == "discussion")
                .count();
            assert_eq!(talks, 3);
            assert_eq!(table.agent(wolf).asked_kinds().last(), Some(&"vote"));
        }
    }

    #[tokio::test]
    async fn test_poisoned_hunter_gets_no_shot() {
        let mut scripts = wolves_pick("Eve");
        scripts.push(ScriptedAgent::new("Dan").script(Decision::Poison {
            poison: true,
            target: Some("Eve".to_string()),
        }));
        let table = table(scripts);

        let pending = resolve(&table, &mut GameState::new()).await;

        assert!(pending.shot.is_none());
        assert!(table.agent("Eve").asked().is_empty());
        assert_eq!(pending.death_set().len(), 1);
    }

    #[tokio::test]
    async fn test_wolf_votes_stay_in_the_den() {
        let table = table(wolves_pick("Fay"));

        resolve(&table, &mut GameState::new()).await;

        let leaked = |name: &str| {
            table
                .agent(name)
                .observed()
                .iter()
                .any(|m| m.speaker == "Ann" || m.content.contains("werewolves chose"))
        };
        assert!(leaked("Ben"));
        assert!(!leaked("Fay"));
        assert!(!leaked("Cat"));
    }

    #[test]
    fn test_holders_follow_role_profiles() {
        let table = table(Vec::new());
        assert_eq!(holders(&table.roster, NightAction::Nominate), vec!["Ann", "Ben"]);
        assert_eq!(holders(&table.roster, NightAction::Divine), vec!["Cat"]);
        assert_eq!(avengers(&table.roster), vec!["Eve"]);
    }
}
