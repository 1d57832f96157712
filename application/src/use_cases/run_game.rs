//! Run Game use case
//!
//! Seats a roster, then drives one game through its phases until a faction
//! wins or the round cap is reached.

use crate::config::GameConfig;
use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::ports::player_agent::{AgentError, AgentFactory, AgentSeat};
use crate::ports::progress::{GameProgressNotifier, NoProgress};
use crate::use_cases::broadcast::BroadcastGroup;
use crate::use_cases::narrator::Narrator;
use crate::use_cases::role_resolver::{RoleResolver, grants_revenge};
use crate::use_cases::seats::Seats;
use crate::use_cases::transcript::Transcript;
use crate::use_cases::turn_scheduler::{ScheduleError, TurnScheduler};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use werewolf_domain::{
    DeathSet, DomainError, Faction, GamePhase, GameResult, GameState, Message, Narration,
    PendingNightOutcome, Player, Role, Roster, WinCheck, WinEvaluator,
};

/// Names players are drawn from
pub const NAME_POOL: [&str; 40] = [
    "Ada", "Alan", "Alice", "Amos", "Bea", "Bob", "Boris", "Carl", "Carol", "Cleo", "Dave",
    "Dina", "Edith", "Eli", "Emil", "Eve", "Faye", "Felix", "Gina", "Gus", "Hana", "Hugo",
    "Ida", "Ivan", "Jade", "Jon", "Kira", "Leo", "Lena", "Mara", "Milo", "Nina", "Omar",
    "Pia", "Quinn", "Rosa", "Sami", "Tess", "Uma", "Vic",
];

/// Errors that abort a game
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid game setup: {0}")]
    InvalidSetup(String),

    #[error("Invalid roster: {0}")]
    Roster(#[source] DomainError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error("Vote could not be resolved: {0}")]
    Vote(#[source] DomainError),
}

impl From<ScheduleError> for GameError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::Agent(e) => GameError::Agent(e),
            ScheduleError::Vote(e) => GameError::Vote(e),
        }
    }
}

/// How a finished game ended
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub winner: Faction,
    pub total_rounds: u32,
    pub roster: Roster,
}

/// One game in progress
///
/// Owns the roster and the game state exclusively; every other component
/// works on references handed out between solicitations.
pub struct GameSession<'t> {
    roster: Roster,
    seats: Seats,
    state: GameState,
    phase: GamePhase,
    pending: PendingNightOutcome,
    day_target: Option<String>,
    max_game_rounds: u32,
    scheduler: TurnScheduler,
    resolver: RoleResolver,
    narrator: Narrator,
    transcript: Transcript<'t>,
}

impl<'t> GameSession<'t> {
    pub fn new(roster: Roster, seats: Seats, config: &GameConfig, transcript: Transcript<'t>) -> Self {
        let scheduler = TurnScheduler::new(config.tie_break, config.concurrent_votes);
        Self {
            roster,
            seats,
            state: GameState::new(),
            phase: GamePhase::initial(),
            pending: PendingNightOutcome::new(),
            day_target: None,
            max_game_rounds: config.max_game_rounds,
            scheduler,
            resolver: RoleResolver::new(scheduler, config.max_discussion_rounds),
            narrator: Narrator,
            transcript,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play the game to the end. Any agent failure aborts it.
    pub async fn run(mut self) -> Result<SessionOutcome, GameError> {
        self.assign_roles().await?;

        loop {
            match self.phase {
                GamePhase::Finished(winner) => {
                    info!(
                        "Game {} finished after {} rounds: {} win",
                        self.transcript.game_id(),
                        self.state.round(),
                        winner
                    );
                    return Ok(SessionOutcome {
                        winner,
                        total_rounds: self.state.round(),
                        roster: self.roster,
                    });
                }
                GamePhase::Night(n) if n > self.max_game_rounds => {
                    let winner = WinEvaluator::round_cap_winner(&self.roster);
                    warn!("Round cap of {} reached, {} win", self.max_game_rounds, winner);
                    self.announce_to_all(Narration::round_cap_reached(self.max_game_rounds))
                        .await?;
                    self.phase = GamePhase::Finished(winner);
                }
                phase => {
                    self.transcript.phase(&phase);
                    let win = self.step(phase).await?;
                    self.phase = phase.next(win);
                }
            }
        }
    }

    /// Perform the work of `phase`. Only `CheckWin` yields a verdict.
    async fn step(&mut self, phase: GamePhase) -> Result<WinCheck, GameError> {
        match phase {
            GamePhase::Night(n) => self.night(n).await?,
            GamePhase::Dawn(n) => self.dawn(n).await?,
            GamePhase::CheckWin(_, _) => return self.check_win().await,
            GamePhase::DayDiscussion(n) => self.day_discussion(n).await?,
            GamePhase::DayVote(n) => self.day_vote(n).await?,
            GamePhase::RevengeCheck(n) => self.revenge_check(n).await?,
            GamePhase::Finished(faction) => return Ok(WinCheck::Winner(faction)),
        }
        Ok(WinCheck::Continue)
    }

    async fn assign_roles(&self) -> Result<(), GameError> {
        for player in self.roster.players() {
            if let Some(agent) = self.seats.get(player.name()) {
                let msg = self.narrator.role_assignment(player.name(), player.role());
                self.transcript.private_message(player.name(), &msg);
                agent.observe(std::slice::from_ref(&msg)).await?;
            }
        }
        Ok(())
    }

    async fn open_group(
        &self,
        name: String,
        members: &[String],
        announcement: Option<Message>,
    ) -> Result<BroadcastGroup<'t>, GameError> {
        let group =
            BroadcastGroup::open(name, self.seats.select(members), announcement, self.transcript)
                .await?;
        Ok(group)
    }

    async fn night(&mut self, round: u32) -> Result<(), GameError> {
        if round > 1 {
            self.state.advance_round();
        }
        debug!("Night {} begins", round);

        let alive = self.roster.alive_names();
        let mut town = self
            .open_group(
                format!("night-{round}"),
                &alive,
                Some(self.narrator.announce(Narration::night_falls())),
            )
            .await?;

        self.pending = self
            .resolver
            .resolve_night(&self.roster, &mut self.state, &self.seats, &mut town)
            .await?;
        town.close();
        Ok(())
    }

    async fn dawn(&mut self, round: u32) -> Result<(), GameError> {
        let audience = self.roster.alive_names();
        let deaths = std::mem::take(&mut self.pending).death_set();
        let died = self.commit(&deaths, round);

        let text = if died.is_empty() {
            Narration::peaceful_night().to_string()
        } else {
            Narration::dawn_with_deaths(&died)
        };
        let dawn = self
            .open_group(format!("dawn-{round}"), &audience, Some(self.narrator.announce(text)))
            .await?;
        dawn.close();
        Ok(())
    }

    async fn check_win(&self) -> Result<WinCheck, GameError> {
        let win = WinEvaluator::evaluate_roster(&self.roster);
        match win.winner() {
            Some(Faction::Werewolves) => {
                let wolves = self.roster.alive_with_role(Role::Werewolf);
                let villagers_left = self.roster.alive_in_faction(Faction::Villagers).len();
                self.announce_to_all(Narration::werewolves_win(&wolves, villagers_left))
                    .await?;
            }
            Some(Faction::Villagers) => {
                self.announce_to_all(Narration::villagers_win().to_string())
                    .await?;
            }
            None => {}
        }
        Ok(win)
    }

    async fn day_discussion(&mut self, round: u32) -> Result<(), GameError> {
        let alive = self.roster.alive_names();
        let mut group = self
            .open_group(
                format!("day-{round}"),
                &alive,
                Some(self.narrator.announce(Narration::day_discussion(&alive))),
            )
            .await?;
        self.scheduler.sequential_pass(&mut group).await?;
        group.close();
        Ok(())
    }

    async fn day_vote(&mut self, round: u32) -> Result<(), GameError> {
        let alive = self.roster.alive_names();
        let mut group = self
            .open_group(
                format!("vote-{round}"),
                &alive,
                Some(self.narrator.announce(Narration::day_vote(&alive))),
            )
            .await?;

        let vote = self.scheduler.fanout_vote(&group, &alive).await?;
        let mut results: Vec<Message> = vote.replies.iter().map(|r| r.message.clone()).collect();
        results.push(self.narrator.announce(Narration::day_result(
            &vote.outcome.tally,
            &vote.outcome.target,
        )));
        group.broadcast(&results).await?;
        group.close();

        info!("Day {} vote: {} eliminated", round, vote.outcome.target);
        self.day_target = Some(vote.outcome.target);
        Ok(())
    }

    async fn revenge_check(&mut self, round: u32) -> Result<(), GameError> {
        let voted = self.day_target.take();
        let mut shot = None;

        if let Some(target) = &voted
            && self.roster.role_of(target).is_some_and(grants_revenge)
        {
            let alive = self.roster.alive_names();
            let mut group = self.open_group(format!("revenge-{round}"), &alive, None).await?;
            let candidates = self.roster.alive_names_except(&[target.as_str()]);
            shot = self
                .resolver
                .revenge_shot(target, candidates, &self.seats, &group)
                .await?;

            if let Some(victim) = &shot {
                group
                    .broadcast(&[self.narrator.announce(Narration::hunter_shot(target, victim))])
                    .await?;
            }
            group.close();
        }

        self.commit(&DeathSet::from_slots([voted, shot]), round);
        Ok(())
    }

    fn commit(&mut self, deaths: &DeathSet, round: u32) -> Vec<String> {
        let died = self.roster.commit_deaths(deaths.names(), round);
        if !died.is_empty() {
            info!("Round {}: {} died", round, died.join(", "));
        }
        self.transcript.deaths(round, &died);
        died
    }

    /// Announce to every seated player, dead or alive
    async fn announce_to_all(&self, text: String) -> Result<(), GameError> {
        let everyone: Vec<String> = self
            .roster
            .players()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        let group = self
            .open_group("table".to_string(), &everyone, Some(self.narrator.announce(text)))
            .await?;
        group.close();
        Ok(())
    }
}

/// Input for the RunGame use case
#[derive(Debug, Clone, Copy)]
pub struct RunGameInput {
    pub game_id: u32,
    /// Seed for name drawing; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl RunGameInput {
    pub fn new(game_id: u32) -> Self {
        Self {
            game_id,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Use case for running a single game
pub struct RunGameUseCase<F: AgentFactory + 'static> {
    factory: Arc<F>,
    config: GameConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<F: AgentFactory + 'static> RunGameUseCase<F> {
    pub fn new(factory: Arc<F>, config: GameConfig) -> Self {
        Self {
            factory,
            config,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunGameInput) -> GameResult {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks.
    ///
    /// Never fails: a game that aborts yields a failed [`GameResult`].
    pub async fn execute_with_progress(
        &self,
        input: RunGameInput,
        progress: &dyn GameProgressNotifier,
    ) -> GameResult {
        progress.on_game_start(input.game_id, self.config.total_players());

        let result = match self.play(input, progress).await {
            Ok(outcome) => GameResult::completed(
                input.game_id,
                outcome.winner,
                outcome.total_rounds,
                &outcome.roster,
                timestamp(),
            ),
            Err(e) => {
                warn!("Game {} failed: {}", input.game_id, e);
                GameResult::failed(input.game_id, e.to_string(), timestamp())
            }
        };

        progress.on_game_complete(&result);
        result
    }

    async fn play(
        &self,
        input: RunGameInput,
        progress: &dyn GameProgressNotifier,
    ) -> Result<SessionOutcome, GameError> {
        let mut rng = match input.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let roster = build_roster(&self.config, &mut rng)?;
        let seats = self.seat(&roster)?;
        info!(
            "Game {} seated {} players",
            input.game_id,
            roster.len()
        );

        let transcript = Transcript::new(input.game_id, progress, self.conversation_logger.as_ref());
        GameSession::new(roster, seats, &self.config, transcript)
            .run()
            .await
    }

    fn seat(&self, roster: &Roster) -> Result<Seats, GameError> {
        let wolves = roster.alive_with_role(Role::Werewolf);
        let agents = roster
            .players()
            .iter()
            .map(|player| {
                let known_allies = if player.role().is_werewolf() {
                    wolves.iter().filter(|w| *w != player.name()).cloned().collect()
                } else {
                    Vec::new()
                };
                self.factory.create(&AgentSeat {
                    name: player.name().to_string(),
                    role: player.role(),
                    known_allies,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Seats::new(agents))
    }
}

/// Draw names for every seat of `config` and assign the configured roles.
///
/// The roster comes back sorted by name, which is the speaking order.
pub fn build_roster(config: &GameConfig, rng: &mut StdRng) -> Result<Roster, GameError> {
    let roles = config.roles();
    if config.werewolves == 0 {
        return Err(GameError::InvalidSetup("at least one werewolf is required".into()));
    }
    if roles.len() == config.werewolves {
        return Err(GameError::InvalidSetup("at least one villager-side player is required".into()));
    }
    if roles.len() > NAME_POOL.len() {
        return Err(GameError::InvalidSetup(format!(
            "{} players requested but only {} names are available",
            roles.len(),
            NAME_POOL.len()
        )));
    }

    let mut names = NAME_POOL.to_vec();
    names.shuffle(rng);

    let players = names
        .into_iter()
        .zip(roles)
        .map(|(name, role)| Player::new(name, role))
        .collect();
    Roster::new(players).map_err(GameError::Roster)
}

fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
