//! Turn-taking and voting inside a broadcast group

use crate::ports::player_agent::{AgentError, Reply};
use crate::use_cases::broadcast::BroadcastGroup;
use futures::future::join_all;
use tracing::{debug, info};
use werewolf_domain::{Ballot, DomainError, ResponseSchema, TieBreak, VoteOutcome};

/// Errors from a scheduled exchange
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error("Vote could not be resolved: {0}")]
    Vote(#[from] DomainError),
}

/// Result of a round-robin discussion
#[derive(Debug, Clone)]
pub struct DiscussionOutcome {
    /// Number of players solicited in total
    pub solicitations: usize,
    /// Whether a complete round ended with agreement
    pub agreed: bool,
    /// The most recent reply, if anyone spoke
    pub last: Option<Reply>,
}

/// Result of a fanout vote
#[derive(Debug, Clone)]
pub struct VoteRound {
    pub ballot: Ballot,
    pub outcome: VoteOutcome,
    /// The voters' replies in member order, for publishing after resolution
    pub replies: Vec<Reply>,
}

/// Drives speaking order and voting
///
/// Stateless apart from its settings; every exchange runs on a group passed
/// in by the caller.
#[derive(Debug, Clone, Copy)]
pub struct TurnScheduler {
    tie_break: TieBreak,
    concurrent_votes: bool,
}

impl TurnScheduler {
    pub fn new(tie_break: TieBreak, concurrent_votes: bool) -> Self {
        Self {
            tie_break,
            concurrent_votes,
        }
    }

    /// Round-robin discussion with early exit on agreement.
    ///
    /// Members speak in order, wrapping, with every reply forwarded to the
    /// rest of the group. After each complete round the most recent reply's
    /// agreement flag is checked. Stops after at most
    /// `max_rounds * members` solicitations.
    pub async fn round_robin_discussion(
        &self,
        group: &mut BroadcastGroup<'_>,
        max_rounds: usize,
    ) -> Result<DiscussionOutcome, AgentError> {
        let speakers = group.len();
        let mut outcome = DiscussionOutcome {
            solicitations: 0,
            agreed: false,
            last: None,
        };
        if speakers == 0 {
            return Ok(outcome);
        }

        let mut scope = group.auto_forward();
        for turn in 1..=max_rounds * speakers {
            let reply = scope
                .speak((turn - 1) % speakers, None, &ResponseSchema::Discussion)
                .await?;
            outcome.solicitations = turn;

            let round_complete = turn % speakers == 0;
            let agreed = reply.decision.reached_agreement();
            outcome.last = Some(reply);

            if round_complete && agreed {
                debug!("Agreement reached after {} turns", turn);
                outcome.agreed = true;
                break;
            }
        }
        Ok(outcome)
    }

    /// Collect one ballot from every member and resolve it.
    ///
    /// Each voter must pick from `candidates`. No reply is forwarded, so no
    /// voter sees another's vote. Resolution starts only once every voter
    /// has answered.
    pub async fn fanout_vote(
        &self,
        group: &BroadcastGroup<'_>,
        candidates: &[String],
    ) -> Result<VoteRound, ScheduleError> {
        let schema = ResponseSchema::Vote {
            candidates: candidates.to_vec(),
        };

        let replies: Vec<Reply> = if self.concurrent_votes {
            let asks = group
                .members()
                .iter()
                .map(|m| group.ask(m.as_ref(), None, &schema));
            join_all(asks)
                .await
                .into_iter()
                .collect::<Result<_, _>>()?
        } else {
            let mut replies = Vec::with_capacity(group.len());
            for member in group.members() {
                replies.push(group.ask(member.as_ref(), None, &schema).await?);
            }
            replies
        };

        let mut ballot = Ballot::new();
        for reply in &replies {
            if let Some(target) = reply.decision.vote_target() {
                ballot.cast(reply.message.speaker.clone(), target);
            }
        }

        let outcome = ballot.resolve(self.tie_break)?;
        info!(
            "Group '{}' voted: {} -> {}",
            group.name(),
            outcome.tally,
            outcome.target
        );

        Ok(VoteRound {
            ballot,
            outcome,
            replies,
        })
    }

    /// Solicit every member once, in order, forwarding each reply to the rest.
    pub async fn sequential_pass(
        &self,
        group: &mut BroadcastGroup<'_>,
    ) -> Result<Vec<Reply>, AgentError> {
        let mut scope = group.auto_forward();
        let mut replies = Vec::with_capacity(scope.len());
        for index in 0..scope.len() {
            replies.push(scope.speak(index, None, &ResponseSchema::Speech).await?);
        }
        Ok(replies)
    }
}

impl Default for TurnScheduler {
    fn default() -> Self {
        Self::new(TieBreak::default(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::conversation_logger::NoConversationLogger;
    use crate::ports::player_agent::PlayerAgent;
    use crate::ports::progress::NoProgress;
    use crate::testing::{ScriptedAgent, agents, as_players, vote};
    use crate::use_cases::transcript::Transcript;
    use std::sync::Arc;
    use werewolf_domain::{Decision, Message};

    fn transcript() -> Transcript<'static> {
        Transcript::new(1, &NoProgress, &NoConversationLogger)
    }

    fn discussion(agree: bool) -> Decision {
        Decision::Discussion {
            reach_agreement: agree,
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    async fn open(players: Vec<Arc<dyn PlayerAgent>>) -> BroadcastGroup<'static> {
        BroadcastGroup::open("wolves", players, None, transcript())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_discussion_stops_at_first_complete_round_agreement() {
        // Round 1 ends with disagreement, round 2 ends with agreement.
        let wolves = vec![
            Arc::new(
                ScriptedAgent::new("A")
                    .script(discussion(true))
                    .script(discussion(false)),
            ),
            Arc::new(
                ScriptedAgent::new("B")
                    .script(discussion(false))
                    .script(discussion(true)),
            ),
        ];
        let mut group = open(as_players(&wolves)).await;

        let outcome = TurnScheduler::default()
            .round_robin_discussion(&mut group, 3)
            .await
            .unwrap();

        assert!(outcome.agreed);
        assert_eq!(outcome.solicitations, 4);
        assert_eq!(wolves[0].asked().len(), 2);
        assert_eq!(wolves[1].asked().len(), 2);
    }

    #[tokio::test]
    async fn test_discussion_ignores_mid_round_agreement() {
        // A agrees but B (closing the round) does not.
        let wolves = vec![
            Arc::new(ScriptedAgent::new("A").script(discussion(true))),
            Arc::new(ScriptedAgent::new("B").script(discussion(false))),
        ];
        let mut group = open(as_players(&wolves)).await;

        let outcome = TurnScheduler::default()
            .round_robin_discussion(&mut group, 1)
            .await
            .unwrap();

        assert!(!outcome.agreed);
        assert_eq!(outcome.solicitations, 2);
        assert_eq!(outcome.last.unwrap().decision, discussion(false));
    }

    #[tokio::test]
    async fn test_discussion_never_exceeds_bound() {
        let wolves: Vec<Arc<ScriptedAgent>> = ["A", "B", "C"]
            .iter()
            .map(|n| {
                Arc::new(
                    ScriptedAgent::new(n)
                        .script(discussion(false))
                        .script(discussion(false))
                        .script(discussion(false))
                        .script(discussion(false)),
                )
            })
            .collect();
        let mut group = open(as_players(&wolves)).await;

        let outcome = TurnScheduler::default()
            .round_robin_discussion(&mut group, 3)
            .await
            .unwrap();

        assert!(!outcome.agreed);
        assert_eq!(outcome.solicitations, 9);
        assert!(wolves.iter().all(|w| w.asked().len() == 3));
        // Every reply reaches the two other wolves
        assert!(wolves.iter().all(|w| w.observed().len() == 6));
    }

    #[tokio::test]
    async fn test_fanout_vote_hides_ballots_and_resolves() {
        let voters = vec![
            Arc::new(ScriptedAgent::new("A").script(vote("C"))),
            Arc::new(ScriptedAgent::new("B").script(vote("C"))),
            Arc::new(ScriptedAgent::new("C").script(vote("A"))),
        ];
        let group = open(as_players(&voters)).await;

        let round = TurnScheduler::default()
            .fanout_vote(&group, &names(&["A", "B", "C"]))
            .await
            .unwrap();

        assert_eq!(round.outcome.target, "C");
        assert_eq!(round.outcome.tally, "A: 1 vote, C: 2 votes");
        assert_eq!(round.ballot.len(), 3);
        assert!(voters.iter().all(|v| v.observed().is_empty()));
        assert!(group.log().is_empty());
    }

    #[tokio::test]
    async fn test_sequential_and_concurrent_votes_agree() {
        for concurrent in [true, false] {
            let voters = vec![
                Arc::new(ScriptedAgent::new("A").script(vote("B"))),
                Arc::new(ScriptedAgent::new("B").script(vote("A"))),
            ];
            let group = open(as_players(&voters)).await;

            let round = TurnScheduler::new(TieBreak::Lexicographic, concurrent)
                .fanout_vote(&group, &names(&["A", "B"]))
                .await
                .unwrap();

            assert_eq!(round.outcome.target, "A");
            assert!(round.outcome.tied);
            let order: Vec<&str> = round.ballot.votes().iter().map(|v| v.voter.as_str()).collect();
            assert_eq!(order, vec!["A", "B"]);
        }
    }

    #[tokio::test]
    async fn test_fanout_vote_rejects_stale_candidate() {
        let voters = vec![Arc::new(ScriptedAgent::new("A").script(vote("Dead")))];
        let group = open(as_players(&voters)).await;

        let err = TurnScheduler::default()
            .fanout_vote(&group, &names(&["A", "B"]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Agent(AgentError::InvalidOutput { .. })
        ));
    }

    #[tokio::test]
    async fn test_sequential_pass_later_speakers_hear_earlier() {
        let players = agents(&["A", "B", "C"]);
        let mut group = open(as_players(&players)).await;
        group
            .broadcast(&[Message::narration("Discuss")])
            .await
            .unwrap();

        let replies = TurnScheduler::default()
            .sequential_pass(&mut group)
            .await
            .unwrap();

        assert_eq!(replies.len(), 3);
        let heard: Vec<String> = players[2]
            .observed()
            .into_iter()
            .map(|m| m.speaker)
            .collect();
        assert_eq!(heard, vec!["Moderator", "A", "B"]);
    }
}
