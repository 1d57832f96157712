//! Ballots and plurality resolution

use super::tie_break::TieBreak;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One vote: who voted for whom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastVote {
    pub voter: String,
    pub target: String,
}

/// The votes collected in one fanout, in collection order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    votes: Vec<CastVote>,
}

/// The resolved result of a ballot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteOutcome {
    /// The target with the most votes
    pub target: String,
    /// Votes received by the target
    pub count: usize,
    /// Whether the tie-break rule had to decide
    pub tied: bool,
    /// Human-readable tally, e.g. `"Alice: 2 votes, Bob: 1 vote"`
    pub tally: String,
}

impl Ballot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cast(&mut self, voter: impl Into<String>, target: impl Into<String>) {
        self.votes.push(CastVote {
            voter: voter.into(),
            target: target.into(),
        });
    }

    pub fn votes(&self) -> &[CastVote] {
        &self.votes
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// Votes per target, ordered by target name
    pub fn counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for vote in &self.votes {
            *counts.entry(vote.target.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Tally string listing every target in name order
    pub fn tally(&self) -> String {
        self.counts()
            .into_iter()
            .map(|(target, count)| {
                let unit = if count == 1 { "vote" } else { "votes" };
                format!("{}: {} {}", target, count, unit)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolve by plurality, breaking ties with `tie_break`.
    ///
    /// # Example
    ///
    /// ```
    /// use werewolf_domain::vote::{Ballot, TieBreak};
    ///
    /// let mut ballot = Ballot::new();
    /// ballot.cast("Alice", "Carol");
    /// ballot.cast("Bob", "Carol");
    /// ballot.cast("Carol", "Alice");
    ///
    /// let outcome = ballot.resolve(TieBreak::Lexicographic).unwrap();
    /// assert_eq!(outcome.target, "Carol");
    /// assert_eq!(outcome.tally, "Alice: 1 vote, Carol: 2 votes");
    /// ```
    pub fn resolve(&self, tie_break: TieBreak) -> Result<VoteOutcome, DomainError> {
        let counts = self.counts();
        let max = counts
            .values()
            .copied()
            .max()
            .ok_or(DomainError::EmptyBallot)?;

        // BTreeMap iteration is name-ordered, so this list is sorted
        let leaders: Vec<&str> = counts
            .iter()
            .filter(|(_, count)| **count == max)
            .map(|(target, _)| *target)
            .collect();

        let target = match tie_break {
            TieBreak::Lexicographic => leaders[0],
            TieBreak::FirstCast => self
                .votes
                .iter()
                .map(|v| v.target.as_str())
                .find(|t| leaders.contains(t))
                .unwrap_or(leaders[0]),
        };

        Ok(VoteOutcome {
            target: target.to_string(),
            count: max,
            tied: leaders.len() > 1,
            tally: self.tally(),
        })
    }
}
