//! Plurality voting
//!
//! A [`Ballot`] collects `(voter, target)` pairs from one fanout vote and
//! resolves them to a single target with a deterministic [`TieBreak`].

pub mod ballot;
pub mod tie_break;

pub use ballot::{Ballot, CastVote, VoteOutcome};
pub use tie_break::TieBreak;
