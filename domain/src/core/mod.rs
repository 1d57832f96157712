//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: name joining and truncation helpers used by narration

pub mod error;
pub mod string;
