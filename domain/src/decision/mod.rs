//! Structured decisions
//!
//! Every solicitation of a player carries a [`ResponseSchema`]; the player's
//! answer is a [`Decision`] that must validate against it.

pub mod parsing;
pub mod schema;
pub mod value_objects;

pub use parsing::extract_json_object;
pub use schema::ResponseSchema;
pub use value_objects::Decision;
