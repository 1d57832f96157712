//! Players, roles and factions
//!
//! - [`role::Role`] / [`role::Faction`]: the closed set of roles and the two
//!   win-condition groups, with a static [`role::RoleProfile`] table
//! - [`entities::Player`]: one seat: name, role, alive flag
//! - [`roster::Roster`]: every player of a game, in speaking order

pub mod entities;
pub mod roster;
pub mod role;

pub use entities::Player;
pub use role::{Faction, NightAction, Role, RoleProfile};
pub use roster::Roster;
