// Team domain module
// Contains the team aggregate root, its validated details and field rules

#![allow(clippy::module_inception)]

pub mod errors;
pub mod team;
pub mod validation;
pub mod value_objects;

// Re-export main types for convenience
pub use errors::{TeamError, TeamResult};
pub use team::{Team, TeamId};
pub use validation::{FieldError, ValidationErrors, MIN_TEAM_SIZE};
pub use value_objects::TeamDetails;
