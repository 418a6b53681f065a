// Application layer
// Use cases that coordinate domain rules with repository ports

pub mod team_service;

pub use team_service::{CreateTeamRequest, TeamPayload, TeamService, UpdateTeamRequest};
