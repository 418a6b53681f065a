//! Team service orchestrating validation and persistence

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Team, TeamDetails, TeamError, TeamId, TeamResult};

/// Inbound team fields, as decoded from a create or update request
///
/// Every field is optional so that `null` or a missing key reaches
/// validation instead of failing decoding.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TeamPayload {
    /// Team name, not blank
    #[schema(example = "Celtics")]
    pub name: Option<String>,
    /// Home address, not blank
    #[schema(example = "Boston")]
    pub address: Option<String>,
    /// Maximum number of members, at least 2
    #[schema(example = 10, minimum = 2)]
    pub size: Option<i32>,
}

impl TeamPayload {
    pub fn new(name: impl Into<String>, address: impl Into<String>, size: i32) -> Self {
        Self {
            name: Some(name.into()),
            address: Some(address.into()),
            size: Some(size),
        }
    }

    /// Checks every field and returns the validated details
    pub fn validate(self) -> TeamResult<TeamDetails> {
        Ok(TeamDetails::new(self.name, self.address, self.size)?)
    }
}

pub type CreateTeamRequest = TeamPayload;
pub type UpdateTeamRequest = TeamPayload;

/// Team service for managing teams
#[derive(Clone)]
pub struct TeamService {
    repository: Arc<dyn TeamRepository>,
}

impl TeamService {
    /// Create a new team service
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    /// Validate and store a new team
    pub async fn create_team(&self, request: CreateTeamRequest) -> TeamResult<Team> {
        let details = request.validate()?;
        info!(name = %details.name(), "Creating team");

        let team = self.repository.save(Team::new(details)).await?;
        debug!(team_id = ?team.id(), "Team created");

        Ok(team)
    }

    /// Get a team by ID
    pub async fn get_team_by_id(&self, id: TeamId) -> TeamResult<Team> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TeamError::NotFound(id))
    }

    /// List all teams
    pub async fn get_teams(&self) -> TeamResult<Vec<Team>> {
        Ok(self.repository.find_all().await?)
    }

    /// Replace the name, address and size of an existing team
    ///
    /// The payload is validated before the lookup, so an invalid payload
    /// for an unknown id is reported as a validation failure.
    pub async fn update_team(&self, id: TeamId, request: UpdateTeamRequest) -> TeamResult<Team> {
        let details = request.validate()?;
        info!(team_id = id, "Updating team");

        let mut team = self.get_team_by_id(id).await?;
        team.apply(details);

        Ok(self.repository.save(team).await?)
    }

    /// Delete a team; deleting an unknown id succeeds
    pub async fn delete_team(&self, id: TeamId) -> TeamResult<()> {
        info!(team_id = id, "Deleting team");
        Ok(self.repository.delete_by_id(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::InMemoryTeamRepository;

    fn service() -> (TeamService, Arc<InMemoryTeamRepository>) {
        let repo = Arc::new(InMemoryTeamRepository::new());
        (TeamService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn create_team_saves_and_returns_team() {
        let (service, _) = service();

        let created = service
            .create_team(TeamPayload::new("Celtics", "Boston", 10))
            .await
            .unwrap();

        assert_eq!(created.id(), Some(1));
        assert_eq!(created.name(), "Celtics");
        assert_eq!(created.address(), "Boston");
        assert_eq!(created.size(), 10);
    }

    #[tokio::test]
    async fn create_team_with_invalid_payload_leaves_store_unchanged() {
        let (service, repo) = service();

        let payload = TeamPayload {
            name: None,
            address: Some("New Address".to_string()),
            size: Some(0),
        };
        let result = service.create_team(payload).await;

        match result {
            Err(TeamError::Validation(errors)) => {
                assert!(errors.has_field("name"));
                assert!(errors.has_field("size"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_team_by_id_returns_created_team() {
        let (service, _) = service();
        let created = service
            .create_team(TeamPayload::new("Lakers", "Los Angeles", 15))
            .await
            .unwrap();

        let found = service.get_team_by_id(1).await.unwrap();

        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn get_team_by_id_fails_when_not_found() {
        let (service, _) = service();

        let result = service.get_team_by_id(1).await;

        assert!(matches!(result, Err(TeamError::NotFound(1))));
    }

    #[tokio::test]
    async fn get_teams_returns_all_teams() {
        let (service, _) = service();
        service
            .create_team(TeamPayload::new("Lakers", "Los Angeles", 15))
            .await
            .unwrap();
        service
            .create_team(TeamPayload::new("Warriors", "San Francisco", 12))
            .await
            .unwrap();

        let names: Vec<String> = service
            .get_teams()
            .await
            .unwrap()
            .iter()
            .map(|t| t.name().to_string())
            .collect();

        assert_eq!(names, vec!["Lakers", "Warriors"]);
    }

    #[tokio::test]
    async fn update_team_replaces_fields_and_keeps_id() {
        let (service, _) = service();
        service
            .create_team(TeamPayload::new("Lakers", "Los Angeles", 15))
            .await
            .unwrap();

        service
            .update_team(1, TeamPayload::new("Updated Team", "Updated Address", 8))
            .await
            .unwrap();
        let found = service.get_team_by_id(1).await.unwrap();

        assert_eq!(found.id(), Some(1));
        assert_eq!(found.name(), "Updated Team");
        assert_eq!(found.address(), "Updated Address");
        assert_eq!(found.size(), 8);
    }

    #[tokio::test]
    async fn update_unknown_team_fails_with_not_found() {
        let (service, _) = service();

        let result = service
            .update_team(5, TeamPayload::new("Updated Team", "Updated Address", 8))
            .await;

        assert!(matches!(result, Err(TeamError::NotFound(5))));
    }

    #[tokio::test]
    async fn update_with_invalid_payload_keeps_stored_team() {
        let (service, _) = service();
        service
            .create_team(TeamPayload::new("Lakers", "Los Angeles", 15))
            .await
            .unwrap();

        let result = service.update_team(1, TeamPayload::new("", "", 1)).await;

        assert!(matches!(result, Err(TeamError::Validation(_))));
        assert_eq!(service.get_team_by_id(1).await.unwrap().name(), "Lakers");
    }

    #[tokio::test]
    async fn delete_team_removes_team() {
        let (service, _) = service();
        service
            .create_team(TeamPayload::new("Lakers", "Los Angeles", 15))
            .await
            .unwrap();

        service.delete_team(1).await.unwrap();

        assert!(matches!(
            service.get_team_by_id(1).await,
            Err(TeamError::NotFound(1))
        ));
    }

    #[tokio::test]
    async fn delete_unknown_team_succeeds() {
        let (service, _) = service();

        assert!(service.delete_team(1).await.is_ok());
    }
}
