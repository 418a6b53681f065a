//! Integration tests for the PostgreSQL team repository
//!
//! These tests verify that the repository correctly interacts with the
//! PostgreSQL database. They need `DATABASE_URL`; without it each test
//! returns early.

use sporting_api::config::DatabaseConfig;
use sporting_api::domain::repositories::{RepositoryError, TeamRepository};
use sporting_api::domain::team::{Team, TeamDetails};
use sporting_api::infrastructure::database::{connect, run_migrations};
use sporting_api::infrastructure::repositories::PostgresTeamRepository;

/// Set up a migrated repository, or `None` when no database is configured
async fn setup_repository() -> Option<PostgresTeamRepository> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let config = DatabaseConfig {
        url,
        ..DatabaseConfig::default()
    };

    let pool = connect(&config)
        .await
        .expect("Failed to connect to test database");
    run_migrations(&pool).await.expect("Failed to run migrations");

    Some(PostgresTeamRepository::new(pool))
}

fn team(name: &str, address: &str, size: i32) -> Team {
    Team::new(
        TeamDetails::new(Some(name.to_string()), Some(address.to_string()), Some(size))
            .expect("valid details"),
    )
}

#[tokio::test]
async fn test_save_assigns_id_and_find_by_id() {
    let Some(repo) = setup_repository().await else {
        return;
    };

    let saved = repo
        .save(team("Lakers", "Los Angeles", 15))
        .await
        .expect("Failed to save team");

    let id = saved.id().expect("id assigned on insert");
    let found = repo
        .find_by_id(id)
        .await
        .expect("Failed to find team")
        .expect("Team should be found");

    assert_eq!(found, saved);
    assert_eq!(found.name(), "Lakers");
    assert_eq!(found.address(), "Los Angeles");
    assert_eq!(found.size(), 15);

    repo.delete_by_id(id).await.expect("cleanup");
}

#[tokio::test]
async fn test_save_existing_team_updates_row() {
    let Some(repo) = setup_repository().await else {
        return;
    };

    let mut saved = repo
        .save(team("Warriors", "Oakland", 12))
        .await
        .expect("Failed to save team");
    let id = saved.id().expect("id assigned on insert");

    saved.apply(
        TeamDetails::new(
            Some("Warriors".to_string()),
            Some("San Francisco".to_string()),
            Some(13),
        )
        .expect("valid details"),
    );
    let updated = repo.save(saved).await.expect("Failed to update team");

    assert_eq!(updated.id(), Some(id));
    assert_eq!(updated.address(), "San Francisco");
    assert_eq!(updated.size(), 13);

    repo.delete_by_id(id).await.expect("cleanup");
}

#[tokio::test]
async fn test_save_with_unknown_id_fails() {
    let Some(repo) = setup_repository().await else {
        return;
    };

    let ghost = Team::from_persistence(i64::MAX, "Ghost".into(), "Nowhere".into(), 3);
    let result = repo.save(ghost).await;

    assert!(matches!(result, Err(RepositoryError::Missing(id)) if id == i64::MAX));
}

#[tokio::test]
async fn test_find_all_includes_saved_teams_in_id_order() {
    let Some(repo) = setup_repository().await else {
        return;
    };

    let first = repo.save(team("Bulls", "Chicago", 11)).await.unwrap();
    let second = repo.save(team("Knicks", "New York", 14)).await.unwrap();
    let (first_id, second_id) = (first.id().unwrap(), second.id().unwrap());

    let ids: Vec<i64> = repo
        .find_all()
        .await
        .expect("Failed to list teams")
        .iter()
        .filter_map(Team::id)
        .collect();

    let first_pos = ids.iter().position(|id| *id == first_id).unwrap();
    let second_pos = ids.iter().position(|id| *id == second_id).unwrap();
    assert!(first_pos < second_pos);

    repo.delete_by_id(first_id).await.unwrap();
    repo.delete_by_id(second_id).await.unwrap();
}

#[tokio::test]
async fn test_delete_by_id_is_idempotent() {
    let Some(repo) = setup_repository().await else {
        return;
    };

    let saved = repo.save(team("Heat", "Miami", 9)).await.unwrap();
    let id = saved.id().unwrap();

    repo.delete_by_id(id).await.expect("first delete");
    repo.delete_by_id(id).await.expect("second delete");

    assert!(repo.find_by_id(id).await.unwrap().is_none());
}
