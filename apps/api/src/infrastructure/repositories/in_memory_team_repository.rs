use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repositories::{RepositoryError, TeamRepository};
use crate::domain::team::{Team, TeamId};

#[derive(Debug)]
struct Store {
    next_id: TeamId,
    teams: BTreeMap<TeamId, Team>,
}

/// In-memory implementation of TeamRepository
///
/// Used for local development and tests. Ids start at 1 and are never
/// reused, even after a delete, matching an auto-increment key.
#[derive(Debug)]
pub struct InMemoryTeamRepository {
    store: RwLock<Store>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                teams: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryTeamRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, team: Team) -> Result<Team, RepositoryError> {
        let mut store = self.store.write().await;

        let id = match team.id() {
            Some(id) if !store.teams.contains_key(&id) => {
                return Err(RepositoryError::Missing(id));
            }
            Some(id) => id,
            None => {
                let id = store.next_id;
                store.next_id += 1;
                id
            }
        };

        let team = team.with_id(id);
        store.teams.insert(id, team.clone());

        Ok(team)
    }

    async fn find_by_id(&self, id: TeamId) -> Result<Option<Team>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.teams.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Team>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.teams.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: TeamId) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        store.teams.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        store.teams.clear();
        Ok(())
    }
}
