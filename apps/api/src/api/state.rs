use std::sync::Arc;

use crate::application::TeamService;
use crate::domain::repositories::TeamRepository;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub teams: TeamService,
}

impl AppState {
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self {
            teams: TeamService::new(repository),
        }
    }
}
