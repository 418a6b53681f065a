use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::api::errors::{ApiError, ErrorResponse};
use crate::api::state::AppState;
use crate::application::TeamPayload;
use crate::domain::team::{Team, TeamId};

/// Team as returned by the API
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamResponse {
    #[schema(value_type = i64, example = 1)]
    pub id: TeamId,
    #[schema(example = "Celtics")]
    pub name: String,
    #[schema(example = "Boston")]
    pub address: String,
    #[schema(example = 10)]
    pub size: i32,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            // Handlers only see teams that came back from the store.
            id: team.id().unwrap_or_default(),
            name: team.name().to_string(),
            address: team.address().to_string(),
            size: team.size(),
        }
    }
}

/// Decodes a request body that must be a JSON object
///
/// Extracting a map first keeps arrays and scalars out, which the derived
/// struct decoder would otherwise read positionally.
fn object_payload(
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<TeamPayload, ApiError> {
    let Json(object) = body?;
    serde_json::from_value(Value::Object(object))
        .map_err(|e| ApiError::bad_request(e.to_string()))
}

/// Create a new team
///
/// POST /teams
#[utoipa::path(
    post,
    path = "/teams",
    tag = "teams",
    request_body = TeamPayload,
    responses(
        (status = 200, description = "Team created", body = TeamResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
    )
)]
pub async fn create_team(
    State(state): State<AppState>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<TeamResponse>, ApiError> {
    let req = object_payload(body)?;
    let team = state.teams.create_team(req).await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Get a team by ID
///
/// GET /teams/:id
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = i64, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team found", body = TeamResponse),
        (status = 404, description = "No such team", body = ErrorResponse),
    )
)]
pub async fn get_team(
    State(state): State<AppState>,
    id: Result<Path<TeamId>, PathRejection>,
) -> Result<Json<TeamResponse>, ApiError> {
    let Path(id) = id?;
    let team = state.teams.get_team_by_id(id).await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// List all teams
///
/// GET /teams
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    responses((status = 200, description = "All stored teams", body = [TeamResponse]))
)]
pub async fn get_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.teams.get_teams().await?;
    let responses = teams.iter().map(TeamResponse::from).collect();

    Ok(Json(responses))
}

/// Replace a team's name, address and size
///
/// PUT /teams/:id
#[utoipa::path(
    put,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = i64, Path, description = "Team id")),
    request_body = TeamPayload,
    responses(
        (status = 200, description = "Team updated", body = TeamResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "No such team", body = ErrorResponse),
    )
)]
pub async fn update_team(
    State(state): State<AppState>,
    id: Result<Path<TeamId>, PathRejection>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<TeamResponse>, ApiError> {
    let Path(id) = id?;
    let req = object_payload(body)?;
    let team = state.teams.update_team(id, req).await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Delete a team
///
/// DELETE /teams/:id
#[utoipa::path(
    delete,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = i64, Path, description = "Team id")),
    responses((status = 200, description = "Team deleted, or was already absent"))
)]
pub async fn delete_team(
    State(state): State<AppState>,
    id: Result<Path<TeamId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.teams.delete_team(id).await?;

    Ok(StatusCode::OK)
}
