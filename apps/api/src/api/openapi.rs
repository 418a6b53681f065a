use axum::Json;
use utoipa::OpenApi;

use crate::api::errors::ErrorResponse;
use crate::api::handlers::teams::{self, TeamResponse};
use crate::application::TeamPayload;
use crate::domain::team::FieldError;

/// OpenAPI document for the team routes
#[derive(OpenApi)]
#[openapi(
    info(title = "Sporting Team API", description = "Create, read, update and delete teams"),
    paths(
        teams::create_team,
        teams::get_teams,
        teams::get_team,
        teams::update_team,
        teams::delete_team,
    ),
    components(schemas(TeamPayload, TeamResponse, ErrorResponse, FieldError)),
    tags((name = "teams", description = "Team management"))
)]
pub struct ApiDoc;

/// Serves the OpenAPI document
///
/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
