//! Route handlers. Each one parses input, calls the service once, and renders JSON.

use super::requests::{
    check_image_extension, FinalsBody, ImageUploadForm, NameBody, PointsBody, QuarterfinalsBody,
    SemifinalsBody,
};
use super::AppState;
use crate::models::{StageAssignment, StageKind, TeamId, TournamentError};
use crate::store::StoreError;
use actix_multipart::form::MultipartForm;
use actix_web::{
    get, post, put,
    web::{Bytes, Json, Path},
    HttpResponse,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;

type ApiResult = Result<HttpResponse, TournamentError>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageResponse {
    message: &'static str,
    image_url: String,
}

fn message(text: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: text.into(),
    })
}

/// Stage body; an empty body clears every slot, malformed JSON is rejected.
fn stage_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, TournamentError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| TournamentError::invalid_input(format!("Invalid JSON body: {e}")))
}

fn get_stage(state: &AppState, kind: StageKind) -> ApiResult {
    Ok(HttpResponse::Ok().json(state.stage(kind)?))
}

fn set_stage(state: &AppState, assignment: StageAssignment) -> ApiResult {
    let stage = state.set_stage(&assignment)?;
    let kind = stage.kind();
    Ok(HttpResponse::Ok().json(json!({
        "message": format!("{} updated successfully", kind.title()),
        kind.as_str(): stage,
    })))
}

fn reset_stage(state: &AppState, kind: StageKind) -> ApiResult {
    state.reset_stage(kind)?;
    Ok(message(format!("{} reset successfully", kind.title())))
}

#[get("/api/health")]
pub(crate) async fn api_health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "bracket-tournament-web",
    })
}

/// Whole document: teams and all three stages.
#[get("/api/tournament")]
pub(crate) async fn api_tournament(state: AppState) -> ApiResult {
    Ok(HttpResponse::Ok().json(state.tournament()?))
}

#[get("/api/teams")]
pub(crate) async fn api_teams(state: AppState) -> ApiResult {
    Ok(HttpResponse::Ok().json(state.teams()?))
}

/// Set a team's points. Body is validated before the team lookup.
#[put("/api/team/{id}")]
pub(crate) async fn api_set_points(
    state: AppState,
    path: Path<TeamId>,
    body: Json<PointsBody>,
) -> ApiResult {
    let points = body.points()?;
    state.set_points(path.into_inner(), points)?;
    Ok(message("Team points updated successfully"))
}

#[put("/api/team/{id}/name")]
pub(crate) async fn api_set_name(
    state: AppState,
    path: Path<TeamId>,
    body: Json<NameBody>,
) -> ApiResult {
    let name = body.name()?;
    state.set_name(path.into_inner(), name)?;
    Ok(message("Team name updated successfully"))
}

/// Inline an uploaded image into the team as a data URI. The temp file is gone once this returns.
#[post("/api/team/{id}/image")]
pub(crate) async fn api_upload_image(
    state: AppState,
    path: Path<TeamId>,
    MultipartForm(form): MultipartForm<ImageUploadForm>,
) -> ApiResult {
    let file = form
        .image
        .as_ref()
        .ok_or_else(|| TournamentError::invalid_input("No image file provided"))?;
    check_image_extension(file.file_name.as_deref())?;
    let mime_type = file
        .content_type
        .as_ref()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_default();
    let bytes = std::fs::read(file.file.path()).map_err(StoreError::from)?;
    let image_url = state.set_image(path.into_inner(), &bytes, &mime_type)?;
    Ok(HttpResponse::Ok().json(ImageResponse {
        message: "Team image updated successfully",
        image_url,
    }))
}

/// Reset every team's points to 0.
#[post("/api/reset")]
pub(crate) async fn api_reset_points(state: AppState) -> ApiResult {
    state.reset_all_points()?;
    Ok(message("All points reset successfully"))
}

#[get("/api/quarterfinals")]
pub(crate) async fn api_get_quarterfinals(state: AppState) -> ApiResult {
    get_stage(&state, StageKind::Quarterfinals)
}

#[put("/api/quarterfinals")]
pub(crate) async fn api_set_quarterfinals(state: AppState, body: Bytes) -> ApiResult {
    let body: QuarterfinalsBody = stage_body(&body)?;
    set_stage(&state, StageAssignment::from(&body))
}

#[post("/api/quarterfinals/reset")]
pub(crate) async fn api_reset_quarterfinals(state: AppState) -> ApiResult {
    reset_stage(&state, StageKind::Quarterfinals)
}

#[get("/api/semifinals")]
pub(crate) async fn api_get_semifinals(state: AppState) -> ApiResult {
    get_stage(&state, StageKind::Semifinals)
}

#[put("/api/semifinals")]
pub(crate) async fn api_set_semifinals(state: AppState, body: Bytes) -> ApiResult {
    let body: SemifinalsBody = stage_body(&body)?;
    set_stage(&state, StageAssignment::from(&body))
}

#[post("/api/semifinals/reset")]
pub(crate) async fn api_reset_semifinals(state: AppState) -> ApiResult {
    reset_stage(&state, StageKind::Semifinals)
}

#[get("/api/finals")]
pub(crate) async fn api_get_finals(state: AppState) -> ApiResult {
    get_stage(&state, StageKind::Finals)
}

#[put("/api/finals")]
pub(crate) async fn api_set_finals(state: AppState, body: Bytes) -> ApiResult {
    let body: FinalsBody = stage_body(&body)?;
    set_stage(&state, StageAssignment::from(&body))
}

#[post("/api/finals/reset")]
pub(crate) async fn api_reset_finals(state: AppState) -> ApiResult {
    reset_stage(&state, StageKind::Finals)
}
