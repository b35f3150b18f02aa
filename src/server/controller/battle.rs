use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        auth::AuthFailureDto,
        battle::{BattleDto, BattleStatsDto},
    },
    server::{
        error::AppError, model::battle::BattleSearchParams, service::battle::BattleService,
        state::AppState,
    },
};

/// Tag for grouping battle endpoints in OpenAPI documentation
pub static BATTLE_TAG: &str = "battle";

/// Optional search filters; empty values are ignored.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchBattlesQuery {
    /// King on either side of the battle
    pub king: Option<String>,
    /// Battle type, e.g. `ambush` or `siege`
    #[serde(rename = "type")]
    pub battle_type: Option<String>,
    /// Region or location name
    pub location: Option<String>,
    /// House among the attackers
    pub attacker: Option<String>,
    /// House among the defenders
    pub defender: Option<String>,
}

/// Search battles.
///
/// Returns battles matching every supplied filter. A king filter matches either
/// king, a location filter matches region or location, and attacker/defender
/// filters match any of the four named slots on that side.
///
/// # Returns
/// - `200 OK` - Matching battles
/// - `401 Unauthorized` - Invalid or expired access token
/// - `403 Forbidden` - No access token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/battles/search",
    tag = BATTLE_TAG,
    params(SearchBattlesQuery),
    security(("access_token" = [])),
    responses(
        (status = 200, description = "Matching battles", body = Vec<BattleDto>),
        (status = 401, description = "Invalid access token", body = AuthFailureDto),
        (status = 403, description = "No access token", body = AuthFailureDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_battles(
    State(state): State<AppState>,
    Query(query): Query<SearchBattlesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let params = BattleSearchParams::new(
        query.king,
        query.battle_type,
        query.location,
        query.attacker,
        query.defender,
    );

    let battles: Vec<BattleDto> = service
        .search(params)
        .await?
        .into_iter()
        .map(|b| b.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(battles)))
}

/// Aggregate battle statistics.
///
/// Presence counts for attacker king, defender king, region and name; win/loss
/// counts; distinct battle types; average, minimum and maximum defender size.
///
/// # Returns
/// - `200 OK` - Statistics object
/// - `401 Unauthorized` - Invalid or expired access token
/// - `403 Forbidden` - No access token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/battles/stats",
    tag = BATTLE_TAG,
    security(("access_token" = [])),
    responses(
        (status = 200, description = "Battle statistics", body = BattleStatsDto),
        (status = 401, description = "Invalid access token", body = AuthFailureDto),
        (status = 403, description = "No access token", body = AuthFailureDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_battle_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let stats = service.get_stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Count all battles.
///
/// # Returns
/// - `200 OK` - Total number of battles as a bare integer
/// - `401 Unauthorized` - Invalid or expired access token
/// - `403 Forbidden` - No access token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/battles/count",
    tag = BATTLE_TAG,
    security(("access_token" = [])),
    responses(
        (status = 200, description = "Number of battles", body = u64),
        (status = 401, description = "Invalid access token", body = AuthFailureDto),
        (status = 403, description = "No access token", body = AuthFailureDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_battles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let count = service.count().await?;

    Ok((StatusCode::OK, Json(count)))
}

/// List all battles.
///
/// Order is whatever the store returns; no sort is applied.
///
/// # Returns
/// - `200 OK` - Every battle
/// - `401 Unauthorized` - Invalid or expired access token
/// - `403 Forbidden` - No access token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/battles",
    tag = BATTLE_TAG,
    security(("access_token" = [])),
    responses(
        (status = 200, description = "All battles", body = Vec<BattleDto>),
        (status = 401, description = "Invalid access token", body = AuthFailureDto),
        (status = 403, description = "No access token", body = AuthFailureDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_battles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let battles: Vec<BattleDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|b| b.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(battles)))
}
