use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthFailureDto, LoginDto, LoginResponseDto},
        battle::{
            AttackerOutcome, AttackerOutcomeStatsDto, BattleDto, BattleStatsDto,
            DefenderSizeStatsDto, MostActiveDto,
        },
    },
    server::{
        controller::{
            self,
            auth::login,
            battle::{count_battles, get_battle_stats, list_battles, search_battles},
        },
        middleware::auth::{require_token, ACCESS_TOKEN_HEADER},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        controller::auth::login,
        controller::battle::search_battles,
        controller::battle::get_battle_stats,
        controller::battle::count_battles,
        controller::battle::list_battles,
    ),
    components(schemas(
        ErrorDto,
        LoginDto,
        LoginResponseDto,
        AuthFailureDto,
        AttackerOutcome,
        BattleDto,
        BattleStatsDto,
        MostActiveDto,
        AttackerOutcomeStatsDto,
        DefenderSizeStatsDto,
    )),
    modifiers(&AccessTokenSecurity),
    tags(
        (name = "auth", description = "Access token issuance"),
        (name = "battle", description = "Battle records search, statistics and listing"),
    )
)]
pub struct ApiDoc;

/// Registers the `x-access-token` header scheme referenced by protected routes.
struct AccessTokenSecurity;

impl Modify for AccessTokenSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "access_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ACCESS_TOKEN_HEADER))),
            );
        }
    }
}

pub fn router(state: AppState) -> Router {
    let battles = Router::new()
        .route("/api/battles", get(list_battles))
        .route("/api/battles/search", get(search_battles))
        .route("/api/battles/stats", get(get_battle_stats))
        .route("/api/battles/count", get(count_battles))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token));

    Router::new()
        .route("/api/login", post(login))
        .merge(battles)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}
