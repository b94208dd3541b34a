use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::{ErrorDto, IndexDto},
        auth::{
            CurrentUserDto, LoginDto, LoginResponseDto, LogoutResponseDto, RefreshResponseDto,
            RegisterDto, RegisterResponseDto,
        },
        creature::{
            AssignCreatureDto, AssignmentCreatedDto, AssignmentDto, CreatureDetailDto,
            CreatureDto, CreatureInputDto, CreatureListDto, CreatureResponseDto,
            DeleteCreatureDto,
        },
        user::UserDto,
    },
    server::{
        controller::{auth, creature, index},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Pokédex API", description = "Role-based creature catalog"),
    paths(
        index::index,
        index::openapi,
        auth::register,
        auth::login,
        auth::refresh,
        auth::logout,
        auth::me,
        creature::get_creatures,
        creature::create_creature,
        creature::get_creature,
        creature::update_creature,
        creature::delete_creature,
        creature::assign_creature,
    ),
    components(schemas(
        ErrorDto,
        IndexDto,
        UserDto,
        RegisterDto,
        RegisterResponseDto,
        LoginDto,
        LoginResponseDto,
        RefreshResponseDto,
        LogoutResponseDto,
        CurrentUserDto,
        CreatureInputDto,
        CreatureDto,
        AssignmentDto,
        CreatureListDto,
        CreatureDetailDto,
        CreatureResponseDto,
        DeleteCreatureDto,
        AssignCreatureDto,
        AssignmentCreatedDto,
    )),
    modifiers(&BearerSecurity),
    tags(
        (name = "index", description = "Service information"),
        (name = "auth", description = "Accounts and bearer tokens"),
        (name = "creature", description = "Creature catalog and assignments"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by protected endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .route("/api/openapi.json", get(index::openapi))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        .route(
            "/api/creature",
            get(creature::get_creatures).post(creature::create_creature),
        )
        .route(
            "/api/creature/{id}",
            get(creature::get_creature)
                .put(creature::update_creature)
                .delete(creature::delete_creature),
        )
        .route("/api/creature/{id}/assign", post(creature::assign_creature))
}

/// Builds the complete application with request tracing and permissive CORS.
pub fn app(state: AppState) -> Router {
    router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
