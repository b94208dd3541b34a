use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        creature::{
            AssignCreatureDto, AssignmentCreatedDto, CreatureDetailDto, CreatureInputDto,
            CreatureListDto, CreatureResponseDto, DeleteCreatureDto,
        },
    },
    server::{
        error::AppError,
        extract::{BearerToken, Json, Path},
        middleware::auth::{AuthGuard, Permission},
        model::{
            creature::{CreateCreatureParams, UpdateCreatureParams},
            user::Role,
        },
        service::creature::CreatureService,
        state::AppState,
    },
};

/// Tag for grouping creature endpoints in OpenAPI documentation
pub static CREATURE_TAG: &str = "creature";

/// List creatures visible to the caller.
///
/// A profesor sees the full catalog. A trainer sees only the creatures assigned to it,
/// each with its nickname and assignment time.
///
/// # Access Control
/// - `AnyRole` - Any authenticated user; the response depends on the role
///
/// # Returns
/// - `200 OK` - Catalog or assignments, tagged by `role`
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Unrecognized role
#[utoipa::path(
    get,
    path = "/api/creature",
    tag = CREATURE_TAG,
    responses(
        (status = 200, description = "Creatures visible to the caller", body = CreatureListDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Unrecognized role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_creatures(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::AnyRole])
        .await?;

    let service = CreatureService::new(&state.db);

    let dto = match user.role {
        Role::Profesor => {
            let creatures = service.get_all().await?;

            CreatureListDto::Profesor {
                total: creatures.len(),
                creatures: creatures.into_iter().map(|c| c.into_dto()).collect(),
            }
        }
        Role::Trainer => {
            let assignments = service.get_assigned(user.id).await?;

            CreatureListDto::Trainer {
                trainer: user.name,
                total: assignments.len(),
                assignments: assignments.into_iter().map(|a| a.into_dto()).collect(),
            }
        }
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Add a creature to the catalog.
///
/// Requires `name`, `type`, `level`, `attack`, `defense` and `hp`; `description` is
/// optional.
///
/// # Access Control
/// - `Admin` - Only a profesor can create creatures
///
/// # Returns
/// - `201 Created` - Creature stored
/// - `400 Bad Request` - Missing field or value out of range
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not a profesor
#[utoipa::path(
    post,
    path = "/api/creature",
    tag = CREATURE_TAG,
    request_body = CreatureInputDto,
    responses(
        (status = 201, description = "Creature created", body = CreatureResponseDto),
        (status = 400, description = "Invalid creature data", body = ErrorDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Caller is not a profesor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_creature(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    payload: Result<Json<CreatureInputDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Admin])
        .await?;

    let Json(payload) = payload?;
    let params = CreateCreatureParams::from_dto(payload)?;

    let creature = CreatureService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatureResponseDto {
            message: "Creature created successfully".to_string(),
            creature: creature.into_dto(),
        }),
    ))
}

/// Get a single creature.
///
/// A profesor may fetch any creature. A trainer may only fetch creatures assigned to
/// it and receives the assignment.
///
/// # Access Control
/// - `AnyRole` - Any authenticated user; trainers are limited to their assignments
///
/// # Returns
/// - `200 OK` - Creature or assignment, tagged by `role`
/// - `400 Bad Request` - Creature id is not a valid integer
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Trainer does not hold the creature
/// - `404 Not Found` - No creature with that id
#[utoipa::path(
    get,
    path = "/api/creature/{id}",
    tag = CREATURE_TAG,
    params(
        ("id" = i32, Path, description = "Creature ID")
    ),
    responses(
        (status = 200, description = "Creature details", body = CreatureDetailDto),
        (status = 400, description = "Invalid creature id", body = ErrorDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Creature not assigned to the trainer", body = ErrorDto),
        (status = 404, description = "Creature not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_creature(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    id: Result<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::AnyRole])
        .await?;

    let Path(id) = id?;

    let service = CreatureService::new(&state.db);

    let dto = match user.role {
        Role::Profesor => CreatureDetailDto::Profesor {
            creature: service.get_by_id(id).await?.into_dto(),
        },
        Role::Trainer => CreatureDetailDto::Trainer {
            assignment: service.get_assigned_by_id(user.id, id).await?.into_dto(),
        },
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Update a creature.
///
/// Overwrites only the fields present in the body.
///
/// # Access Control
/// - `Admin` - Only a profesor can update creatures
///
/// # Returns
/// - `200 OK` - Creature updated
/// - `400 Bad Request` - A provided value is out of range
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not a profesor
/// - `404 Not Found` - No creature with that id
#[utoipa::path(
    put,
    path = "/api/creature/{id}",
    tag = CREATURE_TAG,
    params(
        ("id" = i32, Path, description = "Creature ID")
    ),
    request_body = CreatureInputDto,
    responses(
        (status = 200, description = "Creature updated", body = CreatureResponseDto),
        (status = 400, description = "Invalid creature data", body = ErrorDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Caller is not a profesor", body = ErrorDto),
        (status = 404, description = "Creature not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_creature(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    id: Result<Path<i32>, AppError>,
    payload: Result<Json<CreatureInputDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Admin])
        .await?;

    let Path(id) = id?;
    let Json(payload) = payload?;
    let params = UpdateCreatureParams::from_dto(id, payload)?;

    let creature = CreatureService::new(&state.db).update(params).await?;

    Ok((
        StatusCode::OK,
        Json(CreatureResponseDto {
            message: "Creature updated successfully".to_string(),
            creature: creature.into_dto(),
        }),
    ))
}

/// Delete or release a creature.
///
/// A profesor deletes the creature from the catalog. A trainer releases it, removing
/// only its own assignment.
///
/// # Access Control
/// - `AnyRole` - Any authenticated user; the effect depends on the role
///
/// # Returns
/// - `200 OK` - Creature deleted or released
/// - `400 Bad Request` - Creature id is not a valid integer
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Trainer does not hold the creature
/// - `404 Not Found` - Profesor deleting a creature that does not exist
#[utoipa::path(
    delete,
    path = "/api/creature/{id}",
    tag = CREATURE_TAG,
    params(
        ("id" = i32, Path, description = "Creature ID")
    ),
    responses(
        (status = 200, description = "Creature deleted or released", body = DeleteCreatureDto),
        (status = 400, description = "Invalid creature id", body = ErrorDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Creature not assigned to the trainer", body = ErrorDto),
        (status = 404, description = "Creature not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_creature(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    id: Result<Path<i32>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::AnyRole])
        .await?;

    let Path(id) = id?;

    let service = CreatureService::new(&state.db);

    let dto = match user.role {
        Role::Profesor => {
            service.delete(id).await?;

            DeleteCreatureDto {
                message: "Creature deleted from the catalog".to_string(),
                released: None,
            }
        }
        Role::Trainer => {
            let name = service.release(user.id, id).await?;

            DeleteCreatureDto {
                message: format!("{} was released", name),
                released: Some(name),
            }
        }
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Assign a creature to a trainer.
///
/// # Access Control
/// - `Admin` - Only a profesor can assign creatures
///
/// # Returns
/// - `201 Created` - Creature assigned
/// - `400 Bad Request` - Trainer email missing
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Caller is not a profesor
/// - `404 Not Found` - Creature or trainer not found
/// - `409 Conflict` - Trainer already holds the creature
#[utoipa::path(
    post,
    path = "/api/creature/{id}/assign",
    tag = CREATURE_TAG,
    params(
        ("id" = i32, Path, description = "Creature ID")
    ),
    request_body = AssignCreatureDto,
    responses(
        (status = 201, description = "Creature assigned", body = AssignmentCreatedDto),
        (status = 400, description = "Trainer email missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid access token", body = ErrorDto),
        (status = 403, description = "Caller is not a profesor", body = ErrorDto),
        (status = 404, description = "Creature or trainer not found", body = ErrorDto),
        (status = 409, description = "Creature already assigned to the trainer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn assign_creature(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    id: Result<Path<i32>, AppError>,
    payload: Result<Json<AssignCreatureDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let profesor = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Admin])
        .await?;

    let Path(id) = id?;
    let Json(payload) = payload?;

    let assigned = CreatureService::new(&state.db)
        .assign(id, payload.trainer_email, payload.nickname)
        .await?;

    let creature_name = assigned.assignment.creature.name.clone();
    let nickname = assigned.assignment.nickname.clone();

    Ok((
        StatusCode::CREATED,
        Json(AssignmentCreatedDto {
            message: format!(
                "{} assigned to trainer {}",
                creature_name, assigned.trainer.name
            ),
            profesor: profesor.name,
            trainer: assigned.trainer.name,
            creature: creature_name,
            nickname,
            assignment: assigned.assignment.into_dto(),
        }),
    ))
}
