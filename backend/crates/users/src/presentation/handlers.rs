//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::validation::FieldErrors;
use serde_json::Value;
use std::sync::Arc;

use crate::application::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
};
use crate::domain::entity::user::UserDraft;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{UserError, UserResult};
use crate::presentation::dto::UserResponse;
use crate::presentation::schema::{INVALID_INPUT_TYPE, UserSchema};

/// Shared state for user handlers
#[derive(Clone)]
pub struct UserAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /users
pub async fn list_users<R>(
    State(state): State<UserAppState<R>>,
) -> UserResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListUsersUseCase::new(state.repo.clone());
    let users = use_case.execute().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /users
pub async fn create_user<R>(
    State(state): State<UserAppState<R>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> UserResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let draft = parse_payload(payload)?;

    let use_case = CreateUserUseCase::new(state.repo.clone());
    let user = use_case.execute(draft).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /users/{user_id}
pub async fn get_user<R>(
    State(state): State<UserAppState<R>>,
    Path(raw_id): Path<String>,
) -> UserResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let user_id = parse_user_id(raw_id)?;

    let use_case = GetUserUseCase::new(state.repo.clone());
    let user = use_case.execute(user_id).await?;

    Ok(Json(UserResponse::from(user)))
}

/// PUT /users/{user_id}
pub async fn update_user<R>(
    State(state): State<UserAppState<R>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> UserResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let user_id = parse_user_id(raw_id)?;
    let draft = parse_payload(payload)?;

    let use_case = UpdateUserUseCase::new(state.repo.clone());
    let user = use_case.execute(user_id, draft).await?;

    Ok(Json(UserResponse::from(user)))
}

/// DELETE /users/{user_id}
pub async fn delete_user<R>(
    State(state): State<UserAppState<R>>,
    Path(raw_id): Path<String>,
) -> UserResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let user_id = parse_user_id(raw_id)?;

    let use_case = DeleteUserUseCase::new(state.repo.clone());
    use_case.execute(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Non-integer ids never match a row, so they are reported as not found
fn parse_user_id(raw_id: String) -> UserResult<UserId> {
    raw_id
        .parse::<i64>()
        .map(UserId::new)
        .map_err(|_| UserError::MalformedUserId(raw_id))
}

/// Body rejections: wrong content type is 415, an oversized body is 413,
/// anything else is an unreadable payload
fn parse_payload(payload: Result<Json<Value>, JsonRejection>) -> UserResult<UserDraft> {
    let Json(value) = payload.map_err(|rejection| match rejection {
        JsonRejection::MissingJsonContentType(_) => UserError::UnsupportedMediaType,
        JsonRejection::BytesRejection(rejection)
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
        {
            UserError::PayloadTooLarge
        }
        _ => UserError::Validation(FieldErrors::schema(INVALID_INPUT_TYPE)),
    })?;

    UserSchema::load(&value).map_err(UserError::Validation)
}
