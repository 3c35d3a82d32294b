use axum::{
    Json, Router,
    body::Bytes,
    extract::{Extension, Query, rejection::QueryRejection},
    http::StatusCode,
    routing::{get, post},
};
use tracing::{debug, error, info};

use usersvc_core::{User, UserId};

use crate::app::dto;
use crate::app::errors::{ApiError, MISSING_ID};
use crate::app::services::AppServices;

/// Routes mounted under `/api/v1/user`.
///
/// Each route only answers one method; anything else gets a 405 before any
/// body or query extraction happens. `HEAD` is routed explicitly because
/// axum would otherwise serve it with the `GET` handler.
pub fn router() -> Router {
    Router::new()
        .route("/create", post(create_user).fallback(method_not_allowed))
        .route(
            "/get",
            get(get_user)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
}

pub async fn create_user(
    Extension(services): Extension<AppServices>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let req: dto::CreateUserRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "rejecting create payload");
        ApiError::invalid_json(e)
    })?;

    let new_user = req.validate().map_err(|e| {
        debug!(error = %e, "create payload failed validation");
        ApiError::from(e)
    })?;

    let created = services.users().create(&new_user).await.map_err(|e| {
        error!(operation = "create_user", error = %e, "storage failure");
        ApiError::from(e)
    })?;

    info!(user_id = %created.id, "user created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_user(
    Extension(services): Extension<AppServices>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<User>, ApiError> {
    let Query(pairs) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let params = dto::GetUserParams::from_pairs(pairs);

    let raw = params.id.as_deref().map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(ApiError::BadRequest(MISSING_ID.to_string()));
    }

    let id: UserId = raw.parse().map_err(|e| {
        debug!(raw_id = raw, error = %e, "unparseable user id");
        ApiError::from(e)
    })?;

    match services.users().get_by_id(id).await {
        Ok(user) => Ok(Json(user)),
        Err(e) => {
            let err = ApiError::from(e);
            if err != ApiError::NotFound {
                error!(operation = "get_user_by_id", user_id = %id, error = err.message(), "storage failure");
            }
            Err(err)
        }
    }
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
