use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::usecases::{
    auth::AuthError, subscriptions::SubscriptionError, user_plans::UserPlanError,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(_) => {
                // Don't leak internal error detail to client
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: status.as_u16(),
            detail,
        });

        (status, body).into_response()
    }
}

impl From<SubscriptionError> for AppError {
    fn from(err: SubscriptionError) -> Self {
        match err {
            SubscriptionError::InvalidPlan => AppError::BadRequest(err.to_string()),
            SubscriptionError::Internal(err) => AppError::Internal(err),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidAuthentication { .. } => AppError::BadRequest(err.to_string()),
            AuthError::Internal(err) => AppError::Internal(err),
        }
    }
}

impl From<UserPlanError> for AppError {
    fn from(err: UserPlanError) -> Self {
        match err {
            UserPlanError::Provider(err) | UserPlanError::Internal(err) => AppError::Internal(err),
        }
    }
}
