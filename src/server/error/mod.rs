//! Application errors and their HTTP responses.
//!
//! Handlers return `Result<_, AppError>`. Client errors carry their message to the
//! response body; everything else is logged and reported as a bare 500.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Message for a request body that is not a JSON object of the expected shape.
pub const INVALID_BODY: &str = "Invalid request body";

#[derive(Error, Debug)]
pub enum AppError {
    /// Startup configuration could not be read.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Login or guard failure, mapped by `AuthError` itself.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Raised by the SQLite session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Discord API call failed.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Binding or serving the listener failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A configured Discord URL does not parse.
    #[error(transparent)]
    UrlErr(#[from] url::ParseError),

    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// 404 with the message as `error`.
    #[error("{0}")]
    NotFound(String),

    /// 400 with the message as `error`.
    #[error("{0}")]
    BadRequest(String),

    /// 500; the message is logged, never sent.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        Self::BadRequest(INVALID_BODY.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        Self::BadRequest("Invalid query parameters".to_string())
    }
}

/// Logs the wrapped error and answers `500 {"error":"Internal server error"}`.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
