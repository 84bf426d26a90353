// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types and handling for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::BuildError;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid boundary for '{name}': {points} points, need at least 3")]
    InvalidBoundary { name: String, points: usize },

    #[error("Invalid space '{name}': height {height} must be positive")]
    InvalidHeight { name: String, height: f64 },

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Model emission error: {0}")]
    Emission(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Join error")]
    Join(#[from] tokio::task::JoinError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::InvalidBoundary { .. } => (StatusCode::BAD_REQUEST, "INVALID_BOUNDARY"),
            ApiError::InvalidHeight { .. } => (StatusCode::BAD_REQUEST, "INVALID_HEIGHT"),
            ApiError::Geometry(_) => (StatusCode::INTERNAL_SERVER_ERROR, "GEOMETRY_ERROR"),
            ApiError::Emission(_) => (StatusCode::INTERNAL_SERVER_ERROR, "MODEL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
            ApiError::Join(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TASK_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<spacegen_geometry::Error> for ApiError {
    fn from(err: spacegen_geometry::Error) -> Self {
        match err {
            spacegen_geometry::Error::BoundaryTooShort { name, points } => {
                ApiError::InvalidBoundary { name, points }
            }
            spacegen_geometry::Error::InvalidHeight { name, height } => {
                ApiError::InvalidHeight { name, height }
            }
            err @ spacegen_geometry::Error::DegenerateBoundary { .. } => {
                ApiError::Geometry(err.to_string())
            }
        }
    }
}

impl From<spacegen_model::Error> for ApiError {
    fn from(err: spacegen_model::Error) -> Self {
        ApiError::Emission(err.to_string())
    }
}

impl From<BuildError> for ApiError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::Geometry(e) => e.into(),
            BuildError::Model(e) => e.into(),
            BuildError::Io(e) => e.into(),
        }
    }
}
