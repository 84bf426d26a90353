// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC generation endpoint.

use crate::error::ApiError;
use crate::services::build_artifact;
use crate::types::BuildingInput;
use crate::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
    Json,
};

/// POST /generate-ifc - Generate an IFC model from a floor plan.
///
/// The whole build runs to completion on a blocking thread; any failure
/// aborts the request with no partial artifact.
pub async fn generate_ifc(
    State(state): State<AppState>,
    Json(payload): Json<BuildingInput>,
) -> Result<Response, ApiError> {
    tracing::debug!(input = ?payload, "Received floor plan");

    // Validate boundaries before any geometry work
    for space in &payload.spaces {
        if space.boundary.len() < 3 {
            return Err(ApiError::InvalidBoundary {
                name: space.name.clone(),
                points: space.boundary.len(),
            });
        }
    }

    let output_dir = state.config.output_dir.clone();
    let spaces = payload.spaces;

    // Build on the blocking pool (CPU-bound, fully synchronous)
    let outcome =
        tokio::task::spawn_blocking(move || build_artifact(&spaces, &output_dir)).await??;

    tracing::info!(
        space_count = outcome.space_count,
        void_count = outcome.void_count,
        bytes = outcome.bytes.len(),
        path = %outcome.path.display(),
        "Generated IFC artifact"
    );

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"building.ifc\"",
        )
        .body(Body::from(outcome.bytes))
        .map_err(|e| ApiError::Internal(e.to_string()))
}
