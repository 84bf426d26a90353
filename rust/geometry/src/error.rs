// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for boundary processing
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving space boundaries
#[derive(Error, Debug)]
pub enum Error {
    #[error("Boundary of '{name}' has only {points} distinct points, need at least 3")]
    BoundaryTooShort { name: String, points: usize },

    #[error("Boundary of '{name}' is degenerate: no area remains after repair")]
    DegenerateBoundary { name: String },

    #[error("Space '{name}' has non-positive height {height}")]
    InvalidHeight { name: String, height: f64 },
}
