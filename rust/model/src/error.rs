// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for model authoring
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or writing an IFC document
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid profile for '{name}': {reason}")]
    InvalidProfile { name: String, reason: String },

    #[error("Invalid extrusion for '{name}': depth {depth} must be positive")]
    InvalidExtrusion { name: String, depth: f64 },
}
