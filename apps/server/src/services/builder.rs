// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Model building service: resolves voids, emits the IFC document, and
//! persists the artifact.
//!
//! Spaces are emitted sequentially against one document because entity ids
//! auto-increment inside it; the whole build runs synchronously on a
//! blocking thread per request.

use std::fs;
use std::path::{Path, PathBuf};

use spacegen_geometry::{resolve_spaces, Space};
use spacegen_model::{IfcModel, SpaceSolid};
use thiserror::Error;
use uuid::Uuid;

/// Errors from one build run.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Geometry(#[from] spacegen_geometry::Error),

    #[error(transparent)]
    Model(#[from] spacegen_model::Error),

    #[error("Failed to write artifact: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a successful build.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Serialized IFC document.
    pub bytes: Vec<u8>,
    /// Where the artifact was written. The file is not cleaned up after the
    /// response is sent.
    pub path: PathBuf,
    /// Number of primary spaces emitted.
    pub space_count: usize,
    /// Number of void boundaries carved across all spaces.
    pub void_count: usize,
}

/// Build the IFC artifact for one request and write it to `output_dir`.
pub fn build_artifact(spaces: &[Space], output_dir: &Path) -> Result<BuildOutcome, BuildError> {
    let resolved = resolve_spaces(spaces)?;

    let mut model = IfcModel::new("Project");
    let mut void_count = 0;
    for space in &resolved {
        let outer: Vec<[f64; 2]> = space.outer.iter().map(|p| [p.x, p.y]).collect();
        let voids: Vec<Vec<[f64; 2]>> = space
            .voids
            .iter()
            .map(|ring| ring.iter().map(|p| [p.x, p.y]).collect())
            .collect();
        void_count += voids.len();

        model.add_space(&SpaceSolid {
            name: &space.name,
            outer: &outer,
            voids: &voids,
            base_z: space.base_z,
            height: space.height,
        })?;
    }

    let space_count = model.space_count();
    let contents = model.finish();

    let path = output_dir.join(format!("spacegen-{}.ifc", Uuid::new_v4()));
    fs::write(&path, &contents)?;

    Ok(BuildOutcome {
        bytes: contents.into_bytes(),
        path,
        space_count,
        void_count,
    })
}
