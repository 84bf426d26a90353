// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input space description.

/// One space of a floor plan as supplied by the caller.
///
/// The boundary is an ordered ring of XY points and may arrive open (last
/// point omitting the repeat of the first) or closed. Core spaces are never
/// modeled on their own; they only carve voids out of the primary spaces
/// that fully enclose them.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Space {
    /// Display name, carried through to the emitted entity.
    pub name: String,
    /// Ordered XY boundary points, at least 3 distinct.
    pub boundary: Vec<[f64; 2]>,
    /// Vertical extent of the space (extrusion distance).
    pub height: f64,
    /// Elevation of the bottom face.
    #[cfg_attr(feature = "serde", serde(rename = "baseZ", default))]
    pub base_z: f64,
    /// Marks a void-source space rather than an independently modeled room.
    #[cfg_attr(feature = "serde", serde(rename = "isCore", default))]
    pub is_core: bool,
}

impl Space {
    /// Top elevation of the space's vertical interval.
    pub fn top_z(&self) -> f64 {
        self.base_z + self.height
    }
}
