// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request types for the API.

use serde::Deserialize;
use spacegen_geometry::Space;

/// Full floor-plan payload for one generation request.
#[derive(Debug, Deserialize)]
pub struct BuildingInput {
    /// All spaces of the plan, primary and core alike.
    pub spaces: Vec<Space>,
}
