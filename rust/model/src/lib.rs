// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spacegen Model
//!
//! A minimal IFC4 authoring layer: one exclusively owned [`IfcModel`] per
//! request accumulates entities into a STEP/SPF document. The builder covers
//! exactly the shapes this service emits - a fixed spatial hierarchy
//! (project, site, building, one storey) and swept-solid spaces whose
//! profiles may carry voids.

pub mod document;
pub mod error;
pub mod guid;
pub mod step;

pub use document::{IfcModel, SpaceSolid};
pub use error::{Error, Result};
pub use guid::new_guid;
pub use step::{StepFile, StepId};
