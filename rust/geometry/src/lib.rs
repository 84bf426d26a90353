// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spacegen Geometry
//!
//! Boundary processing for floor-plan spaces: ring closing, polygon validity
//! repair, and resolution of core spaces into voids of the primary spaces
//! that enclose them. Boolean predicates are built on i_overlay, with
//! nalgebra points as the vertex type.

pub mod bool2d;
pub mod boundary;
pub mod error;
pub mod resolver;
pub mod space;

// Re-export nalgebra types for convenience
pub use nalgebra::Point2;

pub use boundary::{close_ring, distinct_points, signed_area};
pub use error::{Error, Result};
pub use resolver::{resolve_spaces, ResolvedSpace};
pub use space::Space;
