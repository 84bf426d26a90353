// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC document construction.
//!
//! [`IfcModel`] is a single-owner builder: `new` lays down the fixed spatial
//! hierarchy (one project, one site, one building, one storey) plus the 3D
//! representation context and SI units, `add_space` appends one swept-solid
//! space under the storey, and `finish` closes the aggregation and
//! serializes the document.

use crate::error::{Error, Result};
use crate::guid::new_guid;
use crate::step::{coords, real, refs, text, StepFile, StepId};

/// One extruded space to be emitted.
///
/// Rings are closed (first point repeated at the end). Void rings are
/// assumed pairwise non-overlapping; the resolver guarantees this.
#[derive(Debug)]
pub struct SpaceSolid<'a> {
    /// Name and LongName of the space.
    pub name: &'a str,
    /// Closed outer profile ring.
    pub outer: &'a [[f64; 2]],
    /// Closed inner (void) rings.
    pub voids: &'a [Vec<[f64; 2]>],
    /// World elevation of the bottom face, baked into the extrusion origin.
    pub base_z: f64,
    /// Extrusion distance along +Z.
    pub height: f64,
}

/// In-progress IFC document. One per request, exclusively owned.
#[derive(Debug)]
pub struct IfcModel {
    file: StepFile,
    context: StepId,
    storey: StepId,
    spaces: Vec<StepId>,
}

impl IfcModel {
    /// Create a document with the fixed organizational hierarchy.
    pub fn new(project_name: &str) -> Self {
        let mut file = StepFile::new();

        let origin = file.add(format!("IFCCARTESIANPOINT({})", coords(&[0.0, 0.0, 0.0])));
        let axis = file.add(format!("IFCAXIS2PLACEMENT3D({origin},$,$)"));
        let context = file.add(format!(
            "IFCGEOMETRICREPRESENTATIONCONTEXT($,'Model',3,{},{axis},$)",
            real(1e-5)
        ));

        let length = file.add("IFCSIUNIT(*,.LENGTHUNIT.,$,.METRE.)".to_string());
        let area = file.add("IFCSIUNIT(*,.AREAUNIT.,$,.SQUARE_METRE.)".to_string());
        let volume = file.add("IFCSIUNIT(*,.VOLUMEUNIT.,$,.CUBIC_METRE.)".to_string());
        let units = file.add(format!("IFCUNITASSIGNMENT({})", refs(&[length, area, volume])));

        let project = file.add(format!(
            "IFCPROJECT({},$,{},$,$,$,$,({context}),{units})",
            text(&new_guid()),
            text(project_name),
        ));
        let site = file.add(format!(
            "IFCSITE({},$,'Site',$,$,$,$,$,.ELEMENT.,$,$,$,$,$)",
            text(&new_guid()),
        ));
        let building = file.add(format!(
            "IFCBUILDING({},$,'Building',$,$,$,$,$,.ELEMENT.,$,$,$)",
            text(&new_guid()),
        ));
        let storey = file.add(format!(
            "IFCBUILDINGSTOREY({},$,'Storey 1',$,$,$,$,$,.ELEMENT.,$)",
            text(&new_guid()),
        ));

        let aggregate = |file: &mut StepFile, parent: StepId, child: StepId| {
            file.add(format!(
                "IFCRELAGGREGATES({},$,$,$,{parent},({child}))",
                text(&new_guid()),
            ));
        };
        aggregate(&mut file, project, site);
        aggregate(&mut file, site, building);
        aggregate(&mut file, building, storey);

        Self {
            file,
            context,
            storey,
            spaces: Vec::new(),
        }
    }

    /// Append one space entity: profile (with voids as holes), extrusion
    /// whose local origin sits at `(0,0,base_z)`, Body/SweptSolid shape, and
    /// the IfcSpace product placed at world origin.
    pub fn add_space(&mut self, solid: &SpaceSolid<'_>) -> Result<StepId> {
        if solid.height <= 0.0 {
            return Err(Error::InvalidExtrusion {
                name: solid.name.to_string(),
                depth: solid.height,
            });
        }

        let outer = self.polyline(solid.name, solid.outer)?;
        let profile = if solid.voids.is_empty() {
            self.file.add(format!(
                "IFCARBITRARYCLOSEDPROFILEDEF(.AREA.,{},{outer})",
                text(solid.name),
            ))
        } else {
            let mut inner = Vec::with_capacity(solid.voids.len());
            for ring in solid.voids {
                inner.push(self.polyline(solid.name, ring)?);
            }
            self.file.add(format!(
                "IFCARBITRARYPROFILEDEFWITHVOIDS(.AREA.,{},{outer},{})",
                text(solid.name),
                refs(&inner),
            ))
        };

        let direction = self
            .file
            .add(format!("IFCDIRECTION({})", coords(&[0.0, 0.0, 1.0])));
        let extrusion_origin = self.file.add(format!(
            "IFCCARTESIANPOINT({})",
            coords(&[0.0, 0.0, solid.base_z])
        ));
        let extrusion_axis = self
            .file
            .add(format!("IFCAXIS2PLACEMENT3D({extrusion_origin},$,$)"));
        let swept = self.file.add(format!(
            "IFCEXTRUDEDAREASOLID({profile},{extrusion_axis},{direction},{})",
            real(solid.height),
        ));

        let context = self.context;
        let body = self.file.add(format!(
            "IFCSHAPEREPRESENTATION({context},'Body','SweptSolid',({swept}))"
        ));
        let shape = self
            .file
            .add(format!("IFCPRODUCTDEFINITIONSHAPE($,$,({body}))"));

        let placement_origin = self
            .file
            .add(format!("IFCCARTESIANPOINT({})", coords(&[0.0, 0.0, 0.0])));
        let placement_axis = self
            .file
            .add(format!("IFCAXIS2PLACEMENT3D({placement_origin},$,$)"));
        let placement = self
            .file
            .add(format!("IFCLOCALPLACEMENT($,{placement_axis})"));

        let space = self.file.add(format!(
            "IFCSPACE({},$,{},$,$,{placement},{shape},{},.ELEMENT.,$,$)",
            text(&new_guid()),
            text(solid.name),
            text(solid.name),
        ));
        self.spaces.push(space);

        Ok(space)
    }

    /// Number of space entities added so far.
    pub fn space_count(&self) -> usize {
        self.spaces.len()
    }

    /// Close the storey aggregation and serialize the document.
    pub fn finish(mut self) -> String {
        if !self.spaces.is_empty() {
            let storey = self.storey;
            self.file.add(format!(
                "IFCRELAGGREGATES({},$,$,$,{storey},{})",
                text(&new_guid()),
                refs(&self.spaces),
            ));
        }
        self.file.serialize("building.ifc")
    }

    /// Emit a closed ring as 2D cartesian points plus a polyline that ends
    /// on the first point's id.
    fn polyline(&mut self, name: &str, ring: &[[f64; 2]]) -> Result<StepId> {
        if ring.len() < 4 {
            return Err(Error::InvalidProfile {
                name: name.to_string(),
                reason: format!("closed ring needs at least 4 points, got {}", ring.len()),
            });
        }
        if ring.first() != ring.last() {
            return Err(Error::InvalidProfile {
                name: name.to_string(),
                reason: "ring is not closed".to_string(),
            });
        }

        let mut points = Vec::with_capacity(ring.len());
        for p in &ring[..ring.len() - 1] {
            points.push(
                self.file
                    .add(format!("IFCCARTESIANPOINT({})", coords(&[p[0], p[1]]))),
            );
        }
        // Close by repeating the first point's id
        points.push(points[0]);

        Ok(self.file.add(format!("IFCPOLYLINE({})", refs(&points))))
    }
}
