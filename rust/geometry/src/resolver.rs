// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Void resolution: which core spaces carve holes into which primary spaces.
//!
//! Core spaces qualify as voids of a primary space when their repaired
//! footprint is fully contained in the primary's repaired footprint and the
//! vertical intervals overlap with positive length. The repaired region is
//! used only for the predicates; the rings that travel onward are always the
//! caller's own boundaries, closed but otherwise untouched.

use crate::bool2d::{contains, overlaps, region_area, repair, union_rings, Region, MIN_AREA_THRESHOLD};
use crate::boundary::{close_ring, distinct_points};
use crate::error::{Error, Result};
use crate::space::Space;
use nalgebra::Point2;

/// A primary space with its resolved void boundaries, ready for emission.
#[derive(Debug, Clone)]
pub struct ResolvedSpace {
    /// Display name of the primary space.
    pub name: String,
    /// Closed outer ring (the original boundary, not the repaired region).
    pub outer: Vec<Point2<f64>>,
    /// Closed rings of the qualifying void footprints, in input order.
    pub voids: Vec<Vec<Point2<f64>>>,
    /// Elevation of the bottom face.
    pub base_z: f64,
    /// Extrusion distance along +Z.
    pub height: f64,
}

/// A space whose boundary has been closed and repaired.
struct Prepared<'a> {
    space: &'a Space,
    closed: Vec<Point2<f64>>,
    region: Region,
}

fn prepare(space: &Space) -> Result<Prepared<'_>> {
    if space.height <= 0.0 {
        return Err(Error::InvalidHeight {
            name: space.name.clone(),
            height: space.height,
        });
    }

    let points: Vec<Point2<f64>> = space
        .boundary
        .iter()
        .map(|p| Point2::new(p[0], p[1]))
        .collect();

    let distinct = distinct_points(&points);
    if distinct < 3 {
        return Err(Error::BoundaryTooShort {
            name: space.name.clone(),
            points: distinct,
        });
    }

    let closed = close_ring(&points);
    let region = repair(&closed);
    if region_area(&region) <= MIN_AREA_THRESHOLD {
        return Err(Error::DegenerateBoundary {
            name: space.name.clone(),
        });
    }

    Ok(Prepared {
        space,
        closed,
        region,
    })
}

/// Length of the overlap of the two spaces' vertical intervals.
fn vertical_overlap(main: &Space, core: &Space) -> f64 {
    let start = main.base_z.max(core.base_z);
    let end = main.top_z().min(core.top_z());
    end - start
}

/// Resolve the full space list of one request into primary spaces with
/// their void boundaries. Input order is preserved for both the primary
/// spaces and the voids within each.
pub fn resolve_spaces(spaces: &[Space]) -> Result<Vec<ResolvedSpace>> {
    let prepared: Vec<Prepared<'_>> = spaces.iter().map(prepare).collect::<Result<_>>()?;

    let (mains, cores): (Vec<&Prepared<'_>>, Vec<&Prepared<'_>>) =
        prepared.iter().partition(|p| !p.space.is_core);

    let mut resolved = Vec::with_capacity(mains.len());
    for main in mains {
        let qualifying: Vec<&Prepared<'_>> = cores
            .iter()
            .filter(|core| {
                // Strict: touching intervals do not overlap
                vertical_overlap(main.space, core.space) > 0.0
                    && contains(&main.region, &core.region)
            })
            .copied()
            .collect();

        let voids = merge_overlapping(&qualifying);

        resolved.push(ResolvedSpace {
            name: main.space.name.clone(),
            outer: main.closed.clone(),
            voids,
            base_z: main.space.base_z,
            height: main.space.height,
        });
    }

    Ok(resolved)
}

/// Void rings for one primary space. Disjoint voids pass through as the
/// original closed rings; mutually overlapping voids are unioned so the
/// emitted profile never carries intersecting inner curves.
fn merge_overlapping(qualifying: &[&Prepared<'_>]) -> Vec<Vec<Point2<f64>>> {
    let any_overlap = qualifying.iter().enumerate().any(|(i, a)| {
        qualifying[i + 1..]
            .iter()
            .any(|b| overlaps(&a.region, &b.region))
    });

    if !any_overlap {
        return qualifying.iter().map(|p| p.closed.clone()).collect();
    }

    let rings: Vec<Vec<Point2<f64>>> = qualifying.iter().map(|p| p.closed.clone()).collect();
    union_rings(&rings)
        .iter()
        .map(|ring| close_ring(ring))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, size: f64) -> Vec<[f64; 2]> {
        vec![
            [x0, y0],
            [x0 + size, y0],
            [x0 + size, y0 + size],
            [x0, y0 + size],
        ]
    }

    fn main_space(name: &str, boundary: Vec<[f64; 2]>, base_z: f64, height: f64) -> Space {
        Space {
            name: name.into(),
            boundary,
            height,
            base_z,
            is_core: false,
        }
    }

    fn core_space(name: &str, boundary: Vec<[f64; 2]>, base_z: f64, height: f64) -> Space {
        Space {
            name: name.into(),
            boundary,
            height,
            base_z,
            is_core: true,
        }
    }

    #[test]
    fn contained_core_becomes_a_void() {
        let spaces = vec![
            main_space("Room", square(0.0, 0.0, 10.0), 0.0, 3.0),
            core_space("Shaft", square(2.0, 2.0, 2.0), 0.0, 3.0),
        ];

        let resolved = resolve_spaces(&spaces).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].voids.len(), 1);
        // Void ring is the core's own boundary, closed
        assert_eq!(resolved[0].voids[0].len(), 5);
        assert_eq!(resolved[0].voids[0].first(), resolved[0].voids[0].last());
    }

    #[test]
    fn core_spaces_are_never_modeled_on_their_own() {
        let spaces = vec![core_space("Shaft", square(0.0, 0.0, 2.0), 0.0, 3.0)];
        let resolved = resolve_spaces(&spaces).unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn straddling_core_is_excluded() {
        let spaces = vec![
            main_space("Room", square(0.0, 0.0, 10.0), 0.0, 3.0),
            core_space("Shaft", square(8.0, 2.0, 4.0), 0.0, 3.0),
        ];

        let resolved = resolve_spaces(&spaces).unwrap();
        assert!(resolved[0].voids.is_empty());
    }

    #[test]
    fn outside_core_is_excluded() {
        let spaces = vec![
            main_space("Room", square(0.0, 0.0, 10.0), 0.0, 3.0),
            core_space("Shaft", square(20.0, 20.0, 2.0), 0.0, 3.0),
        ];

        let resolved = resolve_spaces(&spaces).unwrap();
        assert!(resolved[0].voids.is_empty());
    }

    #[test]
    fn touching_vertical_intervals_do_not_qualify() {
        // Main [0, 3), core [3, 5): overlap length is exactly zero
        let spaces = vec![
            main_space("Room", square(0.0, 0.0, 10.0), 0.0, 3.0),
            core_space("Shaft", square(2.0, 2.0, 2.0), 3.0, 2.0),
        ];

        let resolved = resolve_spaces(&spaces).unwrap();
        assert!(resolved[0].voids.is_empty());
    }

    #[test]
    fn vertically_disjoint_core_is_excluded_despite_xy_containment() {
        let spaces = vec![
            main_space("Room", square(0.0, 0.0, 10.0), 0.0, 3.0),
            core_space("Shaft", square(2.0, 2.0, 2.0), 5.0, 2.0),
        ];

        let resolved = resolve_spaces(&spaces).unwrap();
        assert!(resolved[0].voids.is_empty());
    }

    #[test]
    fn disjoint_contained_cores_all_qualify() {
        let cores = [
            square(1.0, 1.0, 1.0),
            square(4.0, 4.0, 1.0),
            square(7.0, 7.0, 1.0),
        ];
        let mut spaces = vec![main_space("Room", square(0.0, 0.0, 10.0), 0.0, 3.0)];
        for (i, c) in cores.iter().enumerate() {
            spaces.push(core_space(&format!("Shaft {i}"), c.clone(), 0.0, 3.0));
        }

        let resolved = resolve_spaces(&spaces).unwrap();
        assert_eq!(resolved[0].voids.len(), 3);

        // Order-independent: reversing the core order yields the same count
        let mut reversed = vec![spaces[0].clone()];
        reversed.extend(spaces[1..].iter().rev().cloned());
        let resolved = resolve_spaces(&reversed).unwrap();
        assert_eq!(resolved[0].voids.len(), 3);
    }

    #[test]
    fn overlapping_voids_are_unioned() {
        let spaces = vec![
            main_space("Room", square(0.0, 0.0, 10.0), 0.0, 3.0),
            core_space("Shaft A", square(2.0, 2.0, 3.0), 0.0, 3.0),
            core_space("Shaft B", square(4.0, 2.0, 3.0), 0.0, 3.0),
        ];

        let resolved = resolve_spaces(&spaces).unwrap();
        assert_eq!(resolved[0].voids.len(), 1);
        assert_eq!(resolved[0].voids[0].first(), resolved[0].voids[0].last());
    }

    #[test]
    fn self_intersecting_main_still_contains_core_in_one_lobe() {
        // Bowtie main space; the core sits inside the bottom lobe
        let bowtie = vec![[0.0, 0.0], [10.0, 0.0], [0.0, 10.0], [10.0, 10.0]];
        let spaces = vec![
            main_space("Lobes", bowtie, 0.0, 3.0),
            core_space("Shaft", vec![[4.0, 1.0], [6.0, 1.0], [5.0, 2.0]], 0.0, 3.0),
        ];

        let resolved = resolve_spaces(&spaces).unwrap();
        assert_eq!(resolved[0].voids.len(), 1);
    }

    #[test]
    fn two_point_boundary_is_rejected() {
        let spaces = vec![main_space("Line", vec![[0.0, 0.0], [1.0, 1.0]], 0.0, 3.0)];
        let err = resolve_spaces(&spaces).unwrap_err();
        assert!(matches!(err, Error::BoundaryTooShort { points: 2, .. }));
    }

    #[test]
    fn zero_area_boundary_is_rejected() {
        // Three distinct but collinear points
        let spaces = vec![main_space(
            "Sliver",
            vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]],
            0.0,
            3.0,
        )];
        let err = resolve_spaces(&spaces).unwrap_err();
        assert!(matches!(err, Error::DegenerateBoundary { .. }));
    }

    #[test]
    fn non_positive_height_is_rejected() {
        let spaces = vec![main_space("Flat", square(0.0, 0.0, 4.0), 0.0, 0.0)];
        let err = resolve_spaces(&spaces).unwrap_err();
        assert!(matches!(err, Error::InvalidHeight { .. }));
    }

    #[test]
    fn main_space_order_is_preserved() {
        let spaces = vec![
            main_space("A", square(0.0, 0.0, 4.0), 0.0, 3.0),
            core_space("Shaft", square(1.0, 1.0, 1.0), 0.0, 3.0),
            main_space("B", square(10.0, 0.0, 4.0), 0.0, 3.0),
        ];

        let resolved = resolve_spaces(&spaces).unwrap();
        let names: Vec<&str> = resolved.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn outer_ring_is_the_original_boundary_closed() {
        let spaces = vec![main_space("Room", square(0.0, 0.0, 10.0), 0.0, 3.0)];
        let resolved = resolve_spaces(&spaces).unwrap();

        let outer = &resolved[0].outer;
        assert_eq!(outer.len(), 5);
        assert_eq!(outer[0], Point2::new(0.0, 0.0));
        assert_eq!(outer[1], Point2::new(10.0, 0.0));
        assert_eq!(outer.first(), outer.last());
    }
}
