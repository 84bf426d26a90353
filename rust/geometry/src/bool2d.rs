// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 2D boolean predicates on space boundaries.
//!
//! This module wraps the i_overlay crate with the three operations the void
//! resolver needs: repairing a possibly self-intersecting ring into a valid
//! (possibly multi-part) region, boundary-inclusive containment, and
//! unioning of overlapping void footprints.

use crate::boundary::signed_area;
use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;
use nalgebra::Point2;

/// Minimum area threshold - regions smaller than this are considered empty
pub const MIN_AREA_THRESHOLD: f64 = 1e-10;

/// A resolved planar region: a list of contours with non-zero winding.
/// Outer contours wind counter-clockwise, holes clockwise.
pub type Region = Vec<Vec<[f64; 2]>>;

/// Convert a ring to an i_overlay path, dropping a closing repeat of the
/// first point (i_overlay paths are implicitly closed).
pub fn ring_to_path(ring: &[Point2<f64>]) -> Vec<[f64; 2]> {
    let mut path: Vec<[f64; 2]> = ring.iter().map(|p| [p.x, p.y]).collect();
    if path.len() > 1 && path.first() == path.last() {
        path.pop();
    }
    path
}

/// Repair a ring into a valid region by resolving it against an empty clip.
///
/// A valid ring comes back unchanged in area and vertex set; a
/// self-intersecting ring is split into the valid multi-part region its
/// winding describes. Idempotent.
pub fn repair(ring: &[Point2<f64>]) -> Region {
    let subject = vec![ring_to_path(ring)];
    let clip: Vec<Vec<[f64; 2]>> = Vec::new();

    let shapes = subject.overlay(&clip, OverlayRule::Subject, FillRule::NonZero);
    flatten(shapes)
}

/// Net area of a region (outer contours positive, holes negative).
pub fn region_area(region: &Region) -> f64 {
    region
        .iter()
        .map(|contour| {
            let points: Vec<Point2<f64>> =
                contour.iter().map(|p| Point2::new(p[0], p[1])).collect();
            signed_area(&points)
        })
        .sum::<f64>()
        .abs()
}

/// Boundary-inclusive containment: `outer` contains `inner` when nothing of
/// `inner` remains after subtracting `outer` from it.
pub fn contains(outer: &Region, inner: &Region) -> bool {
    let leftover = inner.overlay(outer, OverlayRule::Difference, FillRule::NonZero);
    region_area(&flatten(leftover)) <= MIN_AREA_THRESHOLD
}

/// Whether two regions overlap with positive area.
pub fn overlaps(a: &Region, b: &Region) -> bool {
    let shared = a.overlay(b, OverlayRule::Intersect, FillRule::NonZero);
    region_area(&flatten(shared)) > MIN_AREA_THRESHOLD
}

/// Union a set of rings into merged contours.
///
/// Used to combine mutually overlapping void footprints before they are
/// carved out of a primary space's profile.
pub fn union_rings(rings: &[Vec<Point2<f64>>]) -> Vec<Vec<Point2<f64>>> {
    if rings.is_empty() {
        return Vec::new();
    }
    if rings.len() == 1 {
        return rings.to_vec();
    }

    let subject: Vec<Vec<[f64; 2]>> = vec![ring_to_path(&rings[0])];
    let clip: Vec<Vec<[f64; 2]>> = rings[1..].iter().map(|r| ring_to_path(r)).collect();

    let shapes = subject.overlay(&clip, OverlayRule::Union, FillRule::NonZero);

    let mut contours = Vec::new();
    for shape in shapes {
        for contour in shape {
            let points: Vec<Point2<f64>> =
                contour.into_iter().map(|p| Point2::new(p[0], p[1])).collect();
            if points.len() >= 3 {
                contours.push(points);
            }
        }
    }
    contours
}

/// Flatten i_overlay shapes (shape = list of contours) into one contour list.
/// Winding is preserved, so the result reconstructs the same region under
/// the non-zero fill rule.
fn flatten(shapes: Vec<Vec<Vec<[f64; 2]>>>) -> Region {
    shapes.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(x0: f64, y0: f64, size: f64) -> Vec<Point2<f64>> {
        vec![
            Point2::new(x0, y0),
            Point2::new(x0 + size, y0),
            Point2::new(x0 + size, y0 + size),
            Point2::new(x0, y0 + size),
        ]
    }

    #[test]
    fn repair_preserves_valid_square() {
        let region = repair(&square(0.0, 0.0, 10.0));

        assert_eq!(region.len(), 1);
        assert_eq!(region[0].len(), 4);
        assert_relative_eq!(region_area(&region), 100.0);
    }

    #[test]
    fn repair_resolves_bowtie_into_two_parts() {
        // Self-intersecting "bowtie": edges cross at (5, 5)
        let bowtie = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 10.0),
        ];
        let region = repair(&bowtie);

        assert!(region.len() >= 2);
        // Two triangles of base 10 and height 5 each
        assert_relative_eq!(region_area(&region), 50.0, epsilon = 1e-6);
    }

    #[test]
    fn contains_is_boundary_inclusive() {
        let outer = repair(&square(0.0, 0.0, 10.0));
        let inner = repair(&square(0.0, 0.0, 10.0));

        assert!(contains(&outer, &inner));
    }

    #[test]
    fn straddling_square_is_not_contained() {
        let outer = repair(&square(0.0, 0.0, 10.0));
        let straddling = repair(&square(8.0, 2.0, 4.0));

        assert!(!contains(&outer, &straddling));
        assert!(overlaps(&outer, &straddling));
    }

    #[test]
    fn disjoint_squares_do_not_overlap() {
        let a = repair(&square(0.0, 0.0, 4.0));
        let b = repair(&square(5.0, 0.0, 4.0));

        assert!(!overlaps(&a, &b));
        assert!(!contains(&a, &b));
    }

    #[test]
    fn union_merges_overlapping_rings() {
        let rings = vec![square(0.0, 0.0, 4.0), square(2.0, 0.0, 4.0)];
        let merged = union_rings(&rings);

        assert_eq!(merged.len(), 1);
        // 4x4 + 4x4 - 2x4 shared
        assert_relative_eq!(signed_area(&merged[0]).abs(), 24.0, epsilon = 1e-6);
    }

    #[test]
    fn union_keeps_disjoint_rings_apart() {
        let rings = vec![square(0.0, 0.0, 2.0), square(5.0, 5.0, 2.0)];
        let merged = union_rings(&rings);

        assert_eq!(merged.len(), 2);
    }
}
