// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ring-level boundary operations.

use nalgebra::Point2;

/// Close a boundary ring by appending the first point when the ring does not
/// already end where it starts. Pure: always returns a new ring, never
/// mutates the input. Idempotent on closed rings.
pub fn close_ring(ring: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let mut closed: Vec<Point2<f64>> = ring.to_vec();
    if let (Some(first), Some(last)) = (ring.first(), ring.last()) {
        if first != last {
            closed.push(*first);
        }
    }
    closed
}

/// Number of distinct points in a ring, ignoring a closing repeat of the
/// first point.
pub fn distinct_points(ring: &[Point2<f64>]) -> usize {
    let mut seen: Vec<Point2<f64>> = Vec::with_capacity(ring.len());
    for p in ring {
        if !seen.contains(p) {
            seen.push(*p);
        }
    }
    seen.len()
}

/// Signed area of a ring (shoelace formula).
/// Positive = counter-clockwise, negative = clockwise.
pub fn signed_area(ring: &[Point2<f64>]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    let n = ring.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area += ring[i].x * ring[j].y;
        area -= ring[j].x * ring[i].y;
    }

    area * 0.5
}
