// Copyright 2025 the Boothplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlap queries over sets of boxes.
//!
//! A floor plan holds at most a few hundred booths, so the any-overlap query
//! is a short-circuiting linear scan over whatever iterator the caller has
//! at hand. No spatial acceleration structure is kept in sync.

use crate::types::Aabb;

/// Whether `candidate` overlaps any box in `existing`.
///
/// Short-circuits on the first hit. Uses the half-open
/// [`Aabb::intersects`] convention, so flush neighbors do not count.
pub fn overlaps_any<I>(candidate: Aabb, existing: I) -> bool
where
    I: IntoIterator<Item = Aabb>,
{
    existing.into_iter().any(|a| candidate.intersects(&a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Point, Size};

    fn booth(x: i32, y: i32) -> Aabb {
        Aabb::from_origin_size(Point::new(x, y), Size::new(10, 10))
    }

    #[test]
    fn empty_set_never_overlaps() {
        assert!(!overlaps_any(booth(0, 0), []));
    }

    #[test]
    fn detects_single_overlap_in_set() {
        let existing = [booth(0, 0), booth(20, 0), booth(40, 0)];
        assert!(overlaps_any(booth(25, 5), existing));
        assert!(!overlaps_any(booth(0, 20), existing));
    }

    #[test]
    fn flush_neighbors_do_not_count() {
        let existing = [booth(0, 0), booth(10, 0)];
        assert!(!overlaps_any(booth(20, 0), existing));
    }
}
