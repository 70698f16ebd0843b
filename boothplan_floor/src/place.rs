// Copyright 2025 the Boothplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement strategies: finding a free position for a new booth.
//!
//! ## Overview
//!
//! A strategy proposes a top-left position for a booth of a requested size
//! such that the booth lies fully within the surface and overlaps nothing
//! already in the plan. The search policy is pluggable behind
//! [`PlacementStrategy`] so a session can pick the behavior it wants without
//! the plan caring:
//!
//! - [`RandomProbe`] draws candidate positions uniformly and keeps the first
//!   free one. Bounded and probabilistic: it can report
//!   [`PlaceError::NoSpace`] even though a gap exists. Good for organically
//!   scattered layouts.
//! - [`ShelfPacker`] fills rows left to right, wrapping to a new row when
//!   the right edge is reached, and slides a candidate downward when the row
//!   model disagrees with reality (booths get dragged around after
//!   placement). Good for dense, tidy layouts.
//!
//! Strategies are stateless over the plan: they read it through
//! [`FloorPlan::overlaps_existing`](crate::FloorPlan::overlaps_existing) and
//! never mutate it. The shelf packer keeps cursor state of its own; call
//! [`ShelfPacker::reset`] alongside a plan clear.

use boothplan_geom::{Aabb, Point, Size, Surface};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::plan::FloorPlan;

/// Default probe budget for [`RandomProbe`].
pub const DEFAULT_PROBE_ATTEMPTS: u32 = 100;

/// Default padding between shelf-packed booths, in pixels.
pub const DEFAULT_SHELF_PADDING: i32 = 10;

/// Why a placement request produced no position.
///
/// Both variants are non-fatal: the plan is unchanged and the caller is
/// expected to surface a warning and carry on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    /// The search strategy found no free position.
    #[error("no free space left on the surface")]
    NoSpace,
    /// The requested size cannot fit the surface at all.
    #[error("requested size does not fit the surface")]
    InvalidSize,
}

/// A policy that proposes non-overlapping positions for new booths.
pub trait PlacementStrategy {
    /// Propose a top-left position for a booth of `size` on `surface`.
    ///
    /// On success the resulting box is fully inside the surface and does not
    /// overlap any booth in `plan`. The plan is never mutated here; the
    /// caller appends the booth on success.
    fn propose(
        &mut self,
        plan: &FloorPlan,
        surface: Surface,
        size: Size,
    ) -> Result<Point, PlaceError>;

    /// Forget any internal cursor state.
    ///
    /// Called by sessions when the plan is cleared. The default does
    /// nothing; only stateful strategies care.
    fn reset(&mut self) {}
}

fn check_size(surface: Surface, size: Size) -> Result<(), PlaceError> {
    if !size.is_positive() || !surface.fits(size) {
        return Err(PlaceError::InvalidSize);
    }
    Ok(())
}

/// Bounded random probing.
///
/// Draws up to `attempts` uniform positions over the valid origin range and
/// returns the first that overlaps nothing. The RNG is injected rather than
/// taken from global state so tests and replays are deterministic.
#[derive(Clone, Debug)]
pub struct RandomProbe<R = StdRng> {
    rng: R,
    attempts: u32,
}

impl RandomProbe<StdRng> {
    /// Deterministic probe seeded from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomProbe<R> {
    /// Probe using the given RNG and the default attempt budget.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            attempts: DEFAULT_PROBE_ATTEMPTS,
        }
    }

    /// Override the attempt budget.
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }
}

impl<R: Rng> PlacementStrategy for RandomProbe<R> {
    fn propose(
        &mut self,
        plan: &FloorPlan,
        surface: Surface,
        size: Size,
    ) -> Result<Point, PlaceError> {
        check_size(surface, size)?;
        for _ in 0..self.attempts {
            let x = self.rng.gen_range(0..=surface.width - size.width);
            let y = self.rng.gen_range(0..=surface.height - size.height);
            let origin = Point::new(x, y);
            let candidate = Aabb::from_origin_size(origin, size);
            if !plan.overlaps_existing(candidate) {
                return Ok(origin);
            }
        }
        // Best-effort search: free space may still exist after the budget
        // runs out.
        Err(PlaceError::NoSpace)
    }
}

/// Shelf packing: left-to-right rows with wraparound and a fallback scan.
///
/// Keeps a cursor past the last shelf-placed booth and the current row
/// height. A candidate that would cross the right edge wraps to a new row.
/// Because booths can be dragged anywhere after placement, the shelf model
/// and the plan can diverge; when the shelf candidate overlaps, the packer
/// slides it downward by `height + padding` until it is free or runs off the
/// bottom of the surface.
#[derive(Clone, Debug)]
pub struct ShelfPacker {
    cursor_x: i32,
    row_top: i32,
    row_height: i32,
    padding: i32,
}

impl Default for ShelfPacker {
    fn default() -> Self {
        Self::new()
    }
}

impl ShelfPacker {
    /// Packer with the default padding.
    pub const fn new() -> Self {
        Self::with_padding(DEFAULT_SHELF_PADDING)
    }

    /// Packer with an explicit padding between booths.
    pub const fn with_padding(padding: i32) -> Self {
        Self {
            cursor_x: padding,
            row_top: padding,
            row_height: 0,
            padding,
        }
    }
}

impl PlacementStrategy for ShelfPacker {
    fn propose(
        &mut self,
        plan: &FloorPlan,
        surface: Surface,
        size: Size,
    ) -> Result<Point, PlaceError> {
        check_size(surface, size)?;

        // Work on local copies so a failed request leaves the cursor alone.
        let mut x = self.cursor_x;
        let mut row_top = self.row_top;
        let mut row_height = self.row_height;
        if x + size.width > surface.width {
            x = self.padding;
            row_top += row_height + self.padding;
            row_height = 0;
        }
        if x + size.width > surface.width {
            // Wider than the padded surface; no row can hold it.
            return Err(PlaceError::NoSpace);
        }

        let mut y = row_top;
        loop {
            if y + size.height > surface.height {
                return Err(PlaceError::NoSpace);
            }
            let candidate = Aabb::from_origin_size(Point::new(x, y), size);
            if !plan.overlaps_existing(candidate) {
                break;
            }
            y += size.height + self.padding;
        }

        self.cursor_x = x + size.width + self.padding;
        self.row_top = row_top;
        self.row_height = row_height.max(size.height);
        Ok(Point::new(x, y))
    }

    fn reset(&mut self) {
        *self = Self::with_padding(self.padding);
    }
}
