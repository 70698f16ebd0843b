// Copyright 2025 the Boothplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the floor plan: booth identifiers, flags, colors, and the
//! booth value type itself.

use boothplan_geom::{Aabb, Point, Size};

/// Identifier for a booth in a [`FloorPlan`](crate::FloorPlan).
///
/// This is a small, copyable handle that stays stable across updates but
/// becomes invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On add, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `BoothId` that pointed to
///   that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a
///   new, distinct `BoothId`.
///
/// Use [`FloorPlan::is_alive`](crate::FloorPlan::is_alive) to check whether a
/// `BoothId` still refers to a live booth. Stale ids never alias a different
/// live booth because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BoothId(pub(crate) u32, pub(crate) u32);

impl BoothId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Transient UI state of a booth.
    ///
    /// These flags exist for the interaction layer and renderers; they are
    /// never persisted and geometry queries ignore them.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BoothFlags: u8 {
        /// Booth is the current selection (at most one per plan).
        const SELECTED = 0b0000_0001;
        /// Booth is being dragged right now.
        const DRAGGING = 0b0000_0010;
    }
}

/// Opaque display color tag, `0xRRGGBB`.
///
/// The engine never interprets the value; it is carried from placement to
/// the renderer and through persistence unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColorTag(u32);

impl ColorTag {
    /// Create a tag from a packed `0xRRGGBB` value.
    pub const fn new(rgb: u32) -> Self {
        Self(rgb)
    }

    /// The packed `0xRRGGBB` value.
    pub const fn rgb(self) -> u32 {
        self.0
    }
}

/// A placed booth: mutable position, fixed size and color, transient flags.
///
/// The size is immutable after creation and both extents must be positive
/// for the booth's lifetime (asserted in debug builds). The position moves
/// freely: placement sets it once and drags rewrite it without constraint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Booth {
    position: Point,
    size: Size,
    color: ColorTag,
    flags: BoothFlags,
}

impl Booth {
    /// Create a booth at `position` with the given size and color.
    ///
    /// Debug builds assert that both extents are positive.
    pub fn new(position: Point, size: Size, color: ColorTag) -> Self {
        debug_assert!(size.is_positive(), "booth extents must be positive");
        Self {
            position,
            size,
            color,
            flags: BoothFlags::empty(),
        }
    }

    /// Top-left corner.
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Move the booth to a new top-left corner.
    pub const fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Extent of the booth.
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Display color tag.
    pub const fn color(&self) -> ColorTag {
        self.color
    }

    /// Current transient flags.
    pub const fn flags(&self) -> BoothFlags {
        self.flags
    }

    /// Whether the booth is the current selection.
    pub const fn is_selected(&self) -> bool {
        self.flags.contains(BoothFlags::SELECTED)
    }

    /// Whether the booth is being dragged.
    pub const fn is_dragging(&self) -> bool {
        self.flags.contains(BoothFlags::DRAGGING)
    }

    /// Set or clear a transient flag.
    pub fn set_flag(&mut self, flag: BoothFlags, on: bool) {
        self.flags.set(flag, on);
    }

    /// The booth's bounds at its current position.
    pub const fn aabb(&self) -> Aabb {
        Aabb::from_origin_size(self.position, self.size)
    }
}
