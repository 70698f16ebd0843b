// Copyright 2025 the Boothplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry value types.

use core::ops::{Add, Sub};

/// A position on the surface, in integer surface-local pixels.
///
/// The origin is the surface's top-left corner; `x` grows rightward and `y`
/// grows downward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Create a point from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A translation between two points.
///
/// Produced by subtracting points; used for drag grab offsets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Horizontal component.
    pub dx: i32,
    /// Vertical component.
    pub dy: i32,
}

impl Offset {
    /// Create an offset from its components.
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl Sub for Point {
    type Output = Offset;

    fn sub(self, rhs: Self) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<Offset> for Point {
    type Output = Self;

    fn sub(self, rhs: Offset) -> Self {
        Self::new(self.x - rhs.dx, self.y - rhs.dy)
    }
}

impl Add<Offset> for Point {
    type Output = Self;

    fn add(self, rhs: Offset) -> Self {
        Self::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

/// Extent of a booth, in integer pixels.
///
/// Both extents are expected to be positive wherever a size describes a real
/// booth; constructors that build booths assert this in debug builds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Size {
    /// Create a size from its extents.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether both extents are positive.
    pub const fn is_positive(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Axis-aligned bounding box with integer corners.
///
/// `min` is the top-left corner, `max = min + size` the bottom-right; a box
/// built from a positive [`Size`] always has `min_x < max_x` and
/// `min_y < max_y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Aabb {
    /// Minimum x (left).
    pub min_x: i32,
    /// Minimum y (top).
    pub min_y: i32,
    /// Maximum x (right).
    pub max_x: i32,
    /// Maximum y (bottom).
    pub max_y: i32,
}

impl Aabb {
    /// Create a new AABB from min/max corners.
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create an AABB from a top-left origin and a size.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            min_x: origin.x,
            min_y: origin.y,
            max_x: origin.x + size.width,
            max_y: origin.y + size.height,
        }
    }

    /// Top-left corner.
    pub const fn origin(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Extent of the box.
    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Horizontal extent.
    pub const fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    pub const fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    /// The same box moved by `by`.
    pub const fn translate(&self, by: Offset) -> Self {
        Self {
            min_x: self.min_x + by.dx,
            min_y: self.min_y + by.dy,
            max_x: self.max_x + by.dx,
            max_y: self.max_y + by.dy,
        }
    }

    /// Whether the box contains the point, **inclusive** on all four edges.
    ///
    /// This is the click-boundary convention: a pointer exactly on the right
    /// or bottom edge still hits the box. Contrast with [`Self::intersects`],
    /// where those edges are exclusive.
    pub const fn contains_point(&self, p: Point) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }

    /// Whether the two boxes overlap with positive area.
    ///
    /// Half-open convention: boxes that share an edge (`a.max_x == b.min_x`)
    /// do **not** intersect. This is what lets placed booths sit flush
    /// against each other.
    pub const fn intersects(&self, other: &Self) -> bool {
        !(self.max_x <= other.min_x
            || other.max_x <= self.min_x
            || self.max_y <= other.min_y
            || other.max_y <= self.min_y)
    }
}

/// The bounded area booths are placed on: `(0,0)` to `(width,height)`.
///
/// A surface is passed fresh to every placement call rather than stored; the
/// canvas it mirrors can be resized between calls and the engine must never
/// act on a stale extent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Surface {
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Surface {
    /// Create a surface from its extents.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether a booth of `size` could fit anywhere on this surface.
    pub const fn fits(&self, size: Size) -> bool {
        size.width <= self.width && size.height <= self.height
    }

    /// Whether `aabb` lies fully within the surface bounds.
    pub const fn contains(&self, aabb: &Aabb) -> bool {
        0 <= aabb.min_x && 0 <= aabb.min_y && aabb.max_x <= self.width && aabb.max_y <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Aabb::from_origin_size(Point::new(0, 0), Size::new(10, 10));
        let b = Aabb::from_origin_size(Point::new(10, 0), Size::new(10, 10));
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));

        let below = Aabb::from_origin_size(Point::new(0, 10), Size::new(10, 10));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn positive_area_overlap_intersects() {
        let a = Aabb::from_origin_size(Point::new(0, 0), Size::new(10, 10));
        let b = Aabb::from_origin_size(Point::new(9, 9), Size::new(10, 10));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn containment_is_edge_inclusive() {
        let a = Aabb::from_origin_size(Point::new(5, 5), Size::new(10, 10));
        assert!(a.contains_point(Point::new(5, 5)));
        assert!(a.contains_point(Point::new(15, 15)));
        assert!(a.contains_point(Point::new(15, 5)));
        assert!(!a.contains_point(Point::new(16, 10)));
        assert!(!a.contains_point(Point::new(4, 10)));
    }

    #[test]
    fn translate_preserves_size() {
        let a = Aabb::from_origin_size(Point::new(3, 4), Size::new(7, 8));
        let moved = a.translate(Offset::new(-10, 20));
        assert_eq!(moved.origin(), Point::new(-7, 24));
        assert_eq!(moved.size(), a.size());
    }

    #[test]
    fn point_offset_arithmetic_round_trips() {
        let grab = Point::new(12, 7) - Point::new(10, 5);
        assert_eq!(grab, Offset::new(2, 2));
        assert_eq!(Point::new(12, 7) - grab, Point::new(10, 5));
        assert_eq!(Point::new(10, 5) + grab, Point::new(12, 7));
    }

    #[test]
    fn surface_fit_and_containment() {
        let s = Surface::new(100, 50);
        assert!(s.fits(Size::new(100, 50)));
        assert!(!s.fits(Size::new(101, 50)));

        let inside = Aabb::from_origin_size(Point::new(90, 40), Size::new(10, 10));
        assert!(s.contains(&inside));
        let spill = inside.translate(Offset::new(1, 0));
        assert!(!s.contains(&spill));
        let negative = Aabb::from_origin_size(Point::new(-1, 0), Size::new(10, 10));
        assert!(!s.contains(&negative));
    }
}
