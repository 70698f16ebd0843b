// Copyright 2025 the Boothplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boothplan Geom: integer 2D geometry for the floor-plan engine.
//!
//! Everything a floor plan measures is an axis-aligned box on an integer
//! pixel grid. This crate holds the primitive value types and the two queries
//! the rest of the workspace is built on:
//!
//! - [`Aabb::contains_point`] for hit-testing, **inclusive** on all four
//!   edges (a click on a booth's border counts as a hit).
//! - [`Aabb::intersects`] for overlap checks, **half-open** (booths that
//!   merely touch along an edge do not overlap).
//!
//! The two conventions are deliberately different and each is documented at
//! its definition; mixing them up is the classic off-by-one in this domain.
//!
//! # Example
//!
//! ```rust
//! use boothplan_geom::{Aabb, Point, Size, overlaps_any};
//!
//! let a = Aabb::from_origin_size(Point::new(0, 0), Size::new(10, 10));
//! let b = Aabb::from_origin_size(Point::new(10, 0), Size::new(10, 10));
//!
//! // Touching edges are not an overlap...
//! assert!(!a.intersects(&b));
//! // ...but the shared edge hit-tests into both.
//! assert!(a.contains_point(Point::new(10, 0)));
//! assert!(b.contains_point(Point::new(10, 0)));
//!
//! assert!(!overlaps_any(b, [a]));
//! ```

#![no_std]

pub mod overlap;
pub mod types;

pub use overlap::overlaps_any;
pub use types::{Aabb, Offset, Point, Size, Surface};
