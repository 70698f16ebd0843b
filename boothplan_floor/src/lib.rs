// Copyright 2025 the Boothplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boothplan Floor: the floor-plan data model and placement engine.
//!
//! A [`FloorPlan`] is an insertion-ordered collection of rectangular
//! [`Booth`]s addressed by generational [`BoothId`] handles. Insertion order
//! is draw order: the last booth added is topmost for both painting and
//! hit-testing.
//!
//! Placement is pluggable behind the [`PlacementStrategy`] trait, so the
//! search policy can be swapped without API churn:
//!
//! - [`RandomProbe`]: bounded uniform probing with an injected RNG.
//!   Probabilistic best-effort; deterministic under a fixed seed.
//! - [`ShelfPacker`]: left-to-right shelf packing with row wraparound and a
//!   downward fallback scan.
//!
//! Both guarantee the same postcondition: a successful placement lies fully
//! within the surface and overlaps nothing already present, and a failed one
//! leaves the plan untouched.
//!
//! # Example
//!
//! ```rust
//! use boothplan_floor::{ColorTag, FloorPlan, RandomProbe};
//! use boothplan_geom::{Size, Surface};
//!
//! let mut plan = FloorPlan::new();
//! let mut probe = RandomProbe::with_seed(7);
//! let surface = Surface::new(600, 400);
//!
//! let id = plan
//!     .place(&mut probe, surface, Size::new(100, 60), ColorTag::new(0x4060c0))
//!     .expect("an empty surface has room");
//! assert!(plan.is_alive(id));
//! assert_eq!(plan.len(), 1);
//! ```

#![no_std]

extern crate alloc;

pub mod display;
pub mod place;
pub mod plan;
pub mod types;

pub use display::{DrawCmd, display_list};
pub use place::{PlaceError, PlacementStrategy, RandomProbe, ShelfPacker};
pub use plan::FloorPlan;
pub use types::{Booth, BoothFlags, BoothId, ColorTag};
