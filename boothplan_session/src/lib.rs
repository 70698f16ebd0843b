// Copyright 2025 the Boothplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boothplan Session: the interaction controller for a floor plan.
//!
//! ## Overview
//!
//! A [`Session`] owns one [`FloorPlan`](boothplan_floor::FloorPlan)
//! exclusively and layers pointer interaction on top of it:
//!
//! - [`Session::hit_test`] finds the topmost booth under a point
//!   (last-added wins among overlapping booths).
//! - [`Session::select`] maintains the single plan-wide selection.
//! - [`Session::begin_drag`] / [`Session::drag_to`] / [`Session::end_drag`]
//!   move a booth freely under the pointer. Drags are deliberately
//!   permissive: no overlap re-validation and no surface clamping happens
//!   while dragging, so a dragged booth may sit on top of others.
//! - [`Session::delete_selected`] and [`Session::clear`] remove booths and
//!   keep the selection/drag references consistent while doing so.
//!
//! Everything runs on one logical thread in response to discrete input
//! events; no call blocks or suspends.
//!
//! ## Per-booth state machine
//!
//! Idle → Selected → Dragging → Selected → Idle. Callers must deliver
//! `end_drag` on pointer release; an abandoned drag leaves a stuck dragging
//! flag (a cleanup bug, not a safety issue).

#![no_std]

extern crate alloc;

pub mod session;

pub use session::{Session, SessionError};
