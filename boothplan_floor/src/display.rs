// Copyright 2025 the Boothplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display-list builder for external renderers.
//!
//! Painting is not this workspace's job; renderers are read-only consumers
//! of a plan's iteration order. This module flattens that order into draw
//! commands in kurbo's f64 coordinates so a backend only has to execute
//! them: fill, optional selection highlight, border, per booth, bottom to
//! top.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::plan::FloorPlan;
use crate::types::ColorTag;

/// Distance the selection highlight sits outside the booth bounds.
const HIGHLIGHT_OUTSET: f64 = 2.0;

/// A single drawing instruction, in surface coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// Fill the rect with the booth's color.
    Fill {
        /// Booth bounds.
        rect: Rect,
        /// Booth color tag.
        color: ColorTag,
    },
    /// Stroke the selection highlight, 2 units outside the booth bounds.
    Highlight {
        /// Outset booth bounds.
        rect: Rect,
    },
    /// Stroke the plain 1-unit border on the booth bounds.
    Border {
        /// Booth bounds.
        rect: Rect,
    },
}

fn booth_rect(aabb: boothplan_geom::Aabb) -> Rect {
    Rect::new(
        f64::from(aabb.min_x),
        f64::from(aabb.min_y),
        f64::from(aabb.max_x),
        f64::from(aabb.max_y),
    )
}

/// Flatten a plan into draw commands in paint order.
///
/// Booths are emitted in insertion order, so later booths paint over earlier
/// ones, matching hit-test topmost semantics. A selected booth gets a
/// highlight outline between its fill and its border.
pub fn display_list(plan: &FloorPlan) -> Vec<DrawCmd> {
    let mut out = Vec::new();
    for (_, booth) in plan.iter() {
        let rect = booth_rect(booth.aabb());
        out.push(DrawCmd::Fill {
            rect,
            color: booth.color(),
        });
        if booth.is_selected() {
            out.push(DrawCmd::Highlight {
                rect: rect.inflate(HIGHLIGHT_OUTSET, HIGHLIGHT_OUTSET),
            });
        }
        out.push(DrawCmd::Border { rect });
    }
    out
}
