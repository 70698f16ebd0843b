// Copyright 2025 the Boothplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session implementation: hit-testing, selection, and drag state.

use alloc::vec::Vec;

use boothplan_floor::{BoothFlags, BoothId, ColorTag, FloorPlan, PlaceError, PlacementStrategy};
use boothplan_geom::{Offset, Point, Size, Surface};

/// Errors from interaction operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Delete was requested with nothing selected.
    #[error("no booth is selected")]
    NoSelection,
}

// Controller-side drag state. The grab offset pins the booth to the pointer:
// position = pointer - grab for every move.
#[derive(Copy, Clone, Debug)]
struct DragAnchor {
    id: BoothId,
    grab: Offset,
}

/// An editing session over one floor plan.
///
/// The session is the sole owner and sole mutator of its plan; selection and
/// drag bookkeeping can therefore never refer to a booth the plan does not
/// know about. Renderers read the plan through [`Session::plan`].
#[derive(Debug, Default)]
pub struct Session {
    plan: FloorPlan,
    selected: Option<BoothId>,
    drag: Option<DragAnchor>,
}

impl Session {
    /// Start a session with an empty plan.
    pub const fn new() -> Self {
        Self {
            plan: FloorPlan::new(),
            selected: None,
            drag: None,
        }
    }

    /// Start a session over an existing plan (for example, a loaded one).
    ///
    /// Any transient flags on the plan's booths are cleared; a fresh session
    /// begins with no selection and no drag.
    pub fn with_plan(mut plan: FloorPlan) -> Self {
        let ids: Vec<BoothId> = plan.iter().map(|(id, _)| id).collect();
        for id in ids {
            if let Some(booth) = plan.booth_mut(id) {
                booth.set_flag(BoothFlags::SELECTED, false);
                booth.set_flag(BoothFlags::DRAGGING, false);
            }
        }
        Self {
            plan,
            selected: None,
            drag: None,
        }
    }

    /// The plan being edited.
    pub const fn plan(&self) -> &FloorPlan {
        &self.plan
    }

    /// Give up the session, keeping the plan (for example, to save it).
    pub fn into_plan(self) -> FloorPlan {
        self.plan
    }

    /// The currently selected booth, if any.
    pub const fn selected(&self) -> Option<BoothId> {
        self.selected
    }

    /// The booth currently being dragged, if any.
    pub fn dragging(&self) -> Option<BoothId> {
        self.drag.map(|d| d.id)
    }

    /// Place a new booth via `strategy` (see
    /// [`FloorPlan::place`]).
    pub fn place<S>(
        &mut self,
        strategy: &mut S,
        surface: Surface,
        size: Size,
        color: ColorTag,
    ) -> Result<BoothId, PlaceError>
    where
        S: PlacementStrategy + ?Sized,
    {
        self.plan.place(strategy, surface, size, color)
    }

    /// The topmost booth containing `point`, if any.
    ///
    /// Booths are scanned in reverse insertion order and the first
    /// containment wins, so among overlapping booths the most recently
    /// added one is returned. Containment is edge-inclusive.
    pub fn hit_test(&self, point: Point) -> Option<BoothId> {
        self.plan
            .iter()
            .rev()
            .find(|(_, booth)| booth.aabb().contains_point(point))
            .map(|(id, _)| id)
    }

    /// Change the selection.
    ///
    /// The previous selection's flag is cleared first; at most one booth is
    /// selected at a time. Passing `None`, or a stale id, deselects.
    pub fn select(&mut self, id: Option<BoothId>) {
        if let Some(prev) = self.selected.take()
            && let Some(booth) = self.plan.booth_mut(prev)
        {
            booth.set_flag(BoothFlags::SELECTED, false);
        }
        if let Some(id) = id
            && let Some(booth) = self.plan.booth_mut(id)
        {
            booth.set_flag(BoothFlags::SELECTED, true);
            self.selected = Some(id);
        }
    }

    /// Start dragging `id` from the pointer position `pointer`.
    ///
    /// Records the grab offset between the pointer and the booth's corner so
    /// the booth tracks the pointer without jumping. A stale id is a no-op.
    /// Any drag already in progress is ended first.
    pub fn begin_drag(&mut self, id: BoothId, pointer: Point) {
        self.end_drag();
        let Some(booth) = self.plan.booth_mut(id) else {
            return;
        };
        let grab = pointer - booth.position();
        booth.set_flag(BoothFlags::DRAGGING, true);
        self.drag = Some(DragAnchor { id, grab });
    }

    /// Move the dragged booth so it keeps its grab offset under `pointer`.
    ///
    /// Unconditional by design: the booth follows the pointer even into
    /// overlap with other booths or off the surface. Mirrors the editor's
    /// permissive drag behavior; placement is the only operation that
    /// enforces non-overlap. No-op when nothing is being dragged.
    pub fn drag_to(&mut self, pointer: Point) {
        let Some(anchor) = self.drag else {
            return;
        };
        if let Some(booth) = self.plan.booth_mut(anchor.id) {
            booth.set_position(pointer - anchor.grab);
        }
    }

    /// Finish the drag, leaving the booth wherever it was dropped.
    ///
    /// Callers must invoke this on pointer release; a session that never
    /// does keeps a stuck dragging flag on the booth.
    pub fn end_drag(&mut self) {
        if let Some(anchor) = self.drag.take()
            && let Some(booth) = self.plan.booth_mut(anchor.id)
        {
            booth.set_flag(BoothFlags::DRAGGING, false);
        }
    }

    /// Remove the selected booth from the plan.
    ///
    /// Clears the selection (and the drag, if the selected booth was being
    /// dragged). Returns the removed booth's id, or
    /// [`SessionError::NoSelection`] when nothing is selected.
    pub fn delete_selected(&mut self) -> Result<BoothId, SessionError> {
        let id = self.selected.take().ok_or(SessionError::NoSelection)?;
        if self.drag.is_some_and(|d| d.id == id) {
            self.drag = None;
        }
        self.plan.remove(id);
        Ok(id)
    }

    /// Remove every booth and reset selection and drag state.
    ///
    /// The clear invariant lives here: the plan alone cannot know about the
    /// controller's references into it.
    pub fn clear(&mut self) {
        self.plan.clear();
        self.selected = None;
        self.drag = None;
    }
}
