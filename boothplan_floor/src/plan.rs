// Copyright 2025 the Boothplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The insertion-ordered floor-plan container.

use alloc::vec::Vec;

use boothplan_geom::{Aabb, Size, Surface, overlaps_any};

use crate::place::{PlaceError, PlacementStrategy};
use crate::types::{Booth, BoothId, ColorTag};

/// An ordered collection of placed booths.
///
/// Booths live in a slot arena and are addressed by generational
/// [`BoothId`]s; a separate order list preserves insertion order, which
/// doubles as draw order (last added is topmost). The plan is exclusively
/// owned by one editing session at a time; nothing here locks.
#[derive(Clone, Default)]
pub struct FloorPlan {
    slots: Vec<Option<Booth>>,
    // Last generation per slot; persists across frees and clears so stale
    // ids can never alias a later booth.
    generations: Vec<u32>,
    free_list: Vec<usize>,
    order: Vec<BoothId>,
}

impl core::fmt::Debug for FloorPlan {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FloorPlan")
            .field("slots_total", &self.slots.len())
            .field("booths", &self.order.len())
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl FloorPlan {
    /// Create an empty plan.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Number of booths currently placed.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the plan has no booths.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Append a booth. Returns its stable handle.
    pub fn add(&mut self, booth: Booth) -> BoothId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(booth);
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(booth));
            self.generations.push(generation);
            (self.slots.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "BoothId uses 32-bit indices by design."
        )]
        let id = BoothId::new(idx as u32, generation);
        self.order.push(id);
        id
    }

    /// Remove a booth, returning it. `None` when `id` is stale or absent.
    pub fn remove(&mut self, id: BoothId) -> Option<Booth> {
        if !self.is_alive(id) {
            return None;
        }
        let booth = self.slots[id.idx()].take();
        self.free_list.push(id.idx());
        self.order.retain(|o| *o != id);
        booth
    }

    /// Remove every booth.
    ///
    /// Generations are kept, so ids issued before the clear stay stale
    /// forever. Callers holding selection or drag references must reset them;
    /// the interaction session does this in its own `clear`.
    pub fn clear(&mut self) {
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if slot.take().is_some() {
                self.free_list.push(idx);
            }
        }
        self.order.clear();
    }

    /// Returns true if `id` refers to a live booth.
    pub fn is_alive(&self, id: BoothId) -> bool {
        self.slots
            .get(id.idx())
            .and_then(|s| s.as_ref())
            .is_some_and(|_| self.generations[id.idx()] == id.1)
    }

    /// Borrow a booth by id, if live.
    pub fn booth(&self, id: BoothId) -> Option<&Booth> {
        if !self.is_alive(id) {
            return None;
        }
        self.slots[id.idx()].as_ref()
    }

    /// Mutably borrow a booth by id, if live.
    pub fn booth_mut(&mut self, id: BoothId) -> Option<&mut Booth> {
        if !self.is_alive(id) {
            return None;
        }
        self.slots[id.idx()].as_mut()
    }

    /// Iterate booths in insertion order (draw order, bottom to top).
    ///
    /// The iterator is restartable and double-ended; hit-testing walks it in
    /// reverse to honor topmost-wins.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (BoothId, &Booth)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.slots[id.idx()].as_ref().map(|b| (*id, b)))
    }

    /// Whether `candidate` overlaps any booth already in the plan.
    pub fn overlaps_existing(&self, candidate: Aabb) -> bool {
        overlaps_any(candidate, self.iter().map(|(_, b)| b.aabb()))
    }

    /// Ask `strategy` for a free position and append a booth there.
    ///
    /// The surface is taken per call because the canvas it mirrors can be
    /// resized between requests. On failure the plan is unchanged.
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
        let position = strategy.propose(self, surface, size)?;
        Ok(self.add(Booth::new(position, size, color)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boothplan_geom::Point;

    fn booth(x: i32, y: i32, w: i32, h: i32) -> Booth {
        Booth::new(Point::new(x, y), Size::new(w, h), ColorTag::new(0x336699))
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut plan = FloorPlan::new();
        let a = plan.add(booth(0, 0, 10, 10));
        let b = plan.add(booth(20, 0, 10, 10));
        let c = plan.add(booth(40, 0, 10, 10));
        let ids: Vec<BoothId> = plan.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, [a, b, c]);
    }

    #[test]
    fn remove_is_by_identity_and_keeps_order() {
        let mut plan = FloorPlan::new();
        let a = plan.add(booth(0, 0, 10, 10));
        let b = plan.add(booth(20, 0, 10, 10));
        let c = plan.add(booth(40, 0, 10, 10));

        let removed = plan.remove(b).expect("b is live");
        assert_eq!(removed.position(), Point::new(20, 0));
        assert_eq!(plan.len(), 2);
        let ids: Vec<BoothId> = plan.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, [a, c]);

        // Second removal of the same id is a no-op.
        assert!(plan.remove(b).is_none());
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn stale_id_never_aliases_reused_slot() {
        let mut plan = FloorPlan::new();
        let a = plan.add(booth(0, 0, 10, 10));
        plan.remove(a);
        let b = plan.add(booth(50, 50, 10, 10));
        assert!(!plan.is_alive(a));
        assert!(plan.is_alive(b));
        assert!(plan.booth(a).is_none());
        if a.0 == b.0 {
            assert!(b.1 > a.1, "generation must increase on reuse");
        }
    }

    #[test]
    fn clear_empties_and_stales_all_ids() {
        let mut plan = FloorPlan::new();
        let a = plan.add(booth(0, 0, 10, 10));
        let b = plan.add(booth(20, 0, 10, 10));
        plan.clear();
        assert!(plan.is_empty());
        assert_eq!(plan.iter().count(), 0);
        assert!(!plan.is_alive(a));
        assert!(!plan.is_alive(b));

        // Slots are reusable after the clear.
        let c = plan.add(booth(5, 5, 10, 10));
        assert!(plan.is_alive(c));
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn overlap_query_matches_geometry() {
        let mut plan = FloorPlan::new();
        plan.add(booth(0, 0, 10, 10));
        plan.add(booth(30, 30, 10, 10));

        assert!(plan.overlaps_existing(Aabb::new(5, 5, 15, 15)));
        // Flush against the first booth: not an overlap.
        assert!(!plan.overlaps_existing(Aabb::new(10, 0, 20, 10)));
        assert!(!plan.overlaps_existing(Aabb::new(100, 100, 110, 110)));
    }

    #[test]
    fn booth_mut_moves_are_visible_to_queries() {
        let mut plan = FloorPlan::new();
        let a = plan.add(booth(0, 0, 10, 10));
        plan.booth_mut(a)
            .expect("live")
            .set_position(Point::new(90, 90));
        assert!(plan.overlaps_existing(Aabb::new(95, 95, 105, 105)));
        assert!(!plan.overlaps_existing(Aabb::new(0, 0, 10, 10)));
    }
}
