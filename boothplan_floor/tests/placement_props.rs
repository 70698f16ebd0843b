// Copyright 2025 the Boothplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the placement postcondition: every successful
//! placement lies fully inside the surface and overlaps no earlier booth,
//! whichever strategy proposed it.

use boothplan_floor::{ColorTag, FloorPlan, PlacementStrategy, RandomProbe, ShelfPacker};
use boothplan_geom::{Aabb, Size, Surface};
use proptest::prelude::*;

const COLOR: ColorTag = ColorTag::new(0x556677);

fn check_postcondition<S: PlacementStrategy>(
    strategy: &mut S,
    surface: Surface,
    requests: &[Size],
) -> Result<(), TestCaseError> {
    let mut plan = FloorPlan::new();
    let mut placed: Vec<Aabb> = Vec::new();
    for &size in requests {
        // Failure is allowed (the surface may fill up); success is what
        // carries obligations.
        let Ok(id) = plan.place(strategy, surface, size, COLOR) else {
            continue;
        };
        let aabb = plan.booth(id).expect("freshly placed booth is live").aabb();
        prop_assert!(surface.contains(&aabb), "booth left the surface: {aabb:?}");
        for earlier in &placed {
            prop_assert!(
                !aabb.intersects(earlier),
                "booth {aabb:?} overlaps earlier {earlier:?}"
            );
        }
        placed.push(aabb);
    }
    Ok(())
}

fn arb_requests() -> impl Strategy<Value = Vec<Size>> {
    prop::collection::vec(
        (10..150_i32, 10..150_i32).prop_map(|(w, h)| Size::new(w, h)),
        1..24,
    )
}

proptest! {
    #[test]
    fn random_probe_placements_are_in_bounds_and_disjoint(
        seed in any::<u64>(),
        requests in arb_requests(),
    ) {
        let mut probe = RandomProbe::with_seed(seed);
        check_postcondition(&mut probe, Surface::new(640, 480), &requests)?;
    }

    #[test]
    fn shelf_placements_are_in_bounds_and_disjoint(requests in arb_requests()) {
        let mut shelf = ShelfPacker::new();
        check_postcondition(&mut shelf, Surface::new(640, 480), &requests)?;
    }

    // Failed requests must leave the plan untouched.
    #[test]
    fn failure_leaves_the_plan_unchanged(seed in any::<u64>()) {
        let surface = Surface::new(100, 100);
        let mut plan = FloorPlan::new();
        let mut probe = RandomProbe::with_seed(seed);
        plan.place(&mut probe, surface, Size::new(100, 100), COLOR)
            .expect("first full-surface booth fits");
        let before = plan.len();
        prop_assert!(plan.place(&mut probe, surface, Size::new(50, 50), COLOR).is_err());
        prop_assert_eq!(plan.len(), before);
    }
}
