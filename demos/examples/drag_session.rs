// Copyright 2025 the Boothplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction walkthrough: click, select, drag, delete.
//!
//! Simulates the pointer events a GUI would deliver and shows the session's
//! state transitions, including the permissive drag that allows overlap.
//!
//! Run:
//! - `cargo run -p boothplan_demos --example drag_session`

use boothplan_floor::{ColorTag, RandomProbe};
use boothplan_geom::{Point, Size, Surface};
use boothplan_session::Session;

fn main() {
    let surface = Surface::new(600, 400);
    let mut session = Session::new();
    let mut probe = RandomProbe::with_seed(7);

    let a = session
        .place(&mut probe, surface, Size::new(120, 80), ColorTag::new(0xaa3333))
        .expect("empty surface");
    let b = session
        .place(&mut probe, surface, Size::new(120, 80), ColorTag::new(0x3333aa))
        .expect("plenty of room");
    println!("placed two booths: {a:?}, {b:?}");

    // Click inside booth B: topmost hit wins, selection moves there.
    let b_origin = session.plan().booth(b).expect("live").position();
    let click = Point::new(b_origin.x + 10, b_origin.y + 10);
    let hit = session.hit_test(click);
    println!("click at {click:?} hits {hit:?}");
    session.select(hit);

    // Drag B onto A. No overlap re-validation happens during a drag.
    let a_origin = session.plan().booth(a).expect("live").position();
    session.begin_drag(b, click);
    session.drag_to(Point::new(a_origin.x + 10, a_origin.y + 10));
    session.end_drag();
    let b_now = session.plan().booth(b).expect("live").aabb();
    let a_now = session.plan().booth(a).expect("live").aabb();
    println!(
        "after drag, B sits at {:?} (overlaps A: {})",
        b_now.origin(),
        b_now.intersects(&a_now)
    );

    // A click on the overlap point resolves to B, the most recently added.
    let shared = Point::new(a_origin.x + 15, a_origin.y + 15);
    println!("click on the overlap hits {:?}", session.hit_test(shared));

    // Delete the selection and try again with nothing selected.
    match session.delete_selected() {
        Ok(id) => println!("deleted {id:?}"),
        Err(e) => println!("delete failed: {e}"),
    }
    match session.delete_selected() {
        Ok(id) => println!("deleted {id:?}"),
        Err(e) => println!("delete failed: {e}"),
    }

    session.clear();
    println!("after clear: {} booths", session.plan().len());
}
