// Copyright 2025 the Boothplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistence round trip: save a plan, list the slots, load it back.
//!
//! Uses a temporary directory so repeated runs stay clean.
//!
//! Run:
//! - `cargo run -p boothplan_demos --example save_load`

use boothplan_floor::{ColorTag, ShelfPacker};
use boothplan_geom::{Size, Surface};
use boothplan_session::Session;
use boothplan_store::{PlanStore, StoreError};

fn main() -> Result<(), StoreError> {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = PlanStore::new(dir.path().join("saved_plans"));
    let surface = Surface::new(600, 400);

    let mut session = Session::new();
    let mut shelf = ShelfPacker::new();
    for rgb in [0xdd5500, 0x0055dd, 0x22aa22] {
        session
            .place(&mut shelf, surface, Size::new(140, 90), ColorTag::new(rgb))
            .expect("room for three booths");
    }
    println!("built a plan with {} booths", session.plan().len());

    store.save("expo-hall", session.plan())?;
    println!("saved slots: {:?}", store.list()?);

    // Empty names short-circuit before touching the disk.
    match store.save("", session.plan()) {
        Err(StoreError::EmptyName) => println!("empty name rejected, as expected"),
        other => println!("unexpected outcome: {other:?}"),
    }

    let restored = store.load("expo-hall")?;
    println!("restored {} booths:", restored.len());
    for (_, booth) in restored.iter() {
        println!(
            "  {:?} {:?} color #{:06x}, selected: {}",
            booth.position(),
            booth.size(),
            booth.color().rgb(),
            booth.is_selected()
        );
    }

    store.delete("expo-hall")?;
    println!("slots after delete: {:?}", store.list()?);
    Ok(())
}
