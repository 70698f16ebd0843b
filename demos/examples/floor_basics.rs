// Copyright 2025 the Boothplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floor-plan basics.
//!
//! Places a handful of booths with each strategy and prints the resulting
//! layouts plus the draw commands a renderer would execute.
//!
//! Run:
//! - `cargo run -p boothplan_demos --example floor_basics`

use boothplan_floor::{
    ColorTag, FloorPlan, PlaceError, PlacementStrategy, RandomProbe, ShelfPacker, display_list,
};
use boothplan_geom::{Size, Surface};

const PALETTE: [u32; 4] = [0xcc4444, 0x44cc44, 0x4444cc, 0xcccc44];

fn fill(strategy: &mut dyn PlacementStrategy, label: &str) {
    let surface = Surface::new(600, 400);
    let mut plan = FloorPlan::new();

    for (i, rgb) in PALETTE.iter().cycle().take(8).enumerate() {
        let size = Size::new(100, 60);
        match plan.place(strategy, surface, size, ColorTag::new(*rgb)) {
            Ok(id) => {
                let booth = plan.booth(id).expect("just placed");
                println!("  booth {i}: {:?} at {:?}", booth.size(), booth.position());
            }
            Err(PlaceError::NoSpace) => println!("  booth {i}: no space left"),
            Err(PlaceError::InvalidSize) => println!("  booth {i}: does not fit the surface"),
        }
    }

    println!("{label}: {} booths placed", plan.len());
    println!("  draw commands: {}", display_list(&plan).len());
}

fn main() {
    println!("random probe (seed 42):");
    fill(&mut RandomProbe::with_seed(42), "random probe");

    println!("\nshelf packer:");
    fill(&mut ShelfPacker::new(), "shelf packer");
}
