//! Scenario tests: whole maintenance runs on small, realistic libraries.
//!
//! Run with: `cargo test --test scenarios`

#[path = "scenarios/trip.rs"]
mod trip;

#[path = "scenarios/archive.rs"]
mod archive;
