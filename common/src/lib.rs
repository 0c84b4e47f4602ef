//! Shared model and target-independent logic for the order entry form.
//!
//! Everything here compiles for the host as well as for `wasm32`, so the
//! frontend keeps its browser glue thin and the behavior lives (and is tested)
//! in this crate.

pub mod endpoints;
pub mod error;
pub mod loader;
pub mod model;
pub mod selection;
pub mod submission;
