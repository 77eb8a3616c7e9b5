// Sentinel - app/mod.rs
//
// Application layer: orchestration, state management, preference store.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod audit;
pub mod prefs;
pub mod state;
