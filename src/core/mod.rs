// Sentinel - core/mod.rs
//
// Core business logic layer: data model, archive enumeration, mock
// assessment, activity feed.
// Must NOT depend on: ui, platform, or app.

pub mod activity;
pub mod archive;
pub mod assess;
pub mod model;
