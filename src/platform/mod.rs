// Sentinel - platform/mod.rs
//
// Platform layer: directory resolution and config loading.
// Dependencies: standard library, directories crate.
// Must NOT depend on: core, app, ui.

pub mod config;
