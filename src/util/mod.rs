// Sentinel - util/mod.rs
//
// Utility modules: named constants, error types, tracing setup.
// Depends on no other layer.

pub mod constants;
pub mod error;
pub mod logging;
