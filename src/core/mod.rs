// NetVision - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, serde, regex, chrono.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod export;
pub mod filter;
pub mod history;
pub mod model;
