// NetVision - api/mod.rs
//
// API-access layer: prompt construction, declared response schema, and the
// outbound call to the generative-AI content endpoint.
// Dependencies: core (models), util. Must NOT depend on: ui, app.

pub mod client;
pub mod prompt;
pub mod schema;
