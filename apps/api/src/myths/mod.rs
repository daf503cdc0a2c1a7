// Myth database — record models, per-request file loading, substring lookup.

pub mod models;
pub mod store;
