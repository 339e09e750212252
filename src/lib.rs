//! Route connectivity analysis.
//!
//! Layers follow the same split as the binary:
//! - domain: vertex store, adjacency, SCC and condensation value types, errors
//! - usecase: condensation, connectivity analysis, validation + progress events
//! - infrastructure: Kosaraju detector, serde + async IO, schema checks, NDJSON events
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
