//! Binary entrypoint.
//!
//! This crate is split into Clean Architecture layers:
//! - domain: pure, synchronous graph rules
//! - usecase: orchestration + progress events
//! - infrastructure: serde + async IO + implementations of ports
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    route_connectivity::interface::cli::run().await
}
