// Domain layer: pure, synchronous graph rules
pub mod error;
pub mod graph;
pub mod network;
pub mod traits;
