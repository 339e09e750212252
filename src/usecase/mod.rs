//! Usecase layer: application workflows + events.

pub mod connectivity;
pub mod event;
pub mod validate;
