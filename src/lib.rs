//! Compares golf tee-time prices across booking providers. Raw listings are grouped by
//! (date, hour bucket) × club, one winning offer is kept per cell under a source-priority
//! tie-break, and the cheapest offer per row is flagged for the console renderer.

pub mod data;
pub mod favorites;
pub mod grid;
pub mod price;
pub mod print;
pub mod region;
pub mod slot;
pub mod store;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
