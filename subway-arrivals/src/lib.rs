//! Seoul subway real-time arrival client.
//!
//! Queries the city's open data endpoint for trains approaching a station
//! and returns typed, immutable arrival records.

pub mod domain;
pub mod seoul;
