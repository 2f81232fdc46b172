//! Domain types for real-time arrivals.
//!
//! Records are immutable once decoded; everything beyond the raw text
//! fields is derived on demand.

mod arrival;
mod arrival_code;
mod line;

pub use arrival::{ArrivalRecord, UNKNOWN_STATUS};
pub use arrival_code::ArrivalCode;
pub use line::SubwayLine;
