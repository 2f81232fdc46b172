//! Seoul real-time subway arrival API client.
//!
//! This module provides a blocking HTTP client for the Seoul Open API's
//! `realtimeStationArrival` service, which reports trains approaching a
//! named station.
//!
//! Key characteristics of the endpoint:
//! - Stations are addressed by their Korean name, percent-encoded in the
//!   URL path
//! - Every value arrives as text, including counts, flags and countdowns
//! - Errors are reported inside a `200 OK` JSON body via a status envelope
//! - At most 1000 results can be requested per page

mod client;
mod config;
mod convert;
mod error;
mod http;
mod query;

pub use client::SubwayClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use convert::{SUCCESS_CODE, decode_arrivals};
pub use error::ArrivalError;
pub use http::{HttpTransport, Transport};
pub use query::{
    MAX_PAGE_SPAN, Page, RESPONSE_FORMAT, SERVICE_NAME, build_url, validate_station_name,
};
