//! Real-time arrival client.
//!
//! Runs one query end to end: validate, build the URL, fetch once,
//! decode. Nothing is cached or retried.

use tracing::{debug, info};
use url::Url;

use crate::domain::ArrivalRecord;

use super::config::{ApiConfig, mask};
use super::convert::decode_arrivals;
use super::error::ArrivalError;
use super::http::{HttpTransport, Transport};
use super::query::{Page, build_url, validate_station_name};

/// Seoul real-time subway arrival client.
///
/// Holds only immutable configuration and the transport, so a single
/// client can be shared across threads.
#[derive(Debug, Clone)]
pub struct SubwayClient<T = HttpTransport> {
    config: ApiConfig,
    transport: T,
}

impl SubwayClient<HttpTransport> {
    /// Create a client that talks to the endpoint over HTTP.
    pub fn new(config: ApiConfig) -> Result<Self, ArrivalError> {
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> SubwayClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(config: ApiConfig, transport: T) -> Result<Self, ArrivalError> {
        config.validate()?;
        debug!(base_url = %config.base_url, "subway client initialized");
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Arrivals at a station, using the default page (0 to 100).
    pub fn realtime_arrivals(&self, station_name: &str) -> Result<Vec<ArrivalRecord>, ArrivalError> {
        self.fetch(station_name, Page::DEFAULT)
    }

    /// Arrivals at a station within `start..=end` of the endpoint's result list.
    ///
    /// Bounds are checked before any request is made.
    pub fn realtime_arrivals_paged(
        &self,
        station_name: &str,
        start: i64,
        end: i64,
    ) -> Result<Vec<ArrivalRecord>, ArrivalError> {
        let page = Page::new(start, end)?;
        self.fetch(station_name, page)
    }

    /// Arrivals for an already-validated page.
    pub fn fetch(&self, station_name: &str, page: Page) -> Result<Vec<ArrivalRecord>, ArrivalError> {
        let station_name = validate_station_name(station_name)?;

        let url = build_url(&self.config.base_url, &self.config.api_key, page, station_name)?;
        debug!(url = %self.redacted_url(page, station_name)?, "requesting arrivals");

        let body = self.transport.get(url.as_str())?;
        debug!(bytes = body.len(), "received response");

        let arrivals = decode_arrivals(&body)?;
        info!(
            station = station_name,
            count = arrivals.len(),
            "fetched arrivals"
        );

        Ok(arrivals)
    }

    /// Request URL with the key segment replaced by its masked form.
    fn redacted_url(&self, page: Page, station_name: &str) -> Result<Url, ArrivalError> {
        build_url(
            &self.config.base_url,
            &mask(&self.config.api_key),
            page,
            station_name,
        )
    }
}
