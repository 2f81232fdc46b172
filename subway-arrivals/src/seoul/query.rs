//! Request validation and URL construction.
//!
//! Everything here is pure: inputs are checked and the request URL is
//! composed before the transport is touched.

use url::Url;

use super::error::ArrivalError;

/// Response format segment of the URL.
pub const RESPONSE_FORMAT: &str = "json";

/// Service name segment of the URL.
pub const SERVICE_NAME: &str = "realtimeStationArrival";

/// Largest span the endpoint will return in one page.
pub const MAX_PAGE_SPAN: u32 = 1000;

/// A validated pagination window.
///
/// `start <= end` and `end - start <= 1000` hold for every value of this
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    start: u32,
    end: u32,
}

impl Page {
    /// Page used when the caller does not ask for one.
    pub const DEFAULT: Page = Page { start: 0, end: 100 };

    /// Validate a `start..=end` window.
    pub fn new(start: i64, end: i64) -> Result<Self, ArrivalError> {
        if start < 0 {
            return Err(ArrivalError::invalid(format!(
                "start index must be non-negative (got {start})"
            )));
        }
        if end < start {
            return Err(ArrivalError::invalid(format!(
                "end index must be greater than or equal to start index (got start {start}, end {end})"
            )));
        }
        if end - start > i64::from(MAX_PAGE_SPAN) {
            return Err(ArrivalError::invalid(format!(
                "end index exceeds page limit: cannot request more than {MAX_PAGE_SPAN} results at once (got start {start}, end {end})"
            )));
        }
        let start = u32::try_from(start)
            .map_err(|_| ArrivalError::invalid(format!("start index out of range: {start}")))?;
        let end = u32::try_from(end)
            .map_err(|_| ArrivalError::invalid(format!("end index out of range: {end}")))?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::DEFAULT
    }
}

/// Check a station name and return it with surrounding whitespace removed.
pub fn validate_station_name(station_name: &str) -> Result<&str, ArrivalError> {
    let trimmed = station_name.trim();
    if trimmed.is_empty() {
        return Err(ArrivalError::invalid(
            "station name must not be empty or blank",
        ));
    }
    Ok(trimmed)
}

/// Build the request URL.
///
/// Format: `{base}/{key}/json/realtimeStationArrival/{start}/{end}/{station}`.
/// Each appended segment is percent-encoded as UTF-8. A base URL that cannot
/// be parsed or cannot take path segments fails with [`ArrivalError::Api`].
pub fn build_url(
    base_url: &str,
    api_key: &str,
    page: Page,
    station_name: &str,
) -> Result<Url, ArrivalError> {
    let mut url = Url::parse(base_url.trim()).map_err(|e| {
        ArrivalError::api(format!("failed to build request URL from {base_url:?}: {e}"))
    })?;

    let start = page.start.to_string();
    let end = page.end.to_string();
    url.path_segments_mut()
        .map_err(|()| {
            ArrivalError::api(format!(
                "failed to build request URL: {base_url:?} cannot take a path"
            ))
        })?
        .pop_if_empty()
        .extend([
            api_key,
            RESPONSE_FORMAT,
            SERVICE_NAME,
            start.as_str(),
            end.as_str(),
            station_name,
        ]);

    Ok(url)
}
