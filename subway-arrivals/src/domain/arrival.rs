//! Real-time arrival record.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDateTime;
use serde::Serialize;

use super::arrival_code::ArrivalCode;
use super::line::SubwayLine;

/// Rendered when the status code is missing or not in the table.
pub const UNKNOWN_STATUS: &str = "알 수 없음";

/// Stands in for the previous station's name when the endpoint omits it.
const PREVIOUS_STATION_PLACEHOLDER: &str = "전역";

/// One train's real-time position and timing relative to a queried station.
///
/// All fields are kept as the text the endpoint sent; absent fields are
/// empty strings. Parsed views are available through the derived
/// accessors ([`minutes_until_arrival`](Self::minutes_until_arrival),
/// [`location_status`](Self::location_status), ...).
///
/// Two records are equal when line id, station id, train number and
/// arrival-order key match, even if timers or messages differ.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArrivalRecord {
    pub(crate) line_id: String,
    pub(crate) direction: String,
    pub(crate) train_line_name: String,
    pub(crate) previous_station_id: String,
    pub(crate) next_station_id: String,
    pub(crate) station_id: String,
    pub(crate) station_name: String,
    pub(crate) transfer_line_count: String,
    pub(crate) arrival_order_key: String,
    pub(crate) connected_line_ids: String,
    pub(crate) connected_station_ids: String,
    pub(crate) train_status: String,
    pub(crate) arrival_seconds: String,
    pub(crate) train_number: String,
    pub(crate) final_destination_id: String,
    pub(crate) final_destination_name: String,
    pub(crate) received_timestamp: String,
    pub(crate) first_message: String,
    pub(crate) second_message: String,
    pub(crate) status_code: String,
    pub(crate) last_train: String,
}

impl ArrivalRecord {
    pub fn line_id(&self) -> &str {
        &self.line_id
    }

    /// Up/down (or inner/outer loop) direction, e.g. "상행".
    pub fn direction(&self) -> &str {
        &self.direction
    }

    /// Headsign such as "성수행 - 역삼방면".
    pub fn train_line_name(&self) -> &str {
        &self.train_line_name
    }

    pub fn previous_station_id(&self) -> &str {
        &self.previous_station_id
    }

    pub fn next_station_id(&self) -> &str {
        &self.next_station_id
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn station_name(&self) -> &str {
        &self.station_name
    }

    pub fn transfer_line_count_raw(&self) -> &str {
        &self.transfer_line_count
    }

    /// Opaque ordering key. Not for display.
    pub fn arrival_order_key(&self) -> &str {
        &self.arrival_order_key
    }

    /// Comma-joined ids of lines serving the station.
    pub fn connected_line_ids_raw(&self) -> &str {
        &self.connected_line_ids
    }

    /// Comma-joined ids of the station on each connected line.
    pub fn connected_station_ids_raw(&self) -> &str {
        &self.connected_station_ids
    }

    /// Train class, e.g. "일반" or "급행".
    pub fn train_status(&self) -> &str {
        &self.train_status
    }

    /// Countdown to arrival in seconds, as sent.
    pub fn arrival_seconds_raw(&self) -> &str {
        &self.arrival_seconds
    }

    pub fn train_number(&self) -> &str {
        &self.train_number
    }

    pub fn final_destination_id(&self) -> &str {
        &self.final_destination_id
    }

    pub fn final_destination_name(&self) -> &str {
        &self.final_destination_name
    }

    /// When the endpoint produced this entry. Not corrected for clock skew.
    pub fn received_timestamp(&self) -> &str {
        &self.received_timestamp
    }

    pub fn first_message(&self) -> &str {
        &self.first_message
    }

    pub fn second_message(&self) -> &str {
        &self.second_message
    }

    pub fn status_code_raw(&self) -> &str {
        &self.status_code
    }

    pub fn last_train_raw(&self) -> &str {
        &self.last_train
    }

    /// Whole minutes until arrival, rounded up. Unparseable input gives 0.
    pub fn minutes_until_arrival(&self) -> u64 {
        self.arrival_seconds
            .trim()
            .parse::<u64>()
            .map(|secs| secs.div_ceil(60))
            .unwrap_or(0)
    }

    /// True only when the flag is exactly `"1"`.
    pub fn is_last_train(&self) -> bool {
        self.last_train == "1"
    }

    pub fn arrival_code(&self) -> Option<ArrivalCode> {
        ArrivalCode::parse(&self.status_code)
    }

    pub fn line(&self) -> Option<SubwayLine> {
        SubwayLine::parse(&self.line_id)
    }

    pub fn transfer_line_count(&self) -> Option<u32> {
        self.transfer_line_count.trim().parse().ok()
    }

    pub fn connected_line_ids(&self) -> impl Iterator<Item = &str> {
        split_list(&self.connected_line_ids)
    }

    pub fn connected_station_ids(&self) -> impl Iterator<Item = &str> {
        split_list(&self.connected_station_ids)
    }

    /// Parse the received timestamp (`YYYY-MM-DD HH:MM:SS[.fff]`).
    pub fn received_at(&self) -> Option<NaiveDateTime> {
        let raw = self.received_timestamp.trim();
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
    }

    /// Human-readable position of the train, e.g. "강남역 도착".
    ///
    /// For previous-station stages the queried station is named as the
    /// next stop.
    pub fn location_status(&self) -> String {
        let Some(code) = self.arrival_code() else {
            return UNKNOWN_STATUS.to_string();
        };
        let station = &self.station_name;

        match code {
            ArrivalCode::Entering => format!("{station}역 진입 중"),
            ArrivalCode::Arrived => format!("{station}역 도착"),
            ArrivalCode::Departed => format!("{station}역 출발"),
            ArrivalCode::PrevDeparted => format!("전역 출발 (다음: {station}역)"),
            ArrivalCode::PrevEntering => format!("전역 진입 중 (다음: {station}역)"),
            ArrivalCode::PrevArrived => {
                let previous = if self.second_message.is_empty() {
                    PREVIOUS_STATION_PLACEHOLDER
                } else {
                    self.second_message.as_str()
                };
                format!("{previous} 도착 (다음: {station}역)")
            }
            ArrivalCode::Running => {
                format!("{}역 방향 운행 중", self.final_destination_name)
            }
        }
    }

    fn identity(&self) -> (&str, &str, &str, &str) {
        (
            self.line_id.as_str(),
            self.station_id.as_str(),
            self.train_number.as_str(),
            self.arrival_order_key.as_str(),
        )
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

impl PartialEq for ArrivalRecord {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for ArrivalRecord {}

impl Hash for ArrivalRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Display for ArrivalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ArrivalRecord{{station='{}', line='{}', arrival_seconds='{}', status='{}'}}",
            self.station_name, self.line_id, self.arrival_seconds, self.status_code
        )
    }
}
