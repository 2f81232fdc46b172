//! Arrival status codes.

use std::fmt;

use serde::Serialize;

/// Stage of a train's approach relative to the queried station.
///
/// Codes 3, 4 and 5 describe the train at the *previous* station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArrivalCode {
    Entering,
    Arrived,
    Departed,
    PrevDeparted,
    PrevEntering,
    PrevArrived,
    Running,
}

/// (code, variant, description) for every known status.
static TABLE: [(u8, ArrivalCode, &str); 7] = [
    (0, ArrivalCode::Entering, "진입"),
    (1, ArrivalCode::Arrived, "도착"),
    (2, ArrivalCode::Departed, "출발"),
    (3, ArrivalCode::PrevDeparted, "전역출발"),
    (4, ArrivalCode::PrevEntering, "전역진입"),
    (5, ArrivalCode::PrevArrived, "전역도착"),
    (99, ArrivalCode::Running, "운행중"),
];

impl ArrivalCode {
    /// Look up a numeric status code.
    pub fn from_code(code: u8) -> Option<Self> {
        TABLE.iter().find(|(c, _, _)| *c == code).map(|(_, v, _)| *v)
    }

    /// Parse the text form sent by the endpoint (e.g. `"1"`).
    ///
    /// Only the exact text of a known code matches; `"01"`, `"+1"` and
    /// `" 1"` yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse::<u8>()
            .ok()
            .filter(|code| code.to_string() == raw)
            .and_then(Self::from_code)
    }

    pub fn code(self) -> u8 {
        self.entry().0
    }

    /// Short Korean description, e.g. "도착".
    pub fn description(self) -> &'static str {
        self.entry().2
    }

    /// Whether the code describes the train at the previous station.
    pub fn is_previous_station(self) -> bool {
        matches!(
            self,
            ArrivalCode::PrevDeparted | ArrivalCode::PrevEntering | ArrivalCode::PrevArrived
        )
    }

    fn entry(self) -> &'static (u8, ArrivalCode, &'static str) {
        // Every variant has a row in TABLE.
        TABLE
            .iter()
            .find(|(_, v, _)| *v == self)
            .unwrap_or(&TABLE[0])
    }
}

impl fmt::Display for ArrivalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.code())
    }
}
