//! Decoding of endpoint responses into arrival records.
//!
//! The endpoint wraps results in an envelope:
//!
//! ```json
//! {
//!   "errorMessage": { "status": 200, "code": "INFO-000", "message": "정상 처리되었습니다." },
//!   "realtimeArrivalList": [ { "subwayId": "1002", "statnNm": "강남", ... } ]
//! }
//! ```
//!
//! The result array is omitted entirely when nothing is arriving. In that
//! case the endpoint may also send a bare top-level status
//! (`{"status": 500, "code": "INFO-200", ...}`), which carries no arrivals and
//! is not an error.

use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use crate::domain::ArrivalRecord;

use super::error::ArrivalError;

/// Envelope code meaning "no error".
pub const SUCCESS_CODE: &str = "INFO-000";

const ENVELOPE_KEY: &str = "errorMessage";
const RESULTS_KEY: &str = "realtimeArrivalList";

type Slot = fn(&mut ArrivalRecord) -> &mut String;

/// Wire key to record field.
static FIELDS: [(&str, Slot); 21] = [
    ("subwayId", |r| &mut r.line_id),
    ("updnLine", |r| &mut r.direction),
    ("trainLineNm", |r| &mut r.train_line_name),
    ("statnFid", |r| &mut r.previous_station_id),
    ("statnTid", |r| &mut r.next_station_id),
    ("statnId", |r| &mut r.station_id),
    ("statnNm", |r| &mut r.station_name),
    ("trnsitCo", |r| &mut r.transfer_line_count),
    ("ordkey", |r| &mut r.arrival_order_key),
    ("subwayList", |r| &mut r.connected_line_ids),
    ("statnList", |r| &mut r.connected_station_ids),
    ("btrainSttus", |r| &mut r.train_status),
    ("barvlDt", |r| &mut r.arrival_seconds),
    ("btrainNo", |r| &mut r.train_number),
    ("bstatnId", |r| &mut r.final_destination_id),
    ("bstatnNm", |r| &mut r.final_destination_name),
    ("recptnDt", |r| &mut r.received_timestamp),
    ("arvlMsg2", |r| &mut r.first_message),
    ("arvlMsg3", |r| &mut r.second_message),
    ("arvlCd", |r| &mut r.status_code),
    ("lstcarAt", |r| &mut r.last_train),
];

/// Decode a response body into arrivals, in the order the endpoint sent them.
///
/// All or nothing: any malformed entry fails the whole body.
pub fn decode_arrivals(body: &str) -> Result<Vec<ArrivalRecord>, ArrivalError> {
    let root: Value = serde_json::from_str(body).map_err(|e| {
        error!(error = %e, "failed to parse JSON response");
        ArrivalError::api(format!("malformed response: {e}"))
    })?;

    let root = root
        .as_object()
        .ok_or_else(|| ArrivalError::api("malformed response: expected a JSON object"))?;

    check_envelope(root)?;

    let entries = match root.get(RESULTS_KEY) {
        None | Some(Value::Null) => {
            warn!("no {RESULTS_KEY} in response, returning no arrivals");
            return Ok(Vec::new());
        }
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(ArrivalError::api(format!(
                "malformed response: {RESULTS_KEY} is not an array"
            )));
        }
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry.as_object().map(map_record).ok_or_else(|| {
                ArrivalError::api(format!(
                    "malformed response: arrival entry {index} is not an object"
                ))
            })
        })
        .collect()
}

/// Fail if the payload carries a non-success status envelope.
fn check_envelope(root: &Map<String, Value>) -> Result<(), ArrivalError> {
    let Some(Value::Object(envelope)) = root.get(ENVELOPE_KEY) else {
        return Ok(());
    };

    let code = text(envelope.get("code"));
    let message = text(envelope.get("message"));

    if code == SUCCESS_CODE {
        debug!(code = %code, detail = %message, "API status");
        return Ok(());
    }

    error!(code = %code, detail = %message, "API returned an error");
    Err(ArrivalError::Api {
        code: (!code.is_empty()).then_some(code),
        message,
    })
}

fn map_record(entry: &Map<String, Value>) -> ArrivalRecord {
    let mut record = ArrivalRecord::default();
    for (key, slot) in &FIELDS {
        *slot(&mut record) = text(entry.get(*key));
    }
    record
}

/// Text form of a scalar. Missing, null and nested values become "".
fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
