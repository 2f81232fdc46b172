//! Integration tests for the arrival client using WireMock.
//!
//! These drive the real HTTP transport against a mock endpoint. The
//! client blocks, so each call runs on tokio's blocking pool.

use std::time::Duration;

use subway_arrivals::domain::{ArrivalCode, SubwayLine};
use subway_arrivals::seoul::{ApiConfig, ArrivalError, SubwayClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// =============================================================================
// Test Helpers
// =============================================================================

const GANGNAM_PATH: &str =
    "/api/subway/test-key/json/realtimeStationArrival/0/4/%EA%B0%95%EB%82%A8";

fn test_config(server: &MockServer) -> ApiConfig {
    ApiConfig::new("test-key").with_base_url(format!("{}/api/subway", server.uri()))
}

/// Run one paged query on the blocking pool.
async fn fetch(
    config: ApiConfig,
    station: &'static str,
    start: i64,
    end: i64,
) -> Result<Vec<subway_arrivals::domain::ArrivalRecord>, ArrivalError> {
    tokio::task::spawn_blocking(move || {
        let client = SubwayClient::new(config)?;
        client.realtime_arrivals_paged(station, start, end)
    })
    .await
    .expect("blocking task panicked")
}

/// Sample response with two trains approaching 강남.
fn arrivals_response() -> serde_json::Value {
    serde_json::json!({
        "errorMessage": {
            "status": 200,
            "code": "INFO-000",
            "message": "정상 처리되었습니다.",
            "total": 2
        },
        "realtimeArrivalList": [
            {
                "subwayId": "1002",
                "updnLine": "내선",
                "trainLineNm": "성수행 - 역삼방면",
                "statnId": "1002000222",
                "statnNm": "강남",
                "ordkey": "01000성수0",
                "barvlDt": "0",
                "btrainNo": "2234",
                "bstatnNm": "성수",
                "arvlMsg2": "강남 도착",
                "arvlMsg3": "강남",
                "arvlCd": "1",
                "lstcarAt": "0"
            },
            {
                "subwayId": "1002",
                "updnLine": "내선",
                "trainLineNm": "성수행 - 역삼방면",
                "statnId": "1002000222",
                "statnNm": "강남",
                "ordkey": "01001성수0",
                "barvlDt": "125",
                "btrainNo": "2236",
                "bstatnNm": "성수",
                "arvlMsg2": "[2]번째 전역 (교대)",
                "arvlMsg3": "교대",
                "arvlCd": "5",
                "lstcarAt": "1"
            }
        ]
    })
}

/// Sample API error response
fn api_error_response(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "errorMessage": {
            "status": 500,
            "code": code,
            "message": message,
            "total": 0
        }
    })
}

// =============================================================================
// Success Tests
// =============================================================================

mod success_tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn fetches_arrivals_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(GANGNAM_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(arrivals_response()))
            .expect(1)
            .mount(&server)
            .await;

        let arrivals = fetch(test_config(&server), "강남", 0, 4).await.unwrap();

        assert_eq!(arrivals.len(), 2);

        let first = &arrivals[0];
        assert_eq!(first.train_number(), "2234");
        assert_eq!(first.arrival_code(), Some(ArrivalCode::Arrived));
        assert_eq!(first.location_status(), "강남역 도착");
        assert_eq!(first.minutes_until_arrival(), 0);
        assert_eq!(first.line(), Some(SubwayLine::Line2));
        assert!(!first.is_last_train());

        let second = &arrivals[1];
        assert_eq!(second.train_number(), "2236");
        assert_eq!(second.location_status(), "교대 도착 (다음: 강남역)");
        assert_eq!(second.minutes_until_arrival(), 3);
        assert!(second.is_last_train());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn empty_result_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(GANGNAM_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "errorMessage": { "status": 200, "code": "INFO-000", "message": "정상 처리되었습니다." }
            })))
            .mount(&server)
            .await;

        let arrivals = fetch(test_config(&server), "강남", 0, 4).await.unwrap();
        assert!(arrivals.is_empty());
    }
}

// =============================================================================
// Error Tests
// =============================================================================

mod error_tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn endpoint_error_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(GANGNAM_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(api_error_response("ERROR-337", "해당하는 데이터가 없습니다.")),
            )
            .mount(&server)
            .await;

        let err = fetch(test_config(&server), "강남", 0, 4).await.unwrap_err();
        match err {
            ArrivalError::Api { code, message } => {
                assert_eq!(code.as_deref(), Some("ERROR-337"));
                assert_eq!(message, "해당하는 데이터가 없습니다.");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn non_success_status_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = fetch(test_config(&server), "강남", 0, 4).await.unwrap_err();
        match err {
            ArrivalError::Network { status, url, .. } => {
                assert_eq!(status, Some(503));
                assert!(url.ends_with(GANGNAM_PATH));
            }
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn malformed_body_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let err = fetch(test_config(&server), "강남", 0, 4).await.unwrap_err();
        assert!(matches!(err, ArrivalError::Api { code: None, .. }));
        assert!(err.to_string().contains("malformed response"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(arrivals_response())
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let config = test_config(&server).with_read_timeout(Duration::from_millis(200));
        let err = fetch(config, "강남", 0, 4).await.unwrap_err();
        assert!(matches!(err, ArrivalError::Network { status: None, .. }));
        assert!(err.is_retryable());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn invalid_pagination_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(arrivals_response()))
            .expect(0)
            .mount(&server)
            .await;

        let err = fetch(test_config(&server), "강남", 0, 1001).await.unwrap_err();
        assert!(matches!(err, ArrivalError::InvalidArgument(_)));

        let err = fetch(test_config(&server), "  ", 0, 4).await.unwrap_err();
        assert!(matches!(err, ArrivalError::InvalidArgument(_)));
    }
}
