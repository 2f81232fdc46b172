use std::process::ExitCode;

use subway_arrivals::domain::ArrivalRecord;
use subway_arrivals::seoul::{ApiConfig, ArrivalError, SubwayClient};
use tracing_subscriber::EnvFilter;

const DEFAULT_STATION: &str = "강남";
const DEFAULT_START: i64 = 0;
const DEFAULT_END: i64 = 4;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    // Usage: subway-arrivals [--json] [STATION] [START] [END]
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = match args.iter().position(|a| a == "--json") {
        Some(i) => {
            args.remove(i);
            true
        }
        None => false,
    };

    match run(&args, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String], json: bool) -> Result<(), ArrivalError> {
    let api_key = std::env::var("SEOUL_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: SEOUL_API_KEY not set.");
        String::new()
    });

    let mut config = ApiConfig::new(api_key);
    if let Ok(base_url) = std::env::var("SEOUL_API_BASE_URL") {
        config = config.with_base_url(base_url);
    }

    let station = args.first().map(String::as_str).unwrap_or(DEFAULT_STATION);
    let start = parse_index(args.get(1), DEFAULT_START, "start")?;
    let end = parse_index(args.get(2), DEFAULT_END, "end")?;

    let client = SubwayClient::new(config)?;
    let arrivals = client.realtime_arrivals_paged(station, start, end)?;

    if json {
        let out = serde_json::to_string_pretty(&arrivals)
            .map_err(|e| ArrivalError::Api { code: None, message: e.to_string() })?;
        println!("{out}");
        return Ok(());
    }

    println!("=== {station}역 도착 예정 열차 ===");
    println!();
    for arrival in &arrivals {
        print_arrival(arrival);
    }
    if arrivals.is_empty() {
        println!("(도착 예정 열차 없음)");
    }

    Ok(())
}

fn parse_index(arg: Option<&String>, default: i64, name: &str) -> Result<i64, ArrivalError> {
    match arg {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| ArrivalError::InvalidArgument(format!("{name} index is not a number: {raw}"))),
    }
}

fn print_arrival(arrival: &ArrivalRecord) {
    let line = arrival
        .line()
        .map(|l| l.display_name().to_string())
        .unwrap_or_else(|| arrival.line_id().to_string());

    println!("현재 위치: {}", arrival.location_status());
    println!("호선: {line}");
    println!("종착역: {}", arrival.final_destination_name());
    println!(
        "도착 예정: {}분 후 ({}초)",
        arrival.minutes_until_arrival(),
        arrival.arrival_seconds_raw()
    );
    println!("상태: {}", arrival.first_message());
    println!("막차: {}", if arrival.is_last_train() { "예" } else { "아니오" });
    println!("---");
}
