use std::time::Duration;

use reqwest::StatusCode;
use surge_core::report;
use surge_core::Outcome;

#[test]
fn non_error_statuses_classify_as_accepted() {
    let elapsed = Duration::from_millis(120);
    assert!(matches!(
        Outcome::from_status(StatusCode::ACCEPTED, elapsed),
        Outcome::Accepted { status: 202, .. }
    ));
    assert!(matches!(
        Outcome::from_status(StatusCode::OK, elapsed),
        Outcome::Accepted { status: 200, .. }
    ));
}

#[test]
fn error_statuses_classify_as_rejected() {
    let elapsed = Duration::from_millis(120);
    assert!(matches!(
        Outcome::from_status(StatusCode::TOO_MANY_REQUESTS, elapsed),
        Outcome::HttpRejected { status: 429, .. }
    ));
    assert!(matches!(
        Outcome::from_status(StatusCode::INTERNAL_SERVER_ERROR, elapsed),
        Outcome::HttpRejected { status: 500, .. }
    ));
}

#[test]
fn report_lines_are_single_well_formed_records() {
    let accepted = Outcome::Accepted { status: 202, elapsed: Duration::from_millis(450) };
    assert_eq!(report::format_line(3, &accepted), "Request 3: Status 202 (Time: 0.45s)");

    let rejected = Outcome::HttpRejected { status: 429, elapsed: Duration::from_millis(120) };
    assert_eq!(report::format_line(7, &rejected), "Request 7: HTTP Error 429 (Time: 0.12s)");

    let failed = Outcome::TransportFailed {
        error: String::from("connection refused"),
        elapsed: Duration::from_millis(2050),
    };
    let line = report::format_line(11, &failed);
    assert_eq!(line, "Request 11: Connection Error: connection refused (Time: 2.05s)");
    assert!(!line.contains('\n'));
}

#[test]
fn banner_names_count_target_and_credential() {
    let banner = report::banner(20, "http://localhost:8080/proxy/orders", "test_api_key_1");
    assert_eq!(
        banner,
        "Sending 20 concurrent requests to http://localhost:8080/proxy/orders \
         with API Key 'test_api_key_1'..."
    );
}

#[test]
fn elapsed_is_reported_for_every_variant() {
    let elapsed = Duration::from_millis(40);
    let outcomes = [
        Outcome::Accepted { status: 202, elapsed },
        Outcome::HttpRejected { status: 503, elapsed },
        Outcome::TransportFailed { error: String::from("timed out"), elapsed },
    ];
    for outcome in &outcomes {
        assert_eq!(outcome.elapsed(), elapsed);
    }
}
