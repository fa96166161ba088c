use chrono::{NaiveDate, NaiveDateTime};
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taxifare_client::clock::Clock;
use taxifare_client::validation::RideLimits;
use taxifare_client::{AppError, Config, FarePredictor, RemoteCallError, RideDetails};

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taxifare_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

struct FixedClock(NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

fn noon_clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    )
}

fn predictor_for(uri: &str) -> FarePredictor {
    let config = Config {
        prediction_url: format!("{uri}/predict"),
        limits: RideLimits::default(),
    };
    FarePredictor::with_clock(&config, noon_clock()).unwrap()
}

fn ride() -> RideDetails {
    RideDetails {
        ride_date: "2024-06-01".to_string(),
        ride_time: "13:00:00".to_string(),
        pickup_longitude: -73.98,
        pickup_latitude: 40.75,
        dropoff_longitude: -74.05,
        dropoff_latitude: 40.68,
        passenger_count: 2,
    }
}

// The predictor's HTTP client blocks the calling thread, so the mock server
// runs on its own runtime and the submission happens on the plain test
// thread. The runtime is declared first so the server drops before it.

#[test]
fn submit_returns_fare_and_route_map() {
    init_tracing();
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/predict"))
            .and(query_param("pickup_datetime", "2024-06-01 13:00:00"))
            .and(query_param("pickup_longitude", "-73.98"))
            .and(query_param("pickup_latitude", "40.75"))
            .and(query_param("dropoff_longitude", "-74.05"))
            .and(query_param("dropoff_latitude", "40.68"))
            .and(query_param("passenger_count", "2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "fare": 11.5 })),
            )
            .mount(&server),
    );

    let outcome = predictor_for(&server.uri()).submit(&ride()).unwrap();

    assert_eq!(outcome.prediction.fare, 11.5);
    assert_eq!(outcome.prediction.to_string(), "Predicted Fare: $11.50");
    assert_eq!(outcome.map.points[0].lat, 40.75);
    assert_eq!(outcome.map.points[1].lon, -74.05);
    assert!((outcome.map.view.latitude - 40.715).abs() < 1e-9);
}

#[test]
fn invalid_details_never_reach_the_service() {
    init_tracing();
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "fare": 1.0 })),
            )
            .expect(0)
            .mount(&server),
    );

    let mut details = ride();
    details.pickup_latitude = 0.0;
    details.passenger_count = 0;

    let error = predictor_for(&server.uri()).submit(&details).unwrap_err();
    assert_eq!(
        error.messages(),
        vec![
            "Pickup latitude must be between 40.5 and 40.9.",
            "Passenger count must be between 1 and 8.",
        ]
    );

    rt.block_on(server.verify());
}

#[test]
fn service_failure_surfaces_status_and_body() {
    init_tracing();
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(500).set_body_string("model offline"))
            .mount(&server),
    );

    let error = predictor_for(&server.uri()).submit(&ride()).unwrap_err();
    match error {
        AppError::RemoteCall(RemoteCallError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "model offline");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[test]
fn malformed_fare_payload_is_reported() {
    init_tracing();
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server),
    );

    let error = predictor_for(&server.uri()).submit(&ride()).unwrap_err();
    match error {
        AppError::RemoteCall(RemoteCallError::MalformedResponse { body, .. }) => {
            assert_eq!(body, "<html>oops</html>");
        }
        other => panic!("expected a malformed response error, got {other:?}"),
    }
}

#[test]
fn missing_fare_field_is_malformed() {
    init_tracing();
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/predict"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "price": 11.5 })),
            )
            .mount(&server),
    );

    let error = predictor_for(&server.uri()).submit(&ride()).unwrap_err();
    assert!(matches!(
        error,
        AppError::RemoteCall(RemoteCallError::MalformedResponse { .. })
    ));
}

#[test]
fn unreachable_service_is_a_transport_error() {
    init_tracing();

    let error = predictor_for("http://127.0.0.1:1").submit(&ride()).unwrap_err();
    assert!(matches!(
        error,
        AppError::RemoteCall(RemoteCallError::Transport(_))
    ));
}
