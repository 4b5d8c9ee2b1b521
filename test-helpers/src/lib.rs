//! Spawns the fixture api for integration tests, with "today" pinned.

use api::{Config, telemetry, time::TimeSource};
use jiff::Timestamp;
use payloads::{APIClient, ClientError, DateRange, Endpoint, RangeKey};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

/// "Today" for every spawned app, so default ranges are reproducible.
pub const TODAY: &str = "2024-01-07T12:00:00Z";

pub struct TestApp {
    pub client: APIClient,
    pub time_source: TimeSource,
}

impl TestApp {
    /// The 7 day range ending on [`TODAY`].
    pub fn week(&self) -> DateRange {
        RangeKey::SevenDays.resolve(self.time_source.today())
    }
}

/// Start a server on an OS-assigned port where `failing` endpoints always
/// answer 500.
pub async fn spawn_app_with(failing: &[Endpoint]) -> TestApp {
    // only the first test in the binary installs these
    let _ = LogTracer::init();
    let _ = telemetry::get_subscriber("error").try_init();

    let time_source = TimeSource::pinned(TODAY.parse::<Timestamp>().unwrap());
    let mut config = Config {
        ip: "127.0.0.1".into(),
        port: 0,
        allowed_origins: vec!["*".into()],
        fail_endpoints: failing.to_vec(),
    };
    let server = api::build(&mut config, time_source.clone()).await.unwrap();
    tokio::spawn(server);

    TestApp {
        client: APIClient::new(&format!("http://127.0.0.1:{}", config.port)),
        time_source,
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(&[]).await
}

/// Assert that a client call failed with `expected`.
pub fn assert_status_code<T>(
    result: Result<T, ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(error) => assert_eq!(error.status(), Some(expected), "{error}"),
        Ok(_) => panic!("expected {expected}, got a successful response"),
    }
}
