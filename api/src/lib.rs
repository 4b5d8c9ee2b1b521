//! Fixture analytics server.
//!
//! Serves deterministic data for every endpoint the dashboard reads, so the
//! ui can be developed and the client integration-tested without the
//! production api.

pub mod fixtures;
pub mod routes;
pub mod telemetry;
pub mod time;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use payloads::Endpoint;
use std::collections::HashSet;
use std::net::TcpListener;

use crate::time::TimeSource;

/// Bind and start the server without awaiting it.
///
/// Binding to port 0 lets the OS choose; the chosen port is written back
/// into `config.port`.
pub async fn build(
    config: &mut Config,
    time_source: TimeSource,
) -> std::io::Result<Server> {
    let time_source = web::Data::new(time_source);
    let faults = web::Data::new(Faults::new(&config.fail_endpoints));
    let allowed_origins = config.allowed_origins.clone();

    let listener = TcpListener::bind((config.ip.as_str(), config.port))?;
    config.port = listener.local_addr()?.port();
    tracing::info!(
        port = config.port,
        failing = ?config.fail_endpoints,
        "fixture analytics api listening"
    );

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&allowed_origins))
            .app_data(time_source.clone())
            .app_data(faults.clone())
            .service(routes::api_services())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

/// The dashboard is served from another origin and only ever reads.
fn cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(["GET"])
        .allow_any_header()
        .max_age(3600);
    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }
    allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin (development only)
    pub allowed_origins: Vec<String>,
    /// Endpoints that always answer 500, for exercising error panels.
    pub fail_endpoints: Vec<Endpoint>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = split_list(
            &var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );
        let fail_endpoints = split_list(
            &var("FAIL_ENDPOINTS").unwrap_or_default(),
        )
        .iter()
        .map(|name| {
            Endpoint::from_name(name).ok_or_else(|| {
                anyhow::anyhow!("Unknown endpoint in FAIL_ENDPOINTS: {name}")
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Config {
            ip: var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: match var("PORT") {
                Ok(port) => port.parse()?,
                Err(_) => 8000,
            },
            allowed_origins,
            fail_endpoints,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Endpoints configured to fail.
#[derive(Debug, Clone, Default)]
pub struct Faults {
    failing: HashSet<Endpoint>,
}

impl Faults {
    pub fn new(endpoints: &[Endpoint]) -> Self {
        Self {
            failing: endpoints.iter().copied().collect(),
        }
    }

    pub fn is_failing(&self, endpoint: Endpoint) -> bool {
        self.failing.contains(&endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_are_trimmed() {
        assert_eq!(
            split_list(" users/gender, ,ai/topics "),
            vec!["users/gender".to_string(), "ai/topics".to_string()]
        );
        assert!(split_list("").is_empty());
    }

    #[test]
    fn faults_match_configured_endpoints() {
        let faults = Faults::new(&[Endpoint::UsersGender]);
        assert!(faults.is_failing(Endpoint::UsersGender));
        assert!(!faults.is_failing(Endpoint::UsersStats));
    }
}
