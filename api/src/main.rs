use api::{
    Config, build,
    telemetry::{get_subscriber, init_subscriber},
    time::TimeSource,
};

/// Fixture analytics API server
///
/// Environment variables can be set directly or loaded from a .env file in
/// the project root. All are optional.
///
/// - IP_ADDRESS: Server bind address (default 127.0.0.1)
/// - PORT: Server port (default 8000)
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin, or a comma-separated list)
/// - FAIL_ENDPOINTS: comma-separated endpoints that answer 500, e.g.
///   `users/gender,ai/topics`
///
/// Example development command:
/// cargo run -p api
///
/// Then serve the dashboard against it:
/// cd ui && API_BASE=http://127.0.0.1:8000 trunk serve
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if available
    // This will silently ignore if the file doesn't exist
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info,actix_web=warn");
    init_subscriber(subscriber)?;

    let mut config = Config::from_env()?;

    let server = build(&mut config, TimeSource::system()).await?;
    server.await?;
    Ok(())
}
