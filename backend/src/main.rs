//! Service entry-point: tracing bootstrap, configuration, HTTP server.

mod server;

use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use server::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %error, "tracing init failed");
    }

    let config = ServerConfig::from_env()?;
    info!(bind_addr = %config.bind_addr(), "starting user registry");
    server::run(&config)?.await
}
