use lambda_runtime::{run, service_fn, Error};
use tracing::info;

use terve::handler::function_handler;
use terve::shutdown;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing. Timestamps are skipped: CloudWatch records
    // ingestion time for every line.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    info!("Starting greeting function");

    // The platform delivers termination-class signals between invocations;
    // the listener owns process exit from that point on.
    shutdown::spawn_listener();

    run(service_fn(function_handler)).await
}
