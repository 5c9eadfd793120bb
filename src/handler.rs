//! Request handler for the greeting function
//!
//! A pure (request -> response) mapping with a single execution path:
//! read the caller's source IP from the proxy event, build the fixed
//! five-field payload, return it JSON-encoded with status 200. Safe to
//! invoke concurrently; no state crosses invocations.

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body;
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use tracing::info;

/// Greeting returned in the `message` field of every response.
pub const GREETING: &str = "hello rust";

/// Toolchain version baked in at build time (see build.rs).
const RUNTIME_VERSION: &str = env!("RUSTC_VERSION");

/// Response payload with a fixed shape.
///
/// The wire keys are a stable contract parsed by existing consumers,
/// including the historical `go version` key, which carries the toolchain
/// version string.
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: String,
    #[serde(rename = "source ip")]
    pub source_ip: String,
    pub architecture: String,
    #[serde(rename = "operating system")]
    pub operating_system: String,
    #[serde(rename = "go version")]
    pub runtime_version: String,
}

impl Greeting {
    /// Build the payload for a caller with the given source IP.
    ///
    /// Platform fields come from the executing binary itself, so they are
    /// identical for every invocation within one process.
    pub fn for_source_ip(source_ip: String) -> Self {
        Self {
            message: GREETING.to_string(),
            source_ip,
            architecture: std::env::consts::ARCH.to_string(),
            operating_system: std::env::consts::OS.to_string(),
            runtime_version: RUNTIME_VERSION.to_string(),
        }
    }
}

/// Handle one API Gateway proxy invocation.
///
/// The invocation context is not consulted. The only request field read is
/// the caller's source IP (`request_context.identity.source_ip`); an absent
/// IP maps to the empty string. Returns status 200 unconditionally —
/// encoding a struct of plain strings cannot fail, so the error return is
/// never populated in practice.
pub async fn function_handler(
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let source_ip = event
        .payload
        .request_context
        .identity
        .source_ip
        .unwrap_or_default();

    let greeting = Greeting::for_source_ip(source_ip);
    info!(source_ip = %greeting.source_ip, "Handling invocation");

    let body = serde_json::to_string(&greeting)?;

    Ok(ApiGatewayProxyResponse {
        status_code: 200,
        body: Some(Body::Text(body)),
        ..Default::default()
    })
}

#[cfg(test)]
#[path = "handler_test.rs"]
mod tests;
