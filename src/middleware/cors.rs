use crate::model::configuration::CorsPolicy;
use anyhow::Context;
use axum::http::header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN};
use axum::http::{HeaderMap, HeaderValue};
use tower_http::cors::CorsLayer;

/// Builds the process-wide CORS layer from an immutable policy.
///
/// Fails instead of panicking when the origin is not a valid header value, or when
/// credentials are combined with a wildcard origin.
pub fn build_cors_layer(policy: &CorsPolicy) -> anyhow::Result<CorsLayer> {
    let origin = policy
        .allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid allowed origin: {}", &policy.allowed_origin))?;

    if policy.allow_credentials && origin == "*" {
        anyhow::bail!("Credentialed requests cannot be combined with a wildcard origin.");
    }

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(policy.allowed_methods.clone())
        .allow_headers(policy.allowed_headers.clone())
        .allow_credentials(policy.allow_credentials))
}

/// Appends the origin and credentials headers to a single response.
pub fn append_cors_headers(headers: &mut HeaderMap, policy: &CorsPolicy) {
    match HeaderValue::from_str(&policy.allowed_origin) {
        Ok(origin) => {
            headers.append(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }
        Err(e) => {
            tracing::error!("Failed to convert allowed origin into a header value: {}", e);
        }
    }

    if policy.allow_credentials {
        headers.append(
            ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
    }
}
