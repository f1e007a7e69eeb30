use axum::http::{header, HeaderName, Method};

pub const DEFAULT_BIND_POINT: &str = "0.0.0.0:5000";
pub const FRONTEND_ORIGIN: &str = "http://localhost:3000";

/// Cross-origin rules applied to every route, and echoed by the login handler.
#[derive(Clone, Debug)]
pub struct CorsPolicy {
    pub allowed_origin: String,
    pub allowed_methods: Vec<Method>,
    pub allowed_headers: Vec<HeaderName>,
    pub allow_credentials: bool,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        CorsPolicy {
            allowed_origin: FRONTEND_ORIGIN.to_string(),
            allowed_methods: vec![Method::OPTIONS, Method::GET, Method::POST],
            allowed_headers: vec![header::CONTENT_TYPE],
            allow_credentials: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Configuration {
    pub server_bind_point: String,
    pub log_level: String,
    pub cors: CorsPolicy,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            server_bind_point: DEFAULT_BIND_POINT.to_string(),
            log_level: "DEBUG".to_string(),
            cors: CorsPolicy::default(),
        }
    }
}
