use crate::middleware::cors::append_cors_headers;
use crate::model::app_state::AppState;
use crate::model::errors::ServerError;
use crate::model::login_info::{LoginRequest, LoginResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{Map, Value};

/// Echoes the submitted username back without checking the credentials.
///
/// The plaintext password ends up in the log stream. Never deploy this as-is.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Response {
    let mut response = match parse_login_request(payload) {
        Ok(request) => {
            tracing::info!(
                "Received login attempt - Username: {}, Password: {}",
                display_credential(&request.username),
                display_credential(&request.password)
            );
            (
                StatusCode::OK,
                Json(LoginResponse::received(request.username)),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!("Failed to process login request: {}", &e.message);
            e.into_api_error().into_response()
        }
    };

    append_cors_headers(response.headers_mut(), &state.cors_policy);
    response
}

pub fn parse_login_request(
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<LoginRequest, ServerError> {
    let Json(fields) = payload?;
    Ok(LoginRequest::from(fields))
}

fn display_credential(value: &Option<Value>) -> String {
    match value {
        None => "None".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::{header, Request};
    use serde_json::json;

    async fn extract(
        content_type: Option<&str>,
        body: &'static str,
    ) -> Result<LoginRequest, ServerError> {
        let mut builder = Request::builder().method("POST").uri("/api/login");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(Body::from(body)).unwrap();
        parse_login_request(Json::<Map<String, Value>>::from_request(request, &()).await)
    }

    #[tokio::test]
    async fn accepts_json_media_types() {
        for content_type in [
            "application/json",
            "application/json; charset=utf-8",
            "application/vnd.api+json",
        ] {
            let request = extract(Some(content_type), r#"{"username":"bob"}"#)
                .await
                .unwrap();
            assert_eq!(request.username, Some(json!("bob")));
        }
    }

    #[tokio::test]
    async fn non_string_fields_are_kept_verbatim() {
        let request = extract(
            Some("application/json"),
            r#"{"username":7,"password":{"n":"a"}}"#,
        )
        .await
        .unwrap();
        assert_eq!(request.username, Some(json!(7)));
        assert_eq!(request.password, Some(json!({ "n": "a" })));
    }

    #[tokio::test]
    async fn rejects_missing_or_foreign_content_type() {
        for content_type in [None, Some("text/plain")] {
            let error = extract(content_type, "{}").await.unwrap_err();
            assert!(error.message.starts_with("415 Unsupported Media Type: "));
        }
    }

    #[tokio::test]
    async fn rejects_bodies_that_are_not_objects() {
        for body in [
            "null",
            "[\"alice\", \"secret\"]",
            "\"alice\"",
            "42",
            "",
            "{\"username\":",
        ] {
            let error = extract(Some("application/json"), body).await.unwrap_err();
            assert!(!error.message.is_empty());
        }
    }

    #[test]
    fn credentials_display_like_plain_text() {
        assert_eq!(display_credential(&None), "None");
        assert_eq!(display_credential(&Some(json!("secret"))), "secret");
        assert_eq!(display_credential(&Some(json!(12345))), "12345");
        assert_eq!(display_credential(&Some(json!({ "n": "a" }))), r#"{"n":"a"}"#);
    }
}
