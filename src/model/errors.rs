use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

pub type ApiError = (StatusCode, Json<ServerError>);

const UNSUPPORTED_MEDIA_TYPE: &str = "415 Unsupported Media Type: Did not attempt to load JSON data because the request Content-Type was not 'application/json'.";

#[derive(Deserialize, Serialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ServerError {
    pub status: ResponseStatus,
    pub message: String,
}

impl ServerError {
    pub fn with_message<S: Into<String>>(message: S) -> Self {
        ServerError {
            status: ResponseStatus::Error,
            message: message.into(),
        }
    }

    pub fn into_api_error(self) -> ApiError {
        (StatusCode::BAD_REQUEST, Json(self))
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                ServerError::with_message(UNSUPPORTED_MEDIA_TYPE)
            }
            other => ServerError::with_message(other.body_text()),
        }
    }
}
