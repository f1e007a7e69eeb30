use crate::model::errors::ResponseStatus;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const LOGIN_RECEIVED_MESSAGE: &str = "Login credentials received";

/// Whatever the caller sent under `username` and `password`, any JSON type.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
}

impl From<Map<String, Value>> for LoginRequest {
    fn from(mut fields: Map<String, Value>) -> Self {
        let mut take = |key: &str| fields.remove(key).filter(|value| !value.is_null());
        LoginRequest {
            username: take("username"),
            password: take("password"),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct LoginResponse {
    pub status: ResponseStatus,
    pub message: String,
    pub username: Option<Value>,
}

impl LoginResponse {
    pub fn received(username: Option<Value>) -> Self {
        LoginResponse {
            status: ResponseStatus::Success,
            message: LOGIN_RECEIVED_MESSAGE.to_string(),
            username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_username_serializes_as_null() {
        let value = serde_json::to_value(LoginResponse::received(None)).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "success",
                "message": "Login credentials received",
                "username": null
            })
        );
    }

    #[test]
    fn missing_and_null_fields_resolve_to_none() {
        let fields = json!({ "password": null, "remember": true });
        let request = LoginRequest::from(fields.as_object().cloned().unwrap());
        assert_eq!(request, LoginRequest::default());
    }
}
