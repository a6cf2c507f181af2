use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};
use serde::Serialize;

/// Body of every error response: `{"error": "<message>"}`.
#[derive(Object, Serialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
