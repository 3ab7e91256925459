use serde::{Deserialize, Serialize};

/// Failure half of the backend envelope: `{ "error": { "message", "statusCode"? } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        rename = "statusCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub status_code: Option<u16>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self {
            error: ErrorBody {
                message: Some(message.into()),
                status_code,
            },
        }
    }
}
