use crate::errors::{ClientError, ErrorBody, ErrorResponse};
use serde_json::Value;

/// Backend response, chosen by HTTP status class.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Success { payload: Value },
    Failure { message: String, code: u16 },
}

impl Envelope {
    pub fn decode(status: u16, reason: Option<&str>, body: &[u8]) -> Result<Self, ClientError> {
        if (200..300).contains(&status) {
            return Self::decode_success(body);
        }

        Ok(Self::decode_failure(status, reason, body))
    }

    fn decode_success(body: &[u8]) -> Result<Self, ClientError> {
        let value = if body.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice::<Value>(body).map_err(ClientError::Decode)?
        };

        let payload = match value {
            Value::Object(mut map) => match map.remove("data") {
                Some(data) => data,
                None => Value::Object(map),
            },
            other => other,
        };

        Ok(Envelope::Success { payload })
    }

    fn decode_failure(status: u16, reason: Option<&str>, body: &[u8]) -> Self {
        let envelope = parse_error_body(body).unwrap_or_else(|| {
            let status_line = match reason {
                Some(reason) if !reason.is_empty() => format!("HTTP {status} {reason}"),
                _ => format!("HTTP {status}"),
            };
            ErrorResponse::new(status_line, Some(status))
        });

        let code = envelope.error.status_code.unwrap_or(status);
        let message = envelope
            .error
            .message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| format!("API request failed with status {status}"));

        Envelope::Failure { message, code }
    }

    pub fn into_result(self) -> Result<Value, ClientError> {
        match self {
            Envelope::Success { payload } => Ok(payload),
            Envelope::Failure { message, code } => Err(ClientError::Api {
                message,
                status: code,
            }),
        }
    }
}

// A `statusCode` that is not a u16 is dropped; the message is kept.
fn parse_error_body(body: &[u8]) -> Option<ErrorResponse> {
    let value = serde_json::from_slice::<Value>(body).ok()?;
    let error = value.get("error")?.as_object()?;

    Some(ErrorResponse {
        error: ErrorBody {
            message: error
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned),
            status_code: error
                .get("statusCode")
                .and_then(Value::as_u64)
                .and_then(|code| u16::try_from(code).ok()),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::responses::ApiResponse;
    use serde_json::json;

    fn decode(status: u16, body: &str) -> Envelope {
        Envelope::decode(status, Some("Reason"), body.as_bytes()).unwrap()
    }

    #[test]
    fn success_returns_data_field() {
        let envelope = decode(200, r#"{"data":[{"id":"1"}],"meta":{"count":1}}"#);
        assert_eq!(
            envelope,
            Envelope::Success {
                payload: json!([{"id": "1"}])
            }
        );
    }

    #[test]
    fn success_keeps_explicit_null_data() {
        let envelope = decode(200, r#"{"data":null}"#);
        assert_eq!(
            envelope,
            Envelope::Success {
                payload: Value::Null
            }
        );
    }

    #[test]
    fn success_without_data_returns_whole_body() {
        let envelope = decode(201, r#"{"id":"abc","name":"Demo"}"#);
        assert_eq!(
            envelope,
            Envelope::Success {
                payload: json!({"id": "abc", "name": "Demo"})
            }
        );

        let envelope = decode(200, "[1,2,3]");
        assert_eq!(
            envelope,
            Envelope::Success {
                payload: json!([1, 2, 3])
            }
        );
    }

    #[test]
    fn empty_success_body_is_null() {
        assert_eq!(
            decode(204, ""),
            Envelope::Success {
                payload: Value::Null
            }
        );
    }

    #[test]
    fn success_body_that_is_not_json_is_a_decode_error() {
        let result = Envelope::decode(200, Some("OK"), b"<html>oops</html>");
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[test]
    fn message_survives_a_status_code_that_is_not_a_number() {
        let envelope = Envelope::decode(
            400,
            Some("Bad Request"),
            br#"{"error":{"message":"Bad input","statusCode":"400"}}"#,
        )
        .unwrap();
        assert_eq!(
            envelope,
            Envelope::Failure {
                message: "Bad input".into(),
                code: 400
            }
        );
    }

    #[test]
    fn out_of_range_status_code_falls_back_to_http_status() {
        let envelope = decode(422, r#"{"error":{"message":"Invalid","statusCode":70000}}"#);
        assert_eq!(
            envelope,
            Envelope::Failure {
                message: "Invalid".into(),
                code: 422
            }
        );
    }

    #[test]
    fn failure_uses_envelope_message_and_code() {
        let envelope = decode(409, r#"{"error":{"message":"Stage exists","statusCode":422}}"#);
        assert_eq!(
            envelope,
            Envelope::Failure {
                message: "Stage exists".into(),
                code: 422
            }
        );
    }

    #[test]
    fn failure_without_status_code_uses_http_status() {
        let envelope = decode(404, r#"{"error":{"message":"Not found"}}"#);
        assert_eq!(
            envelope,
            Envelope::Failure {
                message: "Not found".into(),
                code: 404
            }
        );
    }

    #[test]
    fn unparseable_failure_body_is_synthesized_from_status_line() {
        let envelope = Envelope::decode(502, Some("Bad Gateway"), b"upstream down").unwrap();
        assert_eq!(
            envelope,
            Envelope::Failure {
                message: "HTTP 502 Bad Gateway".into(),
                code: 502
            }
        );
    }

    #[test]
    fn failure_envelope_without_message_falls_back_to_status() {
        let envelope = decode(500, r#"{"error":{}}"#);
        let err = envelope.into_result().unwrap_err();
        assert!(err.to_string().contains("500"));
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn into_result_maps_failure_to_api_error() {
        let err = decode(404, r#"{"error":{"message":"Not found"}}"#)
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), "Not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn serialized_api_response_round_trips_through_decode() {
        let body = serde_json::to_vec(&ApiResponse::new(json!({"id": "s1"}))).unwrap();
        let payload = Envelope::decode(200, None, &body)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(payload, json!({"id": "s1"}));
    }

    #[test]
    fn serialized_error_response_keeps_its_status_code() {
        let body = serde_json::to_vec(&ErrorResponse::new("Conflict", Some(409))).unwrap();
        let envelope = Envelope::decode(400, Some("Bad Request"), &body).unwrap();
        assert_eq!(
            envelope,
            Envelope::Failure {
                message: "Conflict".into(),
                code: 409
            }
        );
    }
}
