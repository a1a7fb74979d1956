use serde::Deserialize;

/// Error document Forward Email returns with non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub error: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiErrorJsonResponse {
    #[serde(default)]
    error: Option<String>,
    message: String,
}

/// Returns `None` when the body is not an error document.
pub fn decode_api_error_json_response(json: &str) -> Option<ApiErrorBody> {
    let parsed: ApiErrorJsonResponse = serde_json::from_str(json).ok()?;
    Some(ApiErrorBody {
        error: parsed.error,
        message: parsed.message,
    })
}
