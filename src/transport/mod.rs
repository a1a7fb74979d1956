//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod alias;
mod api_error;
mod password;
mod reference;

pub use alias::{decode_alias_json_response, decode_aliases_json_response, encode_alias_form};
pub use api_error::decode_api_error_json_response;
pub use password::{decode_generated_password_json_response, encode_generate_password_form};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}
