use serde::Deserialize;

use super::TransportError;
use crate::domain::{GeneratePasswordParameters, GeneratedPassword};

#[derive(Debug, Clone, Deserialize)]
struct GeneratedPasswordJsonResponse {
    username: String,
    password: String,
}

pub fn encode_generate_password_form(
    parameters: &GeneratePasswordParameters,
) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    if let Some(new_password) = parameters.new_password.as_ref() {
        params.push(("new_password".to_owned(), new_password.clone()));
    }
    if let Some(password) = parameters.password.as_ref() {
        params.push(("password".to_owned(), password.clone()));
    }
    if let Some(is_override) = parameters.is_override {
        params.push(("is_override".to_owned(), is_override.to_string()));
    }
    if let Some(emailed_instructions) = parameters.emailed_instructions.as_ref() {
        params.push((
            "emailed_instructions".to_owned(),
            emailed_instructions.clone(),
        ));
    }

    params
}

pub fn decode_generated_password_json_response(
    json: &str,
) -> Result<GeneratedPassword, TransportError> {
    let parsed: GeneratedPasswordJsonResponse = serde_json::from_str(json)?;
    Ok(GeneratedPassword {
        username: parsed.username,
        password: parsed.password,
    })
}
