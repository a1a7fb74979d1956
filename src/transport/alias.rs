use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::TransportError;
use super::reference::{ReferenceField, TransportReference};
use crate::domain::{Account, Alias, AliasName, AliasParameters, Domain};

/// Reads an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Deserialize)]
struct AccountJson {
    id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    object: String,
    #[serde(default, deserialize_with = "null_as_default")]
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    plan: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl ReferenceField for AccountJson {
    const FIELD: &'static str = "user";

    type Record = Account;

    fn into_record(self) -> Account {
        Account {
            id: self.id,
            object: self.object,
            email: self.email,
            display_name: self.display_name,
            plan: self.plan,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct DomainJson {
    id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    object: String,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default)]
    plan: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    has_mx_record: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    has_txt_record: bool,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl ReferenceField for DomainJson {
    const FIELD: &'static str = "domain";

    type Record = Domain;

    fn into_record(self) -> Domain {
        Domain {
            id: self.id,
            object: self.object,
            name: self.name,
            plan: self.plan,
            has_mx_record: self.has_mx_record,
            has_txt_record: self.has_txt_record,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AliasJson {
    user: TransportReference<AccountJson>,
    domain: TransportReference<DomainJson>,
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    labels: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    is_enabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    has_recipient_verification: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    recipients: Vec<String>,
    id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    object: String,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl From<AliasJson> for Alias {
    fn from(value: AliasJson) -> Self {
        Self {
            user: value.user.into_reference(),
            domain: value.domain.into_reference(),
            name: value.name,
            description: value.description,
            labels: value.labels,
            is_enabled: value.is_enabled,
            has_recipient_verification: value.has_recipient_verification,
            recipients: value.recipients,
            id: value.id,
            object: value.object,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Form shared by alias create (`POST`) and update (`PUT`).
pub fn encode_alias_form(alias: &AliasName, parameters: &AliasParameters) -> Vec<(String, String)> {
    let mut params = vec![(AliasName::FIELD.to_owned(), alias.as_str().to_owned())];

    if !parameters.description.is_empty() {
        params.push(("description".to_owned(), parameters.description.clone()));
    }

    for (key, value) in [
        (
            "has_recipient_verification",
            parameters.has_recipient_verification,
        ),
        ("is_enabled", parameters.is_enabled),
    ] {
        if let Some(value) = value {
            params.push((key.to_owned(), value.to_string()));
        }
    }

    for (key, values) in [
        ("recipients[]", parameters.recipients.as_deref()),
        ("labels[]", parameters.labels.as_deref()),
    ] {
        for value in values.unwrap_or_default() {
            params.push((key.to_owned(), value.clone()));
        }
    }

    params
}

pub fn decode_alias_json_response(json: &str) -> Result<Alias, TransportError> {
    let parsed: AliasJson = serde_json::from_str(json)?;
    Ok(parsed.into())
}

pub fn decode_aliases_json_response(json: &str) -> Result<Vec<Alias>, TransportError> {
    let parsed: Vec<AliasJson> = serde_json::from_str(json)?;
    Ok(parsed.into_iter().map(Alias::from).collect())
}
