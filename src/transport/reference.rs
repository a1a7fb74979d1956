use serde::de::{DeserializeOwned, Error as DeError};
use serde::{Deserialize, Deserializer};

use crate::domain::Reference;

/// Embedded record that may appear in place of a bare id.
pub trait ReferenceField: DeserializeOwned {
    /// JSON field name, used in decode errors.
    const FIELD: &'static str;

    type Record;

    fn into_record(self) -> Self::Record;
}

/// Either a quoted id or a full object, as sent by Forward Email for `user`
/// and `domain`.
///
/// The raw token is captured first and both shapes are tried against it, so
/// a failed attempt leaves nothing half-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportReference<T> {
    Id(String),
    Embedded(T),
}

impl<T: ReferenceField> TransportReference<T> {
    pub fn into_reference(self) -> Reference<T::Record> {
        match self {
            Self::Id(id) => Reference::Id(id),
            Self::Embedded(record) => Reference::Embedded(Box::new(record.into_record())),
        }
    }
}

impl<'de, T: ReferenceField> Deserialize<'de> for TransportReference<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        if let Ok(id) = serde_json::from_str::<String>(token) {
            return Ok(Self::Id(id));
        }
        if let Ok(record) = serde_json::from_str::<T>(token) {
            return Ok(Self::Embedded(record));
        }

        Err(D::Error::custom(format!(
            "cannot decode {} field: {token}",
            T::FIELD
        )))
    }
}
