use chrono::{DateTime, Utc};

/// Record types that can stand behind a [`Reference`].
pub trait Identified {
    fn id(&self) -> &str;
}

/// A field the API returns either as a bare id or as the full embedded record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference<T> {
    Id(String),
    Embedded(Box<T>),
}

impl<T: Identified> Reference<T> {
    /// Identifier of the referenced record, whichever form was received.
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Embedded(record) => record.id(),
        }
    }

    /// The embedded record, if the server expanded it.
    pub fn embedded(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Embedded(record) => Some(record.as_ref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub object: String,
    pub email: String,
    pub display_name: Option<String>,
    pub plan: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Identified for Account {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub id: String,
    pub object: String,
    pub name: String,
    pub plan: Option<String>,
    pub has_mx_record: bool,
    pub has_txt_record: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Identified for Domain {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub user: Reference<Account>,
    pub domain: Reference<Domain>,
    pub name: String,
    pub description: String,
    pub labels: Vec<String>,
    pub is_enabled: bool,
    pub has_recipient_verification: bool,
    pub recipients: Vec<String>,
    pub id: String,
    pub object: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword {
    pub username: String,
    pub password: String,
}
