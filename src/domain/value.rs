use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Forward Email API key.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Name used when reporting validation errors.
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Email domain that namespaces aliases (`example.com`).
///
/// Invariant: non-empty after trimming, no inner whitespace.
pub struct DomainName(String);

impl DomainName {
    /// Name used when reporting validation errors.
    pub const FIELD: &'static str = "domain";

    /// Create a validated [`DomainName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(path_segment(Self::FIELD, value.into())?))
    }

    /// Borrow the validated domain name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Alias name, the local part before `@` (`sales`, `*` for catch-all).
///
/// Invariant: non-empty after trimming, no inner whitespace.
pub struct AliasName(String);

impl AliasName {
    /// Form field name used by Forward Email (`name`).
    pub const FIELD: &'static str = "name";

    /// Create a validated [`AliasName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(path_segment(Self::FIELD, value.into())?))
    }

    /// Borrow the validated alias name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn path_segment(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(ValidationError::ContainsWhitespace {
            field,
            input: value,
        });
    }
    Ok(trimmed.to_owned())
}
