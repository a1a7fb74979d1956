/// Parameters shared by alias create and update calls.
///
/// `None` means "leave the field out of the request". `Some(false)` and
/// `Some(vec![])` are explicit values and are kept apart from `None`.
///
/// `description` is sent only when non-empty, so an empty string cannot be
/// used to clear an existing description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasParameters {
    pub recipients: Option<Vec<String>>,
    pub description: String,
    pub labels: Option<Vec<String>>,
    pub has_recipient_verification: Option<bool>,
    pub is_enabled: Option<bool>,
}

/// Parameters for `generate-password`.
///
/// Every field is independent; the server decides which combinations are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratePasswordParameters {
    /// Password to set instead of a generated one.
    pub new_password: Option<String>,
    /// Current password, required by the server to keep existing mailbox data.
    pub password: Option<String>,
    /// Overwrite the mailbox even when the current password is unknown.
    pub is_override: Option<bool>,
    /// Address that receives setup instructions.
    pub emailed_instructions: Option<String>,
}
