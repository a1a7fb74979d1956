use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    ContainsWhitespace { field: &'static str, input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::ContainsWhitespace { field, input } => {
                write!(f, "{field} must not contain whitespace: {input:?}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
