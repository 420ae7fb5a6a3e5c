use thiserror::Error;

pub type RfwResult<T> = Result<T, RfwError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RfwError {
    #[error("Invalid argument `{name}`: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("Invalid operation: {message}")]
    InvalidOperation { message: String },
}

impl RfwError {
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }
}

/// Names in the format (widgets, arguments, imports, loop variables) must
/// contain at least one non-whitespace character.
pub(crate) fn require_name(value: &str, what: &str) -> RfwResult<()> {
    if value.trim().is_empty() {
        return Err(RfwError::invalid_argument(what, "a non-empty name is required"));
    }
    Ok(())
}
