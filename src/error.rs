use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HelocError {
    /// A calculator precondition was violated. `reason` is meant to be shown to the user.
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl HelocError {
    pub(crate) fn invalid(field: &str, reason: &str) -> Self {
        log::warn!("rejected {}: {}", field, reason);
        HelocError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The user-facing message without the field prefix.
    pub fn reason(&self) -> &str {
        match self {
            HelocError::InvalidInput { reason, .. } => reason,
            HelocError::Serialization(msg) => msg,
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for HelocError {
    fn from(e: serde_json::Error) -> Self {
        HelocError::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HelocError>;

#[cfg(test)]
mod tests {
    use super::HelocError;
    use test_log::test;

    #[test]
    fn test_invalid_input_message() {
        let err = HelocError::invalid("draw_amount", "Draw amount cannot exceed credit limit.");
        assert_eq!(err.reason(), "Draw amount cannot exceed credit limit.");
        assert_eq!(
            err.to_string(),
            "Invalid input: draw_amount: Draw amount cannot exceed credit limit."
        );
    }
}
