use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{kind} not found: {id}")]
    UnknownReference { kind: &'static str, id: String },

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    #[error("client '{client}' already has routine '{routine}' assigned and active")]
    DuplicateAssignment { client: String, routine: String },
}

impl CoreError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown(kind: &'static str, id: impl Into<String>) -> Self {
        CoreError::UnknownReference {
            kind,
            id: id.into(),
        }
    }
}
