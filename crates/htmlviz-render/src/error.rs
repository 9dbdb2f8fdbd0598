use thiserror::Error;

/// Errors raised while validating chart input or producing markup.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("missing label: {0}")]
    MissingLabel(String),

    #[error("inconsistent {what}: expected {expected} values, got {actual}")]
    InconsistentData {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("{kind} chart requires {expected} data")]
    WrongDataShape {
        kind: &'static str,
        expected: &'static str,
    },

    #[error("payload serialization failed")]
    Json(#[from] serde_json::Error),

    #[error("template io error")]
    Io(#[from] std::io::Error),
}
