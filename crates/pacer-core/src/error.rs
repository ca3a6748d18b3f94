use thiserror::Error;

#[derive(Error, Debug)]
pub enum PacerError {
    #[error("Invalid command kind: '{tag}'")]
    InvalidKind { tag: String },

    #[error(
        "Inconsistent command flags: kind {} with active flags [{}]",
        .kind.as_deref().unwrap_or("none"),
        .active.join(", ")
    )]
    InconsistentFlags {
        kind: Option<String>,
        active: Vec<String>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl PacerError {
    pub fn invalid_kind(tag: impl Into<String>) -> Self {
        Self::InvalidKind { tag: tag.into() }
    }

    pub fn is_invalid_kind(&self) -> bool {
        matches!(self, Self::InvalidKind { .. })
    }

    pub fn is_inconsistent_flags(&self) -> bool {
        matches!(self, Self::InconsistentFlags { .. })
    }
}
