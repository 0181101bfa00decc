use thiserror::Error;

/// Errors that can occur when working with reconstructed changelogs
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Invalid release version: {0}")]
    InvalidVersion(String),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<ChangelogError>),
}

impl ChangelogError {
    #[must_use]
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidVersion(ver) => {
                format!("Invalid release version '{ver}': expected a dotted version such as v1.33.0")
            }
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}
