use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Changelog error: {0}")]
    Changelog(#[from] changelog::ChangelogError),

    #[error("Git error: {0}")]
    Git(#[from] git::error::GitError),

    #[error("Cross-reference error: {0}")]
    Xref(#[from] xref::XrefError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Other(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Changelog(err) => err.user_message(),
            Self::Git(err) => err.user_message(),
            Self::Xref(err) => err.user_message(),
            Self::Csv(err) => format!("CSV export failed: {err}"),
            Self::Other(msg) => msg.clone(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
