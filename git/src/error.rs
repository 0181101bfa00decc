use thiserror::Error;

/// Git operation error type that provides detailed context about the error
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Git2 error: {0}")]
    Git2Error(#[from] git2::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Failed to execute git command: {0}")]
    CommandError(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<GitError>),
}

impl GitError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        GitError::WithContext(context.into(), Box::new(self))
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            GitError::Git2Error(e) => {
                let msg = format!("{}", e);
                // Drop the class and code details, keep the message itself
                msg.split(';').next().map_or_else(
                    || format!("Git error: {}", msg),
                    |main_msg| format!("Git error: {}", main_msg.trim()),
                )
            }
            GitError::IoError(e) => format!("I/O error: {}", e),
            GitError::FileNotFound(path) => format!("File '{}' does not exist", path),
            GitError::RepositoryError(msg) => format!("Repository error: {}", msg),
            GitError::CommandError(msg) => format!("Git command failed: {}", msg),
            GitError::WithContext(ctx, err) => format!("{}: {}", ctx, err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GitError>;
