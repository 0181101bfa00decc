pub mod blame;
pub mod error;
pub mod repository;

pub use blame::{AttributedLine, BlameFile};
pub use error::{GitError, Result};
