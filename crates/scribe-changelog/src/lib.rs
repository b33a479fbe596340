mod error;
mod extract;
mod file;

pub use error::ChangelogError;
pub use extract::{extract, NOTES_BEGIN, NOTES_END};
pub use file::ChangelogFile;

pub type Result<T> = std::result::Result<T, ChangelogError>;
