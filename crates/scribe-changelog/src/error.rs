use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChangelogError {
    /// A merge commit whose first line does not follow the canonical
    /// "Merge pull request #N from owner/branch" shape. The pull-request
    /// id cannot be recovered from such a message, so extraction stops
    /// instead of producing a changelog with missing references.
    #[error("merge commit message has no pull-request reference: '{summary}'")]
    MalformedMergeMessage { summary: String },

    #[error("failed to read changelog at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write changelog at '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
