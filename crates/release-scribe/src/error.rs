use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no ref given and the repository has no tags")]
    NoReference,

    #[error("git error")]
    Git(#[from] scribe_git::GitError),

    #[error("changelog error")]
    Changelog(#[from] scribe_changelog::ChangelogError),

    #[error("upstream lookup error")]
    Upstream(#[from] scribe_upstream::UpstreamError),

    #[error("spec file error")]
    Spec(#[from] scribe_specfile::SpecError),
}

pub type Result<T> = std::result::Result<T, CliError>;
