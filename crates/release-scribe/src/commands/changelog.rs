use std::path::{Path, PathBuf};

use clap::Args;
use scribe_git::Repository;

use crate::error::{CliError, Result};

#[derive(Args)]
pub(crate) struct ChangelogArgs {
    /// Ref to list merge commits from (defaults to the latest tag)
    pub(crate) reference: Option<String>,

    /// Path to the git repository
    #[arg(long = "git-repo", default_value = ".")]
    pub(crate) git_repo: PathBuf,

    /// Repository name used to render pull-request links
    #[arg(long = "repo-hint")]
    pub(crate) repo_hint: Option<String>,
}

pub(crate) fn run(args: &ChangelogArgs) -> Result<()> {
    let block = build_block(
        &args.git_repo,
        args.reference.as_deref(),
        args.repo_hint.as_deref(),
    )?;
    print!("{block}");
    Ok(())
}

/// Extracts the bullet block for merges in `reference..HEAD`. Without a
/// ref the latest tag is used; a tagless repository is a usage error.
pub(crate) fn build_block(
    git_repo: &Path,
    reference: Option<&str>,
    repo_hint: Option<&str>,
) -> Result<String> {
    let repo = Repository::open(git_repo)?;

    let reference = match reference {
        Some(reference) => reference.to_string(),
        None => repo.latest_tag()?.ok_or(CliError::NoReference)?,
    };

    let commits = repo.merge_commits_since(&reference)?;
    Ok(scribe_changelog::extract(&commits, repo_hint)?)
}
