mod changelog;
mod compare;
mod prepare;
mod upstream;

use clap::Subcommand;

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the changelog block for merge commits since a ref
    Changelog(changelog::ChangelogArgs),
    /// Look up the latest upstream version of a package
    Upstream(upstream::UpstreamArgs),
    /// Compare two version strings
    Compare(compare::CompareArgs),
    /// Prepend the new release to CHANGELOG.md and update the spec file
    Prepare(prepare::PrepareArgs),
}

impl Commands {
    pub(crate) fn execute(self) -> Result<()> {
        match self {
            Self::Changelog(args) => changelog::run(&args),
            Self::Upstream(args) => upstream::run(&args),
            Self::Compare(args) => compare::run(&args),
            Self::Prepare(args) => prepare::run(&args),
        }
    }
}
