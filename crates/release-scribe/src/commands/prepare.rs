use std::cmp::Ordering;
use std::path::PathBuf;

use clap::Args;
use scribe_changelog::ChangelogFile;
use scribe_specfile::SpecFile;
use scribe_upstream::{ReqwestHttp, UpstreamResolver};
use tracing::warn;

use crate::commands::changelog;
use crate::error::Result;

#[derive(Args)]
pub(crate) struct PrepareArgs {
    /// Version being released
    #[arg(long)]
    pub(crate) version: String,

    /// Ref to list merge commits from (defaults to the latest tag)
    pub(crate) reference: Option<String>,

    /// Path to the git repository
    #[arg(long = "git-repo", default_value = ".")]
    pub(crate) git_repo: PathBuf,

    /// Repository name used to render pull-request links
    #[arg(long = "repo-hint")]
    pub(crate) repo_hint: Option<String>,

    /// RPM spec file to update alongside CHANGELOG.md
    #[arg(long)]
    pub(crate) specfile: Option<PathBuf>,

    /// Author of the spec changelog entry
    #[arg(long, default_value = "release-scribe <releases@localhost>")]
    pub(crate) packager: String,

    /// Cross-check the spec's package name against release-monitoring.org
    #[arg(long)]
    pub(crate) check_upstream: bool,
}

pub(crate) fn run(args: &PrepareArgs) -> Result<()> {
    let block = changelog::build_block(
        &args.git_repo,
        args.reference.as_deref(),
        args.repo_hint.as_deref(),
    )?;

    let changelog_path = args.git_repo.join("CHANGELOG.md");
    let mut changelog_file = ChangelogFile::load_or_default(&changelog_path)?;
    changelog_file.prepend_release(&args.version, &block);
    changelog_file.write_to_file(&changelog_path)?;
    println!("updated {}", changelog_path.display());

    if let Some(spec_path) = &args.specfile {
        let mut spec = SpecFile::open(spec_path)?;

        if args.check_upstream {
            check_upstream(spec.name().unwrap_or_default(), &args.version)?;
        }

        spec.set_version(&args.version)?;
        spec.set_release("1%{?dist}")?;
        let body: Vec<&str> = block.lines().collect();
        spec.add_changelog_entry(&args.version, &args.packager, &body)?;
        spec.save()?;
        println!("updated {}", spec_path.display());
    }

    Ok(())
}

/// Advisory only: the release proceeds either way, but a newer upstream
/// release usually means the requested version is already stale.
fn check_upstream(package: &str, version: &str) -> Result<()> {
    let resolver = UpstreamResolver::new(ReqwestHttp::new());

    if let Some(upstream) = resolver.resolve(package)? {
        if scribe_version::compare(&upstream, version) == Ordering::Greater {
            warn!(%upstream, %version, "upstream already has a newer release");
        }
    }

    Ok(())
}
