use std::path::{Path, PathBuf};

use crate::{CommitInfo, GitError, Result};

pub struct Repository {
    inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if the path is not inside a git repository.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|_| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        let root = inner
            .workdir()
            .ok_or_else(|| GitError::NotARepository {
                path: path.to_path_buf(),
            })?
            .to_path_buf();

        Ok(Self { inner, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name of the tag whose target commit has the newest committer
    /// time, or `None` when the repository has no tags. Annotated and
    /// lightweight tags are both considered.
    pub fn latest_tag(&self) -> Result<Option<String>> {
        let names = self.inner.tag_names(None)?;

        let mut newest: Option<(i64, String)> = None;
        for name in names.iter().flatten() {
            let object = self.inner.revparse_single(&format!("refs/tags/{name}"))?;
            let commit = object.peel_to_commit()?;
            let time = commit.time().seconds();

            let is_newer = newest.as_ref().is_none_or(|(best, _)| time > *best);
            if is_newer {
                newest = Some((time, name.to_string()));
            }
        }

        Ok(newest.map(|(_, name)| name))
    }

    /// Merge commits in `refspec..HEAD`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if `refspec` does not resolve
    /// to a commit.
    pub fn merge_commits_since(&self, refspec: &str) -> Result<Vec<CommitInfo>> {
        let base = self
            .inner
            .revparse_single(refspec)
            .and_then(|object| object.peel_to_commit())
            .map_err(|_| GitError::RefNotFound {
                refspec: refspec.to_string(),
            })?;

        let mut walk = self.inner.revwalk()?;
        walk.set_sorting(git2::Sort::TIME)?;
        walk.push_head()?;
        walk.hide(base.id())?;

        let mut commits = Vec::new();
        for oid in walk {
            let commit = self.inner.find_commit(oid?)?;
            let info = CommitInfo {
                sha: commit.id().to_string(),
                message: commit.message().unwrap_or("").to_string(),
                parent_count: commit.parent_count(),
            };
            if info.is_merge() {
                commits.push(info);
            }
        }

        Ok(commits)
    }
}
