use std::fmt::Write;

use scribe_git::CommitInfo;
use tracing::debug;

use crate::error::ChangelogError;
use crate::Result;

/// Sentinels delimiting human-authored release notes inside a commit
/// message. Case-sensitive, matched literally.
pub const NOTES_BEGIN: &str = "RELEASE NOTES BEGIN";
pub const NOTES_END: &str = "RELEASE NOTES END";

/// Automated dependency-update commits carry this substring and never
/// contribute changelog lines.
const BOT_COMMIT_MARKER: &str = "dependabot";

/// Captures that mean "nothing worth mentioning", compared after
/// trimming and lowercasing.
const PLACEHOLDER_NOTES: [&str; 4] = ["", "n/a", "none", "none."];

const GITHUB_ORG: &str = "packit";

/// Builds a markdown bullet block from merge commits, in the order they
/// are supplied (the git collaborator yields newest first).
///
/// Commits without a release-notes section, with a placeholder note or
/// authored by the dependency bot are skipped silently. An empty input
/// yields an empty string.
///
/// # Errors
///
/// Returns [`ChangelogError::MalformedMergeMessage`] when a commit with
/// usable notes does not carry a pull-request id as the 4th word of its
/// first line.
pub fn extract(commits: &[CommitInfo], repo_hint: Option<&str>) -> Result<String> {
    let mut block = String::new();

    for commit in commits {
        if commit.message.contains(BOT_COMMIT_MARKER) {
            debug!(sha = %commit.sha, "skipping automated dependency update");
            continue;
        }

        let Some(note) = release_note(&commit.message) else {
            debug!(sha = %commit.sha, "commit has no release notes section");
            continue;
        };

        if PLACEHOLDER_NOTES.contains(&note.to_lowercase().as_str()) {
            debug!(sha = %commit.sha, "release notes marked as not important");
            continue;
        }

        let reference = pull_request_reference(commit, repo_hint)?;
        let _ = writeln!(block, "- {note} ({reference})");
    }

    Ok(block)
}

/// Text between the first [`NOTES_BEGIN`] and the first [`NOTES_END`]
/// after it, trimmed. `None` when either sentinel is missing.
fn release_note(message: &str) -> Option<&str> {
    let start = message.find(NOTES_BEGIN)? + NOTES_BEGIN.len();
    let end = message[start..].find(NOTES_END)?;
    Some(message[start..start + end].trim())
}

/// The pull-request reference from the canonical merge-commit summary
/// `Merge pull request #N from owner/branch`: its 4th word, rendered as
/// a markdown link into the `repo_hint` repository when one is given.
fn pull_request_reference(commit: &CommitInfo, repo_hint: Option<&str>) -> Result<String> {
    let word = commit.summary().split_whitespace().nth(3).ok_or_else(|| {
        ChangelogError::MalformedMergeMessage {
            summary: commit.summary().to_string(),
        }
    })?;

    let reference = match repo_hint {
        Some(repo) => {
            let id = word.trim_start_matches('#');
            format!("[{repo}#{id}](https://github.com/{GITHUB_ORG}/{repo}/pull/{id})")
        }
        None => word.to_string(),
    };

    Ok(reference)
}
