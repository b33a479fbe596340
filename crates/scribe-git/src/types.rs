/// A commit as consumed by the changelog extractor: the full message,
/// the number of parents and the object id. Immutable snapshot; the
/// repository it came from is not kept alive by this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub sha: String,
    pub message: String,
    pub parent_count: usize,
}

impl CommitInfo {
    /// A merge commit has two or more parents.
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.parent_count >= 2
    }

    /// First line of the commit message, empty for an empty message.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}
