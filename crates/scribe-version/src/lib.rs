//! Tolerant total ordering over loosely-formatted version strings.
//!
//! Release tooling has to order whatever it finds in tags and packaging
//! metadata, so parsing never fails here: a string that cannot be read as
//! a version becomes an explicit [`VersionToken::Unparsable`] operand
//! that always orders below any parsed version and falls back to
//! lexicographic ordering against other unparsable strings.

use std::cmp::Ordering;

use semver::{BuildMetadata, Prerelease, Version};

/// A version string together with its parsed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionToken {
    Parsed(Version),
    Unparsable(String),
}

impl VersionToken {
    /// Parses a version string leniently. Accepts an optional leading
    /// `v`/`V`, one to three dot-separated numeric release segments
    /// (missing segments are padded with zero) and an optional semver
    /// pre-release or build tail. Anything else is kept verbatim as
    /// [`VersionToken::Unparsable`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match parse_lenient(raw) {
            Some(version) => Self::Parsed(version),
            None => Self::Unparsable(raw.to_string()),
        }
    }

    #[must_use]
    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }
}

impl Ord for VersionToken {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Parsed(a), Self::Parsed(b)) => a.cmp(b),
            (Self::Parsed(_), Self::Unparsable(_)) => Ordering::Greater,
            (Self::Unparsable(_), Self::Parsed(_)) => Ordering::Less,
            (Self::Unparsable(a), Self::Unparsable(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for VersionToken {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compares two version strings under the tolerant ordering.
///
/// An unparsable operand always loses to a parsed one; two unparsable
/// operands fall back to lexicographic comparison of the raw strings.
/// Never panics.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    VersionToken::parse(a).cmp(&VersionToken::parse(b))
}

fn parse_lenient(raw: &str) -> Option<Version> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let trimmed = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    if let Ok(version) = Version::parse(trimmed) {
        return Some(version);
    }

    let (rest, build) = match trimmed.split_once('+') {
        Some((rest, build)) => (rest, build),
        None => (trimmed, ""),
    };
    let (release, pre) = match rest.split_once('-') {
        Some((release, pre)) => (release, pre),
        None => (rest, ""),
    };

    let segments: Vec<u64> = release
        .split('.')
        .map(|segment| segment.parse::<u64>().ok())
        .collect::<Option<_>>()?;
    // More than three release segments does not fit the semver model;
    // such strings take the lexicographic fallback instead.
    if segments.len() > 3 {
        return None;
    }

    let segment = |index: usize| segments.get(index).copied().unwrap_or(0);
    Some(Version {
        major: segment(0),
        minor: segment(1),
        patch: segment(2),
        pre: Prerelease::new(pre).ok()?,
        build: BuildMetadata::new(build).ok()?,
    })
}
