use std::path::Path;

use crate::error::ChangelogError;
use crate::Result;

/// In-memory `CHANGELOG.md` content. New releases are prepended; the
/// previous content is carried through unchanged.
#[derive(Debug, Clone, Default)]
pub struct ChangelogFile {
    content: String,
}

impl ChangelogFile {
    /// # Errors
    ///
    /// Returns [`ChangelogError::Read`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ChangelogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { content })
    }

    /// Like [`ChangelogFile::load`], but a missing file starts an empty
    /// changelog instead of failing.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(changelog) => Ok(changelog),
            Err(ChangelogError::Read { ref source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Ok(Self::default())
            }
            Err(other) => Err(other),
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Puts a `# <version>` heading and the extracted bullet block ahead
    /// of everything already in the file.
    pub fn prepend_release(&mut self, version: &str, block: &str) {
        let mut content = String::with_capacity(self.content.len() + block.len() + 32);
        content.push_str(&format!("# {version}\n\n"));
        content.push_str(block);
        if !self.content.is_empty() {
            content.push('\n');
            content.push_str(&self.content);
        }
        self.content = content;
    }

    /// # Errors
    ///
    /// Returns [`ChangelogError::Write`] if the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.content).map_err(|source| ChangelogError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
