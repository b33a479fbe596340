//! Line-preserving edits of RPM spec files: the `Version:` and
//! `Release:` fields and new `%changelog` entries. Everything else in
//! the file is carried through byte-for-byte.

mod error;

use std::path::{Path, PathBuf};

use chrono::Utc;

pub use error::SpecError;

pub type Result<T> = std::result::Result<T, SpecError>;

pub struct SpecFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl SpecFile {
    /// # Errors
    ///
    /// Returns [`SpecError::Read`] if the file cannot be read.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SpecError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            lines: content.lines().map(ToString::to_string).collect(),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current value of the `Version:` field, if present.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.field_value("Version")
    }

    /// Current value of the `Name:` field, if present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.field_value("Name")
    }

    pub fn set_version(&mut self, version: &str) -> Result<()> {
        self.set_field("Version", version)
    }

    pub fn set_release(&mut self, release: &str) -> Result<()> {
        self.set_field("Release", release)
    }

    /// Inserts a dated entry at the top of the `%changelog` section:
    /// a `* <date> <packager> - <version>-1` header followed by the
    /// given body lines.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::NoChangelogSection`] if the file has no
    /// `%changelog` line.
    pub fn add_changelog_entry(
        &mut self,
        version: &str,
        packager: &str,
        body: &[&str],
    ) -> Result<()> {
        let section = self
            .lines
            .iter()
            .position(|line| line.trim() == "%changelog")
            .ok_or(SpecError::NoChangelogSection)?;

        let date = Utc::now().format("%a %b %d %Y");
        let mut entry = vec![format!("* {date} {packager} - {version}-1")];
        entry.extend(body.iter().map(ToString::to_string));
        entry.push(String::new());

        self.lines.splice(section + 1..section + 1, entry);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`SpecError::Write`] if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let mut content = self.lines.join("\n");
        content.push('\n');

        std::fs::write(&self.path, content).map_err(|source| SpecError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn field_value(&self, field: &str) -> Option<&str> {
        let prefix = format!("{field}:");
        self.lines
            .iter()
            .find_map(|line| line.strip_prefix(&prefix))
            .map(str::trim)
    }

    fn set_field(&mut self, field: &str, value: &str) -> Result<()> {
        let prefix = format!("{field}:");
        for line in &mut self.lines {
            if let Some(rest) = line.strip_prefix(&prefix) {
                // Keep whatever padding the file already uses between
                // the tag and its value.
                let padding_len = rest.len() - rest.trim_start().len();
                let padding = if padding_len == 0 {
                    " ".to_string()
                } else {
                    rest[..padding_len].to_string()
                };
                *line = format!("{prefix}{padding}{value}");
                return Ok(());
            }
        }

        Err(SpecError::MissingField {
            field: field.to_string(),
        })
    }
}
