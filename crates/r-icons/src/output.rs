//! Theme document output.
//!
//! The composed document is serialized to JSON and written out atomically:
//! the bytes land in a temporary file in the target directory first, and a
//! rename replaces the previous theme file in one step.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use r_icons_theme::ThemeDocument;

use crate::error::{Error, Result};

/// Default file name of the generated theme document.
pub const THEME_FILE: &str = "r-icons-icon-theme.json";

/// Writes a composed theme document to disk.
#[derive(Debug, Clone)]
pub struct ThemeWriter {
    path: PathBuf,
    pretty: bool,
}

impl ThemeWriter {
    /// Create a writer targeting `path`. Output is compact JSON.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    /// Pretty-print the output instead of compact JSON.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// The target path of this writer.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `theme` and replace the target file atomically.
    pub fn write(&self, theme: &ThemeDocument) -> Result<()> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(theme)
        } else {
            serde_json::to_vec(theme)
        }
        .map_err(Error::serialize)?;

        self.replace_target(&bytes)?;
        tracing::debug!(
            "wrote theme document: {} ({} bytes)",
            self.path.display(),
            bytes.len()
        );
        Ok(())
    }

    /// Write `bytes` to a temp file next to the target, then rename over it.
    fn replace_target(&self, bytes: &[u8]) -> Result<()> {
        let parent = self.path.parent().unwrap_or(Path::new("."));
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "theme".to_string());
        let temp_path = parent.join(format!(".{}.tmp.{}", file_name, std::process::id()));

        let result = (|| {
            let mut file = fs::File::create(&temp_path).map_err(|e| Error::write(&self.path, e))?;
            file.write_all(bytes).map_err(|e| Error::write(&self.path, e))?;
            file.sync_all().map_err(|e| Error::write(&self.path, e))?;
            // Close the handle before renaming over the target.
            drop(file);
            fs::rename(&temp_path, &self.path).map_err(|e| Error::write(&self.path, e))
        })();

        if result.is_err() {
            // Leave the previous theme file untouched on failure.
            let _ = fs::remove_file(&temp_path);
        }
        result
    }
}
