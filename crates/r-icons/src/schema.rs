//! Schema document loading.
//!
//! Layer documents are plain JSON files deserialized into [`ThemeDocument`]
//! values. Loading performs no validation beyond deserialization: a field
//! absent from a schema simply defaults to an empty mapping. A document that
//! is not valid JSON, or whose fields have the wrong shape, surfaces as
//! [`Error::Schema`](crate::Error::Schema) immediately.

use std::fs;
use std::path::{Path, PathBuf};

use r_icons_theme::ThemeDocument;

use crate::error::{Error, Result};

/// File name of the base schema document.
pub const BASE_SCHEMA: &str = "_baseSchema.json";
/// File name of the files override schema.
pub const FILE_SCHEMA: &str = "_fileSchema.json";
/// File name of the folders override schema.
pub const FOLDER_SCHEMA: &str = "_folderSchema.json";

/// The three layer documents feeding one composition.
#[derive(Debug, Clone)]
pub struct SchemaSet {
    pub base: ThemeDocument,
    pub files: ThemeDocument,
    pub folders: ThemeDocument,
}

/// Loads the layer schemas from a schema directory.
///
/// The directory is expected to contain [`BASE_SCHEMA`], [`FILE_SCHEMA`],
/// and [`FOLDER_SCHEMA`].
#[derive(Debug, Clone)]
pub struct SchemaLoader {
    root: PathBuf,
}

impl SchemaLoader {
    /// Create a loader rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The schema directory this loader reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load all three layer documents.
    pub fn load(&self) -> Result<SchemaSet> {
        Ok(SchemaSet {
            base: self.load_document(BASE_SCHEMA)?,
            files: self.load_document(FILE_SCHEMA)?,
            folders: self.load_document(FOLDER_SCHEMA)?,
        })
    }

    /// Load a single schema document by file name.
    pub fn load_document(&self, name: &str) -> Result<ThemeDocument> {
        let path = self.root.join(name);
        let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let document = serde_json::from_str(&content).map_err(|e| Error::schema(&path, e))?;
        tracing::debug!("loaded schema document: {}", path.display());
        Ok(document)
    }
}
