//! Icon theme document model and layer composition.
//!
//! This crate is the pure core of the R Icons theme generator. It merges a
//! base theme document with a files override layer and a folders override
//! layer into a single complete icon theme document:
//!
//! - **Document model** ([`document`]): the theme document, icon
//!   definitions, and font declarations, serializable to and from JSON with
//!   document key order preserved.
//! - **Wildcard expansion** ([`expand`]): rewrites glob-style file-name
//!   patterns (`"*.test.js"`) into exact entries matched against the names
//!   declared in the same layer.
//! - **Composition** ([`compose`]): field-by-field merge of the three
//!   layers under a fixed precedence order.
//!
//! Everything here is a total function over in-memory documents, with
//! deterministic output for fixed inputs and no I/O. Reading schema
//! documents from disk and persisting the result belong to the `r-icons`
//! host crate.
//!
//! # Example
//!
//! ```
//! use r_icons_theme::{generate, ThemeDocument};
//!
//! let base: ThemeDocument = serde_json::from_str(
//!     r#"{ "file": "icon-file", "iconDefinitions": { "icon-file": {} } }"#,
//! )?;
//! let files: ThemeDocument = serde_json::from_str(
//!     r#"{ "fileExtensions": { "r": "icon-file" } }"#,
//! )?;
//! let folders = ThemeDocument::new();
//!
//! let theme = generate(&base, &files, &folders);
//! assert_eq!(theme.file.as_deref(), Some("icon-file"));
//! assert_eq!(theme.file_extensions["r"], "icon-file");
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod compose;
pub mod document;
pub mod expand;

pub use compose::{compose, generate};
pub use document::{
    FontSource, FontSpec, IconAssignments, IconDefinition, IconDefinitions, ThemeDocument,
};
pub use expand::{FileNamePattern, expand, is_pattern, known_exact_names};
