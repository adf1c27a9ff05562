//! R Icons - icon theme generation from layered schemas.
//!
//! This is the host crate around [`r_icons_theme`]: it reads the three layer
//! schemas (base, files, folders) from disk, runs the composition, and
//! persists the merged theme document. All theme semantics live in the core
//! crate; everything here is the I/O boundary.
//!
//! # Example
//!
//! ```no_run
//! use r_icons::{activate, THEME_FILE};
//!
//! fn main() -> Result<(), r_icons::Error> {
//!     activate("./schemas", THEME_FILE)
//! }
//! ```

pub mod lifecycle;
pub mod output;
pub mod schema;

mod error;

pub use error::{Error, Result};
pub use lifecycle::{activate, deactivate};
pub use output::{THEME_FILE, ThemeWriter};
pub use schema::{BASE_SCHEMA, FILE_SCHEMA, FOLDER_SCHEMA, SchemaLoader, SchemaSet};

/// Theme document model and composition.
pub mod theme {
    pub use r_icons_theme::*;
}
