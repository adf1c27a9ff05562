//! Host activation hooks.
//!
//! [`activate`] runs one full generation pass: load the three schema layers,
//! compose them, and persist the merged document. [`deactivate`] has nothing
//! to clean up. Both hooks take every path explicitly; there is no
//! process-wide configuration.

use std::path::Path;

use r_icons_theme::generate;

use crate::error::Result;
use crate::output::ThemeWriter;
use crate::schema::SchemaLoader;

/// Load the schemas under `schema_dir`, compose the theme, and write it to
/// `output_path`.
pub fn activate(schema_dir: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<()> {
    let schemas = SchemaLoader::new(schema_dir.as_ref()).load()?;
    let theme = generate(&schemas.base, &schemas.files, &schemas.folders);
    ThemeWriter::new(output_path.as_ref()).write(&theme)?;
    tracing::info!("generated icon theme: {}", output_path.as_ref().display());
    Ok(())
}

/// Deactivation hook. Generation holds no resources, so this is a no-op.
pub fn deactivate() {}
