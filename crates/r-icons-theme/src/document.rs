//! Theme document model.
//!
//! A theme document maps file names, file extensions, language identifiers,
//! and folder names to icon ids, and declares the icon definitions those ids
//! resolve to. The same type serves both roles in a composition: each input
//! layer is a partial document (absent fields deserialize to empty mappings,
//! never errors), and the merged result is a complete one.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Mapping from a lookup key (file name, extension, language id, ...) to an
/// icon id.
pub type IconAssignments = IndexMap<String, String>;

/// Mapping from an icon id to its definition.
pub type IconDefinitions = IndexMap<String, IconDefinition>;

/// A single icon definition.
///
/// An icon is either an image on disk (`icon_path`) or a glyph in one of the
/// theme's declared fonts (`font_character` plus optional styling). The
/// composer treats definitions as whole values: an id collision replaces the
/// entire definition, never individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_character: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_id: Option<String>,
}

/// A font declared by the theme for glyph-based icons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSpec {
    pub id: String,
    #[serde(default)]
    pub src: Vec<FontSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// One source file of a theme font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSource {
    pub path: String,
    pub format: String,
}

/// An icon theme document.
///
/// Scalar fields are omitted from serialized output when absent; mapping
/// fields and `fonts` are always emitted, so a composed document is complete
/// even when some of its sections are empty. All mappings preserve document
/// key order across a load, merge, and write cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hides_explorer_arrows: Option<bool>,
    #[serde(default)]
    pub fonts: Vec<FontSpec>,
    #[serde(default)]
    pub icon_definitions: IconDefinitions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default)]
    pub file_names: IconAssignments,
    #[serde(default)]
    pub file_extensions: IconAssignments,
    #[serde(default)]
    pub language_ids: IconAssignments,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_expanded: Option<String>,
    #[serde(default)]
    pub folder_names: IconAssignments,
    #[serde(default)]
    pub folder_names_expanded: IconAssignments,
    #[serde(default)]
    pub light: IconDefinitions,
    #[serde(default)]
    pub high_contrast: IconDefinitions,
}

impl ThemeDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every icon id referenced outside `icon_definitions`, in document
    /// order, deduplicated.
    ///
    /// Covers the default `file`/`folder`/`folder_expanded` ids, the values
    /// of all assignment mappings, and the keys of the `light` and
    /// `high_contrast` variant overrides.
    pub fn referenced_icon_ids(&self) -> IndexSet<&str> {
        let mut ids = IndexSet::new();

        for id in [&self.file, &self.folder, &self.folder_expanded]
            .into_iter()
            .flatten()
        {
            ids.insert(id.as_str());
        }

        for mapping in [
            &self.file_names,
            &self.file_extensions,
            &self.language_ids,
            &self.folder_names,
            &self.folder_names_expanded,
        ] {
            for id in mapping.values() {
                ids.insert(id.as_str());
            }
        }

        for variant in [&self.light, &self.high_contrast] {
            for id in variant.keys() {
                ids.insert(id.as_str());
            }
        }

        ids
    }

    /// Referenced icon ids with no entry in `icon_definitions`.
    ///
    /// The composer does not enforce that this is empty; it is a property of
    /// well-formed input layers.
    pub fn missing_icon_definitions(&self) -> Vec<&str> {
        self.referenced_icon_ids()
            .into_iter()
            .filter(|id| !self.icon_definitions.contains_key(*id))
            .collect()
    }
}
