//! Layered theme composition.
//!
//! Three layers feed one composition. `base` supplies defaults and is always
//! lowest precedence; `files` and `folders` override the file-facing and
//! folder-facing fields respectively. Every field follows a fixed precedence
//! order, and nothing about the merge recurses into icon definition
//! internals. All inputs are borrowed immutably; the output is a fresh
//! document sharing no structure with them.

use indexmap::IndexMap;

use crate::document::{IconAssignments, ThemeDocument};
use crate::expand;

/// Shallow-merge `layers` in order: the result holds the union of keys, and
/// on collision the value from the later layer wins. A key keeps the
/// position given by the first layer that introduced it.
fn merged<V: Clone>(layers: &[&IndexMap<String, V>]) -> IndexMap<String, V> {
    let mut result = IndexMap::new();
    for layer in layers {
        for (key, value) in layer.iter() {
            result.insert(key.clone(), value.clone());
        }
    }
    result
}

/// Presence-based fallback for scalar fields: the override if set, else the
/// base value.
fn overridden(base: &Option<String>, layer: &Option<String>) -> Option<String> {
    layer.clone().or_else(|| base.clone())
}

/// Merge the three layers into one complete theme document.
///
/// Wildcard patterns in `files.fileNames` are expanded against the exact
/// names declared in the same mapping; the derived entries take final
/// precedence over both layers' literal entries, and the pattern keys
/// themselves never reach the output.
pub fn compose(
    base: &ThemeDocument,
    files: &ThemeDocument,
    folders: &ThemeDocument,
) -> ThemeDocument {
    let known = expand::known_exact_names(&files.file_names);
    let derived = expand::expand(&files.file_names, &known);
    let exact_file_names: IconAssignments = files
        .file_names
        .iter()
        .filter(|(name, _)| !expand::is_pattern(name))
        .map(|(name, icon_id)| (name.clone(), icon_id.clone()))
        .collect();

    ThemeDocument {
        hides_explorer_arrows: base.hides_explorer_arrows,
        fonts: base.fonts.clone(),
        icon_definitions: merged(&[
            &base.icon_definitions,
            &files.icon_definitions,
            &folders.icon_definitions,
        ]),
        file: overridden(&base.file, &files.file),
        file_names: merged(&[&base.file_names, &exact_file_names, &derived]),
        file_extensions: merged(&[&base.file_extensions, &files.file_extensions]),
        language_ids: merged(&[&base.language_ids, &files.language_ids]),
        folder: overridden(&base.folder, &folders.folder),
        folder_expanded: overridden(&base.folder_expanded, &folders.folder_expanded),
        folder_names: merged(&[&base.folder_names, &folders.folder_names]),
        folder_names_expanded: merged(&[
            &base.folder_names_expanded,
            &folders.folder_names_expanded,
        ]),
        light: merged(&[&base.light, &folders.light, &files.light]),
        high_contrast: merged(&[&base.high_contrast, &folders.high_contrast, &files.high_contrast]),
    }
}

/// Generate the final theme document from the three layers.
///
/// This is the crate's single entry point: it runs wildcard expansion and
/// composition in one pass and reports the result sizes.
pub fn generate(
    base: &ThemeDocument,
    files: &ThemeDocument,
    folders: &ThemeDocument,
) -> ThemeDocument {
    let theme = compose(base, files, folders);
    tracing::debug!(
        "composed theme document: {} icon definitions, {} file names, {} folder names",
        theme.icon_definitions.len(),
        theme.file_names.len(),
        theme.folder_names.len(),
    );
    theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::IconDefinition;

    fn doc(json: &str) -> ThemeDocument {
        serde_json::from_str(json).unwrap()
    }

    fn definition(path: &str) -> IconDefinition {
        IconDefinition {
            icon_path: Some(path.to_string()),
            ..IconDefinition::default()
        }
    }

    #[test]
    fn icon_definitions_union_keeps_highest_precedence_value() {
        let base = doc(r#"{ "iconDefinitions": { "a": { "iconPath": "base-a" } } }"#);
        let files = doc(r#"{ "iconDefinitions": { "b": { "iconPath": "files-b" } } }"#);
        let folders = doc(
            r#"{
                "iconDefinitions": {
                    "a": { "iconPath": "folders-a" },
                    "c": { "iconPath": "folders-c" }
                }
            }"#,
        );

        let theme = compose(&base, &files, &folders);

        assert_eq!(theme.icon_definitions.len(), 3);
        assert_eq!(theme.icon_definitions["a"], definition("folders-a"));
        assert_eq!(theme.icon_definitions["b"], definition("files-b"));
        assert_eq!(theme.icon_definitions["c"], definition("folders-c"));
    }

    #[test]
    fn default_file_icon_falls_back_to_base() {
        let base = doc(r#"{ "file": "icon-default-file" }"#);
        let folders = ThemeDocument::new();

        let theme = compose(&base, &ThemeDocument::new(), &folders);
        assert_eq!(theme.file.as_deref(), Some("icon-default-file"));

        let files = doc(r#"{ "file": "icon-custom-file" }"#);
        let theme = compose(&base, &files, &folders);
        assert_eq!(theme.file.as_deref(), Some("icon-custom-file"));
    }

    #[test]
    fn folder_scalars_come_from_folders_layer() {
        let base = doc(r#"{ "folder": "icon-folder", "folderExpanded": "icon-folder-open" }"#);
        let folders = doc(r#"{ "folder": "icon-special-folder" }"#);

        let theme = compose(&base, &ThemeDocument::new(), &folders);

        assert_eq!(theme.folder.as_deref(), Some("icon-special-folder"));
        // Absent in the folders layer, so the base value survives.
        assert_eq!(theme.folder_expanded.as_deref(), Some("icon-folder-open"));
    }

    #[test]
    fn arrows_and_fonts_come_verbatim_from_base() {
        let base = doc(
            r#"{
                "hidesExplorerArrows": true,
                "fonts": [{ "id": "r-font", "src": [{ "path": "./r.woff", "format": "woff" }] }]
            }"#,
        );
        let files = doc(r#"{ "hidesExplorerArrows": false }"#);

        let theme = compose(&base, &files, &ThemeDocument::new());

        assert_eq!(theme.hides_explorer_arrows, Some(true));
        assert_eq!(theme.fonts, base.fonts);
    }

    #[test]
    fn file_names_merge_gives_wildcard_entries_final_precedence() {
        let base = doc(r#"{ "fileNames": { "renv.lock": "icon-base-lock" } }"#);
        let files = doc(
            r#"{
                "fileNames": {
                    "renv.lock": "icon-files-lock",
                    ".Rprofile": "icon-profile",
                    "*.lock": "icon-any-lock"
                }
            }"#,
        );

        let theme = compose(&base, &files, &ThemeDocument::new());

        // The wildcard-derived entry beats both literal layers.
        assert_eq!(theme.file_names["renv.lock"], "icon-any-lock");
        assert_eq!(theme.file_names[".Rprofile"], "icon-profile");
        // The pattern key itself never reaches the output.
        assert!(!theme.file_names.contains_key("*.lock"));
    }

    #[test]
    fn file_extensions_and_language_ids_merge_base_then_files() {
        let base = doc(
            r#"{
                "fileExtensions": { "r": "icon-base-r", "rds": "icon-rds" },
                "languageIds": { "r": "icon-base-r" }
            }"#,
        );
        let files = doc(
            r#"{
                "fileExtensions": { "r": "icon-files-r", "rmd": "icon-rmd" },
                "languageIds": { "rmarkdown": "icon-rmd" }
            }"#,
        );

        let theme = compose(&base, &files, &ThemeDocument::new());

        assert_eq!(theme.file_extensions["r"], "icon-files-r");
        assert_eq!(theme.file_extensions["rds"], "icon-rds");
        assert_eq!(theme.file_extensions["rmd"], "icon-rmd");
        assert_eq!(theme.language_ids["r"], "icon-base-r");
        assert_eq!(theme.language_ids["rmarkdown"], "icon-rmd");
    }

    #[test]
    fn folder_names_ignore_files_layer() {
        let base = doc(r#"{ "folderNames": { "src": "icon-src" } }"#);
        let files = doc(r#"{ "folderNames": { "src": "icon-should-not-win" } }"#);
        let folders = doc(
            r#"{
                "folderNames": { "tests": "icon-tests" },
                "folderNamesExpanded": { "src": "icon-src-open" }
            }"#,
        );

        let theme = compose(&base, &files, &folders);

        assert_eq!(theme.folder_names["src"], "icon-src");
        assert_eq!(theme.folder_names["tests"], "icon-tests");
        assert_eq!(theme.folder_names_expanded["src"], "icon-src-open");
    }

    #[test]
    fn variant_overrides_prefer_files_over_folders() {
        let base = doc(r##"{ "light": { "icon-r": { "fontColor": "#000000" } } }"##);
        let files = doc(
            r##"{
                "light": { "icon-r": { "fontColor": "#333333" } },
                "highContrast": { "icon-r": { "fontColor": "#ffffff" } }
            }"##,
        );
        let folders = doc(
            r##"{
                "light": {
                    "icon-r": { "fontColor": "#111111" },
                    "icon-folder": { "fontColor": "#222222" }
                }
            }"##,
        );

        let theme = compose(&base, &files, &folders);

        assert_eq!(theme.light["icon-r"].font_color.as_deref(), Some("#333333"));
        assert_eq!(
            theme.light["icon-folder"].font_color.as_deref(),
            Some("#222222")
        );
        assert_eq!(
            theme.high_contrast["icon-r"].font_color.as_deref(),
            Some("#ffffff")
        );
    }

    #[test]
    fn compose_is_deterministic_for_fixed_inputs() {
        let base = doc(
            r#"{
                "file": "F",
                "iconDefinitions": { "F": {} },
                "fileNames": { "DESCRIPTION": "F" }
            }"#,
        );
        let files = doc(r#"{ "fileNames": { "*.Rproj": "F", "model.Rproj": "F" } }"#);
        let folders = doc(r#"{ "folderNames": { "R": "F" } }"#);

        let first = compose(&base, &files, &folders);
        let second = compose(&base, &files, &folders);
        assert_eq!(first, second);
    }

    #[test]
    fn pattern_with_no_concrete_names_leaves_file_names_empty() {
        // The pattern is the mapping's only key, so there is nothing to
        // expand against and nothing survives the merge.
        let base = doc(r#"{ "file": "F", "iconDefinitions": { "F": {} }, "fonts": [] }"#);
        let files = doc(r#"{ "fileNames": { "*.md": "MD" }, "iconDefinitions": { "MD": {} } }"#);

        let theme = generate(&base, &files, &ThemeDocument::new());

        assert!(theme.file_names.is_empty());
        assert_eq!(theme.file.as_deref(), Some("F"));
        assert!(theme.icon_definitions.contains_key("MD"));
    }

    #[test]
    fn composed_document_references_only_defined_icons() {
        let base = doc(
            r#"{
                "file": "icon-file",
                "folder": "icon-folder",
                "iconDefinitions": {
                    "icon-file": { "iconPath": "./file.svg" },
                    "icon-folder": { "iconPath": "./folder.svg" }
                }
            }"#,
        );
        let files = doc(
            r#"{
                "iconDefinitions": { "icon-r": { "iconPath": "./r.svg" } },
                "fileExtensions": { "r": "icon-r" }
            }"#,
        );
        let folders = doc(
            r#"{
                "iconDefinitions": { "icon-tests": { "iconPath": "./tests.svg" } },
                "folderNames": { "tests": "icon-tests" }
            }"#,
        );

        let theme = compose(&base, &files, &folders);
        assert!(theme.missing_icon_definitions().is_empty());
    }
}
