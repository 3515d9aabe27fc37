//! Object catalog generation
//!
//! Turns `Data/Objects.json` plus its string tables and the sprite table into
//! the `objects.json` lookup consumed by the site: object ID -> name,
//! description, category and icon.
//!
//! Any unresolvable string or category aborts the whole build. A catalog with
//! silently missing entries is worse than no new catalog.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::category::{derive_category, CategoryError};
use crate::content::{
    save_json, ContentError, ContentRecord, ContentSource, ContentTable, SpriteTable,
};
use crate::reference::{is_skipped, name_override};
use crate::strings::{StringChain, StringError, StringTable};

/// Content table holding object definitions (`Data/Objects.json`)
pub const OBJECTS_FILE: &str = "Objects.json";
/// Object ID -> icon URL table (`Data/sprites.json`)
pub const SPRITES_FILE: &str = "sprites.json";
/// Object strings (`Strings/Objects.json`)
pub const OBJECT_STRINGS_FILE: &str = "Objects.json";
/// Shared strings (`Strings/StringsFromCSFiles.json`)
pub const SHARED_STRINGS_FILE: &str = "StringsFromCSFiles.json";
/// Generated catalog file name
pub const OUTPUT_FILE: &str = "objects.json";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    #[error("Object {id}: cannot resolve {field}: {source}")]
    String {
        id: String,
        field: &'static str,
        source: StringError,
    },

    #[error("Object {id}: {source}")]
    Category { id: String, source: CategoryError },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Object(#[from] ObjectError),
}

/// Normalized catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub category: String,
    pub description: String,
    #[serde(rename = "iconURL")]
    pub icon_url: Option<String>,
    pub name: String,
}

/// Object ID -> record, in content table order
pub type ObjectCatalog = IndexMap<String, ObjectRecord>;

/// Counters reported after a build
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    /// Entries in the content table
    pub total: usize,
    pub skipped: usize,
    pub overridden: usize,
    pub without_icon: usize,
}

impl CatalogStats {
    /// Entries written to the catalog
    pub fn written(&self) -> usize {
        self.total - self.skipped
    }
}

/// Every table the catalog is built from
#[derive(Debug, Clone, Default)]
pub struct ObjectSources {
    pub objects: ContentTable,
    pub sprites: SpriteTable,
    pub object_strings: StringTable,
    pub shared_strings: StringTable,
}

impl ObjectSources {
    /// Load all input tables from unpacked content
    pub fn load(source: &ContentSource) -> Result<Self, ContentError> {
        let sources = Self {
            objects: source.load_content(OBJECTS_FILE)?,
            sprites: source.load_content(SPRITES_FILE)?,
            object_strings: source.load_strings(OBJECT_STRINGS_FILE)?,
            shared_strings: source.load_strings(SHARED_STRINGS_FILE)?,
        };

        info!(
            objects = sources.objects.len(),
            sprites = sources.sprites.len(),
            object_strings = sources.object_strings.len(),
            shared_strings = sources.shared_strings.len(),
            "Loaded content"
        );

        Ok(sources)
    }

    /// Lookup chain for object text
    pub fn strings(&self) -> StringChain<'_> {
        StringChain::standard(&self.object_strings, &self.shared_strings)
    }
}

/// Normalize a single content entry.
///
/// Does not consult the skip list; callers filter skipped IDs first.
pub fn assemble_record(
    id: &str,
    record: &ContentRecord,
    strings: &StringChain<'_>,
    shared: &StringTable,
    sprites: &SpriteTable,
) -> Result<ObjectRecord, ObjectError> {
    let resolve = |field: &'static str, raw: &str| {
        strings.resolve(raw).map_err(|source| ObjectError::String {
            id: id.to_string(),
            field,
            source,
        })
    };

    let name = match name_override(id) {
        Some(name) => name.to_string(),
        None => resolve("name", &record.display_name)?,
    };
    let description = resolve("description", record.description.as_deref().unwrap_or(""))?;
    let category = derive_category(&record.item_type, record.category, shared).map_err(
        |source| ObjectError::Category {
            id: id.to_string(),
            source,
        },
    )?;

    Ok(ObjectRecord {
        category,
        description,
        icon_url: sprites.get(id).cloned(),
        name,
    })
}

/// Build the full catalog, stopping at the first bad entry
pub fn build_catalog(
    sources: &ObjectSources,
) -> Result<(ObjectCatalog, CatalogStats), ObjectError> {
    let strings = sources.strings();
    let mut catalog = ObjectCatalog::with_capacity(sources.objects.len());
    let mut stats = CatalogStats {
        total: sources.objects.len(),
        ..Default::default()
    };

    for (id, record) in &sources.objects {
        if is_skipped(id) {
            debug!(id = %id, "Skipping object");
            stats.skipped += 1;
            continue;
        }

        let object = assemble_record(
            id,
            record,
            &strings,
            &sources.shared_strings,
            &sources.sprites,
        )?;

        if name_override(id).is_some() {
            debug!(id = %id, name = %object.name, "Applied name override");
            stats.overridden += 1;
        }
        if object.icon_url.is_none() {
            warn!(id = %id, "No sprite for object");
            stats.without_icon += 1;
        }

        catalog.insert(id.clone(), object);
    }

    Ok((catalog, stats))
}

/// Load content, build the catalog and write `objects.json` to `output_dir`.
///
/// Nothing is written unless the whole catalog builds.
pub fn export_objects(
    source: &ContentSource,
    output_dir: &Path,
    sort: bool,
) -> Result<(PathBuf, CatalogStats), ExportError> {
    let sources = ObjectSources::load(source)?;
    let (catalog, stats) = build_catalog(&sources)?;
    let path = save_json(&catalog, output_dir, OUTPUT_FILE, sort)?;

    info!(
        path = %path.display(),
        written = stats.written(),
        skipped = stats.skipped,
        without_icon = stats.without_icon,
        "Wrote object catalog"
    );

    Ok((path, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn record(
        display_name: &str,
        description: &str,
        item_type: &str,
        category: i32,
    ) -> ContentRecord {
        ContentRecord {
            display_name: display_name.to_string(),
            description: Some(description.to_string()),
            item_type: item_type.to_string(),
            category: Some(category),
        }
    }

    fn strings(entries: &[(&str, &str)]) -> StringTable {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn sources() -> ObjectSources {
        let mut objects = ContentTable::new();
        objects.insert(
            "24".into(),
            record(
                r"[LocalizedText Strings\Objects:Parsnip_Name]",
                r"[LocalizedText Strings\Objects:Parsnip_Description]",
                "Basic",
                -75,
            ),
        );
        objects.insert(
            "126".into(),
            record(
                r"[LocalizedText Strings\Objects:StrangeDoll_Name]",
                r"[LocalizedText Strings\Objects:StrangeDoll_Description]",
                "Arch",
                0,
            ),
        );
        objects.insert(
            "925".into(),
            record(
                r"[LocalizedText Strings\Objects:Slime_Name]",
                r"[LocalizedText Strings\Objects:Slime_Description]",
                "Basic",
                -28,
            ),
        );
        objects.insert(
            "60".into(),
            record(
                r"[LocalizedText Strings\Objects:Emerald_Name]",
                r"[LocalizedText Strings\Objects:Emerald_Description]",
                "Minerals",
                -2,
            ),
        );

        let mut sprites = SpriteTable::new();
        sprites.insert("24".into(), "https://cdn.example/24.png".into());
        sprites.insert("126".into(), "https://cdn.example/126.png".into());
        sprites.insert("925".into(), "https://cdn.example/925.png".into());

        ObjectSources {
            objects,
            sprites,
            object_strings: strings(&[
                ("Parsnip_Name", "Parsnip"),
                ("Parsnip_Description", "A spring tuber."),
                ("StrangeDoll_Name", "Strange Doll"),
                ("StrangeDoll_Description", "Spooky."),
                ("Slime_Name", "Slime"),
                ("Slime_Description", "Squishy."),
                ("Emerald_Name", "Emerald"),
            ]),
            shared_strings: strings(&[
                ("Emerald_Description", "A precious stone."),
                ("Object.cs.12850", "Mineral"),
                ("Object.cs.12851", "Vegetable"),
                ("Object.cs.12867", "Monster Loot"),
            ]),
        }
    }

    #[test]
    fn test_builds_catalog_in_content_order() {
        let (catalog, stats) = build_catalog(&sources()).unwrap();

        let keys: Vec<&str> = catalog.keys().map(String::as_str).collect();
        assert_eq!(keys, ["24", "126", "60"]);
        assert_eq!(
            catalog["24"],
            ObjectRecord {
                category: "Vegetable".into(),
                description: "A spring tuber.".into(),
                icon_url: Some("https://cdn.example/24.png".into()),
                name: "Parsnip".into(),
            }
        );
        assert_eq!(
            stats,
            CatalogStats {
                total: 4,
                skipped: 1,
                overridden: 1,
                without_icon: 1,
            }
        );
        assert_eq!(stats.written(), 3);
    }

    #[test]
    fn test_skipped_ids_never_in_catalog() {
        let (catalog, _) = build_catalog(&sources()).unwrap();
        assert!(!catalog.contains_key("925"));
        for id in catalog.keys() {
            assert!(!is_skipped(id));
        }
    }

    #[test]
    fn test_skipped_entry_is_not_resolved() {
        let mut sources = sources();
        // Would fail resolution if the skip filter did not run first
        sources.objects.insert(
            "927".into(),
            record(r"[LocalizedText Strings\Objects:Nope]", "", "Nope", -1),
        );

        let (catalog, stats) = build_catalog(&sources).unwrap();
        assert!(!catalog.contains_key("927"));
        assert_eq!(stats.skipped, 2);
    }

    #[test]
    fn test_override_replaces_display_name() {
        let (catalog, _) = build_catalog(&sources()).unwrap();
        let doll = &catalog["126"];
        assert_eq!(doll.name, "Strange Doll (green)");
        // Description and category still resolve normally
        assert_eq!(doll.description, "Spooky.");
        assert_eq!(doll.category, "Artifact");
    }

    #[test]
    fn test_override_ignores_unresolvable_display_name() {
        let mut sources = sources();
        sources.objects["126"].display_name = r"[LocalizedText Strings\Objects:Gone]".into();

        let (catalog, _) = build_catalog(&sources).unwrap();
        assert_eq!(catalog["126"].name, "Strange Doll (green)");
    }

    #[test]
    fn test_icon_present_only_with_sprite() {
        let sources = sources();
        let (catalog, _) = build_catalog(&sources).unwrap();

        for (id, object) in &catalog {
            assert_eq!(object.icon_url.as_ref(), sources.sprites.get(id));
        }
        assert_eq!(catalog["60"].icon_url, None);
    }

    #[test]
    fn test_description_falls_back_to_shared_strings() {
        let (catalog, _) = build_catalog(&sources()).unwrap();
        assert_eq!(catalog["60"].description, "A precious stone.");
        assert_eq!(catalog["60"].category, "Mineral");
    }

    #[test]
    fn test_sentinel_category_uses_type_label() {
        let mut sources = sources();
        sources.objects["60"].category = None;

        let (catalog, _) = build_catalog(&sources).unwrap();
        assert_eq!(catalog["60"].category, "Mineral");
        assert_eq!(catalog["126"].category, "Artifact");
    }

    #[test]
    fn test_missing_display_name_fails() {
        let mut sources = sources();
        sources.object_strings.remove("Parsnip_Name");

        let err = build_catalog(&sources).unwrap_err();
        assert_eq!(
            err,
            ObjectError::String {
                id: "24".into(),
                field: "name",
                source: StringError::Missing {
                    reference: "Objects:Parsnip_Name".into()
                },
            }
        );
    }

    #[test]
    fn test_unknown_category_fails() {
        let mut sources = sources();
        sources.objects["60"].category = Some(-55);

        let err = build_catalog(&sources).unwrap_err();
        assert!(matches!(
            err,
            ObjectError::Category {
                source: CategoryError::UnknownCategory { category: -55, .. },
                ..
            }
        ));
    }

    #[test]
    fn test_missing_description_is_empty() {
        let mut sources = sources();
        sources.objects["24"].description = None;

        let (catalog, _) = build_catalog(&sources).unwrap();
        assert_eq!(catalog["24"].description, "");
    }

    #[test]
    fn test_build_is_idempotent() {
        let sources = sources();
        let (first, _) = build_catalog(&sources).unwrap();
        let (second, _) = build_catalog(&sources).unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_record_serialization_shape() {
        let (catalog, _) = build_catalog(&sources()).unwrap();
        let json = serde_json::to_value(&catalog["60"]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "category": "Mineral",
                "description": "A precious stone.",
                "iconURL": null,
                "name": "Emerald",
            })
        );
    }

    fn write_content(root: &Path, objects: &str) {
        let data = root.join("Data");
        let strings = root.join("Strings");
        fs::create_dir_all(&data).unwrap();
        fs::create_dir_all(&strings).unwrap();

        fs::write(data.join(OBJECTS_FILE), objects).unwrap();
        fs::write(
            data.join(SPRITES_FILE),
            r#"{"126": "icons/126.png", "925": "icons/925.png"}"#,
        )
        .unwrap();
        fs::write(
            strings.join(OBJECT_STRINGS_FILE),
            r#"{"StrangeDoll_Name": "Strange Doll", "StrangeDoll_Description": "Spooky.",
                "Hat_Name": "Hat", "Hat_Description": "A hat."}"#,
        )
        .unwrap();
        fs::write(
            strings.join(SHARED_STRINGS_FILE),
            r#"{"Object.cs.12850": "Mineral"}"#,
        )
        .unwrap();
    }

    #[test]
    fn test_export_writes_catalog() {
        let dir = tempdir().unwrap();
        write_content(
            dir.path(),
            r#"{
                "126": {"DisplayName": "[LocalizedText Strings\\Objects:StrangeDoll_Name]",
                        "Description": "[LocalizedText Strings\\Objects:StrangeDoll_Description]",
                        "Type": "Arch", "Category": 0},
                "925": {"DisplayName": "[LocalizedText Strings\\Objects:Hat_Name]",
                        "Description": "[LocalizedText Strings\\Objects:Hat_Description]",
                        "Type": "Basic", "Category": -2}
            }"#,
        );

        let source = ContentSource::new(dir.path().join("Data"), dir.path().join("Strings"));
        let out = dir.path().join("out");
        let (path, stats) = export_objects(&source, &out, false).unwrap();

        assert_eq!(path, out.join(OUTPUT_FILE));
        assert_eq!(stats.written(), 1);

        let written: ObjectCatalog =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written["126"].name, "Strange Doll (green)");
        assert_eq!(written["126"].icon_url.as_deref(), Some("icons/126.png"));
    }

    #[test]
    fn test_export_sorted_catalog() {
        let dir = tempdir().unwrap();
        write_content(
            dir.path(),
            r#"{
                "200": {"DisplayName": "[LocalizedText Strings\\Objects:Hat_Name]",
                        "Description": "[LocalizedText Strings\\Objects:Hat_Description]",
                        "Type": "Basic", "Category": -2},
                "126": {"DisplayName": "[LocalizedText Strings\\Objects:StrangeDoll_Name]",
                        "Description": "[LocalizedText Strings\\Objects:StrangeDoll_Description]",
                        "Type": "Arch", "Category": 0}
            }"#,
        );

        let source = ContentSource::new(dir.path().join("Data"), dir.path().join("Strings"));
        let out = dir.path().join("out");
        let (path, stats) = export_objects(&source, &out, true).unwrap();

        assert_eq!(stats.written(), 2);
        let json = fs::read_to_string(&path).unwrap();
        let written: ObjectCatalog = serde_json::from_str(&json).unwrap();
        let keys: Vec<&str> = written.keys().map(String::as_str).collect();
        assert_eq!(keys, ["126", "200"]);
        assert_eq!(written["200"].name, "Hat");
        assert_eq!(written["200"].category, "Mineral");
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_failed_export_keeps_previous_output() {
        let dir = tempdir().unwrap();
        write_content(
            dir.path(),
            r#"{
                "200": {"DisplayName": "[LocalizedText Strings\\Objects:Missing_Name]",
                        "Description": "", "Type": "Basic", "Category": -2}
            }"#,
        );

        let source = ContentSource::new(dir.path().join("Data"), dir.path().join("Strings"));
        let out = dir.path().join("out");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join(OUTPUT_FILE), "previous").unwrap();

        let err = export_objects(&source, &out, false).unwrap_err();
        assert!(matches!(
            err,
            ExportError::Object(ObjectError::String {
                source: StringError::Missing { .. },
                ..
            })
        ));
        assert_eq!(fs::read_to_string(out.join(OUTPUT_FILE)).unwrap(), "previous");
    }

    #[test]
    fn test_failed_export_writes_nothing() {
        let dir = tempdir().unwrap();
        write_content(
            dir.path(),
            r#"{"1": {"DisplayName": "Objects:Missing_Name", "Type": "Basic", "Category": -2}}"#,
        );

        let source = ContentSource::new(dir.path().join("Data"), dir.path().join("Strings"));
        let out = dir.path().join("out");

        assert!(export_objects(&source, &out, true).is_err());
        assert!(!out.join(OUTPUT_FILE).exists());
    }
}
