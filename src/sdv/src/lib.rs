//! # sdv
//!
//! Stardew Valley content library - localization lookup and object catalog
//! extraction.
//!
//! This library provides functionality to:
//! - Resolve `[LocalizedText ...]` references against the game's string tables
//! - Derive display categories from raw type/category codes
//! - Build the normalized `objects.json` catalog from unpacked content
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = sdv::ContentSource::new("content/Data", "content/Strings");
//!
//! // Load every input table and build the catalog in memory
//! let sources = sdv::ObjectSources::load(&source)?;
//! let (catalog, stats) = sdv::build_catalog(&sources)?;
//!
//! println!("{} objects, {} skipped", catalog.len(), stats.skipped);
//! println!("Parsnip: {:?}", catalog.get("24").map(|o| &o.name));
//!
//! // Or load, build and write objects.json in one step
//! sdv::export_objects(&source, Path::new("src/data"), false)?;
//! # Ok(())
//! # }
//! ```

pub mod category;
pub mod content;
pub mod objects;
pub mod reference;
pub mod strings;

// Re-export commonly used items
#[doc(inline)]
pub use category::{derive_category, CategoryError, Label, CATEGORY_LABELS, TYPE_LABELS};
#[doc(inline)]
pub use content::{save_json, ContentError, ContentRecord, ContentSource, ContentTable, SpriteTable};
#[doc(inline)]
pub use objects::{
    assemble_record, build_catalog, export_objects, CatalogStats, ExportError, ObjectCatalog,
    ObjectError, ObjectRecord, ObjectSources, OUTPUT_FILE,
};
#[doc(inline)]
pub use reference::{is_skipped, name_override, NAME_OVERRIDES, SKIPPED_OBJECTS};
#[doc(inline)]
pub use strings::{parse_text, StringChain, StringError, StringTable, Text};
