//! Reference data for Stardew Valley objects
//!
//! Hardcoded corrections for content entries whose source data is known to
//! be wrong or unusable. Keyed by object ID (the `Data/Objects.json` key, not
//! the qualified `(O)` ID).

use phf::{phf_map, phf_set};

/// Object ID -> authoritative display name.
///
/// Strange dolls share a localized name; the color only exists in the sprite.
pub static NAME_OVERRIDES: phf::Map<&'static str, &'static str> = phf_map! {
    "126" => "Strange Doll (green)",
    "127" => "Strange Doll (yellow)",
};

/// Objects with descriptions but no icon or in-game use
pub static SKIPPED_OBJECTS: phf::Set<&'static str> = phf_set! {
    "925",
    "927",
    "929",
    "930",
};

/// Get the fixed display name for an object, if it has one
pub fn name_override(id: &str) -> Option<&'static str> {
    NAME_OVERRIDES.get(id).copied()
}

/// Check whether an object is excluded from the catalog
pub fn is_skipped(id: &str) -> bool {
    SKIPPED_OBJECTS.contains(id)
}
