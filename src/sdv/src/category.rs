//! Object category labels
//!
//! Maps the raw `(Type, Category)` pair from `Data/Objects.json` to the label
//! shown in-game. Category codes are negative integers defined by the game;
//! `0` (or a missing field) means "no category", in which case the coarse
//! `Type` string decides the label.

use thiserror::Error;

use crate::strings::{StringError, StringTable, SHARED_SCOPE};

/// Category code meaning "none"
pub const NO_CATEGORY: i32 = 0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Unknown category {category} for type {item_type:?}")]
    UnknownCategory { item_type: String, category: i32 },

    #[error("Unknown type {item_type:?} for uncategorized object")]
    UnknownType { item_type: String },

    #[error("Category label: {0}")]
    Label(#[from] StringError),
}

/// Where a label's text comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Key in the shared string table
    Localized(&'static str),
    /// Fixed text for labels the game never localizes
    Literal(&'static str),
}

impl Label {
    /// Resolve the label against the shared string table
    pub fn resolve(&self, shared: &StringTable) -> Result<String, StringError> {
        match *self {
            Label::Localized(key) => shared
                .get(key)
                .filter(|text| !text.is_empty())
                .cloned()
                .ok_or_else(|| StringError::Missing {
                    reference: format!("{SHARED_SCOPE}:{key}"),
                }),
            Label::Literal(text) => Ok(text.to_string()),
        }
    }
}

/// Category code -> label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLabel {
    pub code: i32,
    pub label: Label,
}

/// Object type -> label, used when the category is the sentinel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLabel {
    pub item_type: &'static str,
    pub label: Label,
}

const MINERAL: Label = Label::Localized("Object.cs.12850");
const VEGETABLE: Label = Label::Localized("Object.cs.12851");
const FISH: Label = Label::Localized("Object.cs.12852");
const COOKING: Label = Label::Localized("Object.cs.12853");
const FRUIT: Label = Label::Localized("Object.cs.12854");
const SEED: Label = Label::Localized("Object.cs.12855");
const BAIT: Label = Label::Localized("Object.cs.12857");
const FISHING_TACKLE: Label = Label::Localized("Object.cs.12858");
const FERTILIZER: Label = Label::Localized("Object.cs.12859");
const TRASH: Label = Label::Localized("Object.cs.12860");
const ANIMAL_PRODUCT: Label = Label::Localized("Object.cs.12861");
const ARTISAN_GOODS: Label = Label::Localized("Object.cs.12862");
const CRAFTING: Label = Label::Localized("Object.cs.12863");
const DECOR: Label = Label::Localized("Object.cs.12864");
const FLOWER: Label = Label::Localized("Object.cs.12866");
const MONSTER_LOOT: Label = Label::Localized("Object.cs.12867");
const RESOURCE: Label = Label::Localized("Object.cs.12868");
const FORAGE: Label = Label::Localized("Object.cs.12869");
const CLOTHING: Label = Label::Localized("category_clothes");

/// All known category codes
pub const CATEGORY_LABELS: &[CategoryLabel] = &[
    CategoryLabel {
        code: -2,
        label: MINERAL,
    },
    CategoryLabel {
        code: -4,
        label: FISH,
    },
    CategoryLabel {
        code: -5,
        label: ANIMAL_PRODUCT,
    },
    CategoryLabel {
        code: -6,
        label: ANIMAL_PRODUCT,
    },
    CategoryLabel {
        code: -7,
        label: COOKING,
    },
    CategoryLabel {
        code: -8,
        label: CRAFTING,
    },
    CategoryLabel {
        code: -12,
        label: MINERAL,
    },
    CategoryLabel {
        code: -14,
        label: ANIMAL_PRODUCT,
    },
    CategoryLabel {
        code: -15,
        label: RESOURCE,
    },
    CategoryLabel {
        code: -16,
        label: RESOURCE,
    },
    CategoryLabel {
        code: -17,
        label: FORAGE,
    },
    CategoryLabel {
        code: -18,
        label: ANIMAL_PRODUCT,
    },
    CategoryLabel {
        code: -19,
        label: FERTILIZER,
    },
    CategoryLabel {
        code: -20,
        label: TRASH,
    },
    CategoryLabel {
        code: -21,
        label: BAIT,
    },
    CategoryLabel {
        code: -22,
        label: FISHING_TACKLE,
    },
    CategoryLabel {
        code: -23,
        label: FORAGE,
    },
    CategoryLabel {
        code: -24,
        label: DECOR,
    },
    CategoryLabel {
        code: -25,
        label: COOKING,
    },
    CategoryLabel {
        code: -26,
        label: ARTISAN_GOODS,
    },
    CategoryLabel {
        code: -27,
        label: ARTISAN_GOODS,
    },
    CategoryLabel {
        code: -28,
        label: MONSTER_LOOT,
    },
    CategoryLabel {
        code: -74,
        label: SEED,
    },
    CategoryLabel {
        code: -75,
        label: VEGETABLE,
    },
    CategoryLabel {
        code: -79,
        label: FRUIT,
    },
    CategoryLabel {
        code: -80,
        label: FLOWER,
    },
    CategoryLabel {
        code: -81,
        label: FORAGE,
    },
    CategoryLabel {
        code: -96,
        label: Label::Literal("Ring"),
    },
    CategoryLabel {
        code: -100,
        label: CLOTHING,
    },
    CategoryLabel {
        code: -101,
        label: Label::Literal("Trinket"),
    },
    CategoryLabel {
        code: -102,
        label: Label::Literal("Book"),
    },
    CategoryLabel {
        code: -103,
        label: Label::Literal("Skill Book"),
    },
    CategoryLabel {
        code: -999,
        label: Label::Literal("Litter"),
    },
];

/// Labels for uncategorized objects, keyed by `Type`
pub const TYPE_LABELS: &[TypeLabel] = &[
    TypeLabel {
        item_type: "Arch",
        label: Label::Literal("Artifact"),
    },
    TypeLabel {
        item_type: "Minerals",
        label: MINERAL,
    },
    TypeLabel {
        item_type: "Fish",
        label: FISH,
    },
    TypeLabel {
        item_type: "Cooking",
        label: COOKING,
    },
    TypeLabel {
        item_type: "Crafting",
        label: CRAFTING,
    },
    TypeLabel {
        item_type: "Seeds",
        label: SEED,
    },
    TypeLabel {
        item_type: "Ring",
        label: Label::Literal("Ring"),
    },
    TypeLabel {
        item_type: "Basic",
        label: Label::Literal("Basic"),
    },
    TypeLabel {
        item_type: "Litter",
        label: Label::Literal("Litter"),
    },
    TypeLabel {
        item_type: "Quest",
        label: Label::Literal("Quest"),
    },
    TypeLabel {
        item_type: "asdf",
        label: Label::Literal("Other"),
    },
    TypeLabel {
        item_type: "interactive",
        label: Label::Literal("Interactive"),
    },
];

/// Get the label source for a category code
pub fn category_label(code: i32) -> Option<Label> {
    CATEGORY_LABELS
        .iter()
        .find(|c| c.code == code)
        .map(|c| c.label)
}

/// Get the label source for an uncategorized object type
pub fn type_label(item_type: &str) -> Option<Label> {
    TYPE_LABELS
        .iter()
        .find(|t| t.item_type == item_type)
        .map(|t| t.label)
}

/// Derive the display category of an object.
///
/// A real category code must be in [`CATEGORY_LABELS`]; a missing or `0`
/// category falls back to [`TYPE_LABELS`]. Anything else is an error so new
/// content types surface at build time.
pub fn derive_category(
    item_type: &str,
    category: Option<i32>,
    shared: &StringTable,
) -> Result<String, CategoryError> {
    let label = match category.filter(|&code| code != NO_CATEGORY) {
        Some(code) => category_label(code).ok_or_else(|| CategoryError::UnknownCategory {
            item_type: item_type.to_string(),
            category: code,
        })?,
        None => type_label(item_type).ok_or_else(|| CategoryError::UnknownType {
            item_type: item_type.to_string(),
        })?,
    };

    Ok(label.resolve(shared)?)
}
