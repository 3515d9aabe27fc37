//! Reading unpacked content files and writing generated data.
//!
//! Content is expected in the layout produced by unpacking the game's
//! `Content` folder to JSON: `Data/` for content tables and `Strings/` for
//! localization tables.

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use crate::strings::StringTable;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// One raw entry of `Data/Objects.json`.
///
/// Only the fields the catalog needs are read; the rest are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    #[serde(rename = "DisplayName")]
    pub display_name: String,

    /// Missing or null descriptions are treated as empty text
    #[serde(rename = "Description", default)]
    pub description: Option<String>,

    #[serde(rename = "Type")]
    pub item_type: String,

    /// Missing and `0` both mean "no category"
    #[serde(rename = "Category", default)]
    pub category: Option<i32>,
}

/// Object ID -> raw content record, in file order
pub type ContentTable = IndexMap<String, ContentRecord>;

/// Object ID -> icon URL
pub type SpriteTable = IndexMap<String, String>;

/// Location of unpacked content files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSource {
    pub data_dir: PathBuf,
    pub strings_dir: PathBuf,
}

impl ContentSource {
    pub fn new(data_dir: impl Into<PathBuf>, strings_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            strings_dir: strings_dir.into(),
        }
    }

    /// Load a keyed content table from the data directory, keeping file order
    pub fn load_content<T: DeserializeOwned>(
        &self,
        name: &str,
    ) -> Result<IndexMap<String, T>, ContentError> {
        read_json(&self.data_dir.join(name))
    }

    /// Load a localization table from the strings directory
    pub fn load_strings(&self, name: &str) -> Result<StringTable, ContentError> {
        read_json(&self.strings_dir.join(name))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    debug!(path = %path.display(), "Loading content file");

    let content = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a keyed table as pretty JSON to `dir/name`.
///
/// With `sort` the keys are written in lexicographic order, otherwise in
/// insertion order. The file is written to a temporary sibling and renamed
/// into place, so an existing file is only replaced by a complete one.
pub fn save_json<T: Serialize>(
    data: &IndexMap<String, T>,
    dir: &Path,
    name: &str,
    sort: bool,
) -> Result<PathBuf, ContentError> {
    let path = dir.join(name);
    let write_err = |source| ContentError::Write {
        path: path.clone(),
        source,
    };

    fs::create_dir_all(dir).map_err(write_err)?;
    let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        let result = if sort {
            let sorted: BTreeMap<&String, &T> = data.iter().collect();
            serde_json::to_writer_pretty(&mut writer, &sorted)
        } else {
            serde_json::to_writer_pretty(&mut writer, data)
        };
        result.map_err(|source| ContentError::Serialize {
            path: path.clone(),
            source,
        })?;
        writer.write_all(b"\n").map_err(write_err)?;
        writer.flush().map_err(write_err)?;
    }

    temp.persist(&path).map_err(|e| write_err(e.error))?;
    debug!(path = %path.display(), entries = data.len(), "Wrote JSON");

    Ok(path)
}
