//! Localization string lookup
//!
//! Content tables never carry display text directly. A `DisplayName` such as
//! `[LocalizedText Strings\Objects:Parsnip_Name]` points at an entry in one of
//! the game's string tables, and this module turns it back into text.
//!
//! Lookups walk an ordered [`StringChain`]: tables whose scope matches the
//! reference are searched first-to-last, and tables marked as fallbacks are
//! searched regardless of scope.

use std::collections::HashMap;

use thiserror::Error;

/// Entry key -> localized text
pub type StringTable = HashMap<String, String>;

/// Scope of the object-specific string table (`Strings/Objects.json`)
pub const OBJECTS_SCOPE: &str = "Objects";

/// Scope of the shared string table (`Strings/StringsFromCSFiles.json`)
pub const SHARED_SCOPE: &str = "StringsFromCSFiles";

const TOKEN_OPEN: &str = "[LocalizedText";

/// Asset folder holding every string table
const STRINGS_ASSET_DIR: &str = "Strings";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StringError {
    #[error("No localized string for {reference}")]
    Missing { reference: String },

    #[error("Malformed localization reference: {reference}")]
    Malformed { reference: String },
}

/// A parsed `DisplayName`/`Description` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text<'a> {
    /// Already display text
    Literal(&'a str),
    /// Indirect reference into a string table
    Localized(LocalizedRef<'a>),
}

/// Reference into a string table, e.g. `Strings\Objects:Parsnip_Name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedRef<'a> {
    /// Table name without its asset path (`Objects`)
    pub scope: &'a str,
    /// Entry key inside the table
    pub key: &'a str,
    /// Substitutions for `{0}`, `{1}`, ... placeholders
    pub args: Vec<&'a str>,
}

impl LocalizedRef<'_> {
    fn display(&self) -> String {
        format!("{}:{}", self.scope, self.key)
    }
}

/// Parse a raw content value into literal runs and table references.
///
/// Accepted reference forms:
/// - `[LocalizedText Strings\Objects:Key]` (optionally followed by arguments),
///   anywhere in the value and in any ASCII case
/// - `Strings\Objects:Key` as the whole value (no whitespace)
///
/// Everything outside a token is literal text. An empty value yields no parts.
pub fn parse_text(raw: &str) -> Result<Vec<Text<'_>>, StringError> {
    if find_token(raw).is_none() {
        return Ok(match bare_reference(raw) {
            Some(reference) => vec![Text::Localized(reference)],
            None if raw.is_empty() => Vec::new(),
            None => vec![Text::Literal(raw)],
        });
    }

    let mut parts = Vec::new();
    let mut rest = raw.trim();
    while let Some(start) = find_token(rest) {
        if start > 0 {
            parts.push(Text::Literal(&rest[..start]));
        }
        let end = rest[start..]
            .find(']')
            .map(|i| start + i + 1)
            .ok_or_else(|| StringError::Malformed {
                reference: rest[start..].to_string(),
            })?;
        parts.push(Text::Localized(parse_token(&rest[start..end])?));
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        parts.push(Text::Literal(rest));
    }

    Ok(parts)
}

/// Byte offset of the next `[LocalizedText` opener, ignoring ASCII case
fn find_token(text: &str) -> Option<usize> {
    let open = TOKEN_OPEN.as_bytes();
    text.as_bytes()
        .windows(open.len())
        .enumerate()
        .find(|(i, window)| {
            if !window.eq_ignore_ascii_case(open) {
                return false;
            }
            let after = &text[i + open.len()..];
            after.is_empty() || after.starts_with(|c: char| c.is_whitespace() || c == ']')
        })
        .map(|(i, _)| i)
}

/// Parse one `[LocalizedText Path:Key args...]` token
fn parse_token(token: &str) -> Result<LocalizedRef<'_>, StringError> {
    let malformed = || StringError::Malformed {
        reference: token.to_string(),
    };
    let inner = token
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(malformed)?;

    // First word is the `LocalizedText` marker itself
    let mut words = inner.split_whitespace().skip(1);
    let path = words.next().ok_or_else(malformed)?;
    let mut reference = split_reference(path).ok_or_else(malformed)?;
    reference.args = words.collect();
    Ok(reference)
}

/// `Strings\Objects:Key` written without the bracketed wrapper
fn bare_reference(raw: &str) -> Option<LocalizedRef<'_>> {
    let trimmed = raw.trim();
    if trimmed.contains(char::is_whitespace) {
        return None;
    }
    let (asset, _) = trimmed.split_once(':')?;
    let (dir, _) = asset.rsplit_once(['\\', '/'])?;
    let dir = dir.rsplit(['\\', '/']).next()?;
    if !dir.eq_ignore_ascii_case(STRINGS_ASSET_DIR) {
        return None;
    }
    split_reference(trimmed)
}

/// Split `Strings\Objects:Key` into scope `Objects` and key `Key`
fn split_reference(path: &str) -> Option<LocalizedRef<'_>> {
    let (asset, key) = path.split_once(':')?;
    let scope = asset.rsplit(['\\', '/']).next()?;
    if scope.is_empty() || key.is_empty() {
        return None;
    }
    Some(LocalizedRef {
        scope,
        key,
        args: Vec::new(),
    })
}

/// Replace `{0}`, `{1}`, ... with reference arguments
fn substitute(text: &str, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(text.to_string(), |acc, (i, arg)| {
            acc.replace(&format!("{{{i}}}"), arg)
        })
}

/// One string table in a lookup chain
#[derive(Debug, Clone, Copy)]
pub struct ScopedTable<'a> {
    pub scope: &'a str,
    pub table: &'a StringTable,
    /// Searched for every reference, not only those naming `scope`
    pub fallback: bool,
}

impl ScopedTable<'_> {
    fn serves(&self, scope: &str) -> bool {
        self.fallback || self.scope.eq_ignore_ascii_case(scope)
    }
}

/// Ordered list of string tables searched during resolution
#[derive(Debug, Clone, Default)]
pub struct StringChain<'a> {
    tables: Vec<ScopedTable<'a>>,
}

impl<'a> StringChain<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Object strings first, then the shared table as the fallback
    pub fn standard(objects: &'a StringTable, shared: &'a StringTable) -> Self {
        Self::new()
            .scoped(OBJECTS_SCOPE, objects)
            .fallback(SHARED_SCOPE, shared)
    }

    /// Append a table only consulted for references naming `scope`
    pub fn scoped(mut self, scope: &'a str, table: &'a StringTable) -> Self {
        self.tables.push(ScopedTable {
            scope,
            table,
            fallback: false,
        });
        self
    }

    /// Append a table consulted for every reference
    pub fn fallback(mut self, scope: &'a str, table: &'a StringTable) -> Self {
        self.tables.push(ScopedTable {
            scope,
            table,
            fallback: true,
        });
        self
    }

    pub fn tables(&self) -> &[ScopedTable<'a>] {
        &self.tables
    }

    /// Look up a key for a given scope, honoring chain order
    pub fn lookup(&self, scope: &str, key: &str) -> Option<&'a str> {
        self.tables
            .iter()
            .filter(|t| t.serves(scope))
            .find_map(|t| t.table.get(key))
            .map(String::as_str)
    }

    /// Resolve a raw content value into display text.
    ///
    /// Literal text passes through unchanged and every embedded reference is
    /// replaced by its table entry. A bare `Objects:Key` counts as a reference
    /// only when a table in the chain has that scope. A reference that no
    /// table can satisfy is a [`StringError::Missing`].
    pub fn resolve(&self, raw: &str) -> Result<String, StringError> {
        if let Some(reference) = self.scoped_reference(raw) {
            return self.resolve_reference(&reference);
        }

        parse_text(raw)?
            .iter()
            .map(|part| match part {
                Text::Literal(text) => Ok(text.to_string()),
                Text::Localized(reference) => self.resolve_reference(reference),
            })
            .collect()
    }

    fn resolve_reference(&self, reference: &LocalizedRef<'_>) -> Result<String, StringError> {
        self.lookup(reference.scope, reference.key)
            .map(|text| substitute(text, &reference.args))
            .ok_or_else(|| StringError::Missing {
                reference: reference.display(),
            })
    }

    /// `Scope:Key` with no asset folder, naming a scope this chain holds
    fn scoped_reference<'r>(&self, raw: &'r str) -> Option<LocalizedRef<'r>> {
        let trimmed = raw.trim();
        if trimmed.contains(char::is_whitespace) {
            return None;
        }
        let (asset, _) = trimmed.split_once(':')?;
        let known = self
            .tables
            .iter()
            .any(|t| t.scope.eq_ignore_ascii_case(asset));
        if !known {
            return None;
        }
        split_reference(trimmed)
    }
}
