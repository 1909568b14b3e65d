/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Enum dictionary.
//!
//! A [`Dict`] maps the raw values of one enum family to display metadata.
//! Entries are kept in declaration order in an owned vector; the lookup index
//! maps each stringified value to a position in that vector, so a patch
//! applied through either access path is seen by both.
//!
//! Lookups never fail. An unknown value or missing field degrades to a
//! caller-supplied or configured default.

use crate::config::DictConfig;
use crate::entry::DictEntry;
use crate::patch::PatchMap;
use enumdict_core::{AttrType, DictError, DictKey, FieldValue, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, warn};

/// Lookup table from an enum's raw values to display metadata.
#[derive(Debug, Clone)]
pub struct Dict {
    /// Type tag naming the enum family.
    dict_type: String,
    /// Entries in declaration order, duplicates included.
    entries: Vec<DictEntry>,
    /// Stringified value -> position in `entries`.
    index: HashMap<String, usize>,
    /// Fallbacks and naming options.
    config: DictConfig,
}

impl Dict {
    /// Creates a dictionary with the default configuration.
    ///
    /// Entries whose values stringify to the same key are all kept in
    /// [`Dict::get_entries`], but lookups resolve to the last of them.
    ///
    /// # Arguments
    /// * `dict_type` - The type tag of the enum family
    /// * `entries` - The entries in declaration order
    #[must_use]
    pub fn new(dict_type: impl Into<String>, entries: Vec<DictEntry>) -> Self {
        Self::with_config(dict_type, entries, DictConfig::default())
    }

    /// Creates a dictionary with the given configuration.
    ///
    /// # Arguments
    /// * `dict_type` - The type tag of the enum family
    /// * `entries` - The entries in declaration order
    /// * `config` - Fallbacks and naming options
    #[must_use]
    pub fn with_config(
        dict_type: impl Into<String>,
        entries: Vec<DictEntry>,
        config: DictConfig,
    ) -> Self {
        let dict_type = config.type_style.apply(&dict_type.into());
        Self::build(dict_type, entries, config)
    }

    /// Creates a dictionary, rejecting duplicate values.
    ///
    /// # Errors
    /// Returns `DictError::DuplicateValue` if two entries stringify to the
    /// same key.
    pub fn try_new(
        dict_type: impl Into<String>,
        entries: Vec<DictEntry>,
        config: DictConfig,
    ) -> Result<Self> {
        let dict_type = config.type_style.apply(&dict_type.into());
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            let key = entry.key().into_string();
            if !seen.insert(key.clone()) {
                return Err(DictError::DuplicateValue { dict_type, key });
            }
        }
        Ok(Self::build(dict_type, entries, config))
    }

    /// Builds the index over `entries`. `dict_type` is already styled.
    fn build(dict_type: String, entries: Vec<DictEntry>, config: DictConfig) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if let Some(prev) = index.insert(entry.key().into_string(), pos) {
                warn!(
                    dict_type = %dict_type,
                    key = %entry.key(),
                    replaced = prev,
                    position = pos,
                    "duplicate dictionary value, later entry wins"
                );
            }
        }
        debug!(dict_type = %dict_type, entries = entries.len(), "built dictionary");

        Self {
            dict_type,
            entries,
            index,
            config,
        }
    }

    /// Decodes a dictionary from `{"type": ..., "items": [...]}`.
    ///
    /// # Errors
    /// Returns `DictError::Json` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with_config(json, DictConfig::default())
    }

    /// Decodes a dictionary with the given configuration.
    ///
    /// # Errors
    /// Returns `DictError::Json` if the document is malformed.
    pub fn from_json_with_config(json: &str, config: DictConfig) -> Result<Self> {
        let def: OwnedDictDef = serde_json::from_str(json)?;
        Ok(Self::with_config(def.dict_type, def.items, config))
    }

    /// Encodes the dictionary as `{"type": ..., "items": [...]}`.
    ///
    /// # Errors
    /// Returns `DictError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&DictDef {
            dict_type: &self.dict_type,
            items: &self.entries,
        })?)
    }

    /// Returns the type tag.
    #[inline]
    #[must_use]
    pub fn get_type(&self) -> &str {
        &self.dict_type
    }

    /// Returns the configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &DictConfig {
        &self.config
    }

    /// Returns all entries in declaration order.
    #[inline]
    #[must_use]
    pub fn get_entries(&self) -> &[DictEntry] {
        &self.entries
    }

    /// Returns an iterator over the entries in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, DictEntry> {
        self.entries.iter()
    }

    /// Returns the number of entries, duplicates included.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the dictionary has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if a value is known.
    #[must_use]
    pub fn contains(&self, value: impl Into<DictKey>) -> bool {
        self.index.contains_key(value.into().as_str())
    }

    /// Looks up the entry for a value.
    #[must_use]
    pub fn get_entry(&self, value: impl Into<DictKey>) -> Option<&DictEntry> {
        self.index
            .get(value.into().as_str())
            .map(|&pos| &self.entries[pos])
    }

    /// Returns the label of a value, or `default` if the value is unknown
    /// or its entry has no label.
    #[must_use]
    pub fn get_label<'a>(&'a self, value: impl Into<DictKey>, default: &'a str) -> &'a str {
        self.get_entry(value)
            .and_then(DictEntry::label)
            .unwrap_or(default)
    }

    /// Returns the label of a value, or the configured default label.
    #[must_use]
    pub fn label(&self, value: impl Into<DictKey>) -> &str {
        self.get_label(value, &self.config.default_label)
    }

    /// Returns the display style of a value, or `default` if the value is
    /// unknown or has no style.
    #[must_use]
    pub fn get_attr_type<'a>(&'a self, value: impl Into<DictKey>, default: &'a str) -> &'a str {
        self.get_entry(value)
            .and_then(DictEntry::attr_type)
            .map_or(default, AttrType::as_str)
    }

    /// Returns the display style of a value, or the configured default style.
    #[must_use]
    pub fn attr_type(&self, value: impl Into<DictKey>) -> &AttrType {
        self.get_entry(value)
            .and_then(DictEntry::attr_type)
            .unwrap_or(&self.config.default_attr_type)
    }

    /// Returns an extension field of a value.
    ///
    /// `None` if the value is unknown or the entry has no such field. Known
    /// fields are not extension fields: read them with [`Dict::get_label`]
    /// and [`Dict::get_attr_type`].
    #[must_use]
    pub fn get_field(&self, value: impl Into<DictKey>, field: &str) -> Option<&FieldValue> {
        self.get_entry(value).and_then(|entry| entry.field(field))
    }

    /// Returns an extension field of a value, or `default`.
    #[must_use]
    pub fn get_field_or<'a>(
        &'a self,
        value: impl Into<DictKey>,
        field: &str,
        default: &'a FieldValue,
    ) -> &'a FieldValue {
        self.get_field(value, field).unwrap_or(default)
    }

    /// Applies metadata patches in place.
    ///
    /// Every entry whose stringified value has a patch in `patches` is
    /// updated; entries without a patch are left unchanged and patches for
    /// unknown values are ignored. Identity fields cannot change.
    pub fn patch_field_value(&mut self, patches: &PatchMap) {
        let mut patched = 0usize;
        for entry in &mut self.entries {
            let key = entry.key();
            let Some(patch) = patches.get(key.as_str()) else {
                continue;
            };
            entry.apply(patch);
            patched += 1;
        }
        debug!(
            dict_type = %self.dict_type,
            requested = patches.len(),
            patched,
            "applied dictionary patch"
        );
    }

    /// Renders the entries as `[raw:label,...]`.
    ///
    /// Integer-backed dictionaries are listed in ascending value order;
    /// string-backed ones keep declaration order.
    #[must_use]
    pub fn explain(&self) -> String {
        let mut entries: Vec<&DictEntry> = self.entries.iter().collect();
        if entries.iter().all(|e| e.value().is_numeric()) {
            entries.sort_by(|a, b| {
                a.value()
                    .numeric_cmp(b.value())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        let mut out = String::from("[");
        for (i, entry) in entries.iter().enumerate() {
            if i != 0 {
                out.push(',');
            }
            out.push_str(&entry.key().into_string());
            out.push(':');
            out.push_str(entry.label().unwrap_or(&self.config.default_label));
        }
        out.push(']');
        out
    }
}

impl fmt::Display for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.dict_type, self.explain())
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = &'a DictEntry;
    type IntoIter = std::slice::Iter<'a, DictEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Borrowed wire shape of a dictionary.
#[derive(Serialize)]
struct DictDef<'a> {
    #[serde(rename = "type")]
    dict_type: &'a str,
    items: &'a [DictEntry],
}

/// Owned wire shape of a dictionary.
#[derive(Deserialize)]
struct OwnedDictDef {
    #[serde(rename = "type")]
    dict_type: String,
    #[serde(default)]
    items: Vec<DictEntry>,
}
