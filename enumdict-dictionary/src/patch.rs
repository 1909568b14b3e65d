/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Metadata patches.
//!
//! This module defines the partial updates that can be applied to entries
//! after a dictionary is built:
//! - [`EntryPatch`]: Changes for a single entry
//! - [`PatchMap`]: Patches keyed by the entry's stringified value
//!
//! Identity fields are immutable: an [`EntryPatch`] has no way to express a
//! new value or label, and `value`/`label` keys are dropped when a patch is
//! decoded from JSON.

use crate::entry::is_reserved_field;
use enumdict_core::{AttrType, DictKey, FieldValue, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Partial update of one entry's non-identity fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<String, Option<FieldValue>>")]
pub struct EntryPatch {
    /// `None`: untouched, `Some(None)`: cleared, `Some(Some(_))`: replaced.
    attr_type: Option<Option<AttrType>>,
    /// `None` values remove the field.
    fields: BTreeMap<String, Option<FieldValue>>,
}

impl EntryPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the display-style hint.
    #[must_use]
    pub fn attr_type(mut self, attr_type: impl Into<AttrType>) -> Self {
        self.attr_type = Some(Some(attr_type.into()));
        self
    }

    /// Removes the display-style hint, so lookups fall back to the default.
    #[must_use]
    pub fn clear_attr_type(mut self) -> Self {
        self.attr_type = Some(None);
        self
    }

    /// Sets an extension field. Reserved names are ignored.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set_field(name.into(), Some(value.into()));
        self
    }

    /// Removes an extension field. Reserved names are ignored.
    #[must_use]
    pub fn clear_field(mut self, name: impl Into<String>) -> Self {
        self.set_field(name.into(), None);
        self
    }

    fn set_field(&mut self, name: String, value: Option<FieldValue>) {
        if is_reserved_field(&name) {
            debug!(field = %name, "ignoring reserved field in patch");
            return;
        }
        self.fields.insert(name, value);
    }

    /// Returns the pending change to the display-style hint, if any.
    #[must_use]
    pub fn attr_type_change(&self) -> Option<Option<&AttrType>> {
        self.attr_type.as_ref().map(Option::as_ref)
    }

    /// Returns the pending extension field changes.
    #[must_use]
    pub const fn fields(&self) -> &BTreeMap<String, Option<FieldValue>> {
        &self.fields
    }

    /// Returns true if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attr_type.is_none() && self.fields.is_empty()
    }
}

impl TryFrom<BTreeMap<String, Option<FieldValue>>> for EntryPatch {
    type Error = String;

    fn try_from(map: BTreeMap<String, Option<FieldValue>>) -> std::result::Result<Self, Self::Error> {
        let mut patch = Self::new();
        for (name, value) in map {
            match name.as_str() {
                "value" | "label" => {
                    debug!(field = %name, "stripping identity field from patch");
                }
                "attrType" => {
                    patch.attr_type = Some(match value {
                        None => None,
                        Some(FieldValue::String(s)) => Some(AttrType::from(s)),
                        Some(other) => {
                            return Err(format!("attrType must be a string, got '{}'", other));
                        }
                    });
                }
                _ => {
                    patch.fields.insert(name, value);
                }
            }
        }
        Ok(patch)
    }
}

/// Patches keyed by the stringified value of the entries they apply to.
///
/// `null` patches in a JSON document are dropped at decode time, so entries
/// they name are simply left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "HashMap<DictKey, Option<EntryPatch>>")]
pub struct PatchMap {
    patches: HashMap<DictKey, EntryPatch>,
}

impl PatchMap {
    /// Creates an empty patch map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a patch map from a JSON object.
    ///
    /// # Errors
    /// Returns `DictError::Json` if the document is not an object of patches.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Adds a patch for the entry with the given value, replacing any
    /// previous patch for the same key.
    pub fn insert(&mut self, key: impl Into<DictKey>, patch: EntryPatch) -> Option<EntryPatch> {
        self.patches.insert(key.into(), patch)
    }

    /// Builder form of [`PatchMap::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<DictKey>, patch: EntryPatch) -> Self {
        self.insert(key, patch);
        self
    }

    /// Returns the patch for a stringified value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&EntryPatch> {
        self.patches.get(key)
    }

    /// Returns the number of patches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// Returns true if there are no patches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Returns an iterator over the patches.
    pub fn iter(&self) -> impl Iterator<Item = (&DictKey, &EntryPatch)> {
        self.patches.iter()
    }
}

impl From<HashMap<DictKey, Option<EntryPatch>>> for PatchMap {
    fn from(map: HashMap<DictKey, Option<EntryPatch>>) -> Self {
        Self {
            patches: map
                .into_iter()
                .filter_map(|(key, patch)| patch.map(|p| (key, p)))
                .collect(),
        }
    }
}

impl<K: Into<DictKey>> FromIterator<(K, EntryPatch)> for PatchMap {
    fn from_iter<I: IntoIterator<Item = (K, EntryPatch)>>(iter: I) -> Self {
        Self {
            patches: iter.into_iter().map(|(k, p)| (k.into(), p)).collect(),
        }
    }
}
