/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Dictionary entries.
//!
//! A [`DictEntry`] is the display metadata of one enum member: its raw value,
//! a label, an optional [`AttrType`] and any number of typed extension
//! fields. The raw value and label are identity fields and have no public
//! mutator; only an [`EntryPatch`] can change an entry after construction, and
//! a patch has no slot for identity fields.

use crate::patch::EntryPatch;
use enumdict_core::{AttrType, DictKey, DictValue, FieldValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Field names that address identity or known fields and can never be used
/// as extension field names.
pub const RESERVED_FIELDS: [&str; 3] = ["value", "label", "attrType"];

/// Returns true if `name` is one of [`RESERVED_FIELDS`].
#[inline]
#[must_use]
pub fn is_reserved_field(name: &str) -> bool {
    RESERVED_FIELDS.contains(&name)
}

/// Display metadata of one enum member.
///
/// The label is optional only for entries decoded from definitions that
/// omit it; lookups then fall back to the caller's or configured default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEntry")]
pub struct DictEntry {
    value: DictValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(rename = "attrType", skip_serializing_if = "Option::is_none")]
    attr_type: Option<AttrType>,
    #[serde(flatten)]
    fields: BTreeMap<String, FieldValue>,
}

impl DictEntry {
    /// Creates a new entry.
    ///
    /// # Arguments
    /// * `value` - The raw enum value
    /// * `label` - The human-readable label
    #[must_use]
    pub fn new(value: impl Into<DictValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: Some(label.into()),
            attr_type: None,
            fields: BTreeMap::new(),
        }
    }

    /// Sets the display-style hint.
    #[must_use]
    pub fn with_attr_type(mut self, attr_type: impl Into<AttrType>) -> Self {
        self.attr_type = Some(attr_type.into());
        self
    }

    /// Adds an extension field. Reserved names are ignored.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let name = name.into();
        if is_reserved_field(&name) {
            debug!(field = %name, "ignoring reserved extension field name");
        } else {
            self.fields.insert(name, value.into());
        }
        self
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &DictValue {
        &self.value
    }

    /// Returns the normalized lookup key of this entry.
    #[inline]
    #[must_use]
    pub fn key(&self) -> DictKey {
        self.value.key()
    }

    /// Returns the label, if the entry has one.
    #[inline]
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the display-style hint, if set.
    #[inline]
    #[must_use]
    pub const fn attr_type(&self) -> Option<&AttrType> {
        self.attr_type.as_ref()
    }

    /// Returns an extension field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Returns all extension fields, ordered by name.
    #[must_use]
    pub const fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    /// Merges a patch into this entry.
    ///
    /// Fields named by the patch are set or removed; all others are left
    /// untouched.
    pub(crate) fn apply(&mut self, patch: &EntryPatch) {
        if let Some(attr_type) = patch.attr_type_change() {
            self.attr_type = attr_type.cloned();
        }
        for (name, value) in patch.fields() {
            match value {
                Some(v) => {
                    self.fields.insert(name.clone(), v.clone());
                }
                None => {
                    self.fields.remove(name);
                }
            }
        }
    }
}

/// Wire shape of an entry as produced by the generator.
///
/// A missing or `null` label is kept absent and `null` extension values
/// are treated as absent.
#[derive(Deserialize)]
struct RawEntry {
    value: DictValue,
    #[serde(default)]
    label: Option<String>,
    #[serde(rename = "attrType", default)]
    attr_type: Option<AttrType>,
    #[serde(flatten)]
    fields: BTreeMap<String, Option<FieldValue>>,
}

impl From<RawEntry> for DictEntry {
    fn from(raw: RawEntry) -> Self {
        Self {
            value: raw.value,
            label: raw.label,
            attr_type: raw.attr_type,
            fields: raw
                .fields
                .into_iter()
                .filter_map(|(name, value)| value.map(|v| (name, v)))
                .collect(),
        }
    }
}
