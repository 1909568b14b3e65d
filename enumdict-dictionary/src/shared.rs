/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Thread-safe dictionary handle.
//!
//! [`Dict`] is a plain single-owner structure. When readers and a patching
//! writer live on different threads, wrap it in a [`SharedDict`]: each
//! [`SharedDict::patch_field_value`] call runs under one write lock, so a
//! reader observes every entry either fully before or fully after a patch.

use crate::dict::Dict;
use crate::entry::DictEntry;
use crate::patch::PatchMap;
use enumdict_core::{AttrType, DictKey, FieldValue};
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

/// Cloneable, lock-protected handle to a [`Dict`].
///
/// Accessors return owned values so no lock is held after they return. Use
/// [`SharedDict::read`] to run several lookups against one consistent view.
#[derive(Debug, Clone)]
pub struct SharedDict {
    inner: Arc<RwLock<Dict>>,
}

impl SharedDict {
    /// Wraps a dictionary.
    #[must_use]
    pub fn new(dict: Dict) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dict)),
        }
    }

    /// Acquires a read guard over the dictionary.
    pub fn read(&self) -> RwLockReadGuard<'_, Dict> {
        self.inner.read()
    }

    /// Returns the type tag.
    #[must_use]
    pub fn get_type(&self) -> String {
        self.inner.read().get_type().to_string()
    }

    /// Returns a snapshot of all entries in declaration order.
    #[must_use]
    pub fn get_entries(&self) -> Vec<DictEntry> {
        self.inner.read().get_entries().to_vec()
    }

    /// Returns a copy of the entry for a value.
    #[must_use]
    pub fn get_entry(&self, value: impl Into<DictKey>) -> Option<DictEntry> {
        self.inner.read().get_entry(value).cloned()
    }

    /// Returns the label of a value, or `default`.
    #[must_use]
    pub fn get_label(&self, value: impl Into<DictKey>, default: &str) -> String {
        self.inner.read().get_label(value, default).to_string()
    }

    /// Returns the label of a value, or the configured default label.
    #[must_use]
    pub fn label(&self, value: impl Into<DictKey>) -> String {
        self.inner.read().label(value).to_string()
    }

    /// Returns the display style of a value, or `default`.
    #[must_use]
    pub fn get_attr_type(&self, value: impl Into<DictKey>, default: &str) -> String {
        self.inner.read().get_attr_type(value, default).to_string()
    }

    /// Returns the display style of a value, or the configured default style.
    #[must_use]
    pub fn attr_type(&self, value: impl Into<DictKey>) -> AttrType {
        self.inner.read().attr_type(value).clone()
    }

    /// Returns a copy of an extension field of a value.
    #[must_use]
    pub fn get_field(&self, value: impl Into<DictKey>, field: &str) -> Option<FieldValue> {
        self.inner.read().get_field(value, field).cloned()
    }

    /// Returns a copy of an extension field of a value, or `default`.
    #[must_use]
    pub fn get_field_or(
        &self,
        value: impl Into<DictKey>,
        field: &str,
        default: FieldValue,
    ) -> FieldValue {
        self.get_field(value, field).unwrap_or(default)
    }

    /// Applies metadata patches atomically with respect to readers.
    pub fn patch_field_value(&self, patches: &PatchMap) {
        self.inner.write().patch_field_value(patches);
    }
}

impl From<Dict> for SharedDict {
    fn from(dict: Dict) -> Self {
        Self::new(dict)
    }
}
