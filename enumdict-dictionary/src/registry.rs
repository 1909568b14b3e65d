/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Registry of dictionaries by type tag.

use crate::config::DEFAULT_LABEL;
use crate::dict::Dict;
use crate::patch::PatchMap;
use enumdict_core::{DictError, DictKey, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// Collection of dictionaries, one per enum family.
#[derive(Debug, Clone, Default)]
pub struct DictRegistry {
    /// Dictionaries indexed by type tag.
    dicts: BTreeMap<String, Dict>,
}

impl DictRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dictionary under its type tag.
    ///
    /// # Errors
    /// Returns `DictError::DuplicateType` if the tag is already registered.
    pub fn register(&mut self, dict: Dict) -> Result<()> {
        let dict_type = dict.get_type().to_string();
        if self.dicts.contains_key(&dict_type) {
            return Err(DictError::DuplicateType(dict_type));
        }
        debug!(dict_type = %dict_type, entries = dict.len(), "registered dictionary");
        self.dicts.insert(dict_type, dict);
        Ok(())
    }

    /// Gets a dictionary by type tag.
    #[must_use]
    pub fn get(&self, dict_type: &str) -> Option<&Dict> {
        self.dicts.get(dict_type)
    }

    /// Gets a mutable dictionary by type tag.
    #[must_use]
    pub fn get_mut(&mut self, dict_type: &str) -> Option<&mut Dict> {
        self.dicts.get_mut(dict_type)
    }

    /// Returns the label of a value in a dictionary.
    ///
    /// Falls back to the dictionary's default label, or [`DEFAULT_LABEL`]
    /// when the type itself is unknown.
    #[must_use]
    pub fn label(&self, dict_type: &str, value: impl Into<DictKey>) -> &str {
        self.get(dict_type).map_or(DEFAULT_LABEL, |dict| dict.label(value))
    }

    /// Applies patches to one dictionary.
    ///
    /// Returns false if no dictionary has that type tag.
    pub fn patch(&mut self, dict_type: &str, patches: &PatchMap) -> bool {
        match self.dicts.get_mut(dict_type) {
            Some(dict) => {
                dict.patch_field_value(patches);
                true
            }
            None => false,
        }
    }

    /// Returns an iterator over the registered type tags, in sorted order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.dicts.keys().map(String::as_str)
    }

    /// Returns an iterator over all dictionaries.
    pub fn dicts(&self) -> impl Iterator<Item = &Dict> {
        self.dicts.values()
    }

    /// Returns the number of registered dictionaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dicts.len()
    }

    /// Returns true if no dictionary is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dicts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::DictEntry;
    use crate::patch::EntryPatch;

    fn registry() -> DictRegistry {
        let mut registry = DictRegistry::new();
        registry
            .register(Dict::new("status", vec![DictEntry::new(1, "Active")]))
            .unwrap();
        registry
            .register(Dict::new("gender", vec![DictEntry::new("f", "Female")]))
            .unwrap();
        registry
    }

    #[test]
    fn test_registry_lookup() {
        let registry = registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.label("status", 1), "Active");
        assert_eq!(registry.label("status", 2), "未定义");
        assert_eq!(registry.label("missing", 1), "未定义");
        assert_eq!(registry.types().collect::<Vec<_>>(), vec!["gender", "status"]);
        assert!(registry.get("gender").is_some());
    }

    #[test]
    fn test_registry_rejects_duplicate_type() {
        let mut registry = registry();
        let err = registry
            .register(Dict::new("status", Vec::new()))
            .unwrap_err();
        assert!(matches!(err, DictError::DuplicateType(ref t) if t == "status"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registry_patch() {
        let mut registry = registry();
        let patches = PatchMap::new().with(1, EntryPatch::new().attr_type("success"));

        assert!(registry.patch("status", &patches));
        assert!(!registry.patch("missing", &patches));
        assert_eq!(
            registry.get("status").unwrap().get_attr_type(1, "info"),
            "success"
        );

        registry
            .get_mut("gender")
            .unwrap()
            .patch_field_value(&PatchMap::new().with("f", EntryPatch::new().field("icon", "venus")));
        assert_eq!(
            registry
                .get("gender")
                .and_then(|d| d.get_field("f", "icon"))
                .and_then(|v| v.as_str()),
            Some("venus")
        );
        assert!(registry.get_mut("missing").is_none());
    }

    #[test]
    fn test_registry_label_without_entry_label() {
        let mut registry = DictRegistry::new();
        registry
            .register(Dict::from_json(r#"{"type":"level","items":[{"value":1}]}"#).unwrap())
            .unwrap();

        assert!(registry.get("level").unwrap().contains(1));
        assert_eq!(registry.label("level", 1), "未定义");
    }
}
