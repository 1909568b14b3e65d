/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # EnumDict
//!
//! Runtime lookup of labels and display metadata for enumerated value sets.
//!
//! Code generators emit one [`Dict`](dictionary::Dict) per enum family (order
//! status, gender, priority, ...). Application code then resolves raw values
//! to labels and style hints without knowing the enum at compile time.
//!
//! ## Features
//!
//! - **Normalized keys**: `1` and `"1"` address the same entry
//! - **Never fails**: unknown values and fields degrade to defaults
//! - **Typed extensions**: extra entry fields are strings, numbers or booleans
//! - **Controlled patching**: metadata can be enriched, identity fields cannot change
//! - **Thread-safe sharing**: `SharedDict` applies each patch atomically
//!
//! ## Quick Start
//!
//! ```rust
//! use enumdict::prelude::*;
//!
//! let mut dict = Dict::new(
//!     "status",
//!     vec![
//!         DictEntry::new(0, "Inactive").with_attr_type(AttrType::Danger),
//!         DictEntry::new(1, "Active").with_attr_type(AttrType::Success),
//!     ],
//! );
//!
//! assert_eq!(dict.label("1"), "Active");
//! assert_eq!(dict.get_label(2, "N/A"), "N/A");
//!
//! dict.patch_field_value(&PatchMap::new().with(1, EntryPatch::new().field("icon", "check")));
//! assert_eq!(dict.get_field(1, "icon").and_then(FieldValue::as_str), Some("check"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Value types, display hints and error definitions
//! - [`dictionary`]: Entries, dictionaries, patches and the registry

pub mod core {
    //! Value types, display hints and error definitions.
    pub use enumdict_core::*;
}

pub mod dictionary {
    //! Entries, dictionaries, patches and the registry.
    pub use enumdict_dictionary::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use enumdict_core::{
        AttrType, DictError, DictKey, DictValue, FieldValue, Result, TypeStyle,
    };

    // Dictionary
    pub use enumdict_dictionary::{
        DEFAULT_LABEL, Dict, DictConfig, DictEntry, DictRegistry, EntryPatch, PatchMap,
        SharedDict,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let dict = Dict::new("status", vec![DictEntry::new(1, "Active")]);
        let _shared = SharedDict::new(dict.clone());
        let _registry = DictRegistry::new();
        assert_eq!(dict.label(1), "Active");
        assert_eq!(DEFAULT_LABEL, "未定义");
    }

    #[test]
    fn test_type_style_via_prelude() {
        assert_eq!(TypeStyle::SnakeCase.apply("OrderStatus"), "order_status");
    }
}
