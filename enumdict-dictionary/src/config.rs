/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Dictionary configuration.
//!
//! This module provides the fallbacks and naming options of a [`Dict`].
//!
//! [`Dict`]: crate::dict::Dict

use enumdict_core::{AttrType, TypeStyle};

/// Label returned for values that are not in the dictionary ("undefined").
pub const DEFAULT_LABEL: &str = "未定义";

/// Configuration for an enum dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictConfig {
    /// Label used by [`Dict::label`] when a value is unknown.
    ///
    /// [`Dict::label`]: crate::dict::Dict::label
    pub default_label: String,
    /// Style used by [`Dict::attr_type`] when a value is unknown or unstyled.
    ///
    /// [`Dict::attr_type`]: crate::dict::Dict::attr_type
    pub default_attr_type: AttrType,
    /// Naming style applied to the type tag at construction.
    pub type_style: TypeStyle,
}

impl DictConfig {
    /// Creates a configuration with the default fallbacks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_label: DEFAULT_LABEL.to_string(),
            default_attr_type: AttrType::Info,
            type_style: TypeStyle::Preserve,
        }
    }

    /// Sets the fallback label.
    #[must_use]
    pub fn with_default_label(mut self, label: impl Into<String>) -> Self {
        self.default_label = label.into();
        self
    }

    /// Sets the fallback display style.
    #[must_use]
    pub fn with_default_attr_type(mut self, attr_type: impl Into<AttrType>) -> Self {
        self.default_attr_type = attr_type.into();
        self
    }

    /// Sets the type tag naming style.
    #[must_use]
    pub const fn with_type_style(mut self, style: TypeStyle) -> Self {
        self.type_style = style;
        self
    }
}

impl Default for DictConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = DictConfig::default();
        assert_eq!(config.default_label, "未定义");
        assert_eq!(config.default_attr_type, AttrType::Info);
        assert_eq!(config.type_style, TypeStyle::Preserve);
    }

    #[test]
    fn test_config_builder() {
        let config = DictConfig::new()
            .with_default_label("undefined")
            .with_default_attr_type("warning")
            .with_type_style(TypeStyle::SnakeCase);
        assert_eq!(config.default_label, "undefined");
        assert_eq!(config.default_attr_type, AttrType::Warning);
        assert_eq!(config.type_style, TypeStyle::SnakeCase);
    }
}
