/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for EnumDict.
//!
//! Lookups never fail: a missing value or field degrades to a default. The
//! errors below only cover the fallible edges of the library: strict
//! construction, dictionary registration and the JSON surface.

use thiserror::Error;

/// Result type alias using [`DictError`] as the error type.
pub type Result<T> = std::result::Result<T, DictError>;

/// Top-level error type for all EnumDict operations.
#[derive(Debug, Error)]
pub enum DictError {
    /// Two entries of the same dictionary stringify to the same key.
    #[error("duplicate value '{key}' in dictionary '{dict_type}'")]
    DuplicateValue {
        /// Type tag of the dictionary being built.
        dict_type: String,
        /// The stringified value that occurred more than once.
        key: String,
    },

    /// A dictionary with the same type tag is already registered.
    #[error("dictionary type already registered: {0}")]
    DuplicateType(String),

    /// Malformed JSON definition or patch.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_value_display() {
        let err = DictError::DuplicateValue {
            dict_type: "status".to_string(),
            key: "1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate value '1' in dictionary 'status'"
        );
    }

    #[test]
    fn test_duplicate_type_display() {
        let err = DictError::DuplicateType("status".to_string());
        assert_eq!(err.to_string(), "dictionary type already registered: status");
    }

    #[test]
    fn test_dict_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: DictError = json_err.into();
        assert!(matches!(err, DictError::Json(_)));
        assert!(err.to_string().starts_with("json error: "));
    }
}
