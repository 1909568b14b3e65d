/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # EnumDict Core
//!
//! Core value types, display hints and error definitions for EnumDict.
//!
//! This crate provides the building blocks shared by the dictionary crates:
//! - **Value types**: `DictKey`, `DictValue` and `FieldValue`
//! - **Display hints**: `AttrType`
//! - **Naming**: `TypeStyle` for type tag conventions
//! - **Error types**: Unified error handling with `thiserror`
//!
//! ## Key normalization
//!
//! Every lookup goes through [`DictKey`], the stringified raw value, so the
//! numeric and string forms of the same value address the same entry.

pub mod attr;
pub mod error;
pub mod style;
pub mod value;

pub use attr::AttrType;
pub use error::{DictError, Result};
pub use style::TypeStyle;
pub use value::{DictKey, DictValue, FieldValue};
