/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # EnumDict Dictionary
//!
//! Label and display metadata lookup for enumerated value sets.
//!
//! This crate provides:
//! - **Entries**: `DictEntry` with immutable identity fields and typed extension fields
//! - **Dictionaries**: `Dict`, indexed by the stringified raw value
//! - **Patches**: `EntryPatch` and `PatchMap` for post-construction metadata enrichment
//! - **Sharing**: `SharedDict` for concurrent readers and patching writers
//! - **Registry**: `DictRegistry` holding one dictionary per enum family

pub mod config;
pub mod dict;
pub mod entry;
pub mod patch;
pub mod registry;
pub mod shared;

pub use config::{DEFAULT_LABEL, DictConfig};
pub use dict::Dict;
pub use entry::{DictEntry, RESERVED_FIELDS};
pub use patch::{EntryPatch, PatchMap};
pub use registry::DictRegistry;
pub use shared::SharedDict;
