//! Core types for the fusiondex lookup engine.
//!
//! Per-language identifier/name catalogs, query resolution, and the
//! head→bodies combination maps shared by the asset tooling and the fusion
//! engine. This crate does no filesystem I/O: catalogs are
//! built from already-parsed data and are read-only once constructed.

pub mod catalog;
pub mod combos;
pub mod dex;
pub mod error;
pub mod language;
pub mod normalize;
pub mod resolve;

pub use catalog::{Catalog, Key};
pub use combos::{AdditionMap, CombinationMap, OverrideMap, RemovalMap};
pub use dex::Dex;
pub use error::{Error, Result};
pub use language::Language;
pub use normalize::normalize;
pub use resolve::{Resolution, WILDCARD_QUERIES, resolve, similarity};
