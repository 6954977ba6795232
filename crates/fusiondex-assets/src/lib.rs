//! Asset-tree handling for fusiondex.
//!
//! Knows where fusion, sprite and egg images live, how to ask whether one
//! exists, and how to scan two releases of the fusion tree into a
//! [`DiffReport`]. Never touches pixels; image work belongs to whatever
//! consumes the resolved paths.

pub mod error;
pub mod import;
pub mod layout;
pub mod report;
pub mod snapshot;

pub use error::{Error, Result};
pub use import::import_custom;
pub use layout::{AssetLayout, AssetProbe, FsProbe};
pub use report::{CategoryDiff, DiffReport, read_combinations, write_combinations};
pub use snapshot::{Snapshot, diff, parse_fusion_file_name, snapshot};
