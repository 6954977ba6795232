//! Full change report between two releases of the fusion asset tree.
//!
//! Both categories (generated and hand-made) are diffed in both directions.
//! Additions feed the "new!" flag shown to players; removals let operators
//! catch regressions in a sprite-pack import.

use std::{
  fs,
  path::{Path, PathBuf},
};

use fusiondex_core::{AdditionMap, CombinationMap, OverrideMap, RemovalMap};

use crate::{AssetLayout, Error, Result, Snapshot, diff, snapshot};

pub const CUSTOM_FUSIONS_FILE: &str = "custom_fusions.json";
pub const AUTOGEN_ADDED_FILE: &str = "autogen_diff_added.json";
pub const AUTOGEN_REMOVED_FILE: &str = "autogen_diff_removed.json";
pub const CUSTOM_ADDED_FILE: &str = "custom_diff_added.json";
pub const CUSTOM_REMOVED_FILE: &str = "custom_diff_removed.json";

/// Additions and removals for one asset category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDiff {
  pub added:   AdditionMap,
  pub removed: RemovalMap,
}

impl CategoryDiff {
  pub fn between(old: &Snapshot, new: &Snapshot) -> Self {
    Self {
      added:   diff(old, new),
      removed: diff(new, old),
    }
  }
}

/// The output of one offline diff run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffReport {
  pub autogen:        CategoryDiff,
  pub custom:         CategoryDiff,
  /// Every hand-made combination in the new release.
  pub custom_fusions: OverrideMap,
}

impl DiffReport {
  /// Snapshot both categories of both asset trees and diff them.
  ///
  /// Each release root must exist. A release without one of the category
  /// directories counts as having no fusions in that category.
  pub fn compute(old: &AssetLayout, new: &AssetLayout) -> Result<Self> {
    for layout in [old, new] {
      if !layout.root().is_dir() {
        return Err(Error::NotADirectory(layout.root().to_path_buf()));
      }
    }

    let autogen_old = category_snapshot(&old.autogen_dir())?;
    let autogen_new = category_snapshot(&new.autogen_dir())?;
    let custom_old = category_snapshot(&old.custom_dir())?;
    let custom_new = category_snapshot(&new.custom_dir())?;

    let report = Self {
      autogen:        CategoryDiff::between(&autogen_old, &autogen_new),
      custom:         CategoryDiff::between(&custom_old, &custom_new),
      custom_fusions: custom_new,
    };

    tracing::info!(
      "diff: +{}/-{} autogen and +{}/-{} custom fusions",
      report.autogen.added.total(),
      report.autogen.removed.total(),
      report.custom.added.total(),
      report.custom.removed.total(),
    );
    Ok(report)
  }

  /// Write the five JSON data files into `out_dir`, creating it if needed.
  /// Returns the written paths.
  pub fn write(&self, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(Error::io(out_dir))?;

    let files: [(&str, &CombinationMap); 5] = [
      (CUSTOM_FUSIONS_FILE, &self.custom_fusions),
      (AUTOGEN_ADDED_FILE, &self.autogen.added),
      (AUTOGEN_REMOVED_FILE, &self.autogen.removed),
      (CUSTOM_ADDED_FILE, &self.custom.added),
      (CUSTOM_REMOVED_FILE, &self.custom.removed),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, map) in files {
      let path = out_dir.join(name);
      write_combinations(&path, map)?;
      written.push(path);
    }
    Ok(written)
  }
}

fn category_snapshot(dir: &Path) -> Result<Snapshot> {
  if dir.exists() {
    snapshot(dir)
  } else {
    tracing::warn!(dir = %dir.display(), "category directory missing, treating as empty");
    Ok(Snapshot::new())
  }
}

/// Serialize a combination map to `path`.
pub fn write_combinations(path: &Path, map: &CombinationMap) -> Result<()> {
  let json = serde_json::to_string(map)?;
  fs::write(path, json).map_err(Error::io(path))
}

/// Read a combination map previously written by [`write_combinations`].
pub fn read_combinations(path: &Path) -> Result<CombinationMap> {
  let json = fs::read_to_string(path).map_err(Error::io(path))?;
  Ok(CombinationMap::from_json(&json)?)
}
