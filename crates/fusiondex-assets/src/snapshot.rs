//! Asset-pack snapshots and the asymmetric diff between two of them.

use std::{path::Path, sync::LazyLock};

use fusiondex_core::{AdditionMap, CombinationMap};
use regex::Regex;
use walkdir::WalkDir;

use crate::{Error, Result};

/// Every `(head, body)` combination found under a directory tree.
pub type Snapshot = CombinationMap;

static FUSION_FILE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^([0-9]+)\.([0-9]+)\.png$").expect("static pattern")
});

/// Extract `(head, body)` from a fusion file name such as `6.25.png`.
///
/// Anything else (including identifiers that overflow `u32`) yields `None`.
pub fn parse_fusion_file_name(name: &str) -> Option<(u32, u32)> {
  let caps = FUSION_FILE.captures(name)?;
  let head = caps[1].parse().ok()?;
  let body = caps[2].parse().ok()?;
  Some((head, body))
}

/// Walk `dir` recursively and collect every fusion file it contains.
///
/// Files that do not follow the `{head}.{body}.png` naming are skipped;
/// sprite packs routinely ship unrelated files alongside the images.
pub fn snapshot(dir: &Path) -> Result<Snapshot> {
  if !dir.is_dir() {
    return Err(Error::NotADirectory(dir.to_path_buf()));
  }

  let mut snapshot = Snapshot::new();
  let mut skipped = 0usize;

  for entry in WalkDir::new(dir).sort_by_file_name() {
    let entry = entry?;
    if !entry.file_type().is_file() {
      continue;
    }
    match entry.file_name().to_str().and_then(parse_fusion_file_name) {
      Some((head, body)) => snapshot.insert(head, body),
      None => {
        skipped += 1;
        tracing::debug!(path = %entry.path().display(), "skipping unrelated file");
      }
    }
  }

  tracing::info!(
    dir = %dir.display(),
    heads = snapshot.len(),
    fusions = snapshot.total(),
    skipped,
    "snapshot taken"
  );
  Ok(snapshot)
}

/// Combinations present in `new` but absent from `old`.
///
/// Call with the arguments swapped to get removals. Neither input is
/// modified.
pub fn diff(old: &Snapshot, new: &Snapshot) -> AdditionMap {
  new.difference(old)
}
