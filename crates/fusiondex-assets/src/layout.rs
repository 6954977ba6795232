//! Where assets live, and the seam for asking whether one exists.
//!
//! ```text
//! {root}/fusions/custom/{head}/{head}.{body}.png    hand-made overrides
//! {root}/fusions/autogen/{head}/{head}.{body}.png   generated baseline
//! {root}/sprites/base/{id}.png
//! {root}/sprites/shiny/{id}.png
//! {root}/eggs/{head}.png                            eggs/000.png is the fallback
//! ```

use std::{
  collections::HashSet,
  path::{Path, PathBuf},
};

// ─── Probe ───────────────────────────────────────────────────────────────────

/// Answers "does this asset exist?". The engine never opens the file itself.
pub trait AssetProbe: Send + Sync {
  fn exists(&self, path: &Path) -> bool;
}

/// Checks the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl AssetProbe for FsProbe {
  fn exists(&self, path: &Path) -> bool { path.is_file() }
}

/// A fixed set of known paths; handy for tests and dry runs.
impl AssetProbe for HashSet<PathBuf> {
  fn exists(&self, path: &Path) -> bool { self.contains(path) }
}

impl<P: AssetProbe + ?Sized> AssetProbe for &P {
  fn exists(&self, path: &Path) -> bool { (**self).exists(path) }
}

// ─── Layout ──────────────────────────────────────────────────────────────────

/// File name of a fusion image, e.g. `6.25.png`.
pub fn fusion_file_name(head: u32, body: u32) -> String {
  format!("{head}.{body}.png")
}

/// Path builder rooted at an asset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
  root: PathBuf,
}

impl AssetLayout {
  pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

  pub fn root(&self) -> &Path { &self.root }

  pub fn custom_dir(&self) -> PathBuf {
    self.root.join("fusions").join("custom")
  }

  pub fn autogen_dir(&self) -> PathBuf {
    self.root.join("fusions").join("autogen")
  }

  pub fn sprites_base_dir(&self) -> PathBuf {
    self.root.join("sprites").join("base")
  }

  pub fn sprites_shiny_dir(&self) -> PathBuf {
    self.root.join("sprites").join("shiny")
  }

  pub fn eggs_dir(&self) -> PathBuf { self.root.join("eggs") }

  pub fn custom_fusion(&self, head: u32, body: u32) -> PathBuf {
    self
      .custom_dir()
      .join(head.to_string())
      .join(fusion_file_name(head, body))
  }

  pub fn autogen_fusion(&self, head: u32, body: u32) -> PathBuf {
    self
      .autogen_dir()
      .join(head.to_string())
      .join(fusion_file_name(head, body))
  }

  pub fn sprite(&self, id: u32) -> PathBuf {
    self.sprites_base_dir().join(format!("{id}.png"))
  }

  pub fn shiny_sprite(&self, id: u32) -> PathBuf {
    self.sprites_shiny_dir().join(format!("{id}.png"))
  }

  pub fn egg(&self, head: u32) -> PathBuf {
    self.eggs_dir().join(format!("{head}.png"))
  }

  pub fn default_egg(&self) -> PathBuf { self.eggs_dir().join("000.png") }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fusion_paths_are_grouped_by_head() {
    let layout = AssetLayout::new("assets");
    assert_eq!(
      layout.custom_fusion(6, 25),
      Path::new("assets/fusions/custom/6/6.25.png")
    );
    assert_eq!(
      layout.autogen_fusion(6, 25),
      Path::new("assets/fusions/autogen/6/6.25.png")
    );
  }

  #[test]
  fn sprite_and_egg_paths() {
    let layout = AssetLayout::new("assets");
    assert_eq!(layout.sprite(25), Path::new("assets/sprites/base/25.png"));
    assert_eq!(
      layout.shiny_sprite(25),
      Path::new("assets/sprites/shiny/25.png")
    );
    assert_eq!(layout.egg(4), Path::new("assets/eggs/4.png"));
    assert_eq!(layout.default_egg(), Path::new("assets/eggs/000.png"));
  }

  #[test]
  fn set_probe_matches_exact_paths() {
    let layout = AssetLayout::new("assets");
    let known: HashSet<PathBuf> = [layout.custom_fusion(1, 2)].into();
    assert!(known.exists(&layout.custom_fusion(1, 2)));
    assert!(!known.exists(&layout.custom_fusion(2, 1)));
    assert!((&known).exists(&layout.custom_fusion(1, 2)));
  }

  #[test]
  fn fs_probe_only_accepts_files() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("1.2.png");
    std::fs::write(&file, b"png").unwrap();

    assert!(FsProbe.exists(&file));
    assert!(!FsProbe.exists(dir.path()));
    assert!(!FsProbe.exists(&dir.path().join("missing.png")));
  }
}
