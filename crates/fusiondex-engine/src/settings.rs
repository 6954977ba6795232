//! Engine settings, deserialised from the layered configuration.

use std::{ops::RangeInclusive, path::PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Where the data lives and which identifier ranges are in play.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Catalog and combination-map JSON files.
  pub data_dir:        PathBuf,
  /// Root of the fusion/sprite/egg image tree.
  pub assets_dir:      PathBuf,
  /// Highest identifier of the previous release; anything above is new.
  pub previous_max_id: u32,
  pub fusion_min_id:   u32,
  pub fusion_max_id:   u32,
  pub sprite_min_id:   u32,
  pub sprite_max_id:   u32,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      data_dir:        PathBuf::from("data"),
      assets_dir:      PathBuf::from("assets"),
      previous_max_id: 501,
      fusion_min_id:   1,
      fusion_max_id:   501,
      sprite_min_id:   1,
      sprite_max_id:   898,
    }
  }
}

impl Settings {
  pub fn fusion_range(&self) -> RangeInclusive<u32> {
    self.fusion_min_id..=self.fusion_max_id
  }

  pub fn sprite_range(&self) -> RangeInclusive<u32> {
    self.sprite_min_id..=self.sprite_max_id
  }

  /// Reject ranges that cannot hold a single identifier.
  pub fn validate(&self) -> Result<()> {
    for (what, range) in [
      ("fusion", self.fusion_range()),
      ("sprite", self.sprite_range()),
    ] {
      if range.is_empty() || *range.start() == 0 {
        return Err(Error::Settings(format!(
          "{what} range {}..={} must be non-empty and start above zero",
          range.start(),
          range.end()
        )));
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_are_valid() {
    let s = Settings::default();
    s.validate().unwrap();
    assert_eq!(s.fusion_range(), 1..=501);
    assert_eq!(s.sprite_range(), 1..=898);
  }

  #[test]
  fn partial_config_fills_in_defaults() {
    let s: Settings =
      serde_json::from_str(r#"{"data_dir":"/srv/dex","fusion_max_id":565}"#).unwrap();
    assert_eq!(s.data_dir, PathBuf::from("/srv/dex"));
    assert_eq!(s.fusion_range(), 1..=565);
    assert_eq!(s.previous_max_id, 501);
  }

  #[test]
  fn inverted_range_is_rejected() {
    let s = Settings {
      sprite_min_id: 900,
      ..Settings::default()
    };
    assert!(matches!(s.validate(), Err(Error::Settings(_))));
  }

  #[test]
  fn zero_start_is_rejected() {
    let s = Settings {
      fusion_min_id: 0,
      ..Settings::default()
    };
    assert!(s.validate().is_err());
  }
}
