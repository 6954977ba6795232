//! Single-species sprite lookups.

use std::path::PathBuf;

use fusiondex_assets::AssetLayout;
use fusiondex_core::{Dex, Language, Resolution};
use rand::Rng;
use serde::Serialize;

/// The result of a sprite lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sprite {
  pub lookup: Resolution,
  path:       Option<PathBuf>,
  shiny_path: Option<PathBuf>,
}

impl Sprite {
  pub fn found(&self) -> bool { self.lookup.is_resolved() }

  pub fn path(&self) -> Option<&PathBuf> { self.path.as_ref() }

  pub fn shiny_path(&self) -> Option<&PathBuf> { self.shiny_path.as_ref() }
}

/// Sprite lookups over the (larger) sprite catalog.
#[derive(Debug)]
pub struct SpriteCatalog {
  dex:    Dex,
  layout: AssetLayout,
}

impl SpriteCatalog {
  pub fn new(dex: Dex, layout: AssetLayout) -> Self { Self { dex, layout } }

  pub fn dex(&self) -> &Dex { &self.dex }

  pub fn sprite<R>(&self, query: &str, lang: Language, rng: &mut R) -> Sprite
  where
    R: Rng + ?Sized,
  {
    let lookup = self.dex.resolve(query, lang, rng);
    let id = lookup.id();
    Sprite {
      path: id.map(|id| self.layout.sprite(id)),
      shiny_path: id.map(|id| self.layout.shiny_sprite(id)),
      lookup,
    }
  }
}

#[cfg(test)]
mod tests {
  use std::{collections::BTreeMap, path::Path};

  use rand::{SeedableRng, rngs::StdRng};
  use strum::IntoEnumIterator;

  use super::*;

  fn catalog() -> SpriteCatalog {
    let raw: BTreeMap<Language, BTreeMap<String, String>> = Language::iter()
      .map(|lang| {
        let entries = [("25", "Pikachu"), ("898", "Calyrex")]
          .iter()
          .map(|(k, v)| (k.to_string(), v.to_string()))
          .collect();
        (lang, entries)
      })
      .collect();
    SpriteCatalog::new(
      Dex::from_raw(&raw, 1..=898).unwrap(),
      AssetLayout::new("assets"),
    )
  }

  #[test]
  fn found_sprite_has_both_paths() {
    let s = catalog().sprite("Calyrex", Language::De, &mut StdRng::seed_from_u64(1));
    assert!(s.found());
    assert_eq!(
      s.path().map(PathBuf::as_path),
      Some(Path::new("assets/sprites/base/898.png"))
    );
    assert_eq!(
      s.shiny_path().map(PathBuf::as_path),
      Some(Path::new("assets/sprites/shiny/898.png"))
    );
  }

  #[test]
  fn missing_sprite_has_no_paths() {
    let s = catalog().sprite("pikachoo", Language::Fr, &mut StdRng::seed_from_u64(1));
    assert!(!s.found());
    assert_eq!(s.path(), None);
    assert_eq!(s.shiny_path(), None);
    assert_eq!(s.lookup.guess().map(|(g, _)| g), Some("pikachu"));
  }

  #[test]
  fn wildcard_sprite_is_always_found() {
    let c = catalog();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..10 {
      assert!(c.sprite("?", Language::En, &mut rng).found());
    }
  }
}
