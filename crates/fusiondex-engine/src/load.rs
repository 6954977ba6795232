//! Loading catalogs and combination maps from the data directory.
//!
//! Catalog files are named `{kind}_{lang}.json` and hold a flat
//! `"id" → "Display Name"` object; one file per language is required.

use std::{
  collections::BTreeMap,
  fs,
  ops::RangeInclusive,
  path::Path,
};

use fusiondex_assets::{
  read_combinations,
  report::{CUSTOM_ADDED_FILE, CUSTOM_FUSIONS_FILE},
};
use fusiondex_core::{AdditionMap, Dex, Language, OverrideMap};
use strum::IntoEnumIterator;

use crate::{Error, Result};

/// Catalog of species that can take part in fusions.
pub const FUSION_CATALOG: &str = "infinitedex";
/// Catalog of single-species sprites.
pub const SPRITE_CATALOG: &str = "pokedex";

/// Load the per-language `{kind}_{lang}.json` catalogs from `data_dir`.
pub fn load_dex(data_dir: &Path, kind: &str, range: RangeInclusive<u32>) -> Result<Dex> {
  let mut raw = BTreeMap::new();

  for lang in Language::iter() {
    let path = data_dir.join(format!("{kind}_{lang}.json"));
    let json = fs::read_to_string(&path).map_err(|source| Error::Io {
      path: path.clone(),
      source,
    })?;
    let entries: BTreeMap<String, String> = serde_json::from_str(&json)
      .map_err(|source| Error::MalformedCatalog { path, source })?;
    raw.insert(lang, entries);
  }

  let dex = Dex::from_raw(&raw, range)?;
  tracing::info!(
    kind,
    species = dex.catalog(Language::DEFAULT).len(),
    "catalog loaded"
  );
  Ok(dex)
}

/// Load the hand-made overrides and the additions since the last release.
pub fn load_combinations(data_dir: &Path) -> Result<(OverrideMap, AdditionMap)> {
  let overrides = read_combinations(&data_dir.join(CUSTOM_FUSIONS_FILE))?;
  let additions = read_combinations(&data_dir.join(CUSTOM_ADDED_FILE))?;
  tracing::info!(
    overrides = overrides.total(),
    additions = additions.total(),
    "combination maps loaded"
  );
  Ok((overrides, additions))
}
