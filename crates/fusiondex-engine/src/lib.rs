//! The fusiondex lookup engine.
//!
//! Loads the species and sprite catalogs plus the combination maps once, at
//! startup, and answers fusion, totem and sprite queries against them. A
//! loaded [`Engine`] is read-only; share it by reference across requests.

pub mod error;
pub mod fusion;
pub mod load;
pub mod settings;
pub mod sprite;

pub use error::{Error, Result};
pub use fusion::{FusionCatalog, FusionOutcome, FusionQuery, Side};
pub use settings::Settings;
pub use sprite::{Sprite, SpriteCatalog};

use fusiondex_assets::{AssetLayout, FsProbe};
use load::{FUSION_CATALOG, SPRITE_CATALOG, load_combinations, load_dex};

/// Everything a command layer needs, loaded from disk.
#[derive(Debug)]
pub struct Engine {
  pub fusions: FusionCatalog<FsProbe>,
  pub sprites: SpriteCatalog,
}

impl Engine {
  /// Load every catalog and combination map named by `settings`. Any
  /// malformed or missing file aborts the whole load.
  pub fn load(settings: &Settings) -> Result<Self> {
    settings.validate()?;

    let data_dir = &settings.data_dir;
    let layout = AssetLayout::new(&settings.assets_dir);

    let fusion_dex = load_dex(data_dir, FUSION_CATALOG, settings.fusion_range())?;
    let sprite_dex = load_dex(data_dir, SPRITE_CATALOG, settings.sprite_range())?;
    let (overrides, additions) = load_combinations(data_dir)?;

    let fusions = FusionCatalog::new(
      fusion_dex,
      overrides,
      additions,
      settings.previous_max_id,
      layout.clone(),
      FsProbe,
    )?;
    let sprites = SpriteCatalog::new(sprite_dex, layout);

    Ok(Self { fusions, sprites })
  }
}

#[cfg(test)]
mod tests;
