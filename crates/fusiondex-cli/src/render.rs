//! Human-readable and JSON rendering of lookup results.

use fusiondex_assets::AssetProbe;
use fusiondex_core::Resolution;
use fusiondex_engine::{FusionCatalog, FusionOutcome, Sprite};
use serde_json::{Value, json};

/// One line describing a resolution, including the suggestion on failure.
pub fn resolution(r: &Resolution) -> String {
  match r {
    Resolution::Resolved { id, name } => format!("#{id} {name}"),
    Resolution::Failed { query, .. } => match r.guess() {
      Some((guess, score)) => {
        format!("no match for {query:?} (closest: {guess}, {score}%)")
      }
      None => format!("no match for {query:?}"),
    },
  }
}

pub fn fusion_text<P: AssetProbe>(
  catalog: &FusionCatalog<P>,
  outcome: &FusionOutcome,
) -> String {
  let mut lines = vec![
    format!("head: {}", resolution(&outcome.head)),
    format!("body: {}", resolution(&outcome.body)),
  ];

  if let Some(path) = catalog.asset_path(outcome) {
    let mut tags = Vec::new();
    if catalog.is_custom(outcome) {
      tags.push("custom");
    }
    if catalog.is_new(outcome) {
      tags.push("new!");
    }
    let tags = if tags.is_empty() {
      String::new()
    } else {
      format!(" [{}]", tags.join(", "))
    };
    lines.push(format!("sprite: {}{tags}", path.display()));
  }
  if let Some(egg) = catalog.egg_path(outcome) {
    lines.push(format!("egg: {}", egg.display()));
  }

  lines.join("\n")
}

pub fn fusion_json<P: AssetProbe>(
  catalog: &FusionCatalog<P>,
  outcome: &FusionOutcome,
) -> Value {
  json!({
    "fusion": outcome,
    "path": catalog.asset_path(outcome),
    "egg": catalog.egg_path(outcome),
    "custom": catalog.is_custom(outcome),
    "new": catalog.is_new(outcome),
  })
}

pub fn sprite_text(sprite: &Sprite) -> String {
  let mut lines = vec![resolution(&sprite.lookup)];
  if let Some(path) = sprite.path() {
    lines.push(format!("sprite: {}", path.display()));
  }
  if let Some(path) = sprite.shiny_path() {
    lines.push(format!("shiny: {}", path.display()));
  }
  lines.join("\n")
}

pub fn ids_text(ids: &[u32]) -> String {
  if ids.is_empty() {
    return "none".to_string();
  }
  ids.iter().map(u32::to_string).collect::<Vec<_>>().join(" ")
}
