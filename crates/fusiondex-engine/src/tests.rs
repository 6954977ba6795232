//! End-to-end tests for `Engine::load` against a temporary data directory.

use std::{fs, path::Path};

use rand::{SeedableRng, rngs::StdRng};
use tempfile::TempDir;

use crate::{Engine, Error, FusionQuery, Settings, Side};
use fusiondex_core::Language;

const LANGS: [&str; 3] = ["fr", "en", "de"];

fn write(path: &Path, contents: &str) {
  fs::create_dir_all(path.parent().unwrap()).unwrap();
  fs::write(path, contents).unwrap();
}

/// A minimal but complete data + asset tree.
fn fixture() -> (TempDir, Settings) {
  let dir = tempfile::tempdir().unwrap();
  let data = dir.path().join("data");
  let assets = dir.path().join("assets");

  for lang in LANGS {
    write(
      &data.join(format!("infinitedex_{lang}.json")),
      r#"{"1":"Bulbizarre","4":"Salamèche","57":"Colossinge","150":"Mewtwo"}"#,
    );
    write(
      &data.join(format!("pokedex_{lang}.json")),
      r#"{"25":"Pikachu","898":"Sylveroy"}"#,
    );
  }
  write(&data.join("custom_fusions.json"), r#"{"1":[4,150],"150":[57]}"#);
  write(&data.join("custom_diff_added.json"), r#"{"150":[57]}"#);
  write(&assets.join("fusions/custom/150/150.57.png"), "png");

  let settings = Settings {
    data_dir: data,
    assets_dir: assets,
    previous_max_id: 151,
    fusion_min_id: 1,
    fusion_max_id: 150,
    sprite_min_id: 1,
    sprite_max_id: 898,
  };
  (dir, settings)
}

fn rng() -> StdRng { StdRng::seed_from_u64(5) }

#[test]
fn loads_and_answers_fusion_queries() {
  let (dir, settings) = fixture();
  let engine = Engine::load(&settings).unwrap();

  let out = engine
    .fusions
    .fusion(&FusionQuery::new("Mewtwo", "57"), &mut rng());
  assert_eq!(out.ids(), Some((150, 57)));
  assert!(engine.fusions.is_new(&out));
  assert!(engine.fusions.is_custom(&out));
  assert_eq!(
    engine.fusions.asset_path(&out),
    Some(dir.path().join("assets/fusions/custom/150/150.57.png"))
  );

  let swapped = out.swap();
  assert!(!engine.fusions.is_custom(&swapped));
  assert_eq!(
    engine.fusions.asset_path(&swapped),
    Some(dir.path().join("assets/fusions/autogen/57/57.150.png"))
  );
  assert!(!engine.fusions.is_new(&swapped));
}

#[test]
fn names_are_normalized_on_load() {
  let (_dir, settings) = fixture();
  let engine = Engine::load(&settings).unwrap();

  let out = engine
    .fusions
    .fusion(&FusionQuery::new("salameche", "BULBIZARRE").lang(Language::De), &mut rng());
  assert_eq!(out.ids(), Some((4, 1)));
}

#[test]
fn sprites_use_their_own_range() {
  let (_dir, settings) = fixture();
  let engine = Engine::load(&settings).unwrap();

  let sprite = engine.sprites.sprite("898", Language::En, &mut rng());
  assert!(sprite.found());
  let fusion = engine.fusions.fusion(&FusionQuery::new("898", "1"), &mut rng());
  assert!(!fusion.succeeded());
}

#[test]
fn custom_combinations_from_disk() {
  let (_dir, settings) = fixture();
  let engine = Engine::load(&settings).unwrap();

  assert_eq!(engine.fusions.custom_combinations(Side::Head(1)), vec![4, 150]);
  assert_eq!(engine.fusions.custom_combinations(Side::Body(57)), vec![150]);
}

#[test]
fn totem_is_reproducible_after_reload() {
  let (_dir, settings) = fixture();
  let first = Engine::load(&settings).unwrap().fusions.totem(Some(42), Language::Fr);
  let second = Engine::load(&settings).unwrap().fusions.totem(Some(42), Language::Fr);
  assert_eq!(first, second);
}

#[test]
fn missing_language_file_aborts_load() {
  let (_dir, settings) = fixture();
  fs::remove_file(settings.data_dir.join("pokedex_de.json")).unwrap();

  let err = Engine::load(&settings).unwrap_err();
  assert!(matches!(err, Error::Io { .. }), "{err}");
  assert!(err.to_string().contains("pokedex_de.json"));
}

#[test]
fn malformed_catalog_aborts_load() {
  let (_dir, settings) = fixture();
  write(&settings.data_dir.join("infinitedex_en.json"), r#"{"one":"Bulbasaur"}"#);

  let err = Engine::load(&settings).unwrap_err();
  assert!(
    matches!(err, Error::Core(fusiondex_core::Error::InvalidId { .. })),
    "{err}"
  );
}

#[test]
fn non_object_catalog_aborts_load() {
  let (_dir, settings) = fixture();
  write(&settings.data_dir.join("infinitedex_fr.json"), "[1, 2, 3]");

  let err = Engine::load(&settings).unwrap_err();
  assert!(matches!(err, Error::MalformedCatalog { .. }), "{err}");
}

#[test]
fn language_missing_a_species_aborts_load() {
  let (_dir, settings) = fixture();
  write(
    &settings.data_dir.join("infinitedex_en.json"),
    r#"{"1":"Bulbasaur","4":"Charmander","150":"Mewtwo"}"#,
  );

  let err = Engine::load(&settings).unwrap_err();
  assert!(
    matches!(
      err,
      Error::Core(fusiondex_core::Error::InconsistentIds {
        id: 57,
        present: Language::Fr,
        absent: Language::En,
      })
    ),
    "{err}"
  );
}

#[test]
fn override_with_unknown_head_aborts_load() {
  let (_dir, settings) = fixture();
  write(&settings.data_dir.join("custom_fusions.json"), r#"{"2":[1]}"#);

  let err = Engine::load(&settings).unwrap_err();
  assert!(
    matches!(
      err,
      Error::Core(fusiondex_core::Error::UnknownCombination { head: 2, .. })
    ),
    "{err}"
  );
}

#[test]
fn invalid_settings_abort_load() {
  let (_dir, mut settings) = fixture();
  settings.fusion_max_id = 0;
  assert!(matches!(Engine::load(&settings), Err(Error::Settings(_))));
}
