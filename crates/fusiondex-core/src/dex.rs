//! A full set of per-language catalogs over one identifier range.

use std::{collections::BTreeMap, ops::RangeInclusive};

use rand::Rng;
use strum::{EnumCount, IntoEnumIterator};

use crate::{Catalog, Error, Language, Resolution, Result, resolve};

/// One [`Catalog`] per [`Language`], all scoped to the same identifier range.
///
/// Construction is the only way to populate a `Dex`; afterwards it is
/// read-only and can be shared freely between concurrent callers.
#[derive(Debug, Clone)]
pub struct Dex {
  catalogs: [Catalog; Language::COUNT],
  range:    RangeInclusive<u32>,
}

impl Dex {
  /// Assemble a dex from prebuilt catalogs. Every language must be present,
  /// every identifier must fall inside `range`, and all languages must
  /// share one identifier set.
  pub fn new(
    mut catalogs: BTreeMap<Language, Catalog>,
    range: RangeInclusive<u32>,
  ) -> Result<Self> {
    if range.is_empty() {
      return Err(Error::EmptyRange {
        min: *range.start(),
        max: *range.end(),
      });
    }
    for (lang, catalog) in &catalogs {
      if let Some(id) = catalog.ids().find(|id| !range.contains(id)) {
        return Err(Error::IdOutOfRange {
          lang: *lang,
          id,
          min: *range.start(),
          max: *range.end(),
        });
      }
    }

    let mut take =
      |lang: Language| catalogs.remove(&lang).ok_or(Error::MissingLanguage(lang));
    let catalogs = [take(Language::Fr)?, take(Language::En)?, take(Language::De)?];

    let dex = Self { catalogs, range };
    dex.check_consistent_ids()?;
    Ok(dex)
  }

  fn check_consistent_ids(&self) -> Result<()> {
    let reference = self.catalog(Language::DEFAULT);
    for lang in Language::iter() {
      let catalog = self.catalog(lang);
      if let Some(id) = reference.ids().find(|id| !catalog.contains(*id)) {
        return Err(Error::InconsistentIds {
          id,
          present: Language::DEFAULT,
          absent: lang,
        });
      }
      if let Some(id) = catalog.ids().find(|id| !reference.contains(*id)) {
        return Err(Error::InconsistentIds {
          id,
          present: lang,
          absent: Language::DEFAULT,
        });
      }
    }
    Ok(())
  }

  /// Build a dex from raw `"id" → "Display Name"` maps, one per language.
  pub fn from_raw(
    raw: &BTreeMap<Language, BTreeMap<String, String>>,
    range: RangeInclusive<u32>,
  ) -> Result<Self> {
    let catalogs = raw
      .iter()
      .map(|(lang, entries)| {
        Catalog::from_raw(*lang, entries, &range).map(|c| (*lang, c))
      })
      .collect::<Result<BTreeMap<_, _>>>()?;
    Self::new(catalogs, range)
  }

  pub fn catalog(&self, lang: Language) -> &Catalog {
    &self.catalogs[lang.index()]
  }

  pub fn range(&self) -> RangeInclusive<u32> { self.range.clone() }

  pub fn resolve<R>(&self, query: &str, lang: Language, rng: &mut R) -> Resolution
  where
    R: Rng + ?Sized,
  {
    let resolution = resolve(self.catalog(lang), query, rng);
    tracing::debug!(query, %lang, ?resolution, "resolved");
    resolution
  }

  /// Every species name in `lang`, ascending by identifier.
  pub fn names(&self, lang: Language) -> impl Iterator<Item = &str> {
    self.catalog(lang).all_names()
  }

  /// Whether `id` exists in the default-language catalog.
  pub fn contains_id(&self, id: u32) -> bool {
    self.catalog(Language::DEFAULT).contains(id)
  }
}
