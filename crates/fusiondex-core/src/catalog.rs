//! Bijective identifier ↔ name catalog for a single language.
//!
//! Backed by two unidirectional maps kept in lockstep. Every mutation goes
//! through [`Catalog::insert`], which evicts stale links in both directions
//! before installing the new pair, so no identifier ever maps to two names
//! and no name to two identifiers.

use std::{
  collections::{BTreeMap, HashMap},
  ops::RangeInclusive,
};

use crate::{Error, Language, Result, normalize};

// ─── Key ─────────────────────────────────────────────────────────────────────

/// Either side of a catalog mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
  Id(u32),
  Name(&'a str),
}

impl From<u32> for Key<'_> {
  fn from(id: u32) -> Self { Self::Id(id) }
}

impl<'a> From<&'a str> for Key<'a> {
  fn from(name: &'a str) -> Self { Self::Name(name) }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// A name ↔ identifier bijection. Names are stored in normalized form; see
/// [`normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
  by_id:   BTreeMap<u32, String>,
  by_name: HashMap<String, u32>,
}

impl Catalog {
  pub fn new() -> Self { Self::default() }

  /// Build a catalog from a raw `"id" → "Display Name"` map as found in the
  /// per-language data files.
  ///
  /// Every key must be a positive decimal integer inside `range`, and every
  /// name must remain unique after normalization.
  pub fn from_raw<'a, I>(
    lang: Language,
    raw: I,
    range: &RangeInclusive<u32>,
  ) -> Result<Self>
  where
    I: IntoIterator<Item = (&'a String, &'a String)>,
  {
    let mut catalog = Self::new();

    for (key, display) in raw {
      let id = parse_id(lang, key)?;
      if !range.contains(&id) {
        return Err(Error::IdOutOfRange {
          lang,
          id,
          min: *range.start(),
          max: *range.end(),
        });
      }
      if catalog.by_id.contains_key(&id) {
        return Err(Error::DuplicateId { lang, id });
      }

      let name = normalize(display);
      if name.is_empty() {
        return Err(Error::EmptyName { lang, id });
      }
      if let Some(&first) = catalog.by_name.get(&name) {
        return Err(Error::DuplicateName {
          lang,
          name,
          first,
          second: id,
        });
      }

      catalog.insert(name, id);
    }

    Ok(catalog)
  }

  /// Install `name ↔ id`, first removing any existing link held by either
  /// the name or the identifier.
  pub fn insert(&mut self, name: impl Into<String>, id: u32) {
    let name = name.into();

    if let Some(old_id) = self.by_name.remove(&name) {
      self.by_id.remove(&old_id);
    }
    if let Some(old_name) = self.by_id.remove(&id) {
      self.by_name.remove(&old_name);
    }

    self.by_name.insert(name.clone(), id);
    self.by_id.insert(id, name);
  }

  pub fn get_by_id(&self, id: u32) -> Option<&str> {
    self.by_id.get(&id).map(String::as_str)
  }

  pub fn get_by_name(&self, name: &str) -> Option<u32> {
    self.by_name.get(name).copied()
  }

  pub fn contains<'a>(&self, key: impl Into<Key<'a>>) -> bool {
    match key.into() {
      Key::Id(id) => self.by_id.contains_key(&id),
      Key::Name(name) => self.by_name.contains_key(name),
    }
  }

  /// All names, in ascending identifier order.
  pub fn all_names(&self) -> impl Iterator<Item = &str> {
    self.by_id.values().map(String::as_str)
  }

  /// All identifiers, ascending.
  pub fn ids(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
    self.by_id.keys().copied()
  }

  pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
    self.by_id.iter().map(|(id, name)| (*id, name.as_str()))
  }

  pub fn len(&self) -> usize { self.by_id.len() }

  pub fn is_empty(&self) -> bool { self.by_id.is_empty() }
}

fn parse_id(lang: Language, key: &str) -> Result<u32> {
  let invalid = || Error::InvalidId {
    lang,
    key: key.to_string(),
  };

  if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
    return Err(invalid());
  }
  match key.parse::<u32>() {
    Ok(0) | Err(_) => Err(invalid()),
    Ok(id) => Ok(id),
  }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
