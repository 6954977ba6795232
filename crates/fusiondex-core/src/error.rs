//! Error types for `fusiondex-core`.
//!
//! These are construction-time failures only. A query that matches nothing
//! is not an error; it is a [`crate::Resolution::Failed`].

use thiserror::Error;

use crate::Language;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid identifier key {key:?} in {lang} catalog")]
  InvalidId { lang: Language, key: String },

  #[error("identifier {id} in {lang} catalog is outside {min}..={max}")]
  IdOutOfRange {
    lang: Language,
    id:   u32,
    min:  u32,
    max:  u32,
  },

  #[error("duplicate identifier {id} in {lang} catalog")]
  DuplicateId { lang: Language, id: u32 },

  #[error("duplicate name {name:?} in {lang} catalog (ids {first} and {second})")]
  DuplicateName {
    lang:   Language,
    name:   String,
    first:  u32,
    second: u32,
  },

  #[error("name for identifier {id} in {lang} catalog is empty after normalization")]
  EmptyName { lang: Language, id: u32 },

  #[error("identifier range {min}..={max} is empty")]
  EmptyRange { min: u32, max: u32 },

  #[error("identifier {id} is in the {present} catalog but missing from {absent}")]
  InconsistentIds {
    id:      u32,
    present: Language,
    absent:  Language,
  },

  #[error("no catalog provided for language {0}")]
  MissingLanguage(Language),

  #[error("combination {head}.{body} references an identifier absent from the catalog")]
  UnknownCombination { head: u32, body: u32 },

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
