//! The fixed set of catalog languages.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// A catalog language. Each language has its own independent catalog.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  Display,
  EnumCount,
  EnumIter,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
  #[default]
  Fr,
  En,
  De,
}

impl Language {
  /// Used whenever the caller has not chosen a language.
  pub const DEFAULT: Self = Self::Fr;

  /// Dense slot index, `0..Language::COUNT`.
  pub(crate) const fn index(self) -> usize {
    match self {
      Self::Fr => 0,
      Self::En => 1,
      Self::De => 2,
    }
  }
}
