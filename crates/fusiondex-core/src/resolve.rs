//! Query resolution: raw user text → [`Resolution`].
//!
//! Precedence is fixed:
//!
//! 1. all-digit queries are looked up by identifier and never fuzzed;
//! 2. wildcard tokens ([`WILDCARD_QUERIES`]) draw a uniformly random entry;
//! 3. anything else is normalized and looked up by name, falling back to a
//!    fuzzy best guess over every name in the catalog.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Catalog, normalize};

/// Tokens that request a random catalog entry instead of a specific one.
pub const WILDCARD_QUERIES: &[&str] = &["?", "."];

// ─── Resolution ──────────────────────────────────────────────────────────────

/// The outcome of resolving one query. Constructed once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Resolution {
  Resolved {
    id:   u32,
    name: String,
  },
  Failed {
    /// The query exactly as the caller supplied it.
    query: String,
    /// Closest catalog name; only ever set for non-numeric queries.
    guess: Option<String>,
    /// Similarity of `guess` to the normalized query, `0..=100`.
    score: Option<u8>,
  },
}

impl Resolution {
  pub fn is_resolved(&self) -> bool { matches!(self, Self::Resolved { .. }) }

  pub fn id(&self) -> Option<u32> {
    match self {
      Self::Resolved { id, .. } => Some(*id),
      Self::Failed { .. } => None,
    }
  }

  pub fn name(&self) -> Option<&str> {
    match self {
      Self::Resolved { name, .. } => Some(name),
      Self::Failed { .. } => None,
    }
  }

  /// The "did you mean" suggestion and its score, if any.
  pub fn guess(&self) -> Option<(&str, u8)> {
    match self {
      Self::Failed {
        guess: Some(guess),
        score: Some(score),
        ..
      } => Some((guess, *score)),
      _ => None,
    }
  }

  fn resolved(id: u32, name: &str) -> Self {
    Self::Resolved {
      id,
      name: name.to_string(),
    }
  }

  /// A failure with no suggestion attached.
  pub fn not_found(query: &str) -> Self {
    Self::Failed {
      query: query.to_string(),
      guess: None,
      score: None,
    }
  }
}

// ─── Resolver ────────────────────────────────────────────────────────────────

/// Resolve `query` against a single-language catalog.
///
/// `rng` is only consulted for wildcard queries.
pub fn resolve<R>(catalog: &Catalog, query: &str, rng: &mut R) -> Resolution
where
  R: Rng + ?Sized,
{
  let trimmed = query.trim();

  if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
    let hit = trimmed
      .parse::<u32>()
      .ok()
      .and_then(|id| catalog.get_by_id(id).map(|name| (id, name)));
    return match hit {
      Some((id, name)) => Resolution::resolved(id, name),
      None => Resolution::not_found(query),
    };
  }

  if WILDCARD_QUERIES.contains(&trimmed) {
    if catalog.is_empty() {
      return Resolution::not_found(query);
    }
    let index = rng.gen_range(0..catalog.len());
    return match catalog.iter().nth(index) {
      Some((id, name)) => Resolution::resolved(id, name),
      None => Resolution::not_found(query),
    };
  }

  let normalized = normalize(query);
  if let Some(id) = catalog.get_by_name(&normalized) {
    return Resolution::resolved(id, &normalized);
  }

  let best = if normalized.is_empty() {
    None
  } else {
    best_guess(&normalized, catalog.all_names())
  };
  tracing::debug!(query, ?best, "no exact match");

  Resolution::Failed {
    query: query.to_string(),
    guess: best.map(|(name, _)| name.to_string()),
    score: best.map(|(_, score)| score),
  }
}

/// Similarity of two strings on a `0..=100` scale, where 100 is identical.
///
/// Based on the optimal-string-alignment edit distance, so a swapped pair of
/// adjacent letters costs a single edit.
pub fn similarity(a: &str, b: &str) -> u8 {
  let ratio = strsim::normalized_damerau_levenshtein(a, b);
  (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Highest-scoring name; the first one wins ties.
fn best_guess<'a>(
  query: &str,
  names: impl Iterator<Item = &'a str>,
) -> Option<(&'a str, u8)> {
  let mut best: Option<(&'a str, u8)> = None;
  for name in names {
    let score = similarity(query, name);
    if best.is_none_or(|(_, top)| score > top) {
      best = Some((name, score));
    }
  }
  best
}

// ─── Tests ────────────────────────────────────────────────────────────────────
