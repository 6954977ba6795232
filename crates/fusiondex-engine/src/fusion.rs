//! Fusion lookups: two resolutions, an asset path, and the newness flags.

use std::path::PathBuf;

use fusiondex_assets::{AssetLayout, AssetProbe, FsProbe};
use fusiondex_core::{AdditionMap, Dex, Language, OverrideMap, Resolution};
use rand::{Rng, RngCore, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::Result;

// ─── Query ───────────────────────────────────────────────────────────────────

/// A request-scoped fusion query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FusionQuery {
  pub head:        String,
  pub body:        String,
  pub lang:        Language,
  /// Replace the body with a random hand-made partner of the head.
  pub custom_only: bool,
}

impl FusionQuery {
  pub fn new(head: impl Into<String>, body: impl Into<String>) -> Self {
    Self {
      head:        head.into(),
      body:        body.into(),
      lang:        Language::DEFAULT,
      custom_only: false,
    }
  }

  pub fn lang(mut self, lang: Language) -> Self {
    self.lang = lang;
    self
  }

  pub fn custom_only(mut self, custom_only: bool) -> Self {
    self.custom_only = custom_only;
    self
  }
}

// ─── Outcome ─────────────────────────────────────────────────────────────────

/// Both sides of a fusion lookup together with the queries that produced
/// them. A value, never mutated; see [`FusionOutcome::swap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FusionOutcome {
  pub head:       Resolution,
  pub body:       Resolution,
  pub head_query: String,
  pub body_query: String,
}

impl FusionOutcome {
  pub fn succeeded(&self) -> bool {
    self.head.is_resolved() && self.body.is_resolved()
  }

  /// `(head, body)` identifiers when both sides resolved.
  pub fn ids(&self) -> Option<(u32, u32)> {
    Some((self.head.id()?, self.body.id()?))
  }

  /// The same lookup with head and body exchanged, queries included.
  #[must_use]
  pub fn swap(&self) -> Self {
    Self {
      head:       self.body.clone(),
      body:       self.head.clone(),
      head_query: self.body_query.clone(),
      body_query: self.head_query.clone(),
    }
  }
}

/// Which side of a combination to search by in
/// [`FusionCatalog::custom_combinations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
  Head(u32),
  Body(u32),
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// Fusion lookups over the species catalog, the hand-made overrides and the
/// additions since the previous release.
#[derive(Debug)]
pub struct FusionCatalog<P = FsProbe> {
  dex:             Dex,
  overrides:       OverrideMap,
  additions:       AdditionMap,
  previous_max_id: u32,
  layout:          AssetLayout,
  probe:           P,
}

impl<P: AssetProbe> FusionCatalog<P> {
  /// Fails if any override references an identifier the species catalog
  /// does not know.
  pub fn new(
    dex: Dex,
    overrides: OverrideMap,
    additions: AdditionMap,
    previous_max_id: u32,
    layout: AssetLayout,
    probe: P,
  ) -> Result<Self> {
    overrides.validate_against(dex.catalog(Language::DEFAULT))?;
    Ok(Self {
      dex,
      overrides,
      additions,
      previous_max_id,
      layout,
      probe,
    })
  }

  pub fn dex(&self) -> &Dex { &self.dex }

  pub fn layout(&self) -> &AssetLayout { &self.layout }

  /// Resolve both sides of `query`. In custom-only mode a resolved head
  /// picks its body at random among its hand-made partners; a head without
  /// any yields a failed body.
  pub fn fusion<R>(&self, query: &FusionQuery, rng: &mut R) -> FusionOutcome
  where
    R: Rng + ?Sized,
  {
    let head = self.dex.resolve(&query.head, query.lang, rng);

    let (body_query, body) = if query.custom_only
      && let Some(head_id) = head.id()
    {
      match self.overrides.get(head_id).choose(rng) {
        Some(partner) => {
          let body_query = partner.to_string();
          let body = self.dex.resolve(&body_query, query.lang, rng);
          (body_query, body)
        }
        None => {
          tracing::warn!(head_id, "no custom fusions for head");
          (query.body.clone(), Resolution::not_found(&query.body))
        }
      }
    } else {
      (
        query.body.clone(),
        self.dex.resolve(&query.body, query.lang, rng),
      )
    };

    FusionOutcome {
      head,
      body,
      head_query: query.head.clone(),
      body_query,
    }
  }

  /// Deterministic totem draw: the same seed always yields the same pair,
  /// across processes and dependency upgrades. Without a seed a fresh one is
  /// drawn from the thread RNG.
  ///
  /// The body is always a hand-made partner of the head. A head without
  /// partners is a data defect and surfaces as a failed body.
  pub fn totem(&self, seed: Option<u64>, lang: Language) -> FusionOutcome {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let range = self.dex.range();
    let span = u64::from(*range.end()) - u64::from(*range.start()) + 1;
    let head = range.start() + pick(&mut rng, span) as u32;
    let head_query = head.to_string();

    let bodies = self.overrides.get(head);
    if bodies.is_empty() {
      tracing::warn!(head, seed, "totem head has no custom fusions");
      return FusionOutcome {
        head: self.dex.resolve(&head_query, lang, &mut rng),
        body: Resolution::not_found(""),
        head_query,
        body_query: String::new(),
      };
    }

    let body = bodies[pick(&mut rng, bodies.len() as u64) as usize];
    let query = FusionQuery::new(head_query, body.to_string()).lang(lang);
    self.fusion(&query, &mut rng)
  }

  /// Hand-made override if one exists, generated sprite otherwise; `None`
  /// for a failed outcome.
  pub fn asset_path(&self, outcome: &FusionOutcome) -> Option<PathBuf> {
    let (head, body) = outcome.ids()?;
    let custom = self.layout.custom_fusion(head, body);
    if self.probe.exists(&custom) {
      Some(custom)
    } else {
      Some(self.layout.autogen_fusion(head, body))
    }
  }

  pub fn is_custom(&self, outcome: &FusionOutcome) -> bool {
    outcome
      .ids()
      .is_some_and(|(head, body)| self.probe.exists(&self.layout.custom_fusion(head, body)))
  }

  /// New if either species postdates the previous release, or the pair
  /// itself was added since.
  pub fn is_new(&self, outcome: &FusionOutcome) -> bool {
    outcome.ids().is_some_and(|(head, body)| {
      head > self.previous_max_id
        || body > self.previous_max_id
        || self.additions.contains(head, body)
    })
  }

  /// The head's egg, or the default egg if it has none.
  pub fn egg_path(&self, outcome: &FusionOutcome) -> Option<PathBuf> {
    let (head, _) = outcome.ids()?;
    let egg = self.layout.egg(head);
    if self.probe.exists(&egg) {
      Some(egg)
    } else {
      Some(self.layout.default_egg())
    }
  }

  /// Hand-made partners: bodies of a head, or (sorted) heads of a body.
  pub fn custom_combinations(&self, side: Side) -> Vec<u32> {
    match side {
      Side::Head(head) => self.overrides.get(head).to_vec(),
      Side::Body(body) => self.overrides.heads_with(body),
    }
  }
}

/// Map one 64-bit draw onto `0..n` with a widening multiply. Only the raw
/// ChaCha stream feeds it, so a seed keeps its totem when `rand` changes its
/// range sampling.
fn pick(rng: &mut impl RngCore, n: u64) -> u64 {
  ((u128::from(rng.next_u64()) * u128::from(n)) >> 64) as u64
}
