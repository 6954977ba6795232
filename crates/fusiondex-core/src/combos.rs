//! Head → bodies combination maps.
//!
//! The same shape serves several roles: hand-made overrides, additions and
//! removals between two asset releases, and raw asset-pack snapshots. On
//! disk it is a JSON object keyed by decimal head identifier whose values are
//! arrays of body identifiers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Catalog, Error, Result};

/// Hand-authored fusion combinations that exist as real assets.
pub type OverrideMap = CombinationMap;
/// Combinations present in the newer snapshot but not the older one.
pub type AdditionMap = CombinationMap;
/// Combinations present in the older snapshot but not the newer one.
pub type RemovalMap = CombinationMap;

/// A map from head identifier to a sorted, duplicate-free list of body
/// identifiers. Heads with no bodies are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
  from = "BTreeMap<u32, Vec<u32>>",
  into = "BTreeMap<u32, Vec<u32>>"
)]
pub struct CombinationMap {
  inner: BTreeMap<u32, Vec<u32>>,
}

impl CombinationMap {
  pub fn new() -> Self { Self::default() }

  pub fn from_pairs(pairs: impl IntoIterator<Item = (u32, u32)>) -> Self {
    let mut map = Self::new();
    for (head, body) in pairs {
      map.insert(head, body);
    }
    map
  }

  pub fn from_json(json: &str) -> Result<Self> { Ok(serde_json::from_str(json)?) }

  pub fn to_json(&self) -> Result<String> { Ok(serde_json::to_string(self)?) }

  /// Add a single combination, keeping the body list sorted and unique.
  pub fn insert(&mut self, head: u32, body: u32) {
    let bodies = self.inner.entry(head).or_default();
    if let Err(pos) = bodies.binary_search(&body) {
      bodies.insert(pos, body);
    }
  }

  /// Bodies recorded for `head`; empty if the head is absent.
  pub fn get(&self, head: u32) -> &[u32] {
    self.inner.get(&head).map(Vec::as_slice).unwrap_or_default()
  }

  pub fn contains(&self, head: u32, body: u32) -> bool {
    self.get(head).binary_search(&body).is_ok()
  }

  /// Every head whose body list contains `body`, ascending. Linear in the
  /// total number of entries.
  pub fn heads_with(&self, body: u32) -> Vec<u32> {
    self
      .inner
      .iter()
      .filter(|(_, bodies)| bodies.binary_search(&body).is_ok())
      .map(|(head, _)| *head)
      .collect()
  }

  /// Entries of `self` whose combination is absent from `other`.
  pub fn difference(&self, other: &Self) -> Self {
    let inner = self
      .inner
      .iter()
      .filter_map(|(head, bodies)| {
        let theirs = other.get(*head);
        let only_ours: Vec<u32> = bodies
          .iter()
          .copied()
          .filter(|body| theirs.binary_search(body).is_err())
          .collect();
        (!only_ours.is_empty()).then_some((*head, only_ours))
      })
      .collect();
    Self { inner }
  }

  /// Fail if any head or body is not an identifier of `catalog`.
  pub fn validate_against(&self, catalog: &Catalog) -> Result<()> {
    for (head, body) in self.pairs() {
      if !catalog.contains(head) || !catalog.contains(body) {
        return Err(Error::UnknownCombination { head, body });
      }
    }
    Ok(())
  }

  pub fn heads(&self) -> impl Iterator<Item = u32> + '_ {
    self.inner.keys().copied()
  }

  pub fn iter(&self) -> impl Iterator<Item = (u32, &[u32])> {
    self.inner.iter().map(|(head, bodies)| (*head, bodies.as_slice()))
  }

  /// Every `(head, body)` pair in ascending order.
  pub fn pairs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
    self
      .inner
      .iter()
      .flat_map(|(head, bodies)| bodies.iter().map(move |body| (*head, *body)))
  }

  /// Number of heads.
  pub fn len(&self) -> usize { self.inner.len() }

  /// Number of `(head, body)` pairs.
  pub fn total(&self) -> usize { self.inner.values().map(Vec::len).sum() }

  pub fn is_empty(&self) -> bool { self.inner.is_empty() }
}

impl From<BTreeMap<u32, Vec<u32>>> for CombinationMap {
  fn from(raw: BTreeMap<u32, Vec<u32>>) -> Self {
    let inner = raw
      .into_iter()
      .filter_map(|(head, mut bodies)| {
        bodies.sort_unstable();
        bodies.dedup();
        (!bodies.is_empty()).then_some((head, bodies))
      })
      .collect();
    Self { inner }
  }
}

impl From<CombinationMap> for BTreeMap<u32, Vec<u32>> {
  fn from(map: CombinationMap) -> Self { map.inner }
}

impl FromIterator<(u32, u32)> for CombinationMap {
  fn from_iter<T: IntoIterator<Item = (u32, u32)>>(iter: T) -> Self {
    Self::from_pairs(iter)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn map(pairs: &[(u32, u32)]) -> CombinationMap {
    pairs.iter().copied().collect()
  }

  #[test]
  fn json_keys_are_decimal_strings() {
    let m = map(&[(1, 3), (1, 2), (10, 5)]);
    assert_eq!(m.to_json().unwrap(), r#"{"1":[2,3],"10":[5]}"#);
  }

  #[test]
  fn deserializing_sorts_dedups_and_drops_empty_heads() {
    let m = CombinationMap::from_json(r#"{"4":[9,1,9],"5":[]}"#).unwrap();
    assert_eq!(m.get(4), &[1, 9]);
    assert_eq!(m.get(5), &[] as &[u32]);
    assert_eq!(m.len(), 1);
  }

  #[test]
  fn rejects_non_numeric_keys() {
    assert!(CombinationMap::from_json(r#"{"abc":[1]}"#).is_err());
  }

  #[test]
  fn reverse_lookup_is_sorted() {
    let m = map(&[(30, 7), (2, 7), (2, 8), (15, 1)]);
    assert_eq!(m.heads_with(7), vec![2, 30]);
    assert!(m.heads_with(99).is_empty());
  }

  #[test]
  fn difference_is_asymmetric() {
    let old = map(&[(1, 2), (1, 3)]);
    let new = map(&[(1, 2), (1, 3), (1, 4), (5, 6)]);

    assert_eq!(new.difference(&old), map(&[(1, 4), (5, 6)]));
    assert!(old.difference(&new).is_empty());
  }

  #[test]
  fn totals_count_pairs() {
    let m = map(&[(1, 2), (1, 3), (5, 6)]);
    assert_eq!(m.len(), 2);
    assert_eq!(m.total(), 3);
    assert_eq!(m.pairs().collect::<Vec<_>>(), [(1, 2), (1, 3), (5, 6)]);
  }

  #[test]
  fn validation_catches_unknown_ids() {
    let mut catalog = Catalog::new();
    catalog.insert("a", 1);
    catalog.insert("b", 2);

    assert!(map(&[(1, 2)]).validate_against(&catalog).is_ok());
    let err = map(&[(1, 3)]).validate_against(&catalog).unwrap_err();
    assert!(matches!(err, Error::UnknownCombination { head: 1, body: 3 }));
  }
}
