//! Fuzzy matching of extracted entity names against canonical names.

use std::collections::BTreeMap;

use sift_core::errors::SiftResult;
use sift_core::similarity::normalized_levenshtein;
use sift_core::traits::IEntityStore;

/// Snaps free-text entity mentions to canonical names.
///
/// A term matches the canonical name with the smallest normalized edit
/// distance (both lowercased) if that distance is strictly below the
/// threshold. Among equidistant names the first in the store's iteration
/// order wins.
pub struct EntityMatcher<'a> {
    store: &'a dyn IEntityStore,
    threshold: f64,
}

impl<'a> EntityMatcher<'a> {
    pub fn new(store: &'a dyn IEntityStore, threshold: f64) -> Self {
        Self { store, threshold }
    }

    /// Best canonical name for `term` under `entity_type`, if close enough.
    pub fn match_entity(&self, term: &str, entity_type: &str) -> SiftResult<Option<String>> {
        let names = self.store.canonical_names(entity_type)?;
        Ok(self.best_match(term, &names))
    }

    /// Match every term, keeping only types with at least one match.
    ///
    /// `Ok(None)` when nothing matched at all.
    pub fn match_entities(
        &self,
        terms: &BTreeMap<String, Vec<String>>,
    ) -> SiftResult<Option<BTreeMap<String, Vec<String>>>> {
        let mut matched = BTreeMap::new();
        for (entity_type, type_terms) in terms {
            if type_terms.is_empty() {
                continue;
            }
            let names = self.store.canonical_names(entity_type)?;
            let hits: Vec<String> = type_terms
                .iter()
                .filter_map(|term| self.best_match(term, &names))
                .collect();
            if !hits.is_empty() {
                matched.insert(entity_type.clone(), hits);
            }
        }
        Ok((!matched.is_empty()).then_some(matched))
    }

    fn best_match(&self, term: &str, names: &[String]) -> Option<String> {
        let term = term.to_lowercase();
        let mut best: Option<(&String, f64)> = None;
        for name in names {
            let distance = normalized_levenshtein(&term, &name.to_lowercase());
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((name, distance));
            }
        }
        best.filter(|(_, d)| *d < self.threshold)
            .map(|(name, _)| name.clone())
    }
}
