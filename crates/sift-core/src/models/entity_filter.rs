use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::document::Document;

/// Restricts retrieval to documents tagged with at least one listed entity.
///
/// Conditions are OR-ed across every `(type, name)` pair: a document passes
/// if any of its names under any listed type is in the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityFilter {
    conditions: BTreeMap<String, BTreeSet<String>>,
}

impl EntityFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from matched canonical names. Returns `None` when no
    /// type carries any name.
    pub fn from_matches<I, T, N>(matches: I) -> Option<Self>
    where
        I: IntoIterator<Item = (T, N)>,
        T: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let mut filter = Self::new();
        for (entity_type, names) in matches {
            let entity_type = entity_type.into();
            for name in names {
                filter.insert(entity_type.clone(), name);
            }
        }
        (!filter.is_empty()).then_some(filter)
    }

    pub fn insert(&mut self, entity_type: impl Into<String>, name: impl Into<String>) {
        self.conditions
            .entry(entity_type.into())
            .or_default()
            .insert(name.into());
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.values().all(BTreeSet::is_empty)
    }

    /// Listed types with their accepted names.
    pub fn conditions(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.conditions.iter().map(|(t, names)| (t.as_str(), names))
    }

    /// Whether `document` carries any listed entity.
    pub fn matches(&self, document: &Document) -> bool {
        self.conditions.iter().any(|(entity_type, names)| {
            document
                .entities_of(entity_type)
                .iter()
                .any(|name| names.contains(name))
        })
    }
}
