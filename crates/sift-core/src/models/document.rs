use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Opaque document identifier assigned by the corpus store.
pub type DocumentId = String;

/// A passage in the corpus.
///
/// Immutable once retrieved. Pipelines hold it behind an `Arc` so ranking
/// stages reorder references instead of copying text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub text: String,
    /// Entity type → names tagged on this document, in tagging order.
    #[serde(default)]
    pub entities: BTreeMap<String, Vec<String>>,
}

impl Document {
    pub fn new(id: impl Into<DocumentId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            entities: BTreeMap::new(),
        }
    }

    /// Tag the document with an entity, ignoring repeats.
    pub fn with_entity(mut self, entity_type: impl Into<String>, name: impl Into<String>) -> Self {
        let names = self.entities.entry(entity_type.into()).or_default();
        let name = name.into();
        if !names.contains(&name) {
            names.push(name);
        }
        self
    }

    /// Names tagged under `entity_type`, empty if none.
    pub fn entities_of(&self, entity_type: &str) -> &[String] {
        self.entities
            .get(entity_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
