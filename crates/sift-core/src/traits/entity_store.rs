use crate::errors::SiftResult;

/// Canonical entity names, grouped by entity type.
pub trait IEntityStore: Send + Sync {
    /// Every canonical name registered under `entity_type`, in the store's
    /// iteration order. Unknown types yield an empty list.
    fn canonical_names(&self, entity_type: &str) -> SiftResult<Vec<String>>;
}
