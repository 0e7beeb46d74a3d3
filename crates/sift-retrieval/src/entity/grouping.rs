use std::collections::BTreeMap;

use sift_core::models::ExtractedEntity;

/// Group extracted mentions by type, lowercasing names.
///
/// Only types in `allowed` are kept; an empty `allowed` keeps every type.
/// Repeated names within a type are collapsed.
pub fn group_by_type(
    entities: &[ExtractedEntity],
    allowed: &[String],
) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for entity in entities {
        if !allowed.is_empty() && !allowed.contains(&entity.entity_type) {
            continue;
        }
        let name = entity.name.trim().to_lowercase();
        if name.is_empty() {
            continue;
        }
        let names = grouped.entry(entity.entity_type.clone()).or_default();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    grouped
}
