//! Graph adjacency for beam extension.

use std::collections::HashSet;

use sift_core::errors::SiftResult;
use sift_core::models::{Triple, TripleSide};
use sift_core::traits::ITripleStore;

use crate::beam::Beam;

/// Triples sharing an entity with the beam's last triple.
///
/// Looks up both of the last triple's entities on both sides of stored
/// triples, de-duplicates in first-seen order, and drops triples already
/// on the path.
pub fn find(store: &dyn ITripleStore, beam: &Beam) -> SiftResult<Vec<Triple>> {
    let Some(last) = beam.last() else {
        return Ok(Vec::new());
    };

    let mut seen: HashSet<Triple> = HashSet::new();
    let mut out = Vec::new();
    for side in TripleSide::BOTH {
        for entity in [last.head.as_str(), last.tail.as_str()] {
            for triple in store.neighbors(entity, side)? {
                if beam.contains(&triple) || seen.contains(&triple) {
                    continue;
                }
                seen.insert(triple.clone());
                out.push(triple);
            }
        }
    }
    Ok(out)
}
