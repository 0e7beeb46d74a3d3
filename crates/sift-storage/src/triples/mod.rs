//! Knowledge-graph triple store on petgraph.
//!
//! Entities are nodes, each triple is a directed edge `head → tail`
//! labelled with its relation and the documents it was extracted from.
//! `neighbors(e, Head)` walks outgoing edges of `e`, `neighbors(e, Tail)`
//! incoming ones.

use std::collections::{BTreeSet, HashMap, HashSet};

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use sift_core::errors::SiftResult;
use sift_core::models::{DocumentId, Triple, TripleSide};
use sift_core::similarity::normalized_levenshtein;
use sift_core::traits::ITripleStore;

/// Edge payload.
#[derive(Debug, Clone)]
pub struct TripleEdge {
    pub relation: String,
    pub documents: BTreeSet<DocumentId>,
}

#[derive(Default)]
pub struct GraphTripleStore {
    graph: DiGraph<String, TripleEdge>,
    nodes: HashMap<String, NodeIndex>,
    /// Flattened triple → edge, for document lookup.
    by_flattened: HashMap<String, EdgeIndex>,
    /// Flattened forms in insertion order; the scan order of `nearest_triple`.
    flattened: Vec<(String, EdgeIndex)>,
}

impl GraphTripleStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_node(&mut self, entity: &str) -> NodeIndex {
        if let Some(&idx) = self.nodes.get(entity) {
            return idx;
        }
        let idx = self.graph.add_node(entity.to_string());
        self.nodes.insert(entity.to_string(), idx);
        idx
    }

    /// Record `triple` as extracted from `document_id`. Inserting the same
    /// triple again only adds the document.
    pub fn insert(&mut self, triple: &Triple, document_id: impl Into<DocumentId>) {
        let document_id = document_id.into();
        let flat = triple.flatten();
        if let Some(&edge) = self.by_flattened.get(&flat) {
            if let Some(weight) = self.graph.edge_weight_mut(edge) {
                weight.documents.insert(document_id);
            }
            return;
        }

        let head = self.ensure_node(&triple.head);
        let tail = self.ensure_node(&triple.tail);
        let edge = self.graph.add_edge(
            head,
            tail,
            TripleEdge {
                relation: triple.relation.clone(),
                documents: BTreeSet::from([document_id]),
            },
        );
        self.by_flattened.insert(flat.clone(), edge);
        self.flattened.push((flat, edge));
    }

    pub fn len(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    pub fn entity_count(&self) -> usize {
        self.graph.node_count()
    }

    fn triple_at(&self, edge: EdgeIndex) -> Option<Triple> {
        let (head, tail) = self.graph.edge_endpoints(edge)?;
        let weight = self.graph.edge_weight(edge)?;
        Some(Triple {
            head: self.graph[head].clone(),
            relation: weight.relation.clone(),
            tail: self.graph[tail].clone(),
        })
    }
}

impl ITripleStore for GraphTripleStore {
    fn nearest_triple(&self, term: &str) -> SiftResult<Option<Triple>> {
        let term = term.to_lowercase();
        let mut best: Option<(f64, EdgeIndex)> = None;
        for (flat, edge) in &self.flattened {
            let distance = normalized_levenshtein(&term, flat);
            // Strict `<`: the first of equidistant triples wins.
            if best.map_or(true, |(d, _)| distance < d) {
                best = Some((distance, *edge));
            }
        }
        Ok(best.and_then(|(_, edge)| self.triple_at(edge)))
    }

    fn neighbors(&self, entity: &str, side: TripleSide) -> SiftResult<Vec<Triple>> {
        let Some(&node) = self.nodes.get(entity) else {
            return Ok(Vec::new());
        };
        let direction = match side {
            TripleSide::Head => Direction::Outgoing,
            TripleSide::Tail => Direction::Incoming,
        };
        // petgraph yields edges newest first; report them in insertion order.
        let mut edges: Vec<EdgeIndex> = self
            .graph
            .edges_directed(node, direction)
            .map(|e| e.id())
            .collect();
        edges.sort();
        Ok(edges.into_iter().filter_map(|e| self.triple_at(e)).collect())
    }

    fn documents_for_triples(&self, flattened: &[String]) -> SiftResult<Vec<DocumentId>> {
        let mut seen = HashSet::new();
        let mut ids = Vec::new();
        for flat in flattened {
            let Some(&edge) = self.by_flattened.get(flat) else {
                continue;
            };
            if let Some(weight) = self.graph.edge_weight(edge) {
                for id in &weight.documents {
                    if seen.insert(id.clone()) {
                        ids.push(id.clone());
                    }
                }
            }
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> GraphTripleStore {
        let mut s = GraphTripleStore::new();
        s.insert(&Triple::new("paris", "capital of", "france"), "d1");
        s.insert(&Triple::new("france", "member of", "eu"), "d2");
        s.insert(&Triple::new("berlin", "capital of", "germany"), "d3");
        s.insert(&Triple::new("germany", "member of", "eu"), "d3");
        s
    }

    #[test]
    fn nearest_triple_tolerates_typos() {
        let nearest = store().nearest_triple("Paris capitol of France").unwrap();
        assert_eq!(nearest, Some(Triple::new("paris", "capital of", "france")));
    }

    #[test]
    fn nearest_triple_on_empty_store_is_none() {
        assert!(GraphTripleStore::new().nearest_triple("x").unwrap().is_none());
    }

    #[test]
    fn neighbors_by_side() {
        let s = store();
        let heads = s.neighbors("france", TripleSide::Head).unwrap();
        assert_eq!(heads, vec![Triple::new("france", "member of", "eu")]);
        let tails = s.neighbors("france", TripleSide::Tail).unwrap();
        assert_eq!(tails, vec![Triple::new("paris", "capital of", "france")]);
        let eu = s.neighbors("eu", TripleSide::Tail).unwrap();
        assert_eq!(eu.len(), 2);
        assert_eq!(eu[0].head, "france");
    }

    #[test]
    fn unknown_entity_has_no_neighbors() {
        assert!(store().neighbors("spain", TripleSide::Head).unwrap().is_empty());
    }

    #[test]
    fn duplicate_insert_merges_documents() {
        let mut s = store();
        s.insert(&Triple::new("paris", "capital of", "france"), "d9");
        assert_eq!(s.len(), 4);
        let ids = s
            .documents_for_triples(&["paris capital of france".to_string()])
            .unwrap();
        assert_eq!(ids, vec!["d1".to_string(), "d9".to_string()]);
    }

    #[test]
    fn documents_for_triples_are_distinct() {
        let ids = store()
            .documents_for_triples(&[
                "berlin capital of germany".to_string(),
                "germany member of eu".to_string(),
                "no such triple".to_string(),
            ])
            .unwrap();
        assert_eq!(ids, vec!["d3".to_string()]);
    }
}
