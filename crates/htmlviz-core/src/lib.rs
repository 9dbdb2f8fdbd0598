//! In-memory graph data model backing the htmlviz renderers.
//!
//! Vertices and edges are standalone, identity-bearing entities shared via
//! `Arc`; the [`DirectedGraph`] and [`UndirectedGraph`] containers hold
//! id-ordered, duplicate-free collections of them and answer endpoint-match
//! queries. Nothing here computes layout — preferred coordinates are hints
//! for the client-side rendering libraries.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

pub mod color;
pub mod directed;
pub mod edge;
pub mod error;
pub mod undirected;
pub mod vertex;

pub use color::Color;
pub use directed::DirectedGraph;
pub use edge::{DirectedEdge, UndirectedEdge};
pub use error::GraphError;
pub use undirected::UndirectedGraph;
pub use vertex::Vertex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

static VERTEX_ID_WELL: AtomicU64 = AtomicU64::new(0);
static EDGE_ID_WELL: AtomicU64 = AtomicU64::new(0);

pub(crate) fn next_vertex_id() -> VertexId {
    VertexId(VERTEX_ID_WELL.fetch_add(1, AtomicOrdering::Relaxed))
}

pub(crate) fn next_edge_id() -> EdgeId {
    EdgeId(EDGE_ID_WELL.fetch_add(1, AtomicOrdering::Relaxed))
}

/// Orders an optionally-present entity against another: a present entity
/// always ranks before an absent one, and two present entities defer to
/// their own ordering (creation sequence for vertices and edges).
pub fn cmp_present_first<T: Ord>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_ranks_before_absent() {
        let v = Vertex::new();
        assert_eq!(cmp_present_first(Some(&v), None), Ordering::Less);
        assert_eq!(cmp_present_first::<Vertex>(None, Some(&v)), Ordering::Greater);
        assert_eq!(cmp_present_first::<Vertex>(None, None), Ordering::Equal);
    }

    #[test]
    fn test_ids_are_monotonic() {
        let a = Vertex::new();
        let b = Vertex::new();
        assert!(a.id() < b.id());

        let e1 = DirectedEdge::new();
        let e2 = DirectedEdge::new();
        assert!(e1.id() < e2.id());
    }
}
