//! Directed graph container.

use crate::edge::DirectedEdge;
use crate::error::GraphError;
use crate::vertex::Vertex;
use crate::{EdgeId, VertexId};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A directed graph: an id-ordered, duplicate-free vertex collection plus an
/// id-ordered, duplicate-free collection of [`DirectedEdge`]s. Insertion and
/// iteration are safe from multiple threads without external locking; query
/// methods materialize a consistent snapshot, not necessarily the most
/// recent state.
///
/// Every non-null endpoint of an accepted edge was present in the vertex
/// collection at insertion time; there is no deletion API, so the property
/// holds for the lifetime of the graph.
#[derive(Debug, Default)]
pub struct DirectedGraph {
    name: Option<String>,
    vertices: RwLock<BTreeMap<VertexId, Arc<Vertex>>>,
    edges: RwLock<BTreeMap<EdgeId, Arc<DirectedEdge>>>,
}

impl DirectedGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Inserts a vertex. A vertex already present (by identity) is left in
    /// place, so repeated insertion is a no-op.
    pub fn add_vertex(&self, vertex: Arc<Vertex>) {
        self.vertices.write().entry(vertex.id()).or_insert(vertex);
    }

    /// Inserts an edge. Fails when both endpoints are absent, or when a
    /// present endpoint is not already in the vertex collection (unless
    /// `auto_add_vertices` registers it first). Validation precedes
    /// mutation of the edge collection.
    pub fn add_edge(
        &self,
        edge: Arc<DirectedEdge>,
        auto_add_vertices: bool,
    ) -> Result<(), GraphError> {
        let start = edge.start();
        let end = edge.end();
        if start.is_none() && end.is_none() {
            return Err(GraphError::DetachedEdge);
        }

        if auto_add_vertices {
            for endpoint in [&start, &end].into_iter().flatten() {
                debug!(vertex = %endpoint.id(), "auto-adding edge endpoint");
                self.add_vertex(Arc::clone(endpoint));
            }
        }

        {
            let vertices = self.vertices.read();
            for (slot, endpoint) in [("start", &start), ("end", &end)] {
                if let Some(v) = endpoint
                    && !vertices.contains_key(&v.id())
                {
                    return Err(GraphError::VertexNotInGraph {
                        slot,
                        vertex: v.to_string(),
                    });
                }
            }
        }

        self.edges.write().insert(edge.id(), edge);
        Ok(())
    }

    /// Id-ordered snapshot of the vertex collection. The `Arc` entities are
    /// live — attribute mutation through a snapshot is visible to the graph
    /// and to every other holder.
    pub fn vertices(&self) -> Vec<Arc<Vertex>> {
        self.vertices.read().values().cloned().collect()
    }

    /// Id-ordered snapshot of the edge collection.
    pub fn edges(&self) -> Vec<Arc<DirectedEdge>> {
        self.edges.read().values().cloned().collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.read().len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.read().len()
    }

    /// All edges whose start and end slots both match the given parameters,
    /// in edge-id order. An absent parameter matches ONLY an absent endpoint
    /// (it is not a wildcard for "any vertex"); a present parameter matches
    /// by identity. Fails when both parameters are absent.
    pub fn edges_matching(
        &self,
        start: Option<&Vertex>,
        end: Option<&Vertex>,
    ) -> Result<Vec<Arc<DirectedEdge>>, GraphError> {
        if start.is_none() && end.is_none() {
            return Err(GraphError::EmptyEndpointQuery);
        }

        Ok(self
            .edges
            .read()
            .values()
            .filter(|edge| {
                slot_matches(start, edge.start().as_deref())
                    && slot_matches(end, edge.end().as_deref())
            })
            .cloned()
            .collect())
    }

    /// All edges touching the given vertex in either slot, in edge-id order.
    /// An absent `vertex` matches any half edge (absent start OR absent end).
    pub fn vertex_edges(&self, vertex: Option<&Vertex>) -> Vec<Arc<DirectedEdge>> {
        self.edges
            .read()
            .values()
            .filter(|edge| match vertex {
                None => edge.start().is_none() || edge.end().is_none(),
                Some(v) => {
                    identity_eq(v, edge.start().as_deref())
                        || identity_eq(v, edge.end().as_deref())
                }
            })
            .cloned()
            .collect()
    }

    /// As [`vertex_edges`](Self::vertex_edges), restricted to the start slot.
    pub fn vertex_edges_matching_start(&self, vertex: Option<&Vertex>) -> Vec<Arc<DirectedEdge>> {
        self.edges
            .read()
            .values()
            .filter(|edge| slot_matches(vertex, edge.start().as_deref()))
            .cloned()
            .collect()
    }

    /// As [`vertex_edges`](Self::vertex_edges), restricted to the end slot.
    pub fn vertex_edges_matching_end(&self, vertex: Option<&Vertex>) -> Vec<Arc<DirectedEdge>> {
        self.edges
            .read()
            .values()
            .filter(|edge| slot_matches(vertex, edge.end().as_deref()))
            .cloned()
            .collect()
    }

    /// Full listing form: the compact summary plus every vertex and edge.
    pub fn detailed_string(&self) -> String {
        let vertices = self.vertices();
        let edges = self.edges();
        format!(
            "DirectedGraph{{name='{}', vertices={}, edges={}, vertex_list=[{}], edge_list=[{}]}}",
            self.name.as_deref().unwrap_or(""),
            vertices.len(),
            edges.len(),
            join_display(&vertices),
            join_display(&edges),
        )
    }
}

/// An absent parameter matches only an absent endpoint; a present parameter
/// matches a present endpoint with the same identity.
pub(crate) fn slot_matches(param: Option<&Vertex>, endpoint: Option<&Vertex>) -> bool {
    match (param, endpoint) {
        (None, None) => true,
        (Some(p), Some(e)) => p.id() == e.id(),
        _ => false,
    }
}

pub(crate) fn identity_eq(param: &Vertex, endpoint: Option<&Vertex>) -> bool {
    endpoint.is_some_and(|e| e.id() == param.id())
}

pub(crate) fn join_display<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DirectedGraph{{name='{}', vertices={}, edges={}}}",
            self.name.as_deref().unwrap_or(""),
            self.vertex_count(),
            self.edge_count(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex() -> Arc<Vertex> {
        Arc::new(Vertex::new())
    }

    #[test]
    fn test_add_vertex_is_duplicate_free() {
        let g = DirectedGraph::new("g");
        let a = vertex();
        g.add_vertex(Arc::clone(&a));
        g.add_vertex(Arc::clone(&a));
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.vertices()[0].id(), a.id());
    }

    #[test]
    fn test_add_edge_requires_registered_endpoints() {
        let g = DirectedGraph::new("g");
        let a = vertex();
        let b = vertex();
        let c = vertex();
        g.add_vertex(Arc::clone(&a));
        g.add_vertex(Arc::clone(&b));

        let e1 = Arc::new(DirectedEdge::between(
            Some(Arc::clone(&a)),
            Some(Arc::clone(&b)),
        ));
        assert!(g.add_edge(Arc::clone(&e1), false).is_ok());

        let e2 = Arc::new(DirectedEdge::between(
            Some(Arc::clone(&a)),
            Some(Arc::clone(&c)),
        ));
        assert!(matches!(
            g.add_edge(Arc::clone(&e2), false),
            Err(GraphError::VertexNotInGraph { slot: "end", .. })
        ));
        // failed insertion leaves both collections unchanged
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.vertex_count(), 2);

        assert!(g.add_edge(Arc::clone(&e2), true).is_ok());
        assert_eq!(g.edge_count(), 2);
        let ids: Vec<_> = g.vertices().iter().map(|v| v.id()).collect();
        assert!(ids.contains(&c.id()));
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_add_edge_rejects_fully_detached() {
        let g = DirectedGraph::new("g");
        let e = Arc::new(DirectedEdge::new());
        assert_eq!(g.add_edge(Arc::clone(&e), false), Err(GraphError::DetachedEdge));
        assert_eq!(g.add_edge(e, true), Err(GraphError::DetachedEdge));
    }

    #[test]
    fn test_half_edge_accepted() {
        let g = DirectedGraph::new("g");
        let a = vertex();
        g.add_vertex(Arc::clone(&a));
        let e = Arc::new(DirectedEdge::between(Some(Arc::clone(&a)), None));
        assert!(g.add_edge(e, false).is_ok());
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_edges_matching_endpoint_pairs() {
        let g = DirectedGraph::new("g");
        let a = vertex();
        let b = vertex();
        g.add_vertex(Arc::clone(&a));
        g.add_vertex(Arc::clone(&b));

        let ab = Arc::new(DirectedEdge::between(
            Some(Arc::clone(&a)),
            Some(Arc::clone(&b)),
        ));
        let ba = Arc::new(DirectedEdge::between(
            Some(Arc::clone(&b)),
            Some(Arc::clone(&a)),
        ));
        let half = Arc::new(DirectedEdge::between(None, Some(Arc::clone(&b))));
        g.add_edge(Arc::clone(&ab), false).unwrap();
        g.add_edge(Arc::clone(&ba), false).unwrap();
        g.add_edge(Arc::clone(&half), false).unwrap();

        let found = g.edges_matching(Some(&a), Some(&b)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), ab.id());

        // an absent parameter matches only an absent endpoint
        let found = g.edges_matching(None, Some(&b)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), half.id());

        assert!(g.edges_matching(Some(&a), Some(&a)).unwrap().is_empty());
        assert_eq!(
            g.edges_matching(None, None),
            Err(GraphError::EmptyEndpointQuery)
        );
    }

    #[test]
    fn test_vertex_edges_and_slot_restricted_queries() {
        let g = DirectedGraph::new("g");
        let a = vertex();
        let b = vertex();
        g.add_vertex(Arc::clone(&a));
        g.add_vertex(Arc::clone(&b));

        let ab = Arc::new(DirectedEdge::between(
            Some(Arc::clone(&a)),
            Some(Arc::clone(&b)),
        ));
        let half = Arc::new(DirectedEdge::between(Some(Arc::clone(&b)), None));
        g.add_edge(Arc::clone(&ab), false).unwrap();
        g.add_edge(Arc::clone(&half), false).unwrap();

        assert_eq!(g.vertex_edges(Some(&a)).len(), 1);
        assert_eq!(g.vertex_edges(Some(&b)).len(), 2);
        // absent vertex matches any half edge
        let halves = g.vertex_edges(None);
        assert_eq!(halves.len(), 1);
        assert_eq!(halves[0].id(), half.id());

        assert_eq!(g.vertex_edges_matching_start(Some(&a)).len(), 1);
        assert_eq!(g.vertex_edges_matching_start(Some(&b)).len(), 1);
        assert_eq!(g.vertex_edges_matching_end(Some(&b)).len(), 1);
        assert_eq!(g.vertex_edges_matching_end(None).len(), 1);
    }

    #[test]
    fn test_results_are_in_edge_id_order() {
        let g = DirectedGraph::new("g");
        let a = vertex();
        g.add_vertex(Arc::clone(&a));

        let edges: Vec<_> = (0..5)
            .map(|_| Arc::new(DirectedEdge::between(Some(Arc::clone(&a)), None)))
            .collect();
        // insert in reverse creation order
        for e in edges.iter().rev() {
            g.add_edge(Arc::clone(e), false).unwrap();
        }

        let found = g.vertex_edges(Some(&a));
        let ids: Vec<_> = found.iter().map(|e| e.id()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_display_summary_and_detail() {
        let g = DirectedGraph::new("net");
        let a = vertex();
        let b = vertex();
        g.add_vertex(Arc::clone(&a));
        g.add_vertex(Arc::clone(&b));
        g.add_edge(Arc::new(DirectedEdge::between(Some(a), Some(b))), false)
            .unwrap();

        assert_eq!(
            g.to_string(),
            "DirectedGraph{name='net', vertices=2, edges=1}"
        );
        let detail = g.detailed_string();
        assert!(detail.contains("vertex_list=["));
        assert!(detail.contains("edge_list=[DirectedEdge{"));
    }

    #[test]
    fn test_concurrent_insertion() {
        use std::thread;

        let g = Arc::new(DirectedGraph::new("shared"));
        let hub = vertex();
        g.add_vertex(Arc::clone(&hub));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let g = Arc::clone(&g);
                let hub = Arc::clone(&hub);
                thread::spawn(move || {
                    for _ in 0..50 {
                        let v = Arc::new(Vertex::new());
                        g.add_vertex(Arc::clone(&v));
                        let e = Arc::new(DirectedEdge::between(
                            Some(Arc::clone(&hub)),
                            Some(v),
                        ));
                        g.add_edge(e, false).expect("endpoints registered");
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(g.vertex_count(), 8 * 50 + 1);
        assert_eq!(g.edge_count(), 8 * 50);
    }
}
