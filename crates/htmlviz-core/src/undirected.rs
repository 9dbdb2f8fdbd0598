//! Undirected graph container.

use crate::directed::{identity_eq, join_display, slot_matches};
use crate::edge::UndirectedEdge;
use crate::error::GraphError;
use crate::vertex::Vertex;
use crate::{EdgeId, VertexId};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// The undirected counterpart of [`crate::DirectedGraph`]: same id-ordered
/// concurrent collections and insertion rules, but edge matching is
/// symmetric — an [`UndirectedEdge`]'s two slots carry no direction, so a
/// query pair matches in either assignment order. There are no
/// start/end-restricted queries here; the distinction does not exist for an
/// undirected edge.
#[derive(Debug, Default)]
pub struct UndirectedGraph {
    name: Option<String>,
    vertices: RwLock<BTreeMap<VertexId, Arc<Vertex>>>,
    edges: RwLock<BTreeMap<EdgeId, Arc<UndirectedEdge>>>,
}

impl UndirectedGraph {
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

    /// Inserts a vertex; a no-op when the identity is already present.
    pub fn add_vertex(&self, vertex: Arc<Vertex>) {
        self.vertices.write().entry(vertex.id()).or_insert(vertex);
    }

    /// Inserts an edge under the same rules as the directed container: at
    /// least one endpoint present, every present endpoint registered (or
    /// auto-added), validation before mutation.
    pub fn add_edge(
        &self,
        edge: Arc<UndirectedEdge>,
        auto_add_vertices: bool,
    ) -> Result<(), GraphError> {
        let one = edge.one_vertex();
        let other = edge.other_vertex();
        if one.is_none() && other.is_none() {
            return Err(GraphError::DetachedEdge);
        }

        if auto_add_vertices {
            for endpoint in [&one, &other].into_iter().flatten() {
                debug!(vertex = %endpoint.id(), "auto-adding edge endpoint");
                self.add_vertex(Arc::clone(endpoint));
            }
        }

        {
            let vertices = self.vertices.read();
            for (slot, endpoint) in [("one", &one), ("other", &other)] {
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

    /// Id-ordered snapshot of the vertex collection (live `Arc` entities).
    pub fn vertices(&self) -> Vec<Arc<Vertex>> {
        self.vertices.read().values().cloned().collect()
    }

    /// Id-ordered snapshot of the edge collection.
    pub fn edges(&self) -> Vec<Arc<UndirectedEdge>> {
        self.edges.read().values().cloned().collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.read().len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.read().len()
    }

    /// All edges matching the given endpoint pair, in edge-id order. With
    /// both parameters present, `{one, other}` matches `{edge.one,
    /// edge.other}` as an unordered pair. With exactly one present, it
    /// matches edges carrying that vertex in either slot. Fails when both
    /// are absent.
    pub fn edges_matching(
        &self,
        one: Option<&Vertex>,
        other: Option<&Vertex>,
    ) -> Result<Vec<Arc<UndirectedEdge>>, GraphError> {
        let edges = self.edges.read();
        match (one, other) {
            (None, None) => Err(GraphError::EmptyEndpointQuery),
            (Some(v), None) | (None, Some(v)) => Ok(edges
                .values()
                .filter(|edge| {
                    identity_eq(v, edge.one_vertex().as_deref())
                        || identity_eq(v, edge.other_vertex().as_deref())
                })
                .cloned()
                .collect()),
            (Some(a), Some(b)) => Ok(edges
                .values()
                .filter(|edge| {
                    let eo = edge.one_vertex();
                    let et = edge.other_vertex();
                    (slot_matches(Some(a), eo.as_deref()) && slot_matches(Some(b), et.as_deref()))
                        || (slot_matches(Some(b), eo.as_deref())
                            && slot_matches(Some(a), et.as_deref()))
                })
                .cloned()
                .collect()),
        }
    }

    /// All edges touching the given vertex in either slot, in edge-id order.
    /// An absent `vertex` matches any half edge.
    pub fn vertex_edges(&self, vertex: Option<&Vertex>) -> Vec<Arc<UndirectedEdge>> {
        self.edges
            .read()
            .values()
            .filter(|edge| match vertex {
                None => edge.one_vertex().is_none() || edge.other_vertex().is_none(),
                Some(v) => {
                    identity_eq(v, edge.one_vertex().as_deref())
                        || identity_eq(v, edge.other_vertex().as_deref())
                }
            })
            .cloned()
            .collect()
    }

    /// Full listing form: the compact summary plus every vertex and edge.
    pub fn detailed_string(&self) -> String {
        let vertices = self.vertices();
        let edges = self.edges();
        format!(
            "UndirectedGraph{{name='{}', vertices={}, edges={}, vertex_list=[{}], edge_list=[{}]}}",
            self.name.as_deref().unwrap_or(""),
            vertices.len(),
            edges.len(),
            join_display(&vertices),
            join_display(&edges),
        )
    }
}

impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UndirectedGraph{{name='{}', vertices={}, edges={}}}",
            self.name.as_deref().unwrap_or(""),
            self.vertex_count(),
            self.edge_count(),
        )
    }
}
