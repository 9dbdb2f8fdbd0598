//! Directed and undirected edges.
//!
//! Both edge kinds embed the same [`EdgeCore`]: a creation-ordered identity
//! plus the shared mutable attributes (weight, label, color preference).
//! Endpoint slots are independently optional — a half edge or a fully
//! detached edge is legal until it is offered to a graph, which is where the
//! "at least one endpoint" rule is enforced.

use crate::color::Color;
use crate::error::GraphError;
use crate::vertex::Vertex;
use crate::{EdgeId, next_edge_id};
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Debug)]
struct EdgeCore {
    id: EdgeId,
    attrs: RwLock<EdgeAttrs>,
}

#[derive(Debug, Clone)]
struct EdgeAttrs {
    weight: f64,
    information: Option<String>,
    preferred_color: Option<Color>,
}

impl EdgeCore {
    fn new(preferred_color: Option<Color>, information: Option<String>) -> Self {
        Self {
            id: next_edge_id(),
            attrs: RwLock::new(EdgeAttrs {
                weight: 1.0,
                information,
                preferred_color,
            }),
        }
    }

    fn set_weight(&self, weight: f64) -> Result<(), GraphError> {
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight(weight));
        }
        self.attrs.write().weight = weight;
        Ok(())
    }
}

/// An edge with a distinguishable start and end vertex.
#[derive(Debug)]
pub struct DirectedEdge {
    core: EdgeCore,
    start: RwLock<Option<Arc<Vertex>>>,
    end: RwLock<Option<Arc<Vertex>>>,
}

impl DirectedEdge {
    /// Creates a fully detached directed edge (both endpoints absent).
    pub fn new() -> Self {
        Self::between(None, None)
    }

    pub fn between(start: Option<Arc<Vertex>>, end: Option<Arc<Vertex>>) -> Self {
        Self::with_style(start, end, None, None)
    }

    pub fn with_style(
        start: Option<Arc<Vertex>>,
        end: Option<Arc<Vertex>>,
        preferred_color: Option<Color>,
        information: Option<String>,
    ) -> Self {
        Self {
            core: EdgeCore::new(preferred_color, information),
            start: RwLock::new(start),
            end: RwLock::new(end),
        }
    }

    pub fn id(&self) -> EdgeId {
        self.core.id
    }

    pub fn start(&self) -> Option<Arc<Vertex>> {
        self.start.read().clone()
    }

    pub fn set_start(&self, start: Option<Arc<Vertex>>) {
        *self.start.write() = start;
    }

    pub fn end(&self) -> Option<Arc<Vertex>> {
        self.end.read().clone()
    }

    pub fn set_end(&self, end: Option<Arc<Vertex>>) {
        *self.end.write() = end;
    }

    /// True when both endpoint slots are empty.
    pub fn is_detached(&self) -> bool {
        self.start.read().is_none() && self.end.read().is_none()
    }

    pub fn weight(&self) -> f64 {
        self.core.attrs.read().weight
    }

    /// Sets the edge weight. Rejects NaN and infinite values.
    pub fn set_weight(&self, weight: f64) -> Result<(), GraphError> {
        self.core.set_weight(weight)
    }

    pub fn information(&self) -> Option<String> {
        self.core.attrs.read().information.clone()
    }

    pub fn set_information(&self, information: Option<String>) {
        self.core.attrs.write().information = information;
    }

    pub fn preferred_color(&self) -> Option<Color> {
        self.core.attrs.read().preferred_color
    }

    pub fn set_preferred_color(&self, preferred_color: Option<Color>) {
        self.core.attrs.write().preferred_color = preferred_color;
    }
}

impl Default for DirectedEdge {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for DirectedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.core.id == other.core.id
    }
}

impl Eq for DirectedEdge {}

impl PartialOrd for DirectedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DirectedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.core.id.cmp(&other.core.id)
    }
}

impl Hash for DirectedEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.core.id.hash(state);
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attrs = self.core.attrs.read();
        write!(
            f,
            "DirectedEdge{{id={}, start={}, end={}, weight={}, information='{}'}}",
            self.core.id,
            endpoint_label(&self.start.read()),
            endpoint_label(&self.end.read()),
            attrs.weight,
            attrs.information.as_deref().unwrap_or(""),
        )
    }
}

/// An edge with two unordered endpoint slots; matching is symmetric.
#[derive(Debug)]
pub struct UndirectedEdge {
    core: EdgeCore,
    one: RwLock<Option<Arc<Vertex>>>,
    other: RwLock<Option<Arc<Vertex>>>,
}

impl UndirectedEdge {
    /// Creates a fully detached undirected edge (both endpoints absent).
    pub fn new() -> Self {
        Self::between(None, None)
    }

    pub fn between(one: Option<Arc<Vertex>>, other: Option<Arc<Vertex>>) -> Self {
        Self::with_style(one, other, None, None)
    }

    pub fn with_style(
        one: Option<Arc<Vertex>>,
        other: Option<Arc<Vertex>>,
        preferred_color: Option<Color>,
        information: Option<String>,
    ) -> Self {
        Self {
            core: EdgeCore::new(preferred_color, information),
            one: RwLock::new(one),
            other: RwLock::new(other),
        }
    }

    pub fn id(&self) -> EdgeId {
        self.core.id
    }

    pub fn one_vertex(&self) -> Option<Arc<Vertex>> {
        self.one.read().clone()
    }

    pub fn set_one_vertex(&self, one: Option<Arc<Vertex>>) {
        *self.one.write() = one;
    }

    pub fn other_vertex(&self) -> Option<Arc<Vertex>> {
        self.other.read().clone()
    }

    pub fn set_other_vertex(&self, other: Option<Arc<Vertex>>) {
        *self.other.write() = other;
    }

    /// True when both endpoint slots are empty.
    pub fn is_detached(&self) -> bool {
        self.one.read().is_none() && self.other.read().is_none()
    }

    pub fn weight(&self) -> f64 {
        self.core.attrs.read().weight
    }

    /// Sets the edge weight. Rejects NaN and infinite values.
    pub fn set_weight(&self, weight: f64) -> Result<(), GraphError> {
        self.core.set_weight(weight)
    }

    pub fn information(&self) -> Option<String> {
        self.core.attrs.read().information.clone()
    }

    pub fn set_information(&self, information: Option<String>) {
        self.core.attrs.write().information = information;
    }

    pub fn preferred_color(&self) -> Option<Color> {
        self.core.attrs.read().preferred_color
    }

    pub fn set_preferred_color(&self, preferred_color: Option<Color>) {
        self.core.attrs.write().preferred_color = preferred_color;
    }
}

impl Default for UndirectedEdge {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for UndirectedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.core.id == other.core.id
    }
}

impl Eq for UndirectedEdge {}

impl PartialOrd for UndirectedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UndirectedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.core.id.cmp(&other.core.id)
    }
}

impl Hash for UndirectedEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.core.id.hash(state);
    }
}

impl fmt::Display for UndirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attrs = self.core.attrs.read();
        write!(
            f,
            "UndirectedEdge{{id={}, one={}, other={}, weight={}, information='{}'}}",
            self.core.id,
            endpoint_label(&self.one.read()),
            endpoint_label(&self.other.read()),
            attrs.weight,
            attrs.information.as_deref().unwrap_or(""),
        )
    }
}

fn endpoint_label(slot: &Option<Arc<Vertex>>) -> String {
    match slot {
        Some(v) => v.id().to_string(),
        None => "none".to_string(),
    }
}
