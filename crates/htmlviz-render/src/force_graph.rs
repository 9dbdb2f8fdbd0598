//! D3 force-layout rendering of a directed graph.

use crate::error::RenderError;
use crate::template::Template;
use htmlviz_core::{DirectedGraph, VertexId};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Serialize)]
struct NodePayload {
    x: Option<f64>,
    y: Option<f64>,
}

#[derive(Serialize)]
struct LinkPayload {
    source: usize,
    target: usize,
}

/// Renders a [`DirectedGraph`] as a self-contained force-layout HTML page.
///
/// Vertices serialize to the node list in id order; link endpoints resolve
/// by vertex identity into that list, so vertices sharing coordinates keep
/// distinct indices. Unset (NaN) coordinates become JSON `null` and the
/// client-side simulation places those nodes. Edges with an absent or
/// unregistered endpoint are skipped.
pub struct ForceGraph2D {
    graph: Arc<DirectedGraph>,
    template: Template,
    title: String,
    footnote: String,
    width: u32,
    height: u32,
}

impl ForceGraph2D {
    pub const DEFAULT_WIDTH: u32 = 900;
    pub const DEFAULT_HEIGHT: u32 = 500;
    pub const DEFAULT_TITLE: &'static str = "Chart";
    pub const DEFAULT_FOOTNOTE: &'static str = "";

    /// Creates a renderer over the given graph with the bundled template.
    pub fn new(graph: Arc<DirectedGraph>) -> Self {
        Self::with_template(graph, Template::force_graph_2d())
    }

    pub fn with_template(graph: Arc<DirectedGraph>, template: Template) -> Self {
        Self {
            graph,
            template,
            title: Self::DEFAULT_TITLE.to_string(),
            footnote: Self::DEFAULT_FOOTNOTE.to_string(),
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_footnote(&mut self, footnote: impl Into<String>) {
        self.footnote = footnote.into();
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    /// Produces the chart HTML string.
    pub fn generate(&self) -> Result<String, RenderError> {
        let vertices = self.graph.vertices();
        let index: HashMap<VertexId, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id(), i))
            .collect();

        let nodes: Vec<NodePayload> = vertices
            .iter()
            .map(|v| NodePayload {
                x: coordinate(v.preferred_x()),
                y: coordinate(v.preferred_y()),
            })
            .collect();

        let mut links = Vec::new();
        for edge in self.graph.edges() {
            let start = edge.start().and_then(|v| index.get(&v.id()).copied());
            let end = edge.end().and_then(|v| index.get(&v.id()).copied());
            match (start, end) {
                // the bundled template draws the arrow from `source` to
                // `target`, and the start vertex is the arrow target
                (Some(start), Some(end)) => links.push(LinkPayload {
                    source: end,
                    target: start,
                }),
                _ => debug!(edge = %edge.id(), "skipping edge with unresolved endpoint"),
            }
        }

        debug!(nodes = nodes.len(), links = links.len(), "rendering force graph");

        Ok(self.template.render(&[
            ("NODES", serde_json::to_string(&nodes)?),
            ("LINKS", serde_json::to_string(&links)?),
            ("WIDTH", self.width.to_string()),
            ("HEIGHT", self.height.to_string()),
            ("TITLE_CHART", self.title.clone()),
            ("FOOTNOTE", self.footnote.clone()),
        ]))
    }
}

fn coordinate(value: f64) -> Option<f64> {
    if value.is_nan() { None } else { Some(value) }
}
