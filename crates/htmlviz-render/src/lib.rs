//! HTML/JS chart rendering over `$TOKEN$` templates.
//!
//! Every renderer takes its [`Template`] at construction (the bundled ones
//! are available through `Template` constructors) and produces a
//! self-contained HTML string: [`ForceGraph2D`] for a directed graph via a
//! D3 force layout, [`Chart`] for the tabular chart kinds via Google Charts
//! or Plotly.

pub mod chart;
pub mod error;
pub mod force_graph;
pub mod template;

pub use chart::{BubblePoint, Chart, ChartData, ChartKind, Series};
pub use error::RenderError;
pub use force_graph::ForceGraph2D;
pub use template::Template;
