//! Chart rendering over static HTML templates.
//!
//! The chart kinds differ only in the data shape they accept and the token
//! values they emit, so they share one renderer: [`Chart`] pairs a
//! [`ChartKind`] with a [`ChartData`] payload and a [`Template`], validates
//! the data, and substitutes the token values. Categorical kinds render
//! through the Google Charts template; heatmaps and 3D scatters render
//! through the Plotly template.

use crate::error::RenderError;
use crate::template::Template;
use serde_json::{Value, json};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    BarVertical,
    BarHorizontal,
    Line,
    Pie,
    Histogram,
    Bubble,
    Heatmap,
    Scatter3D,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::BarVertical => "bar-vertical",
            ChartKind::BarHorizontal => "bar-horizontal",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Histogram => "histogram",
            ChartKind::Bubble => "bubble",
            ChartKind::Heatmap => "heatmap",
            ChartKind::Scatter3D => "scatter-3d",
        }
    }

    /// Google Charts visualization class, for the kinds it backs.
    fn gchart_type(&self) -> Option<&'static str> {
        match self {
            ChartKind::BarVertical => Some("ColumnChart"),
            ChartKind::BarHorizontal => Some("BarChart"),
            ChartKind::Line => Some("LineChart"),
            ChartKind::Pie => Some("PieChart"),
            ChartKind::Histogram => Some("Histogram"),
            ChartKind::Bubble => Some("BubbleChart"),
            ChartKind::Heatmap | ChartKind::Scatter3D => None,
        }
    }

    pub fn default_template(&self) -> Template {
        if self.gchart_type().is_some() {
            Template::google_chart()
        } else {
            Template::plotly_chart()
        }
    }
}

/// A named value column of a categorical chart.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BubblePoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Input data for a chart. Each [`ChartKind`] accepts exactly one shape.
#[derive(Debug, Clone)]
pub enum ChartData {
    /// One label per row plus one or more value series
    /// (bar/line/pie/histogram).
    Categorical {
        labels: Vec<String>,
        series: Vec<Series>,
    },
    /// Labelled x/y/size points (bubble).
    Bubbles(Vec<BubblePoint>),
    /// A value grid with axis labels (heatmap).
    Matrix {
        x_labels: Vec<String>,
        y_labels: Vec<String>,
        values: Vec<Vec<f64>>,
    },
    /// Raw x/y/z triples (3D scatter).
    Points3D(Vec<[f64; 3]>),
}

pub struct Chart {
    kind: ChartKind,
    data: ChartData,
    template: Template,
    title: String,
    subtitle: String,
    x_title: String,
    y_title: String,
    footnote: String,
    width: u32,
    height: u32,
}

impl Chart {
    pub const DEFAULT_WIDTH: u32 = 900;
    pub const DEFAULT_HEIGHT: u32 = 500;
    pub const DEFAULT_TITLE: &'static str = "Chart";
    pub const DEFAULT_X_TITLE: &'static str = "X";
    pub const DEFAULT_Y_TITLE: &'static str = "Y";

    /// Creates a chart with the kind's bundled template.
    pub fn new(kind: ChartKind, data: ChartData) -> Self {
        Self::with_template(kind, data, kind.default_template())
    }

    pub fn with_template(kind: ChartKind, data: ChartData, template: Template) -> Self {
        Self {
            kind,
            data,
            template,
            title: Self::DEFAULT_TITLE.to_string(),
            subtitle: String::new(),
            x_title: Self::DEFAULT_X_TITLE.to_string(),
            y_title: Self::DEFAULT_Y_TITLE.to_string(),
            footnote: String::new(),
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
        self.subtitle = subtitle.into();
    }

    pub fn set_x_title(&mut self, x_title: impl Into<String>) {
        self.x_title = x_title.into();
    }

    pub fn set_y_title(&mut self, y_title: impl Into<String>) {
        self.y_title = y_title.into();
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

    /// Produces the chart HTML string. Validation runs before any template
    /// substitution.
    pub fn generate(&self) -> Result<String, RenderError> {
        self.validate()?;
        debug!(kind = self.kind.label(), "rendering chart");

        let mut tokens = vec![
            ("WIDTH", self.width.to_string()),
            ("HEIGHT", self.height.to_string()),
            ("TITLE_CHART", self.title.clone()),
            ("SUBTITLE", self.subtitle.clone()),
            ("TITLE_X", self.x_title.clone()),
            ("TITLE_Y", self.y_title.clone()),
            ("FOOTNOTE", self.footnote.clone()),
        ];

        match self.kind.gchart_type() {
            Some(gchart_type) => {
                let (columns, rows) = self.gchart_payload()?;
                tokens.push(("TYPE", gchart_type.to_string()));
                tokens.push(("COLUMNS", serde_json::to_string(&columns)?));
                tokens.push(("DATA", serde_json::to_string(&rows)?));
            }
            None => {
                let traces = self.plotly_traces();
                tokens.push(("TRACES", serde_json::to_string(&traces)?));
            }
        }

        Ok(self.template.render(&tokens))
    }

    fn validate(&self) -> Result<(), RenderError> {
        match (&self.kind, &self.data) {
            (
                ChartKind::BarVertical
                | ChartKind::BarHorizontal
                | ChartKind::Line
                | ChartKind::Pie
                | ChartKind::Histogram,
                ChartData::Categorical { labels, series },
            ) => {
                if labels.is_empty() {
                    return Err(RenderError::MissingLabel("row labels".to_string()));
                }
                if let Some(position) = labels.iter().position(|l| l.is_empty()) {
                    return Err(RenderError::MissingLabel(format!("row label {position}")));
                }
                if series.is_empty() {
                    return Err(RenderError::InconsistentData {
                        what: "series count".to_string(),
                        expected: 1,
                        actual: 0,
                    });
                }
                if self.kind == ChartKind::Pie && series.len() != 1 {
                    return Err(RenderError::WrongDataShape {
                        kind: self.kind.label(),
                        expected: "exactly one series",
                    });
                }
                for s in series {
                    if s.name.is_empty() {
                        return Err(RenderError::MissingLabel("series name".to_string()));
                    }
                    if s.values.len() != labels.len() {
                        return Err(RenderError::InconsistentData {
                            what: format!("series '{}'", s.name),
                            expected: labels.len(),
                            actual: s.values.len(),
                        });
                    }
                }
                Ok(())
            }
            (ChartKind::Bubble, ChartData::Bubbles(points)) => {
                if let Some(position) = points.iter().position(|p| p.label.is_empty()) {
                    return Err(RenderError::MissingLabel(format!("bubble label {position}")));
                }
                Ok(())
            }
            (
                ChartKind::Heatmap,
                ChartData::Matrix {
                    x_labels,
                    y_labels,
                    values,
                },
            ) => {
                if values.len() != y_labels.len() {
                    return Err(RenderError::InconsistentData {
                        what: "matrix rows".to_string(),
                        expected: y_labels.len(),
                        actual: values.len(),
                    });
                }
                for (i, row) in values.iter().enumerate() {
                    if row.len() != x_labels.len() {
                        return Err(RenderError::InconsistentData {
                            what: format!("matrix row {i}"),
                            expected: x_labels.len(),
                            actual: row.len(),
                        });
                    }
                }
                Ok(())
            }
            (ChartKind::Scatter3D, ChartData::Points3D(_)) => Ok(()),
            (kind, data) => Err(RenderError::WrongDataShape {
                kind: kind.label(),
                expected: data_shape_name(data),
            }),
        }
    }

    fn gchart_payload(&self) -> Result<(Vec<Value>, Vec<Value>), RenderError> {
        match &self.data {
            ChartData::Categorical { labels, series } => {
                let mut columns = vec![json!("Label")];
                columns.extend(series.iter().map(|s| json!(&s.name)));

                let rows = labels
                    .iter()
                    .enumerate()
                    .map(|(i, label)| {
                        let mut row = vec![json!(label)];
                        row.extend(series.iter().map(|s| json!(s.values[i])));
                        Value::Array(row)
                    })
                    .collect();
                Ok((columns, rows))
            }
            ChartData::Bubbles(points) => {
                let columns = vec![json!("ID"), json!("X"), json!("Y"), json!("Size")];
                let rows = points
                    .iter()
                    .map(|p| json!([&p.label, p.x, p.y, p.size]))
                    .collect();
                Ok((columns, rows))
            }
            // validate() guarantees kind/data agreement
            _ => Err(RenderError::WrongDataShape {
                kind: self.kind.label(),
                expected: data_shape_name(&self.data),
            }),
        }
    }

    fn plotly_traces(&self) -> Vec<Value> {
        match &self.data {
            ChartData::Matrix {
                x_labels,
                y_labels,
                values,
            } => vec![json!({
                "x": x_labels,
                "y": y_labels,
                "z": values,
                "type": "heatmap",
            })],
            ChartData::Points3D(points) => {
                let x: Vec<f64> = points.iter().map(|p| p[0]).collect();
                let y: Vec<f64> = points.iter().map(|p| p[1]).collect();
                let z: Vec<f64> = points.iter().map(|p| p[2]).collect();
                vec![json!({
                    "x": x,
                    "y": y,
                    "z": z,
                    "mode": "markers",
                    "type": "scatter3d",
                })]
            }
            _ => Vec::new(),
        }
    }
}

fn data_shape_name(data: &ChartData) -> &'static str {
    match data {
        ChartData::Categorical { .. } => "categorical labels and series",
        ChartData::Bubbles(_) => "labelled bubble points",
        ChartData::Matrix { .. } => "a labelled value matrix",
        ChartData::Points3D(_) => "x/y/z point triples",
    }
}
