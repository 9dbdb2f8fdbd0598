//! Graph vertices with optional rendering hints.

use crate::color::Color;
use crate::error::GraphError;
use crate::{VertexId, next_vertex_id};
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A point in a graph. Identity is assigned at creation and never changes;
/// everything else is a mutable rendering hint. A vertex is created
/// standalone and may be shared (via `Arc`) by any number of graphs and
/// edges — equality, ordering and hashing use the identity only, so two
/// vertices with identical coordinates stay distinct entities.
///
/// Coordinates use NaN as the "no preference" sentinel: the client-side
/// force layout picks a position for any unset axis.
#[derive(Debug)]
pub struct Vertex {
    id: VertexId,
    attrs: RwLock<VertexAttrs>,
}

#[derive(Debug, Clone)]
struct VertexAttrs {
    preferred_x: f64,
    preferred_y: f64,
    preferred_z: f64,
    preferred_radius: f64,
    information: Option<String>,
    preferred_color: Option<Color>,
}

impl Vertex {
    /// Creates an empty vertex: unset coordinates, radius 1.0, no label, no
    /// color preference.
    pub fn new() -> Self {
        Self::with_info(None, None)
    }

    /// Creates a vertex carrying an informational label and/or a color
    /// preference, with unset coordinates and radius 1.0.
    pub fn with_info(information: Option<String>, preferred_color: Option<Color>) -> Self {
        Self {
            id: next_vertex_id(),
            attrs: RwLock::new(VertexAttrs {
                preferred_x: f64::NAN,
                preferred_y: f64::NAN,
                preferred_z: f64::NAN,
                preferred_radius: 1.0,
                information,
                preferred_color,
            }),
        }
    }

    /// Creates a fully specified vertex. Coordinates are unvalidated (NaN
    /// means no preference); the radius must not be negative or infinite.
    pub fn with_layout(
        preferred_x: f64,
        preferred_y: f64,
        preferred_z: f64,
        preferred_radius: f64,
        information: Option<String>,
        preferred_color: Option<Color>,
    ) -> Result<Self, GraphError> {
        check_radius(preferred_radius)?;
        Ok(Self {
            id: next_vertex_id(),
            attrs: RwLock::new(VertexAttrs {
                preferred_x,
                preferred_y,
                preferred_z,
                preferred_radius,
                information,
                preferred_color,
            }),
        })
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn preferred_x(&self) -> f64 {
        self.attrs.read().preferred_x
    }

    pub fn set_preferred_x(&self, x: f64) {
        self.attrs.write().preferred_x = x;
    }

    pub fn preferred_y(&self) -> f64 {
        self.attrs.read().preferred_y
    }

    pub fn set_preferred_y(&self, y: f64) {
        self.attrs.write().preferred_y = y;
    }

    pub fn preferred_z(&self) -> f64 {
        self.attrs.read().preferred_z
    }

    pub fn set_preferred_z(&self, z: f64) {
        self.attrs.write().preferred_z = z;
    }

    pub fn preferred_radius(&self) -> f64 {
        self.attrs.read().preferred_radius
    }

    /// Sets the preferred radius. Rejects negative and infinite values.
    pub fn set_preferred_radius(&self, radius: f64) -> Result<(), GraphError> {
        check_radius(radius)?;
        self.attrs.write().preferred_radius = radius;
        Ok(())
    }

    /// Informational label, if any.
    pub fn information(&self) -> Option<String> {
        self.attrs.read().information.clone()
    }

    pub fn set_information(&self, information: Option<String>) {
        self.attrs.write().information = information;
    }

    /// Color preference, if any. `None` means use the renderer default.
    pub fn preferred_color(&self) -> Option<Color> {
        self.attrs.read().preferred_color
    }

    pub fn set_preferred_color(&self, preferred_color: Option<Color>) {
        self.attrs.write().preferred_color = preferred_color;
    }
}

fn check_radius(radius: f64) -> Result<(), GraphError> {
    if radius < 0.0 {
        return Err(GraphError::NegativeRadius(radius));
    }
    if radius.is_infinite() {
        return Err(GraphError::InfiniteRadius(radius));
    }
    Ok(())
}

impl Default for Vertex {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attrs = self.attrs.read();
        write!(
            f,
            "Vertex{{id={}, x={}, y={}, z={}, radius={}, information='{}', color={}}}",
            self.id,
            attrs.preferred_x,
            attrs.preferred_y,
            attrs.preferred_z,
            attrs.preferred_radius,
            attrs.information.as_deref().unwrap_or(""),
            attrs
                .preferred_color
                .map(|c| c.to_hex())
                .unwrap_or_else(|| "none".to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let v = Vertex::new();
        assert!(v.preferred_x().is_nan());
        assert!(v.preferred_y().is_nan());
        assert!(v.preferred_z().is_nan());
        assert_eq!(v.preferred_radius(), 1.0);
        assert_eq!(v.information(), None);
        assert_eq!(v.preferred_color(), None);
    }

    #[test]
    fn test_radius_validation() {
        let v = Vertex::new();
        assert_eq!(
            v.set_preferred_radius(-1.0),
            Err(GraphError::NegativeRadius(-1.0))
        );
        assert_eq!(
            v.set_preferred_radius(f64::NEG_INFINITY),
            Err(GraphError::NegativeRadius(f64::NEG_INFINITY))
        );
        assert_eq!(
            v.set_preferred_radius(f64::INFINITY),
            Err(GraphError::InfiniteRadius(f64::INFINITY))
        );

        assert!(v.set_preferred_radius(0.0).is_ok());
        assert!(v.set_preferred_radius(1.0).is_ok());
        assert!(v.set_preferred_radius(1e9).is_ok());
        assert_eq!(v.preferred_radius(), 1e9);
    }

    #[test]
    fn test_layout_constructor_validates_radius() {
        assert!(Vertex::with_layout(0.0, 0.0, 0.0, -2.0, None, None).is_err());
        let v = Vertex::with_layout(1.0, 2.0, 3.0, 4.0, Some("v".into()), Some(Color::RED))
            .expect("valid layout");
        assert_eq!(v.preferred_x(), 1.0);
        assert_eq!(v.preferred_radius(), 4.0);
        assert_eq!(v.information().as_deref(), Some("v"));
    }

    #[test]
    fn test_identity_ordering() {
        let a = Vertex::new();
        let b = Vertex::new();
        assert!(a < b);
        assert_ne!(a, b);

        // identical attributes, still distinct entities
        let c = Vertex::with_info(Some("same".into()), None);
        let d = Vertex::with_info(Some("same".into()), None);
        assert_ne!(c, d);
    }

    #[test]
    fn test_mutation_through_shared_handle() {
        use std::sync::Arc;

        let v = Arc::new(Vertex::new());
        let other = Arc::clone(&v);
        other.set_preferred_x(7.5);
        assert_eq!(v.preferred_x(), 7.5);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_finite_non_negative_radius_accepted(r in 0.0..1e12f64) {
                let v = Vertex::new();
                prop_assert!(v.set_preferred_radius(r).is_ok());
                prop_assert_eq!(v.preferred_radius(), r);
            }

            #[test]
            fn prop_negative_radius_rejected(r in -1e12f64..-1e-9) {
                let v = Vertex::new();
                prop_assert!(v.set_preferred_radius(r).is_err());
                prop_assert_eq!(v.preferred_radius(), 1.0);
            }

            #[test]
            fn prop_creation_order_matches_id_order(n in 2usize..32) {
                let vertices: Vec<Vertex> = (0..n).map(|_| Vertex::new()).collect();
                for pair in vertices.windows(2) {
                    prop_assert!(pair[0].id() < pair[1].id());
                }
            }
        }
    }
}
