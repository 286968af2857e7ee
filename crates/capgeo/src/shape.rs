//! Shapes handed over by the drawing surface

use crate::codec::{encode_circle, encode_polygon, GeometryError};
use crate::projection::ProjectedPoint;

/// Number of sampled vertices the legacy drawing surface emits for circles
///
/// The original map surface could not report circles as such; it
/// sampled them into rings of exactly this many vertices and left
/// the count as the only marker of the shape's kind. See
/// [`Shape::from_sampled`].
pub const CIRCLE_SAMPLE_VERTICES: usize = 40;

/// What a [`Shape`]'s vertex list describes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A closed ring of vertices
    Polygon,

    /// A circle sampled along its rim
    Circle,
}

/// A drawn shape in projected-plane coordinates
///
/// Prefer the explicit [`Shape::polygon`] and [`Shape::circle`]
/// constructors, which carry the kind as data. [`Shape::from_sampled`]
/// exists for drawing surfaces that still mark circles by vertex
/// count alone. Either way, the encoded wire string comes out of
/// [`Shape::to_coordinate_string`] and does not depend on how the
/// kind was determined.
///
/// ```
/// use capgeo::{Shape, ShapeKind, ProjectedPoint};
///
/// let vertices = vec![
///     ProjectedPoint::new(0.0, 0.0),
///     ProjectedPoint::new(1000.0, 0.0),
///     ProjectedPoint::new(1000.0, 1000.0),
/// ];
///
/// let shape = Shape::polygon(vertices.clone());
/// assert_eq!(ShapeKind::Polygon, shape.kind());
///
/// // an explicit tag beats counting vertices
/// let shape = Shape::circle(vertices);
/// assert_eq!(ShapeKind::Circle, shape.kind());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    vertices: Vec<ProjectedPoint>,
}

impl Shape {
    /// New polygon from its ring vertices, in drawing order
    pub fn polygon(vertices: Vec<ProjectedPoint>) -> Self {
        Shape {
            kind: ShapeKind::Polygon,
            vertices,
        }
    }

    /// New circle from vertices sampled along its rim
    pub fn circle(vertices: Vec<ProjectedPoint>) -> Self {
        Shape {
            kind: ShapeKind::Circle,
            vertices,
        }
    }

    /// Classify a raw vertex list by the legacy sampling convention
    ///
    /// Exactly [`CIRCLE_SAMPLE_VERTICES`] vertices mean a circle;
    /// any other count means a polygon. Only use this with drawing
    /// surfaces that follow the convention. A user who draws a
    /// 40-cornered polygon on such a surface gets a circle, which is
    /// why the explicit constructors exist.
    pub fn from_sampled(vertices: Vec<ProjectedPoint>) -> Self {
        if vertices.len() == CIRCLE_SAMPLE_VERTICES {
            Shape::circle(vertices)
        } else {
            Shape::polygon(vertices)
        }
    }

    /// Kind of shape
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Vertices, in drawing order
    pub fn vertices(&self) -> &[ProjectedPoint] {
        &self.vertices
    }

    /// Arithmetic mean of the vertices, or `None` when there are none
    pub fn centroid(&self) -> Option<ProjectedPoint> {
        if self.vertices.is_empty() {
            return None;
        }

        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        for vtx in &self.vertices {
            sum_x += vtx.x;
            sum_y += vtx.y;
        }
        let count = self.vertices.len() as f64;
        Some(ProjectedPoint::new(sum_x / count, sum_y / count))
    }

    /// Encode as the CAP coordinate string for this kind of shape
    ///
    /// Polygons become `lat,lon` token rings per
    /// [`encode_polygon`](crate::encode_polygon); circles become
    /// `lat,lon radius` per [`encode_circle`](crate::encode_circle),
    /// measuring the radius from the centroid to the first sampled
    /// vertex.
    pub fn to_coordinate_string(&self) -> Result<String, GeometryError> {
        match self.kind {
            ShapeKind::Polygon => encode_polygon(&self.vertices),
            ShapeKind::Circle => {
                let center = self
                    .centroid()
                    .ok_or(GeometryError::TooFewVertices(0))?;
                Ok(encode_circle(center, self.vertices[0]))
            }
        }
    }
}
