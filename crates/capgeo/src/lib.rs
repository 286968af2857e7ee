//! # capgeo: CAP geometry codec
//!
//! This crate converts between the shapes a map-drawing surface
//! reports and the coordinate strings that ride inside
//! [Common Alerting Protocol](https://en.wikipedia.org/wiki/Common_Alerting_Protocol)
//! (CAP) `<polygon>` and `<circle>` elements. It contains all the
//! precision-sensitive geometry in the system: reprojection between
//! the drawing plane and geographic coordinates, great-circle radius
//! measurement, and the fixed five-decimal rounding the wire format
//! requires.
//!
//! The drawing surface works in spherical web mercator meters; CAP
//! strings carry `lat,lon` in WGS 84 decimal degrees. Note the order:
//! the wire format puts latitude first, the reverse of the usual
//! `(x, y)` plane convention. That swap is part of the format, not a
//! mistake to fix.
//!
//! ## Example
//!
//! ```
//! use capgeo::{decode_polygon, encode_circle, encode_polygon, ProjectedPoint};
//!
//! // a triangle over downtown Pittsburgh, in plane meters
//! let ring = [
//!     ProjectedPoint::new(-8906672.45836982, 4931552.160541192),
//!     ProjectedPoint::new(-8903332.87364602, 4931552.160541192),
//!     ProjectedPoint::new(-8905002.666007921, 4927164.56438487),
//! ];
//!
//! // the first vertex is repeated to close the ring
//! let text = encode_polygon(&ring).expect("at least three vertices");
//! assert_eq!(
//!     "40.45000,-80.01000 40.45000,-79.98000 40.42000,-79.99500 40.45000,-80.01000",
//!     text
//! );
//!
//! // decoding returns one plane point per token
//! let vertices = decode_polygon(&text).expect("well-formed string");
//! assert_eq!(4, vertices.len());
//!
//! // circles are "lat,lon radius", radius in kilometers
//! let center = ProjectedPoint::new(0.0, 0.0);
//! let edge = ProjectedPoint::new(1000.0, 0.0);
//! assert_eq!("0.00000,0.00000 1.00000", encode_circle(center, edge));
//! ```
//!
//! Malformed input is reported, never guessed at: a polygon with
//! fewer than three vertices will not encode, and a token that is
//! not plain fixed-point decimal will not decode.
//!
//! Some drawing surfaces cannot tag circles and instead sample them
//! into rings of exactly 40 vertices. [`Shape::from_sampled`] keeps
//! that convention working; [`Shape::polygon`] and [`Shape::circle`]
//! carry an explicit tag instead and are what new callers should
//! use.

mod codec;
mod projection;
mod shape;

pub use codec::{decode_circle, decode_polygon, encode_circle, encode_polygon, GeometryError};
pub use projection::{haversine_distance, GeoPoint, ProjectedPoint, EARTH_RADIUS_M};
pub use shape::{Shape, ShapeKind, CIRCLE_SAMPLE_VERTICES};
