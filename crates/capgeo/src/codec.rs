//! Polygon and circle coordinate strings

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use thiserror::Error;

use crate::projection::{haversine_distance, GeoPoint, ProjectedPoint};

/// Error encoding or decoding a coordinate string
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeometryError {
    /// Not enough vertices to form the requested shape
    ///
    /// Polygons require at least three vertices. Circles require at
    /// least one sampled vertex to measure the radius against. The
    /// count actually supplied is attached.
    #[error("too few vertices for shape ({0} given)")]
    TooFewVertices(usize),

    /// A token did not match the fixed-point coordinate grammar
    ///
    /// Raised for missing tokens, tokens which do not split into a
    /// `lat,lon` pair, and numeric components outside the plain
    /// decimal form. The offending token (or the whole string, when
    /// tokens are missing outright) is attached.
    #[error("malformed coordinate string: {0:?}")]
    MalformedCoordinateString(String),
}

const PANIC_MSG: &str = "coordinate grammar admitted an unparseable number";

/// Encode a polygon vertex list as a CAP polygon string
///
/// Vertices come from the drawing surface in projected-plane
/// coordinates and must number at least three. Each vertex is
/// inverse-projected and written as a `lat,lon` token rounded to
/// five decimal places, in input order. The first token is repeated
/// at the end to close the ring, so the output always carries one
/// token more than the input has vertices.
///
/// ```
/// use capgeo::{encode_polygon, GeometryError, ProjectedPoint};
///
/// let ring = [
///     ProjectedPoint::new(-8906672.45836982, 4931552.160541192),
///     ProjectedPoint::new(-8903332.87364602, 4931552.160541192),
///     ProjectedPoint::new(-8905002.666007921, 4927164.56438487),
/// ];
/// assert_eq!(
///     "40.45000,-80.01000 40.45000,-79.98000 40.42000,-79.99500 40.45000,-80.01000",
///     encode_polygon(&ring).unwrap()
/// );
///
/// assert_eq!(
///     Err(GeometryError::TooFewVertices(2)),
///     encode_polygon(&ring[0..2])
/// );
/// ```
pub fn encode_polygon(vertices: &[ProjectedPoint]) -> Result<String, GeometryError> {
    if vertices.len() < 3 {
        return Err(GeometryError::TooFewVertices(vertices.len()));
    }

    let mut tokens: Vec<String> = Vec::with_capacity(vertices.len() + 1);
    for vtx in vertices {
        tokens.push(format_point(GeoPoint::from_plane(*vtx)));
    }
    tokens.push(tokens[0].clone());
    Ok(tokens.join(" "))
}

/// Decode a CAP polygon string into plane vertices
///
/// Splits on whitespace into `lat,lon` tokens and projects each one
/// onto the drawing plane. The closing repeated vertex, if present,
/// is returned like any other: callers get exactly as many points
/// as the string has tokens. A string with no tokens at all, or any
/// token outside the fixed-point grammar, is malformed.
pub fn decode_polygon(text: &str) -> Result<Vec<ProjectedPoint>, GeometryError> {
    let mut vertices = Vec::new();
    for token in text.split_whitespace() {
        vertices.push(parse_point(token)?);
    }
    if vertices.is_empty() {
        return Err(GeometryError::MalformedCoordinateString(text.to_owned()));
    }
    Ok(vertices)
}

/// Encode a circle as a CAP circle string
///
/// `center` is the circle's centroid and `edge` any point on its
/// rim, both in plane coordinates. The radius is the great-circle
/// distance between the two after inverse projection, expressed in
/// kilometers; center and radius are rounded to five decimal places.
///
/// ```
/// use capgeo::{encode_circle, ProjectedPoint};
///
/// let center = ProjectedPoint::new(0.0, 0.0);
/// let edge = ProjectedPoint::new(1000.0, 0.0);
/// assert_eq!("0.00000,0.00000 1.00000", encode_circle(center, edge));
/// ```
pub fn encode_circle(center: ProjectedPoint, edge: ProjectedPoint) -> String {
    let center_geo = GeoPoint::from_plane(center);
    let radius_km = haversine_distance(center_geo, GeoPoint::from_plane(edge)) / 1000.0;
    format!("{} {:.5}", format_point(center_geo), radius_km)
}

/// Decode a CAP circle string into a plane center and radius
///
/// The first token is the center as `lat,lon`; the second is the
/// radius in kilometers, converted here to plane meters. Tokens
/// past the second are ignored. Missing tokens or tokens outside
/// the fixed-point grammar are malformed.
pub fn decode_circle(text: &str) -> Result<(ProjectedPoint, f64), GeometryError> {
    let mut tokens = text.split_whitespace();
    let center = parse_point(
        tokens
            .next()
            .ok_or_else(|| GeometryError::MalformedCoordinateString(text.to_owned()))?,
    )?;
    let radius_km = parse_radius_km(
        tokens
            .next()
            .ok_or_else(|| GeometryError::MalformedCoordinateString(text.to_owned()))?,
    )?;
    if tokens.next().is_some() {
        debug!("ignoring extra tokens in circle string: {:?}", text);
    }
    Ok((center, radius_km * 1000.0))
}

// "lat,lon" at five decimal places, the wire rounding
fn format_point(geo: GeoPoint) -> String {
    format!("{:.5},{:.5}", geo.lat, geo.lon)
}

/// Parse one `lat,lon` token into a plane point
///
/// The grammar admits only plain signed decimals. Exponents, `inf`,
/// `nan` and empty components are rejected even though `f64` would
/// parse some of them.
fn parse_point(token: &str) -> Result<ProjectedPoint, GeometryError> {
    lazy_static! {
        static ref COORD_RE: Regex =
            Regex::new(r"^(-?[0-9]+(?:\.[0-9]+)?),(-?[0-9]+(?:\.[0-9]+)?)$")
                .expect("bad coordinate regexp");
    }

    let mtc = COORD_RE
        .captures(token)
        .ok_or_else(|| GeometryError::MalformedCoordinateString(token.to_owned()))?;

    let lat: f64 = mtc[1].parse().expect(PANIC_MSG);
    let lon: f64 = mtc[2].parse().expect(PANIC_MSG);
    Ok(GeoPoint::new(lat, lon).to_plane())
}

fn parse_radius_km(token: &str) -> Result<f64, GeometryError> {
    lazy_static! {
        static ref RADIUS_RE: Regex =
            Regex::new(r"^[0-9]+(?:\.[0-9]+)?$").expect("bad radius regexp");
    }

    if !RADIUS_RE.is_match(token) {
        return Err(GeometryError::MalformedCoordinateString(token.to_owned()));
    }
    Ok(token.parse().expect(PANIC_MSG))
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    // downtown Pittsburgh, in plane coordinates
    const CENTER: (f64, f64) = (-8905102.853549633, 4930177.1697970545);

    fn triangle() -> Vec<ProjectedPoint> {
        vec![
            ProjectedPoint::new(-8906672.45836982, 4931552.160541192),
            ProjectedPoint::new(-8903332.87364602, 4931552.160541192),
            ProjectedPoint::new(-8905002.666007921, 4927164.56438487),
        ]
    }

    #[test]
    fn test_polygon_requires_three_vertices() {
        let tri = triangle();
        assert_eq!(
            Err(GeometryError::TooFewVertices(0)),
            encode_polygon(&tri[0..0])
        );
        assert_eq!(
            Err(GeometryError::TooFewVertices(2)),
            encode_polygon(&tri[0..2])
        );
        assert!(encode_polygon(&tri).is_ok());
    }

    #[test]
    fn test_polygon_closes_ring() {
        let text = encode_polygon(&triangle()).unwrap();
        assert_eq!(
            "40.45000,-80.01000 40.45000,-79.98000 40.42000,-79.99500 40.45000,-80.01000",
            text
        );

        let tokens: Vec<&str> = text.split(' ').collect();
        assert_eq!(4, tokens.len());
        assert_eq!(tokens[0], tokens[3]);
    }

    #[test]
    fn test_polygon_decode_keeps_all_tokens() {
        let text = "40.44000,-80.01000 40.46000,-79.95000 40.41000,-79.93000 40.44000,-80.01000";
        let vertices = decode_polygon(text).unwrap();
        assert_eq!(4, vertices.len());
        // closing vertex equals the first one
        assert_approx_eq!(vertices[0].x, vertices[3].x, 1e-9);
        assert_approx_eq!(vertices[0].y, vertices[3].y, 1e-9);
    }

    #[test]
    fn test_polygon_values_stable_through_roundtrip() {
        // a string already carrying its closing repeat
        let text = "40.44000,-80.01000 40.46000,-79.95000 40.41000,-79.93000 40.44000,-80.01000";
        let reencoded = encode_polygon(&decode_polygon(text).unwrap()).unwrap();

        // re-encoding closes the ring again but no value drifts
        let original: Vec<&str> = text.split(' ').collect();
        let tokens: Vec<&str> = reencoded.split(' ').collect();
        assert_eq!(original.len() + 1, tokens.len());
        assert_eq!(original, tokens[..original.len()]);
        assert_eq!(tokens[0], tokens[tokens.len() - 1]);
    }

    #[test]
    fn test_polygon_malformed() {
        for bad in [
            "",
            "   ",
            "40.1,-80.2 garbage",
            "40.1 -80.2 39.9",
            "40.1,-80.2,39.9 40.0,-80.0 40.2,-80.1",
            "1e3,2.0 1.0,2.0 3.0,4.0",
            "nan,0.0 1.0,2.0 3.0,4.0",
            "40.,-80.0 40.1,-80.1 40.2,-80.2",
        ] {
            assert!(
                matches!(
                    decode_polygon(bad),
                    Err(GeometryError::MalformedCoordinateString(_))
                ),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_circle_at_origin() {
        let center = ProjectedPoint::new(0.0, 0.0);
        let edge = ProjectedPoint::new(1000.0, 0.0);
        assert_eq!("0.00000,0.00000 1.00000", encode_circle(center, edge));
    }

    #[test]
    fn test_circle_radius_is_geodesic() {
        // 5 km east on the plane shrinks to about cos(lat) * 5 km
        // on the ground at Pittsburgh's latitude
        let center = ProjectedPoint::new(CENTER.0, CENTER.1);
        let edge = ProjectedPoint::new(CENTER.0 + 5000.0, CENTER.1);
        assert_eq!("40.44060,-79.99590 3.80539", encode_circle(center, edge));
    }

    #[test]
    fn test_circle_decode() {
        let (center, radius_m) = decode_circle("40.44060,-79.99590 3.80539").unwrap();
        assert_approx_eq!(center.x, CENTER.0, 1e-3);
        assert_approx_eq!(center.y, CENTER.1, 1e-3);
        assert_approx_eq!(radius_m, 3805.39, 1e-6);

        // kilometers convert to plane meters
        let (_, radius_m) = decode_circle("0.00000,0.00000 1.00000").unwrap();
        assert_approx_eq!(radius_m, 1000.0, 1e-9);
    }

    #[test]
    fn test_circle_decode_ignores_extra_tokens() {
        let (center, radius_m) = decode_circle("0.00000,0.00000 1.00000 leftover").unwrap();
        assert_approx_eq!(center.x, 0.0, 1e-9);
        assert_approx_eq!(radius_m, 1000.0, 1e-9);
    }

    #[test]
    fn test_circle_malformed() {
        for bad in ["", "40.1,-80.2", "40.1,-80.2 big", "center 1.0", "40.1,-80.2 -1.0"] {
            assert!(
                matches!(
                    decode_circle(bad),
                    Err(GeometryError::MalformedCoordinateString(_))
                ),
                "accepted {:?}",
                bad
            );
        }
    }
}
