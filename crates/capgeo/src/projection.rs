//! Projected-plane and geographic coordinate conversions

use nalgebra::Point2;

/// A point on the drawing surface's projected plane
///
/// The drawing surface reports vertices in spherical web mercator
/// coordinates: `x` is easting and `y` is northing, both in meters
/// from the point where the equator crosses the prime meridian.
pub type ProjectedPoint = Point2<f64>;

/// Radius of the projection sphere, in meters
///
/// Both the mercator plane and the great-circle distance primitive
/// are defined on a sphere of this radius. Mixing in a different
/// earth model would make encoded circle radii inconsistent with
/// their centers.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Geographic coordinates, in decimal degrees
///
/// Latitude is positive north and longitude is positive east, per
/// the usual WGS 84 convention. `GeoPoint` converts to and from
/// [`ProjectedPoint`] without loss beyond floating-point error.
///
/// ```
/// use capgeo::{GeoPoint, ProjectedPoint};
///
/// let geo = GeoPoint::new(0.0, 1.0);
/// let plane = geo.to_plane();
/// assert!((plane.x - 111319.49079327357).abs() < 1e-6);
/// assert!((plane.y - 0.0).abs() < 1e-6);
///
/// let back = GeoPoint::from_plane(plane);
/// assert!((back.lat - geo.lat).abs() < 1e-9);
/// assert!((back.lon - geo.lon).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    /// Latitude, degrees north
    pub lat: f64,

    /// Longitude, degrees east
    pub lon: f64,
}

impl GeoPoint {
    /// New point from latitude and longitude, in degrees
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    /// Inverse-project a plane point to geographic coordinates
    ///
    /// Total for all finite inputs: every plane point maps to a
    /// latitude strictly between the poles.
    pub fn from_plane(pt: ProjectedPoint) -> Self {
        let lon = (pt.x / EARTH_RADIUS_M).to_degrees();
        let lat = (2.0 * f64::atan(f64::exp(pt.y / EARTH_RADIUS_M))
            - std::f64::consts::FRAC_PI_2)
            .to_degrees();
        GeoPoint { lat, lon }
    }

    /// Forward-project to the mercator plane
    ///
    /// The projection diverges towards the poles; callers are
    /// expected to stay within the usual web mercator latitude
    /// limits of about ±85°.
    pub fn to_plane(&self) -> ProjectedPoint {
        let x = EARTH_RADIUS_M * self.lon.to_radians();
        let y = EARTH_RADIUS_M
            * f64::ln(f64::tan(
                std::f64::consts::FRAC_PI_4 + self.lat.to_radians() / 2.0,
            ));
        ProjectedPoint::new(x, y)
    }
}

/// Great-circle distance between two geographic points, in meters
///
/// Haversine formula on the [`EARTH_RADIUS_M`] sphere. This is the
/// distance primitive used for circle radii; planar Euclidean
/// distance on the mercator plane would overstate distances away
/// from the equator.
pub fn haversine_distance(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let dlat = (to.lat - from.lat).to_radians();
    let dlon = (to.lon - from.lon).to_radians();

    let a = f64::sin(dlat / 2.0).powi(2)
        + f64::cos(lat1) * f64::cos(lat2) * f64::sin(dlon / 2.0).powi(2);
    2.0 * EARTH_RADIUS_M * f64::asin(f64::sqrt(a))
}
