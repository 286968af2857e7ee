//! Affected-area blocks

use serde::Serialize;

use crate::pair::NamedValue;

/// Substituted for an empty `areaDesc` at serialization time
///
/// The substitution happens in the emitter only; the model keeps
/// whatever the caller stored, including the empty string.
pub const DEFAULT_AREA_DESC: &str = "Unspecified Area";

/// A geographic area an [`Info`](crate::Info) block applies to
///
/// The area's geometry arrives as opaque polygon and circle
/// coordinate strings; their internal structure belongs to the
/// geometry codec, not to this model. Geocodes name the area in
/// some caller-defined coding system instead of by geometry.
/// `altitude` and `ceiling` bound the area vertically and are kept
/// as opaque text as well.
///
/// Created through [`Info::add_area`](crate::Info::add_area). All
/// collections are append-only and keep insertion order.
///
/// ```
/// use capwire::Alert;
///
/// let mut alert = Alert::new();
/// let info = alert.add_info();
/// let area = info.add_area("City of Pittsburgh");
/// area.add_polygon("40.45000,-80.01000 40.45000,-79.98000 40.42000,-79.99500 40.45000,-80.01000");
/// area.add_geocode("SAME", "042003");
///
/// assert_eq!("City of Pittsburgh", area.area_desc());
/// assert_eq!(1, area.polygons().len());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    area_desc: String,
    polygons: Vec<String>,
    circles: Vec<String>,
    geocodes: Vec<NamedValue>,
    altitude: String,
    ceiling: String,
}

impl Area {
    pub(crate) fn new<S>(area_desc: S) -> Self
    where
        S: Into<String>,
    {
        Area {
            area_desc: area_desc.into(),
            ..Area::default()
        }
    }

    /// Text describing the area
    ///
    /// May be empty; the wire emitter substitutes
    /// [`DEFAULT_AREA_DESC`] without storing it back.
    pub fn area_desc(&self) -> &str {
        &self.area_desc
    }

    /// Polygon coordinate strings, in insertion order
    pub fn polygons(&self) -> &[String] {
        &self.polygons
    }

    /// Circle coordinate strings, in insertion order
    pub fn circles(&self) -> &[String] {
        &self.circles
    }

    /// Geocode pairs, in insertion order
    pub fn geocodes(&self) -> &[NamedValue] {
        &self.geocodes
    }

    /// Minimum altitude, or empty if unset
    pub fn altitude(&self) -> &str {
        &self.altitude
    }

    /// Maximum altitude, or empty if unset
    pub fn ceiling(&self) -> &str {
        &self.ceiling
    }

    /// Append a polygon coordinate string
    pub fn add_polygon<S>(&mut self, polygon: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.polygons.push(polygon.into());
        self
    }

    /// Append a circle coordinate string
    pub fn add_circle<S>(&mut self, circle: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.circles.push(circle.into());
        self
    }

    /// Append a geocode pair
    pub fn add_geocode<S, T>(&mut self, value_name: S, value: T) -> &mut Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.geocodes.push(NamedValue::new(value_name, value));
        self
    }

    /// Set the minimum altitude, in feet above mean sea level
    pub fn with_altitude<S>(&mut self, altitude: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.altitude = altitude.into();
        self
    }

    /// Set the maximum altitude, in feet above mean sea level
    pub fn with_ceiling<S>(&mut self, ceiling: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.ceiling = ceiling.into();
        self
    }
}
