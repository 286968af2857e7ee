//! valueName/value pairs

use serde::Serialize;

/// A named value
///
/// CAP expresses `eventCode`, `parameter` and `geocode` entries as
/// pairs of a `valueName` and a `value`. The valueName namespace is
/// chosen by the message author (for example `SAME` or `FIPS6`) and
/// is not validated here.
///
/// Pairs are created through their owners:
/// [`Info::add_event_code`](crate::Info::add_event_code),
/// [`Info::add_parameter`](crate::Info::add_parameter) and
/// [`Area::add_geocode`](crate::Area::add_geocode).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedValue {
    value_name: String,
    value: String,
}

impl NamedValue {
    pub(crate) fn new<S, T>(value_name: S, value: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        NamedValue {
            value_name: value_name.into(),
            value: value.into(),
        }
    }

    /// Namespace-qualified name of the value
    pub fn value_name(&self) -> &str {
        &self.value_name
    }

    /// The value itself
    pub fn value(&self) -> &str {
        &self.value
    }
}
