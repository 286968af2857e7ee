//! Information blocks

#[cfg(feature = "chrono")]
use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone, Utc};
use serde::Serialize;

use crate::area::Area;
use crate::codes::{Certainty, Severity, Urgency};
use crate::pair::NamedValue;
use crate::resource::Resource;

/// The hazard information of an [`Alert`](crate::Alert)
///
/// An `Info` block names the event, classifies it by category,
/// urgency, severity and certainty, and owns the [`Area`] and
/// [`Resource`] blocks that locate and illustrate it. Scalar text
/// fields are kept as strings where the empty string means unset;
/// urgency, severity and certainty are typed and `None` means
/// unset. All three are required on the wire, so an unset value
/// emits an empty element rather than no element.
///
/// `Info` blocks are created through
/// [`Alert::add_info`](crate::Alert::add_info) and populated with
/// the chainable setters and the append-only `add_*` operations:
///
/// ```
/// use capwire::{Alert, Certainty, Severity, Urgency};
///
/// let mut alert = Alert::new();
/// let info = alert.add_info();
/// info.with_event("Flash Flood Warning")
///     .with_urgency(Urgency::Immediate)
///     .with_severity(Severity::Severe)
///     .with_certainty(Certainty::Observed)
///     .with_headline("Flash flooding in low-lying areas");
/// info.add_category("Met");
/// info.add_response_type("Shelter");
/// info.add_event_code("SAME", "FFW");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    language: String,
    categories: Vec<String>,
    event: String,
    response_types: Vec<String>,
    urgency: Option<Urgency>,
    severity: Option<Severity>,
    certainty: Option<Certainty>,
    audience: String,
    event_codes: Vec<NamedValue>,
    effective: String,
    onset: String,
    expires: String,
    sender_name: String,
    headline: String,
    description: String,
    instruction: String,
    web: String,
    contact: String,
    resources: Vec<Resource>,
    parameters: Vec<NamedValue>,
    areas: Vec<Area>,
}

impl Info {
    pub(crate) fn new() -> Self {
        Info::default()
    }

    /// RFC 3066 language code, or empty for the default `en-US`
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Event category tags, in insertion order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Text naming the event
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Recommended response tags, in insertion order
    pub fn response_types(&self) -> &[String] {
        &self.response_types
    }

    /// Time available for responsive action
    pub fn urgency(&self) -> Option<Urgency> {
        self.urgency
    }

    /// Intensity of impact
    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    /// Confidence in the observation or prediction
    pub fn certainty(&self) -> Option<Certainty> {
        self.certainty
    }

    /// Intended audience, or empty if unset
    pub fn audience(&self) -> &str {
        &self.audience
    }

    /// Event code pairs, in insertion order
    pub fn event_codes(&self) -> &[NamedValue] {
        &self.event_codes
    }

    /// Effective time of the information, or empty if unset
    pub fn effective(&self) -> &str {
        &self.effective
    }

    /// Expected time of the beginning of the event, or empty if unset
    pub fn onset(&self) -> &str {
        &self.onset
    }

    /// Expiry time of the information, or empty if unset
    pub fn expires(&self) -> &str {
        &self.expires
    }

    /// Name of the issuing authority, or empty if unset
    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    /// Headline, or empty if unset
    pub fn headline(&self) -> &str {
        &self.headline
    }

    /// Describing text, or empty if unset
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Recommended action, or empty if unset
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Link to additional information, or empty if unset
    pub fn web(&self) -> &str {
        &self.web
    }

    /// Contact for follow-up, or empty if unset
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Attached resources, in insertion order
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Parameter pairs, in insertion order
    pub fn parameters(&self) -> &[NamedValue] {
        &self.parameters
    }

    /// Affected areas, in insertion order
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Set the language code
    pub fn with_language<S>(&mut self, language: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.language = language.into();
        self
    }

    /// Set the text naming the event
    pub fn with_event<S>(&mut self, event: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.event = event.into();
        self
    }

    /// Set the urgency
    pub fn with_urgency(&mut self, urgency: Urgency) -> &mut Self {
        self.urgency = Some(urgency);
        self
    }

    /// Set the severity
    pub fn with_severity(&mut self, severity: Severity) -> &mut Self {
        self.severity = Some(severity);
        self
    }

    /// Set the certainty
    pub fn with_certainty(&mut self, certainty: Certainty) -> &mut Self {
        self.certainty = Some(certainty);
        self
    }

    /// Set the intended audience
    pub fn with_audience<S>(&mut self, audience: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.audience = audience.into();
        self
    }

    /// Set the effective time, as a W3C timestamp string
    pub fn with_effective<S>(&mut self, effective: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.effective = effective.into();
        self
    }

    /// Set the onset time, as a W3C timestamp string
    pub fn with_onset<S>(&mut self, onset: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.onset = onset.into();
        self
    }

    /// Set the expiry time, as a W3C timestamp string
    pub fn with_expires<S>(&mut self, expires: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.expires = expires.into();
        self
    }

    /// Set the name of the issuing authority
    pub fn with_sender_name<S>(&mut self, sender_name: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.sender_name = sender_name.into();
        self
    }

    /// Set the headline
    pub fn with_headline<S>(&mut self, headline: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.headline = headline.into();
        self
    }

    /// Set the describing text
    pub fn with_description<S>(&mut self, description: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.description = description.into();
        self
    }

    /// Set the recommended action
    pub fn with_instruction<S>(&mut self, instruction: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.instruction = instruction.into();
        self
    }

    /// Set the link to additional information
    pub fn with_web<S>(&mut self, web: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.web = web.into();
        self
    }

    /// Set the contact for follow-up
    pub fn with_contact<S>(&mut self, contact: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.contact = contact.into();
        self
    }

    /// Append a category tag
    ///
    /// The standard's tags are `Geo`, `Met`, `Safety`, `Security`,
    /// `Rescue`, `Fire`, `Health`, `Env`, `Transport`, `Infra`,
    /// `CBRNE` and `Other`. The value is not validated.
    pub fn add_category<S>(&mut self, category: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.categories.push(category.into());
        self
    }

    /// Append a response type tag
    ///
    /// The standard's tags are `Shelter`, `Evacuate`, `Prepare`,
    /// `Execute`, `Avoid`, `Monitor`, `Assess`, `AllClear` and
    /// `None`. The value is not validated.
    pub fn add_response_type<S>(&mut self, response_type: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.response_types.push(response_type.into());
        self
    }

    /// Append an event code pair
    pub fn add_event_code<S, T>(&mut self, value_name: S, value: T) -> &mut Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.event_codes.push(NamedValue::new(value_name, value));
        self
    }

    /// Append a parameter pair
    pub fn add_parameter<S, T>(&mut self, value_name: S, value: T) -> &mut Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.parameters.push(NamedValue::new(value_name, value));
        self
    }

    /// Append a new [`Resource`] and return it for population
    ///
    /// The describing text is required and supplied here; everything
    /// else is set on the returned child.
    pub fn add_resource<S>(&mut self, resource_desc: S) -> &mut Resource
    where
        S: Into<String>,
    {
        self.resources.push(Resource::new(resource_desc));
        self.resources.last_mut().expect("push does not fail")
    }

    /// Append a new [`Area`] and return it for population
    pub fn add_area<S>(&mut self, area_desc: S) -> &mut Area
    where
        S: Into<String>,
    {
        self.areas.push(Area::new(area_desc));
        self.areas.last_mut().expect("push does not fail")
    }

    /// Set the effective time from a datetime
    ///
    /// Requires `chrono`.
    #[cfg(feature = "chrono")]
    pub fn with_effective_datetime<Tz>(&mut self, effective: &DateTime<Tz>) -> &mut Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.effective = effective.to_rfc3339_opts(SecondsFormat::Secs, false);
        self
    }

    /// Set the onset time from a datetime
    ///
    /// Requires `chrono`.
    #[cfg(feature = "chrono")]
    pub fn with_onset_datetime<Tz>(&mut self, onset: &DateTime<Tz>) -> &mut Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.onset = onset.to_rfc3339_opts(SecondsFormat::Secs, false);
        self
    }

    /// Set the expiry time from a datetime
    ///
    /// Requires `chrono`.
    #[cfg(feature = "chrono")]
    pub fn with_expires_datetime<Tz>(&mut self, expires: &DateTime<Tz>) -> &mut Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.expires = expires.to_rfc3339_opts(SecondsFormat::Secs, false);
        self
    }

    /// Effective time as a datetime
    ///
    /// Requires `chrono`.
    #[cfg(feature = "chrono")]
    pub fn effective_datetime(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.effective)
    }

    /// Onset time as a datetime
    ///
    /// Requires `chrono`.
    #[cfg(feature = "chrono")]
    pub fn onset_datetime(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.onset)
    }

    /// Expiry time as a datetime
    ///
    /// Requires `chrono`.
    #[cfg(feature = "chrono")]
    pub fn expires_datetime(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.expires)
    }

    /// Has this information expired?
    ///
    /// Returns false when no expiry time is set or when it does not
    /// parse; an alert without a readable expiry never goes stale by
    /// itself.
    ///
    /// Requires `chrono`.
    #[cfg(feature = "chrono")]
    pub fn is_expired_at(&self, now: &DateTime<Utc>) -> bool {
        match self.expires_datetime() {
            Ok(expires) => expires.with_timezone(&Utc) < *now,
            Err(_e) => false,
        }
    }
}
