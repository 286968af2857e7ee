//! Alert message root

#[cfg(feature = "chrono")]
use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone};
use serde::Serialize;

use crate::codes::{MsgType, Scope, Status};
use crate::info::Info;
use crate::wire::{self, DecodeError, EncodeError};

/// A Common Alerting Protocol alert message
///
/// `Alert` is the root of the document tree. It carries the message
/// envelope: who sent it, when, what kind of message it is and who
/// may read it. The hazard itself lives in child [`Info`] blocks.
///
/// A new `Alert` is empty except for the three defaulted codes:
/// [`Status::Actual`](crate::Status::Actual),
/// [`MsgType::Alert`](crate::MsgType::Alert) and
/// [`Scope::Public`](crate::Scope::Public). Populate it with the
/// chainable setters, grow the tree with [`Alert::add_info`], and
/// serialize with [`Alert::to_xml`] or [`Alert::to_json`].
///
/// ```
/// use capwire::{Alert, Status};
///
/// let mut alert = Alert::new();
/// alert
///     .with_identifier("KSTO1055887203")
///     .with_sender("KSTO@CLETS.DOJ.CA.GOV")
///     .with_sent("2003-06-17T14:57:00-07:00")
///     .with_status(Status::Actual);
/// let info = alert.add_info();
/// info.with_event("Child Abduction");
/// info.add_area("San Joaquin Valley");
///
/// let xml = alert.to_xml().unwrap();
/// assert!(xml.starts_with("<alert"));
///
/// let back = Alert::from_xml(&xml).unwrap();
/// assert_eq!(alert, back);
/// ```
///
/// Decoding accepts well-formed XML which need not be
/// schema-valid; see [`Alert::from_xml`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    identifier: String,
    sender: String,
    sent: String,
    status: Status,
    msg_type: MsgType,
    source: String,
    scope: Scope,
    restriction: String,
    addresses: String,
    code: String,
    note: String,
    references: String,
    incidents: String,
    infos: Vec<Info>,
}

impl Alert {
    /// Create an empty alert
    pub fn new() -> Self {
        Alert::default()
    }

    /// Decode an alert from its XML form
    ///
    /// The decoder is permissive. It reads any well-formed XML
    /// document and populates each field from the first element
    /// with the matching local name, in document order, ignoring
    /// namespaces, attributes and nesting depth. Repeated fields
    /// like `category` and `polygon` collect every occurrence.
    /// Unrecognized elements are skipped. Only malformed XML or a
    /// document that ends mid-element is an error.
    pub fn from_xml(xml: &str) -> Result<Self, DecodeError> {
        wire::parse_alert(xml)
    }

    /// Encode to CAP 1.2 XML
    ///
    /// The output is a single `<alert>` element in the
    /// [`CAP_XMLNS`](crate::CAP_XMLNS) namespace with its children
    /// in standard order. Required fields are emitted even when
    /// empty; optional fields are omitted when empty.
    pub fn to_xml(&self) -> Result<String, EncodeError> {
        wire::emit_alert(self)
    }

    /// Encode to pretty-printed JSON
    ///
    /// This is a dump of the document tree for logging and
    /// debugging. It is not a standard CAP encoding and there is no
    /// matching decoder.
    pub fn to_json(&self) -> Result<String, EncodeError> {
        wire::dump_json(self)
    }

    /// Unique identifier of this message, or empty if unset
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Identifier of the sender, or empty if unset
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Origination time, as a W3C timestamp string
    pub fn sent(&self) -> &str {
        &self.sent
    }

    /// Handling status of the message
    pub fn status(&self) -> Status {
        self.status
    }

    /// Nature of the message
    pub fn msg_type(&self) -> MsgType {
        self.msg_type
    }

    /// Text identifying the source, or empty if unset
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Intended distribution of the message
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Rule for limiting distribution, or empty if unset
    pub fn restriction(&self) -> &str {
        &self.restriction
    }

    /// Addressees of a private-scope message, or empty if unset
    pub fn addresses(&self) -> &str {
        &self.addresses
    }

    /// Special handling code, or empty if unset
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Clarifying text for exercises and errors, or empty if unset
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Referenced earlier messages, or empty if unset
    pub fn references(&self) -> &str {
        &self.references
    }

    /// Named incidents, or empty if unset
    pub fn incidents(&self) -> &str {
        &self.incidents
    }

    /// Child information blocks, in insertion order
    pub fn infos(&self) -> &[Info] {
        &self.infos
    }

    /// Set the unique identifier
    pub fn with_identifier<S>(&mut self, identifier: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.identifier = identifier.into();
        self
    }

    /// Set the sender identifier
    pub fn with_sender<S>(&mut self, sender: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.sender = sender.into();
        self
    }

    /// Set the origination time, as a W3C timestamp string
    pub fn with_sent<S>(&mut self, sent: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.sent = sent.into();
        self
    }

    /// Set the handling status
    pub fn with_status(&mut self, status: Status) -> &mut Self {
        self.status = status;
        self
    }

    /// Set the nature of the message
    pub fn with_msg_type(&mut self, msg_type: MsgType) -> &mut Self {
        self.msg_type = msg_type;
        self
    }

    /// Set the text identifying the source
    pub fn with_source<S>(&mut self, source: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.source = source.into();
        self
    }

    /// Set the intended distribution
    pub fn with_scope(&mut self, scope: Scope) -> &mut Self {
        self.scope = scope;
        self
    }

    /// Set the rule for limiting distribution
    pub fn with_restriction<S>(&mut self, restriction: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.restriction = restriction.into();
        self
    }

    /// Set the addressees of a private-scope message
    pub fn with_addresses<S>(&mut self, addresses: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.addresses = addresses.into();
        self
    }

    /// Set the special handling code
    pub fn with_code<S>(&mut self, code: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.code = code.into();
        self
    }

    /// Set the clarifying note
    pub fn with_note<S>(&mut self, note: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.note = note.into();
        self
    }

    /// Set the referenced earlier messages
    pub fn with_references<S>(&mut self, references: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.references = references.into();
        self
    }

    /// Set the named incidents
    pub fn with_incidents<S>(&mut self, incidents: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.incidents = incidents.into();
        self
    }

    /// Append a new [`Info`] block and return it for population
    pub fn add_info(&mut self) -> &mut Info {
        self.infos.push(Info::new());
        self.infos.last_mut().expect("push does not fail")
    }

    /// Set the origination time from a datetime
    ///
    /// Requires `chrono`.
    #[cfg(feature = "chrono")]
    pub fn with_sent_datetime<Tz>(&mut self, sent: &DateTime<Tz>) -> &mut Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.sent = sent.to_rfc3339_opts(SecondsFormat::Secs, false);
        self
    }

    /// Origination time as a datetime
    ///
    /// Requires `chrono`.
    #[cfg(feature = "chrono")]
    pub fn sent_datetime(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.sent)
    }
}

impl TryFrom<&str> for Alert {
    type Error = DecodeError;

    /// Decode an alert from its XML form
    fn try_from(xml: &str) -> Result<Self, Self::Error> {
        Alert::from_xml(xml)
    }
}
