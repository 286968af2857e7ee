//! # capwire: Common Alerting Protocol messages
//!
//! This crate builds, encodes, and decodes public warning messages in
//! the [Common Alerting Protocol](https://docs.oasis-open.org/emergency/cap/v1.2/CAP-v1.2-os.html)
//! (CAP) version 1.2 format. It models an alert as a tree of typed
//! entities and translates that tree to and from the standard's XML
//! wire format.
//!
//! ## Disclaimer
//!
//! This crate is dual-licensed MIT and Apache 2.0. Read these licenses
//! carefully as they may affect your rights.
//!
//! This crate has not been certified for emergency alert origination
//! or relay. The author **strongly discourages** its use in any
//! safety-critical applications without independent validation of the
//! messages it produces.
//!
//! ## Example
//!
//! An [`Alert`] starts empty. Populate it with the chainable setters,
//! and grow the tree with the `add_*` operations, each of which
//! creates a child in place and returns it:
//!
//! ```
//! use capwire::{Alert, Certainty, Severity, Urgency};
//!
//! let mut alert = Alert::new();
//! alert
//!     .with_identifier("KSTO1055887203")
//!     .with_sender("KSTO@CLETS.DOJ.CA.GOV")
//!     .with_sent("2003-06-17T14:57:00-07:00");
//!
//! let info = alert.add_info();
//! info.with_event("Child Abduction")
//!     .with_urgency(Urgency::Immediate)
//!     .with_severity(Severity::Severe)
//!     .with_certainty(Certainty::Likely)
//!     .with_headline("Amber Alert in Sacramento County");
//! info.add_category("Rescue");
//!
//! let area = info.add_area("Sacramento County");
//! area.add_geocode("SAME", "006067");
//!
//! let xml = alert.to_xml().expect("fail to encode");
//! assert!(xml.starts_with(
//!     "<alert xmlns=\"urn:oasis:names:tc:emergency:cap:1.2\">"
//! ));
//! assert!(xml.contains("<event>Child Abduction</event>"));
//!
//! // and back again
//! let decoded = Alert::from_xml(&xml).expect("fail to decode");
//! assert_eq!(alert, decoded);
//! ```
//!
//! Emission follows the standard's element ordering exactly. Optional
//! fields which are unset are omitted from the output entirely, while
//! required fields are always emitted, even when empty. The codec does
//! not validate content; it serializes whatever the tree holds.
//!
//! Decoding is deliberately permissive. [`Alert::from_xml`] accepts
//! any well-formed XML and matches fields by element name anywhere in
//! the document, so it tolerates unknown elements, missing fields,
//! and foreign namespaces. It reconstructs at most one [`Info`] and
//! one [`Area`] per document.
//!
//! ## Background
//!
//! CAP is an OASIS standard for exchanging public warnings between
//! alerting systems. A single CAP document can describe the event,
//! the affected area, the recommended response, and attached media
//! resources. It is the interchange format behind systems like the
//! United States' IPAWS aggregator, and CAP messages are commonly
//! relayed over broadcast radio alongside legacy framings such as
//! SAME/EAS.
//!
//! The geographic `<polygon>` and `<circle>` strings inside an
//! [`Area`] are opaque text at this level. Use the `capgeo` crate to
//! translate them to and from projected map coordinates.
//!
//! ## Crate features
//!
//! * `chrono`: Use chrono to read and write the `sent`, `effective`,
//!   `onset`, and `expires` fields as true timestamps. If enabled,
//!   `chrono` becomes part of this crate's public API.

mod alert;
mod area;
mod codes;
mod info;
mod pair;
mod resource;
mod wire;

pub use alert::Alert;
pub use area::{Area, DEFAULT_AREA_DESC};
pub use codes::{Certainty, MsgType, Scope, Severity, Status, Urgency};
pub use info::Info;
pub use pair::NamedValue;
pub use resource::Resource;
pub use wire::{DecodeError, EncodeError, CAP_XMLNS};
