//! XML and JSON wire formats

use std::io;
use std::str::FromStr;

use log::warn;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use thiserror::Error;

use crate::alert::Alert;
use crate::area::{Area, DEFAULT_AREA_DESC};
use crate::codes::{Certainty, MsgType, Scope, Severity, Status, Urgency};
use crate::info::Info;
use crate::pair::NamedValue;
use crate::resource::Resource;

/// XML namespace of a CAP 1.2 `<alert>` element
pub const CAP_XMLNS: &str = "urn:oasis:names:tc:emergency:cap:1.2";

/// Errors when encoding an [`Alert`]
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The XML writer failed
    #[error("unable to write xml: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The JSON serializer failed
    #[error("unable to write json: {0}")]
    Json(#[from] serde_json::Error),

    /// The encoded document is not valid UTF-8
    #[error("encoded document is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Errors when decoding an [`Alert`]
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The document is not well-formed XML
    #[error("malformed xml: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document ended before its root element closed
    #[error("xml document is truncated")]
    Truncated,
}

/// Encode an alert as CAP 1.2 XML.
///
/// Children are written in schema order. Required fields emit an
/// empty element when unset; optional fields emit nothing.
pub(crate) fn emit_alert(alert: &Alert) -> Result<String, EncodeError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    let mut root = BytesStart::new("alert");
    root.push_attribute(("xmlns", CAP_XMLNS));
    writer.write_event(Event::Start(root))?;

    write_element(&mut writer, "identifier", alert.identifier())?;
    write_element(&mut writer, "sender", alert.sender())?;
    write_element(&mut writer, "sent", alert.sent())?;
    write_element(&mut writer, "status", alert.status().as_str())?;
    write_element(&mut writer, "msgType", alert.msg_type().as_str())?;
    write_element_opt(&mut writer, "source", alert.source())?;
    write_element(&mut writer, "scope", alert.scope().as_str())?;
    write_element_opt(&mut writer, "restriction", alert.restriction())?;
    write_element_opt(&mut writer, "addresses", alert.addresses())?;
    write_element_opt(&mut writer, "code", alert.code())?;
    write_element_opt(&mut writer, "note", alert.note())?;
    write_element_opt(&mut writer, "references", alert.references())?;
    write_element_opt(&mut writer, "incidents", alert.incidents())?;
    for info in alert.infos() {
        emit_info(&mut writer, info)?;
    }

    writer.write_event(Event::End(BytesEnd::new("alert")))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Dump an alert as pretty-printed JSON.
pub(crate) fn dump_json(alert: &Alert) -> Result<String, EncodeError> {
    Ok(serde_json::to_string_pretty(alert)?)
}

/// Decode an alert from XML.
///
/// Scalar fields are read from the first element with the matching
/// local name, in document order, at any depth. Repeated fields are
/// collected document-wide in document order. Exactly one [`Info`]
/// and one [`Area`](crate::Area) are created no matter how many the
/// document contains.
pub(crate) fn parse_alert(xml: &str) -> Result<Alert, DecodeError> {
    let root = parse_tree(xml)?;

    let mut alert = Alert::new();
    alert
        .with_identifier(root.text_of("identifier"))
        .with_sender(root.text_of("sender"))
        .with_sent(root.text_of("sent"))
        .with_source(root.text_of("source"))
        .with_restriction(root.text_of("restriction"))
        .with_addresses(root.text_of("addresses"))
        .with_code(root.text_of("code"))
        .with_note(root.text_of("note"))
        .with_references(root.text_of("references"))
        .with_incidents(root.text_of("incidents"));
    if let Some(status) = parse_default_code::<Status>("status", root.text_of("status")) {
        alert.with_status(status);
    }
    if let Some(msg_type) = parse_default_code::<MsgType>("msgType", root.text_of("msgType")) {
        alert.with_msg_type(msg_type);
    }
    if let Some(scope) = parse_default_code::<Scope>("scope", root.text_of("scope")) {
        alert.with_scope(scope);
    }

    let mut info_elems = Vec::new();
    root.find_all("info", &mut info_elems);
    if info_elems.len() > 1 {
        warn!(
            "document has {} info blocks; reading only the first",
            info_elems.len()
        );
    }

    let info = alert.add_info();
    info.with_language(root.text_of("language"))
        .with_event(root.text_of("event"))
        .with_audience(root.text_of("audience"))
        .with_effective(root.text_of("effective"))
        .with_onset(root.text_of("onset"))
        .with_expires(root.text_of("expires"))
        .with_sender_name(root.text_of("senderName"))
        .with_headline(root.text_of("headline"))
        .with_description(root.text_of("description"))
        .with_instruction(root.text_of("instruction"))
        .with_web(root.text_of("web"))
        .with_contact(root.text_of("contact"));
    if let Some(urgency) = parse_level_code::<Urgency>("urgency", root.text_of("urgency")) {
        info.with_urgency(urgency);
    }
    if let Some(severity) = parse_level_code::<Severity>("severity", root.text_of("severity")) {
        info.with_severity(severity);
    }
    if let Some(certainty) = parse_level_code::<Certainty>("certainty", root.text_of("certainty")) {
        info.with_certainty(certainty);
    }

    let mut elems = Vec::new();
    root.find_all("category", &mut elems);
    for category in elems.drain(..) {
        info.add_category(&category.text);
    }
    root.find_all("responseType", &mut elems);
    for response_type in elems.drain(..) {
        info.add_response_type(&response_type.text);
    }
    root.find_all("eventCode", &mut elems);
    for event_code in elems.drain(..) {
        info.add_event_code(event_code.text_of("valueName"), event_code.text_of("value"));
    }
    root.find_all("parameter", &mut elems);
    for parameter in elems.drain(..) {
        info.add_parameter(parameter.text_of("valueName"), parameter.text_of("value"));
    }
    root.find_all("resource", &mut elems);
    for res in elems.drain(..) {
        info.add_resource(res.text_of("resourceDesc"))
            .with_mime_type(res.text_of("mimeType"))
            .with_uri(res.text_of("uri"))
            .with_digest(res.text_of("digest"));
    }

    let mut area_elems = Vec::new();
    root.find_all("area", &mut area_elems);
    if area_elems.len() > 1 {
        warn!(
            "document has {} area blocks; reading only the first",
            area_elems.len()
        );
    }

    let area = info.add_area(root.text_of("areaDesc"));
    area.with_altitude(root.text_of("altitude"))
        .with_ceiling(root.text_of("ceiling"));
    root.find_all("polygon", &mut elems);
    for polygon in elems.drain(..) {
        area.add_polygon(&polygon.text);
    }
    root.find_all("circle", &mut elems);
    for circle in elems.drain(..) {
        area.add_circle(&circle.text);
    }
    root.find_all("geocode", &mut elems);
    for geocode in elems.drain(..) {
        area.add_geocode(geocode.text_of("valueName"), geocode.text_of("value"));
    }

    Ok(alert)
}

fn emit_info<W>(writer: &mut Writer<W>, info: &Info) -> Result<(), quick_xml::Error>
where
    W: io::Write,
{
    writer.write_event(Event::Start(BytesStart::new("info")))?;
    write_element(writer, "language", info.language())?;
    for category in info.categories() {
        write_element(writer, "category", category)?;
    }
    write_element(writer, "event", info.event())?;
    for response_type in info.response_types() {
        write_element(writer, "responseType", response_type)?;
    }
    write_element(
        writer,
        "urgency",
        info.urgency().map(|u| u.as_str()).unwrap_or(""),
    )?;
    write_element(
        writer,
        "severity",
        info.severity().map(|s| s.as_str()).unwrap_or(""),
    )?;
    write_element(
        writer,
        "certainty",
        info.certainty().map(|c| c.as_str()).unwrap_or(""),
    )?;
    write_element_opt(writer, "audience", info.audience())?;
    for event_code in info.event_codes() {
        write_pair(writer, "eventCode", event_code)?;
    }
    write_element_opt(writer, "effective", info.effective())?;
    write_element_opt(writer, "onset", info.onset())?;
    write_element_opt(writer, "expires", info.expires())?;
    write_element_opt(writer, "senderName", info.sender_name())?;
    write_element_opt(writer, "headline", info.headline())?;
    write_element_opt(writer, "description", info.description())?;
    write_element_opt(writer, "instruction", info.instruction())?;
    write_element_opt(writer, "web", info.web())?;
    write_element_opt(writer, "contact", info.contact())?;
    for parameter in info.parameters() {
        write_pair(writer, "parameter", parameter)?;
    }
    for resource in info.resources() {
        emit_resource(writer, resource)?;
    }
    for area in info.areas() {
        emit_area(writer, area)?;
    }
    writer.write_event(Event::End(BytesEnd::new("info")))?;
    Ok(())
}

fn emit_resource<W>(writer: &mut Writer<W>, resource: &Resource) -> Result<(), quick_xml::Error>
where
    W: io::Write,
{
    writer.write_event(Event::Start(BytesStart::new("resource")))?;
    write_element(writer, "resourceDesc", resource.resource_desc())?;
    write_element_opt(writer, "mimeType", resource.mime_type())?;
    write_element_opt(writer, "uri", resource.uri())?;
    write_element_opt(writer, "digest", resource.digest())?;
    writer.write_event(Event::End(BytesEnd::new("resource")))?;
    Ok(())
}

fn emit_area<W>(writer: &mut Writer<W>, area: &Area) -> Result<(), quick_xml::Error>
where
    W: io::Write,
{
    writer.write_event(Event::Start(BytesStart::new("area")))?;
    let area_desc = if area.area_desc().is_empty() {
        DEFAULT_AREA_DESC
    } else {
        area.area_desc()
    };
    write_element(writer, "areaDesc", area_desc)?;
    for polygon in area.polygons() {
        write_element(writer, "polygon", polygon)?;
    }
    for circle in area.circles() {
        write_element(writer, "circle", circle)?;
    }
    for geocode in area.geocodes() {
        write_pair(writer, "geocode", geocode)?;
    }
    write_element_opt(writer, "altitude", area.altitude())?;
    write_element_opt(writer, "ceiling", area.ceiling())?;
    writer.write_event(Event::End(BytesEnd::new("area")))?;
    Ok(())
}

/// Write `<name>text</name>`, even when the text is empty.
fn write_element<W>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<(), quick_xml::Error>
where
    W: io::Write,
{
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write `<name>text</name>`, or nothing when the text is empty.
fn write_element_opt<W>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), quick_xml::Error>
where
    W: io::Write,
{
    if text.is_empty() {
        return Ok(());
    }
    write_element(writer, name, text)
}

/// Write a `(valueName, value)` pair as a nested element.
fn write_pair<W>(
    writer: &mut Writer<W>,
    name: &str,
    pair: &NamedValue,
) -> Result<(), quick_xml::Error>
where
    W: io::Write,
{
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    write_element(writer, "valueName", pair.value_name())?;
    write_element(writer, "value", pair.value())?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Parse a code with a non-empty default, like [`Status`].
///
/// Returns `None`, leaving the caller's default in place, when the
/// text is empty or unrecognized. An unrecognized spelling is
/// logged.
fn parse_default_code<T>(name: &str, text: &str) -> Option<T>
where
    T: FromStr<Err = strum::ParseError>,
{
    if text.is_empty() {
        return None;
    }
    match T::from_str(text) {
        Ok(code) => Some(code),
        Err(_e) => {
            warn!("unrecognized {} {:?}; using the default", name, text);
            None
        }
    }
}

/// Parse a code with an `Unknown` catch-all, like [`Urgency`].
///
/// Empty text parses to `None`. Non-empty text always yields a
/// value; an unrecognized spelling is logged and becomes the
/// catch-all.
fn parse_level_code<T>(name: &str, text: &str) -> Option<T>
where
    T: FromStr<Err = strum::ParseError> + for<'s> From<&'s str>,
{
    if text.is_empty() {
        return None;
    }
    if T::from_str(text).is_err() {
        warn!("unrecognized {} {:?}", name, text);
    }
    Some(T::from(text))
}

/// A parsed XML element
///
/// Element and document structure beyond local names, text and
/// parent/child order is discarded. This is all the decoder needs:
/// lookup is by local name, first match in document order.
#[derive(Clone, Debug, Default)]
struct Element {
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn named<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Element {
            name: name.into(),
            ..Element::default()
        }
    }

    /// First descendant with the given local name, in document order
    fn find(&self, name: &str) -> Option<&Element> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find(name) {
                return Some(found);
            }
        }
        None
    }

    /// Collect every descendant with the given local name, in document order
    fn find_all<'elem>(&'elem self, name: &str, out: &mut Vec<&'elem Element>) {
        for child in &self.children {
            if child.name == name {
                out.push(child);
            }
            child.find_all(name, out);
        }
    }

    /// Text of the first descendant with the given name, or empty
    fn text_of(&self, name: &str) -> &str {
        self.find(name).map(|elem| elem.text.as_str()).unwrap_or("")
    }
}

/// Read an XML document into an [`Element`] tree.
///
/// The returned element is a synthetic root above the document's
/// own root, so lookups cover the whole document. Namespaces and
/// attributes are dropped, and text is unescaped and accumulated
/// verbatim, without trimming.
fn parse_tree(xml: &str) -> Result<Element, DecodeError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = vec![Element::named("")];

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                stack.push(Element::named(name));
            }
            Event::End(_end) => {
                if stack.len() > 1 {
                    let elem = stack.pop().expect("stack is not empty");
                    stack
                        .last_mut()
                        .expect("stack keeps its synthetic root")
                        .children
                        .push(elem);
                }
            }
            Event::Empty(start) => {
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                stack
                    .last_mut()
                    .expect("stack keeps its synthetic root")
                    .children
                    .push(Element::named(name));
            }
            Event::Text(text) => {
                stack
                    .last_mut()
                    .expect("stack keeps its synthetic root")
                    .text
                    .push_str(&text.unescape()?);
            }
            Event::CData(cdata) => {
                stack
                    .last_mut()
                    .expect("stack keeps its synthetic root")
                    .text
                    .push_str(&String::from_utf8_lossy(&cdata.into_inner()));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if stack.len() != 1 {
        return Err(DecodeError::Truncated);
    }
    Ok(stack.pop().expect("stack keeps its synthetic root"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // One of everything, but a single info and a single area so the
    // decoder can reconstruct it.
    fn full_alert() -> Alert {
        let mut alert = Alert::new();
        alert
            .with_identifier("KSTO1055887203")
            .with_sender("KSTO@CLETS.DOJ.CA.GOV")
            .with_sent("2003-06-17T14:57:00-07:00")
            .with_status(Status::Actual)
            .with_msg_type(MsgType::Alert)
            .with_source("CHP")
            .with_scope(Scope::Public)
            .with_restriction("law enforcement only")
            .with_addresses("addr1 addr2")
            .with_code("IPAWSv1.0")
            .with_note("a note")
            .with_references("KSTO@CLETS.DOJ.CA.GOV,KSTO1055887202,2003-06-17T14:00:00-07:00")
            .with_incidents("abduction-42");

        let info = alert.add_info();
        info.with_language("en-US")
            .with_event("Child Abduction")
            .with_urgency(Urgency::Immediate)
            .with_severity(Severity::Severe)
            .with_certainty(Certainty::Likely)
            .with_audience("general public")
            .with_effective("2003-06-17T14:57:00-07:00")
            .with_onset("2003-06-17T15:00:00-07:00")
            .with_expires("2003-06-17T16:00:00-07:00")
            .with_sender_name("CHP Sacramento")
            .with_headline("Amber Alert in Sacramento County")
            .with_description("A child was abducted from a shopping mall.")
            .with_instruction("Report sightings to 911.")
            .with_web("http://www.chp.ca.gov/")
            .with_contact("CHP dispatch");
        info.add_category("Rescue").add_category("Security");
        info.add_response_type("Monitor").add_response_type("None");
        info.add_event_code("SAME", "CAE");
        info.add_event_code("OTHER", "AA");
        info.add_parameter("VEHICLE", "white sedan");
        info.add_parameter("PLATE", "1ABC234");
        info.add_resource("suspect photo")
            .with_mime_type("image/jpeg")
            .with_uri("http://www.chp.ca.gov/suspect.jpg")
            .with_digest("a1b2c3");
        info.add_resource("witness statement");

        let area = info.add_area("Sacramento County");
        area.add_polygon("38.30000,-121.50000 38.70000,-121.50000 38.70000,-121.00000 38.30000,-121.50000")
            .add_polygon("38.00000,-121.20000 38.10000,-121.20000 38.10000,-121.10000 38.00000,-121.20000")
            .add_circle("38.58100,-121.49400 10.00000")
            .add_geocode("SAME", "006067")
            .add_geocode("FIPS6", "006067")
            .with_altitude("150")
            .with_ceiling("300");

        alert
    }

    #[test]
    fn test_emit_minimal_document() {
        let mut alert = Alert::new();
        alert
            .with_identifier("A1")
            .with_sender("agency@example.org")
            .with_sent("2020-01-01T00:00:00-00:00");
        let info = alert.add_info();
        info.with_urgency(Urgency::Immediate)
            .with_severity(Severity::Extreme)
            .with_certainty(Certainty::Observed);
        info.add_area("");

        let expected = r#"<alert xmlns="urn:oasis:names:tc:emergency:cap:1.2">
  <identifier>A1</identifier>
  <sender>agency@example.org</sender>
  <sent>2020-01-01T00:00:00-00:00</sent>
  <status>Actual</status>
  <msgType>Alert</msgType>
  <scope>Public</scope>
  <info>
    <language></language>
    <event></event>
    <urgency>Immediate</urgency>
    <severity>Extreme</severity>
    <certainty>Observed</certainty>
    <area>
      <areaDesc>Unspecified Area</areaDesc>
    </area>
  </info>
</alert>"#;
        assert_eq!(expected, alert.to_xml().unwrap());
    }

    #[test]
    fn test_required_fields_emit_empty_elements() {
        let xml = Alert::new().to_xml().unwrap();
        assert!(xml.contains("<identifier></identifier>"));
        assert!(xml.contains("<sender></sender>"));
        assert!(xml.contains("<sent></sent>"));
        assert!(xml.contains("<status>Actual</status>"));
        assert!(xml.contains("<msgType>Alert</msgType>"));
        assert!(xml.contains("<scope>Public</scope>"));
        assert!(!xml.contains("<source>"));
        assert!(!xml.contains("<restriction>"));
        assert!(!xml.contains("<note>"));
        assert!(!xml.contains("<info>"));
    }

    #[test]
    fn test_optional_source_position() {
        let mut alert = Alert::new();
        alert
            .with_identifier("A1")
            .with_sender("agency@example.org")
            .with_sent("2020-01-01T00:00:00-00:00");

        let xml = alert.to_xml().unwrap();
        assert!(!xml.contains("<source>"));

        alert.with_source("NWS");
        let xml = alert.to_xml().unwrap();
        assert_eq!(xml.find("<source>"), xml.rfind("<source>"));
        let source_at = xml.find("<source>NWS</source>").unwrap();
        assert!(xml.find("<msgType>").unwrap() < source_at);
        assert!(source_at < xml.find("<scope>").unwrap());
    }

    #[test]
    fn test_unset_urgency_emits_empty_element() {
        let mut alert = Alert::new();
        alert.add_info();
        let xml = alert.to_xml().unwrap();
        assert!(xml.contains("<urgency></urgency>"));
        assert!(xml.contains("<severity></severity>"));
        assert!(xml.contains("<certainty></certainty>"));

        let back = Alert::from_xml(&xml).unwrap();
        assert_eq!(None, back.infos()[0].urgency());
        assert_eq!(None, back.infos()[0].severity());
        assert_eq!(None, back.infos()[0].certainty());
    }

    #[test]
    fn test_area_desc_default_is_emit_only() {
        let mut alert = Alert::new();
        alert.add_info().add_area("");

        let xml = alert.to_xml().unwrap();
        assert!(xml.contains("<areaDesc>Unspecified Area</areaDesc>"));

        // the model keeps its empty string
        assert_eq!("", alert.infos()[0].areas()[0].area_desc());

        let back = Alert::from_xml(&xml).unwrap();
        assert_eq!(
            DEFAULT_AREA_DESC,
            back.infos()[0].areas()[0].area_desc()
        );
    }

    #[test]
    fn test_round_trip_full() {
        let alert = full_alert();
        let xml = alert.to_xml().unwrap();
        let back = Alert::from_xml(&xml).unwrap();
        assert_eq!(alert, back);
    }

    #[test]
    fn test_round_trip_preserves_text_verbatim() {
        let mut alert = Alert::new();
        alert
            .with_identifier("esc-1")
            .with_sender("AT&T <ops> \"desk\"")
            .with_note("  spaced  out  ");
        let info = alert.add_info();
        info.with_headline("5 > 4 & 4 < 5");
        info.add_area("กรุงเทพมหานคร");

        let xml = alert.to_xml().unwrap();
        assert!(xml.contains("AT&amp;T"));
        assert!(!xml.contains("<ops>"));

        let back = Alert::from_xml(&xml).unwrap();
        assert_eq!(alert, back);
        assert_eq!("AT&T <ops> \"desk\"", back.sender());
        assert_eq!("  spaced  out  ", back.note());
    }

    #[test]
    fn test_emit_one_info_block_each() {
        let mut alert = Alert::new();
        alert.add_info().with_event("first");
        alert.add_info().with_event("second");
        let xml = alert.to_xml().unwrap();
        assert_eq!(2, xml.matches("<info>").count());
    }

    #[test]
    fn test_decode_first_match_wins() {
        let xml = r#"<alert xmlns="urn:oasis:names:tc:emergency:cap:1.2">
            <wrapper><identifier>DEEP-FIRST</identifier></wrapper>
            <identifier>SHALLOW-SECOND</identifier>
        </alert>"#;
        let alert = Alert::from_xml(xml).unwrap();
        assert_eq!("DEEP-FIRST", alert.identifier());
    }

    #[test]
    fn test_decode_merges_repeated_info_blocks() {
        let xml = r#"<alert>
            <identifier>M1</identifier>
            <info>
                <category>Met</category>
                <event>Storm</event>
            </info>
            <info>
                <category>Safety</category>
                <event>Another Storm</event>
                <headline>From the second block</headline>
            </info>
        </alert>"#;
        let alert = Alert::from_xml(xml).unwrap();
        assert_eq!(1, alert.infos().len());

        let info = &alert.infos()[0];
        assert_eq!("Storm", info.event());
        assert_eq!("From the second block", info.headline());
        assert_eq!(&["Met".to_owned(), "Safety".to_owned()], info.categories());
    }

    #[test]
    fn test_decode_merges_repeated_area_blocks() {
        let xml = r#"<alert>
            <info>
                <area>
                    <areaDesc>first</areaDesc>
                    <polygon>p1</polygon>
                </area>
                <area>
                    <areaDesc>second</areaDesc>
                    <polygon>p2</polygon>
                    <altitude>100</altitude>
                </area>
            </info>
        </alert>"#;
        let alert = Alert::from_xml(xml).unwrap();
        let info = &alert.infos()[0];
        assert_eq!(1, info.areas().len());

        let area = &info.areas()[0];
        assert_eq!("first", area.area_desc());
        assert_eq!(&["p1".to_owned(), "p2".to_owned()], area.polygons());
        assert_eq!("100", area.altitude());
    }

    #[test]
    fn test_decode_pairs_are_scoped() {
        let xml = r#"<alert>
            <info>
                <eventCode><valueName>SAME</valueName><value>CAE</value></eventCode>
                <eventCode><valueName>OTHER</valueName><value>AA</value></eventCode>
                <parameter><valueName>VEHICLE</valueName><value>sedan</value></parameter>
                <area>
                    <geocode><valueName>FIPS6</valueName><value>006067</value></geocode>
                </area>
            </info>
        </alert>"#;
        let alert = Alert::from_xml(xml).unwrap();
        let info = &alert.infos()[0];

        assert_eq!(2, info.event_codes().len());
        assert_eq!("SAME", info.event_codes()[0].value_name());
        assert_eq!("CAE", info.event_codes()[0].value());
        assert_eq!("OTHER", info.event_codes()[1].value_name());
        assert_eq!("AA", info.event_codes()[1].value());
        assert_eq!("VEHICLE", info.parameters()[0].value_name());
        assert_eq!("FIPS6", info.areas()[0].geocodes()[0].value_name());
    }

    #[test]
    fn test_decode_resources_are_scoped() {
        let xml = r#"<alert>
            <info>
                <resource>
                    <resourceDesc>map</resourceDesc>
                    <mimeType>image/png</mimeType>
                </resource>
                <resource>
                    <resourceDesc>photo</resourceDesc>
                    <uri>http://example.org/photo.jpg</uri>
                </resource>
            </info>
        </alert>"#;
        let alert = Alert::from_xml(xml).unwrap();
        let resources = alert.infos()[0].resources();

        assert_eq!(2, resources.len());
        assert_eq!("map", resources[0].resource_desc());
        assert_eq!("image/png", resources[0].mime_type());
        assert_eq!("", resources[0].uri());
        assert_eq!("photo", resources[1].resource_desc());
        assert_eq!("http://example.org/photo.jpg", resources[1].uri());
    }

    #[test]
    fn test_decode_unrecognized_codes() {
        let xml = r#"<alert>
            <status>Bogus</status>
            <msgType></msgType>
            <info>
                <urgency>Whenever</urgency>
                <severity></severity>
            </info>
        </alert>"#;
        let alert = Alert::from_xml(xml).unwrap();
        assert_eq!(Status::Actual, alert.status());
        assert_eq!(MsgType::Alert, alert.msg_type());
        assert_eq!(Scope::Public, alert.scope());

        let info = &alert.infos()[0];
        assert_eq!(Some(Urgency::Unknown), info.urgency());
        assert_eq!(None, info.severity());
        assert_eq!(None, info.certainty());
    }

    #[test]
    fn test_decode_without_namespace() {
        let xml = "<alert><identifier>plain</identifier></alert>";
        let alert = Alert::from_xml(xml).unwrap();
        assert_eq!("plain", alert.identifier());
        // the single info and area are always created
        assert_eq!(1, alert.infos().len());
        assert_eq!(1, alert.infos()[0].areas().len());
    }

    #[test]
    fn test_decode_namespace_prefixed() {
        let xml = r#"<cap:alert xmlns:cap="urn:oasis:names:tc:emergency:cap:1.2">
            <cap:identifier>prefixed</cap:identifier>
            <cap:info>
                <cap:event>Storm</cap:event>
            </cap:info>
        </cap:alert>"#;
        let alert = Alert::from_xml(xml).unwrap();
        assert_eq!("prefixed", alert.identifier());
        assert_eq!("Storm", alert.infos()[0].event());
    }

    #[test]
    fn test_decode_cdata() {
        let xml = "<alert><info><description><![CDATA[5 < 6 & so on]]></description></info></alert>";
        let alert = Alert::from_xml(xml).unwrap();
        assert_eq!("5 < 6 & so on", alert.infos()[0].description());
    }

    #[test]
    fn test_decode_truncated() {
        assert!(Alert::from_xml("<alert><identifier>A1</identifier>").is_err());
    }

    #[test]
    fn test_decode_mismatched_tags() {
        assert!(Alert::from_xml("<alert><note></identifier></alert>").is_err());
    }

    #[test]
    fn test_try_from_str() {
        let alert = Alert::try_from("<alert><identifier>T1</identifier></alert>").unwrap();
        assert_eq!("T1", alert.identifier());
    }

    #[test]
    fn test_json_dump() {
        let json = full_alert().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!("KSTO1055887203", value["identifier"]);
        assert_eq!("Alert", value["msgType"]);
        assert_eq!("Immediate", value["infos"][0]["urgency"]);
        assert_eq!("Monitor", value["infos"][0]["responseTypes"][0]);
        assert_eq!("SAME", value["infos"][0]["eventCodes"][0]["valueName"]);
        assert_eq!(
            "Sacramento County",
            value["infos"][0]["areas"][0]["areaDesc"]
        );
        assert_eq!(
            "image/jpeg",
            value["infos"][0]["resources"][0]["mimeType"]
        );
    }

    #[test]
    fn test_json_dump_unset_code_is_null() {
        let mut alert = Alert::new();
        alert.add_info();
        let json = alert.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["infos"][0]["urgency"].is_null());
    }
}
