//! CAP coded values
//!
//! CAP 1.2 fixes the vocabulary for six of the alert's fields. The
//! enums here carry exactly those vocabularies: the serialized form
//! of each variant is the code as it appears on the wire, and the
//! detailed message is the standard's one-line definition of it.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum::EnumMessage;

/// Handling code for the alert as a whole
///
/// Converts `from_str()` using the wire spelling and back with
/// [`as_str()`](Status::as_str). `Display` shows the standard's
/// definition in its normal form and the wire code in its alternate
/// form.
///
/// ```
/// use std::str::FromStr;
/// use capwire::Status;
///
/// let status = Status::from_str("Exercise").unwrap();
/// assert_eq!(Status::Exercise, status);
/// assert_eq!("Exercise", status.as_str());
/// assert_eq!("Exercise", &format!("{:#}", status));
///
/// assert_eq!(Status::Actual, Status::default());
/// assert!(Status::from_str("actual").is_err());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::EnumIter,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
)]
pub enum Status {
    /// Actionable by all targeted recipients
    #[strum(
        serialize = "Actual",
        detailed_message = "Actionable by all targeted recipients"
    )]
    Actual,

    /// Actionable only by designated exercise participants
    #[strum(
        serialize = "Exercise",
        detailed_message = "Actionable only by designated exercise participants"
    )]
    Exercise,

    /// Messages that support alert network internal functions
    #[strum(
        serialize = "System",
        detailed_message = "For messages that support alert network internal functions"
    )]
    System,

    /// Technical testing only; all recipients disregard
    #[strum(
        serialize = "Test",
        detailed_message = "Technical testing only, all recipients disregard"
    )]
    Test,

    /// A preliminary template or draft, not actionable
    #[strum(
        serialize = "Draft",
        detailed_message = "A preliminary template or draft, not actionable in its current form"
    )]
    Draft,
}

impl Status {
    /// Wire string representation
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Human-readable definition from the standard
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

impl std::default::Default for Status {
    fn default() -> Self {
        Status::Actual
    }
}

impl AsRef<str> for Status {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Status {
    /// Printable string
    ///
    /// * The normal form is the standard's definition
    /// * The alternate form is the wire code, like "`Actual`"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.as_str().fmt(f)
        } else {
            self.as_display_str().fmt(f)
        }
    }
}

/// Nature of the alert message
///
/// `Update`, `Cancel`, `Ack` and `Error` all refer to one or more
/// earlier messages named in the alert's `references` field.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::EnumIter,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
)]
pub enum MsgType {
    /// Initial information requiring attention by targeted recipients
    #[strum(
        serialize = "Alert",
        detailed_message = "Initial information requiring attention by targeted recipients"
    )]
    Alert,

    /// Updates and supersedes the earlier message(s)
    #[strum(
        serialize = "Update",
        detailed_message = "Updates and supersedes the earlier message(s) identified in references"
    )]
    Update,

    /// Cancels the earlier message(s)
    #[strum(
        serialize = "Cancel",
        detailed_message = "Cancels the earlier message(s) identified in references"
    )]
    Cancel,

    /// Acknowledges receipt and acceptance of the earlier message(s)
    #[strum(
        serialize = "Ack",
        detailed_message = "Acknowledges receipt and acceptance of the message(s) identified in references"
    )]
    Ack,

    /// Indicates rejection of the earlier message(s)
    #[strum(
        serialize = "Error",
        detailed_message = "Indicates rejection of the message(s) identified in references"
    )]
    Error,
}

impl MsgType {
    /// Wire string representation
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Human-readable definition from the standard
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

impl std::default::Default for MsgType {
    fn default() -> Self {
        MsgType::Alert
    }
}

impl AsRef<str> for MsgType {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for MsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.as_str().fmt(f)
        } else {
            self.as_display_str().fmt(f)
        }
    }
}

/// Intended distribution of the alert
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::EnumIter,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
)]
pub enum Scope {
    /// General dissemination to unrestricted audiences
    #[strum(
        serialize = "Public",
        detailed_message = "For general dissemination to unrestricted audiences"
    )]
    Public,

    /// Users with a known operational requirement
    ///
    /// The rule for limiting the distribution belongs in the
    /// alert's `restriction` field.
    #[strum(
        serialize = "Restricted",
        detailed_message = "For dissemination only to users with a known operational requirement"
    )]
    Restricted,

    /// Specific addresses only
    ///
    /// The recipient list belongs in the alert's `addresses` field.
    #[strum(
        serialize = "Private",
        detailed_message = "For dissemination only to specified addresses"
    )]
    Private,
}

impl Scope {
    /// Wire string representation
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Human-readable definition from the standard
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

impl std::default::Default for Scope {
    fn default() -> Self {
        Scope::Public
    }
}

impl AsRef<str> for Scope {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.as_str().fmt(f)
        } else {
            self.as_display_str().fmt(f)
        }
    }
}

/// Time available for responsive action
///
/// Unrecognized wire text converts `from()` to
/// [`Urgency::Unknown`], which is itself a legitimate wire value.
///
/// ```
/// use capwire::Urgency;
///
/// assert_eq!(Urgency::Immediate, Urgency::from("Immediate"));
/// assert_eq!(Urgency::Unknown, Urgency::from("IMMEDIATE"));
/// assert_eq!("Unknown", Urgency::Unknown.as_str());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::EnumIter,
    strum_macros::EnumMessage,
)]
pub enum Urgency {
    /// Responsive action should be taken immediately
    #[strum(
        serialize = "Immediate",
        detailed_message = "Responsive action should be taken immediately"
    )]
    Immediate,

    /// Responsive action should be taken soon
    #[strum(
        serialize = "Expected",
        detailed_message = "Responsive action should be taken soon"
    )]
    Expected,

    /// Responsive action should be taken in the near future
    #[strum(
        serialize = "Future",
        detailed_message = "Responsive action should be taken in the near future"
    )]
    Future,

    /// Responsive action is no longer required
    #[strum(
        serialize = "Past",
        detailed_message = "Responsive action is no longer required"
    )]
    Past,

    /// Urgency not known
    #[strum(serialize = "Unknown", detailed_message = "Urgency not known")]
    Unknown,
}

impl Urgency {
    /// Wire string representation
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Human-readable definition from the standard
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

// EnumString cannot be derived here: it would emit a TryFrom<&str>
// that collides with the blanket impl From<&str> already provides.
impl FromStr for Urgency {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Immediate" => Ok(Urgency::Immediate),
            "Expected" => Ok(Urgency::Expected),
            "Future" => Ok(Urgency::Future),
            "Past" => Ok(Urgency::Past),
            "Unknown" => Ok(Urgency::Unknown),
            _ => Err(strum::ParseError::VariantNotFound),
        }
    }
}

impl From<&str> for Urgency {
    fn from(s: &str) -> Urgency {
        Urgency::from_str(s).unwrap_or(Urgency::Unknown)
    }
}

impl AsRef<str> for Urgency {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.as_str().fmt(f)
        } else {
            self.as_display_str().fmt(f)
        }
    }
}

/// Intensity of impact
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::EnumIter,
    strum_macros::EnumMessage,
)]
pub enum Severity {
    /// Extraordinary threat to life or property
    #[strum(
        serialize = "Extreme",
        detailed_message = "Extraordinary threat to life or property"
    )]
    Extreme,

    /// Significant threat to life or property
    #[strum(
        serialize = "Severe",
        detailed_message = "Significant threat to life or property"
    )]
    Severe,

    /// Possible threat to life or property
    #[strum(
        serialize = "Moderate",
        detailed_message = "Possible threat to life or property"
    )]
    Moderate,

    /// Minimal to no known threat to life or property
    #[strum(
        serialize = "Minor",
        detailed_message = "Minimal to no known threat to life or property"
    )]
    Minor,

    /// Severity unknown
    #[strum(serialize = "Unknown", detailed_message = "Severity unknown")]
    Unknown,
}

impl Severity {
    /// Wire string representation
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Human-readable definition from the standard
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

// EnumString omitted, as on Urgency: TryFrom<&str> would collide.
impl FromStr for Severity {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Extreme" => Ok(Severity::Extreme),
            "Severe" => Ok(Severity::Severe),
            "Moderate" => Ok(Severity::Moderate),
            "Minor" => Ok(Severity::Minor),
            "Unknown" => Ok(Severity::Unknown),
            _ => Err(strum::ParseError::VariantNotFound),
        }
    }
}

impl From<&str> for Severity {
    fn from(s: &str) -> Severity {
        Severity::from_str(s).unwrap_or(Severity::Unknown)
    }
}

impl AsRef<str> for Severity {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.as_str().fmt(f)
        } else {
            self.as_display_str().fmt(f)
        }
    }
}

/// Confidence in the observation or prediction
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::EnumIter,
    strum_macros::EnumMessage,
)]
pub enum Certainty {
    /// Determined to have occurred or to be ongoing
    #[strum(
        serialize = "Observed",
        detailed_message = "Determined to have occurred or to be ongoing"
    )]
    Observed,

    /// Probability greater than about one half
    #[strum(
        serialize = "Likely",
        detailed_message = "Likely (probability greater than 50%)"
    )]
    Likely,

    /// Possible but not likely
    #[strum(
        serialize = "Possible",
        detailed_message = "Possible but not likely"
    )]
    Possible,

    /// Not expected to occur
    #[strum(serialize = "Unlikely", detailed_message = "Not expected to occur")]
    Unlikely,

    /// Certainty unknown
    #[strum(serialize = "Unknown", detailed_message = "Certainty unknown")]
    Unknown,
}

impl Certainty {
    /// Wire string representation
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Human-readable definition from the standard
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

// EnumString omitted, as on Urgency: TryFrom<&str> would collide.
impl FromStr for Certainty {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Observed" => Ok(Certainty::Observed),
            "Likely" => Ok(Certainty::Likely),
            "Possible" => Ok(Certainty::Possible),
            "Unlikely" => Ok(Certainty::Unlikely),
            "Unknown" => Ok(Certainty::Unknown),
            _ => Err(strum::ParseError::VariantNotFound),
        }
    }
}

impl From<&str> for Certainty {
    fn from(s: &str) -> Certainty {
        Certainty::from_str(s).unwrap_or(Certainty::Unknown)
    }
}

impl AsRef<str> for Certainty {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Certainty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.as_str().fmt(f)
        } else {
            self.as_display_str().fmt(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_wire_spellings_roundtrip() {
        for status in Status::iter() {
            assert_eq!(Ok(status), Status::from_str(status.as_str()));
        }
        for msg_type in MsgType::iter() {
            assert_eq!(Ok(msg_type), MsgType::from_str(msg_type.as_str()));
        }
        for scope in Scope::iter() {
            assert_eq!(Ok(scope), Scope::from_str(scope.as_str()));
        }
        for urgency in Urgency::iter() {
            assert_eq!(Ok(urgency), Urgency::from_str(urgency.as_str()));
            assert_eq!(urgency, Urgency::from(urgency.as_str()));
        }
        for severity in Severity::iter() {
            assert_eq!(Ok(severity), Severity::from_str(severity.as_str()));
            assert_eq!(severity, Severity::from(severity.as_str()));
        }
        for certainty in Certainty::iter() {
            assert_eq!(Ok(certainty), Certainty::from_str(certainty.as_str()));
            assert_eq!(certainty, Certainty::from(certainty.as_str()));
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Status::Actual, Status::default());
        assert_eq!(MsgType::Alert, MsgType::default());
        assert_eq!(Scope::Public, Scope::default());
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(Urgency::Unknown, Urgency::from("RightNow"));
        assert_eq!(Severity::Unknown, Severity::from(""));
        assert_eq!(Certainty::Unknown, Certainty::from("Definitely"));
        assert!(Status::from_str("Imaginary").is_err());

        // from_str stays strict; only the From conversion falls back
        assert_eq!(
            Err(strum::ParseError::VariantNotFound),
            Urgency::from_str("RightNow")
        );
        assert!(Severity::from_str("").is_err());
        assert!(Certainty::from_str("Definitely").is_err());
    }

    #[test]
    fn test_display_forms() {
        assert_eq!("Actual", format!("{:#}", Status::Actual));
        assert_eq!(
            "Actionable by all targeted recipients",
            format!("{}", Status::Actual)
        );
        assert_eq!("Extreme", format!("{:#}", Severity::Extreme));
        assert_eq!(
            "Extraordinary threat to life or property",
            format!("{}", Severity::Extreme)
        );
    }

    #[test]
    fn test_json_form_is_wire_spelling() {
        assert_eq!(
            "\"Immediate\"",
            serde_json::to_string(&Urgency::Immediate).unwrap()
        );
        assert_eq!("\"Ack\"", serde_json::to_string(&MsgType::Ack).unwrap());
    }
}
