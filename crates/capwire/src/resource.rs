//! Supplemental resource files

use serde::Serialize;

/// A file attached to an [`Info`](crate::Info) block
///
/// Resources point at supplemental material for the message, such
/// as an image or an audio recording. Only the reference travels in
/// the document; fetching the content behind `uri` is the
/// recipient's affair.
///
/// Created through [`Info::add_resource`](crate::Info::add_resource),
/// which supplies the required describing text. The remaining fields
/// are optional and empty means absent.
///
/// ```
/// use capwire::Alert;
///
/// let mut alert = Alert::new();
/// let info = alert.add_info();
/// info.add_resource("map of affected area")
///     .with_mime_type("image/png")
///     .with_uri("http://example.org/map.png");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    resource_desc: String,
    mime_type: String,
    uri: String,
    digest: String,
}

impl Resource {
    pub(crate) fn new<S>(resource_desc: S) -> Self
    where
        S: Into<String>,
    {
        Resource {
            resource_desc: resource_desc.into(),
            ..Resource::default()
        }
    }

    /// Text describing the type and content of the resource
    pub fn resource_desc(&self) -> &str {
        &self.resource_desc
    }

    /// MIME content type, or empty if unset
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Hyperlink to the resource content, or empty if unset
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// SHA-1 digest of the resource content, or empty if unset
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Set the MIME content type
    pub fn with_mime_type<S>(&mut self, mime_type: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.mime_type = mime_type.into();
        self
    }

    /// Set the hyperlink to the resource content
    pub fn with_uri<S>(&mut self, uri: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.uri = uri.into();
        self
    }

    /// Set the digest of the resource content
    pub fn with_digest<S>(&mut self, digest: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.digest = digest.into();
        self
    }
}
