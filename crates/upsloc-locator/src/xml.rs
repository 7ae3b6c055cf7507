//! Minimal XML tree used on both sides of the wire.
//!
//! Responses are read into an owned [`XmlElement`] tree with `quick-xml` and
//! turned into `serde_json::Value` by [`to_value`]. Requests are written with
//! [`DocumentWriter`], a thin wrapper over `quick_xml::Writer`.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use serde_json::map::Entry;
use serde_json::{Map, Value};

use crate::error::LocatorError;

/// Key under which element attributes are collected by [`to_value`].
pub const ATTRIBUTES_KEY: &str = "@attributes";
/// Key under which an element's text is kept when it also has attributes.
pub const TEXT_KEY: &str = "#text";

/// An element of a parsed response document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Local name, without any namespace prefix.
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
    pub text: String,
}

impl XmlElement {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// First child element named `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Follows `path` through first-matching children.
    #[must_use]
    pub fn find(&self, path: &[&str]) -> Option<&XmlElement> {
        path.iter().try_fold(self, |node, name| node.child(name))
    }

    /// Trimmed text of the element at `path`, if present.
    #[must_use]
    pub fn text_at(&self, path: &[&str]) -> Option<&str> {
        self.find(path).map(|node| node.text.trim())
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, LocatorError> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(quick_xml::Error::from)?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            ..Self::default()
        })
    }
}

/// Parse a complete XML document into its root element.
///
/// # Errors
///
/// Returns [`LocatorError::Xml`] if `quick-xml` rejects the input, or
/// [`LocatorError::MalformedResponse`] if the document has no root, more
/// than one root, or ends inside an open element.
pub fn parse_document(xml: &str) -> Result<XmlElement, LocatorError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(XmlElement::from_start(&e)?),
            Event::Empty(e) => {
                let element = XmlElement::from_start(&e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    LocatorError::MalformedResponse("closing tag without opening tag".to_string())
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(e) => {
                if let Some(current) = stack.last_mut() {
                    let text = e.unescape().map_err(quick_xml::Error::from)?;
                    current.text.push_str(&text);
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(LocatorError::MalformedResponse(format!(
            "document ended inside <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| LocatorError::MalformedResponse("document has no root element".to_string()))
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), LocatorError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(LocatorError::MalformedResponse(format!(
            "second root element <{}>",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

/// Convert an element into a generic JSON value.
///
/// - A leaf without attributes becomes its trimmed text (empty leaf → `""`).
/// - Anything else becomes an object keyed by child tag. Tags that repeat
///   collapse into an array in document order.
/// - Attributes are grouped under [`ATTRIBUTES_KEY`]; a leaf that carries
///   attributes keeps its text under [`TEXT_KEY`].
#[must_use]
pub fn to_value(element: &XmlElement) -> Value {
    if element.children.is_empty() && element.attributes.is_empty() {
        return Value::String(element.text.trim().to_string());
    }

    let mut map = Map::new();

    if !element.attributes.is_empty() {
        let attrs = element
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        map.insert(ATTRIBUTES_KEY.to_string(), Value::Object(attrs));
    }

    if element.children.is_empty() {
        let text = element.text.trim();
        if !text.is_empty() {
            map.insert(TEXT_KEY.to_string(), Value::String(text.to_string()));
        }
        return Value::Object(map);
    }

    for child in &element.children {
        let value = to_value(child);
        match map.entry(child.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            // `to_value` never yields an array itself, so an existing array
            // always means the tag has already repeated.
            Entry::Occupied(mut slot) => match slot.get_mut() {
                Value::Array(items) => items.push(value),
                existing => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
            },
        }
    }

    Value::Object(map)
}

/// Indented XML writer used to render request documents.
pub(crate) struct DocumentWriter {
    writer: Writer<Vec<u8>>,
    context: &'static str,
}

impl DocumentWriter {
    /// Starts a document with an `<?xml version="1.0"?>` declaration.
    pub(crate) fn new(context: &'static str) -> Result<Self, LocatorError> {
        let mut doc = Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
            context,
        };
        doc.event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
        Ok(doc)
    }

    fn event(&mut self, event: Event<'_>) -> Result<(), LocatorError> {
        self.writer
            .write_event(event)
            .map_err(|e| LocatorError::Encode {
                context: self.context.to_string(),
                reason: e.to_string(),
            })
    }

    pub(crate) fn open(&mut self, name: &str) -> Result<(), LocatorError> {
        self.event(Event::Start(BytesStart::new(name)))
    }

    pub(crate) fn open_with_lang(&mut self, name: &str, lang: &str) -> Result<(), LocatorError> {
        let mut start = BytesStart::new(name);
        start.push_attribute(("xml:lang", lang));
        self.event(Event::Start(start))
    }

    pub(crate) fn close(&mut self, name: &str) -> Result<(), LocatorError> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    /// Writes `<name>text</name>`. Empty text still produces both tags.
    pub(crate) fn leaf(&mut self, name: &str, text: &str) -> Result<(), LocatorError> {
        self.open(name)?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.close(name)
    }

    pub(crate) fn finish(self) -> Result<String, LocatorError> {
        String::from_utf8(self.writer.into_inner()).map_err(|e| LocatorError::Encode {
            context: self.context.to_string(),
            reason: e.to_string(),
        })
    }
}
