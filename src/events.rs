//! SAX Event Types
//!
//! The tagged union of notifications a producer delivers to a handler,
//! plus the payload structs for element events and attributes.
//!
//! Text payloads are `Cow<str>`: a producer that borrows from a parsed
//! document buffer emits borrowed events with no allocation, while
//! sinks that outlive the buffer call [`SaxEvent::into_owned`].

use std::borrow::Cow;

use memchr::memchr;

/// A SAX pipeline event
///
/// Covers the structural and content notifications of an XML event
/// stream: document boundaries, elements, character data, comments,
/// processing instructions, prefix mappings, and the DOCTYPE internal
/// subset brackets. There is no XML-declaration variant; the
/// declaration is consumed by the producer and never reaches the
/// handler level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaxEvent<'a> {
    /// Start of a document
    StartDocument,
    /// End of a document
    EndDocument,
    /// Start of an element: `<name attrs...>`
    StartElement(StartElement<'a>),
    /// End of an element: `</name>`
    EndElement(EndElement<'a>),
    /// Character data between tags
    Characters(Cow<'a, str>),
    /// Element-content whitespace a validating producer reports separately
    IgnorableWhitespace(Cow<'a, str>),
    /// CDATA section content (excluding markers)
    CData(Cow<'a, str>),
    /// Comment content (excluding markers)
    Comment(Cow<'a, str>),
    /// Processing instruction: `<?target data?>`
    ProcessingInstruction {
        target: Cow<'a, str>,
        data: Option<Cow<'a, str>>,
    },
    /// Start of a prefix-to-URI mapping scope
    StartPrefixMapping {
        prefix: Cow<'a, str>,
        uri: Cow<'a, str>,
    },
    /// End of a prefix-to-URI mapping scope
    EndPrefixMapping { prefix: Cow<'a, str> },
    /// Start of the DOCTYPE declaration and its internal subset
    StartDtd {
        name: Cow<'a, str>,
        public_id: Option<Cow<'a, str>>,
        system_id: Option<Cow<'a, str>>,
    },
    /// End of the DOCTYPE declaration
    EndDtd,
}

/// Classification of SAX events
///
/// The fieldless kind for every [`SaxEvent`] variant, for compact
/// sequence assertions and per-kind dispatch tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaxEventKind {
    StartDocument,
    EndDocument,
    StartElement,
    EndElement,
    Characters,
    IgnorableWhitespace,
    CData,
    Comment,
    ProcessingInstruction,
    StartPrefixMapping,
    EndPrefixMapping,
    StartDtd,
    EndDtd,
}

impl<'a> SaxEvent<'a> {
    /// Get the kind of this event
    pub fn kind(&self) -> SaxEventKind {
        match self {
            SaxEvent::StartDocument => SaxEventKind::StartDocument,
            SaxEvent::EndDocument => SaxEventKind::EndDocument,
            SaxEvent::StartElement(_) => SaxEventKind::StartElement,
            SaxEvent::EndElement(_) => SaxEventKind::EndElement,
            SaxEvent::Characters(_) => SaxEventKind::Characters,
            SaxEvent::IgnorableWhitespace(_) => SaxEventKind::IgnorableWhitespace,
            SaxEvent::CData(_) => SaxEventKind::CData,
            SaxEvent::Comment(_) => SaxEventKind::Comment,
            SaxEvent::ProcessingInstruction { .. } => SaxEventKind::ProcessingInstruction,
            SaxEvent::StartPrefixMapping { .. } => SaxEventKind::StartPrefixMapping,
            SaxEvent::EndPrefixMapping { .. } => SaxEventKind::EndPrefixMapping,
            SaxEvent::StartDtd { .. } => SaxEventKind::StartDtd,
            SaxEvent::EndDtd => SaxEventKind::EndDtd,
        }
    }

    /// Check if this is a start element event
    #[inline]
    pub fn is_start_element(&self) -> bool {
        matches!(self, SaxEvent::StartElement(_))
    }

    /// Check if this is an end element event
    #[inline]
    pub fn is_end_element(&self) -> bool {
        matches!(self, SaxEvent::EndElement(_))
    }

    /// Check if this is a text event (character data or CDATA)
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, SaxEvent::Characters(_) | SaxEvent::CData(_))
    }

    /// Get the element name if this is a start or end element
    pub fn element_name(&self) -> Option<&str> {
        match self {
            SaxEvent::StartElement(e) => Some(e.name.as_ref()),
            SaxEvent::EndElement(e) => Some(e.name.as_ref()),
            _ => None,
        }
    }

    /// Get as start element if applicable
    pub fn as_start_element(&self) -> Option<&StartElement<'a>> {
        match self {
            SaxEvent::StartElement(e) => Some(e),
            _ => None,
        }
    }

    /// Get as end element if applicable
    pub fn as_end_element(&self) -> Option<&EndElement<'a>> {
        match self {
            SaxEvent::EndElement(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if applicable
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SaxEvent::Characters(t) | SaxEvent::CData(t) => Some(t.as_ref()),
            _ => None,
        }
    }

    /// Convert to an event that owns all of its payloads
    pub fn into_owned(self) -> SaxEvent<'static> {
        match self {
            SaxEvent::StartDocument => SaxEvent::StartDocument,
            SaxEvent::EndDocument => SaxEvent::EndDocument,
            SaxEvent::StartElement(e) => SaxEvent::StartElement(e.into_owned()),
            SaxEvent::EndElement(e) => SaxEvent::EndElement(e.into_owned()),
            SaxEvent::Characters(t) => SaxEvent::Characters(owned(t)),
            SaxEvent::IgnorableWhitespace(t) => SaxEvent::IgnorableWhitespace(owned(t)),
            SaxEvent::CData(t) => SaxEvent::CData(owned(t)),
            SaxEvent::Comment(t) => SaxEvent::Comment(owned(t)),
            SaxEvent::ProcessingInstruction { target, data } => SaxEvent::ProcessingInstruction {
                target: owned(target),
                data: data.map(owned),
            },
            SaxEvent::StartPrefixMapping { prefix, uri } => SaxEvent::StartPrefixMapping {
                prefix: owned(prefix),
                uri: owned(uri),
            },
            SaxEvent::EndPrefixMapping { prefix } => SaxEvent::EndPrefixMapping {
                prefix: owned(prefix),
            },
            SaxEvent::StartDtd {
                name,
                public_id,
                system_id,
            } => SaxEvent::StartDtd {
                name: owned(name),
                public_id: public_id.map(owned),
                system_id: system_id.map(owned),
            },
            SaxEvent::EndDtd => SaxEvent::EndDtd,
        }
    }
}

/// Start element event data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartElement<'a> {
    /// Full element name (may include prefix)
    pub name: Cow<'a, str>,
    /// Local name (after colon)
    pub local_name: Cow<'a, str>,
    /// Namespace prefix (before colon), if any
    pub prefix: Option<Cow<'a, str>>,
    /// Element attributes
    pub attributes: Vec<Attribute<'a>>,
}

impl<'a> StartElement<'a> {
    /// Create a new start element, splitting the qualified name
    pub fn new(name: impl Into<Cow<'a, str>>, attributes: Vec<Attribute<'a>>) -> Self {
        let name = name.into();
        let (prefix, local_name) = split_name(&name);
        StartElement {
            name,
            local_name,
            prefix,
            attributes,
        }
    }

    /// Get an attribute by full name
    pub fn get_attribute(&self, name: &str) -> Option<&Attribute<'a>> {
        self.attributes.iter().find(|a| a.name.as_ref() == name)
    }

    /// Get an attribute value by full name
    pub fn get_attribute_value(&self, name: &str) -> Option<&str> {
        self.get_attribute(name).map(|a| a.value.as_ref())
    }

    /// Convert to an element that owns all of its payloads
    pub fn into_owned(self) -> StartElement<'static> {
        StartElement {
            name: owned(self.name),
            local_name: owned(self.local_name),
            prefix: self.prefix.map(owned),
            attributes: self.attributes.into_iter().map(Attribute::into_owned).collect(),
        }
    }
}

/// End element event data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndElement<'a> {
    /// Full element name
    pub name: Cow<'a, str>,
    /// Local name (after colon)
    pub local_name: Cow<'a, str>,
    /// Namespace prefix (before colon), if any
    pub prefix: Option<Cow<'a, str>>,
}

impl<'a> EndElement<'a> {
    /// Create a new end element, splitting the qualified name
    pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
        let name = name.into();
        let (prefix, local_name) = split_name(&name);
        EndElement {
            name,
            local_name,
            prefix,
        }
    }

    /// Convert to an element that owns all of its payloads
    pub fn into_owned(self) -> EndElement<'static> {
        EndElement {
            name: owned(self.name),
            local_name: owned(self.local_name),
            prefix: self.prefix.map(owned),
        }
    }
}

/// An element attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    /// Attribute name (may include namespace prefix)
    pub name: Cow<'a, str>,
    /// Attribute value
    pub value: Cow<'a, str>,
    /// Local name (after colon, if prefixed)
    pub local_name: Cow<'a, str>,
    /// Namespace prefix (before colon), if any
    pub prefix: Option<Cow<'a, str>>,
}

impl<'a> Attribute<'a> {
    /// Create a new attribute, splitting the qualified name
    pub fn new(name: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
        let name = name.into();
        let (prefix, local_name) = split_name(&name);
        Attribute {
            name,
            value: value.into(),
            local_name,
            prefix,
        }
    }

    /// Convert to an attribute that owns all of its payloads
    pub fn into_owned(self) -> Attribute<'static> {
        Attribute {
            name: owned(self.name),
            value: owned(self.value),
            local_name: owned(self.local_name),
            prefix: self.prefix.map(owned),
        }
    }
}

/// Split a qualified name into prefix and local name at the colon
///
/// Borrowed names split into borrowed halves; owned names allocate.
fn split_name<'a>(name: &Cow<'a, str>) -> (Option<Cow<'a, str>>, Cow<'a, str>) {
    match *name {
        Cow::Borrowed(n) => match memchr(b':', n.as_bytes()) {
            Some(pos) => (
                Some(Cow::Borrowed(&n[..pos])),
                Cow::Borrowed(&n[pos + 1..]),
            ),
            None => (None, Cow::Borrowed(n)),
        },
        Cow::Owned(ref n) => match memchr(b':', n.as_bytes()) {
            Some(pos) => (
                Some(Cow::Owned(n[..pos].to_string())),
                Cow::Owned(n[pos + 1..].to_string()),
            ),
            None => (None, Cow::Owned(n.clone())),
        },
    }
}

/// Clone a payload out of its borrow
fn owned(value: Cow<'_, str>) -> Cow<'static, str> {
    Cow::Owned(value.into_owned())
}
