use std::fmt::Debug;

/// The type of an XML node.
///
/// Access it using [`Value::value_type`] or
/// [`PomDocument::value_type`](crate::PomDocument::value_type) when you are
/// interested in the type without needing to match on the value.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ValueType {
    /// Document root that holds everything, including the XML declaration
    /// and any comments outside the document element. Not the same as the
    /// document element.
    Root,
    /// Element; it has a name and attributes.
    Element,
    /// Text, stored as raw source bytes.
    Text,
    /// Comment.
    Comment,
    /// The XML declaration line.
    Declaration,
    /// Processing instruction, passed through verbatim.
    ProcessingInstruction,
}

/// An XML value.
///
/// Access it using [`PomDocument::value`](crate::PomDocument::value) or
/// mutably using [`PomDocument::value_mut`](crate::PomDocument::value_mut).
#[derive(Debug, Clone)]
pub enum Value {
    /// Document root that holds everything.
    Root,
    /// Element; it has a name and attributes.
    Element(Element),
    /// Text.
    Text(Text),
    /// Comment.
    Comment(Comment),
    /// XML declaration.
    Declaration(Declaration),
    /// Processing instruction.
    ProcessingInstruction(ProcessingInstruction),
}

impl Value {
    /// Returns the type of the XML value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Root => ValueType::Root,
            Value::Element(_) => ValueType::Element,
            Value::Text(_) => ValueType::Text,
            Value::Comment(_) => ValueType::Comment,
            Value::Declaration(_) => ValueType::Declaration,
            Value::ProcessingInstruction(_) => ValueType::ProcessingInstruction,
        }
    }
}

/// XML element value.
///
/// Example: `<project>` or `<dependency>`.
///
/// Elements that came from the source keep the raw text of their start tag so
/// serialization reproduces attribute order, quoting and whitespace exactly.
/// Synthesized elements have no raw form and are rendered from their name.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Vec<(String, String)>,
    /// Verbatim source slice from `<` up to, but excluding, the `>` or `/>`
    /// of the start tag. `None` for synthesized elements.
    pub(crate) raw_open: Option<String>,
    /// Whether the source used the `<name/>` form. Only consulted when the
    /// element has no children at serialization time.
    pub(crate) self_closing: bool,
}

impl Element {
    pub(crate) fn new(name: String) -> Self {
        Element {
            name,
            attributes: Vec::new(),
            raw_open: None,
            self_closing: true,
        }
    }

    /// The name of the element, as written in the source (prefix included).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attributes of the element, in document order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Get an attribute value by name.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// XML text value, stored as raw source bytes.
///
/// Entity references in parsed text are kept as written so untouched text
/// round-trips exactly.
#[derive(Debug, Clone)]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    pub(crate) fn new(text: String) -> Self {
        Text { text }
    }

    /// Get the text value.
    pub fn get(&self) -> &str {
        &self.text
    }

    /// Set the text value.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    /// Whether the text consists of whitespace only.
    pub fn is_whitespace(&self) -> bool {
        self.text.chars().all(|c| c.is_ascii_whitespace())
    }
}

/// XML comment.
///
/// Example: `<!-- build those first -->`. The stored text is the part
/// between the comment delimiters.
#[derive(Debug, Clone)]
pub struct Comment {
    pub(crate) text: String,
}

impl Comment {
    pub(crate) fn new(text: String) -> Self {
        Comment { text }
    }

    /// Get the comment text.
    pub fn get(&self) -> &str {
        &self.text
    }
}

/// The XML declaration, e.g. `<?xml version="1.0" encoding="UTF-8"?>`.
///
/// Kept verbatim; no transformation touches it.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub(crate) raw: String,
}

impl Declaration {
    pub(crate) fn new(raw: String) -> Self {
        Declaration { raw }
    }

    /// The declaration exactly as it appeared in the source.
    pub fn get(&self) -> &str {
        &self.raw
    }
}

/// XML processing instruction, passed through verbatim.
#[derive(Debug, Clone)]
pub struct ProcessingInstruction {
    pub(crate) raw: String,
}

impl ProcessingInstruction {
    pub(crate) fn new(raw: String) -> Self {
        ProcessingInstruction { raw }
    }

    /// The processing instruction exactly as it appeared in the source.
    pub fn get(&self) -> &str {
        &self.raw
    }
}
