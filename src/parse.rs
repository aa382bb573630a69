use xmlparser::{ElementEnd, Token, Tokenizer};

use crate::document::{Node, PomDocument, XmlArena};
use crate::error::Error;
use crate::style::{self, Style};
use crate::xmlvalue::{Comment, Declaration, Element, ProcessingInstruction, Text, Value};

/// An element whose start tag has been seen but whose `>` or `/>` has not.
struct PendingElement {
    name: String,
    attributes: Vec<(String, String)>,
    /// Byte offset of the `<` in the source.
    start: usize,
}

struct DocumentBuilder<'a> {
    xml: &'a str,
    arena: XmlArena,
    root: Node,
    /// Currently open elements, innermost last.
    stack: Vec<Node>,
    pending: Option<PendingElement>,
}

impl<'a> DocumentBuilder<'a> {
    fn new(xml: &'a str) -> Self {
        let mut arena = XmlArena::new();
        let root = Node::new(arena.new_node(Value::Root));
        DocumentBuilder {
            xml,
            arena,
            root,
            stack: Vec::new(),
            pending: None,
        }
    }

    fn parent(&self) -> Node {
        *self.stack.last().unwrap_or(&self.root)
    }

    fn add(&mut self, value: Value) -> Node {
        let node = Node::new(self.arena.new_node(value));
        self.parent().get().append(node.get(), &mut self.arena);
        node
    }

    fn element_start(&mut self, prefix: &str, local: &str, start: usize) {
        self.pending = Some(PendingElement {
            name: full_name(prefix, local),
            attributes: Vec::new(),
            start,
        });
    }

    fn attribute(&mut self, prefix: &str, local: &str, value: &str) {
        if let Some(pending) = &mut self.pending {
            pending
                .attributes
                .push((full_name(prefix, local), value.to_string()));
        }
    }

    fn element_end(&mut self, end: ElementEnd<'_>, tag_start: usize) -> Result<(), Error> {
        match end {
            ElementEnd::Open | ElementEnd::Empty => {
                let pending = self
                    .pending
                    .take()
                    .ok_or_else(|| Error::Structural("element end without start tag".into()))?;
                let element = Element {
                    name: pending.name,
                    attributes: pending.attributes,
                    raw_open: Some(self.xml[pending.start..tag_start].to_string()),
                    self_closing: matches!(end, ElementEnd::Empty),
                };
                let node = self.add(Value::Element(element));
                if matches!(end, ElementEnd::Open) {
                    self.stack.push(node);
                }
                Ok(())
            }
            ElementEnd::Close(prefix, local) => {
                let found = full_name(prefix.as_str(), local.as_str());
                let open = self
                    .stack
                    .pop()
                    .ok_or_else(|| Error::UnexpectedCloseTag(found.clone()))?;
                let expected = match self.arena[open.get()].get() {
                    Value::Element(element) => element.name.clone(),
                    _ => unreachable!("only elements are pushed on the open stack"),
                };
                if expected != found {
                    return Err(Error::MismatchedCloseTag { expected, found });
                }
                Ok(())
            }
        }
    }

    fn text(&mut self, text: &str) -> Result<(), Error> {
        if self.stack.is_empty() && !text.chars().all(|c| c.is_ascii_whitespace()) {
            return Err(Error::Structural(
                "text content outside the document element".into(),
            ));
        }
        self.add(Value::Text(Text::new(text.to_string())));
        Ok(())
    }

    /// Record source bytes between two top level tokens. The tokenizer never
    /// emits text outside the document element, so the whitespace around the
    /// declaration, top level comments and the closing tag has to be carried
    /// over from the source directly.
    fn top_level_gap(&mut self, start: usize, end: usize) -> Result<(), Error> {
        let gap = &self.xml[start..end];
        if gap.is_empty() {
            return Ok(());
        }
        if !gap.chars().all(|c| c.is_ascii_whitespace()) {
            return Err(Error::Structural(
                "text content outside the document element".into(),
            ));
        }
        self.add(Value::Text(Text::new(gap.to_string())));
        Ok(())
    }
}

fn full_name(prefix: &str, local: &str) -> String {
    if prefix.is_empty() {
        local.to_string()
    } else {
        format!("{}:{}", prefix, local)
    }
}

/// Start offset of a token that may follow top level whitespace.
fn top_level_start(token: &Token) -> Option<usize> {
    match token {
        Token::Declaration { span, .. }
        | Token::ProcessingInstruction { span, .. }
        | Token::Comment { span, .. }
        | Token::ElementStart { span, .. } => Some(span.start()),
        _ => None,
    }
}

fn token_end(token: &Token) -> usize {
    match token {
        Token::Declaration { span, .. }
        | Token::ProcessingInstruction { span, .. }
        | Token::Comment { span, .. }
        | Token::DtdStart { span, .. }
        | Token::EmptyDtd { span, .. }
        | Token::EntityDeclaration { span, .. }
        | Token::DtdEnd { span, .. }
        | Token::ElementStart { span, .. }
        | Token::Attribute { span, .. }
        | Token::ElementEnd { span, .. }
        | Token::Cdata { span, .. } => span.end(),
        Token::Text { text } => text.end(),
    }
}

impl PomDocument {
    /// Parse a POM document.
    ///
    /// The text must be well-formed XML with a single root element. DTDs and
    /// external entities are rejected. Everything the tree does not model
    /// semantically is retained as raw bytes, so serializing an unmodified
    /// document reproduces the input exactly.
    ///
    /// ```rust
    /// let xml = "<project>\n    <packaging>pom</packaging>\n</project>\n";
    /// let doc = pommel::PomDocument::parse(xml)?;
    /// assert_eq!(doc.serialize(), xml);
    /// # Ok::<(), pommel::Error>(())
    /// ```
    pub fn parse(xml: &str) -> Result<Self, Error> {
        let mut builder = DocumentBuilder::new(xml);
        let mut last_end = 0;

        for token in Tokenizer::from(xml) {
            let token = token?;
            if builder.stack.is_empty() {
                if let Some(start) = top_level_start(&token) {
                    builder.top_level_gap(last_end, start)?;
                }
            }
            let end = token_end(&token);
            match token {
                Token::Declaration { span, .. } => {
                    builder.add(Value::Declaration(Declaration::new(
                        span.as_str().to_string(),
                    )));
                }
                Token::ProcessingInstruction { span, .. } => {
                    builder.add(Value::ProcessingInstruction(ProcessingInstruction::new(
                        span.as_str().to_string(),
                    )));
                }
                Token::Comment { text, .. } => {
                    builder.add(Value::Comment(Comment::new(text.as_str().to_string())));
                }
                Token::ElementStart { prefix, local, span } => {
                    builder.element_start(prefix.as_str(), local.as_str(), span.start());
                }
                Token::Attribute {
                    prefix,
                    local,
                    value,
                    ..
                } => {
                    builder.attribute(prefix.as_str(), local.as_str(), value.as_str());
                }
                Token::ElementEnd { end, span } => {
                    builder.element_end(end, span.start())?;
                }
                Token::Text { text } => {
                    builder.text(text.as_str())?;
                }
                Token::Cdata { span, .. } => {
                    // kept verbatim, including the delimiters
                    builder.add(Value::Text(Text::new(span.as_str().to_string())));
                }
                Token::DtdStart { .. }
                | Token::EmptyDtd { .. }
                | Token::EntityDeclaration { .. }
                | Token::DtdEnd { .. } => {
                    return Err(Error::Unsupported("DTD"));
                }
            }
            last_end = end;
        }

        if let Some(open) = builder.stack.last() {
            let name = match builder.arena[open.get()].get() {
                Value::Element(element) => element.name.clone(),
                _ => String::new(),
            };
            return Err(Error::UnclosedElement(name));
        }
        builder.top_level_gap(last_end, xml.len())?;

        let root = builder.root;
        let mut document = PomDocument {
            arena: builder.arena,
            root,
            style: Style::default(),
        };
        let document_element = document.document_element()?;
        document.style = style::detect(xml, &document, document_element);
        Ok(document)
    }
}
