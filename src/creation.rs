use crate::document::{Node, PomDocument};
use crate::xmlvalue::{Comment, Element, Text, Value};

/// Escape for synthesized text content. Parsed text is stored and emitted
/// raw, so only new values pass through here.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// ## Creation
///
/// New nodes are unattached; insert them with the manipulation API.
impl PomDocument {
    pub(crate) fn new_node(&mut self, value: Value) -> Node {
        Node::new(self.arena_mut().new_node(value))
    }

    /// Create a new element node with the given name.
    pub fn new_element(&mut self, name: &str) -> Node {
        self.new_node(Value::Element(Element::new(name.to_string())))
    }

    /// Create a new text node. The text is escaped minimally.
    pub fn new_text(&mut self, text: &str) -> Node {
        self.new_node(Value::Text(Text::new(escape(text))))
    }

    /// Create a whitespace text node, stored exactly as given.
    pub(crate) fn new_whitespace(&mut self, whitespace: &str) -> Node {
        self.new_node(Value::Text(Text::new(whitespace.to_string())))
    }

    /// Create a new comment node.
    pub fn new_comment(&mut self, text: &str) -> Node {
        self.new_node(Value::Comment(Comment::new(text.to_string())))
    }

    /// Create `<name>text</name>`.
    pub fn new_leaf_element(&mut self, name: &str, text: &str) -> Node {
        let element = self.new_element(name);
        let text = self.new_text(text);
        element.get().append(text.get(), self.arena_mut());
        element
    }

    /// Create an empty container element whose end tag will sit on its own
    /// line, indented for the given depth.
    pub(crate) fn new_container_element(&mut self, name: &str, depth: usize) -> Node {
        let element = self.new_element(name);
        let trailer = format!("{}{}", self.style.eol(), self.style.indent_for(depth));
        let text = self.new_whitespace(&trailer);
        element.get().append(text.get(), self.arena_mut());
        element
    }
}
