use crate::access::NodeEdge;
use crate::document::{Node, PomDocument};
use crate::xmlvalue::Value;

/// ## Serialization
impl PomDocument {
    /// Render the document back to text.
    ///
    /// Nodes untouched since parsing emit their original bytes: start tags
    /// come from the recorded raw slice (attribute order, quoting and
    /// multi-line layout included), text and comments verbatim, and elements
    /// that were self-closing stay self-closing as long as they are still
    /// empty. Synthesized nodes are rendered from their structure. With no
    /// transformations applied the output equals the input byte for byte.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for edge in self.traverse(self.root) {
            match edge {
                NodeEdge::Start(node) => self.serialize_start(node, &mut out),
                NodeEdge::End(node) => self.serialize_end(node, &mut out),
            }
        }
        out
    }

    fn serialize_start(&self, node: Node, out: &mut String) {
        match self.value(node) {
            Value::Root => {}
            Value::Element(element) => {
                match &element.raw_open {
                    Some(raw) => out.push_str(raw),
                    None => {
                        out.push('<');
                        out.push_str(&element.name);
                        for (name, value) in &element.attributes {
                            out.push(' ');
                            out.push_str(name);
                            out.push_str("=\"");
                            out.push_str(value);
                            out.push('"');
                        }
                    }
                }
                if self.has_children(node) {
                    out.push('>');
                } else if element.self_closing {
                    out.push_str("/>");
                } else {
                    out.push_str("></");
                    out.push_str(&element.name);
                    out.push('>');
                }
            }
            Value::Text(text) => out.push_str(text.get()),
            Value::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment.get());
                out.push_str("-->");
            }
            Value::Declaration(declaration) => out.push_str(declaration.get()),
            Value::ProcessingInstruction(pi) => out.push_str(pi.get()),
        }
    }

    fn serialize_end(&self, node: Node, out: &mut String) {
        if let Value::Element(element) = self.value(node) {
            if self.has_children(node) {
                out.push_str("</");
                out.push_str(&element.name);
                out.push('>');
            }
        }
    }

    fn has_children(&self, node: Node) -> bool {
        self.first_child(node).is_some()
    }
}
