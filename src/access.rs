use indextree::NodeEdge as IndexTreeNodeEdge;

use crate::document::{Node, PomDocument};
use crate::error::Error;
use crate::xmlvalue::{Comment, Element, Text, Value, ValueType};

/// Node edges.
///
/// Used by [`PomDocument::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeEdge {
    /// The start edge of a node. In case of an element this is the start
    /// tag. In case of root the start of the document.
    Start(Node),
    /// The end edge of a node. In case of an element this is the end tag.
    /// For any other value the end edge occurs immediately after the start
    /// edge.
    End(Node),
}

/// ## Read-only access
impl PomDocument {
    /// Obtain the document element from the document root.
    ///
    /// ```rust
    /// let doc = pommel::PomDocument::parse("<project><packaging>pom</packaging></project>")?;
    /// let project = doc.document_element()?;
    /// assert_eq!(doc.element(project).unwrap().name(), "project");
    /// # Ok::<(), pommel::Error>(())
    /// ```
    pub fn document_element(&self) -> Result<Node, Error> {
        self.children(self.root)
            .find(|&child| matches!(self.value(child), Value::Element(_)))
            .ok_or(Error::NoDocumentElement)
    }

    /// Get parent node.
    ///
    /// Returns [`None`] for the root node and for detached nodes.
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Get first child.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get last child.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// Get next sibling.
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].next_sibling().map(Node::new)
    }

    /// Get previous sibling.
    pub fn previous_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].previous_sibling().map(Node::new)
    }

    /// Iterator over ancestor nodes, including this one.
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().ancestors(self.arena()).map(Node::new)
    }

    /// Iterator over the child nodes of this node.
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// Iterator over the element children of this node.
    pub fn element_children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.children(node)
            .filter(|&child| matches!(self.value(child), Value::Element(_)))
    }

    /// Iterator over the descendants of this node, including this one,
    /// in document order (pre-order depth-first).
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }

    /// Traverse over node edges in document order.
    ///
    /// For the tree `<a><b/></a>` this generates a [`NodeEdge::Start`] for
    /// `<a>`, a [`NodeEdge::Start`] for `<b>`, immediately followed by a
    /// [`NodeEdge::End`] for `<b>`, and finally a [`NodeEdge::End`] for
    /// `<a>`.
    pub fn traverse(&self, node: Node) -> impl Iterator<Item = NodeEdge> + '_ {
        node.get().traverse(self.arena()).map(|edge| match edge {
            IndexTreeNodeEdge::Start(node_id) => NodeEdge::Start(Node::new(node_id)),
            IndexTreeNodeEdge::End(node_id) => NodeEdge::End(Node::new(node_id)),
        })
    }

    /// Returns the type of the node's value.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// Element accessor. Returns [`None`] if the node is not an element.
    pub fn element(&self, node: Node) -> Option<&Element> {
        match self.value(node) {
            Value::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Text accessor. Returns [`None`] if the node is not a text node.
    pub fn text(&self, node: Node) -> Option<&Text> {
        match self.value(node) {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Mutable text accessor.
    pub fn text_mut(&mut self, node: Node) -> Option<&mut Text> {
        match self.value_mut(node) {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Comment accessor. Returns [`None`] if the node is not a comment.
    pub fn comment(&self, node: Node) -> Option<&Comment> {
        match self.value(node) {
            Value::Comment(comment) => Some(comment),
            _ => None,
        }
    }

    /// Whether the node is a whitespace-only text node.
    pub fn is_whitespace(&self, node: Node) -> bool {
        self.text(node).is_some_and(|t| t.is_whitespace())
    }

    /// The concatenated text content of an element's direct text children.
    ///
    /// ```rust
    /// let doc = pommel::PomDocument::parse("<modules><module>acme-core</module></modules>")?;
    /// let module = doc.first_child(doc.document_element()?).unwrap();
    /// assert_eq!(doc.text_content(module), "acme-core");
    /// # Ok::<(), pommel::Error>(())
    /// ```
    pub fn text_content(&self, node: Node) -> String {
        self.children(node)
            .filter_map(|child| self.text(child).map(|t| t.get()))
            .collect()
    }

    /// Find the first element child with the given name.
    pub fn find_child_element(&self, parent: Node, name: &str) -> Option<Node> {
        self.element_children(parent)
            .find(|&child| self.element(child).is_some_and(|e| e.name == name))
    }

    /// The text content of the named child element, if present.
    pub fn child_element_text(&self, parent: Node, name: &str) -> Option<String> {
        self.find_child_element(parent, name)
            .map(|child| self.text_content(child).trim().to_string())
    }

    /// Nesting depth below the document element: the document element itself
    /// has depth 0, its children depth 1 and so on.
    pub(crate) fn element_depth(&self, node: Node) -> usize {
        self.ancestors(node)
            .skip(1)
            .filter(|&ancestor| matches!(self.value(ancestor), Value::Element(_)))
            .count()
    }
}
