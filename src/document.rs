use indextree::{Arena, NodeId};

use crate::style::Style;
use crate::xmlvalue::Value;

pub(crate) type XmlArena = Arena<Value>;

/// A node in the document tree.
/// This is a lightweight value and can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// A parsed POM document.
///
/// The document exclusively owns its tree; nodes never alias across
/// documents. Obtain one with [`PomDocument::parse`], mutate it by applying
/// [`Transformation`](crate::Transformation)s or through the manipulation
/// API, and render it back with [`PomDocument::serialize`].
#[derive(Debug)]
pub struct PomDocument {
    pub(crate) arena: XmlArena,
    pub(crate) root: Node,
    pub(crate) style: Style,
}

impl PomDocument {
    #[inline]
    pub(crate) fn arena(&self) -> &XmlArena {
        &self.arena
    }

    #[inline]
    pub(crate) fn arena_mut(&mut self) -> &mut XmlArena {
        &mut self.arena
    }

    /// The document root node. Note that this is not the document element;
    /// it also holds the XML declaration and any top level comments.
    pub fn root(&self) -> Node {
        self.root
    }

    /// The indentation and end-of-line style detected in the source.
    ///
    /// Derived once at parse time and used for every synthesized insertion.
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        self.arena[node.get()].get()
    }

    #[inline]
    pub fn value_mut(&mut self, node: Node) -> &mut Value {
        self.arena[node.get()].get_mut()
    }
}
