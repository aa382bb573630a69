use crate::document::{Node, PomDocument};
use crate::error::Error;
use crate::xmlvalue::Value;

/// ## Manipulation
///
/// Positional mutation of the tree. All operations keep the document
/// structure valid: there is exactly one document element under the root,
/// and only comments, processing instructions and whitespace may live next
/// to it.
impl PomDocument {
    /// Append a child to the end of the children of the given parent.
    pub fn append(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        self.add_structure_check(Some(parent), child)?;
        parent.get().checked_append(child.get(), self.arena_mut())?;
        Ok(())
    }

    /// Prepend a child to the beginning of the children of the given parent.
    pub fn prepend(&mut self, parent: Node, child: Node) -> Result<(), Error> {
        self.add_structure_check(Some(parent), child)?;
        parent
            .get()
            .checked_prepend(child.get(), self.arena_mut())?;
        Ok(())
    }

    /// Insert a new sibling after a reference node.
    pub fn insert_after(&mut self, reference: Node, new_sibling: Node) -> Result<(), Error> {
        self.add_structure_check(self.parent(reference), new_sibling)?;
        reference
            .get()
            .checked_insert_after(new_sibling.get(), self.arena_mut())?;
        Ok(())
    }

    /// Insert a new sibling before a reference node.
    pub fn insert_before(&mut self, reference: Node, new_sibling: Node) -> Result<(), Error> {
        self.add_structure_check(self.parent(reference), new_sibling)?;
        reference
            .get()
            .checked_insert_before(new_sibling.get(), self.arena_mut())?;
        Ok(())
    }

    /// Remove a node and its descendants from the tree.
    pub fn remove(&mut self, node: Node) -> Result<(), Error> {
        if matches!(self.value(node), Value::Root) {
            return Err(Error::Structural("cannot remove the document root".into()));
        }
        node.get().remove_subtree(self.arena_mut());
        Ok(())
    }

    /// Remove a node together with (optionally) the whitespace and comments
    /// directly preceding it.
    ///
    /// With `remove_whitespace`, the whitespace-only text node immediately
    /// before `node` goes too. With `remove_comments`, preceding comments
    /// and their own leading whitespace are removed as well, walking
    /// backwards until something else is hit. This keeps a removed element's
    /// annotation from dangling in the document.
    pub fn remove_with_preceding(
        &mut self,
        node: Node,
        remove_comments: bool,
        remove_whitespace: bool,
    ) -> Result<(), Error> {
        let mut doomed = vec![node];
        let mut cursor = self.previous_sibling(node);
        if remove_whitespace {
            if let Some(prev) = cursor {
                if self.is_whitespace(prev) {
                    doomed.push(prev);
                    cursor = self.previous_sibling(prev);
                }
            }
        }
        if remove_comments {
            while let Some(prev) = cursor {
                if !matches!(self.value(prev), Value::Comment(_)) {
                    break;
                }
                doomed.push(prev);
                cursor = self.previous_sibling(prev);
                if remove_whitespace {
                    if let Some(ws) = cursor {
                        if self.is_whitespace(ws) {
                            doomed.push(ws);
                            cursor = self.previous_sibling(ws);
                        }
                    }
                }
            }
        }
        for node in doomed {
            self.remove(node)?;
        }
        Ok(())
    }

    fn add_structure_check(&self, parent: Option<Node>, child: Node) -> Result<(), Error> {
        let parent = parent.ok_or_else(|| {
            Error::Structural("cannot create siblings for the document root".into())
        })?;
        match self.value(parent) {
            Value::Element(_) => Ok(()),
            Value::Root => match self.value(child) {
                Value::Element(_) if self.document_element().is_ok() => {
                    Err(Error::ExtraDocumentElement)
                }
                Value::Text(t) if !t.is_whitespace() => Err(Error::Structural(
                    "only whitespace text may appear outside the document element".into(),
                )),
                _ => Ok(()),
            },
            _ => Err(Error::Structural(
                "cannot add children to a non-element node".into(),
            )),
        }
    }
}
