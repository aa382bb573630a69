use tracing::trace;

use crate::document::{Node, PomDocument};
use crate::error::Error;
use crate::xmlvalue::Value;

/// Canonical ordering of the children of `<project>`, as conventionally
/// written. New sections are inserted at the position this order dictates,
/// regardless of where the document's existing sections happen to sit.
const SECTION_ORDER: &[&str] = &[
    "modelVersion",
    "parent",
    "groupId",
    "artifactId",
    "version",
    "packaging",
    "name",
    "description",
    "url",
    "inceptionYear",
    "organization",
    "licenses",
    "developers",
    "contributors",
    "mailingLists",
    "prerequisites",
    "modules",
    "scm",
    "issueManagement",
    "ciManagement",
    "distributionManagement",
    "properties",
    "dependencyManagement",
    "dependencies",
    "repositories",
    "pluginRepositories",
    "build",
    "reporting",
    "profiles",
];

/// Sections that conventionally sit after an empty line even when the
/// element right before them did not. Inserting a new section in front of
/// one of these normalizes the separation to a blank line.
const SPACED_SECTIONS: &[&str] = &["build", "reporting", "profiles"];

fn section_rank(name: &str) -> Option<usize> {
    SECTION_ORDER.iter().position(|&section| section == name)
}

/// ## Anchored insertion
///
/// Placement of new elements relative to what the document already
/// contains. Top level sections follow the canonical `<project>` child
/// order and are separated by empty lines; entries inside a container sit
/// one per line with plain indentation.
impl PomDocument {
    /// Get the named top level section of `<project>`, creating an empty
    /// container for it at the canonical position if it is missing.
    pub fn ensure_section(&mut self, name: &str) -> Result<Node, Error> {
        let project = self.document_element()?;
        if let Some(existing) = self.find_child_element(project, name) {
            return Ok(existing);
        }
        // Unknown sections sort after everything the canonical order names.
        let rank = section_rank(name).unwrap_or(usize::MAX);

        let section = self.new_container_element(name, 1);
        let successor = self.element_children(project).find(|&child| {
            self.element(child)
                .and_then(|e| section_rank(e.name()))
                .is_some_and(|r| r > rank)
        });

        match successor {
            Some(successor) => {
                trace!(
                    section = name,
                    before = ?self.element(successor).map(|e| e.name()),
                    "inserting section"
                );
                self.insert_section_before(section, successor)?;
            }
            None => {
                let predecessor = self
                    .element_children(project)
                    .filter(|&child| {
                        self.element(child)
                            .and_then(|e| section_rank(e.name()))
                            .is_some_and(|r| r < rank)
                    })
                    .last()
                    .or_else(|| self.element_children(project).last());
                match predecessor {
                    Some(predecessor) => {
                        trace!(
                            section = name,
                            after = ?self.element(predecessor).map(|e| e.name()),
                            "inserting section"
                        );
                        self.insert_section_after(section, predecessor)?;
                    }
                    None => {
                        trace!(section = name, "inserting first section");
                        self.prepend_section(section, project)?;
                    }
                }
            }
        }
        Ok(section)
    }

    /// Get the named child of `parent`, creating an empty container as its
    /// last element child if it is missing.
    pub fn ensure_child(&mut self, parent: Node, name: &str) -> Result<Node, Error> {
        if let Some(existing) = self.find_child_element(parent, name) {
            return Ok(existing);
        }
        let depth = self.element_depth(parent) + 1;
        let child = self.new_container_element(name, depth);
        self.append_entry(parent, child)?;
        Ok(child)
    }

    /// Append an entry after the last element child of a container, on its
    /// own line. Containers hold one entry per line without empty lines in
    /// between.
    pub fn append_entry(&mut self, parent: Node, entry: Node) -> Result<(), Error> {
        let depth = self.element_depth(parent);
        let lead = self.style().break_indent(depth + 1);
        let lead = self.new_whitespace(&lead);
        match self.element_children(parent).last() {
            Some(last) => {
                self.insert_after(last, lead)?;
                self.insert_after(lead, entry)?;
            }
            None => {
                self.prepend(parent, lead)?;
                self.insert_after(lead, entry)?;
            }
        }
        self.ensure_container_trailer(parent, entry)?;
        Ok(())
    }

    /// Insert an entry on its own line in front of `reference`, before any
    /// comments that annotate it.
    pub fn insert_entry_before(
        &mut self,
        parent: Node,
        entry: Node,
        reference: Node,
    ) -> Result<(), Error> {
        let depth = self.element_depth(parent);
        let run_start = self.run_start(reference);
        let lead = self.style().break_indent(depth + 1);
        let lead = self.new_whitespace(&lead);
        self.insert_before(run_start, lead)?;
        self.insert_after(lead, entry)?;
        Ok(())
    }

    /// Insert a new section before `successor`, in front of the whitespace
    /// and comments that belong to it. The new section gets an empty line
    /// above it; the separation towards the successor is kept as it was,
    /// unless the successor conventionally demands an empty line.
    fn insert_section_before(&mut self, section: Node, successor: Node) -> Result<(), Error> {
        let run_start = self.run_start(successor);
        let lead = if self.has_preceding_element(run_start) {
            self.style().empty_line_indent(1)
        } else {
            self.style().break_indent(1)
        };
        let lead = self.new_whitespace(&lead);
        self.insert_before(run_start, lead)?;
        self.insert_after(lead, section)?;

        let spaced = self
            .element(successor)
            .is_some_and(|e| SPACED_SECTIONS.contains(&e.name()));
        if spaced {
            let separation = self.style().empty_line_indent(1);
            match self.previous_sibling(successor) {
                Some(prev) if self.is_whitespace(prev) => {
                    if let Some(text) = self.text_mut(prev) {
                        text.set(separation);
                    }
                }
                _ => {
                    let ws = self.new_whitespace(&separation);
                    self.insert_before(successor, ws)?;
                }
            }
        } else if run_start == successor {
            // nothing separated the successor from its predecessor
            let separation = self.style().break_indent(1);
            let ws = self.new_whitespace(&separation);
            self.insert_before(successor, ws)?;
        }
        Ok(())
    }

    /// Insert a new section after `predecessor`, past any comment trailing
    /// it on the same line, and straighten the whitespace that follows.
    fn insert_section_after(&mut self, section: Node, predecessor: Node) -> Result<(), Error> {
        let mut anchor = predecessor;
        while let Some(comment) = self.same_line_trailing_comment(anchor) {
            anchor = comment;
        }
        let lead = self.style().empty_line_indent(1);
        let lead = self.new_whitespace(&lead);
        self.insert_after(anchor, lead)?;
        self.insert_after(lead, section)?;
        self.normalize_following(section)
    }

    /// Insert a new section as the first content of an otherwise section-less
    /// document element.
    fn prepend_section(&mut self, section: Node, project: Node) -> Result<(), Error> {
        let lead = self.style().break_indent(1);
        let lead = self.new_whitespace(&lead);
        self.prepend(project, lead)?;
        self.insert_after(lead, section)?;
        self.normalize_following(section)
    }

    /// First node of the contiguous run of whitespace and comments directly
    /// preceding `node`, or `node` itself when there is none.
    fn run_start(&self, node: Node) -> Node {
        let mut start = node;
        while let Some(prev) = self.previous_sibling(start) {
            match self.value(prev) {
                Value::Comment(_) => start = prev,
                Value::Text(text) if text.is_whitespace() => start = prev,
                _ => break,
            }
        }
        start
    }

    fn has_preceding_element(&self, node: Node) -> bool {
        let mut cursor = self.previous_sibling(node);
        while let Some(prev) = cursor {
            if matches!(self.value(prev), Value::Element(_)) {
                return true;
            }
            cursor = self.previous_sibling(prev);
        }
        false
    }

    /// A comment following `node` on the same line, separated by at most
    /// line-break-free whitespace.
    fn same_line_trailing_comment(&self, node: Node) -> Option<Node> {
        let next = self.next_sibling(node)?;
        match self.value(next) {
            Value::Comment(_) => Some(next),
            Value::Text(text)
                if text.is_whitespace() && !text.get().contains(['\n', '\r']) =>
            {
                let after = self.next_sibling(next)?;
                matches!(self.value(after), Value::Comment(_)).then_some(after)
            }
            _ => None,
        }
    }

    /// Fix the whitespace after a newly inserted last section: an empty line
    /// towards further content, a bare line break towards the closing tag of
    /// the document element.
    fn normalize_following(&mut self, section: Node) -> Result<(), Error> {
        match self.next_sibling(section) {
            None => {
                let trailer = self.style().eol().to_string();
                let trailer = self.new_whitespace(&trailer);
                self.insert_after(section, trailer)?;
            }
            Some(next) if self.is_whitespace(next) => {
                let replacement = if self.next_sibling(next).is_some() {
                    self.style().empty_line_indent(1)
                } else {
                    self.style().eol().to_string()
                };
                if let Some(text) = self.text_mut(next) {
                    text.set(replacement);
                }
            }
            Some(_) => {
                let separation = self.style().empty_line_indent(1);
                let separation = self.new_whitespace(&separation);
                self.insert_after(section, separation)?;
            }
        }
        Ok(())
    }

    /// Make sure a container whose last entry is `entry` closes on its own
    /// line, indented like its start tag.
    fn ensure_container_trailer(&mut self, parent: Node, entry: Node) -> Result<(), Error> {
        if self
            .next_sibling(entry)
            .is_some_and(|next| self.is_whitespace(next))
        {
            return Ok(());
        }
        let depth = self.element_depth(parent);
        let trailer = self.style().break_indent(depth);
        let trailer = self.new_whitespace(&trailer);
        self.insert_after(entry, trailer)?;
        Ok(())
    }
}
