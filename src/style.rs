use crate::document::{Node, PomDocument};
use crate::xmlvalue::Value;

const DEFAULT_INDENT: &str = "    ";
const DEFAULT_EOL: &str = "\n";

/// The formatting style of a document: one indentation unit and the
/// end-of-line sequence.
///
/// Detected once per document, immediately after parsing, and used verbatim
/// for every synthesized whitespace node. Mixed styles are not specially
/// handled; the first detected unit and terminator win for all insertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    indent: String,
    eol: String,
}

impl Style {
    /// The indentation unit, e.g. four spaces or a tab.
    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// The line terminator, `"\n"` or `"\r\n"`.
    pub fn eol(&self) -> &str {
        &self.eol
    }

    /// The indentation unit repeated `depth` times.
    pub(crate) fn indent_for(&self, depth: usize) -> String {
        self.indent.repeat(depth)
    }

    /// A line break followed by indentation for `depth`.
    pub(crate) fn break_indent(&self, depth: usize) -> String {
        format!("{}{}", self.eol, self.indent_for(depth))
    }

    /// An empty line followed by indentation for `depth`. Used to separate
    /// top level POM sections.
    pub(crate) fn empty_line_indent(&self, depth: usize) -> String {
        format!("{}{}{}", self.eol, self.eol, self.indent_for(depth))
    }
}

impl Default for Style {
    fn default() -> Self {
        Style {
            indent: DEFAULT_INDENT.to_string(),
            eol: DEFAULT_EOL.to_string(),
        }
    }
}

/// Detect the line terminator: whichever kind appears first wins.
pub(crate) fn detect_eol(xml: &str) -> &'static str {
    match xml.chars().find(|c| *c == '\r' || *c == '\n') {
        Some('\r') => "\r\n",
        _ => DEFAULT_EOL,
    }
}

/// Detect the indentation unit of a parsed document.
///
/// The first whitespace-only text node inside the document element that is
/// immediately followed by an element or comment carries the indentation of
/// a real child; the characters after its last line break are the unit.
/// Unindented documents fall back to four spaces.
pub(crate) fn detect_indent(document: &PomDocument, document_element: Node) -> String {
    for node in document.descendants(document_element).skip(1) {
        let Some(text) = document.text(node) else {
            continue;
        };
        if !text.is_whitespace() {
            continue;
        }
        let followed = document.next_sibling(node).is_some_and(|next| {
            matches!(
                document.value(next),
                Value::Element(_) | Value::Comment(_)
            )
        });
        if !followed {
            continue;
        }
        let raw = text.get();
        let unit = match raw.rfind(['\n', '\r']) {
            Some(pos) => &raw[pos + 1..],
            None => raw,
        };
        return unit.to_string();
    }
    DEFAULT_INDENT.to_string()
}

pub(crate) fn detect(xml: &str, document: &PomDocument, document_element: Node) -> Style {
    Style {
        indent: detect_indent(document, document_element),
        eol: detect_eol(xml).to_string(),
    }
}
