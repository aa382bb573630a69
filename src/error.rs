use std::path::PathBuf;

/// Any error that can happen while parsing or transforming a POM document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document is not well-formed XML.
    #[error("malformed XML: {0}")]
    Parse(#[from] xmlparser::Error),
    /// A closing tag did not match the innermost open element.
    #[error("unexpected closing tag </{found}>, expected </{expected}>")]
    MismatchedCloseTag {
        /// Name of the innermost open element.
        expected: String,
        /// Name found in the closing tag.
        found: String,
    },
    /// A closing tag appeared with no element open.
    #[error("closing tag </{0}> without a matching opening tag")]
    UnexpectedCloseTag(String),
    /// The document ended while an element was still open.
    #[error("unclosed element <{0}>")]
    UnclosedElement(String),
    /// The document contains no root element.
    #[error("document has no root element")]
    NoDocumentElement,
    /// More than one top level element.
    #[error("document has more than one root element")]
    ExtraDocumentElement,
    /// DTDs and external entities are not supported.
    #[error("unsupported construct: {0}")]
    Unsupported(&'static str),
    /// A transformation's required ancestor chain could not be established.
    #[error("invalid document structure: {0}")]
    Structural(String),
    #[error(transparent)]
    Arena(#[from] indextree::NodeError),
    /// Wraps another error with the identity of the document being
    /// transformed. Produced by [`transform`](crate::transform).
    #[error("{}: {source}", path.display())]
    WithPath {
        /// Identity of the document, as passed to `transform`. Diagnostic
        /// only, never read from disk.
        path: PathBuf,
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn with_path(self, path: &std::path::Path) -> Error {
        Error::WithPath {
            path: path.to_path_buf(),
            source: Box::new(self),
        }
    }
}
