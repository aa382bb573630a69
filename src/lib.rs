#![forbid(unsafe_code)]

//! Formatting-preserving editor for Maven POM files.
//!
//! A POM is parsed into an arena-backed tree that remembers the exact bytes
//! of everything it does not understand semantically: attribute layout,
//! indentation, line endings, comments. A list of [`Transformation`]s is then
//! applied against the tree and the result is serialized so that untouched
//! regions come out byte-for-byte identical, while newly inserted elements
//! follow the indentation and end-of-line style detected in the input.
//!
//! ```rust
//! use pommel::{transform, Transformation};
//!
//! let source = "<project>\n    <packaging>pom</packaging>\n</project>\n";
//! let mut result = String::new();
//! transform(
//!     &[Transformation::add_module("new-module")],
//!     "pom.xml",
//!     || source.to_string(),
//!     |xml| result = xml,
//! )?;
//! assert!(result.contains("<module>new-module</module>"));
//! # Ok::<(), pommel::Error>(())
//! ```

mod access;
mod anchor;
mod creation;
mod document;
mod error;
mod gavtcs;
mod manipulation;
mod parse;
mod serialize;
mod style;
mod transform;
mod xmlvalue;

pub use access::NodeEdge;
pub use document::{Node, PomDocument};
pub use error::Error;
pub use gavtcs::{Ga, Gavtcs, GavtcsComparator};
pub use style::Style;
pub use transform::{transform, Transformation};
pub use xmlvalue::{
    Comment, Declaration, Element, ProcessingInstruction, Text, Value, ValueType,
};
