//! # upmark
//!
//! Convert a small Markdown dialect to HTML.
//!
//! The dialect is a deliberately ad hoc subset: `#`-style headings,
//! single-line blockquotes, fenced code blocks, block-level images, flat
//! ordered/unordered lists, and inline strong/link/code spans. It is not
//! CommonMark and does not try to be; malformed input never fails, it just
//! falls back to a defined degenerate rendering.
//!
//! ## Design
//!
//! Conversion runs in two halves that are also usable on their own:
//!
//! - [`parse`] scans source lines into an AST ([`Node`] tree)
//! - [`render`] serializes that tree to an HTML fragment
//!
//! [`convert`] is their composition and the usual entry point. The whole
//! pipeline is a pure function of the input string, so it is safe to call
//! from any number of threads.
//!
//! ## Example
//!
//! ```rust
//! use upmark::convert;
//!
//! let html = convert("# Heading\n\nSome *bold* text.");
//! assert_eq!(
//!     html,
//!     "<h1>Heading</h1><br/><p>Some <strong>bold</strong> text.</p>"
//! );
//! ```
//!
//! ## Example (AST in between)
//!
//! ```rust
//! use upmark::{parse, render, Node};
//!
//! let ast = parse("* hello\n* world");
//! assert!(matches!(ast.children()[0], Node::UnorderedList(_)));
//! assert_eq!(render(&ast), "<ul><li>hello</li><li>world</li></ul>");
//! ```

mod block;
mod inline;

pub use block::parse;
pub use inline::parse_inline;
pub use upmark_core::{render, Node};

/// Convert Markdown source to an HTML fragment.
///
/// Total over all inputs: every string converts to some valid HTML string,
/// and the empty document renders as a single `<br/>`. The returned
/// fragment carries no `<html>`/`<body>` wrapper; embedding it in a page
/// is the caller's concern.
pub fn convert(source: &str) -> String {
    render(&parse(source))
}
