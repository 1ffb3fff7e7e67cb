//! upmark-core - Markdown AST and HTML rendering
//!
//! This crate provides the core data structures and rendering for upmark.
//! The scanners in the `upmark` crate build a [`Node`] tree from Markdown
//! source; this crate turns that tree into an HTML fragment.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──scanners──▶ ┌──────────────┐
//!                               │              │
//!                               │ Markdown AST │ ──render──▶ HTML String
//!                               │              │
//!                               └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use upmark_core::{render, Node};
//!
//! let ast = Node::Document(vec![
//!     Node::Heading {
//!         level: 1,
//!         text: "Hello World".to_string(),
//!     },
//!     Node::Paragraph(vec![
//!         Node::Text("This is ".to_string()),
//!         Node::Strong("bold".to_string()),
//!         Node::Text(" text.".to_string()),
//!     ]),
//! ]);
//!
//! let html = render(&ast);
//! assert_eq!(
//!     html,
//!     "<h1>Hello World</h1><p>This is <strong>bold</strong> text.</p>"
//! );
//! ```

mod ast;
mod render;

pub use ast::Node;
pub use render::render;
