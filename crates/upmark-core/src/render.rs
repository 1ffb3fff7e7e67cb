//! HTML rendering of the Markdown AST
//!
//! Each node kind renders independently and deterministically; container
//! nodes concatenate their children's HTML in order, with no separators,
//! inside the container's tag. Only `CodeBlock` escapes its text content;
//! every other field is interpolated verbatim. That asymmetry is part of
//! the grammar's contract.

use crate::ast::Node;

/// Render an AST node to an HTML fragment.
pub fn render(node: &Node) -> String {
    let mut output = String::with_capacity(256);
    render_node(node, &mut output);
    output
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),

        Node::LineBreak => out.push_str("<br/>"),

        Node::Link { text, url } => {
            out.push_str("<a href=\"");
            out.push_str(url);
            out.push_str("\" target=\"_blank\">");
            out.push_str(text);
            out.push_str("</a>");
        }

        Node::Image { alt, src } => {
            out.push_str("<img src=\"");
            out.push_str(src);
            out.push_str("\" alt=\"");
            out.push_str(alt);
            out.push_str("\"/>");
        }

        Node::Strong(text) => {
            out.push_str("<strong>");
            out.push_str(text);
            out.push_str("</strong>");
        }

        Node::Emphasis(text) => {
            out.push_str("<i>");
            out.push_str(text);
            out.push_str("</i>");
        }

        Node::Heading { level, text } => {
            out.push_str("<h");
            out.push_str(&level.to_string());
            out.push('>');
            out.push_str(text);
            out.push_str("</h");
            out.push_str(&level.to_string());
            out.push('>');
        }

        Node::BlockQuote(text) => {
            out.push_str("<blockquote>");
            out.push_str(text);
            out.push_str("</blockquote>");
        }

        Node::Code(code) => {
            out.push_str("<code>");
            out.push_str(code);
            out.push_str("</code>");
        }

        Node::CodeBlock { code, .. } => {
            // The language tag is captured but not emitted.
            out.push_str("<pre><code>");
            out.push_str(&html_escape::encode_text(code));
            out.push_str("</code></pre>");
        }

        Node::OrderedList(items) => {
            out.push_str("<ol>");
            render_children(items, out);
            out.push_str("</ol>");
        }

        Node::UnorderedList(items) => {
            out.push_str("<ul>");
            render_children(items, out);
            out.push_str("</ul>");
        }

        Node::ListItem(children) => {
            out.push_str("<li>");
            render_children(children, out);
            out.push_str("</li>");
        }

        Node::Paragraph(children) => {
            out.push_str("<p>");
            render_children(children, out);
            out.push_str("</p>");
        }

        Node::Document(blocks) => render_children(blocks, out),
    }
}

fn render_children(children: &[Node], out: &mut String) {
    for child in children {
        render_node(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text() {
        let node = Node::Text("Hello World".to_string());
        assert_eq!(render(&node), "Hello World");
    }

    #[test]
    fn test_line_break() {
        assert_eq!(render(&Node::LineBreak), "<br/>");
    }

    #[test]
    fn test_link() {
        let node = Node::Link {
            text: "Example".to_string(),
            url: "https://example.com".to_string(),
        };
        assert_eq!(
            render(&node),
            "<a href=\"https://example.com\" target=\"_blank\">Example</a>"
        );
    }

    #[test]
    fn test_image() {
        let node = Node::Image {
            alt: "Alt text".to_string(),
            src: "image.png".to_string(),
        };
        assert_eq!(render(&node), "<img src=\"image.png\" alt=\"Alt text\"/>");
    }

    #[test]
    fn test_strong() {
        let node = Node::Strong("bold".to_string());
        assert_eq!(render(&node), "<strong>bold</strong>");
    }

    #[test]
    fn test_emphasis() {
        let node = Node::Emphasis("italic".to_string());
        assert_eq!(render(&node), "<i>italic</i>");
    }

    #[test]
    fn test_heading_levels() {
        for level in 1..=6u8 {
            let node = Node::Heading {
                level,
                text: "Section".to_string(),
            };
            assert_eq!(render(&node), format!("<h{level}>Section</h{level}>"));
        }
    }

    #[test]
    fn test_blockquote() {
        let node = Node::BlockQuote("Quote".to_string());
        assert_eq!(render(&node), "<blockquote>Quote</blockquote>");
    }

    #[test]
    fn test_inline_code() {
        let node = Node::Code("let x = 1;".to_string());
        assert_eq!(render(&node), "<code>let x = 1;</code>");
    }

    #[test]
    fn test_code_block_escapes_entities() {
        let node = Node::CodeBlock {
            code: "if a < b && b > c {}".to_string(),
            language: "rust".to_string(),
        };
        assert_eq!(
            render(&node),
            "<pre><code>if a &lt; b &amp;&amp; b &gt; c {}</code></pre>"
        );
    }

    #[test]
    fn test_code_block_language_is_not_emitted() {
        let node = Node::CodeBlock {
            code: "print(1)".to_string(),
            language: "python".to_string(),
        };
        assert_eq!(render(&node), "<pre><code>print(1)</code></pre>");
    }

    #[test]
    fn test_only_code_blocks_escape() {
        // Every other node kind interpolates raw text.
        let node = Node::Paragraph(vec![Node::Text("a < b & c".to_string())]);
        assert_eq!(render(&node), "<p>a < b & c</p>");

        let node = Node::BlockQuote("<em>kept</em>".to_string());
        assert_eq!(render(&node), "<blockquote><em>kept</em></blockquote>");
    }

    #[test]
    fn test_ordered_list() {
        let node = Node::OrderedList(vec![
            Node::ListItem(vec![Node::Text("First".to_string())]),
            Node::ListItem(vec![Node::Text("Second".to_string())]),
        ]);
        assert_eq!(render(&node), "<ol><li>First</li><li>Second</li></ol>");
    }

    #[test]
    fn test_unordered_list() {
        let node = Node::UnorderedList(vec![
            Node::ListItem(vec![Node::Text("One".to_string())]),
            Node::ListItem(vec![Node::Text("Two".to_string())]),
        ]);
        assert_eq!(render(&node), "<ul><li>One</li><li>Two</li></ul>");
    }

    #[test]
    fn test_paragraph_concatenates_children() {
        let node = Node::Paragraph(vec![
            Node::Text("This is ".to_string()),
            Node::Strong("bold".to_string()),
            Node::Text(" text.".to_string()),
        ]);
        assert_eq!(render(&node), "<p>This is <strong>bold</strong> text.</p>");
    }

    #[test]
    fn test_document_has_no_wrapper() {
        let node = Node::Document(vec![
            Node::Heading {
                level: 1,
                text: "Title".to_string(),
            },
            Node::LineBreak,
        ]);
        assert_eq!(render(&node), "<h1>Title</h1><br/>");
    }

    #[test]
    fn test_empty_text_renders_nothing() {
        let node = Node::Paragraph(vec![
            Node::Text(String::new()),
            Node::Code("x".to_string()),
        ]);
        assert_eq!(render(&node), "<p><code>x</code></p>");
    }
}
