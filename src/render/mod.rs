//! HTML translation of the document tree.
//!
//! The translator walks the tree once, top-down, emitting HTML for each
//! node. Paragraphs are the only node with a configurable rendering: the
//! installed [`CompactionPolicy`] is consulted exactly once per paragraph
//! visit, and a compact paragraph emits its children without the `<p>`
//! wrapper.

mod compact;

pub use compact::{CompactionPolicy, DefaultCompaction};

use crate::dom::{Document, NodeId, NodeKind};
use crate::utils::html::{escape, escape_attr};

/// Document-tree to HTML translator.
pub struct HtmlTranslator {
    policy: Box<dyn CompactionPolicy>,
}

impl Default for HtmlTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlTranslator {
    /// Translator with the default compaction policy.
    pub fn new() -> Self {
        Self {
            policy: Box::new(DefaultCompaction),
        }
    }

    /// Translator with an installed policy (typically a plugin chain).
    pub fn with_policy(policy: Box<dyn CompactionPolicy>) -> Self {
        Self { policy }
    }

    /// Render the whole document body.
    pub fn render(&self, doc: &Document) -> String {
        let mut out = String::with_capacity(doc.len() * 16);
        for child in doc.children(doc.root()) {
            self.visit(doc, *child, &mut out);
        }
        out
    }

    fn visit(&self, doc: &Document, id: NodeId, out: &mut String) {
        match doc.kind(id) {
            NodeKind::Document => self.visit_children(doc, id, out),
            NodeKind::Paragraph => {
                if self.policy.should_be_compact(doc, id) {
                    self.visit_children(doc, id, out);
                    out.push('\n');
                } else {
                    out.push_str("<p>");
                    self.visit_children(doc, id, out);
                    out.push_str("</p>\n");
                }
            }
            NodeKind::BlockQuote => {
                out.push_str("<blockquote>\n");
                self.visit_children(doc, id, out);
                out.push_str("</blockquote>\n");
            }
            NodeKind::BulletList => {
                out.push_str("<ul>\n");
                self.visit_children(doc, id, out);
                out.push_str("</ul>\n");
            }
            NodeKind::OrderedList { start } => {
                if *start == 1 {
                    out.push_str("<ol>\n");
                } else {
                    out.push_str(&format!("<ol start=\"{start}\">\n"));
                }
                self.visit_children(doc, id, out);
                out.push_str("</ol>\n");
            }
            NodeKind::ListItem => {
                out.push_str("<li>");
                self.visit_children(doc, id, out);
                // Compact content ends with its own newline; trim for tight items
                if out.ends_with('\n') {
                    out.pop();
                }
                out.push_str("</li>\n");
            }
            NodeKind::Heading { level } => {
                out.push_str(&format!("<h{level}>"));
                self.visit_children(doc, id, out);
                out.push_str(&format!("</h{level}>\n"));
            }
            NodeKind::CodeBlock { language } => {
                match language {
                    Some(lang) => out.push_str(&format!(
                        "<pre><code class=\"language-{}\">",
                        escape_attr(lang)
                    )),
                    None => out.push_str("<pre><code>"),
                }
                self.visit_children(doc, id, out);
                out.push_str("</code></pre>\n");
            }
            NodeKind::Emphasis => {
                out.push_str("<em>");
                self.visit_children(doc, id, out);
                out.push_str("</em>");
            }
            NodeKind::Strong => {
                out.push_str("<strong>");
                self.visit_children(doc, id, out);
                out.push_str("</strong>");
            }
            NodeKind::Strikethrough => {
                out.push_str("<del>");
                self.visit_children(doc, id, out);
                out.push_str("</del>");
            }
            NodeKind::Link { href, title } => {
                out.push_str(&format!("<a href=\"{}\"", escape_attr(href)));
                if !title.is_empty() {
                    out.push_str(&format!(" title=\"{}\"", escape_attr(title)));
                }
                out.push('>');
                self.visit_children(doc, id, out);
                out.push_str("</a>");
            }
            NodeKind::Image { src, title } => {
                out.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\"",
                    escape_attr(src),
                    escape_attr(&collect_text(doc, id))
                ));
                if !title.is_empty() {
                    out.push_str(&format!(" title=\"{}\"", escape_attr(title)));
                }
                out.push_str(" />");
            }
            NodeKind::InlineCode(code) => {
                out.push_str(&format!("<code>{}</code>", escape(code)));
            }
            NodeKind::Rule => out.push_str("<hr />\n"),
            NodeKind::HardBreak => out.push_str("<br />\n"),
            NodeKind::RawHtml(html) => out.push_str(html),
            NodeKind::Text(text) => out.push_str(&escape(text)),
        }
    }

    fn visit_children(&self, doc: &Document, id: NodeId, out: &mut String) {
        for child in doc.children(id) {
            self.visit(doc, *child, out);
        }
    }
}

/// Flatten the text content below a node (image alt text).
fn collect_text(doc: &Document, id: NodeId) -> String {
    let mut text = String::new();
    for child in doc.children(id) {
        match doc.kind(*child) {
            NodeKind::Text(t) | NodeKind::InlineCode(t) => text.push_str(t),
            _ => text.push_str(&collect_text(doc, *child)),
        }
    }
    text
}

// =============================================================================
// tests
// =============================================================================
