//! Markdown to document-tree conversion using pulldown-cmark.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use super::{Document, NodeId, NodeKind};

/// Options for markdown conversion
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable smart punctuation (quotes, dashes, ellipses)
    pub smart_punctuation: bool,
}

impl MarkdownOptions {
    /// Create options with all extensions enabled
    pub fn all() -> Self {
        Self {
            strikethrough: true,
            smart_punctuation: true,
        }
    }

    /// Convert to pulldown-cmark Options
    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.smart_punctuation {
            opts.insert(Options::ENABLE_SMART_PUNCTUATION);
        }
        opts
    }
}

/// Convert a markdown string into a [`Document`].
pub fn from_markdown(markdown: &str, options: &MarkdownOptions) -> Document {
    MarkdownConverter::new().convert(markdown, options)
}

/// Markdown to tree converter.
///
/// Keeps a stack of open container nodes; the top of the stack is the
/// current insertion point. Container tags that have no tree counterpart
/// (html blocks, unsupported extensions) are transparent: their children
/// attach to the enclosing node.
struct MarkdownConverter {
    doc: Document,
    stack: Vec<NodeId>,
}

impl MarkdownConverter {
    fn new() -> Self {
        let doc = Document::new();
        let root = doc.root();
        Self {
            doc,
            stack: vec![root],
        }
    }

    fn convert(mut self, markdown: &str, options: &MarkdownOptions) -> Document {
        let parser = Parser::new_ext(markdown, options.to_pulldown_options());

        for event in parser {
            self.handle_event(event);
        }

        self.doc
    }

    /// Current insertion point (root when the stack would be empty).
    fn cursor(&self) -> NodeId {
        *self.stack.last().unwrap_or(&NodeId(0))
    }

    /// Handle a single pulldown-cmark event
    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.add_text(text.as_ref()),
            Event::Code(code) => self.add_leaf(NodeKind::InlineCode(code.to_string())),
            Event::Html(html) | Event::InlineHtml(html) => {
                self.add_leaf(NodeKind::RawHtml(html.to_string()));
            }
            Event::SoftBreak => self.add_text("\n"),
            Event::HardBreak => self.add_leaf(NodeKind::HardBreak),
            Event::Rule => self.add_leaf(NodeKind::Rule),
            // Extensions that are never enabled here
            Event::FootnoteReference(_)
            | Event::TaskListMarker(_)
            | Event::InlineMath(_)
            | Event::DisplayMath(_) => {}
        }
    }

    /// Start a new container (push onto stack)
    fn start_tag(&mut self, tag: Tag) {
        let kind = match tag {
            Tag::Paragraph => NodeKind::Paragraph,
            Tag::BlockQuote(_) => NodeKind::BlockQuote,
            Tag::List(None) => NodeKind::BulletList,
            Tag::List(Some(start)) => NodeKind::OrderedList { start },
            Tag::Item => NodeKind::ListItem,
            Tag::Heading { level, .. } => NodeKind::Heading { level: level as u8 },
            Tag::CodeBlock(kind) => NodeKind::CodeBlock {
                language: match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                    _ => None,
                },
            },
            Tag::Emphasis => NodeKind::Emphasis,
            Tag::Strong => NodeKind::Strong,
            Tag::Strikethrough => NodeKind::Strikethrough,
            Tag::Link {
                dest_url, title, ..
            } => NodeKind::Link {
                href: dest_url.to_string(),
                title: title.to_string(),
            },
            Tag::Image {
                dest_url, title, ..
            } => NodeKind::Image {
                src: dest_url.to_string(),
                title: title.to_string(),
            },
            // Transparent containers: children attach to the enclosing node
            _ => {
                self.stack.push(self.cursor());
                return;
            }
        };

        let id = self.doc.push(self.cursor(), kind);
        self.stack.push(id);
    }

    /// Close the current container (pop from stack)
    fn end_tag(&mut self, _tag: TagEnd) {
        self.stack.pop();
    }

    /// Add text content under the current container
    fn add_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.add_leaf(NodeKind::Text(text.to_string()));
    }

    /// Add a childless node under the current container
    fn add_leaf(&mut self, kind: NodeKind) {
        self.doc.push(self.cursor(), kind);
    }
}

// =============================================================================
// tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_under<'a>(doc: &'a Document, id: NodeId) -> Vec<&'a NodeKind> {
        doc.children(id).iter().map(|c| doc.kind(*c)).collect()
    }

    #[test]
    fn test_paragraph() {
        let doc = from_markdown("hello world", &MarkdownOptions::default());
        let children = doc.children(doc.root());
        assert_eq!(children.len(), 1);
        assert_eq!(doc.kind(children[0]), &NodeKind::Paragraph);
        assert_eq!(
            kinds_under(&doc, children[0]),
            vec![&NodeKind::Text("hello world".into())]
        );
    }

    #[test]
    fn test_blockquote_contains_paragraph() {
        let doc = from_markdown("> hi", &MarkdownOptions::default());
        let quote = doc.children(doc.root())[0];
        assert_eq!(doc.kind(quote), &NodeKind::BlockQuote);

        let para = doc.children(quote)[0];
        assert_eq!(doc.kind(para), &NodeKind::Paragraph);
        assert_eq!(doc.parent(para), Some(quote));
    }

    #[test]
    fn test_nested_list_inside_blockquote() {
        let doc = from_markdown("> - nested", &MarkdownOptions::default());
        let quote = doc.children(doc.root())[0];
        let list = doc.children(quote)[0];
        let item = doc.children(list)[0];

        assert_eq!(doc.kind(quote), &NodeKind::BlockQuote);
        assert_eq!(doc.kind(list), &NodeKind::BulletList);
        assert_eq!(doc.kind(item), &NodeKind::ListItem);
    }

    #[test]
    fn test_ordered_list_start() {
        let doc = from_markdown("3. three\n4. four", &MarkdownOptions::default());
        let list = doc.children(doc.root())[0];
        assert_eq!(doc.kind(list), &NodeKind::OrderedList { start: 3 });
        assert_eq!(doc.children(list).len(), 2);
    }

    #[test]
    fn test_fenced_code_block_language() {
        let doc = from_markdown("```rust\nfn main() {}\n```", &MarkdownOptions::default());
        let block = doc.children(doc.root())[0];
        assert_eq!(
            doc.kind(block),
            &NodeKind::CodeBlock {
                language: Some("rust".into())
            }
        );
    }

    #[test]
    fn test_heading_level() {
        let doc = from_markdown("## section", &MarkdownOptions::default());
        let heading = doc.children(doc.root())[0];
        assert_eq!(doc.kind(heading), &NodeKind::Heading { level: 2 });
    }

    #[test]
    fn test_strikethrough_requires_option() {
        let doc = from_markdown("~~gone~~", &MarkdownOptions::default());
        let para = doc.children(doc.root())[0];
        // Without the extension the tildes are literal text
        assert!(
            doc.children(para)
                .iter()
                .all(|c| matches!(doc.kind(*c), NodeKind::Text(_)))
        );

        let doc = from_markdown("~~gone~~", &MarkdownOptions::all());
        let para = doc.children(doc.root())[0];
        assert_eq!(doc.kind(doc.children(para)[0]), &NodeKind::Strikethrough);
    }
}
