//! Always wrap paragraphs inside blockquotes in an explicit `<p>`.
//!
//! The default policy collapses a sole paragraph inside a blockquote into
//! compact form, which strips the `<p>` tag that quote styling hangs off.
//! This plugin pins the decision to "explicit" for any paragraph with a
//! blockquote ancestor, at any depth, and delegates everything else to the
//! inner policy unchanged.

use super::Plugin;
use crate::dom::{Document, NodeId, NodeKind};
use crate::render::CompactionPolicy;

/// Upper bound on the ancestry walk. A well-formed tree is nowhere near
/// this deep; hitting the bound means a malformed parent chain, and the
/// node is then treated as not inside a blockquote.
const MAX_ANCESTRY_DEPTH: usize = 512;

/// The `blockquote_fix` plugin.
pub struct BlockquoteFix;

impl Plugin for BlockquoteFix {
    fn name(&self) -> &'static str {
        "blockquote_fix"
    }

    fn decorate(&self, inner: Box<dyn CompactionPolicy>) -> Box<dyn CompactionPolicy> {
        Box::new(NoCompactInBlockquote { inner })
    }
}

/// Policy decorator installed by [`BlockquoteFix`].
#[derive(Debug)]
struct NoCompactInBlockquote {
    inner: Box<dyn CompactionPolicy>,
}

impl CompactionPolicy for NoCompactInBlockquote {
    fn should_be_compact(&self, doc: &Document, id: NodeId) -> bool {
        if inside_blockquote(doc, id) {
            return false;
        }
        self.inner.should_be_compact(doc, id)
    }
}

/// Walk the parent chain looking for a blockquote.
fn inside_blockquote(doc: &Document, id: NodeId) -> bool {
    doc.ancestors(id)
        .take(MAX_ANCESTRY_DEPTH)
        .any(|ancestor| matches!(doc.kind(ancestor), NodeKind::BlockQuote))
}

// =============================================================================
// tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Stub inner policy with a fixed answer, for pass-through assertions.
    #[derive(Debug)]
    struct Fixed(bool);

    impl CompactionPolicy for Fixed {
        fn should_be_compact(&self, _doc: &Document, _id: NodeId) -> bool {
            self.0
        }
    }

    fn fixed(answer: bool) -> Box<dyn CompactionPolicy> {
        BlockquoteFix.decorate(Box::new(Fixed(answer)))
    }

    #[test]
    fn test_direct_blockquote_parent() {
        // blockquote(paragraph("hi")) -> never compact
        let mut doc = Document::new();
        let quote = doc.push(doc.root(), NodeKind::BlockQuote);
        let para = doc.push(quote, NodeKind::Paragraph);

        assert!(!fixed(true).should_be_compact(&doc, para));
    }

    #[test]
    fn test_deeply_nested_inside_blockquote() {
        // blockquote(list(listitem(paragraph("nested")))) -> never compact
        let mut doc = Document::new();
        let quote = doc.push(doc.root(), NodeKind::BlockQuote);
        let list = doc.push(quote, NodeKind::BulletList);
        let item = doc.push(list, NodeKind::ListItem);
        let para = doc.push(item, NodeKind::Paragraph);

        assert!(!fixed(true).should_be_compact(&doc, para));
    }

    #[test]
    fn test_no_blockquote_ancestor_passes_through() {
        // document(paragraph("hi")) -> inner policy decides
        let mut doc = Document::new();
        let para = doc.push(doc.root(), NodeKind::Paragraph);

        assert!(fixed(true).should_be_compact(&doc, para));
        assert!(!fixed(false).should_be_compact(&doc, para));
    }

    #[test]
    fn test_detached_node_falls_through() {
        // No parent chain at all: walk terminates, inner policy decides
        let mut doc = Document::new();
        let para = doc.push_detached(NodeKind::Paragraph);

        assert!(fixed(true).should_be_compact(&doc, para));
        assert!(!fixed(false).should_be_compact(&doc, para));
    }

    #[test]
    fn test_idempotent_on_unchanged_tree() {
        let mut doc = Document::new();
        let quote = doc.push(doc.root(), NodeKind::BlockQuote);
        let para = doc.push(quote, NodeKind::Paragraph);

        let policy = fixed(true);
        let first = policy.should_be_compact(&doc, para);
        let second = policy.should_be_compact(&doc, para);
        assert_eq!(first, second);
        assert!(!first);
    }

    #[test]
    fn test_depth_bound_stops_the_walk() {
        // Blockquote sits beyond the depth bound: treated as not inside one
        let mut doc = Document::new();
        let quote = doc.push(doc.root(), NodeKind::BlockQuote);
        let mut current = quote;
        for _ in 0..MAX_ANCESTRY_DEPTH {
            current = doc.push(current, NodeKind::Emphasis);
        }
        let para = doc.push(current, NodeKind::Paragraph);

        assert!(fixed(true).should_be_compact(&doc, para));

        // Within the bound the blockquote is still found
        let mut doc = Document::new();
        let quote = doc.push(doc.root(), NodeKind::BlockQuote);
        let mut current = quote;
        for _ in 0..(MAX_ANCESTRY_DEPTH / 2) {
            current = doc.push(current, NodeKind::Emphasis);
        }
        let para = doc.push(current, NodeKind::Paragraph);

        assert!(!fixed(true).should_be_compact(&doc, para));
    }
}
