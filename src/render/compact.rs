//! Paragraph compaction policy.
//!
//! A "compact" paragraph renders without its `<p>` wrapper, the way a tight
//! list item holds bare text. The translator delegates every per-paragraph
//! decision to a [`CompactionPolicy`], which is the extension point plugins
//! decorate.

use crate::dom::{Document, NodeId, NodeKind};

/// Decides whether a paragraph node renders without its `<p>` wrapper.
///
/// Implementations must be pure with respect to the tree: the decision may
/// read ancestry and siblings but never mutate structure or content, so the
/// same node in an unchanged tree always yields the same answer.
pub trait CompactionPolicy: Send + Sync + std::fmt::Debug {
    fn should_be_compact(&self, doc: &Document, id: NodeId) -> bool;
}

/// The translator's default policy.
///
/// A paragraph is compact when it is the sole block child of a container
/// that collapses single paragraphs: list items and blockquotes.
#[derive(Debug)]
pub struct DefaultCompaction;

impl CompactionPolicy for DefaultCompaction {
    fn should_be_compact(&self, doc: &Document, id: NodeId) -> bool {
        let Some(parent) = doc.parent(id) else {
            // Detached or root paragraphs always keep their tag
            return false;
        };

        if !matches!(
            doc.kind(parent),
            NodeKind::ListItem | NodeKind::BlockQuote
        ) {
            return false;
        }

        let block_siblings = doc
            .children(parent)
            .iter()
            .filter(|c| doc.kind(**c).is_block())
            .count();
        block_siblings == 1
    }
}

// =============================================================================
// tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sole_paragraph_in_list_item_is_compact() {
        let mut doc = Document::new();
        let list = doc.push(doc.root(), NodeKind::BulletList);
        let item = doc.push(list, NodeKind::ListItem);
        let para = doc.push(item, NodeKind::Paragraph);

        assert!(DefaultCompaction.should_be_compact(&doc, para));
    }

    #[test]
    fn test_sole_paragraph_in_blockquote_is_compact() {
        let mut doc = Document::new();
        let quote = doc.push(doc.root(), NodeKind::BlockQuote);
        let para = doc.push(quote, NodeKind::Paragraph);

        assert!(DefaultCompaction.should_be_compact(&doc, para));
    }

    #[test]
    fn test_sibling_blocks_prevent_compaction() {
        let mut doc = Document::new();
        let list = doc.push(doc.root(), NodeKind::BulletList);
        let item = doc.push(list, NodeKind::ListItem);
        let first = doc.push(item, NodeKind::Paragraph);
        let _second = doc.push(item, NodeKind::Paragraph);

        assert!(!DefaultCompaction.should_be_compact(&doc, first));
    }

    #[test]
    fn test_top_level_paragraph_is_explicit() {
        let mut doc = Document::new();
        let para = doc.push(doc.root(), NodeKind::Paragraph);
        assert!(!DefaultCompaction.should_be_compact(&doc, para));
    }

    #[test]
    fn test_detached_paragraph_is_explicit() {
        let mut doc = Document::new();
        let para = doc.push_detached(NodeKind::Paragraph);
        assert!(!DefaultCompaction.should_be_compact(&doc, para));
    }
}
