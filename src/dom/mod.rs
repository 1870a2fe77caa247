//! Arena-backed document tree.
//!
//! The tree is the contract between the markdown converter and the HTML
//! translator: the converter builds it, the translator reads it. Nodes are
//! stored in a flat arena and addressed by [`NodeId`]; every node keeps a
//! back-reference to its parent so rendering policies can inspect ancestry
//! without mutating structure.

pub mod convert;

// =============================================================================
// NodeId
// =============================================================================

/// Handle into a [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

// =============================================================================
// NodeKind
// =============================================================================

/// Node type tag plus per-kind payload.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Tree root; never rendered itself.
    Document,
    Paragraph,
    BlockQuote,
    BulletList,
    OrderedList { start: u64 },
    ListItem,
    Heading { level: u8 },
    CodeBlock { language: Option<String> },
    Emphasis,
    Strong,
    Strikethrough,
    Link { href: String, title: String },
    Image { src: String, title: String },
    InlineCode(String),
    Rule,
    HardBreak,
    RawHtml(String),
    Text(String),
}

impl NodeKind {
    /// Block-level nodes participate in compaction decisions; inline nodes
    /// and bare text do not.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Self::Paragraph
                | Self::BlockQuote
                | Self::BulletList
                | Self::OrderedList { .. }
                | Self::ListItem
                | Self::Heading { .. }
                | Self::CodeBlock { .. }
                | Self::Rule
        )
    }
}

// =============================================================================
// Document
// =============================================================================

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Parsed document tree. Owns all nodes; index 0 is always the root.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root node id (always valid).
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a new node under `parent` and return its id.
    pub fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Append a node with no parent.
    ///
    /// Detached nodes never appear in a render pass; they exist so policies
    /// can be exercised against nodes whose ancestry chain is empty.
    pub fn push_detached(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Iterate ancestors of `id`, nearest first, root last.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            next: self.parent(id),
        }
    }

    /// Total node count, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}

/// Iterator over a node's ancestor chain.
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.doc.parent(current);
        Some(current)
    }
}

// =============================================================================
// tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.kind(doc.root()), &NodeKind::Document);
        assert_eq!(doc.parent(doc.root()), None);
    }

    #[test]
    fn test_push_links_parent_and_child() {
        let mut doc = Document::new();
        let quote = doc.push(doc.root(), NodeKind::BlockQuote);
        let para = doc.push(quote, NodeKind::Paragraph);

        assert_eq!(doc.parent(para), Some(quote));
        assert_eq!(doc.parent(quote), Some(doc.root()));
        assert_eq!(doc.children(quote), &[para]);
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let mut doc = Document::new();
        let quote = doc.push(doc.root(), NodeKind::BlockQuote);
        let list = doc.push(quote, NodeKind::BulletList);
        let item = doc.push(list, NodeKind::ListItem);
        let para = doc.push(item, NodeKind::Paragraph);

        let chain: Vec<NodeId> = doc.ancestors(para).collect();
        assert_eq!(chain, vec![item, list, quote, doc.root()]);
    }

    #[test]
    fn test_detached_node_has_no_ancestors() {
        let mut doc = Document::new();
        let para = doc.push_detached(NodeKind::Paragraph);
        assert_eq!(doc.parent(para), None);
        assert_eq!(doc.ancestors(para).count(), 0);
    }
}
