use std::collections::HashMap;
use std::fmt;

use javelin_core::Span;

/// Identifier of a node in the upstream parse tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(raw: u32) -> Self {
        NodeId(raw)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Source-position table supplied by the upstream parser.
///
/// Offsets are byte offsets into the document; `None` stands in for the
/// producer's "unknown position" sentinel.
pub trait PositionTable {
    fn start(&self, node: NodeId) -> Option<u32>;
    fn end(&self, node: NodeId) -> Option<u32>;
}

/// Simple map-backed [`PositionTable`].
#[derive(Debug, Clone, Default)]
pub struct SpanTable {
    spans: HashMap<NodeId, Span>,
}

impl SpanTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: NodeId, span: Span) {
        self.spans.insert(node, span);
    }
}

impl PositionTable for SpanTable {
    fn start(&self, node: NodeId) -> Option<u32> {
        self.spans.get(&node).and_then(|span| span.start)
    }

    fn end(&self, node: NodeId) -> Option<u32> {
        self.spans.get(&node).and_then(|span| span.end)
    }
}

/// Structural view of a declaration-shaped syntax node.
///
/// The variants carry just enough of the node's children to anchor the
/// identifier search: the modifier list, the declared/return type, or the
/// left-hand expression of a qualified access. Every other node shape is
/// `Other` and resolves to its reported span directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    Class {
        node: NodeId,
        name: String,
        modifiers: Option<NodeId>,
    },
    Method {
        node: NodeId,
        name: String,
        modifiers: Option<NodeId>,
        return_type: Option<NodeId>,
    },
    Variable {
        node: NodeId,
        name: String,
        ty: Option<NodeId>,
    },
    /// A qualified-name access `expr.name`.
    FieldAccess {
        node: NodeId,
        name: String,
        expression: NodeId,
    },
    Other {
        node: NodeId,
    },
}

impl SyntaxNode {
    pub fn id(&self) -> NodeId {
        match self {
            SyntaxNode::Class { node, .. }
            | SyntaxNode::Method { node, .. }
            | SyntaxNode::Variable { node, .. }
            | SyntaxNode::FieldAccess { node, .. }
            | SyntaxNode::Other { node } => *node,
        }
    }
}
