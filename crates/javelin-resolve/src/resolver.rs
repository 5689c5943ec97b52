use javelin_core::{Location, Range, Span};

use crate::document::SourceDocument;
use crate::node::{NodeId, PositionTable, SyntaxNode};
use crate::position::PositionConverter;

/// Resolves syntax-node spans into [`Range`]s and [`Location`]s over one
/// document.
///
/// One resolver is created per compilation unit and exclusively owns the
/// document plus the position cache. All outputs are pure functions of the
/// document content and the node offsets; no I/O happens after construction.
pub struct RangeResolver<'a> {
    document: SourceDocument,
    positions: &'a dyn PositionTable,
    converter: PositionConverter,
}

impl<'a> RangeResolver<'a> {
    pub fn new(positions: &'a dyn PositionTable, document: SourceDocument) -> Self {
        Self {
            document,
            positions,
            converter: PositionConverter::new(),
        }
    }

    pub fn document(&self) -> &SourceDocument {
        &self.document
    }

    pub fn uri(&self) -> &str {
        self.document.uri()
    }

    /// The range covering a node's reported span; an unknown end offset is
    /// treated as equal to the start.
    pub fn range(&mut self, node: NodeId) -> Range {
        let span = self.source_span(node);
        self.range_of(span)
    }

    /// The raw offset span of a node, with the unknown-end substitution
    /// applied.
    pub fn source_span(&self, node: NodeId) -> Span {
        let start = self.positions.start(node);
        let end = self.positions.end(node).or(start);
        Span::new(start, end)
    }

    /// The location of a declaration node's identifier token.
    ///
    /// Declaration-shaped nodes are narrowed to the identifier's own text;
    /// every other node resolves to its reported span. A failed search
    /// yields a location whose range is the unresolved sentinel on both
    /// ends, not an error.
    pub fn location(&mut self, node: &SyntaxNode) -> Location {
        let range = match node {
            SyntaxNode::Other { node } => self.range(*node),
            _ => {
                let bounds = self.bounding_box(node, None);
                self.range_of(bounds)
            }
        };
        Location::new(self.document.uri(), range)
    }

    /// Like [`RangeResolver::location`], but searches for `name` instead of
    /// the node's own declared name. Used when the caller already knows the
    /// exact identifier text, e.g. a synthetic constructor whose declared
    /// name does not appear in the source.
    pub fn location_named(&mut self, node: &SyntaxNode, name: &str) -> Location {
        let range = match node {
            SyntaxNode::Other { node } => self.range(*node),
            _ => {
                let bounds = self.bounding_box(node, Some(name));
                self.range_of(bounds)
            }
        };
        Location::new(self.document.uri(), range)
    }

    /// Character span of the identifier token within a declaration's span.
    ///
    /// The reported span of a declaration usually begins at the first
    /// modifier or annotation token, so a plain span is too wide for
    /// "select the identifier" consumers. The search is anchored after the
    /// nearest preceding syntactic element (modifier list, declared or
    /// return type, or left-hand expression); anchoring after the modifiers
    /// matters because the identifier text can recur inside an annotation
    /// argument that precedes the true declaration.
    ///
    /// Limitation: this is a literal text search. If the identifier text
    /// recurs between the anchor and the true target (say, in a comment),
    /// the first occurrence wins. Fixing that would need token-level
    /// positions the upstream table does not guarantee.
    fn bounding_box(&self, node: &SyntaxNode, override_name: Option<&str>) -> Span {
        let (name, anchor) = match node {
            SyntaxNode::Class {
                node,
                name,
                modifiers,
            } => {
                let anchor = modifiers
                    .and_then(|modifiers| self.positions.end(modifiers))
                    .or_else(|| self.positions.start(*node));
                (name.as_str(), anchor)
            }
            SyntaxNode::Method {
                node,
                name,
                modifiers,
                return_type,
            } => {
                let anchor = match (return_type, modifiers) {
                    (Some(return_type), _) => self.end_or_start_of(*return_type, *node),
                    (None, Some(modifiers)) => self.end_or_start_of(*modifiers, *node),
                    (None, None) => self.positions.start(*node),
                };
                (name.as_str(), anchor)
            }
            SyntaxNode::Variable { node, name, ty } => {
                let anchor = match ty {
                    Some(ty) => self.end_or_start_of(*ty, *node),
                    None => self.positions.start(*node),
                };
                (name.as_str(), anchor)
            }
            SyntaxNode::FieldAccess {
                node,
                name,
                expression,
            } => (name.as_str(), self.end_or_start_of(*expression, *node)),
            SyntaxNode::Other { node } => return self.source_span(*node),
        };

        let name = override_name.unwrap_or(name);
        match self.find_from(name, anchor) {
            Some(start) => Span::known(start, start + name.len() as u32),
            None => Span::new(None, None),
        }
    }

    /// End offset of `child`, or the start offset of `parent` when the
    /// upstream table does not know the child's end.
    fn end_or_start_of(&self, child: NodeId, parent: NodeId) -> Option<u32> {
        self.positions
            .end(child)
            .or_else(|| self.positions.start(parent))
    }

    /// Forward literal search for `name` starting at `anchor`; an unknown
    /// anchor degrades to searching from the start of the document.
    fn find_from(&self, name: &str, anchor: Option<u32>) -> Option<u32> {
        let from = anchor.unwrap_or(0) as usize;
        let haystack = self.document.text().get(from..)?;
        haystack.find(name).map(|i| (from + i) as u32)
    }

    fn range_of(&mut self, span: Span) -> Range {
        let text = self.document.text();
        Range::new(
            self.converter.position(text, span.start),
            self.converter.position(text, span.end),
        )
    }
}
