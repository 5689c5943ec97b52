//! Offset and range resolution for syntax-tree nodes.
//!
//! The upstream parser reports node spans as raw byte offsets (possibly
//! unknown); this crate converts them into editor-addressable line/character
//! ranges. A [`RangeResolver`] owns one [`SourceDocument`] and its memoized
//! offset-to-position cache; it is single-owner by contract and provides no
//! internal locking.
//!
//! Declaration nodes commonly report a span that starts at the first
//! modifier or annotation token rather than at the identifier itself;
//! [`RangeResolver::location`] narrows such spans to the identifier's own
//! text via an anchored literal search (see `resolver.rs` for the
//! heuristic's limits).

mod document;
mod node;
mod position;
mod resolver;

pub use document::{DocumentError, SourceDocument};
pub use node::{NodeId, PositionTable, SpanTable, SyntaxNode};
pub use position::{offset_of, PositionConverter};
pub use resolver::RangeResolver;
