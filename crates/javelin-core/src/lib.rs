//! Core shared types for Javelin.
//!
//! This crate is intentionally small and dependency-free apart from `serde`:
//! positions, ranges, locations and raw source spans as they are handed to
//! the protocol/indexing layer.

use serde::{Deserialize, Serialize};

/// A position in a text document expressed as (line, byte column), zero-based.
///
/// The reserved value `{-1, -1}` ([`Position::UNRESOLVED`]) marks positions
/// the resolver could not determine. Callers must check [`Position::is_resolved`]
/// rather than expect an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: i32,
    pub character: i32,
}

impl Position {
    /// Sentinel for "this offset could not be resolved to a position".
    pub const UNRESOLVED: Position = Position {
        line: -1,
        character: -1,
    };

    #[inline]
    pub const fn new(line: i32, character: i32) -> Self {
        Self { line, character }
    }

    #[inline]
    pub const fn is_resolved(&self) -> bool {
        self.line >= 0 && self.character >= 0
    }
}

/// A range in a text document expressed with [`Position`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Sentinel range: both ends unresolved.
    pub const UNRESOLVED: Range = Range {
        start: Position::UNRESOLVED,
        end: Position::UNRESOLVED,
    };

    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn is_resolved(&self) -> bool {
        self.start.is_resolved() && self.end.is_resolved()
    }
}

/// A range inside a particular document, identified by URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub uri: String,
    pub range: Range,
}

impl Location {
    #[inline]
    pub fn new(uri: impl Into<String>, range: Range) -> Self {
        Self {
            uri: uri.into(),
            range,
        }
    }
}

/// A raw byte-offset span as reported by the upstream parse tree.
///
/// Either end may be unknown when the producer could not report a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Option<u32>,
    pub end: Option<u32>,
}

impl Span {
    pub fn new(start: Option<u32>, end: Option<u32>) -> Self {
        if let (Some(start), Some(end)) = (start, end) {
            debug_assert!(start <= end, "span start {start} must not exceed end {end}");
        }
        Self { start, end }
    }

    #[inline]
    pub fn known(start: u32, end: u32) -> Self {
        Self::new(Some(start), Some(end))
    }
}

/// Symbol kinds surfaced to the protocol layer.
///
/// Serialized as the numeric LSP `SymbolKind` code, not the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum SymbolKind {
    Package = 4,
    Class = 5,
    Method = 6,
    Constructor = 9,
    Enum = 10,
    Interface = 11,
    Field = 8,
}

impl From<SymbolKind> for u32 {
    fn from(kind: SymbolKind) -> u32 {
        kind as u32
    }
}

impl TryFrom<u32> for SymbolKind {
    type Error = String;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Ok(match code {
            4 => SymbolKind::Package,
            5 => SymbolKind::Class,
            6 => SymbolKind::Method,
            8 => SymbolKind::Field,
            9 => SymbolKind::Constructor,
            10 => SymbolKind::Enum,
            11 => SymbolKind::Interface,
            other => return Err(format!("unknown symbol kind code {other}")),
        })
    }
}
