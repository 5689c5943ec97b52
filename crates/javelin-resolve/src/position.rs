use std::collections::HashMap;

use javelin_core::Position;

/// Memoized byte-offset to [`Position`] conversion over one document.
///
/// The cache is keyed by the raw offset (exact match only) and lives exactly
/// as long as its document; there is no eviction. The converter is owned by
/// a single [`crate::RangeResolver`] and must not be shared across documents
/// or driven from multiple workers without external synchronization.
#[derive(Debug, Default)]
pub struct PositionConverter {
    cache: HashMap<u32, Position>,
}

impl PositionConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a byte offset into a zero-based line/character position.
    ///
    /// Unknown offsets, offsets past the end of `text`, and offsets that do
    /// not fall on a character boundary yield [`Position::UNRESOLVED`];
    /// `text.len()` itself is a valid position.
    pub fn position(&mut self, text: &str, offset: Option<u32>) -> Position {
        let Some(offset) = offset else {
            return Position::UNRESOLVED;
        };
        if let Some(&position) = self.cache.get(&offset) {
            return position;
        }
        let position = compute_position(text, offset);
        self.cache.insert(offset, position);
        position
    }

    #[cfg(test)]
    pub(crate) fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

fn compute_position(text: &str, offset: u32) -> Position {
    let Some(preceding) = text.get(..offset as usize) else {
        return Position::UNRESOLVED;
    };
    let line = preceding.bytes().filter(|&b| b == b'\n').count();
    let character = match preceding.rfind('\n') {
        Some(newline) => preceding.len() - newline - 1,
        None => preceding.len(),
    };
    Position::new(line as i32, character as i32)
}

/// Converts a position back into a byte offset by scanning forward and
/// counting newlines.
///
/// Returns `None` when `text` has fewer lines than `position.line` or the
/// position is the unresolved sentinel. The character component is added to
/// the line start without bounds-checking against the line length, mirroring
/// the forward conversion (which never produces such positions).
pub fn offset_of(text: &str, position: Position) -> Option<u32> {
    if position.line < 0 || position.character < 0 {
        return None;
    }
    if position.line == 0 {
        return Some(position.character as u32);
    }
    let mut current_line = 0i32;
    for (i, b) in text.bytes().enumerate() {
        if b == b'\n' {
            current_line += 1;
            if current_line == position.line {
                return Some((i + 1) as u32 + position.character as u32);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "package p;\nclass C {\n}\n";

    #[test]
    fn position_counts_lines_and_columns() {
        let mut converter = PositionConverter::new();
        assert_eq!(converter.position(TEXT, Some(0)), Position::new(0, 0));
        assert_eq!(converter.position(TEXT, Some(8)), Position::new(0, 8));
        assert_eq!(converter.position(TEXT, Some(11)), Position::new(1, 0));
        assert_eq!(converter.position(TEXT, Some(17)), Position::new(1, 6));
    }

    #[test]
    fn out_of_range_offsets_yield_the_sentinel() {
        let mut converter = PositionConverter::new();
        assert_eq!(converter.position(TEXT, None), Position::UNRESOLVED);
        let past_end = TEXT.len() as u32 + 1;
        assert_eq!(converter.position(TEXT, Some(past_end)), Position::UNRESOLVED);
    }

    #[test]
    fn end_of_buffer_is_a_valid_position() {
        let text = "class C {}";
        let mut converter = PositionConverter::new();
        let end = converter.position(text, Some(text.len() as u32));
        assert_eq!(end, Position::new(0, 10));
        assert!(end.is_resolved());
    }

    #[test]
    fn offsets_inside_a_multibyte_character_yield_the_sentinel() {
        let text = "// héllo\n";
        let mut converter = PositionConverter::new();
        // 'é' occupies bytes 4..6.
        assert_eq!(converter.position(text, Some(5)), Position::UNRESOLVED);
        assert_eq!(converter.position(text, Some(6)), Position::new(0, 6));
    }

    #[test]
    fn conversions_are_memoized_per_offset() {
        let mut converter = PositionConverter::new();
        converter.position(TEXT, Some(5));
        converter.position(TEXT, Some(5));
        converter.position(TEXT, Some(11));
        assert_eq!(converter.cached_len(), 2);
    }

    #[test]
    fn offset_of_scans_forward_by_line() {
        assert_eq!(offset_of(TEXT, Position::new(0, 8)), Some(8));
        assert_eq!(offset_of(TEXT, Position::new(1, 6)), Some(17));
        assert_eq!(offset_of(TEXT, Position::new(99, 0)), None);
        assert_eq!(offset_of(TEXT, Position::UNRESOLVED), None);
    }
}
