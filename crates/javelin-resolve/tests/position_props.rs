use javelin_core::Position;
use javelin_resolve::{offset_of, PositionConverter};
use proptest::prelude::*;

const PROPTEST_CASES: u32 = 256;

fn arb_char() -> impl Strategy<Value = char> {
    // Small pool of ASCII plus multi-byte UTF-8 so byte offsets and char
    // boundaries diverge.
    prop_oneof![
        12 => prop::sample::select(vec![
            'a', 'b', 'c', 'x', 'y', 'z', '0', '1', ' ', '\t', '.', ';', '{', '}',
        ]),
        4 => Just('\n'),
        2 => Just('é'),
        2 => Just('中'),
        1 => Just('😀'),
    ]
}

fn arb_text(max_chars: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(arb_char(), 0..=max_chars).prop_map(|chars| chars.into_iter().collect())
}

fn arb_text_and_offset() -> impl Strategy<Value = (String, usize)> {
    arb_text(64).prop_flat_map(|text| {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        boundaries.push(text.len());
        (Just(text), prop::sample::select(boundaries))
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: PROPTEST_CASES, .. ProptestConfig::default() })]

    #[test]
    fn offset_position_roundtrip((text, offset) in arb_text_and_offset()) {
        let mut converter = PositionConverter::new();
        let position = converter.position(&text, Some(offset as u32));

        prop_assert!(position.is_resolved());
        prop_assert_eq!(offset_of(&text, position), Some(offset as u32));
    }

    #[test]
    fn conversion_is_deterministic_across_cache_hits((text, offset) in arb_text_and_offset()) {
        let mut converter = PositionConverter::new();
        let first = converter.position(&text, Some(offset as u32));
        let second = converter.position(&text, Some(offset as u32));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn past_end_offsets_are_unresolved(text in arb_text(32)) {
        let mut converter = PositionConverter::new();
        let past_end = text.len() as u32 + 1;
        prop_assert_eq!(converter.position(&text, Some(past_end)), Position::UNRESOLVED);
        prop_assert_eq!(converter.position(&text, None), Position::UNRESOLVED);
    }
}
