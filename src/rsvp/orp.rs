//! Optimal recognition point: the character a reader's eye should land on.
//!
//! The offset is a fixed length-keyed heuristic, not derived from linguistic
//! data. Words are split around the anchor so the UI can keep it at a fixed
//! column and tint it.

use unicode_segmentation::UnicodeSegmentation;

/// Anchor offset for a word of `len` visible characters:
/// up to 2 chars → 1st, up to 5 → 2nd, up to 9 → 3rd, up to 13 → 4th,
/// longer → 5th.
pub fn orp_index(len: usize) -> usize {
    match len {
        0..=2 => 0,
        3..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}

/// Splits `word` into (before, anchor, after) around its recognition point.
///
/// The anchor is one grapheme cluster, so combining marks stay attached to
/// the highlighted character. Empty input yields three empty parts.
pub fn split_at_orp(word: &str) -> (&str, &str, &str) {
    let graphemes: Vec<(usize, &str)> = word.grapheme_indices(true).collect();
    if graphemes.is_empty() {
        return ("", "", "");
    }

    let idx = orp_index(graphemes.len()).min(graphemes.len() - 1);
    let (start, anchor) = graphemes[idx];
    let end = start + anchor.len();

    (&word[..start], &word[start..end], &word[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orp_index_breakpoints() {
        assert_eq!(orp_index(1), 0);
        assert_eq!(orp_index(2), 0);
        assert_eq!(orp_index(3), 1);
        assert_eq!(orp_index(5), 1);
        assert_eq!(orp_index(6), 2);
        assert_eq!(orp_index(9), 2);
        assert_eq!(orp_index(10), 3);
        assert_eq!(orp_index(13), 3);
        assert_eq!(orp_index(14), 4);
        assert_eq!(orp_index(28), 4);
    }

    #[test]
    fn test_split_short_word() {
        assert_eq!(split_at_orp("I"), ("", "I", ""));
        assert_eq!(split_at_orp("am"), ("", "a", "m"));
    }

    #[test]
    fn test_split_medium_word() {
        assert_eq!(split_at_orp("hello"), ("h", "e", "llo"));
        assert_eq!(split_at_orp("reading"), ("re", "a", "ding"));
    }

    #[test]
    fn test_split_long_word() {
        assert_eq!(split_at_orp("fascinating"), ("fas", "c", "inating"));
        assert_eq!(split_at_orp("extraordinarily"), ("extr", "a", "ordinarily"));
    }

    #[test]
    fn test_split_empty_word() {
        assert_eq!(split_at_orp(""), ("", "", ""));
    }

    #[test]
    fn test_split_reassembles_to_original() {
        for word in ["a", "word", "brushwork", "irrevocable", "don't"] {
            let (before, anchor, after) = split_at_orp(word);
            assert_eq!(format!("{before}{anchor}{after}"), word);
        }
    }

    #[test]
    fn test_anchor_is_a_full_grapheme() {
        // 'e' + combining acute counts as one character, and stays whole
        // when it lands after the anchor.
        let word = "cafe\u{301}";
        let (before, anchor, after) = split_at_orp(word);
        assert_eq!(before, "c");
        assert_eq!(anchor, "a");
        assert_eq!(after, "fe\u{301}");
    }
}
