/// A chapter marker: a title and the token index where the chapter begins.
///
/// Markers are ordered and non-decreasing in `start_word_index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    pub start_word_index: usize,
}

impl Chapter {
    pub fn new(title: impl Into<String>, start_word_index: usize) -> Self {
        Self {
            title: title.into(),
            start_word_index,
        }
    }
}

/// Index of the chapter covering `current_index`: the last marker whose start
/// is at or before it. Falls back to the first marker.
pub fn current_chapter(chapters: &[Chapter], current_index: usize) -> usize {
    let mut idx = 0;
    for (i, chapter) in chapters.iter().enumerate() {
        if chapter.start_word_index <= current_index {
            idx = i;
        }
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Vec<Chapter> {
        vec![
            Chapter::new("One", 0),
            Chapter::new("Two", 50),
            Chapter::new("Three", 100),
            Chapter::new("Four", 150),
        ]
    }

    #[test]
    fn test_resolution_inside_a_chapter() {
        assert_eq!(current_chapter(&markers(), 75), 1);
    }

    #[test]
    fn test_resolution_at_start() {
        assert_eq!(current_chapter(&markers(), 0), 0);
    }

    #[test]
    fn test_resolution_just_before_boundary() {
        assert_eq!(current_chapter(&markers(), 149), 2);
    }

    #[test]
    fn test_resolution_on_boundary() {
        assert_eq!(current_chapter(&markers(), 150), 3);
    }

    #[test]
    fn test_resolution_past_the_end() {
        assert_eq!(current_chapter(&markers(), 10_000), 3);
    }

    #[test]
    fn test_no_markers_resolves_to_zero() {
        assert_eq!(current_chapter(&[], 42), 0);
    }

    #[test]
    fn test_marker_list_not_starting_at_zero() {
        let chapters = vec![Chapter::new("Late", 30)];
        // Nothing qualifies yet; default to the first marker.
        assert_eq!(current_chapter(&chapters, 10), 0);
    }
}
