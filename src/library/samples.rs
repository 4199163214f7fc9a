//! Built-in sample texts for the seeded catalog, so the reader works out of
//! the box without importing anything.

use crate::rsvp::{tokenize, Chapter, RsvpMode};

pub const GARDEN_AT_DUSK: &str = "The light from the garden was beginning to fade. Shadows stretched long across the tatami mats, creeping slowly toward the alcove where a single camellia stood in a bamboo vase. He sat perfectly still, listening to the sound of the wind moving through the pine trees outside. It was a sound that seemed to carry the weight of centuries, a whisper of old ghosts and forgotten promises. In the dim light, the ink on the page before him seemed to shimmer, as if the words were still wet, still forming themselves from the void. \"Beauty,\" he thought, \"is not in the object itself, but in the patterns of shadows, the light and the darkness, that one thing against another creates.\" He picked up his brush. The tip was fine, delicate. He dipped it into the inkstone, watching the black liquid pool and swirl. There is a moment before the brush touches the paper when everything is possible. A moment of pure potential. Then, contact. The ink bleeds into the fibers, irrevocable and true.";

const SHADOWS_PART_ONE: &str = "Morning came grey and quiet over the rooftops. She opened the shutters one by one, letting the pale light settle on the floorboards like dust. Tea first, then the letters; the order of things mattered to her more than she would admit. Each envelope carried a different weight, and she read the heaviest last.";

const SHADOWS_PART_TWO: &str = "By evening the rain had come, patient and unhurried. She wrote her reply by lamplight, crossing out more than she kept, until the page said only what was true. Outside, the lanterns along the canal flickered twice and held steady.";

const BRUSH_PART_ONE: &str = "The master ground the ink slowly, in circles, the way his own teacher had. Hurry, he said, and the ink knows. The students watched the water darken and said nothing. A line drawn in haste cannot be withdrawn; a line drawn with care needs no defense.";

const BRUSH_PART_TWO: &str = "Years later, one of them would stand before an empty sheet and hear the circles again. The brush is honest, the master had said. It records the hand, and the hand records the heart. There is nowhere in a single stroke to hide.";

/// The reader-mode sample markers for the flagship book. Indices follow the
/// chapter selector of the sample edition, not a computed segmentation.
fn garden_chapters() -> Vec<Chapter> {
    vec![
        Chapter::new("The Garden at Dusk", 0),
        Chapter::new("Shadows and Light", 50),
        Chapter::new("The Brush and Ink", 100),
        Chapter::new("A Moment of Potential", 150),
    ]
}

fn two_part(part_one: &str, one: &str, part_two: &str, two: &str) -> (String, Vec<Chapter>) {
    // Chapter boundaries are token offsets, so the second marker sits at the
    // cleaned token count of the first part. Counts are mode-independent.
    let boundary = tokenize(part_one, RsvpMode::Clean).len();
    let content = format!("{part_one}\n\n{part_two}");
    let chapters = vec![Chapter::new(one, 0), Chapter::new(two, boundary)];
    (content, chapters)
}

/// Content and chapter markers for a seeded book, if it ships with any.
pub fn sample_text(book_id: &str) -> Option<(String, Vec<Chapter>)> {
    match book_id {
        "b1" => Some((GARDEN_AT_DUSK.to_string(), garden_chapters())),
        "b2" => Some(two_part(
            SHADOWS_PART_ONE,
            "Morning",
            SHADOWS_PART_TWO,
            "Evening",
        )),
        "b3" => Some(two_part(
            BRUSH_PART_ONE,
            "The Lesson",
            BRUSH_PART_TWO,
            "The Stroke",
        )),
        _ => None,
    }
}
