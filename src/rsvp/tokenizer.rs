use super::token::{RsvpMode, RsvpToken};

/// Pause durations keyed by the trailing punctuation of a raw token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PauseTable {
    pub comma_ms: u64,
    pub semicolon_ms: u64,
    pub colon_ms: u64,
    pub dash_ms: u64,
    pub period_ms: u64,
    pub exclamation_ms: u64,
    pub question_ms: u64,
    pub ellipsis_ms: u64,
}

impl Default for PauseTable {
    fn default() -> Self {
        Self {
            comma_ms: 90,
            semicolon_ms: 120,
            colon_ms: 120,
            dash_ms: 120,
            period_ms: 180,
            exclamation_ms: 200,
            question_ms: 220,
            ellipsis_ms: 260,
        }
    }
}

/// Strips leading/trailing clutter while keeping internal apostrophes
/// (Paul's, don't) and internal hyphens (state-of-the-art).
pub fn clean_display_word(raw: &str) -> String {
    let s = raw.trim_start_matches(|c: char| !c.is_alphanumeric());
    let s =
        s.trim_end_matches(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '.' || c == ','));
    s.trim_matches('\'').to_string()
}

/// Extra hold time for a raw token, decided by its trailing character.
///
/// Ellipsis is checked first so that `wait...` is not read as a bare period.
/// A run of one or two periods is a period pause; three or more (or the
/// single `…` character) is an ellipsis pause.
pub fn compute_extra_pause_ms(raw: &str, pauses: &PauseTable) -> u64 {
    let t = raw.trim();
    let Some(last) = t.chars().last() else {
        return 0;
    };

    if last == '\u{2026}' || t.ends_with("...") {
        return pauses.ellipsis_ms;
    }

    match last {
        '!' => pauses.exclamation_ms,
        '?' => pauses.question_ms,
        '.' => pauses.period_ms,
        ';' => pauses.semicolon_ms,
        ':' => pauses.colon_ms,
        // U+060C is the Arabic comma.
        ',' | '\u{060C}' => pauses.comma_ms,
        '\u{2014}' | '\u{2013}' | '-' => pauses.dash_ms,
        _ => 0,
    }
}

/// Splits `content` on whitespace runs and produces the display tokens for
/// `mode`, using the default pause table.
pub fn tokenize(content: &str, mode: RsvpMode) -> Vec<RsvpToken> {
    tokenize_with(content, mode, &PauseTable::default())
}

/// Tokens that clean to nothing (a bare `--`, a stray `...`) are not emitted;
/// their pause folds into the previous retained token so the cadence survives.
pub fn tokenize_with(content: &str, mode: RsvpMode, pauses: &PauseTable) -> Vec<RsvpToken> {
    let mut tokens: Vec<RsvpToken> = Vec::new();

    for raw in content.split_whitespace() {
        let text = clean_display_word(raw);
        let extra_pause_ms = match mode {
            RsvpMode::Clean => compute_extra_pause_ms(raw, pauses),
            RsvpMode::Pure => 0,
        };

        if text.is_empty() {
            if let Some(prev) = tokens.last_mut() {
                prev.extra_pause_ms += extra_pause_ms;
            }
            continue;
        }

        tokens.push(RsvpToken {
            raw: raw.to_string(),
            text,
            extra_pause_ms,
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(content: &str) -> Vec<RsvpToken> {
        tokenize(content, RsvpMode::Clean)
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        let text = "The light from the garden was beginning to fade... \"Beauty,\" he thought.";
        assert_eq!(clean(text), clean(text));
        assert_eq!(
            tokenize(text, RsvpMode::Pure),
            tokenize(text, RsvpMode::Pure)
        );
    }

    #[test]
    fn test_no_empty_tokens_survive() {
        let text = "-- word ... ( ) !? plain";
        for token in clean(text) {
            assert!(!token.text.is_empty(), "empty token retained: {:?}", token);
        }
    }

    #[test]
    fn test_pure_mode_has_zero_pauses() {
        let text = "Wait... what?! Yes, really; and then: done.";
        for token in tokenize(text, RsvpMode::Pure) {
            assert_eq!(token.extra_pause_ms, 0, "pure mode paused on {:?}", token);
        }
    }

    #[test]
    fn test_period_pause() {
        let tokens = clean("end.");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "end.");
        assert_eq!(tokens[0].extra_pause_ms, 180);
    }

    #[test]
    fn test_comma_pause() {
        let tokens = clean("wait,");
        assert_eq!(tokens[0].text, "wait,");
        assert_eq!(tokens[0].extra_pause_ms, 90);
    }

    #[test]
    fn test_trailing_exclamation_wins_over_question() {
        // "really?!" ends in '!' so it takes the exclamation pause.
        let tokens = clean("really?!");
        assert_eq!(tokens[0].extra_pause_ms, 200);
    }

    #[test]
    fn test_question_pause() {
        let tokens = clean("why?");
        assert_eq!(tokens[0].extra_pause_ms, 220);
    }

    #[test]
    fn test_ellipsis_pause() {
        let tokens = clean("wow...");
        assert_eq!(tokens[0].extra_pause_ms, 260);
    }

    #[test]
    fn test_unicode_ellipsis_pause() {
        let tokens = clean("wow\u{2026}");
        assert_eq!(tokens[0].extra_pause_ms, 260);
    }

    #[test]
    fn test_double_period_is_a_period_pause() {
        let tokens = clean("odd..");
        assert_eq!(tokens[0].extra_pause_ms, 180);
    }

    #[test]
    fn test_plain_word_has_no_pause() {
        let tokens = clean("plain");
        assert_eq!(tokens[0].extra_pause_ms, 0);
    }

    #[test]
    fn test_semicolon_colon_and_dash_pauses() {
        assert_eq!(clean("first;")[0].extra_pause_ms, 120);
        assert_eq!(clean("second:")[0].extra_pause_ms, 120);
        assert_eq!(clean("aside\u{2014}")[0].extra_pause_ms, 120);
        assert_eq!(clean("aside-")[0].extra_pause_ms, 120);
    }

    #[test]
    fn test_arabic_comma_pause() {
        assert_eq!(clean("word\u{060C}")[0].extra_pause_ms, 90);
    }

    #[test]
    fn test_cleaning_strips_brackets() {
        let tokens = clean("(hello)");
        assert_eq!(tokens[0].text, "hello");
    }

    #[test]
    fn test_cleaning_keeps_internal_apostrophe() {
        let tokens = clean("don't");
        assert_eq!(tokens[0].text, "don't");
    }

    #[test]
    fn test_cleaning_strips_surrounding_quotes() {
        let tokens = clean("'quoted'");
        assert_eq!(tokens[0].text, "quoted");
    }

    #[test]
    fn test_punctuation_only_token_is_dropped() {
        let tokens = clean("--");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_dropped_token_pause_folds_into_previous() {
        let tokens = clean("word --");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "word");
        assert_eq!(tokens[0].extra_pause_ms, 120);
    }

    #[test]
    fn test_leading_dropped_token_pause_is_lost() {
        // Nothing precedes it, so there is nowhere to fold the pause.
        let tokens = clean("-- word");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].extra_pause_ms, 0);
    }

    #[test]
    fn test_raw_is_preserved_verbatim() {
        let tokens = clean("(hello),");
        assert_eq!(tokens[0].raw, "(hello),");
        assert_eq!(tokens[0].text, "hello,");
    }

    #[test]
    fn test_empty_content_yields_no_tokens() {
        assert!(clean("").is_empty());
        assert!(clean("   \n\t  ").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let tokens = clean("one two three");
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, ["one", "two", "three"]);
    }

    #[test]
    fn test_quoted_sentence_end() {
        // The closing quote is stripped, the period pause survives.
        let tokens = clean("\"true.\"");
        assert_eq!(tokens[0].text, "true.");
        assert_eq!(tokens[0].extra_pause_ms, 0);

        let tokens = clean("true.");
        assert_eq!(tokens[0].extra_pause_ms, 180);
    }

    #[test]
    fn test_custom_pause_table() {
        let pauses = PauseTable {
            period_ms: 500,
            ..PauseTable::default()
        };
        let tokens = tokenize_with("end.", RsvpMode::Clean, &pauses);
        assert_eq!(tokens[0].extra_pause_ms, 500);
    }
}
