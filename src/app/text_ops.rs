//! Pure text transformations and summary figures.
//!
//! Everything in here is a plain function over `&str` so the button handlers
//! in `AppState` stay thin and the semantics are easy to test.

/// Reading speed used for the summary estimate, in minutes per word.
pub const MINUTES_PER_WORD: f64 = 0.008;

pub fn uppercase(text: &str) -> String {
    text.to_uppercase()
}

pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Uppercase the first character of `word`, leaving the rest untouched.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the whole string, then capitalize each space-delimited token.
///
/// Splits on single spaces only. A run of spaces produces empty tokens,
/// which capitalize to themselves, so the original spacing survives.
pub fn title_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trim, lowercase everything, then capitalize only the very first character.
pub fn sentence_case(text: &str) -> String {
    capitalize_first(&text.trim().to_lowercase())
}

/// Collapse every whitespace run to a single space, trimming the ends.
pub fn collapse_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Count words the way the summary reports them.
///
/// A "word" is a segment produced by splitting on a whitespace run that is
/// followed by non-whitespace, so leading whitespace contributes an empty
/// leading segment but trailing whitespace does not add one. Empty input
/// counts as zero.
pub fn word_count(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    let mut count = 1;
    let mut after_whitespace = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            after_whitespace = true;
        } else {
            if after_whitespace {
                count += 1;
            }
            after_whitespace = false;
        }
    }
    count
}

/// Number of characters in the buffer, whitespace included.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Estimated reading time in minutes, over non-empty whitespace-delimited
/// tokens. Deliberately not rounded; the summary shows the full value.
pub fn reading_minutes(text: &str) -> f64 {
    MINUTES_PER_WORD * text.split_whitespace().count() as f64
}

/// The whitespace-delimited tokens of `text`, as owned strings.
///
/// Both the preview and the read-aloud queue are built from this, so the
/// spoken-word index always lines up with the highlighted token.
pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_lowercase() {
        assert_eq!(uppercase("hello World"), "HELLO WORLD");
        assert_eq!(lowercase("Hello WORLD"), "hello world");
    }

    #[test]
    fn test_title_case_basic() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("HELLO WORLD"), "Hello World");
    }

    #[test]
    fn test_title_case_preserves_space_runs() {
        // Runs of spaces become empty tokens and survive the round trip
        assert_eq!(title_case("hello   world"), "Hello   World");
    }

    #[test]
    fn test_title_case_idempotent_on_single_spaced() {
        let once = title_case("the quick brown fox");
        assert_eq!(title_case(&once), once);
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(sentence_case("  hello WORLD  "), "Hello world");
        assert_eq!(sentence_case("a"), "A");
        assert_eq!(sentence_case(""), "");
    }

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("  hello \t world\n"), "hello world");
        assert_eq!(collapse_spaces("a b"), "a b");
    }

    #[test]
    fn test_collapse_spaces_idempotent() {
        let once = collapse_spaces("  a   b\t\tc ");
        assert_eq!(collapse_spaces(&once), once);
    }

    #[test]
    fn test_word_count_empty_is_zero() {
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_word_count_ignores_space_runs() {
        assert_eq!(word_count("hello   world"), 2);
        assert_eq!(word_count("hello world"), 2);
        assert_eq!(word_count("hello"), 1);
    }

    #[test]
    fn test_word_count_leading_whitespace_segment() {
        // Leading whitespace produces an empty leading segment, like the
        // summary has always counted it
        assert_eq!(word_count(" hello"), 2);
        assert_eq!(word_count("hello "), 1);
    }

    #[test]
    fn test_char_count_includes_whitespace() {
        let text = "a  b\tc";
        assert_eq!(char_count(text), text.chars().count());
        assert_eq!(char_count(""), 0);
    }

    #[test]
    fn test_reading_minutes() {
        assert_eq!(reading_minutes(""), 0.0);
        assert_eq!(reading_minutes("one two"), 0.016);
        // Empty tokens from extra whitespace are filtered out
        assert_eq!(reading_minutes("  one   two  "), 0.016);
    }

    #[test]
    fn test_words_tokenization() {
        assert_eq!(words("  a  b\nc "), vec!["a", "b", "c"]);
        assert!(words("   ").is_empty());
    }

    #[test]
    fn test_capitalize_first_unicode() {
        assert_eq!(title_case("über alles"), "Über Alles");
    }
}
