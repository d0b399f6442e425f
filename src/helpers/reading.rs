//! Word count and reading-time estimation

/// Default reading speed used when the configuration does not override it
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Count maximal whitespace-delimited substrings in the raw body
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimate reading time as a human-readable string (e.g. "3 min read")
///
/// Rounds up, and never reports less than one minute.
pub fn reading_time(text: &str, words_per_minute: usize) -> String {
    let wpm = words_per_minute.max(1);
    let words = word_count(text);
    let minutes = words.div_ceil(wpm).max(1);
    format!("{} min read", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_exact() {
        assert_eq!(word_count("one two three"), 3);
        assert_eq!(word_count("  leading   and \t trailing  \n"), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_reading_time_minimum() {
        assert_eq!(reading_time("", DEFAULT_WORDS_PER_MINUTE), "1 min read");
        assert_eq!(reading_time("just a few words", 200), "1 min read");
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let body = "word ".repeat(201);
        assert_eq!(reading_time(&body, 200), "2 min read");

        let body = "word ".repeat(400);
        assert_eq!(reading_time(&body, 200), "2 min read");

        let body = "word ".repeat(401);
        assert_eq!(reading_time(&body, 200), "3 min read");
    }
}
