/// Punctuation removed from both ends of a token before counting
pub const STRIP_CHARS: &[char] = &[
    '(', ')', '^', '%', '#', '@', '&', '!', '?', '-', '.', ',', '[', ']', ':', ';', '"', '\'',
    '/', '\\',
];

/// Normalizes a raw text token into a countable word
///
/// Leading and trailing characters from [`STRIP_CHARS`] are removed and the
/// remainder is lowercased. Inner punctuation is kept, so `"e.g."` becomes
/// `"e.g"` and `"don't"` stays `"don't"`.
///
/// An empty return value means the token carried no word and must not be
/// counted.
///
/// # Examples
///
/// ```
/// use philosophy_walk::text::normalize_word;
///
/// assert_eq!(normalize_word("Hello,"), "hello");
/// assert_eq!(normalize_word("[Brackets]"), "brackets");
/// assert_eq!(normalize_word("--"), "");
/// ```
pub fn normalize_word(token: &str) -> String {
    token.trim_matches(STRIP_CHARS).to_lowercase()
}

/// Splits text fragments into normalized words
///
/// Each fragment is trimmed and skipped when blank, then split on whitespace.
/// Every token is normalized; tokens that normalize to nothing are dropped.
pub fn extract_words<'a, I>(fragments: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .flat_map(str::split_whitespace)
        .map(normalize_word)
        .filter(|word| !word.is_empty())
        .collect()
}
