//! Text handling for word statistics
//!
//! Turns the visible text of an article into comparable words.

mod normalize;

pub use normalize::{extract_words, normalize_word, STRIP_CHARS};
