//! Folding Unicode quotation marks in text down to their ASCII equivalents.

use crate::quotes::quote_to_ascii;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

/// Replace every Unicode quotation mark in the text with its ASCII equivalent.
///
/// All other characters are passed through unchanged, so the line structure
/// and non-quote content of the text are preserved exactly. If the text
/// contains no quotation mark from the table, it is returned borrowed.
///
/// # Examples
///
/// ```rust
/// # use quotefix::text::ascii_quotes;
/// assert_eq!("He said \"Hello'\"", ascii_quotes("He said \u{201c}Hello\u{2019}\u{201d}"));
/// assert_eq!("plain text", ascii_quotes("plain text"));
/// ```
pub fn ascii_quotes(text: &str) -> Cow<str> {
    lazy_static! {
        // The eight source code points are the contiguous block U+2018..U+201F.
        static ref RE: Regex = Regex::new("[\u{2018}-\u{201f}]").unwrap();
    }
    if !RE.is_match(text) {
        return text.into();
    }
    text.chars()
        .map(|c| quote_to_ascii(c).unwrap_or(c))
        .collect::<String>()
        .into()
}
