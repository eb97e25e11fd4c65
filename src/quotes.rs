//! The fixed mapping from Unicode quotation marks to ASCII quotes.

/// Map a Unicode quotation mark to its ASCII equivalent.
///
/// Covers the left, right, low-9, and high-reversed-9 variants of both the
/// single and double quotation marks. Characters outside the table map to
/// `None`, including `'` and `"` themselves.
///
/// # Examples
///
/// ```rust
/// # use quotefix::quotes::quote_to_ascii;
/// assert_eq!(Some('"'), quote_to_ascii('\u{201c}'));
/// assert_eq!(None, quote_to_ascii('a'));
/// ```
pub fn quote_to_ascii(c: char) -> Option<char> {
    match c {
        '\u{2018}' | '\u{2019}' | '\u{201a}' | '\u{201b}' => Some('\''),
        '\u{201c}' | '\u{201d}' | '\u{201e}' | '\u{201f}' => Some('"'),
        _ => None,
    }
}
