//! Line tokenizing and field normalization.

use creg_model::FIELD_COUNT;
use unicode_normalization::UnicodeNormalization;

/// The quote character honored by the tokenizer.
pub const QUOTE: char = '"';

/// Fold a raw line to 7-bit ASCII.
///
/// The line is first decomposed to NFD so that accented characters leave
/// their base letter behind, then every remaining non-ASCII character is
/// dropped.
pub fn fold_ascii(line: &str) -> String {
    line.nfd().filter(char::is_ascii).collect()
}

/// Split one folded line into its raw field tokens.
///
/// The delimiter splits except inside a quoted span, that is when an odd
/// number of quote characters have been seen so far. Quote characters stay
/// in the tokens; unquoting is the normalizer's job.
pub fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        if ch == QUOTE {
            in_quotes = !in_quotes;
            current.push(ch);
        } else if ch == delimiter && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);
    fields
}

/// Normalize a raw text token.
///
/// A token that both starts and ends with a quote loses exactly one leading
/// and one trailing quote; interior quotes survive. Anything else, the empty
/// token included, is kept verbatim. A lone quote character is too short to
/// be a quoted span and stays as-is.
pub fn normalize_text(token: &str) -> String {
    if token.len() >= 2 && token.starts_with(QUOTE) && token.ends_with(QUOTE) {
        token[1..token.len() - 1].to_string()
    } else {
        token.to_string()
    }
}

/// Parse a credit token as a base-10 signed integer.
///
/// Quote and delimiter characters are stripped first; nothing else is. An
/// empty result defaults to 0. `None` means the token is not a number,
/// which callers treat as fatal.
pub fn parse_credit(token: &str, delimiter: char) -> Option<i32> {
    let stripped: String = token
        .chars()
        .filter(|&ch| ch != QUOTE && ch != delimiter)
        .collect();
    if stripped.is_empty() {
        return Some(0);
    }
    stripped.parse::<i32>().ok()
}
