/// ASCII-trim: strip ASCII spaces and tabs from both ends.
///
/// This is the only whitespace rule in segclean. No Unicode whitespace and no
/// carriage returns are trimmed.
#[inline]
pub fn ascii_trim(input: &str) -> &str {
    input.trim_matches(is_ascii_blank)
}

/// Returns true if the char is an ASCII space or tab.
#[inline]
pub const fn is_ascii_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Returns true if the slice is empty after ASCII-trimming.
#[inline]
pub fn is_ascii_blank_str(input: &str) -> bool {
    ascii_trim(input).is_empty()
}
