//! Input bytes, BOM stripping, and encoding guardrails.

/// Maximum number of bytes to scan for NUL (0x00).
pub const NUL_SCAN_LIMIT: usize = 8 * 1024;

/// UTF-8 BOM bytes.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Encoding guardrail failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingIssue {
    /// UTF-16 BOM detected.
    Utf16,
    /// UTF-32 BOM detected.
    Utf32,
    /// NUL byte detected within the first 8KB.
    NulByte,
    /// A data record is not valid UTF-8 (1-based record number, header = 0).
    InvalidUtf8 { record: u64 },
}

impl EncodingIssue {
    pub fn describe(self) -> String {
        match self {
            EncodingIssue::Utf16 => "UTF-16 byte order mark".to_string(),
            EncodingIssue::Utf32 => "UTF-32 byte order mark".to_string(),
            EncodingIssue::NulByte => "NUL byte in the first 8KB".to_string(),
            EncodingIssue::InvalidUtf8 { record } => {
                format!("invalid UTF-8 in record {record}")
            }
        }
    }
}

fn wide_bom(input: &[u8]) -> Option<EncodingIssue> {
    match input {
        [0x00, 0x00, 0xFE, 0xFF, ..] | [0xFF, 0xFE, 0x00, 0x00, ..] => Some(EncodingIssue::Utf32),
        [0xFE, 0xFF, ..] | [0xFF, 0xFE, ..] => Some(EncodingIssue::Utf16),
        _ => None,
    }
}

/// Apply encoding guardrails and strip a UTF-8 BOM if present.
///
/// Order:
/// 1) UTF-16/UTF-32 BOM ⇒ refuse
/// 2) UTF-8 BOM ⇒ strip and continue
/// 3) NUL byte in first 8KB ⇒ refuse
#[inline]
pub fn guard_input_bytes(input: &[u8]) -> Result<&[u8], EncodingIssue> {
    if let Some(issue) = wide_bom(input) {
        return Err(issue);
    }
    let stripped = input.strip_prefix(UTF8_BOM.as_slice()).unwrap_or(input);
    if stripped.iter().take(NUL_SCAN_LIMIT).any(|byte| *byte == 0) {
        return Err(EncodingIssue::NulByte);
    }
    Ok(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_bom_is_stripped() {
        let input = [UTF8_BOM.as_slice(), b"LNR"].concat();
        assert_eq!(guard_input_bytes(&input), Ok(b"LNR".as_slice()));
    }

    #[test]
    fn wide_boms_refused() {
        assert_eq!(guard_input_bytes(&[0xFF, 0xFE, b'a', 0]), Err(EncodingIssue::Utf16));
        assert_eq!(
            guard_input_bytes(&[0x00, 0x00, 0xFE, 0xFF, b'a']),
            Err(EncodingIssue::Utf32)
        );
    }

    #[test]
    fn nul_in_first_8k_refused() {
        assert_eq!(guard_input_bytes(b"ab\0cd"), Err(EncodingIssue::NulByte));
    }

    #[test]
    fn nul_after_8k_allowed() {
        let mut input = vec![b'a'; NUL_SCAN_LIMIT + 1];
        input[NUL_SCAN_LIMIT] = 0;
        assert_eq!(guard_input_bytes(&input), Ok(input.as_slice()));
    }
}
