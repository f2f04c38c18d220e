use unicode_normalization::UnicodeNormalization;

/// Normalizes an untrusted filename into a flat storage key.
///
/// The name is decomposed (NFKD) so accented letters degrade to their ASCII base letter,
/// every remaining non-ASCII character is dropped, spaces become underscores and anything
/// other than ASCII alphanumerics, `_`, `-` and `.` is removed.
///
/// The result may be empty; callers decide whether that is an error.
pub fn sanitize_filename(raw: &str) -> String {
    raw.nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect()
}
