/// The fixed alphabet for generated short codes.
///
/// 64 distinct URL-safe characters: upper and lower ASCII letters, digits,
/// underscore, and hyphen. Codes built from this set need no percent
/// encoding in a URL path.
pub const CODE_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Returns `true` if `c` is a member of [`CODE_ALPHABET`].
pub fn is_code_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
