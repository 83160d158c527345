use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Decode the name half of a query entry.
///
/// Mirrors a browser's `decodeURIComponent` except that it never fails: `+` stays a `+`,
/// malformed escapes such as `%zz` are kept as literal text, and decoded bytes that are not
/// valid utf-8 become U+FFFD.
pub fn decode_name(raw: &str) -> Cow<'_, str> {
    if !raw.contains('%') {
        return Cow::Borrowed(raw);
    }

    percent_decode_str(raw).decode_utf8_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_borrowed() {
        assert!(matches!(decode_name("page"), Cow::Borrowed("page")));
    }

    #[test]
    fn decodes_escapes() {
        assert_eq!(decode_name("a%20b"), "a b");
        assert_eq!(decode_name("%C3%A9t%C3%A9"), "été");
    }

    #[test]
    fn plus_is_not_a_space() {
        assert_eq!(decode_name("a+b"), "a+b");
    }

    #[test]
    fn malformed_escapes_pass_through() {
        assert_eq!(decode_name("%zz"), "%zz");
        assert_eq!(decode_name("100%"), "100%");
        assert_eq!(decode_name("%4"), "%4");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(decode_name("%FF"), "\u{FFFD}");
    }
}
