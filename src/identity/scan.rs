//! Byte-level scanning helpers shared by the name and version extractors.
//!
//! All delimiters searched for here are ASCII, so byte offsets returned by these helpers
//! always fall on UTF-8 character boundaries and can be used to slice the original `&str`.
//! Non-ASCII content anywhere in the identity string is skipped over untouched.

/// Field delimiter between identity components.
pub(crate) const FIELD_DELIMITER: u8 = b',';

/// Literal marker introducing the version field, including the preceding delimiter.
pub(crate) const VERSION_MARKER: &str = ", Version=";

/// Separator between the four version components.
pub(crate) const VERSION_SEPARATOR: char = '.';

/// Finds the first occurrence of `needle` at or after byte offset `from`.
///
/// Returns the absolute byte offset of the match, or `None` if there is none or `from`
/// lies past the end of `haystack`.
pub(crate) fn find_byte_from(haystack: &str, needle: u8, from: usize) -> Option<usize> {
    haystack
        .as_bytes()
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|pos| from + pos)
}

/// Finds the first occurrence of `marker` and returns the byte offset just past it.
pub(crate) fn find_after(haystack: &str, marker: &str) -> Option<usize> {
    haystack.find(marker).map(|pos| pos + marker.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_byte_from_start() {
        assert_eq!(find_byte_from("a,b,c", b',', 0), Some(1));
        assert_eq!(find_byte_from("abc", b',', 0), None);
        assert_eq!(find_byte_from("", b',', 0), None);
    }

    #[test]
    fn test_find_byte_from_offset() {
        assert_eq!(find_byte_from("a,b,c", b',', 1), Some(1));
        assert_eq!(find_byte_from("a,b,c", b',', 2), Some(3));
        assert_eq!(find_byte_from("a,b,c", b',', 4), None);
        assert_eq!(find_byte_from("a,b,c", b',', 5), None);
        assert_eq!(find_byte_from("a,b,c", b',', 99), None);
    }

    #[test]
    fn test_find_byte_from_skips_multibyte() {
        // 'ü' is two bytes, the comma sits at byte offset 3
        let haystack = "aü,b";
        let pos = find_byte_from(haystack, b',', 0).unwrap();
        assert_eq!(pos, 3);
        assert_eq!(&haystack[..pos], "aü");
    }

    #[test]
    fn test_find_after_marker() {
        let identity = "mscorlib, Version=4.0.0.0, Culture=neutral";
        let start = find_after(identity, VERSION_MARKER).unwrap();
        assert_eq!(&identity[start..], "4.0.0.0, Culture=neutral");
        assert_eq!(find_after("mscorlib", VERSION_MARKER), None);
    }

    #[test]
    fn test_find_after_first_occurrence() {
        let identity = "A, Version=1.0.0.0, Version=2.0.0.0,";
        let start = find_after(identity, VERSION_MARKER).unwrap();
        assert_eq!(start, 11);
    }
}
