//! Simple-name extraction.

use crate::{
    identity::scan::{find_byte_from, FIELD_DELIMITER},
    Error, Result,
};

/// Extract the simple name from an assembly identity string.
///
/// The simple name is everything before the first comma, borrowed from the input. It must
/// be non-empty and carry no leading or trailing whitespace. The identity is never resolved
/// through a loaded module or a filesystem path, so host path encodings cannot influence
/// the result.
///
/// # Arguments
///
/// * `identity` - Full identity string, e.g.
///   `"mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089"`
///
/// # Errors
///
/// Returns [`Error::MalformedIdentity`] if the string contains no comma, or if the segment
/// before the first comma is empty or has leading or trailing whitespace.
///
/// # Examples
///
/// ```rust
/// use asmident::extract_name;
///
/// let name = extract_name("mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089")?;
/// assert_eq!(name, "mscorlib");
///
/// assert!(extract_name("mscorlib").is_err());
/// # Ok::<(), asmident::Error>(())
/// ```
pub fn extract_name(identity: &str) -> Result<&str> {
    let end = find_byte_from(identity, FIELD_DELIMITER, 0)
        .ok_or_else(|| Error::MalformedIdentity(identity.to_string()))?;

    let name = &identity[..end];
    if name.is_empty() || name.trim() != name {
        return Err(Error::MalformedIdentity(identity.to_string()));
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_name_mscorlib() {
        let name = extract_name(
            "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089",
        )
        .unwrap();
        assert_eq!(name, "mscorlib");
    }

    #[test]
    fn test_extract_name_dotted() {
        let name =
            extract_name("System.Core, Version=3.5.0.0, Culture=neutral, PublicKeyToken=null")
                .unwrap();
        assert_eq!(name, "System.Core");
    }

    #[test]
    fn test_extract_name_only_needs_comma() {
        // Only the delimiter is required, the remaining fields are not inspected
        assert_eq!(extract_name("MyLib,").unwrap(), "MyLib");
        assert_eq!(extract_name("MyLib, garbage").unwrap(), "MyLib");
    }

    #[test]
    fn test_extract_name_no_comma() {
        let err = extract_name("mscorlib").unwrap_err();
        assert_eq!(err, Error::MalformedIdentity("mscorlib".to_string()));
    }

    #[test]
    fn test_extract_name_empty_input() {
        assert!(matches!(
            extract_name(""),
            Err(Error::MalformedIdentity(_))
        ));
    }

    #[test]
    fn test_extract_name_empty_name() {
        assert!(matches!(
            extract_name(", Version=1.0.0.0, Culture=neutral"),
            Err(Error::MalformedIdentity(_))
        ));
    }

    #[test]
    fn test_extract_name_non_ascii() {
        let name =
            extract_name("Ünïcödé.Библиотека, Version=1.0.0.0, Culture=neutral, PublicKeyToken=null")
                .unwrap();
        assert_eq!(name, "Ünïcödé.Библиотека");
    }

    #[test]
    fn test_extract_name_rejects_surrounding_whitespace() {
        for identity in [
            " Padded , Version=1.0.0.0, Culture=neutral",
            " Leading, Version=1.0.0.0, Culture=neutral",
            "Trailing\t, Version=1.0.0.0, Culture=neutral",
        ] {
            assert_eq!(
                extract_name(identity),
                Err(Error::MalformedIdentity(identity.to_string())),
                "identity {identity:?}"
            );
        }
    }

    #[test]
    fn test_extract_name_rejects_whitespace_only() {
        assert!(matches!(
            extract_name("   , Version=1.0.0.0, Culture=neutral"),
            Err(Error::MalformedIdentity(_))
        ));
    }

    #[test]
    fn test_extract_name_inner_whitespace_kept() {
        assert_eq!(
            extract_name("My Library, Version=1.0.0.0, Culture=neutral").unwrap(),
            "My Library"
        );
    }
}
