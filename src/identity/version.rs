//! Four-part assembly versions and version-field extraction.
//!
//! # Version Components
//!
//! - **Major**: Significant API changes, potentially breaking compatibility
//! - **Minor**: Feature additions, maintaining backward compatibility
//! - **Build**: Bug fixes, patches, and minor improvements
//! - **Revision**: Emergency fixes and hotfixes
//!
//! Parsing is strict: exactly four components of ASCII digits. Missing components are
//! never defaulted, and signs or whitespace are rejected.

use std::{fmt, str::FromStr};

use crate::{
    identity::scan::{
        find_after, find_byte_from, FIELD_DELIMITER, VERSION_MARKER, VERSION_SEPARATOR,
    },
    Error, Result,
};

/// Four-part version number of an assembly.
///
/// Versions are compared component-wise in order: major, minor, build, revision.
///
/// # Examples
///
/// ```rust
/// use asmident::AssemblyVersion;
///
/// let version = AssemblyVersion::new(1, 2, 3, 4);
/// assert_eq!(version.to_string(), "1.2.3.4");
///
/// let parsed: AssemblyVersion = "2.0.0.0".parse()?;
/// assert!(parsed > version);
/// # Ok::<(), asmident::Error>(())
/// ```
///
/// There is no default version; every value is either parsed or built from explicit
/// components:
///
/// ```compile_fail
/// let version = asmident::AssemblyVersion::default();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssemblyVersion {
    /// Major version component.
    pub major: u32,

    /// Minor version component.
    pub minor: u32,

    /// Build version component.
    pub build: u32,

    /// Revision version component.
    pub revision: u32,
}

impl AssemblyVersion {
    /// Number of dot-separated components in a version string.
    pub const COMPONENTS: usize = 4;

    /// Create a new assembly version with the specified components.
    ///
    /// ```rust
    /// use asmident::AssemblyVersion;
    ///
    /// let version = AssemblyVersion::new(4, 0, 30319, 42000);
    /// assert_eq!(version.build, 30319);
    /// ```
    #[must_use]
    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Parse a bare `major.minor.build.revision` version string.
    ///
    /// Each component is a base-10 integer made of ASCII digits only. Leading zeros are
    /// accepted and do not change the value.
    ///
    /// # Arguments
    ///
    /// * `version_str` - Version text such as `"4.0.0.0"`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVersionNumber`] if the text does not have exactly four
    /// components, or if any component is empty, contains a non-digit character, or does
    /// not fit in a `u32`.
    pub fn parse(version_str: &str) -> Result<Self> {
        let mut components = [0u32; Self::COMPONENTS];
        let mut count = 0;

        for part in version_str.split(VERSION_SEPARATOR) {
            if count == Self::COMPONENTS {
                return Err(version_error!(
                    version_str,
                    "expected {} components, found more",
                    Self::COMPONENTS
                ));
            }
            components[count] = parse_component(version_str, part)?;
            count += 1;
        }

        if count != Self::COMPONENTS {
            return Err(version_error!(
                version_str,
                "expected {} components, found {}",
                Self::COMPONENTS,
                count
            ));
        }

        Ok(Self::new(
            components[0],
            components[1],
            components[2],
            components[3],
        ))
    }
}

/// Parse one version component, rejecting anything but ASCII digits.
///
/// `u32::from_str` on its own would accept a leading `+`, so the digit check runs first.
fn parse_component(version_str: &str, part: &str) -> Result<u32> {
    if part.is_empty() {
        return Err(version_error!(version_str, "empty version component"));
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(version_error!(
            version_str,
            "version component '{}' is not a non-negative integer",
            part
        ));
    }
    part.parse::<u32>().map_err(|_| {
        version_error!(
            version_str,
            "version component '{}' exceeds {}",
            part,
            u32::MAX
        )
    })
}

/// Extract the version from an assembly identity string.
///
/// Locates the first `, Version=` marker, takes the text up to the next comma and parses
/// it as a four-part version. Like [`extract_name`](crate::extract_name), this only reads
/// the string it is given.
///
/// # Arguments
///
/// * `identity` - Full identity string, e.g.
///   `"mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089"`
///
/// # Errors
///
/// - [`Error::MissingVersionField`] if the `, Version=` marker is absent
/// - [`Error::TruncatedVersionField`] if no comma follows the version value
/// - [`Error::InvalidVersionNumber`] if the value is not four non-negative integers
///
/// # Examples
///
/// ```rust
/// use asmident::{extract_version, AssemblyVersion};
///
/// let version = extract_version("mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089")?;
/// assert_eq!(version, AssemblyVersion::new(4, 0, 0, 0));
/// # Ok::<(), asmident::Error>(())
/// ```
pub fn extract_version(identity: &str) -> Result<AssemblyVersion> {
    let start = find_after(identity, VERSION_MARKER)
        .ok_or_else(|| Error::MissingVersionField(identity.to_string()))?;
    let end = find_byte_from(identity, FIELD_DELIMITER, start)
        .ok_or_else(|| Error::TruncatedVersionField(identity.to_string()))?;

    AssemblyVersion::parse(&identity[start..end])
}

impl fmt::Display for AssemblyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

impl FromStr for AssemblyVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<[u32; 4]> for AssemblyVersion {
    fn from(parts: [u32; 4]) -> Self {
        Self::new(parts[0], parts[1], parts[2], parts[3])
    }
}

impl From<AssemblyVersion> for [u32; 4] {
    fn from(version: AssemblyVersion) -> Self {
        [
            version.major,
            version.minor,
            version.build,
            version.revision,
        ]
    }
}
