//! Combined name and version extraction.
//!
//! [`ComponentIdentity`] bundles the results of [`extract_name`] and [`extract_version`]
//! into one owned value, [`IdentitySource`] exposes both extractors as methods on any type
//! that already holds an unparsed identity string, and [`extract_all`] runs the combined
//! extraction over many identity strings in parallel.

use rayon::prelude::*;

use crate::{
    identity::{extract_name, extract_version, AssemblyVersion},
    Error, Result,
};

/// Simple name and version of a component, extracted from its identity string.
///
/// Culture and public key token are deliberately absent; they are never read from the
/// identity string.
///
/// # Examples
///
/// ```rust
/// use asmident::{AssemblyVersion, ComponentIdentity};
///
/// let identity = ComponentIdentity::parse(
///     "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089",
/// )?;
/// assert_eq!(identity.simple_name(), "mscorlib");
/// assert_eq!(identity.version, AssemblyVersion::new(4, 0, 0, 0));
/// # Ok::<(), asmident::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentIdentity {
    /// Simple name (e.g. "mscorlib", "System.Core").
    pub name: String,

    /// Four-part version number.
    pub version: AssemblyVersion,
}

impl ComponentIdentity {
    /// Create a component identity from already known parts.
    pub fn new(name: impl Into<String>, version: AssemblyVersion) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    /// Extract name and version from a full identity string.
    ///
    /// The name is extracted first, so an input lacking both a comma and a version marker
    /// reports [`Error::MalformedIdentity`].
    ///
    /// # Errors
    ///
    /// Returns the first error produced by [`extract_name`] or [`extract_version`].
    pub fn parse(identity: &str) -> Result<Self> {
        let name = extract_name(identity)?;
        let version = extract_version(identity)?;

        Ok(Self::new(name, version))
    }

    /// Get the simple name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        &self.name
    }
}

impl std::str::FromStr for ComponentIdentity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ComponentIdentity {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

/// A value that can hand out its own unparsed identity string.
///
/// Implement this for whatever type the loading layer uses to represent a loaded module.
/// The provided methods then extract name and version from that string alone, without
/// consulting the module's location on disk.
///
/// # Examples
///
/// ```rust
/// use asmident::{AssemblyVersion, IdentitySource};
///
/// struct LoadedModule {
///     full_name: String,
/// }
///
/// impl IdentitySource for LoadedModule {
///     fn full_name(&self) -> &str {
///         &self.full_name
///     }
/// }
///
/// let module = LoadedModule {
///     full_name: "Mono.Cecil, Version=0.11.5.0, Culture=neutral, PublicKeyToken=50cebf1cceb9d05e".into(),
/// };
/// assert_eq!(module.safe_name()?, "Mono.Cecil");
/// assert_eq!(module.safe_version()?, AssemblyVersion::new(0, 11, 5, 0));
/// # Ok::<(), asmident::Error>(())
/// ```
pub trait IdentitySource {
    /// The full, unparsed identity string.
    fn full_name(&self) -> &str;

    /// Simple name, see [`extract_name`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedIdentity`] if the identity has no name segment.
    fn safe_name(&self) -> Result<&str> {
        extract_name(self.full_name())
    }

    /// Version, see [`extract_version`].
    ///
    /// # Errors
    ///
    /// Returns the version extraction error for a missing, truncated or invalid field.
    fn safe_version(&self) -> Result<AssemblyVersion> {
        extract_version(self.full_name())
    }

    /// Name and version together, see [`ComponentIdentity::parse`].
    ///
    /// # Errors
    ///
    /// Returns the first extraction error encountered.
    fn safe_identity(&self) -> Result<ComponentIdentity> {
        ComponentIdentity::parse(self.full_name())
    }
}

impl IdentitySource for str {
    fn full_name(&self) -> &str {
        self
    }
}

impl IdentitySource for String {
    fn full_name(&self) -> &str {
        self.as_str()
    }
}

/// Extract name and version from many identity strings in parallel.
///
/// The output has one entry per input, in input order. Each entry succeeds or fails on
/// its own; one malformed identity does not affect the others.
///
/// ```rust
/// use asmident::extract_all;
///
/// let results = extract_all(&[
///     "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089",
///     "broken",
/// ]);
/// assert_eq!(results[0].as_ref().unwrap().name, "mscorlib");
/// assert!(results[1].is_err());
/// ```
pub fn extract_all<S>(identities: &[S]) -> Vec<Result<ComponentIdentity>>
where
    S: AsRef<str> + Sync,
{
    identities
        .par_iter()
        .map(|identity| ComponentIdentity::parse(identity.as_ref()))
        .collect()
}
