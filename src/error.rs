use strum::{AsRefStr, EnumCount, EnumIter};
use thiserror::Error;

macro_rules! version_error {
    // Single string version
    ($value:expr, $msg:expr) => {
        crate::Error::InvalidVersionNumber {
            value: $value.to_string(),
            message: $msg.to_string(),
        }
    };

    // Format string with arguments version
    ($value:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidVersionNumber {
            value: $value.to_string(),
            message: format!($fmt, $($arg)*),
        }
    };
}

/// The generic Error type, which covers every failure the identity extractors can report.
///
/// All variants are terminal for the call that produced them. Nothing is retried or
/// defaulted internally, so it is up to the caller whether a malformed identity is fatal
/// to the surrounding operation or can be skipped.
///
/// # Error Categories
///
/// ## Name extraction
/// - [`Error::MalformedIdentity`] - The identity string has no usable name segment
///
/// ## Version extraction
/// - [`Error::MissingVersionField`] - The `, Version=` marker is absent
/// - [`Error::TruncatedVersionField`] - The version field is not terminated by a comma
/// - [`Error::InvalidVersionNumber`] - The version text is not four non-negative integers
///
/// # Examples
///
/// ```rust
/// use asmident::{extract_version, Error};
///
/// match extract_version("mscorlib, Version=4.0.0") {
///     Ok(version) => println!("Version: {}", version),
///     Err(Error::TruncatedVersionField(identity)) => {
///         eprintln!("Version field not terminated in '{}'", identity);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The identity string does not contain a name segment.
    ///
    /// Raised when no comma is present at all, or when the segment before the first comma
    /// is empty or has leading or trailing whitespace. The whole input is carried for
    /// diagnostics.
    #[error("Malformed identity - no name segment in '{0}'")]
    MalformedIdentity(String),

    /// The `, Version=` marker was not found.
    #[error("Missing version field in '{0}'")]
    MissingVersionField(String),

    /// The `, Version=` marker is present but no comma follows the version value.
    ///
    /// Culture and PublicKeyToken fields are expected after the version, so an
    /// unterminated version field means the identity string was cut short.
    #[error("Version field is not terminated in '{0}'")]
    TruncatedVersionField(String),

    /// The version text does not decompose into exactly four non-negative integers.
    ///
    /// # Fields
    ///
    /// * `value` - The version text that failed to parse
    /// * `message` - Which rule the text violated
    #[error("Invalid version number '{value}': {message}")]
    InvalidVersionNumber {
        /// The version text that failed to parse
        value: String,
        /// Description of the violated rule
        message: String,
    },
}

/// Payload-free classification of an [`Error`].
///
/// Useful when a caller only needs to branch on the failure category, for example to
/// decide whether an identity can be skipped.
///
/// ```rust
/// use asmident::{extract_name, ErrorKind};
///
/// let err = extract_name("no-delimiter").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MalformedIdentity);
/// assert_eq!(err.kind().as_ref(), "MalformedIdentity");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, AsRefStr)]
pub enum ErrorKind {
    /// See [`Error::MalformedIdentity`]
    MalformedIdentity,
    /// See [`Error::MissingVersionField`]
    MissingVersionField,
    /// See [`Error::TruncatedVersionField`]
    TruncatedVersionField,
    /// See [`Error::InvalidVersionNumber`]
    InvalidVersionNumber,
}

impl Error {
    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedIdentity(_) => ErrorKind::MalformedIdentity,
            Error::MissingVersionField(_) => ErrorKind::MissingVersionField,
            Error::TruncatedVersionField(_) => ErrorKind::TruncatedVersionField,
            Error::InvalidVersionNumber { .. } => ErrorKind::InvalidVersionNumber,
        }
    }
}
