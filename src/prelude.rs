//! # asmident Prelude
//!
//! Convenient re-exports of the types and functions most callers need. Import this module
//! to extract identities without spelling out each path.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all asmident operations
pub use crate::Error;

/// Payload-free error classification
pub use crate::ErrorKind;

/// The result type used throughout asmident
pub use crate::Result;

// ================================================================================================
// Extraction
// ================================================================================================

/// Simple name and version extractors
pub use crate::identity::{extract_name, extract_version};

/// Combined and batch extraction
pub use crate::identity::{extract_all, ComponentIdentity, IdentitySource};

/// Four-part version value
pub use crate::identity::AssemblyVersion;
