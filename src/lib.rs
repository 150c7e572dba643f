// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # asmident
//!
//! Defensive extraction of a .NET assembly's simple name and version from its identity
//! string, without going through runtime APIs that derive identity from a filesystem path.
//!
//! Some runtimes throw from their "get parsed assembly name" call when the assembly was
//! loaded from a directory containing accented or non-Latin characters. The assembly's
//! full name string is still available in those environments, and it carries everything
//! needed:
//!
//! ```text
//! mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089
//! ```
//!
//! `asmident` reads the simple name and the four-part version straight from that string.
//!
//! ## Quick Start
//!
//! ```rust
//! use asmident::prelude::*;
//!
//! let full_name = "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089";
//!
//! let name = extract_name(full_name)?;
//! let version = extract_version(full_name)?;
//!
//! assert_eq!(name, "mscorlib");
//! assert_eq!(version, AssemblyVersion::new(4, 0, 0, 0));
//! # Ok::<(), asmident::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and functions
//! - [`identity`] - The extractors, [`AssemblyVersion`] and [`ComponentIdentity`]
//! - [`Error`] and [`Result`] - Typed failures for every malformed input
//!
//! ## Scope
//!
//! Only the name and version fields are read. Culture and public key token are never
//! parsed, results are never cached, and only the canonical field layout is supported.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result). Nothing is logged, retried or
//! silently defaulted:
//!
//! ```rust
//! use asmident::{extract_version, Error};
//!
//! match extract_version("mscorlib, Version=4.0.0") {
//!     Ok(version) => println!("Version {}", version),
//!     Err(Error::MissingVersionField(_)) => println!("No version field"),
//!     Err(Error::TruncatedVersionField(_)) => println!("Version field not terminated"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Development and Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//!
//! # Fuzzing
//! cargo +nightly fuzz run identity --release
//! ```
#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use asmident::prelude::*;
///
/// let identity = ComponentIdentity::parse("MyLib, Version=1.0.0.0, Culture=neutral, PublicKeyToken=null")?;
/// assert_eq!(identity.simple_name(), "MyLib");
/// # Ok::<(), asmident::Error>(())
/// ```
pub mod prelude;

/// Name and version extraction from assembly identity strings.
pub mod identity;

/// `asmident` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `asmident` Error type
///
/// See [`Error`] for the full taxonomy.
pub use error::{Error, ErrorKind};

pub use identity::{
    extract_all, extract_name, extract_version, AssemblyVersion, ComponentIdentity,
    IdentitySource,
};
