//! Safe extraction of simple name and version from assembly identity strings.
//!
//! An assembly identity string (the "full name" of a loaded assembly) has the canonical
//! layout:
//!
//! ```text
//! <Name>, Version=<Major>.<Minor>.<Build>.<Revision>, Culture=<culture>, PublicKeyToken=<token>
//! ```
//!
//! Runtime APIs that hand back a pre-parsed name object can fail when the assembly was
//! loaded from a path containing certain non-ASCII characters. The functions here work
//! purely on the identity string the caller already holds and never look at a path.
//!
//! # Module Structure
//!
//! - `name` - [`extract_name`], the segment before the first comma
//! - `version` - [`extract_version`] and the [`AssemblyVersion`] value type
//! - `component` - [`ComponentIdentity`], [`IdentitySource`] and [`extract_all`]
//! - `scan` - delimiter and marker searches shared by the extractors
//!
//! # Usage Examples
//!
//! ```rust
//! use asmident::identity::{extract_name, extract_version, AssemblyVersion};
//!
//! let full_name = "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089";
//!
//! assert_eq!(extract_name(full_name)?, "mscorlib");
//! assert_eq!(extract_version(full_name)?, AssemblyVersion::new(4, 0, 0, 0));
//! # Ok::<(), asmident::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! Every function in this module is pure and every type is [`Send`] and [`Sync`]. Calls
//! on independent inputs need no coordination.

pub use component::{extract_all, ComponentIdentity, IdentitySource};
pub use name::extract_name;
pub use version::{extract_version, AssemblyVersion};

mod component;
mod name;
mod scan;
mod version;
