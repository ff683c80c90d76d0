//! Host-facing data model for the checker.
//!
//! Everything the engine knows about the program under analysis arrives
//! through the types in this module. The host compiler resolves syntax and
//! symbols on its side and surfaces them in this neutral shape, so the
//! engine never references a specific toolchain's concrete types; one thin
//! adapter per toolchain implements [`SymbolModel`].
//!
//! # Key Components
//!
//! - [`TypeHandle`] - opaque identity of a declared type, the cache key
//! - [`AttributeInstance`] / [`AttributeValue`] - attributes with their
//!   kind-tagged named arguments
//! - [`FieldMember`] / [`FieldModifiers`] - flat field enumeration with
//!   storage and mutability flags
//! - [`ConstructionSite`] - one object-construction expression as collected
//!   by the host's traversal
//! - [`SymbolModel`] - the capability trait bundling the read-only queries
//!   the engine issues

mod attribute;
mod field;
mod handle;
mod host;
mod site;

pub use attribute::{AttributeInstance, AttributeValue, NamedArgument};
pub use field::{FieldMember, FieldModifiers};
pub use handle::TypeHandle;
pub use host::SymbolModel;
pub use site::ConstructionSite;
