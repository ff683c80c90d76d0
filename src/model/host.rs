//! Capability interface onto the host compiler's resolved symbols.

use crate::model::{AttributeInstance, FieldMember, TypeHandle};
use crate::Result;

/// Read-only queries the engine issues against the host's symbol model.
///
/// One adapter per hosting toolchain implements this trait over its own
/// symbol tables; the engine never sees a compiler's concrete types. All
/// methods are pure reads over in-memory data - no I/O, no mutation of host
/// state.
///
/// Implementations must be `Send + Sync`: the per-site check callback may be
/// invoked concurrently from many threads within one session, and every call
/// reaches back through this trait.
///
/// # Errors
///
/// The enumeration queries return [`crate::Error::Model`] when the
/// underlying machinery cannot answer, e.g. a handle that no longer
/// resolves. Such failures are contained per construction site by the
/// session boundary and reported as internal-error diagnostics.
pub trait SymbolModel: Send + Sync {
    /// Resolves a type by its fully-qualified name, `None` when the
    /// compilation neither declares nor references it.
    fn type_by_name(&self, fully_qualified: &str) -> Option<TypeHandle>;

    /// Attributes declared directly on `ty`, in declaration order.
    ///
    /// # Errors
    /// Fails when `ty` cannot be inspected.
    fn type_attributes(&self, ty: TypeHandle) -> Result<Vec<AttributeInstance>>;

    /// Flat enumeration of `ty`'s field members, in declaration order.
    /// Members that are not fields are not included.
    ///
    /// # Errors
    /// Fails when `ty` cannot be inspected.
    fn type_fields(&self, ty: TypeHandle) -> Result<Vec<FieldMember>>;

    /// Assembly-level (compilation-scoped) attribute instances whose type is
    /// `attribute_type`, in declaration order.
    ///
    /// # Errors
    /// Fails when the compilation's assembly attributes cannot be read.
    fn assembly_attributes(&self, attribute_type: TypeHandle) -> Result<Vec<AttributeInstance>>;
}
