use std::fmt;

/// Opaque identity of a declared type, as assigned by the host symbol model.
///
/// Equality and hashing follow the underlying declaration identity, not
/// structural shape: two handles compare equal exactly when the host
/// resolved them to the same type declaration. That property is what makes
/// the handle usable as the session cache key.
///
/// The raw value is meaningless to the engine; hosts typically derive it
/// from their own symbol table indices or metadata tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeHandle(pub u32);

impl TypeHandle {
    /// Creates a handle from the host's raw identity value.
    #[must_use]
    pub fn new(value: u32) -> Self {
        TypeHandle(value)
    }

    /// Returns the raw identity value.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// True for the reserved null identity (value 0), which no resolved
    /// declaration ever carries.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for TypeHandle {
    fn from(value: u32) -> Self {
        TypeHandle(value)
    }
}

impl From<TypeHandle> for u32 {
    fn from(handle: TypeHandle) -> Self {
        handle.0
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type:{:#010x}", self.0)
    }
}
