//! Field members and their storage/mutability flags.

use bitflags::bitflags;

bitflags! {
    /// Storage and mutability flags of a field member, as reported by the
    /// host symbol model.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FieldModifiers: u32 {
        /// Defined on the type itself, not per instance
        const STATIC = 0x0001;
        /// Can only be assigned during construction of the declaring type
        const READ_ONLY = 0x0002;
        /// Compile-time constant
        const LITERAL = 0x0004;
    }
}

/// A field member of a type, from the flat member enumeration.
///
/// Names are unique within one type's member list; the host guarantees no
/// two fields share a name for the purposes of this checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMember {
    /// Member name, unique within the declaring type
    pub name: String,
    /// Storage and mutability flags
    pub modifiers: FieldModifiers,
}

impl FieldMember {
    /// Creates a field member.
    pub fn new(name: impl Into<String>, modifiers: FieldModifiers) -> Self {
        FieldMember {
            name: name.into(),
            modifiers,
        }
    }

    /// Creates a plain instance field with no modifiers.
    pub fn instance(name: impl Into<String>) -> Self {
        FieldMember::new(name, FieldModifiers::empty())
    }

    /// True when this field is instance state that remains assignable after
    /// the declaring type is constructed.
    ///
    /// Static members are not per-instance payload, read-only members
    /// cannot be set from an initializer list, and literals are baked in at
    /// compile time; none of them can be a caller's obligation.
    #[must_use]
    pub fn is_assignable_instance_state(&self) -> bool {
        !self.modifiers.intersects(
            FieldModifiers::STATIC | FieldModifiers::READ_ONLY | FieldModifiers::LITERAL,
        )
    }
}
