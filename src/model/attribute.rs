//! Attribute instances and their named arguments, as resolved by the host.
//!
//! The host compiler evaluates attribute arguments to constants before the
//! checker ever runs; only the value shapes the checker consumes are
//! modeled here. Anything the host cannot express in these shapes should be
//! surfaced as [`AttributeValue::Null`] so the engine's per-argument
//! fallback applies.

use crate::model::TypeHandle;

/// A kind-tagged constant value of an attribute named argument.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Boolean constant
    Bool(bool),
    /// Integer constant, widened by the host
    Int(i64),
    /// String constant
    String(String),
    /// Array of constants
    Array(Vec<AttributeValue>),
    /// Explicit null, or a value the host could not express
    Null,
}

impl AttributeValue {
    /// The string payload when this value is a string constant.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// The element slice when this value is of array kind.
    #[must_use]
    pub fn as_array(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::Array(items) => Some(items),
            _ => None,
        }
    }
}

/// A named argument (field or property assignment) on an attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedArgument {
    /// Name of the assigned field or property
    pub name: String,
    /// Resolved constant value
    pub value: AttributeValue,
}

impl NamedArgument {
    /// Creates a named argument.
    pub fn new(name: impl Into<String>, value: AttributeValue) -> Self {
        NamedArgument {
            name: name.into(),
            value,
        }
    }
}

/// One attribute applied to a type declaration or to the compilation unit.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeInstance {
    /// Identity of the attribute's own type
    pub attribute_type: TypeHandle,
    /// Named arguments in source order
    pub named_args: Vec<NamedArgument>,
}

impl AttributeInstance {
    /// Creates an attribute instance.
    #[must_use]
    pub fn new(attribute_type: TypeHandle, named_args: Vec<NamedArgument>) -> Self {
        AttributeInstance {
            attribute_type,
            named_args,
        }
    }

    /// Looks up a named argument's value by exact name, first occurrence
    /// winning when the host surfaces duplicates.
    #[must_use]
    pub fn named_arg(&self, name: &str) -> Option<&AttributeValue> {
        self.named_args
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
    }
}
