//! Structured diagnostic records produced by the checker.
//!
//! Diagnostics are the only output the engine hands to the host: each one
//! carries a stable rule identifier, a severity, a fully instantiated
//! message, and the source location the host should anchor the report to.
//! The two rules the crate can emit are closed over [`RuleId`]; hosts that
//! need to register rule metadata up front enumerate them through
//! [`RuleId::descriptors`].

use std::fmt;

use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Stable identifier of a checker rule.
///
/// The textual codes are part of the crate's public contract and never
/// change between releases; suppression files and build pipelines key off
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum RuleId {
    /// A required field was not assigned in a construction site's
    /// initializer list. Emitted once per missing field per site.
    RequiredFieldNotInitialized,
    /// The verification pipeline failed unexpectedly while checking a site.
    /// Carries the original failure's message so a bug in the engine never
    /// silently disables checking.
    InternalError,
}

impl RuleId {
    /// The stable textual code reported to the host.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            RuleId::RequiredFieldNotInitialized => "INIT001",
            RuleId::InternalError => "INIT999",
        }
    }

    /// Host-facing registration data for this rule.
    #[must_use]
    pub fn descriptor(&self) -> RuleDescriptor {
        match self {
            RuleId::RequiredFieldNotInitialized => RuleDescriptor {
                id: *self,
                code: self.code(),
                title: "Required field not initialized",
                message_template: "Required field '{0}' must be initialized",
                severity: Severity::Error,
            },
            RuleId::InternalError => RuleDescriptor {
                id: *self,
                code: self.code(),
                title: "Internal analyzer error",
                message_template: "Internal analyzer error: {0}",
                severity: Severity::Error,
            },
        }
    }

    /// Descriptors for every rule this crate can emit, for up-front host
    /// registration.
    #[must_use]
    pub fn descriptors() -> Vec<RuleDescriptor> {
        RuleId::iter().map(|rule| rule.descriptor()).collect()
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Host-facing registration data for one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDescriptor {
    /// The rule this descriptor belongs to
    pub id: RuleId,
    /// Stable textual code, e.g. `INIT001`
    pub code: &'static str,
    /// Short human-readable title
    pub title: &'static str,
    /// Message template with `{0}` standing for the instantiated argument
    pub message_template: &'static str,
    /// Severity every instance of this rule is reported with
    pub severity: Severity,
}

/// Severity of an emitted diagnostic.
///
/// Both current rules report as [`Severity::Error`]; the distinction exists
/// so hosts with configurable severities have a place to downgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A finding the build should fail on
    Error,
    /// A finding surfaced without failing the build
    Warning,
}

/// A half-open span inside one source file, pointing at the constructed
/// type's name token rather than the whole construction expression.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceLocation {
    /// Path of the source file, as the host names it
    pub file: String,
    /// Byte offset of the first character of the type-name token
    pub start: u32,
    /// Byte offset one past the last character of the type-name token
    pub end: u32,
}

impl SourceLocation {
    /// Creates a location from a file path and a token span.
    #[must_use]
    pub fn new(file: impl Into<String>, start: u32, end: u32) -> Self {
        SourceLocation {
            file: file.into(),
            start,
            end,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.file, self.start, self.end)
    }
}

/// A single finding handed to the host's diagnostic-reporting surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Which rule produced this finding
    pub rule: RuleId,
    /// Reported severity
    pub severity: Severity,
    /// Fully instantiated message text
    pub message: String,
    /// Where the host should anchor the report
    pub location: SourceLocation,
}

impl Diagnostic {
    /// Builds the per-field finding for a required field missing from a
    /// construction site's initializer.
    pub(crate) fn missing_field(field: &str, location: &SourceLocation) -> Self {
        Diagnostic {
            rule: RuleId::RequiredFieldNotInitialized,
            severity: Severity::Error,
            message: format!("Required field '{field}' must be initialized"),
            location: location.clone(),
        }
    }

    /// Builds the internal-error finding wrapping a caught failure's
    /// message text.
    pub(crate) fn internal(message: &str, location: &SourceLocation) -> Self {
        Diagnostic {
            rule: RuleId::InternalError,
            severity: Severity::Error,
            message: format!("Internal analyzer error: {message}"),
            location: location.clone(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.location, self.rule.code(), self.message)
    }
}
