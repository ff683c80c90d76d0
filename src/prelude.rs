//! # initcheck Prelude
//!
//! This module provides a convenient prelude for the most commonly used
//! types from the initcheck library. Import this module to get quick access
//! to everything a host adapter or test harness typically needs.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all initcheck operations
pub use crate::Error;

/// The result type used throughout initcheck
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The per-compilation checking session
pub use crate::analysis::AnalysisSession;

/// Attribute names a session honors
pub use crate::analysis::MarkerNames;

// ================================================================================================
// Engine Components
// ================================================================================================

/// Resolved marker identity and suppression list
pub use crate::analysis::{MarkerContext, SuppressionScope};

/// Requirement resolution and its session cache
pub use crate::analysis::{RequiredFields, RequirementResolver, RequirementSpec, SessionCache};

/// Construction-site verification
pub use crate::analysis::SiteVerifier;

// ================================================================================================
// Host-Facing Data Model
// ================================================================================================

/// Opaque type identity used as the cache key
pub use crate::model::TypeHandle;

/// Attribute instances and their kind-tagged named arguments
pub use crate::model::{AttributeInstance, AttributeValue, NamedArgument};

/// Field members with storage and mutability flags
pub use crate::model::{FieldMember, FieldModifiers};

/// One object-construction expression ready for verification
pub use crate::model::ConstructionSite;

/// The capability trait host adapters implement
pub use crate::model::SymbolModel;

// ================================================================================================
// Diagnostics
// ================================================================================================

/// Structured findings and their rule metadata
pub use crate::diagnostics::{Diagnostic, RuleDescriptor, RuleId, Severity, SourceLocation};
