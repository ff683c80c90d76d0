//! The checking engine: marker resolution, requirement resolution, scope
//! suppression, and construction-site verification.
//!
//! # Architecture
//!
//! One [`AnalysisSession`] covers one compilation. Setup runs
//! single-threaded, everything after it may run in parallel:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  AnalysisSession::begin (single-threaded setup)                  │
//! │    resolve marker attribute type ──► absent? whole pass no-op    │
//! │    collect assembly-level suppression scopes                     │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  check_site (callable concurrently, one call per site)           │
//! │    RequirementResolver ──► SessionCache (hit: pure read)         │
//! │        │ None / empty set ──► skip                               │
//! │        ▼                                                         │
//! │    SuppressionScope exact match ──► suppressed? skip             │
//! │        ▼                                                         │
//! │    SiteVerifier diff ──► one Diagnostic per missing field        │
//! │                                                                  │
//! │    any unexpected failure ──► single internal-error Diagnostic   │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  end / drop ──► SessionCache::clear                              │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Components
//!
//! - [`MarkerNames`] / [`MarkerContext`] - which attributes the session
//!   honors, and their resolved identities
//! - [`RequirementResolver`] - computes each marked type's required-field
//!   set, once per type per session
//! - [`SessionCache`] - concurrent insert-if-absent cache backing the
//!   resolver
//! - [`SuppressionScope`] - exact-match scope exclusion list
//! - [`SiteVerifier`] - diffs initializer assignments against the required
//!   set
//! - [`AnalysisSession`] - the façade tying the pieces together

mod cache;
mod marker;
mod resolver;
mod session;
mod suppression;
mod verifier;

pub use cache::SessionCache;
pub use marker::{MarkerContext, MarkerNames};
pub use resolver::{RequiredFields, RequirementResolver, RequirementSpec};
pub use session::AnalysisSession;
pub use suppression::SuppressionScope;
pub use verifier::SiteVerifier;
