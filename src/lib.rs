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

//! # initcheck
//!
//! A static-analysis engine that flags object-construction sites which fail
//! to assign all fields a type author has declared mandatory. Types opt in
//! through a marker attribute; the attribute's `Required` and `Optional`
//! override lists refine which fields count, and an assembly-scoped
//! suppression list disables checking for whole namespaces.
//!
//! The crate deliberately does **not** parse source text or resolve types
//! itself. The host compiler supplies an already-resolved symbol model
//! through the [`SymbolModel`](model::SymbolModel) capability trait, and the
//! engine evaluates exactly one predicate against it: *is every required
//! field of the constructed type assigned in this initializer?*
//!
//! ## Features
//!
//! - **Opt-in marking** - only types carrying the marker attribute are ever checked
//! - **Override lists** - explicit `Required` allow-lists and `Optional` exclusions
//! - **Per-type caching** - requirement sets are resolved once per session, then shared
//! - **Scope suppression** - exact-match namespace exclusion declared once per compilation
//! - **Fault isolation** - a failure while checking one site becomes a diagnostic, never an abort
//! - **Parallel checking** - independent sites can be verified concurrently across threads
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use initcheck::prelude::*;
//!
//! // `compilation` implements SymbolModel over the host's symbol tables.
//! let Some(session) = AnalysisSession::begin(&compilation, &MarkerNames::default()) else {
//!     return; // marker attribute not declared - the whole pass is a no-op
//! };
//!
//! for site in construction_sites {
//!     for diagnostic in session.check_site(&site) {
//!         report(diagnostic);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! `initcheck` is organized into two modules plus the diagnostic surface:
//!
//! - [`model`] - the host-facing data model: type identities, attribute
//!   arguments, field members, construction sites, and the
//!   [`SymbolModel`](model::SymbolModel) trait a host adapter implements
//! - [`analysis`] - the engine: marker resolution, requirement resolution
//!   backed by the session cache, suppression filtering, and per-site
//!   verification
//! - [`diagnostics`] - structured diagnostic records with stable rule
//!   identifiers, consumed by the host's reporting surface
//!
//! ## Error Handling
//!
//! Failures are contained at the smallest possible granularity. Malformed
//! marker arguments are ignored per-argument, malformed suppression
//! declarations are dropped individually, and an unexpected failure while
//! checking one site is converted into an internal-error diagnostic at that
//! site instead of terminating the session. The crate-level [`Error`] only
//! circulates inside the engine's fallible pipeline; hosts observe
//! diagnostics.

#[macro_use]
pub(crate) mod error;

pub mod analysis;
pub mod diagnostics;
pub mod model;
pub mod prelude;

/// The result type used throughout initcheck.
pub type Result<T> = std::result::Result<T, Error>;

pub use analysis::{AnalysisSession, MarkerNames};
pub use diagnostics::{Diagnostic, RuleDescriptor, RuleId, Severity, SourceLocation};
pub use error::Error;
