//! The analysis-session façade.

use rayon::prelude::*;

use crate::analysis::{
    MarkerContext, MarkerNames, RequirementResolver, SessionCache, SiteVerifier, SuppressionScope,
};
use crate::diagnostics::Diagnostic;
use crate::model::{ConstructionSite, SymbolModel};
use crate::Result;

/// One checking session over a single compilation.
///
/// Construction ([`AnalysisSession::begin`]) is the single-threaded setup
/// phase: it resolves the marker attribute and collects the suppression
/// list. Afterwards the session is read-mostly - [`check_site`] takes
/// `&self` and may be invoked concurrently from many threads, sharing only
/// the internal cache, which tolerates racing inserts.
///
/// Sessions own their cache; dropping the session (or calling [`end`])
/// clears it, so analyzer instances reused by the host across compilations
/// never leak stale type identities from one session into the next.
///
/// [`check_site`]: AnalysisSession::check_site
/// [`end`]: AnalysisSession::end
pub struct AnalysisSession<'a> {
    model: &'a dyn SymbolModel,
    marker: MarkerContext,
    cache: SessionCache,
}

impl<'a> AnalysisSession<'a> {
    /// Begins a session over `model`.
    ///
    /// Returns `None` when the compilation does not declare or reference
    /// the marker attribute type - the whole pass is a no-op then, and
    /// callers skip registering any per-site callbacks.
    #[must_use]
    pub fn begin(model: &'a dyn SymbolModel, names: &MarkerNames) -> Option<Self> {
        let marker = MarkerContext::resolve(model, names)?;
        Some(AnalysisSession {
            model,
            marker,
            cache: SessionCache::new(),
        })
    }

    /// Checks one construction site.
    ///
    /// Never fails: an unexpected error anywhere in the pipeline is
    /// converted into a single internal-error diagnostic at the site's
    /// location, so one bad site cannot abort the pass or silently disable
    /// checking.
    #[must_use]
    pub fn check_site(&self, site: &ConstructionSite) -> Vec<Diagnostic> {
        match self.try_check_site(site) {
            Ok(diagnostics) => diagnostics,
            Err(error) => vec![Diagnostic::internal(&error.to_string(), &site.location)],
        }
    }

    /// The fallible pipeline behind [`Self::check_site`].
    fn try_check_site(&self, site: &ConstructionSite) -> Result<Vec<Diagnostic>> {
        if site.type_handle.is_null() {
            return Err(internal_error!(
                "construction site at {} carries a null type identity",
                site.location
            ));
        }

        let Some(required) =
            RequirementResolver::resolve(self.model, site.type_handle, &self.marker, &self.cache)?
        else {
            return Ok(Vec::new());
        };

        // An empty set means "marked, nothing to verify" and skips the
        // suppression lookup entirely.
        if required.is_empty() {
            return Ok(Vec::new());
        }

        if self.marker.suppressions().is_suppressed(&site.scope_path) {
            return Ok(Vec::new());
        }

        Ok(SiteVerifier::verify(site, &required))
    }

    /// Checks a batch of sites in parallel and collects every diagnostic.
    ///
    /// Per-site diagnostic order is preserved (declaration order of the
    /// required set); ordering *across* sites follows completion order.
    /// Hosts needing a global order sort the result by location.
    #[must_use]
    pub fn check_all(&self, sites: &[ConstructionSite]) -> Vec<Diagnostic> {
        let sink: boxcar::Vec<Vec<Diagnostic>> = boxcar::Vec::new();
        sites.par_iter().for_each(|site| {
            let diagnostics = self.check_site(site);
            if !diagnostics.is_empty() {
                sink.push(diagnostics);
            }
        });

        sink.into_iter().flatten().collect()
    }

    /// The suppression list in effect for this session.
    #[must_use]
    pub fn suppressions(&self) -> &SuppressionScope {
        self.marker.suppressions()
    }

    /// Number of distinct types whose requirements have been resolved so
    /// far in this session.
    #[must_use]
    pub fn types_inspected(&self) -> usize {
        self.cache.len()
    }

    /// Ends the session, dropping every cached resolution.
    ///
    /// Equivalent to dropping the session; provided so hosts with an
    /// explicit end-of-analysis callback have something to call.
    pub fn end(self) {}
}

impl Drop for AnalysisSession<'_> {
    fn drop(&mut self) {
        // Best-effort teardown; safe even while late checks complete.
        self.cache.clear();
    }
}
