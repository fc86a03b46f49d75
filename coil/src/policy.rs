//! Placement policies: the tunable knobs driving fitness-vs-strictness trade-offs (§6).
//!
//! Policies are a value type captured as a coherent snapshot at the start of a placement
//! pass (§5, §9 re-architecture note): no component re-reads global state mid-pass.

use std::sync::{OnceLock, RwLock};

use serde::{Deserialize, Serialize};

/// A snapshot of the tunable policy knobs consulted by the placement engine (§6 *Policy
/// options*).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policies {
    /// If true, overflow is allowed and flagged via `filling_factor > 1`; if false, the
    /// placement fails with [`crate::error::CoilError::DoesNotFit`].
    pub wind_even_if_not_fit: bool,
    /// If true, the rewind loop is enabled; if false, the first Packer/Placer attempt is final.
    pub try_rewind: bool,
    /// If true, run the compaction post-pass after initial placement (§4.3).
    pub delimit_and_compact: bool,
    /// If true, margins are rendered as insulation layers inside the section; if false,
    /// margins are dead space.
    pub fill_sections_with_margin_tape: bool,
    /// If true, a section's `[low, high]` margin pair is balanced around its available
    /// slack after margin application.
    pub equalize_margins: bool,
    /// Selects the polar-mode geometry path globally.
    pub use_toroidal_cores: bool,
    /// The iteration bound for the rewind loop.
    pub max_rewinds: u32,
}

impl Default for Policies {
    fn default() -> Self {
        Self {
            wind_even_if_not_fit: false,
            try_rewind: true,
            delimit_and_compact: false,
            fill_sections_with_margin_tape: false,
            equalize_margins: false,
            use_toroidal_cores: false,
            max_rewinds: 3,
        }
    }
}

impl Policies {
    /// Starts a [`PoliciesBuilder`] seeded with the default policy values.
    pub fn builder() -> PoliciesBuilder {
        PoliciesBuilder(Self::default())
    }

    /// Returns a coherent snapshot of the process-wide default policies.
    ///
    /// A placement pass should call this once at entry and use the returned value for its
    /// entire run, rather than re-reading [`global::snapshot`] mid-pass.
    pub fn snapshot() -> Self {
        global::snapshot()
    }
}

/// A fluent builder for [`Policies`].
#[derive(Debug, Clone, Copy)]
pub struct PoliciesBuilder(Policies);

impl PoliciesBuilder {
    /// Sets [`Policies::wind_even_if_not_fit`].
    pub fn wind_even_if_not_fit(mut self, value: bool) -> Self {
        self.0.wind_even_if_not_fit = value;
        self
    }

    /// Sets [`Policies::try_rewind`].
    pub fn try_rewind(mut self, value: bool) -> Self {
        self.0.try_rewind = value;
        self
    }

    /// Sets [`Policies::delimit_and_compact`].
    pub fn delimit_and_compact(mut self, value: bool) -> Self {
        self.0.delimit_and_compact = value;
        self
    }

    /// Sets [`Policies::fill_sections_with_margin_tape`].
    pub fn fill_sections_with_margin_tape(mut self, value: bool) -> Self {
        self.0.fill_sections_with_margin_tape = value;
        self
    }

    /// Sets [`Policies::equalize_margins`].
    pub fn equalize_margins(mut self, value: bool) -> Self {
        self.0.equalize_margins = value;
        self
    }

    /// Sets [`Policies::use_toroidal_cores`].
    pub fn use_toroidal_cores(mut self, value: bool) -> Self {
        self.0.use_toroidal_cores = value;
        self
    }

    /// Sets [`Policies::max_rewinds`].
    pub fn max_rewinds(mut self, value: u32) -> Self {
        self.0.max_rewinds = value;
        self
    }

    /// Builds the configured [`Policies`] value.
    pub fn build(self) -> Policies {
        self.0
    }
}

/// The process-wide default policy holder (§9a *Configuration/settings*).
pub mod global {
    use super::*;

    fn holder() -> &'static RwLock<Policies> {
        static HOLDER: OnceLock<RwLock<Policies>> = OnceLock::new();
        HOLDER.get_or_init(|| RwLock::new(Policies::default()))
    }

    /// Returns a copy of the current process-wide default policies.
    pub fn snapshot() -> Policies {
        *holder().read().expect("policy lock poisoned")
    }

    /// Replaces the process-wide default policies.
    ///
    /// Writers must serialize their own access externally; concurrent placement passes hold
    /// their own snapshot taken at entry and are unaffected by a write that lands mid-pass.
    pub fn set(policies: Policies) {
        *holder().write().expect("policy lock poisoned") = policies;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policies_enable_rewind_with_three_attempts() {
        let policies = Policies::default();
        assert!(policies.try_rewind);
        assert_eq!(policies.max_rewinds, 3);
    }

    #[test]
    fn builder_overrides_only_requested_fields() {
        let policies = Policies::builder().wind_even_if_not_fit(true).max_rewinds(5).build();
        assert!(policies.wind_even_if_not_fit);
        assert_eq!(policies.max_rewinds, 5);
        assert!(policies.try_rewind);
    }

    #[test]
    fn global_snapshot_reflects_set() {
        let custom = Policies::builder().use_toroidal_cores(true).build();
        global::set(custom);
        assert!(global::snapshot().use_toroidal_cores);
        // restore the default so other tests observe a clean global.
        global::set(Policies::default());
    }
}
