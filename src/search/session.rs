//! Browse state: the profile list plus the last applied query

use crate::profiles::{Profile, ProfileList};
use crate::query::{run_query, QueryOutcome, QuerySpec};
use tracing::debug;

/// Everything the UI needs to render the current view.
///
/// Transitions consume the state and return the next one; there is no
/// shared mutable controller.
#[derive(Debug, Clone)]
pub struct BrowseState {
    all_profiles: ProfileList,
    last_spec: QuerySpec,
    last_results: QueryOutcome,
    /// Generation of the most recently submitted query
    issued: u64,
    /// Generation of the query whose outcome is shown
    applied: u64,
}

/// Ticket for a submitted query whose outcome has not been applied yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    generation: u64,
    spec: QuerySpec,
}

impl PendingQuery {
    pub fn spec(&self) -> &QuerySpec {
        &self.spec
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl BrowseState {
    /// Initial state showing the whole collection in declaration order
    pub fn loaded(all_profiles: ProfileList) -> Self {
        let last_spec = QuerySpec::default();
        let last_results = run_query(&all_profiles, &last_spec);

        Self {
            all_profiles,
            last_spec,
            last_results,
            issued: 0,
            applied: 0,
        }
    }

    pub fn all_profiles(&self) -> &ProfileList {
        &self.all_profiles
    }

    pub fn last_spec(&self) -> &QuerySpec {
        &self.last_spec
    }

    pub fn last_results(&self) -> &QueryOutcome {
        &self.last_results
    }

    /// Look up a profile by id in the full collection
    pub fn find(&self, id: &str) -> Option<&Profile> {
        self.all_profiles.iter().find(|p| p.id == id)
    }

    /// Register a new query; any query submitted earlier becomes stale
    pub fn submit(mut self, spec: QuerySpec) -> (Self, PendingQuery) {
        self.issued += 1;
        let pending = PendingQuery {
            generation: self.issued,
            spec,
        };
        (self, pending)
    }

    /// Apply the outcome of a submitted query.
    ///
    /// Outcomes of superseded queries are discarded so the view always
    /// reflects the latest submission.
    pub fn complete(mut self, pending: PendingQuery, outcome: QueryOutcome) -> Self {
        if pending.generation != self.issued {
            debug!(
                "Discarding outcome of superseded query {} (latest is {})",
                pending.generation, self.issued
            );
            return self;
        }

        self.last_spec = pending.spec;
        self.last_results = outcome;
        self.applied = pending.generation;
        self
    }

    /// Check if a submitted query is still waiting for its outcome
    pub fn is_pending(&self) -> bool {
        self.applied != self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::catalog;
    use crate::query::SortKey;

    fn state() -> BrowseState {
        BrowseState::loaded(catalog::parse(catalog::EMBEDDED_DATASET).unwrap())
    }

    #[test]
    fn test_loaded_shows_everything() {
        let state = state();
        assert_eq!(state.last_results().stats.count, 20);
        assert!(state.last_spec().is_unfiltered());
        assert!(!state.is_pending());
    }

    #[test]
    fn test_submit_then_complete() {
        let (state, pending) = state().submit(QuerySpec::text("coding"));
        assert!(state.is_pending());

        let outcome = run_query(state.all_profiles(), pending.spec());
        let state = state.complete(pending, outcome);

        assert!(!state.is_pending());
        assert_eq!(state.last_spec().text, "coding");
        assert_eq!(state.last_results().ids(), ["12", "20"]);
    }

    #[test]
    fn test_superseded_outcome_is_discarded() {
        let (state, first) = state().submit(QuerySpec::text("coding"));
        let (state, second) = state.submit(QuerySpec::default().with_sort(SortKey::Followers));

        let first_outcome = run_query(state.all_profiles(), first.spec());
        let second_outcome = run_query(state.all_profiles(), second.spec());

        // The later query finishes first; the earlier one must not overwrite it
        let state = state.complete(second, second_outcome);
        let state = state.complete(first, first_outcome);

        assert_eq!(state.last_spec().sort_key, SortKey::Followers);
        assert_eq!(state.last_results().stats.count, 20);
        assert_eq!(state.last_results().ids()[0], "1");
    }

    #[test]
    fn test_find_by_id() {
        let state = state();
        assert_eq!(state.find("7").map(|p| p.handle.as_str()), Some("@earlylearningmom"));
        assert!(state.find("404").is_none());
    }
}
