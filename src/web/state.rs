//! Application state shared across handlers

use super::view::FilterOptions;
use crate::config::Settings;
use crate::profiles::ProfileList;
use crate::query::{run_query, QueryOutcome, QuerySpec};
use crate::search::{BrowseState, Finder};
use crate::sources::{Origin, Resolved};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Query executor
    pub finder: Arc<Finder>,
    /// Collection resolved at startup; `None` when every source failed
    pub browse: Option<Arc<BrowseState>>,
    /// Which source served `browse`
    pub origin: Origin,
    /// Dataset served by the `/api/*` endpoints
    pub catalog: ProfileList,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        settings: Settings,
        finder: Finder,
        browse: Option<Resolved<BrowseState>>,
        catalog: ProfileList,
    ) -> anyhow::Result<Self> {
        let templates = Arc::new(super::Templates::new()?);
        let (browse, origin) = match browse {
            Some(resolved) => (Some(Arc::new(resolved.value)), resolved.origin),
            None => (None, Origin::Embedded),
        };

        Ok(Self {
            settings: Arc::new(settings),
            finder: Arc::new(finder),
            browse,
            origin,
            catalog,
            templates,
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }

    pub fn summary_tags(&self) -> usize {
        self.settings.ui.summary_tags
    }

    /// Dropdown options for the loaded collection
    pub fn filter_options(&self) -> FilterOptions {
        match self.browse {
            Some(ref browse) => FilterOptions::from_profiles(browse.all_profiles()),
            None => FilterOptions::from_profiles(&[]),
        }
    }

    /// Run a query over the API dataset
    pub fn query_catalog(&self, spec: &QuerySpec) -> QueryOutcome {
        run_query(&self.catalog, spec)
    }
}
