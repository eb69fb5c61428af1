//! HTTP request handlers

use super::state::AppState;
use super::view::{ProfileCard, ProfileDetail};
use crate::api::{ErrorEnvelope, ProfileEnvelope};
use crate::export;
use crate::query::{QueryOutcome, QuerySpec, SortKey};
use crate::search::BrowseState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tera::Context;
use tracing::{debug, error};

/// Query parameters of the search page and the CSV export
#[derive(Debug, Default, Deserialize)]
pub struct BrowseParams {
    /// Search text
    pub q: Option<String>,
    pub platform: Option<String>,
    pub category: Option<String>,
    /// Sort key; the configured default applies when absent
    pub sort: Option<String>,
}

impl BrowseParams {
    pub fn into_spec(self, default_sort: &str) -> QuerySpec {
        let mut spec = QuerySpec::text(self.q.unwrap_or_default());
        if let Some(platform) = self.platform.filter(|p| !p.is_empty()) {
            spec = spec.with_platform(platform);
        }
        if let Some(category) = self.category.filter(|c| !c.is_empty()) {
            spec = spec.with_category(category);
        }
        spec.with_sort(SortKey::parse(self.sort.as_deref().unwrap_or(default_sort)))
    }
}

/// Link to the CSV export of the given query
fn export_url(spec: &QuerySpec) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", &spec.text)
        .append_pair("platform", spec.platform.as_str())
        .append_pair("category", spec.category.as_str())
        .append_pair("sort", spec.sort_key.as_str())
        .finish();
    format!("/api/export?{}", query)
}

fn render(state: &AppState, status: StatusCode, template: &str, ctx: &Context) -> Response {
    match state.templates.render(template, ctx) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

fn notice(state: &AppState, status: StatusCode, title: &str, message: &str) -> Response {
    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("title", title);
    ctx.insert("message", message);
    render(state, status, "notice.html", &ctx)
}

fn unavailable(state: &AppState) -> Response {
    notice(
        state,
        StatusCode::SERVICE_UNAVAILABLE,
        "Influencer data unavailable",
        "The influencer list could not be loaded. Please try again later.",
    )
}

/// Search page handler
pub async fn index(State(state): State<AppState>, Query(params): Query<BrowseParams>) -> Response {
    let browse = match state.browse {
        Some(ref browse) => BrowseState::clone(browse),
        None => return unavailable(&state),
    };

    let spec = params.into_spec(&state.settings.ui.default_sort);
    let resolved = state.finder.browse(browse, spec).await;
    let browse = resolved.value;
    let outcome = browse.last_results();

    let cards: Vec<ProfileCard> = outcome
        .results
        .iter()
        .map(|p| ProfileCard::new(p, state.summary_tags()))
        .collect();

    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("query", browse.last_spec());
    ctx.insert("options", &state.filter_options());
    ctx.insert("stats", &outcome.stats);
    ctx.insert("average_engagement", &outcome.stats.average_engagement_display());
    ctx.insert("cards", &cards);
    ctx.insert("export_url", &export_url(browse.last_spec()));
    ctx.insert("origin", &resolved.origin);

    render(&state, StatusCode::OK, "index.html", &ctx)
}

/// Profile detail page handler
pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let browse = match state.browse {
        Some(ref browse) => Arc::clone(browse),
        None => return unavailable(&state),
    };

    let profile = match browse.find(&id) {
        Some(profile) => profile,
        None => {
            debug!("No profile with id {:?}", id);
            return notice(
                &state,
                StatusCode::NOT_FOUND,
                "Influencer not found",
                "No influencer matches this link.",
            );
        }
    };

    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("profile", &ProfileDetail::new(profile));

    render(&state, StatusCode::OK, "detail.html", &ctx)
}

/// `GET /api/influencers`: the whole dataset
pub async fn list_influencers(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(ProfileEnvelope::new(state.catalog.to_vec())),
    )
}

/// `OPTIONS /api/influencers`: CORS preflight
pub async fn influencers_preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

/// `POST /api/search`: filter, sort and aggregate the dataset
pub async fn search(State(state): State<AppState>, Json(spec): Json<QuerySpec>) -> impl IntoResponse {
    let QueryOutcome { results, stats } = state.query_catalog(&spec);
    Json(ProfileEnvelope::new(results).with_stats(stats))
}

/// `GET /api/export`: CSV of the current results, or 204 when there are none
pub async fn export_csv(
    State(state): State<AppState>,
    Query(params): Query<BrowseParams>,
) -> Response {
    let browse = match state.browse {
        Some(ref browse) => Arc::clone(browse),
        None => {
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorEnvelope::new("influencer data unavailable")),
            )
                .into_response()
        }
    };

    let spec = params.into_spec(&state.settings.ui.default_sort);
    let outcome = state.finder.search(browse.all_profiles(), &spec).await.value;

    match export::to_csv(&outcome.results) {
        Some(csv) => {
            let file_name = export::file_name(chrono::Local::now().date_naive());
            (
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", file_name),
                    ),
                ],
                csv,
            )
                .into_response()
        }
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "source": state.origin,
        "loaded": state.browse.is_some(),
    }))
}
