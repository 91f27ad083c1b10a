//! HTTP bridge for typocrit - the front desk for typography advice
//!
//! This module serves the analysis engine over a small web API. Think of it
//! as the reception counter where layout tools drop off their type specimens
//! and pick up a neatly ranked list of observations a moment later. The
//! counter itself holds no opinions: every judgment comes from the engine,
//! and the rules on the shelf behind the desk never change mid-conversation.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::task;

use typocrit_core::element::{FontDescriptor, ProjectContext, TypographyElement};
use typocrit_core::hierarchy::evaluate_hierarchy;
use typocrit_core::pairing::analyze_pairing;
use typocrit_core::readability::assess_readability;
use typocrit_core::rules::RuleSet;
use typocrit_core::synthesis::{analyze_elements, AgentMode};

#[derive(Clone)]
struct AppState {
    rules: Arc<RuleSet>,
}

/// A request for the combined analysis.
///
/// Elements arrive exactly as a layout tool would export them; the optional
/// mode picks the feedback voice and the optional context tags the request
/// for downstream bookkeeping. Neither of the optional fields can move a
/// score by a single decimal.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AnalyzeRequest {
    elements: Vec<TypographyElement>,
    mode: Option<AgentMode>,
    context: Option<ProjectContext>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PairingRequest {
    fonts: Vec<FontDescriptor>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ElementsRequest {
    #[serde(alias = "text_elements")]
    elements: Vec<TypographyElement>,
}

/// Bind the address and start answering analysis requests.
pub async fn serve(bind: &str, rules: Arc<RuleSet>) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding HTTP server to {bind}"))?;

    tracing::info!(%bind, "typocrit bridge listening");

    axum::serve(listener, router(rules))
        .await
        .context("serving HTTP")?;
    Ok(())
}

/// The routing table: one route per engine tool, plus a wellness check.
///
/// The rule tables ride along as shared read-only state, built once before
/// the first request and swapped whole or not at all.
pub fn router(rules: Arc<RuleSet>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze_handler))
        .route("/pairing", post(pairing_handler))
        .route("/readability", post(readability_handler))
        .route("/hierarchy", post(hierarchy_handler))
        // Tool-name aliases kept stable for automation clients.
        .route("/analyze_elements", post(analyze_handler))
        .route("/font_pairing_analysis", post(pairing_handler))
        .route("/readability_assessment", post(readability_handler))
        .route("/hierarchy_evaluation", post(hierarchy_handler))
        .with_state(AppState { rules })
}

/// The combined pass: pairing, readability and hierarchy in one visit,
/// folded into a severity-tagged result list.
async fn analyze_handler(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mode = req.mode.unwrap_or_default();

    if let Some(context) = &req.context {
        tracing::debug!(
            project = context.project_name.as_deref().unwrap_or("unnamed"),
            "analysis context attached"
        );
    }

    let rules = state.rules.clone();
    let elements = req.elements;

    // The engine is cheap but honest work is work; keep it off the I/O threads.
    let results = task::spawn_blocking(move || analyze_elements(&elements, mode, &rules))
        .await
        .map_err(join_error)?;

    Ok(Json(results))
}

async fn pairing_handler(
    State(state): State<AppState>,
    Json(req): Json<PairingRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let rules = state.rules.clone();
    let fonts = req.fonts;

    let report = task::spawn_blocking(move || analyze_pairing(&fonts, &rules))
        .await
        .map_err(join_error)?;

    Ok(Json(report))
}

async fn readability_handler(
    State(state): State<AppState>,
    Json(req): Json<ElementsRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let rules = state.rules.clone();
    let elements = req.elements;

    let report = task::spawn_blocking(move || assess_readability(&elements, &rules))
        .await
        .map_err(join_error)?;

    Ok(Json(report))
}

async fn hierarchy_handler(
    State(state): State<AppState>,
    Json(req): Json<ElementsRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let rules = state.rules.clone();
    let elements = req.elements;

    let report = task::spawn_blocking(move || evaluate_hierarchy(&elements, &rules))
        .await
        .map_err(join_error)?;

    Ok(Json(report))
}

fn join_error(err: task::JoinError) -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("task join error: {err}"),
    )
}
