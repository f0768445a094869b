use axum::{extract::State, Json};
use tracing::debug;

use crate::{
    api::models::*,
    config::Settings,
    forms::{sanitize_for_context, ProfileUpdate, SavedResourceRequest},
    sanitize,
    utils::validation::validate_field_size,
    Result,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
}

/// POST /api/sanitize - Sanitize text for an output context
pub async fn sanitize_text(
    State(state): State<AppState>,
    Json(request): Json<SanitizeRequest>,
) -> Result<Json<SanitizeResponse>> {
    debug!(
        "Sanitize request: context={}, max_length={:?}",
        request.context, request.max_length
    );

    if let Some(text) = request.text.as_deref() {
        validate_field_size("text", text, state.settings.limits.max_input_bytes)?;
    }

    let sanitized = sanitize_for_context(
        request.text.as_deref(),
        request.context,
        request.max_length,
    )?;

    let modified = sanitized != request.text;

    Ok(Json(SanitizeResponse {
        sanitized,
        context: request.context,
        modified,
    }))
}

/// POST /api/scan - Report which dangerous constructs the text contains
pub async fn scan_text(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanResponse>> {
    validate_field_size("text", &request.text, state.settings.limits.max_input_bytes)?;

    let findings = sanitize::scan(&request.text);
    debug!("Scan request: {} findings", findings.len());

    Ok(Json(ScanResponse {
        dangerous: !findings.is_empty(),
        findings,
    }))
}

/// POST /api/forms/profile - Sanitize a profile update before persistence
pub async fn normalize_profile(
    State(state): State<AppState>,
    Json(profile): Json<ProfileUpdate>,
) -> Result<Json<ProfileUpdate>> {
    debug!("Profile normalization request");
    Ok(Json(profile.sanitize(&state.settings.limits)?))
}

/// POST /api/forms/saved-resource - Sanitize a saved-resource bookmark
pub async fn normalize_saved_resource(
    State(state): State<AppState>,
    Json(request): Json<SavedResourceRequest>,
) -> Result<Json<SavedResourceRequest>> {
    debug!(
        "Saved resource normalization request: resource_id={}",
        request.resource_id
    );
    Ok(Json(request.sanitize(&state.settings.limits)?))
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}

/// GET /ready - Readiness check endpoint
pub async fn readiness_check() -> Result<Json<ReadinessResponse>> {
    // Forces the lazily built rule table and exercises both layers once
    let rules_healthy = sanitize::is_dangerous("<script>") && !sanitize::is_dangerous("ready");
    let markup_healthy = sanitize::sanitize_html("<b>ok</b><script>x</script>") == "<b>ok</b>";

    let ready = rules_healthy && markup_healthy;

    Ok(Json(ReadinessResponse {
        ready,
        pattern_rules: if rules_healthy { "ok" } else { "error" }.to_string(),
        markup_sanitizer: if markup_healthy { "ok" } else { "error" }.to_string(),
    }))
}
