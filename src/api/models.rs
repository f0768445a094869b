use serde::{Deserialize, Serialize};

use crate::sanitize::{OutputContext, RuleKind};

/// Sanitize request body
#[derive(Debug, Clone, Deserialize)]
pub struct SanitizeRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub context: OutputContext,
    #[serde(default)]
    pub max_length: Option<usize>,
}

/// Sanitize response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizeResponse {
    pub sanitized: Option<String>,
    pub context: OutputContext,
    pub modified: bool,
}

/// Scan request body
#[derive(Debug, Clone, Deserialize)]
pub struct ScanRequest {
    pub text: String,
}

/// Scan response
#[derive(Debug, Clone, Serialize)]
pub struct ScanResponse {
    pub dangerous: bool,
    pub findings: Vec<RuleKind>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub pattern_rules: String,
    pub markup_sanitizer: String,
}
