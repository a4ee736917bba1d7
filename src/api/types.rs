// src/api/types.rs
use std::fmt;
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use zeroize::Zeroizing;

use crate::breach::BreachStatus;
use crate::models::AnalysisResult;
use crate::strength::classify::CharClassReport;
use crate::strength::feedback::MIN_RECOMMENDED_LENGTH;
use crate::strength::matching::MatchKind;
use crate::strength::time::CrackTimes;

// Analysis requests and responses
#[derive(Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Password to analyze. Never stored or logged.
    #[serde(default)]
    #[schema(value_type = String)]
    pub password: Zeroizing<String>,
}

impl fmt::Debug for AnalyzeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzeRequest")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Strength score from 0 (weakest) to 4 (strongest)
    pub score: u8,
    /// Estimated entropy in bits
    pub entropy: f64,
    /// log10 of the estimated guess count
    pub guesses_log10: f64,
    /// Time to crack for an offline attacker with a fast hash
    pub crack_time: String,
    /// Time to crack under each attacker model
    pub crack_times: CrackTimes,
    /// Warning about the weakest pattern found (absent when none)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Ordered improvement suggestions
    pub suggestions: Vec<String>,
    /// Whether the password meets the minimum recommended length
    pub length_valid: bool,
    /// Times seen in breach data; null when the lookup was unavailable
    pub breach_count: Option<u64>,
    /// found, clean or unknown
    pub breach_status: BreachStatus,
    /// Character classes present
    pub checks: CharClassReport,
    /// Weak pattern kinds the estimate is based on
    pub patterns: Vec<MatchKind>,
}

impl From<AnalysisResult> for AnalyzeResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            score: result.score,
            entropy: result.entropy,
            guesses_log10: result.guesses_log10,
            crack_time: result.crack_time,
            crack_times: result.crack_times,
            warning: result.warning,
            suggestions: result.suggestions,
            length_valid: result.checks.length >= MIN_RECOMMENDED_LENGTH,
            breach_count: result.breach.count(),
            breach_status: result.breach.status(),
            checks: result.checks,
            patterns: result.patterns,
        }
    }
}

// Password generation types
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Password length (default: 12)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub upper: Option<bool>,
    /// Include lowercase letters (default: true)
    pub lower: Option<bool>,
    /// Include numbers (default: true)
    pub numbers: Option<bool>,
    /// Include symbols (default: true)
    pub symbols: Option<bool>,
    /// Leave out look-alike characters such as l, I, O, 0 and 1 (default: true)
    pub exclude_similar: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// Generated password
    pub password: String,
}

impl fmt::Debug for GenerateResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerateResponse")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// What went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

// System types
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the server is answering
    pub status: String,
    /// Service version
    pub version: String,
    /// Seconds since the server started
    pub uptime_seconds: i64,
    /// Whether breach lookups are configured
    pub breach_check_enabled: bool,
}
