// src/core/service.rs
use std::sync::Arc;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::breach::{BreachChecker, BreachError, BreachOutcome, HibpRangeProvider};
use crate::core::config::Config;
use crate::generators::{GenerationError, PasswordGenerator};
use crate::models::{AnalysisResult, GenerationPolicy};
use crate::strength::dictionary::{Dictionary, DictionaryError};
use crate::strength::StrengthEstimator;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Password must be at most {max} characters")]
    PasswordTooLong { max: usize },

    #[error("Strength analysis did not complete: {0}")]
    Task(String),

    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("Breach client error: {0}")]
    Breach(#[from] BreachError),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Shared by every request. Holds only read-only resources, so one instance
/// serves any number of concurrent calls.
pub struct PasswordService {
    estimator: StrengthEstimator,
    breach: BreachChecker,
    generator: PasswordGenerator,
    max_analysis_length: usize,
    default_password_length: usize,
}

impl PasswordService {
    pub fn new(estimator: StrengthEstimator, breach: BreachChecker, config: &Config) -> Self {
        Self {
            estimator,
            breach,
            generator: PasswordGenerator::new(config.max_password_length),
            max_analysis_length: config.max_analysis_length,
            default_password_length: config.default_password_length,
        }
    }

    /// Loads the dictionary and builds the breach client described by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let dictionary = match &config.dictionary_path {
            Some(path) => Arc::new(Dictionary::from_path(path)?),
            None => Dictionary::bundled(),
        };
        log::info!("📖 Dictionary ready with {} words", dictionary.len());

        let breach = if config.breach_check_enabled {
            let provider = HibpRangeProvider::new(&config.breach_api_url, config.breach_timeout)?;
            log::info!("🔍 Breach lookups enabled against {}", config.breach_api_url);
            BreachChecker::new(Arc::new(provider), config.breach_timeout)
        } else {
            log::info!("Breach lookups disabled");
            BreachChecker::disabled()
        };

        Ok(Self::new(StrengthEstimator::new(dictionary), breach, config))
    }

    pub fn breach_enabled(&self) -> bool {
        self.breach.is_enabled()
    }

    /// Policy with every class enabled and the configured default length.
    pub fn default_policy(&self) -> GenerationPolicy {
        GenerationPolicy {
            length: self.default_password_length,
            ..GenerationPolicy::default()
        }
    }

    /// Runs the strength estimate on the blocking pool while the breach
    /// lookup is in flight, then joins both. Dropping the returned future
    /// abandons the lookup.
    pub async fn analyze(&self, password: &str, check_breach: bool) -> Result<AnalysisResult> {
        if password.chars().count() > self.max_analysis_length {
            return Err(ServiceError::PasswordTooLong {
                max: self.max_analysis_length,
            });
        }

        let owned = Zeroizing::new(password.to_string());
        let estimator = self.estimator.clone();
        let strength = tokio::task::spawn_blocking(move || estimator.estimate(&owned));

        let breach = async {
            if check_breach {
                self.breach.check(password).await
            } else {
                BreachOutcome::Unknown
            }
        };

        let (strength, breach) = futures::join!(strength, breach);
        let report = strength.map_err(|e| ServiceError::Task(e.to_string()))?;

        log::debug!(
            "Analysis finished: score {}, {:.1} bits, breach {:?}",
            report.score,
            report.entropy,
            breach.status()
        );

        Ok(AnalysisResult {
            score: report.score,
            entropy: report.entropy,
            guesses_log10: report.guesses_log10,
            crack_time: report.crack_time,
            crack_times: report.crack_times,
            warning: report.warning,
            suggestions: report.suggestions,
            checks: report.checks,
            patterns: report.patterns,
            breach,
        })
    }

    pub fn generate(&self, policy: &GenerationPolicy) -> std::result::Result<String, GenerationError> {
        let password = self.generator.generate_password(policy)?;
        log::debug!("Generated a {}-character password", policy.length);
        Ok(password)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::breach::tests::{FailingProvider, FixtureProvider};
    use crate::breach::{BreachStatus, RangeProvider};
    use crate::strength::matching::MatchKind;
    use std::time::Duration;

    pub fn service_with(provider: Arc<dyn RangeProvider>) -> PasswordService {
        let breach = BreachChecker::new(provider, Duration::from_secs(2));
        PasswordService::new(StrengthEstimator::default(), breach, &Config::default())
    }

    #[tokio::test]
    async fn analysis_merges_strength_and_breach_count() {
        let service = service_with(Arc::new(FixtureProvider::with_password_count(12345)));
        let result = service.analyze("password", true).await.unwrap();

        assert_eq!(result.score, 0);
        assert_eq!(result.breach, BreachOutcome::Found(12345));
        assert_eq!(result.breach.count(), Some(12345));
        assert_eq!(result.patterns, vec![MatchKind::Dictionary]);
        assert!(result.warning.is_some());
    }

    #[tokio::test]
    async fn breach_failure_still_returns_full_analysis() {
        let service = service_with(Arc::new(FailingProvider));
        let result = service.analyze("Tr0ub4dor&3", true).await.unwrap();

        assert!(result.score >= 2);
        assert!(result.entropy > 0.0);
        assert_eq!(result.breach.status(), BreachStatus::Unknown);
        assert_eq!(result.breach.count(), None);
    }

    #[tokio::test]
    async fn skipping_breach_lookup_never_queries_provider() {
        let provider = Arc::new(FixtureProvider::with_password_count(1));
        let service = service_with(provider.clone());
        let result = service.analyze("password", false).await.unwrap();

        assert_eq!(result.breach, BreachOutcome::Unknown);
        assert!(provider.queried.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn overlong_input_is_rejected() {
        let service = service_with(Arc::new(FixtureProvider::default()));
        let long = "x".repeat(257);
        assert!(matches!(
            service.analyze(&long, true).await,
            Err(ServiceError::PasswordTooLong { max: 256 })
        ));
    }

    #[test]
    fn generation_uses_configured_defaults() {
        let service = service_with(Arc::new(FixtureProvider::default()));
        let policy = service.default_policy();
        assert_eq!(policy.length, 12);
        assert_eq!(service.generate(&policy).unwrap().len(), 12);
    }
}
