//! Threshold suggestions from an external service
//!
//! The alarm-rule form asks a [`SuggestionService`] for a recommended
//! threshold. [`ThresholdAdvisor`] makes exactly one attempt per request,
//! keeps a loading flag for the form's spinner, and turns every failure into
//! "no suggestion".

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SuggestError;

/// What the service recommends for one (device type, metric) pair
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSuggestion {
    pub recommended_threshold: f64,
    #[serde(default)]
    pub rationale: Option<String>,
}

impl ThresholdSuggestion {
    /// Parse a service response body
    pub fn from_json(body: &str) -> Result<Self, SuggestError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// An external threshold-suggestion backend
pub trait SuggestionService: Send + Sync {
    fn suggest_thresholds(
        &self,
        device_type: &str,
        metric_key: &str,
    ) -> impl Future<Output = Result<ThresholdSuggestion, SuggestError>> + Send;
}

/// Calls a [`SuggestionService`] on behalf of a form
pub struct ThresholdAdvisor<S> {
    service: S,
    timeout: Option<Duration>,
    /// Requests currently awaiting the service
    in_flight: AtomicUsize,
}

impl<S: SuggestionService> ThresholdAdvisor<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            timeout: None,
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Give up on the service after `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// True while any request is in flight
    pub fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }

    /// Number of requests currently awaiting the service
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Ask for a suggestion. Failures are logged and yield `None`.
    pub async fn suggest(&self, device_type: &str, metric_key: &str) -> Option<ThresholdSuggestion> {
        let _loading = InFlight::enter(&self.in_flight);

        let request = self.service.suggest_thresholds(device_type, metric_key);
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .unwrap_or(Err(SuggestError::Timeout)),
            None => request.await,
        };

        match result {
            Ok(suggestion) => {
                tracing::debug!(
                    device_type,
                    metric_key,
                    threshold = suggestion.recommended_threshold,
                    "threshold suggestion received"
                );
                Some(suggestion)
            }
            Err(err) => {
                tracing::warn!(device_type, metric_key, error = %err, "threshold suggestion failed");
                None
            }
        }
    }
}

/// Counts one request in flight; leaves on every exit path, including a
/// dropped future
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    struct Fixed(f64);

    impl SuggestionService for Fixed {
        async fn suggest_thresholds(
            &self,
            _device_type: &str,
            _metric_key: &str,
        ) -> Result<ThresholdSuggestion, SuggestError> {
            Ok(ThresholdSuggestion {
                recommended_threshold: self.0,
                rationale: None,
            })
        }
    }

    struct Failing {
        calls: AtomicUsize,
    }

    impl SuggestionService for Failing {
        async fn suggest_thresholds(
            &self,
            _device_type: &str,
            _metric_key: &str,
        ) -> Result<ThresholdSuggestion, SuggestError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(SuggestError::Unavailable("503".to_string()))
        }
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let advisor = ThresholdAdvisor::new(Fixed(72.5));
        let suggestion = advisor.suggest("chiller", "temperature").await.unwrap();
        assert_eq!(suggestion.recommended_threshold, 72.5);
        assert!(!advisor.is_loading());
    }

    #[tokio::test]
    async fn test_failure_is_swallowed_without_retry() {
        let advisor = ThresholdAdvisor::new(Failing {
            calls: AtomicUsize::new(0),
        });
        assert!(advisor.suggest("chiller", "temperature").await.is_none());
        assert_eq!(advisor.service().calls.load(Ordering::SeqCst), 1);
        assert!(!advisor.is_loading());
    }

    #[test]
    fn test_parse_response() {
        let s = ThresholdSuggestion::from_json(r#"{ "recommended_threshold": 4.2 }"#).unwrap();
        assert_eq!(s.recommended_threshold, 4.2);
        assert!(matches!(
            ThresholdSuggestion::from_json("{}"),
            Err(SuggestError::InvalidResponse(_))
        ));
    }
}
