//! Exponential backoff and failure classification.

use std::time::Duration;

use rand::Rng;

use crate::error::Error;

/// How a connection failure should be treated by a reconnecting caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Network stall, reset, EOF: retry with normal backoff.
    Transient,

    /// The server is shedding load (420/429): retry with longer backoff.
    RateLimited,

    /// Credentials were rejected (401/403): abort and surface to the
    /// operator; retrying cannot help.
    Auth,
}

/// Classify a connection-level failure into its retry class.
pub fn classify_failure(error: &Error) -> FailureClass {
    match error {
        Error::ResponseStatus { status, .. } => match status.as_u16() {
            401 | 403 => FailureClass::Auth,
            420 | 429 => FailureClass::RateLimited,
            _ => FailureClass::Transient,
        },
        _ => FailureClass::Transient,
    }
}

/// Calculate capped exponential backoff with jitter.
///
/// Attempt 0 returns zero; each following attempt doubles the base delay up
/// to `max_ms`, plus up to 10% jitter.
pub fn calculate_backoff(attempt: u32, base_ms: u64, max_ms: u64) -> Duration {
    if attempt == 0 {
        return Duration::from_millis(0);
    }

    let exponential = 2u64.saturating_pow(attempt - 1);
    let delay_ms = base_ms.saturating_mul(exponential).min(max_ms);

    let jitter_range = delay_ms / 10;
    let jitter = if jitter_range > 0 {
        rand::thread_rng().gen_range(0..jitter_range)
    } else {
        0
    };

    Duration::from_millis(delay_ms + jitter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_backoff_grows_and_caps() {
        assert_eq!(calculate_backoff(0, 100, 2000), Duration::from_millis(0));

        let b1 = calculate_backoff(1, 100, 2000);
        assert!(b1.as_millis() >= 100);

        let b2 = calculate_backoff(2, 100, 2000);
        assert!(b2.as_millis() >= 200);

        let capped = calculate_backoff(10, 100, 1000);
        assert!(capped.as_millis() >= 1000 && capped.as_millis() <= 1100);
    }

    fn status_error(code: u16) -> Error {
        Error::ResponseStatus {
            status: StatusCode::from_u16(code).unwrap(),
            label: "test",
            body: String::new(),
        }
    }

    #[test]
    fn test_auth_failures_abort() {
        assert_eq!(classify_failure(&status_error(401)), FailureClass::Auth);
        assert_eq!(classify_failure(&status_error(403)), FailureClass::Auth);
    }

    #[test]
    fn test_rate_limit_classes() {
        assert_eq!(classify_failure(&status_error(420)), FailureClass::RateLimited);
        assert_eq!(classify_failure(&status_error(429)), FailureClass::RateLimited);
    }

    #[test]
    fn test_everything_else_is_transient() {
        assert_eq!(classify_failure(&status_error(503)), FailureClass::Transient);
        assert_eq!(classify_failure(&Error::StreamEnded), FailureClass::Transient);
        assert_eq!(
            classify_failure(&Error::Stalled(Duration::from_secs(90))),
            FailureClass::Transient
        );
    }
}
