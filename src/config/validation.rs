//! Configuration validation.

use thiserror::Error;
use url::Url;

use crate::config::schema::StreamConfig;

/// A single validation failure. Loading collects all of them rather than
/// stopping at the first.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required credential field is empty.
    #[error("credential field `{0}` is empty")]
    EmptyCredential(&'static str),

    /// The base URL override does not parse.
    #[error("base_url `{0}` is not a valid URL")]
    InvalidBaseUrl(String),

    /// The in-flight cap would stall all dispatch.
    #[error("dispatch.max_in_flight must be at least 1")]
    ZeroInFlight,
}

/// Validate a configuration, collecting every failure.
pub fn validate_config(config: &StreamConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let credentials = [
        ("consumer_key", &config.credentials.consumer_key),
        ("consumer_secret", &config.credentials.consumer_secret),
        ("oauth_token", &config.credentials.oauth_token),
        ("oauth_token_secret", &config.credentials.oauth_token_secret),
    ];
    for (name, value) in credentials {
        if value.is_empty() {
            errors.push(ValidationError::EmptyCredential(name));
        }
    }

    if let Some(base_url) = &config.base_url {
        if Url::parse(base_url).is_err() {
            errors.push(ValidationError::InvalidBaseUrl(base_url.clone()));
        }
    }

    if config.dispatch.max_in_flight == 0 {
        errors.push(ValidationError::ZeroInFlight);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Credentials;

    fn valid_config() -> StreamConfig {
        StreamConfig::with_credentials(Credentials {
            consumer_key: "ck".into(),
            consumer_secret: "cs".into(),
            oauth_token: "ot".into(),
            oauth_token_secret: "ots".into(),
        })
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_empty_credentials_collected() {
        let config = StreamConfig::default();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let mut config = valid_config();
        config.base_url = Some("not a url".into());
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidBaseUrl("not a url".into())]
        );
    }

    #[test]
    fn test_zero_in_flight_rejected() {
        let mut config = valid_config();
        config.dispatch.max_in_flight = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::ZeroInFlight]);
    }
}
