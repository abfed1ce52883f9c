//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation of values the loader already parsed
//! - Poll intervals must be positive
//! - Listener address must be a socket address
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic problem found in a parsed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("interval at position {index} must be a positive number of seconds")]
    ZeroInterval { index: usize },

    #[error("bind address '{0}' is not a valid socket address")]
    BindAddress(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, secs) in config.intervals.iter().enumerate() {
        if *secs == 0 {
            errors.push(ValidationError::ZeroInterval { index });
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
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

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ServiceConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServiceConfig::default();
        config.intervals = vec![0, 5, 0];
        config.listener.bind_address = "not-an-address".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::ZeroInterval { index: 0 },
                ValidationError::ZeroInterval { index: 2 },
                ValidationError::BindAddress("not-an-address".to_string()),
            ]
        );
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::ZeroInterval { index: 3 };
        assert!(err.to_string().contains("position 3"));
    }
}
