//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (threshold >= 1, interval and timeout > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: WatchdogConfig -> Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use thiserror::Error;

use super::schema::WatchdogConfig;

/// A single semantic violation in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The target list resolved to nothing.
    #[error("at least one probe target is required (set PING_TARGETS)")]
    NoTargets,

    /// A target entry is blank after trimming.
    #[error("target at position {0} is blank")]
    BlankTarget(usize),

    /// The action can never fire with a zero threshold.
    #[error("failure_threshold must be at least 1")]
    ZeroThreshold,

    /// A zero interval would spin the loop.
    #[error("check_interval_secs must be at least 1")]
    ZeroInterval,

    /// ping's -W flag takes whole seconds; zero disables its timeout.
    #[error("probe_timeout_secs must be at least 1")]
    ZeroProbeTimeout,
}

/// Check every semantic constraint, collecting all violations.
pub fn validate_config(config: &WatchdogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.targets.is_empty() {
        errors.push(ValidationError::NoTargets);
    }
    for (i, target) in config.targets.iter().enumerate() {
        if target.trim().is_empty() {
            errors.push(ValidationError::BlankTarget(i));
        }
    }
    if config.failure_threshold == 0 {
        errors.push(ValidationError::ZeroThreshold);
    }
    if config.check_interval_secs == 0 {
        errors.push(ValidationError::ZeroInterval);
    }
    if config.probe_timeout_secs == 0 {
        errors.push(ValidationError::ZeroProbeTimeout);
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

    fn valid() -> WatchdogConfig {
        WatchdogConfig {
            targets: vec!["1.1.1.1".into()],
            ..WatchdogConfig::default()
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid()).is_ok());
    }

    #[test]
    fn test_empty_targets_rejected() {
        let config = WatchdogConfig::default();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::NoTargets));
    }

    #[test]
    fn test_all_violations_collected() {
        let config = WatchdogConfig {
            targets: Vec::new(),
            failure_threshold: 0,
            check_interval_secs: 0,
            probe_timeout_secs: 0,
            ..WatchdogConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_blank_target_rejected_with_position() {
        let config = WatchdogConfig {
            targets: vec!["1.1.1.1".into(), "  ".into()],
            ..WatchdogConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::BlankTarget(1)]);
    }

    #[test]
    fn test_zero_cooldown_is_allowed() {
        let config = WatchdogConfig {
            cooldown_secs: 0,
            ..valid()
        };
        assert!(validate_config(&config).is_ok());
    }
}
