//! Full configuration validation.
//!
//! Every section is checked and all errors are collected into a single
//! `ConfigError`.

mod helpers;


use crate::schema::SkyglowConfig;
use helpers::{validate_non_empty, validate_range};
use skyglow_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SkyglowConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_theme(&mut errors, config);
    validate_sky(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_theme(errors: &mut Vec<String>, config: &SkyglowConfig) {
    let key = &config.theme.storage_key;
    validate_non_empty(errors, "theme.storage_key", key);
    if key.chars().any(char::is_whitespace) {
        errors.push(format!("theme.storage_key = '{key}' must not contain whitespace"));
    }
}

fn validate_sky(errors: &mut Vec<String>, config: &SkyglowConfig) {
    validate_non_empty(errors, "sky.palette", &config.sky.palette);
    validate_range(
        errors,
        "sky.refresh_interval_secs",
        config.sky.refresh_interval_secs,
        1,
        3600,
    );
}
