use std::env;
use std::time::Duration;

use crate::error::AppError;

const DRAFT_TTL_VAR: &str = "TAMMANY_DRAFT_TTL_SECS";
const DRAFT_CAPACITY_VAR: &str = "TAMMANY_DRAFT_CAPACITY";

const DEFAULT_DRAFT_TTL_SECS: u64 = 3600;
const DEFAULT_DRAFT_CAPACITY: u64 = 10_000;

/// Settings for the game-flow service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// How long an uncommitted draft survives without being touched.
    pub draft_ttl: Duration,
    /// Upper bound on drafts held at once.
    pub draft_capacity: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            draft_ttl: Duration::from_secs(DEFAULT_DRAFT_TTL_SECS),
            draft_capacity: DEFAULT_DRAFT_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Read settings from the process environment, falling back to defaults
    /// for unset variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ttl_secs = positive_var(&lookup, DRAFT_TTL_VAR, DEFAULT_DRAFT_TTL_SECS)?;
        let capacity = positive_var(&lookup, DRAFT_CAPACITY_VAR, DEFAULT_DRAFT_CAPACITY)?;
        Ok(Self {
            draft_ttl: Duration::from_secs(ttl_secs),
            draft_capacity: capacity,
        })
    }
}

fn positive_var<F>(lookup: &F, name: &str, default: u64) -> Result<u64, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(default);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    match trimmed.parse::<u64>() {
        Ok(0) => Err(AppError::config(format!(
            "Environment variable '{name}' must be greater than zero"
        ))),
        Ok(value) => Ok(value),
        Err(_) => Err(AppError::config(format!(
            "Environment variable '{name}' must be a positive integer, got '{raw}'"
        ))),
    }
}
