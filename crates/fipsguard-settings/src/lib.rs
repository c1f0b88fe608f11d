//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::FipsguardConfigV1;
pub use resolve::{EffectiveConfig, FailOn, Mode, Overrides, ResolvedConfig};

/// Schema identifier accepted in the `schema` key.
pub const SCHEMA_CONFIG_V1: &str = "fipsguard.config.v1";

/// Parse `fipsguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<FipsguardConfigV1> {
    let cfg: FipsguardConfigV1 = toml::from_str(input)?;
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }
    Ok(cfg)
}

/// Resolve the effective config (defaults + config file + overrides).
pub fn resolve_config(
    cfg: FipsguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON schema of the config file.
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(FipsguardConfigV1)
}
