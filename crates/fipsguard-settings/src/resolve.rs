use crate::model::FipsguardConfigV1;
use anyhow::Context;
use fipsguard_domain::KeySizeParse;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Evaluate and report only.
    #[default]
    Check,
    /// Disable host FIPS mode when the enabled algorithms require it.
    Apply,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailOn {
    /// Non-zero exit when host FIPS would have to be disabled (check mode).
    #[default]
    Disable,
    Never,
}

/// CLI-level overrides. List values are comma-separated.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub attributes: Option<String>,
    pub algorithms: Option<String>,
    pub runtime_info: Option<String>,
    pub mode: Option<String>,
    pub fail_on: Option<String>,
    pub key_size_parse: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// `None` means "take from runtime info, else empty".
    pub attributes: Option<Vec<String>>,
    pub algorithms: Option<Vec<String>>,
    pub runtime_info: Option<String>,
    pub mode: Mode,
    pub fail_on: FailOn,
    pub key_size_parse: KeySizeParse,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: FipsguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut effective = EffectiveConfig {
        attributes: overrides
            .attributes
            .as_deref()
            .map(split_list)
            .or(cfg.attributes),
        algorithms: overrides
            .algorithms
            .as_deref()
            .map(split_list)
            .or(cfg.algorithms),
        runtime_info: overrides.runtime_info.or(cfg.runtime_info),
        ..EffectiveConfig::default()
    };

    if let Some(mode) = overrides.mode.or(cfg.mode) {
        effective.mode = parse_mode(&mode).context("invalid mode")?;
    }
    if let Some(fail_on) = overrides.fail_on.or(cfg.fail_on) {
        effective.fail_on = parse_fail_on(&fail_on).context("invalid fail_on")?;
    }
    if let Some(parse) = overrides.key_size_parse.or(cfg.key_size_parse) {
        effective.key_size_parse =
            parse_key_size_parse(&parse).context("invalid key_size_parse")?;
    }

    Ok(ResolvedConfig { effective })
}

fn split_list(v: &str) -> Vec<String> {
    v.split(',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_mode(v: &str) -> anyhow::Result<Mode> {
    match v {
        "check" => Ok(Mode::Check),
        "apply" => Ok(Mode::Apply),
        other => anyhow::bail!("unknown mode: {other} (expected 'check' or 'apply')"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "disable" => Ok(FailOn::Disable),
        "never" => Ok(FailOn::Never),
        other => anyhow::bail!("unknown fail_on: {other} (expected disable|never)"),
    }
}

fn parse_key_size_parse(v: &str) -> anyhow::Result<KeySizeParse> {
    match v {
        "trusting" => Ok(KeySizeParse::Trusting),
        "strict" => Ok(KeySizeParse::Strict),
        other => anyhow::bail!("unknown key_size_parse: {other} (expected trusting|strict)"),
    }
}
