//! Runtime-info JSON as reported by the TPM library.
//!
//! ```json
//! { "RuntimeAlgorithms": { "Implemented": "...", "Enabled": "rsa,ecc-min-size=224" },
//!   "RuntimeAttributes": { "Enabled": "fips-host" } }
//! ```

use anyhow::Context;
use fipsguard_domain::{AlgorithmSet, AttributeSet};
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub algorithms: Option<AlgorithmSet>,
    pub attributes: Option<AttributeSet>,
}

#[derive(Deserialize)]
struct RawRuntimeInfo {
    #[serde(rename = "RuntimeAlgorithms")]
    algorithms: Option<RawSection>,
    #[serde(rename = "RuntimeAttributes")]
    attributes: Option<RawSection>,
}

#[derive(Deserialize)]
struct RawSection {
    #[serde(rename = "Enabled")]
    enabled: Option<String>,
}

/// Parse runtime info. Absent sections or `Enabled` keys leave the list unset.
pub fn parse_runtime_info(text: &str) -> anyhow::Result<RuntimeInfo> {
    let raw: RawRuntimeInfo = serde_json::from_str(text).context("parse runtime info json")?;

    Ok(RuntimeInfo {
        algorithms: raw
            .algorithms
            .and_then(|s| s.enabled)
            .map(|l| AlgorithmSet::from_comma_list(&l)),
        attributes: raw
            .attributes
            .and_then(|s| s.enabled)
            .map(|l| AttributeSet::from_comma_list(&l)),
    })
}
