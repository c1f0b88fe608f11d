use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `fipsguard.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FipsguardConfigV1 {
    /// Optional schema string for tooling (`fipsguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Requested profile attributes, e.g. `["fips-host"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<String>>,

    /// Enabled algorithm tokens, e.g. `["rsa", "ecc-min-size=224"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithms: Option<Vec<String>>,

    /// Runtime-info JSON file supplying whichever lists are not given above.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_info: Option<String>,

    /// `check` (default) only reports; `apply` disables host FIPS when required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// `disable` (default) fails a `check` run that would need to disable host FIPS; `never`
    /// always exits zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// `trusting` (default) or `strict` reading of key-size values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_size_parse: Option<String>,
}
