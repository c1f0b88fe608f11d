use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for fipsguard reports.
pub const SCHEMA_REPORT_V1: &str = "fipsguard.report.v1";

/// Severity is intentionally small: it maps cleanly to CI signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub check_id: String,
    pub code: String,

    /// Human-readable diagnostic line (without trailing newline).
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Stable identifier intended for dedup and trending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Check-specific structured payload.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

/// Which evaluation confirmed that the enabled algorithms are usable under host FIPS.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CompatibleVia {
    /// A requested profile attribute matched a policy entry and every matching entry passed.
    Attributes,
    /// The built-in default lists passed.
    Algorithms,
}

/// Outcome of combining the policy verdict with the host FIPS state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Decision {
    /// The host does not enforce FIPS; nothing to do.
    HostNotEnforcing,
    /// The host enforces FIPS and the enabled algorithms are compatible with it.
    Compatible { via: CompatibleVia },
    /// The host enforces FIPS and the enabled algorithms would fail under it.
    DisableRequired,
}

impl Decision {
    pub fn requires_disable(self) -> bool {
        matches!(self, Decision::DisableRequired)
    }
}

/// What was done to the host FIPS state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum HostAction {
    None,
    Disabled,
    DisableFailed { error: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Fipsguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FipsguardData {
    pub host_fips_enabled: bool,
    pub decision: Decision,
    pub host_action: HostAction,

    pub attributes: Vec<String>,
    pub algorithms: Vec<String>,

    /// Policy-table attributes that matched the requested attributes.
    #[serde(default)]
    pub matched_profiles: Vec<String>,

    pub findings_total: u32,
}

/// A generic receipt/envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = FipsguardData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: TData,
}

pub type FipsguardReport = ReportEnvelope<FipsguardData>;

/// JSON schema of the emitted report.
pub fn report_schema() -> schemars::Schema {
    schemars::schema_for!(FipsguardReport)
}
