use fipsguard_settings::{FailOn, Mode};
use fipsguard_types::{
    Decision, Finding, FipsguardData, FipsguardReport, HostAction, ReportEnvelope,
    SCHEMA_REPORT_V1, Severity, ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

/// Verdict for a finished run.
///
/// `Fail` when host FIPS had to be disabled and was not; `Warn` when there are findings but the
/// run ends in a usable state; `Pass` otherwise.
pub fn compute_verdict(decision: Decision, action: &HostAction, findings: usize) -> Verdict {
    match (decision, action) {
        (Decision::DisableRequired, HostAction::Disabled) => Verdict::Warn,
        (Decision::DisableRequired, _) => Verdict::Fail,
        _ if findings > 0 => Verdict::Warn,
        _ => Verdict::Pass,
    }
}

/// Process exit code for a report.
///
/// - 0: nothing to do, or the required action was taken
/// - 1: the host rejected the disable request
/// - 2: disable required but not applied (check mode with `fail_on = disable`)
pub fn exit_code(report: &FipsguardReport, mode: Mode, fail_on: FailOn) -> i32 {
    if matches!(report.data.host_action, HostAction::DisableFailed { .. }) {
        return 1;
    }
    if report.data.decision.requires_disable() && mode == Mode::Check && fail_on == FailOn::Disable
    {
        return 2;
    }
    0
}

pub fn serialize_report(report: &FipsguardReport) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(report)?;
    data.push(b'\n');
    Ok(data)
}

/// `findings_total` for a finding count, saturating at `u32::MAX`.
pub fn findings_total(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Report written when the run itself failed (bad config, unreadable runtime info).
pub fn runtime_error_report(message: &str) -> FipsguardReport {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "fipsguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            help: Some("Fix the tool error and re-run fipsguard.".to_string()),
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: FipsguardData {
            host_fips_enabled: false,
            decision: Decision::HostNotEnforcing,
            host_action: HostAction::None,
            attributes: Vec::new(),
            algorithms: Vec::new(),
            matched_profiles: Vec::new(),
            findings_total: 1,
        },
    }
}
