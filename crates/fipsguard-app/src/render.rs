//! Diagnostic lines and Markdown summaries.

use fipsguard_types::{CompatibleVia, Decision, Finding, FipsguardReport, HostAction, Verdict};
use std::io::{self, Write};

/// Write one diagnostic line per finding, in evaluation order.
pub fn write_diagnostics(findings: &[Finding], out: &mut dyn Write) -> io::Result<()> {
    for f in findings {
        writeln!(out, "{}", f.message)?;
    }
    Ok(())
}

pub fn render_markdown(report: &FipsguardReport) -> String {
    let mut out = String::new();

    out.push_str("# Fipsguard report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Warn => "WARN",
        Verdict::Fail => "FAIL",
    };
    let decision = match report.data.decision {
        Decision::HostNotEnforcing => "host does not enforce FIPS",
        Decision::Compatible {
            via: CompatibleVia::Attributes,
        } => "compatible (profile attributes)",
        Decision::Compatible {
            via: CompatibleVia::Algorithms,
        } => "compatible (enabled algorithms)",
        Decision::DisableRequired => "host FIPS must be disabled",
    };
    let action = match &report.data.host_action {
        HostAction::None => "none".to_string(),
        HostAction::Disabled => "disabled host FIPS mode".to_string(),
        HostAction::DisableFailed { error } => format!("disable failed: {error}"),
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Host FIPS: {}\n- Decision: {}\n- Host action: {}\n- Findings: {}\n\n",
        verdict,
        if report.data.host_fips_enabled {
            "enabled"
        } else {
            "disabled"
        },
        decision,
        action,
        report.data.findings_total
    ));

    if !report.data.matched_profiles.is_empty() {
        out.push_str(&format!(
            "Matched profiles: {}\n\n",
            report
                .data
                .matched_profiles
                .iter()
                .map(|p| format!("`{p}`"))
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            fipsguard_types::Severity::Info => "INFO",
            fipsguard_types::Severity::Warning => "WARN",
            fipsguard_types::Severity::Error => "ERROR",
        };
        out.push_str(&format!(
            "- [{}] `{}` / `{}`: {}\n",
            sev, f.check_id, f.code, f.message
        ));
        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}
