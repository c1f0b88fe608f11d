//! The `check` use case: evaluate the enabled algorithms, decide, optionally act on the host.

use crate::decide::{apply_decision, decide};
use crate::render::write_diagnostics;
use crate::report::{compute_verdict, exit_code, findings_total};
use crate::runtime_info::{RuntimeInfo, parse_runtime_info};
use anyhow::Context;
use camino::Utf8Path;
use fipsguard_domain::{AlgorithmSet, AttributeSet, Evaluator};
use fipsguard_host::{HostFips, HostFipsError};
use fipsguard_settings::{Mode, Overrides, ResolvedConfig};
use fipsguard_types::{
    FipsguardData, FipsguardReport, HostAction, ReportEnvelope, SCHEMA_REPORT_V1, Severity,
    ToolMeta, ids,
};
use serde_json::json;
use std::io::Write;
use time::OffsetDateTime;

/// Input for the check use case.
pub struct CheckInput<'a> {
    /// Directory relative paths in the config are resolved against.
    pub base_dir: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    pub host: &'a dyn HostFips,
    /// Receives the "disabled" line.
    pub stdout: &'a mut dyn Write,
    /// Receives policy diagnostics and the "failed to disable" line.
    pub stderr: &'a mut dyn Write,
}

/// Output from the check use case.
#[derive(Debug)]
pub struct CheckOutput {
    pub report: FipsguardReport,
    pub resolved_config: ResolvedConfig,
    pub exit_code: i32,
    /// Set when the host rejected the disable request.
    pub host_error: Option<HostFipsError>,
}

/// Run the check use case: resolve config, gather inputs, evaluate, decide, act, report.
pub fn run_check(mut input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        fipsguard_settings::FipsguardConfigV1::default()
    } else {
        fipsguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved = fipsguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    let effective = &resolved.effective;

    let runtime = match effective.runtime_info.as_deref() {
        Some(path) => {
            let path = input.base_dir.join(path);
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("read runtime info: {path}"))?;
            parse_runtime_info(&text).with_context(|| format!("runtime info: {path}"))?
        }
        None => RuntimeInfo::default(),
    };

    let attributes = match &effective.attributes {
        Some(list) => AttributeSet::new(list.iter().map(String::as_str)),
        None => runtime.attributes.unwrap_or_default(),
    };
    let algorithms = match &effective.algorithms {
        Some(list) => AlgorithmSet::new(list.iter().map(String::as_str)),
        None => runtime.algorithms.unwrap_or_default(),
    };

    let host_fips_enabled = input.host.query_fips_enabled();
    tracing::info!(
        provider = input.host.provider_name(),
        host_fips_enabled,
        attributes = attributes.len(),
        algorithms = algorithms.len(),
        "evaluating FIPS compatibility"
    );

    let evaluator = Evaluator::builtin().with_key_size_parse(effective.key_size_parse);
    let domain = evaluator.evaluate(&attributes, &algorithms);
    write_diagnostics(&domain.findings, &mut *input.stderr).context("write diagnostics")?;

    let decision = decide(host_fips_enabled, &domain);
    tracing::info!(?decision, "FIPS decision");

    let mut findings = domain.findings;
    let mut host_error = None;
    let host_action = if effective.mode == Mode::Apply {
        match apply_decision(input.host, decision, &mut *input.stdout, &mut *input.stderr) {
            Ok(action) => action,
            Err(err) => {
                findings.push(fipsguard_types::Finding {
                    severity: Severity::Error,
                    check_id: ids::CHECK_FIPS_HOST.to_string(),
                    code: ids::CODE_HOST_DISABLE_FAILED.to_string(),
                    message: format!("Failed to disable OpenSSL FIPS mode: {err}"),
                    help: None,
                    fingerprint: None,
                    data: json!({ "provider": input.host.provider_name() }),
                });
                let action = HostAction::DisableFailed {
                    error: err.to_string(),
                };
                host_error = Some(err);
                action
            }
        }
    } else {
        HostAction::None
    };

    let verdict = compute_verdict(decision, &host_action, findings.len());
    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "fipsguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        data: FipsguardData {
            host_fips_enabled,
            decision,
            host_action,
            attributes: attributes.as_slice().to_vec(),
            algorithms: algorithms.as_slice().to_vec(),
            matched_profiles: domain.matched_profiles,
            findings_total: findings_total(findings.len()),
        },
        findings,
    };

    let exit_code = exit_code(&report, effective.mode, effective.fail_on);
    Ok(CheckOutput {
        report,
        resolved_config: resolved,
        exit_code,
        host_error,
    })
}
