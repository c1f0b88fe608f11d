//! Combining the policy verdict with the host FIPS state.

use fipsguard_domain::DomainReport;
use fipsguard_host::{HostFips, HostFipsError};
use fipsguard_types::{CompatibleVia, Decision, HostAction};
use std::io::Write;

/// Decide what the host FIPS state requires, given the domain evaluation.
pub fn decide(host_fips_enabled: bool, report: &DomainReport) -> Decision {
    if !host_fips_enabled {
        return Decision::HostNotEnforcing;
    }
    if report.attributes_ok {
        return Decision::Compatible {
            via: CompatibleVia::Attributes,
        };
    }
    if report.algorithms_ok == Some(true) {
        return Decision::Compatible {
            via: CompatibleVia::Algorithms,
        };
    }
    Decision::DisableRequired
}

/// Disable host FIPS if `decision` requires it, writing the outcome line to `stdout` on success
/// or `stderr` on failure.
///
/// Write errors on the diagnostic streams are logged and otherwise ignored; the host result is
/// what matters.
pub fn apply_decision(
    host: &dyn HostFips,
    decision: Decision,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<HostAction, HostFipsError> {
    if !decision.requires_disable() {
        return Ok(HostAction::None);
    }

    match host.disable_fips() {
        Ok(()) => {
            if let Err(err) = writeln!(stdout, "Warning: Disabled OpenSSL FIPS mode") {
                tracing::debug!(%err, "could not write disable notice");
            }
            Ok(HostAction::Disabled)
        }
        Err(err) => {
            if let Err(write_err) = writeln!(stderr, "Failed to disable OpenSSL FIPS mode: {err}") {
                tracing::debug!(err = %write_err, "could not write disable failure");
            }
            Err(err)
        }
    }
}
