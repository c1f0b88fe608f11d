use crate::model::AlgorithmSet;
use fipsguard_types::{Finding, Severity, ids};
use serde_json::json;

/// Scan `disallowed` in order and stop at the first one present in `enabled`.
///
/// Only that first hit is reported.
pub fn run(enabled: &AlgorithmSet, disallowed: &[&str], out: &mut Vec<Finding>) -> bool {
    let Some(name) = disallowed.iter().copied().find(|d| enabled.contains(d)) else {
        return false;
    };

    tracing::warn!(algorithm = name, "enabled algorithms contain a FIPS-disallowed algorithm");
    out.push(Finding {
        severity: Severity::Warning,
        check_id: ids::CHECK_FIPS_DISALLOWED_ALGORITHMS.to_string(),
        code: ids::CODE_DISALLOWED_ALGORITHM.to_string(),
        message: format!("Warning(FIPS): Enable algorithms contain '{name}'."),
        help: Some(format!("Disable '{name}' in the TPM profile.")),
        fingerprint: None,
        data: json!({ "algorithm": name }),
    });
    true
}
