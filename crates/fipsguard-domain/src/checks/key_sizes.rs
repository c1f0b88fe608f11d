use crate::model::AlgorithmSet;
use crate::policy::{KeySizeParse, KeySizeRequirement};
use fipsguard_types::{Finding, Severity, ids};
use serde_json::json;

/// True only if every requirement has a matching statement whose value is at least the minimum.
///
/// A missing statement is reported and scanning continues; a statement below the minimum is
/// reported and ends the scan.
pub fn run(
    enabled: &AlgorithmSet,
    requirements: &[KeySizeRequirement],
    parse: KeySizeParse,
    out: &mut Vec<Finding>,
) -> bool {
    let mut all_good = true;

    for req in requirements {
        let Some(token) = enabled.find_prefixed(req.keyword) else {
            tracing::warn!(keyword = req.keyword, min = req.min_size, "key size statement missing");
            out.push(Finding {
                severity: Severity::Warning,
                check_id: ids::CHECK_FIPS_KEY_SIZES.to_string(),
                code: ids::CODE_KEY_SIZE_MISSING.to_string(),
                message: format!(
                    "Warning(FIPS): Missing statement '{}{}' to restrict key size.",
                    req.keyword, req.min_size
                ),
                help: Some(format!("Add '{}{}' to the enabled algorithms.", req.keyword, req.min_size)),
                fingerprint: None,
                data: json!({ "keyword": req.keyword, "min_size": req.min_size }),
            });
            all_good = false;
            continue;
        };

        let value = parse.parse(&token[req.keyword.len()..]);
        if value < u64::from(req.min_size) {
            tracing::warn!(
                keyword = req.keyword,
                value,
                min = req.min_size,
                "key size smaller than required"
            );
            out.push(Finding {
                severity: Severity::Warning,
                check_id: ids::CHECK_FIPS_KEY_SIZES.to_string(),
                code: ids::CODE_KEY_SIZE_TOO_SMALL.to_string(),
                message: format!(
                    "Warning(FIPS): Enabled key sizes {}{} is smaller than required {}.",
                    req.keyword, value, req.min_size
                ),
                help: Some(format!("Raise '{}' to at least {}.", req.keyword, req.min_size)),
                fingerprint: None,
                data: json!({
                    "keyword": req.keyword,
                    "value": value,
                    "min_size": req.min_size,
                    "token": token,
                }),
            });
            all_good = false;
            break;
        }
    }

    all_good
}
