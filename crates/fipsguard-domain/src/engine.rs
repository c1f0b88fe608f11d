use crate::checks;
use crate::fingerprint::fingerprint_for_finding;
use crate::model::{AlgorithmSet, AttributeSet};
use crate::policy::{
    FIPS_DISABLED_ALGORITHMS, FIPS_KEY_SIZES, KeySizeParse, KeySizeRequirement, POLICY_TABLE,
    PolicyEntry,
};
use crate::report::DomainReport;
use fipsguard_types::Finding;
use serde_json::Value;

const DEFAULT_PROFILE: &str = "default";

/// Evaluates enabled algorithms against a policy table and a pair of default lists.
#[derive(Clone, Copy, Debug)]
pub struct Evaluator {
    table: &'static [PolicyEntry],
    disallowed: &'static [&'static str],
    key_sizes: &'static [KeySizeRequirement],
    parse: KeySizeParse,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Evaluator {
    /// The compiled-in FIPS policy.
    pub const fn builtin() -> Self {
        Self {
            table: POLICY_TABLE,
            disallowed: FIPS_DISABLED_ALGORITHMS,
            key_sizes: FIPS_KEY_SIZES,
            parse: KeySizeParse::Trusting,
        }
    }

    pub const fn new(
        table: &'static [PolicyEntry],
        disallowed: &'static [&'static str],
        key_sizes: &'static [KeySizeRequirement],
    ) -> Self {
        Self {
            table,
            disallowed,
            key_sizes,
            parse: KeySizeParse::Trusting,
        }
    }

    pub const fn with_key_size_parse(mut self, parse: KeySizeParse) -> Self {
        self.parse = parse;
        self
    }

    /// True if none of the default disallowed algorithms is enabled and every default key-size
    /// requirement is met. A `false` result means host FIPS mode would break the TPM.
    pub fn algorithms_are_disabled(&self, enabled: &AlgorithmSet, out: &mut Vec<Finding>) -> bool {
        let start = out.len();
        let ok = checks::run_all(enabled, self.disallowed, self.key_sizes, self.parse, out);
        tag_findings(&mut out[start..], DEFAULT_PROFILE);
        tracing::debug!(ok, "default algorithm lists evaluated");
        ok
    }

    /// True if at least one policy-table attribute is requested and every requested entry's
    /// lists pass. The first failing entry ends the scan. No requested entry yields `false`.
    pub fn attributes_disable_bad_algos(
        &self,
        attributes: &AttributeSet,
        enabled: &AlgorithmSet,
        out: &mut Vec<Finding>,
    ) -> bool {
        self.attributes_with_matches(attributes, enabled, out).0
    }

    fn attributes_with_matches(
        &self,
        attributes: &AttributeSet,
        enabled: &AlgorithmSet,
        out: &mut Vec<Finding>,
    ) -> (bool, Vec<String>) {
        let mut ok = false;
        let mut matched = Vec::new();

        for entry in self.table {
            if !attributes.contains(entry.attribute) {
                continue;
            }
            matched.push(entry.attribute.to_string());

            let start = out.len();
            ok = checks::run_all(enabled, entry.disallowed, entry.key_sizes, self.parse, out);
            tag_findings(&mut out[start..], entry.attribute);
            tracing::debug!(profile = entry.attribute, ok, "profile lists evaluated");
            if !ok {
                break;
            }
        }

        (ok, matched)
    }

    /// Run the profile evaluation and, only if it does not confirm compatibility, the default
    /// lists. Findings from both are collected in evaluation order.
    pub fn evaluate(&self, attributes: &AttributeSet, enabled: &AlgorithmSet) -> DomainReport {
        let mut findings = Vec::new();

        let (attributes_ok, matched_profiles) =
            self.attributes_with_matches(attributes, enabled, &mut findings);
        let algorithms_ok = if attributes_ok {
            None
        } else {
            Some(self.algorithms_are_disabled(enabled, &mut findings))
        };

        DomainReport {
            attributes_ok,
            algorithms_ok,
            matched_profiles,
            findings,
        }
    }
}

/// [`Evaluator::algorithms_are_disabled`] with the built-in policy.
pub fn algorithms_are_disabled(enabled: &AlgorithmSet, out: &mut Vec<Finding>) -> bool {
    Evaluator::builtin().algorithms_are_disabled(enabled, out)
}

/// [`Evaluator::attributes_disable_bad_algos`] with the built-in policy.
pub fn attributes_disable_bad_algos(
    attributes: &AttributeSet,
    enabled: &AlgorithmSet,
    out: &mut Vec<Finding>,
) -> bool {
    Evaluator::builtin().attributes_disable_bad_algos(attributes, enabled, out)
}

/// [`Evaluator::evaluate`] with the built-in policy.
pub fn evaluate(attributes: &AttributeSet, enabled: &AlgorithmSet) -> DomainReport {
    Evaluator::builtin().evaluate(attributes, enabled)
}

fn tag_findings(findings: &mut [Finding], profile: &str) {
    for f in findings {
        let subject = ["algorithm", "keyword"]
            .iter()
            .find_map(|k| f.data.get(*k).and_then(Value::as_str))
            .unwrap_or_default()
            .to_string();
        f.fingerprint = Some(fingerprint_for_finding(&f.check_id, &f.code, profile, &subject));
        if let Value::Object(map) = &mut f.data {
            map.insert("profile".to_string(), Value::from(profile));
        }
    }
}
