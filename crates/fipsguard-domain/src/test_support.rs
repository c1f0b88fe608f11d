use crate::model::{AlgorithmSet, AttributeSet};
use fipsguard_types::Finding;

pub fn algos(tokens: &[&str]) -> AlgorithmSet {
    AlgorithmSet::new(tokens.iter().copied())
}

pub fn attrs(tokens: &[&str]) -> AttributeSet {
    AttributeSet::new(tokens.iter().copied())
}

pub fn codes(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.code.as_str()).collect()
}

pub fn messages(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.message.as_str()).collect()
}
