use fipsguard_types::Finding;

/// Result of evaluating requested attributes and enabled algorithms against the policy table.
#[derive(Clone, Debug, Default)]
pub struct DomainReport {
    /// Verdict of the profile-attribute evaluation.
    pub attributes_ok: bool,
    /// Verdict of the built-in default lists; `None` when not evaluated because the attributes
    /// already confirmed compatibility.
    pub algorithms_ok: Option<bool>,
    /// Policy-table attributes that were present in the request, in table order.
    pub matched_profiles: Vec<String>,
    pub findings: Vec<Finding>,
}

impl DomainReport {
    /// True if either evaluation confirmed the enabled algorithms are safe under host FIPS.
    pub fn is_compatible(&self) -> bool {
        self.attributes_ok || self.algorithms_ok.unwrap_or(false)
    }
}
