use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a policy finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - profile attribute (`default` for the built-in lists)
/// - subject (algorithm name or key-size keyword)
pub fn fingerprint_for_finding(check_id: &str, code: &str, profile: &str, subject: &str) -> String {
    let canonical = [check_id, code, profile, subject].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
