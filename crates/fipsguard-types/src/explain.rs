//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after enabled-algorithm lists.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Input that would trigger a finding.
    pub before: &'static str,
    /// Input that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_FIPS_DISALLOWED_ALGORITHMS => Some(explain_disallowed_algorithms()),
        ids::CHECK_FIPS_KEY_SIZES => Some(explain_key_sizes()),
        ids::CHECK_FIPS_HOST => Some(explain_host()),

        // Codes
        ids::CODE_DISALLOWED_ALGORITHM => Some(explain_disallowed_algorithm()),
        ids::CODE_KEY_SIZE_TOO_SMALL => Some(explain_key_size_too_small()),
        ids::CODE_KEY_SIZE_MISSING => Some(explain_key_size_missing()),
        ids::CODE_HOST_DISABLE_FAILED => Some(explain_host_disable_failed()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_FIPS_DISALLOWED_ALGORITHMS,
        ids::CHECK_FIPS_KEY_SIZES,
        ids::CHECK_FIPS_HOST,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_DISALLOWED_ALGORITHM,
        ids::CODE_KEY_SIZE_TOO_SMALL,
        ids::CODE_KEY_SIZE_MISSING,
        ids::CODE_HOST_DISABLE_FAILED,
    ]
}

// --- Check-level explanations ---

fn explain_disallowed_algorithms() -> Explanation {
    Explanation {
        title: "Disallowed Algorithms",
        description: "\
Detects enabled algorithms that a host in FIPS mode refuses to run.

When OpenSSL enforces FIPS mode, algorithms such as Camellia, RSAES-PKCS1-v1_5
and Triple-DES are rejected. A TPM that still advertises them fails its
self-tests the first time one of them is exercised.",
        remediation: "\
Disable the listed algorithm in the TPM profile, or select a profile that
carries the `fips-host` attribute so that the library disables it for you.",
        examples: ExamplePair {
            before: "rsa,rsaes,tdes,aes,ecc-min-size=224",
            after: "rsa,aes,ecc-min-size=224",
        },
    }
}

fn explain_key_sizes() -> Explanation {
    Explanation {
        title: "Minimum Key Sizes",
        description: "\
Verifies that the enabled algorithm list restricts key sizes to what the host
FIPS provider accepts.

Each requirement names a keyword prefix (for example `ecc-min-size=`) and a
minimum value. The statement must be present and its value must be at least
the minimum.",
        remediation: "\
Add or raise the key-size statement in the profile, e.g. `ecc-min-size=224`.",
        examples: ExamplePair {
            before: "rsa,ecc,ecc-min-size=192",
            after: "rsa,ecc,ecc-min-size=224",
        },
    }
}

fn explain_host() -> Explanation {
    Explanation {
        title: "Host FIPS Mode",
        description: "\
Reports problems changing the host-wide FIPS enforcement flag.

When the enabled algorithms are not compatible with the host's FIPS mode and
`--mode apply` is used, fipsguard asks the crypto provider to turn FIPS
enforcement off for this process.",
        remediation: "\
Check that the OpenSSL default provider is available, or switch the TPM to a
profile that is compatible with FIPS mode so no change is needed.",
        examples: ExamplePair {
            before: "mode = \"apply\"  # provider refuses to leave FIPS mode",
            after: "attributes = [\"fips-host\"]",
        },
    }
}

// --- Code-level explanations ---

fn explain_disallowed_algorithm() -> Explanation {
    Explanation {
        title: "Disallowed Algorithm Enabled",
        description: "\
The enabled algorithm list contains an algorithm that is disabled under host
FIPS mode. Only the first such algorithm is reported.",
        remediation: "\
Remove the algorithm from the enabled list.",
        examples: ExamplePair {
            before: "camellia,aes",
            after: "aes",
        },
    }
}

fn explain_key_size_too_small() -> Explanation {
    Explanation {
        title: "Key Size Too Small",
        description: "\
A key-size statement is present but its value is below the required minimum.
Evaluation of further key-size requirements stops at the first violation.",
        remediation: "\
Raise the value to at least the required minimum.",
        examples: ExamplePair {
            before: "ecc-min-size=128",
            after: "ecc-min-size=256",
        },
    }
}

fn explain_key_size_missing() -> Explanation {
    Explanation {
        title: "Key Size Statement Missing",
        description: "\
No enabled token starts with the required keyword, so the key size is not
restricted at all. Remaining requirements are still evaluated.",
        remediation: "\
Add the statement with at least the required minimum.",
        examples: ExamplePair {
            before: "rsa,ecc",
            after: "rsa,ecc,ecc-min-size=224",
        },
    }
}

fn explain_host_disable_failed() -> Explanation {
    Explanation {
        title: "Host FIPS Disable Failed",
        description: "\
The crypto provider rejected the request to disable FIPS mode. The provider's
error text is included in the finding.",
        remediation: "\
Inspect the provider error. Without a successful disable the TPM will hit
self-test failures for the disallowed algorithms.",
        examples: ExamplePair {
            before: "Failed to disable OpenSSL FIPS mode: <provider error>",
            after: "Warning: Disabled OpenSSL FIPS mode",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_identifier_has_an_explanation() {
        for id in all_check_ids().iter().chain(all_codes()) {
            assert!(lookup_explanation(id).is_some(), "missing explanation for {id}");
        }
    }

    #[test]
    fn unknown_identifier_is_none() {
        assert!(lookup_explanation("fips.nope").is_none());
    }
}
