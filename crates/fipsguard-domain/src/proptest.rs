//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Exact-match containment of disallowed algorithms
//! - Key-size threshold and scan-order behaviour
//! - Determinism of repeated evaluation

use crate::checks::{algorithm_set_contains_disallowed, key_sizes_satisfied};
use crate::engine::{Evaluator, evaluate};
use crate::model::{AlgorithmSet, AttributeSet};
use crate::policy::{FIPS_DISABLED_ALGORITHMS, KeySizeParse, KeySizeRequirement};
use fipsguard_types::ids;
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Algorithm names that are never on the built-in disallowed list.
fn arb_clean_algorithm() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,15}")
        .unwrap()
        .prop_filter("must not be disallowed", |s| {
            !FIPS_DISABLED_ALGORITHMS.contains(&s.as_str()) && !s.contains('=')
        })
}

fn arb_disallowed() -> impl Strategy<Value = String> {
    prop::sample::select(FIPS_DISABLED_ALGORITHMS).prop_map(str::to_string)
}

fn arb_tokens() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            3 => arb_clean_algorithm(),
            1 => arb_disallowed(),
            1 => (0u32..1024).prop_map(|v| format!("ecc-min-size={v}")),
        ],
        0..12,
    )
}

const ECC_224: &[KeySizeRequirement] = &[KeySizeRequirement {
    keyword: "ecc-min-size=",
    min_size: 224,
}];

const ECC_THEN_RSA: &[KeySizeRequirement] = &[
    KeySizeRequirement {
        keyword: "ecc-min-size=",
        min_size: 224,
    },
    KeySizeRequirement {
        keyword: "rsa-min-size=",
        min_size: 2048,
    },
];

proptest! {
    #[test]
    fn enabled_disallowed_algorithm_is_always_found(
        mut clean in prop::collection::vec(arb_clean_algorithm(), 0..8),
        bad in arb_disallowed(),
        pos in any::<prop::sample::Index>(),
    ) {
        let at = pos.index(clean.len() + 1);
        clean.insert(at, bad.clone());
        let enabled = AlgorithmSet::new(clean);
        let mut out = Vec::new();

        let list = [bad.as_str()];
        prop_assert!(algorithm_set_contains_disallowed(&enabled, &list, &mut out));
        prop_assert_eq!(out.len(), 1);
        prop_assert_eq!(
            &out[0].message,
            &format!("Warning(FIPS): Enable algorithms contain '{bad}'.")
        );
    }

    #[test]
    fn clean_algorithms_are_never_flagged(
        clean in prop::collection::vec(arb_clean_algorithm(), 0..12),
    ) {
        let enabled = AlgorithmSet::new(clean);
        let mut out = Vec::new();
        prop_assert!(!algorithm_set_contains_disallowed(&enabled, FIPS_DISABLED_ALGORITHMS, &mut out));
        prop_assert!(out.is_empty());
    }

    #[test]
    fn key_size_threshold_is_inclusive(value in 0u64..100_000) {
        let enabled = AlgorithmSet::new([format!("ecc-min-size={value}")]);
        let mut out = Vec::new();
        let ok = key_sizes_satisfied(&enabled, ECC_224, KeySizeParse::Trusting, &mut out);
        prop_assert_eq!(ok, value >= 224);
        prop_assert_eq!(out.is_empty(), ok);
    }

    #[test]
    fn too_small_key_size_stops_before_later_requirements(value in 0u32..224) {
        let enabled = AlgorithmSet::new([format!("ecc-min-size={value}")]);
        let mut out = Vec::new();
        prop_assert!(!key_sizes_satisfied(&enabled, ECC_THEN_RSA, KeySizeParse::Trusting, &mut out));
        prop_assert_eq!(out.len(), 1);
        prop_assert_eq!(out[0].code.as_str(), ids::CODE_KEY_SIZE_TOO_SMALL);
    }

    #[test]
    fn missing_key_size_continues_to_later_requirements(value in 0u32..2048) {
        let enabled = AlgorithmSet::new([format!("rsa-min-size={value}")]);
        let mut out = Vec::new();
        prop_assert!(!key_sizes_satisfied(&enabled, ECC_THEN_RSA, KeySizeParse::Trusting, &mut out));
        prop_assert_eq!(out.len(), 2);
        prop_assert_eq!(out[0].code.as_str(), ids::CODE_KEY_SIZE_MISSING);
        prop_assert_eq!(out[1].code.as_str(), ids::CODE_KEY_SIZE_TOO_SMALL);
    }

    #[test]
    fn evaluation_is_deterministic(
        tokens in arb_tokens(),
        with_profile in any::<bool>(),
    ) {
        let attributes = if with_profile {
            AttributeSet::new(["fips-host"])
        } else {
            AttributeSet::default()
        };
        let enabled = AlgorithmSet::new(tokens);

        let first = evaluate(&attributes, &enabled);
        let second = evaluate(&attributes, &enabled);
        prop_assert_eq!(first.attributes_ok, second.attributes_ok);
        prop_assert_eq!(first.algorithms_ok, second.algorithms_ok);
        prop_assert_eq!(first.findings, second.findings);
    }

    #[test]
    fn fips_host_profile_agrees_with_default_lists(tokens in arb_tokens()) {
        // The built-in profile uses the default lists, so both verdicts must agree.
        let enabled = AlgorithmSet::new(tokens);
        let evaluator = Evaluator::builtin();
        let mut a = Vec::new();
        let mut b = Vec::new();
        let via_profile =
            evaluator.attributes_disable_bad_algos(&AttributeSet::new(["fips-host"]), &enabled, &mut a);
        let via_defaults = evaluator.algorithms_are_disabled(&enabled, &mut b);
        prop_assert_eq!(via_profile, via_defaults);
        prop_assert_eq!(a.len(), b.len());
    }
}
