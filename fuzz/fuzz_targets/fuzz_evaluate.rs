//! Fuzz target for the compatibility evaluator.
//!
//! Goal: evaluation never panics, and the same inputs always produce the same report,
//! whichever key size parsing mode is used.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_evaluate
//! ```

#![no_main]

use arbitrary::Arbitrary;
use fipsguard_domain::{AlgorithmSet, AttributeSet, Evaluator, KeySizeParse};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct EvalInput {
    /// Comma-separated attribute list, as libtpms reports it.
    attributes: String,
    /// Comma-separated enabled algorithm list.
    algorithms: String,
    strict: bool,
}

fuzz_target!(|input: EvalInput| {
    if input.attributes.len() > 4096 || input.algorithms.len() > 4096 {
        return;
    }

    let attributes = AttributeSet::from_comma_list(&input.attributes);
    let algorithms = AlgorithmSet::from_comma_list(&input.algorithms);
    let parse = if input.strict {
        KeySizeParse::Strict
    } else {
        KeySizeParse::Trusting
    };
    let evaluator = Evaluator::builtin().with_key_size_parse(parse);

    let first = evaluator.evaluate(&attributes, &algorithms);
    let second = evaluator.evaluate(&attributes, &algorithms);
    assert_eq!(first.attributes_ok, second.attributes_ok);
    assert_eq!(first.algorithms_ok, second.algorithms_ok);
    assert_eq!(first.findings.len(), second.findings.len());

    // The default lists only run when no profile vouched for the algorithms.
    assert_eq!(first.algorithms_ok.is_some(), !first.attributes_ok);
});
