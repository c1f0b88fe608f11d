use crate::model::AlgorithmSet;
use crate::policy::{KeySizeParse, KeySizeRequirement};
use fipsguard_types::Finding;

mod disallowed_algorithms;
mod key_sizes;


pub use disallowed_algorithms::run as algorithm_set_contains_disallowed;
pub use key_sizes::run as key_sizes_satisfied;

/// Both checks against one pair of lists. True only if no disallowed algorithm is enabled and
/// every key-size requirement is met. Both checks always run so both report their findings.
pub fn run_all(
    enabled: &AlgorithmSet,
    disallowed: &[&str],
    key_sizes: &[KeySizeRequirement],
    parse: KeySizeParse,
    out: &mut Vec<Finding>,
) -> bool {
    let found_disallowed = algorithm_set_contains_disallowed(enabled, disallowed, out);
    let sizes_ok = key_sizes_satisfied(enabled, key_sizes, parse, out);
    !found_disallowed && sizes_ok
}
