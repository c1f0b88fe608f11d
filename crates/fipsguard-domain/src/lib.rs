//! Pure policy evaluation (no IO).
//!
//! Input: requested profile attributes and the enabled algorithm tokens reported by the TPM
//! library.
//! Output: a boolean verdict per evaluation plus findings describing every detected problem.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;

mod engine;
mod fingerprint;
pub mod checks;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use checks::{algorithm_set_contains_disallowed, key_sizes_satisfied};
pub use engine::{Evaluator, algorithms_are_disabled, attributes_disable_bad_algos, evaluate};
pub use model::{AlgorithmSet, AttributeSet};
pub use policy::{KeySizeParse, KeySizeRequirement, PolicyEntry};
pub use report::DomainReport;
