//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_FIPS_DISALLOWED_ALGORITHMS: &str = "fips.disallowed_algorithms";
pub const CHECK_FIPS_KEY_SIZES: &str = "fips.key_sizes";
pub const CHECK_FIPS_HOST: &str = "fips.host";

// Codes: fips.disallowed_algorithms
pub const CODE_DISALLOWED_ALGORITHM: &str = "disallowed_algorithm";

// Codes: fips.key_sizes
pub const CODE_KEY_SIZE_TOO_SMALL: &str = "key_size_too_small";
pub const CODE_KEY_SIZE_MISSING: &str = "key_size_missing";

// Codes: fips.host
pub const CODE_HOST_DISABLE_FAILED: &str = "host_disable_failed";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
