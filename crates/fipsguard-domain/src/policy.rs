//! Compiled-in FIPS policy table.

/// Profile attribute that asks the TPM library to disable what host FIPS mode cannot run.
pub const FIPS_HOST_ATTRIBUTE: &str = "fips-host";

/// Algorithms OpenSSL rejects in FIPS mode that a TPM 2 profile may enable.
pub const FIPS_DISABLED_ALGORITHMS: &[&str] = &["camellia", "rsaes", "tdes"];

/// Minimum key sizes accepted by OpenSSL in FIPS mode.
pub const FIPS_KEY_SIZES: &[KeySizeRequirement] = &[KeySizeRequirement {
    keyword: "ecc-min-size=",
    min_size: 224,
}];

/// Profile attributes that are known to disable every algorithm in their lists.
pub const POLICY_TABLE: &[PolicyEntry] = &[PolicyEntry {
    attribute: FIPS_HOST_ATTRIBUTE,
    disallowed: FIPS_DISABLED_ALGORITHMS,
    key_sizes: FIPS_KEY_SIZES,
}];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySizeRequirement {
    /// Token prefix, including the `=`.
    pub keyword: &'static str,
    pub min_size: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicyEntry {
    pub attribute: &'static str,
    pub disallowed: &'static [&'static str],
    pub key_sizes: &'static [KeySizeRequirement],
}

/// How the numeric suffix of a key-size statement is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeySizeParse {
    /// `strtoul`-style: skip leading whitespace and an optional `+`, read digits up to the first
    /// non-digit. No digits yields 0. The producer is trusted to emit well-formed values.
    #[default]
    Trusting,
    /// The whole suffix must be ASCII digits; anything else yields 0.
    Strict,
}

impl KeySizeParse {
    /// Parse a key-size suffix. Never fails: unreadable input is 0, overflow saturates.
    pub fn parse(self, text: &str) -> u64 {
        match self {
            KeySizeParse::Trusting => {
                let text = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
                let text = text.strip_prefix('+').unwrap_or(text);
                let end = text
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(text.len());
                digits_to_u64(&text[..end])
            }
            KeySizeParse::Strict => {
                if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
                    digits_to_u64(text)
                } else {
                    0
                }
            }
        }
    }
}

fn digits_to_u64(digits: &str) -> u64 {
    digits.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trusting_parse_reads_leading_digits() {
        let p = KeySizeParse::Trusting;
        assert_eq!(p.parse("224"), 224);
        assert_eq!(p.parse("256bits"), 256);
        assert_eq!(p.parse("  +384"), 384);
        assert_eq!(p.parse(""), 0);
        assert_eq!(p.parse("abc"), 0);
        assert_eq!(p.parse("-5"), 0);
    }

    #[test]
    fn trusting_parse_saturates_on_overflow() {
        assert_eq!(
            KeySizeParse::Trusting.parse("99999999999999999999999"),
            u64::MAX
        );
    }

    #[test]
    fn strict_parse_rejects_trailing_garbage() {
        let p = KeySizeParse::Strict;
        assert_eq!(p.parse("256"), 256);
        assert_eq!(p.parse("256bits"), 0);
        assert_eq!(p.parse(" 256"), 0);
        assert_eq!(p.parse(""), 0);
    }

    #[test]
    fn builtin_table_has_fips_host_entry() {
        assert_eq!(POLICY_TABLE.len(), 1);
        let entry = &POLICY_TABLE[0];
        assert_eq!(entry.attribute, "fips-host");
        assert_eq!(entry.disallowed, &["camellia", "rsaes", "tdes"]);
        assert_eq!(entry.key_sizes[0].keyword, "ecc-min-size=");
        assert_eq!(entry.key_sizes[0].min_size, 224);
    }
}
