//! Host FIPS state accessors.
//!
//! One [`HostFips`] implementation per supported crypto provider, selected at build time:
//! - `openssl` feature, OpenSSL >= 3: `EVP_default_properties_*`
//! - `openssl` feature, older OpenSSL: `FIPS_mode` / `FIPS_mode_set`
//! - otherwise: [`NoopHost`], for hosts without a FIPS mode
//!
//! [`FixedHost`] reports a caller-chosen state and is used for dry runs and tests.

#![cfg_attr(not(feature = "openssl"), forbid(unsafe_code))]

mod error;
mod fixed;
mod noop;
#[cfg(feature = "openssl")]
mod ossl;

pub use error::{HostFipsError, HostFipsResult};
pub use fixed::FixedHost;
pub use noop::NoopHost;
#[cfg(feature = "openssl")]
pub use ossl::OpensslHost;

/// Process-wide FIPS enforcement flag of the host crypto provider.
///
/// `disable_fips` changes global state. Call it once, from a single thread, during startup.
pub trait HostFips: Send + Sync {
    /// Short provider name for logs and reports.
    fn provider_name(&self) -> &'static str;

    /// True iff the host enforces FIPS mode.
    fn query_fips_enabled(&self) -> bool;

    /// Turn off host FIPS enforcement.
    fn disable_fips(&self) -> HostFipsResult<()>;
}

/// The accessor for the provider this crate was built against.
pub fn default_host() -> Box<dyn HostFips> {
    #[cfg(feature = "openssl")]
    {
        Box::new(OpensslHost::new())
    }
    #[cfg(not(feature = "openssl"))]
    {
        Box::new(NoopHost)
    }
}

#[cfg(all(test, not(feature = "openssl")))]
mod tests {
    use super::*;

    #[test]
    fn default_host_without_provider_is_noop() {
        let host = default_host();
        assert_eq!(host.provider_name(), "none");
        assert!(!host.query_fips_enabled());
        assert_eq!(host.disable_fips(), Ok(()));
    }
}
