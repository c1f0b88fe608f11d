use crate::{HostFips, HostFipsResult};

/// Host without a FIPS mode: never enabled, disabling always succeeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl HostFips for NoopHost {
    fn provider_name(&self) -> &'static str {
        "none"
    }

    fn query_fips_enabled(&self) -> bool {
        false
    }

    fn disable_fips(&self) -> HostFipsResult<()> {
        Ok(())
    }
}
