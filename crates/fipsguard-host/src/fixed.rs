use crate::{HostFips, HostFipsError, HostFipsResult};
use std::sync::atomic::{AtomicBool, Ordering};

/// Host whose FIPS state is chosen by the caller.
///
/// A successful `disable_fips` clears the flag, so a later query reports the new state.
#[derive(Debug)]
pub struct FixedHost {
    enabled: AtomicBool,
    reject_with: Option<String>,
}

impl FixedHost {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            reject_with: None,
        }
    }

    /// FIPS enabled, and every disable request fails with `message`.
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self {
            enabled: AtomicBool::new(true),
            reject_with: Some(message.into()),
        }
    }
}

impl HostFips for FixedHost {
    fn provider_name(&self) -> &'static str {
        "fixed"
    }

    fn query_fips_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn disable_fips(&self) -> HostFipsResult<()> {
        if let Some(message) = &self.reject_with {
            tracing::error!(provider = self.provider_name(), %message, "FIPS disable rejected");
            return Err(HostFipsError::DisableRejected {
                message: message.clone(),
            });
        }
        self.enabled.store(false, Ordering::SeqCst);
        tracing::warn!(provider = self.provider_name(), "FIPS mode disabled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disable_clears_the_flag() {
        let host = FixedHost::new(true);
        assert!(host.query_fips_enabled());
        host.disable_fips().unwrap();
        assert!(!host.query_fips_enabled());
    }

    #[test]
    fn rejecting_host_keeps_fips_and_returns_message() {
        let host = FixedHost::rejecting("error:1C8000E9:Provider routines::fips module entering error state");
        let err = host.disable_fips().unwrap_err();
        assert_eq!(
            err.to_string(),
            "error:1C8000E9:Provider routines::fips module entering error state"
        );
        assert!(host.query_fips_enabled());
    }
}
