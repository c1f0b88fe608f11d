use crate::{HostFips, HostFipsError, HostFipsResult};
use openssl::error::ErrorStack;
use std::os::raw::c_int;

/// FIPS mode of the linked OpenSSL.
///
/// OpenSSL >= 3 keeps the flag in the default properties of the default library context; older
/// releases expose the process-wide `FIPS_mode` switch.
#[derive(Debug)]
pub struct OpensslHost {
    _priv: (),
}

impl Default for OpensslHost {
    fn default() -> Self {
        Self::new()
    }
}

impl OpensslHost {
    pub fn new() -> Self {
        openssl::init();
        Self { _priv: () }
    }
}

#[cfg(ossl300)]
fn fips_mode() -> c_int {
    // SAFETY: a null library context selects the default one.
    unsafe { openssl_sys::EVP_default_properties_is_fips_enabled(std::ptr::null_mut()) }
}

#[cfg(ossl300)]
fn set_fips_mode(on: bool) -> c_int {
    // SAFETY: a null library context selects the default one.
    unsafe {
        openssl_sys::EVP_default_properties_enable_fips(std::ptr::null_mut(), c_int::from(on))
    }
}

#[cfg(not(ossl300))]
fn fips_mode() -> c_int {
    // SAFETY: no arguments; reads a global flag.
    unsafe { openssl_sys::FIPS_mode() }
}

#[cfg(not(ossl300))]
fn set_fips_mode(on: bool) -> c_int {
    // SAFETY: plain integer argument.
    unsafe { openssl_sys::FIPS_mode_set(c_int::from(on)) }
}

impl HostFips for OpensslHost {
    fn provider_name(&self) -> &'static str {
        if cfg!(ossl300) { "openssl3" } else { "openssl" }
    }

    fn query_fips_enabled(&self) -> bool {
        fips_mode() != 0
    }

    fn disable_fips(&self) -> HostFipsResult<()> {
        if set_fips_mode(false) == 1 {
            tracing::warn!(provider = self.provider_name(), "FIPS mode disabled");
            return Ok(());
        }

        let stack = ErrorStack::get();
        let message = match stack.errors().first() {
            Some(err) => err.to_string(),
            None => "unknown error".to_string(),
        };
        tracing::error!(provider = self.provider_name(), %message, "FIPS disable rejected");
        Err(HostFipsError::DisableRejected { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_name_follows_linked_version() {
        let host = OpensslHost::new();
        let expected = if cfg!(ossl300) { "openssl3" } else { "openssl" };
        assert_eq!(host.provider_name(), expected);
    }

    #[test]
    fn disable_on_host_without_fips_keeps_it_off() {
        let host = OpensslHost::new();
        if host.query_fips_enabled() {
            // Leaving FIPS mode is process-wide; only run where it is already off.
            return;
        }
        assert_eq!(host.disable_fips(), Ok(()));
        assert!(!host.query_fips_enabled());
    }

    #[test]
    fn default_host_is_openssl() {
        assert_eq!(
            crate::default_host().provider_name(),
            OpensslHost::new().provider_name()
        );
    }
}
