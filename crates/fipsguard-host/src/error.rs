use thiserror::Error;

/// Failures of the host FIPS state accessor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostFipsError {
    /// The crypto provider refused to leave FIPS mode.
    #[error("{message}")]
    DisableRejected {
        /// Provider error text.
        message: String,
    },
}

pub type HostFipsResult<T> = Result<T, HostFipsError>;
