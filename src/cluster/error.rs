use thiserror::Error;

/// Errors surfaced by the clustering core.
///
/// Every failure is a caller configuration error detected before any
/// traversal starts; nothing here is transient or retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClusterError {
    /// A clustering parameter was rejected up front.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value, rendered for display
        value: String,
    },
}

impl ClusterError {
    pub(crate) fn invalid<T: std::fmt::Display>(name: &'static str, value: T) -> Self {
        ClusterError::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }
}
