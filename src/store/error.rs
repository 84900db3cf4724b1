use thiserror::Error;

/// Errors from the submission store, collapsed into the three kinds the
/// dashboard reacts to. Transport and configuration problems both surface as
/// `Unavailable`; the store never propagates a raw client error.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("submission store is not configured or unreachable")]
    Unavailable,

    #[error("submission store rejected the request: {0}")]
    RemoteRejected(String),

    #[error("submission not found: {0}")]
    NotFound(String),
}
