use shared::error::InitializationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MainError {
    #[error(transparent)]
    Init(#[from] InitializationError),
    #[error("failed to build plausibility oracle client: {0}")]
    OracleClient(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
