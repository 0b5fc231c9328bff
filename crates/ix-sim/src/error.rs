use ix_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Parameters failed validation; the engine refuses to run.
    #[error("simulation is NOT set up properly: {0}")]
    SetupInvalid(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
