use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwirlError {
    #[error("Unable to allocate storage for {} particles", .count)]
    ParticleAllocationFailed {
        count: usize,
        #[source]
        source: TryReserveError,
    },

    #[error(transparent)]
    TerminalIoError(#[from] std::io::Error),
}
