use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Failures that stop the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to seed store: {0}")]
    Seed(#[from] FrameworkError),
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}
