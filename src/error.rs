//! Error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrackError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("Rank {rank} ({activity}) stopped abnormally")]
    WorkerFailed { rank: usize, activity: String },
    #[error("Failed to start worker runtime: {0}")]
    Runtime(std::io::Error),
}
