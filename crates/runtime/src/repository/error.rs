//! Error types raised by repository implementations.

use hero_core::HeroId;
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("hero repository lock was poisoned")]
    LockPoisoned,

    #[error("{0} not found")]
    HeroNotFound(HeroId),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
