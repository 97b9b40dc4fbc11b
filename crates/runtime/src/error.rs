//! Unified error types surfaced by the runtime API.
//!
//! Attribute reads never fail; these errors only cover session construction.
//! Repository failures stay in [`crate::repository::RepositoryError`].
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("attribute service requires {0} oracle to be configured before building")]
    MissingOracles(&'static str),

    #[error("attribute service requires a hero repository before building")]
    MissingRepository,

    #[error("failed to load content")]
    Content(#[source] anyhow::Error),
}
