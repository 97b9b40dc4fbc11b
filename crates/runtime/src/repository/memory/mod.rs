//! In-memory repository implementations for tests and local runs.

mod heroes;

pub use heroes::InMemoryHeroRepo;
