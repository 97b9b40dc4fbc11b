//! Repository layer for mutable hero data
//!
//! Repositories handle data that CHANGES during play: base stats move with
//! leveling, equipment moves with every equip. Static content (items, class
//! constants) is handled by Oracles, not Repositories.

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryHeroRepo;
pub use traits::HeroRepository;
