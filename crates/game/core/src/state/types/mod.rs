pub mod common;
pub mod equipment;
pub mod hero;

pub use common::{ClassId, HeroId, ItemId};
pub use equipment::{EquipmentSlot, HeroEquipment, HeroEquipmentBuilder};
pub use hero::HeroRecord;
