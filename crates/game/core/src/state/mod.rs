//! Authoritative hero data as the persistence layer hands it to this crate.
//!
//! Records here are plain values: the runtime clones them out of its hero
//! repository and feeds them to the stat pipeline. Nothing in this module
//! mutates attributes; equipment and base stats change only through the
//! repository, which is responsible for announcing those changes.
pub mod types;

pub use types::{
    ClassId, EquipmentSlot, HeroEquipment, HeroEquipmentBuilder, HeroId, HeroRecord, ItemId,
};
