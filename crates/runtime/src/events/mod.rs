//! Event bus connecting the hero repository, the attribute cache and UI
//! observers.
mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{AttributesEvent, HeroEvent};
