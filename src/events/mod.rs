// Events module - type-indexed publish/subscribe bus
//
// Submodules:
// - listener: Reference-counted callback handles with stable identity
// - bus: EventBus resource and the GameEvent marker trait

mod bus;
mod listener;

pub use bus::{EventBus, GameEvent};
pub use listener::{Listener, ListenerKey};
