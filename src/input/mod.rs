// Input module - polling-driven action state machine
//
// Submodules:
// - binding: ActionBinding, ActionInfo and related value types
// - sampler: InputSampler trait and the ButtonInput-backed sampler
// - actions: InputActions resource (binding registry + per-frame state machine)
// - queue: ActionQueue mailbox bridging action callbacks into systems
// - systems: Per-frame tick and default binding registration

mod actions;
mod binding;
mod queue;
mod sampler;
mod systems;

pub use actions::InputActions;
pub use binding::{ActionBinding, ActionInfo, ActionRecord, ActionState, InputKey};
pub use queue::ActionQueue;
pub use sampler::{ButtonInputSampler, InputSampler};
pub use systems::{register_default_actions, tick_input_actions};
