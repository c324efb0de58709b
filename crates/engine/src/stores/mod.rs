//! Process-wide state stores: the acting identity and the current world.
//!
//! Both are explicit context objects threaded into use cases, never ambient
//! globals, so tests construct isolated instances.

mod session;
mod world_context;

pub use session::Session;
pub use world_context::WorldContext;
