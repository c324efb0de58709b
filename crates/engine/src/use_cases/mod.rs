//! Use cases: the operations the API exposes, one module per concern.

pub mod auth;
pub mod components;
pub mod drafts;
pub mod links;
pub mod profile;
pub mod worlds;

pub use auth::AuthOps;
pub use components::{ComponentError, ComponentOps};
pub use drafts::DraftOps;
pub use links::{LinkCandidate, LinkResolver};
pub use profile::{ProfileError, ProfileOps};
pub use worlds::{WorldError, WorldOps};
