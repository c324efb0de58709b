//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{AuthPort, ComponentRepo, DraftPort, ProfileRepo, WorldRepo};
use crate::infrastructure::postgrest::PostgrestStore;
use crate::stores::{Session, WorldContext};
use crate::use_cases::{
    AuthOps, ComponentOps, DraftOps, LinkResolver, ProfileOps, WorldOps,
};

/// Main application state.
///
/// Holds the context stores and use cases. Passed to HTTP handlers via
/// Axum state. The concrete row store is kept alongside its port views so
/// auth flows can rotate its bearer token.
pub struct App {
    pub session: Session,
    pub world_context: WorldContext,
    pub store: Arc<PostgrestStore>,
    pub auth: AuthOps,
    pub worlds: WorldOps,
    pub components: ComponentOps,
    pub links: LinkResolver,
    pub drafts: DraftOps,
    pub profile: ProfileOps,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        store: Arc<PostgrestStore>,
        auth_port: Arc<dyn AuthPort>,
        draft_port: Arc<dyn DraftPort>,
    ) -> Self {
        let world_repo: Arc<dyn WorldRepo> = store.clone();
        let component_repo: Arc<dyn ComponentRepo> = store.clone();
        let profile_repo: Arc<dyn ProfileRepo> = store.clone();

        Self {
            session: Session::new(),
            world_context: WorldContext::new(),
            store,
            auth: AuthOps::new(auth_port.clone()),
            worlds: WorldOps::new(world_repo),
            components: ComponentOps::new(component_repo.clone()),
            links: LinkResolver::new(component_repo),
            drafts: DraftOps::new(draft_port),
            profile: ProfileOps::new(profile_repo, auth_port),
        }
    }
}
