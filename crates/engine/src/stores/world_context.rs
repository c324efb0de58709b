//! Current world selection.
//!
//! In-flight fetches are not cancellable, so a world switch can race a
//! response that belongs to the previous selection. The epoch counter is
//! the liveness guard: callers capture the epoch before an async call and
//! drop the result if the context has moved on.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use worldsmith_domain::{World, WorldId};

#[derive(Default)]
pub struct WorldContext {
    current: RwLock<Option<World>>,
    epoch: AtomicU64,
}

impl WorldContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<World> {
        self.current.read().ok().and_then(|guard| guard.clone())
    }

    pub fn current_id(&self) -> Option<WorldId> {
        self.current
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|world| world.id))
    }

    /// Switch the selection, invalidating outstanding work. Returns the new
    /// epoch.
    pub fn set_current(&self, world: Option<World>) -> u64 {
        if let Ok(mut guard) = self.current.write() {
            *guard = world;
        }
        self.epoch.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Refresh the stored copy after an update without invalidating
    /// outstanding work. A no-op unless `world` is the current selection.
    pub fn sync_current(&self, world: &World) {
        if let Ok(mut guard) = self.current.write() {
            if guard.as_ref().is_some_and(|current| current.id == world.id) {
                *guard = Some(world.clone());
            }
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Whether a result captured at `epoch` still belongs to the current
    /// selection.
    pub fn is_live(&self, epoch: u64) -> bool {
        self.epoch() == epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldsmith_domain::UserId;

    fn test_world(name: &str) -> World {
        World::new(UserId::new(), name)
    }

    #[test]
    fn switching_worlds_bumps_the_epoch() {
        let ctx = WorldContext::new();
        let before = ctx.epoch();

        ctx.set_current(Some(test_world("Aethermoor")));
        assert_eq!(ctx.epoch(), before + 1);
        assert_eq!(ctx.current().map(|w| w.name), Some("Aethermoor".into()));
    }

    #[test]
    fn stale_epochs_are_detected_after_a_switch() {
        let ctx = WorldContext::new();
        ctx.set_current(Some(test_world("Aethermoor")));

        // A fetch begins against the first selection...
        let captured = ctx.epoch();
        assert!(ctx.is_live(captured));

        // ...then the user switches worlds before it lands.
        ctx.set_current(Some(test_world("Vhendrel")));
        assert!(!ctx.is_live(captured));
    }

    #[test]
    fn sync_current_only_touches_the_selected_world() {
        let ctx = WorldContext::new();
        let mut world = test_world("Aethermoor");
        ctx.set_current(Some(world.clone()));
        let epoch = ctx.epoch();

        world.description = "Renamed oceans.".into();
        ctx.sync_current(&world);
        assert_eq!(
            ctx.current().map(|w| w.description),
            Some("Renamed oceans.".into())
        );
        // An in-place refresh is not a selection change.
        assert_eq!(ctx.epoch(), epoch);

        let other = test_world("Vhendrel");
        ctx.sync_current(&other);
        assert_eq!(ctx.current().map(|w| w.name), Some("Aethermoor".into()));
    }
}
