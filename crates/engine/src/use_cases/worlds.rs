//! World registry: world CRUD plus the current-world selection rules.

use std::sync::Arc;

use serde_json::json;

use worldsmith_domain::{World, WorldId, WorldPatch};

use crate::infrastructure::ports::{RepoError, WorldRepo};
use crate::stores::{Session, WorldContext};

pub struct WorldOps {
    worlds: Arc<dyn WorldRepo>,
}

#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl WorldOps {
    pub fn new(worlds: Arc<dyn WorldRepo>) -> Self {
        Self { worlds }
    }

    /// List the user's worlds, newest first. When nothing is selected yet
    /// and the list is non-empty, the first world becomes current.
    pub async fn refresh(
        &self,
        session: &Session,
        ctx: &WorldContext,
    ) -> Result<Vec<World>, WorldError> {
        let user = session.require_user().map_err(|_| WorldError::NotAuthenticated)?;
        let worlds = self.worlds.list(user).await?;

        match ctx.current_id() {
            None => {
                if let Some(first) = worlds.first() {
                    ctx.set_current(Some(first.clone()));
                }
            }
            Some(current_id) => {
                if let Some(current) = worlds.iter().find(|world| world.id == current_id) {
                    ctx.sync_current(current);
                }
            }
        }

        Ok(worlds)
    }

    /// Create a world for the acting user; the new world becomes current.
    ///
    /// `user_id` is injected here, overwriting anything the caller put in
    /// the patch.
    pub async fn create(
        &self,
        session: &Session,
        ctx: &WorldContext,
        fields: WorldPatch,
    ) -> Result<World, WorldError> {
        let user = session.require_user().map_err(|_| WorldError::NotAuthenticated)?;

        let mut record = serde_json::to_value(&fields)
            .map_err(|e| RepoError::Serialization(e.to_string()))?;
        if let Some(map) = record.as_object_mut() {
            map.insert("user_id".to_string(), json!(user));
        }

        let world = self.worlds.create(record).await?;
        ctx.set_current(Some(world.clone()));
        Ok(world)
    }

    /// Partial update; a current-world update refreshes the context copy.
    pub async fn update(
        &self,
        ctx: &WorldContext,
        id: WorldId,
        fields: WorldPatch,
    ) -> Result<World, WorldError> {
        let record = serde_json::to_value(&fields)
            .map_err(|e| RepoError::Serialization(e.to_string()))?;
        let world = self.worlds.update(id, record).await?;
        ctx.sync_current(&world);
        Ok(world)
    }

    /// Delete a world. Deleting the current world moves the selection to
    /// the first remaining world in list order, or clears it.
    pub async fn delete(
        &self,
        session: &Session,
        ctx: &WorldContext,
        id: WorldId,
    ) -> Result<(), WorldError> {
        let user = session.require_user().map_err(|_| WorldError::NotAuthenticated)?;
        self.worlds.delete(id).await?;
        tracing::debug!(world_id = %id, "deleted world");

        if ctx.current_id() == Some(id) {
            let remaining = self.worlds.list(user).await?;
            ctx.set_current(remaining.into_iter().next());
        }
        Ok(())
    }

    /// Make an owned world the current selection.
    pub async fn select(
        &self,
        session: &Session,
        ctx: &WorldContext,
        id: WorldId,
    ) -> Result<World, WorldError> {
        let user = session.require_user().map_err(|_| WorldError::NotAuthenticated)?;
        let worlds = self.worlds.list(user).await?;
        let world = worlds
            .into_iter()
            .find(|world| world.id == id)
            .ok_or(WorldError::Repo(RepoError::NotFound))?;
        ctx.set_current(Some(world.clone()));
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{AuthSession, MockWorldRepo, UserIdentity};
    use serde_json::Value;
    use worldsmith_domain::UserId;

    fn signed_in(user: UserId) -> Session {
        let session = Session::new();
        session.sign_in(AuthSession {
            user: UserIdentity {
                id: user,
                email: "maera@example.com".into(),
                metadata: Value::Null,
            },
            access_token: "token".into(),
        });
        session
    }

    #[tokio::test]
    async fn create_injects_the_acting_user_and_selects_the_new_world() {
        let user = UserId::new();
        let session = signed_in(user);
        let ctx = WorldContext::new();
        let created = World::new(user, "Aethermoor");
        let created_id = created.id;

        let mut repo = MockWorldRepo::new();
        let returned = created.clone();
        repo.expect_create()
            .withf(move |record| {
                record["user_id"] == json!(user) && record["name"] == "Aethermoor"
            })
            .returning(move |_| Ok(returned.clone()));

        let ops = WorldOps::new(Arc::new(repo));
        let world = ops
            .create(&session, &ctx, WorldPatch::named("Aethermoor"))
            .await
            .expect("create succeeds");

        assert_eq!(world.id, created_id);
        // Creating a world always makes it current.
        assert_eq!(ctx.current_id(), Some(created_id));
    }

    #[tokio::test]
    async fn create_without_a_session_is_refused_before_any_call() {
        let session = Session::new();
        let ctx = WorldContext::new();
        // No expectations: any repo call would panic the test.
        let ops = WorldOps::new(Arc::new(MockWorldRepo::new()));

        let result = ops.create(&session, &ctx, WorldPatch::named("Nope")).await;
        assert!(matches!(result, Err(WorldError::NotAuthenticated)));
        assert!(ctx.current().is_none());
    }

    #[tokio::test]
    async fn refresh_selects_the_newest_world_when_none_is_current() {
        let user = UserId::new();
        let session = signed_in(user);
        let ctx = WorldContext::new();

        let newest = World::new(user, "Newest");
        let older = World::new(user, "Older");
        let newest_id = newest.id;

        let mut repo = MockWorldRepo::new();
        let listed = vec![newest, older];
        repo.expect_list()
            .returning(move |_| Ok(listed.clone()));

        let ops = WorldOps::new(Arc::new(repo));
        let worlds = ops.refresh(&session, &ctx).await.expect("list succeeds");

        assert_eq!(worlds.len(), 2);
        assert_eq!(ctx.current_id(), Some(newest_id));
    }

    #[tokio::test]
    async fn deleting_the_current_world_moves_selection_to_the_first_remaining() {
        let user = UserId::new();
        let session = signed_in(user);
        let ctx = WorldContext::new();

        let doomed = World::new(user, "Doomed");
        let survivor = World::new(user, "Survivor");
        let doomed_id = doomed.id;
        let survivor_id = survivor.id;
        ctx.set_current(Some(doomed));

        let mut repo = MockWorldRepo::new();
        repo.expect_delete().returning(|_| Ok(()));
        let remaining = vec![survivor];
        repo.expect_list()
            .returning(move |_| Ok(remaining.clone()));

        let ops = WorldOps::new(Arc::new(repo));
        ops.delete(&session, &ctx, doomed_id).await.expect("delete succeeds");

        assert_eq!(ctx.current_id(), Some(survivor_id));
    }

    #[tokio::test]
    async fn deleting_the_last_world_clears_the_selection() {
        let user = UserId::new();
        let session = signed_in(user);
        let ctx = WorldContext::new();

        let doomed = World::new(user, "Doomed");
        let doomed_id = doomed.id;
        ctx.set_current(Some(doomed));

        let mut repo = MockWorldRepo::new();
        repo.expect_delete().returning(|_| Ok(()));
        repo.expect_list().returning(|_| Ok(Vec::new()));

        let ops = WorldOps::new(Arc::new(repo));
        ops.delete(&session, &ctx, doomed_id).await.expect("delete succeeds");

        assert!(ctx.current().is_none());
    }

    #[tokio::test]
    async fn deleting_another_world_keeps_the_selection() {
        let user = UserId::new();
        let session = signed_in(user);
        let ctx = WorldContext::new();

        let kept = World::new(user, "Kept");
        let kept_id = kept.id;
        ctx.set_current(Some(kept));

        let mut repo = MockWorldRepo::new();
        repo.expect_delete().returning(|_| Ok(()));
        // No list expectation: reassignment must not even be attempted.

        let ops = WorldOps::new(Arc::new(repo));
        ops.delete(&session, &ctx, WorldId::new())
            .await
            .expect("delete succeeds");

        assert_eq!(ctx.current_id(), Some(kept_id));
    }

    #[tokio::test]
    async fn update_refreshes_the_current_copy() {
        let user = UserId::new();
        let ctx = WorldContext::new();

        let mut world = World::new(user, "Aethermoor");
        ctx.set_current(Some(world.clone()));
        world.description = "Now with oceans.".into();
        let world_id = world.id;

        let mut repo = MockWorldRepo::new();
        let updated = world.clone();
        repo.expect_update()
            .returning(move |_, _| Ok(updated.clone()));

        let ops = WorldOps::new(Arc::new(repo));
        let patch = WorldPatch::default().with_description("Now with oceans.");
        ops.update(&ctx, world_id, patch).await.expect("update succeeds");

        assert_eq!(
            ctx.current().map(|w| w.description),
            Some("Now with oceans.".into())
        );
    }
}
