//! Entity store: world-scoped CRUD over the component tables.
//!
//! Records are JSON rows in the store's shape. Two invariants are enforced
//! here rather than trusted to callers: every created record is stamped
//! with the current world's id (a caller-supplied `world_id` is
//! overwritten), and single-link fields submitted as `""` persist as null.

use std::sync::Arc;

use serde_json::{json, Value};

use worldsmith_domain::{normalize_link_field, Component, ComponentId, ComponentKind};

use crate::infrastructure::ports::{ComponentRepo, RepoError};
use crate::registry::{self, ComponentTypeInfo, UnknownComponentType};
use crate::stores::WorldContext;

pub struct ComponentOps {
    components: Arc<dyn ComponentRepo>,
}

#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    #[error("No world selected")]
    NoWorldSelected,
    #[error(transparent)]
    UnknownType(#[from] UnknownComponentType),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl ComponentOps {
    pub fn new(components: Arc<dyn ComponentRepo>) -> Self {
        Self { components }
    }

    /// Instances of `type_key` in the current world, newest-created first.
    pub async fn list(
        &self,
        type_key: &str,
        ctx: &WorldContext,
    ) -> Result<Vec<Value>, ComponentError> {
        let info = registry::resolve(type_key)?;
        let world_id = ctx.current_id().ok_or(ComponentError::NoWorldSelected)?;
        Ok(self.components.list(info.table, world_id).await?)
    }

    /// Typed variant of [`list`](Self::list) for engine-side consumers.
    pub async fn list_typed(
        &self,
        kind: ComponentKind,
        ctx: &WorldContext,
    ) -> Result<Vec<Component>, ComponentError> {
        let info = registry::for_kind(kind);
        let world_id = ctx.current_id().ok_or(ComponentError::NoWorldSelected)?;
        let rows = self.components.list(info.table, world_id).await?;
        rows.into_iter()
            .map(|row| {
                Component::from_row(kind, row)
                    .map_err(|e| ComponentError::Repo(RepoError::Serialization(e.to_string())))
            })
            .collect()
    }

    /// Create an instance in the current world.
    pub async fn create(
        &self,
        type_key: &str,
        ctx: &WorldContext,
        mut fields: Value,
    ) -> Result<Value, ComponentError> {
        let info = registry::resolve(type_key)?;
        let world_id = ctx.current_id().ok_or(ComponentError::NoWorldSelected)?;

        normalize_links(info, &mut fields);
        if let Some(map) = fields.as_object_mut() {
            // Stamp the scope last so a caller-supplied world_id can never
            // write into a world the context does not own.
            map.insert("world_id".to_string(), json!(world_id));
        }

        Ok(self.components.insert(info.table, fields).await?)
    }

    /// Partial update; unspecified fields are left unchanged at the store.
    pub async fn update(
        &self,
        type_key: &str,
        id: ComponentId,
        mut fields: Value,
    ) -> Result<Value, ComponentError> {
        let info = registry::resolve(type_key)?;

        normalize_links(info, &mut fields);
        if let Some(map) = fields.as_object_mut() {
            // A component can never be moved between worlds.
            map.remove("world_id");
        }

        Ok(self.components.update(info.table, id, fields).await?)
    }

    /// Delete an instance. Links held by other components are weak
    /// references and are deliberately left untouched.
    pub async fn delete(&self, type_key: &str, id: ComponentId) -> Result<(), ComponentError> {
        let info = registry::resolve(type_key)?;
        self.components.delete(info.table, id).await?;
        Ok(())
    }
}

/// Null out single-link fields submitted as the empty string. Only fields
/// present in the record are touched; absent fields stay absent so partial
/// updates remain partial.
fn normalize_links(info: &ComponentTypeInfo, fields: &mut Value) {
    if let Some(map) = fields.as_object_mut() {
        for field in info.single_link_fields {
            if let Some(value) = map.get_mut(*field) {
                normalize_link_field(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockComponentRepo;
    use worldsmith_domain::{UserId, World, WorldId};

    fn context_with_world() -> (WorldContext, WorldId) {
        let ctx = WorldContext::new();
        let world = World::new(UserId::new(), "Aethermoor");
        let id = world.id;
        ctx.set_current(Some(world));
        (ctx, id)
    }

    /// Echo the inserted record back with server-assigned columns, the way
    /// the row store's `return=representation` does.
    fn echo_insert(repo: &mut MockComponentRepo) {
        repo.expect_insert().returning(|_, mut record| {
            if let Some(map) = record.as_object_mut() {
                map.entry("id").or_insert(json!(ComponentId::new()));
                map.entry("created_at")
                    .or_insert(json!("2025-06-15T10:30:00Z"));
            }
            Ok(record)
        });
    }

    #[tokio::test]
    async fn create_stamps_the_current_world_even_when_the_caller_lies() {
        let (ctx, world_id) = context_with_world();
        let foreign_world = WorldId::new();

        let mut repo = MockComponentRepo::new();
        repo.expect_insert()
            .withf(move |table, record| {
                table == "regions"
                    && record["world_id"] == json!(world_id)
                    && record["name"] == "Ashwood Forest"
            })
            .returning(|_, record| Ok(record));

        let ops = ComponentOps::new(Arc::new(repo));
        let created = ops
            .create(
                "regions",
                &ctx,
                json!({
                    "name": "Ashwood Forest",
                    "primary_terrain": "forest",
                    "world_id": foreign_world,
                }),
            )
            .await
            .expect("create succeeds");

        assert_eq!(created["world_id"], json!(world_id));
    }

    #[tokio::test]
    async fn create_normalizes_empty_single_links_to_null() {
        let (ctx, _world_id) = context_with_world();
        let region = ComponentId::new();

        let mut repo = MockComponentRepo::new();
        repo.expect_insert()
            .withf(move |table, record| {
                table == "settlements"
                    && record["linked_region"] == json!(region)
                    && record["linked_government"].is_null()
            })
            .returning(|_, record| Ok(record));

        let ops = ComponentOps::new(Arc::new(repo));
        ops.create(
            "settlements",
            &ctx,
            json!({
                "name": "Ironvale",
                "settlement_type": "town",
                "linked_region": region,
                "linked_government": "",
            }),
        )
        .await
        .expect("create succeeds");
    }

    #[tokio::test]
    async fn operations_without_a_current_world_are_refused() {
        let ctx = WorldContext::new();
        // No expectations: a repo call would panic the test.
        let ops = ComponentOps::new(Arc::new(MockComponentRepo::new()));

        assert!(matches!(
            ops.list("regions", &ctx).await,
            Err(ComponentError::NoWorldSelected)
        ));
        assert!(matches!(
            ops.create("regions", &ctx, json!({ "name": "X" })).await,
            Err(ComponentError::NoWorldSelected)
        ));
    }

    #[tokio::test]
    async fn unknown_type_keys_fail_without_guessing_a_table() {
        let (ctx, _) = context_with_world();
        let ops = ComponentOps::new(Arc::new(MockComponentRepo::new()));

        assert!(matches!(
            ops.list("dragons", &ctx).await,
            Err(ComponentError::UnknownType(_))
        ));
        assert!(matches!(
            ops.delete("dragons", ComponentId::new()).await,
            Err(ComponentError::UnknownType(_))
        ));
    }

    #[tokio::test]
    async fn update_cannot_move_a_component_between_worlds() {
        let mut repo = MockComponentRepo::new();
        repo.expect_update()
            .withf(|table, _, fields| {
                table == "regions" && fields.get("world_id").is_none()
            })
            .returning(|_, _, fields| Ok(fields));

        let ops = ComponentOps::new(Arc::new(repo));
        ops.update(
            "regions",
            ComponentId::new(),
            json!({ "description": "Rewritten.", "world_id": WorldId::new() }),
        )
        .await
        .expect("update succeeds");
    }

    // Scenario: create a region, link a government to it, fetch the
    // government back, and see both link fields intact.
    #[tokio::test]
    async fn created_links_survive_a_round_trip() {
        let (ctx, world_id) = context_with_world();
        let region = worldsmith_domain::Region::new(
            world_id,
            "Ashwood Forest",
            worldsmith_domain::PrimaryTerrain::Forest,
        );
        let region_id = region.id;

        let mut repo = MockComponentRepo::new();
        echo_insert(&mut repo);

        let stored: std::sync::Arc<std::sync::Mutex<Option<Value>>> =
            std::sync::Arc::new(std::sync::Mutex::new(None));
        let sink = stored.clone();
        repo.expect_list().returning(move |table, _| {
            assert_eq!(table, "governments");
            let row = sink.lock().expect("lock").clone();
            Ok(row.into_iter().collect())
        });

        let ops = ComponentOps::new(Arc::new(repo));
        let created = ops
            .create(
                "governments",
                &ctx,
                json!({
                    "name": "Council of Ash",
                    "government_type": "oligarchy",
                    "linked_region": region_id,
                    "linked_components": [region_id],
                }),
            )
            .await
            .expect("create succeeds");
        *stored.lock().expect("lock") = Some(created);

        let fetched = ops
            .list_typed(ComponentKind::Government, &ctx)
            .await
            .expect("list succeeds");
        let Some(Component::Government(government)) = fetched.first() else {
            panic!("expected a government back");
        };
        assert_eq!(government.linked_region, Some(region_id));
        assert_eq!(government.linked_components, vec![region_id]);
        assert_eq!(government.world_id, world_id);
    }

    // Scenario: deleting a link target succeeds and leaves the referencing
    // component's linked_components untouched. Links are weak by design.
    #[tokio::test]
    async fn deleting_a_link_target_leaves_stale_links_in_place() {
        let (ctx, world_id) = context_with_world();
        let target = ComponentId::new();

        let referencing = json!({
            "id": ComponentId::new(),
            "world_id": world_id,
            "name": "Ashwood Forest",
            "primary_terrain": "forest",
            "linked_components": [target],
            "created_at": "2025-06-15T10:30:00Z",
        });

        let mut repo = MockComponentRepo::new();
        repo.expect_delete()
            .withf(move |table, id| table == "monsters" && *id == target)
            .times(1)
            .returning(|_, _| Ok(()));
        // No update expectation: a cascade attempt would panic the test.
        let row = referencing.clone();
        repo.expect_list().returning(move |_, _| Ok(vec![row.clone()]));

        let ops = ComponentOps::new(Arc::new(repo));
        ops.delete("monsters", target).await.expect("delete succeeds");

        let rows = ops.list("regions", &ctx).await.expect("list succeeds");
        assert_eq!(rows[0]["linked_components"], json!([target]));
    }
}
