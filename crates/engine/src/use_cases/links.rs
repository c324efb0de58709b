//! Link resolution: the flattened, searchable candidate set for link
//! pickers.
//!
//! A pure read-side aggregation. Nothing is cached; every call re-reads the
//! store, and the caller guards against stale results with the world
//! context's epoch.

use std::sync::Arc;

use futures_util::future::join_all;
use serde_json::Value;

use worldsmith_domain::{ComponentId, ComponentKind};

use crate::infrastructure::ports::ComponentRepo;
use crate::registry;

/// One linkable component, flattened for display and search.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LinkCandidate {
    pub id: ComponentId,
    pub name: String,
    pub kind: ComponentKind,
    pub description: String,
}

impl LinkCandidate {
    /// Flatten a raw row. Rows without a usable id or display name are
    /// unlinkable and yield `None`.
    fn from_row(kind: ComponentKind, row: &Value) -> Option<Self> {
        let id = row.get("id")?.as_str()?.parse().ok()?;
        let name = row
            .get("name")
            .or_else(|| row.get("title"))?
            .as_str()?
            .to_string();
        let description = row
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Some(Self {
            id,
            name,
            kind,
            description,
        })
    }
}

pub struct LinkResolver {
    components: Arc<dyn ComponentRepo>,
}

impl LinkResolver {
    pub fn new(components: Arc<dyn ComponentRepo>) -> Self {
        Self { components }
    }

    /// Every linkable component in the world, across all registry types,
    /// in catalog order then store order within a type.
    ///
    /// Defensive on purpose: a malformed row is skipped, and one failing
    /// collection is logged and skipped rather than blanking the whole
    /// candidate set.
    pub async fn resolve_all(&self, world_id: worldsmith_domain::WorldId) -> Vec<LinkCandidate> {
        let fetches = registry::all().iter().map(|info| {
            let components = Arc::clone(&self.components);
            async move { (info, components.list(info.table, world_id).await) }
        });

        let mut candidates = Vec::new();
        for (info, result) in join_all(fetches).await {
            match result {
                Ok(rows) => candidates.extend(
                    rows.iter()
                        .filter_map(|row| LinkCandidate::from_row(info.kind, row)),
                ),
                Err(error) => {
                    tracing::warn!(table = info.table, %error, "skipping collection during link resolution");
                }
            }
        }
        candidates
    }
}

/// Case-insensitive substring filter over name, type, and description.
/// The empty query returns every candidate; order is preserved and the
/// input is never mutated.
pub fn search(candidates: &[LinkCandidate], query: &str) -> Vec<LinkCandidate> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return candidates.to_vec();
    }

    candidates
        .iter()
        .filter(|candidate| {
            let title = registry::for_kind(candidate.kind).title;
            candidate.name.to_lowercase().contains(&needle)
                || candidate.kind.key().contains(&needle)
                || title.to_lowercase().contains(&needle)
                || candidate.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
