//! Region - a broad geographic area of a world.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category_enum;
use crate::{ComponentId, WorldId};

category_enum!(
    /// Dominant terrain of a region.
    PrimaryTerrain {
        Forest => "forest",
        Mountain => "mountain",
        Desert => "desert",
        Plains => "plains",
        Swamp => "swamp",
        Tundra => "tundra",
        Coast => "coast",
        Island => "island",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: ComponentId,
    pub world_id: WorldId,
    pub name: String,
    pub primary_terrain: PrimaryTerrain,
    #[serde(default)]
    pub linked_components: Vec<ComponentId>,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Region {
    pub fn new(world_id: WorldId, name: impl Into<String>, terrain: PrimaryTerrain) -> Self {
        Self {
            id: ComponentId::new(),
            world_id,
            name: name.into(),
            primary_terrain: terrain,
            linked_components: Vec::new(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_links(mut self, links: Vec<ComponentId>) -> Self {
        self.linked_components = links;
        self
    }
}
