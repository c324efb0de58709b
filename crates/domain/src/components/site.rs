//! Site - a visitable place, conventionally inside a settlement or region.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category_enum;
use crate::{ComponentId, WorldId};

category_enum!(
    SiteType {
        Shop => "shop",
        Tavern => "tavern",
        Temple => "temple",
        Library => "library",
        Fortress => "fortress",
        Ruins => "ruins",
        Landmark => "landmark",
        Dungeon => "dungeon",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: ComponentId,
    pub world_id: WorldId,
    pub name: String,
    pub site_type: SiteType,
    pub linked_settlement: Option<ComponentId>,
    pub linked_region: Option<ComponentId>,
    #[serde(default)]
    pub linked_components: Vec<ComponentId>,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Site {
    pub fn new(world_id: WorldId, name: impl Into<String>, site_type: SiteType) -> Self {
        Self {
            id: ComponentId::new(),
            world_id,
            name: name.into(),
            site_type,
            linked_settlement: None,
            linked_region: None,
            linked_components: Vec::new(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_settlement(mut self, settlement: ComponentId) -> Self {
        self.linked_settlement = Some(settlement);
        self
    }

    pub fn with_region(mut self, region: ComponentId) -> Self {
        self.linked_region = Some(region);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
