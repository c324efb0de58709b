//! Government - a ruling body, conventionally tied to a region.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category_enum;
use crate::{ComponentId, WorldId};

category_enum!(
    GovernmentType {
        Monarchy => "monarchy",
        Democracy => "democracy",
        Oligarchy => "oligarchy",
        Theocracy => "theocracy",
        Dictatorship => "dictatorship",
        Tribal => "tribal",
        Federation => "federation",
        Empire => "empire",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Government {
    pub id: ComponentId,
    pub world_id: WorldId,
    pub name: String,
    pub government_type: GovernmentType,
    /// Conventionally references a Region; not enforced at the data layer.
    pub linked_region: Option<ComponentId>,
    #[serde(default)]
    pub linked_components: Vec<ComponentId>,
    #[serde(default)]
    pub leadership: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Government {
    pub fn new(
        world_id: WorldId,
        name: impl Into<String>,
        government_type: GovernmentType,
    ) -> Self {
        Self {
            id: ComponentId::new(),
            world_id,
            name: name.into(),
            government_type,
            linked_region: None,
            linked_components: Vec::new(),
            leadership: String::new(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_region(mut self, region: ComponentId) -> Self {
        self.linked_region = Some(region);
        self
    }

    pub fn with_links(mut self, links: Vec<ComponentId>) -> Self {
        self.linked_components = links;
        self
    }

    pub fn with_leadership(mut self, leadership: impl Into<String>) -> Self {
        self.leadership = leadership.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
