//! Geographical feature - a named landmark of the natural world.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category_enum;
use crate::{ComponentId, WorldId};

category_enum!(
    FeatureType {
        Forest => "forest",
        Mountain => "mountain",
        River => "river",
        Lake => "lake",
        Ocean => "ocean",
        Canyon => "canyon",
        Cave => "cave",
        Volcano => "volcano",
        Glacier => "glacier",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographicalFeature {
    pub id: ComponentId,
    pub world_id: WorldId,
    pub name: String,
    pub feature_type: FeatureType,
    pub linked_region: Option<ComponentId>,
    #[serde(default)]
    pub linked_components: Vec<ComponentId>,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl GeographicalFeature {
    pub fn new(world_id: WorldId, name: impl Into<String>, feature_type: FeatureType) -> Self {
        Self {
            id: ComponentId::new(),
            world_id,
            name: name.into(),
            feature_type,
            linked_region: None,
            linked_components: Vec::new(),
            description: String::new(),
            created_at: Utc::now(),
        }
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
