//! Adventure - a playable scenario with objectives and rewards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category_enum;
use crate::{ComponentId, WorldId};

category_enum!(
    Difficulty {
        Easy => "easy",
        Medium => "medium",
        Hard => "hard",
        Epic => "epic",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adventure {
    pub id: ComponentId,
    pub world_id: WorldId,
    pub name: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub linked_components: Vec<ComponentId>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub objectives: String,
    #[serde(default)]
    pub rewards: String,
    pub created_at: DateTime<Utc>,
}

impl Adventure {
    pub fn new(world_id: WorldId, name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            id: ComponentId::new(),
            world_id,
            name: name.into(),
            difficulty,
            linked_components: Vec::new(),
            description: String::new(),
            objectives: String::new(),
            rewards: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_links(mut self, links: Vec<ComponentId>) -> Self {
        self.linked_components = links;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
