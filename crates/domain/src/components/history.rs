//! History - a recorded event of the world's past.
//!
//! History is the one variant without a category enum: its `era` is a free
//! string, and its display name is `title` rather than `name`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ComponentId, WorldId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    pub id: ComponentId,
    pub world_id: WorldId,
    pub title: String,
    #[serde(default)]
    pub era: String,
    #[serde(default)]
    pub linked_components: Vec<ComponentId>,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl History {
    pub fn new(world_id: WorldId, title: impl Into<String>, era: impl Into<String>) -> Self {
        Self {
            id: ComponentId::new(),
            world_id,
            title: title.into(),
            era: era.into(),
            linked_components: Vec::new(),
            description: String::new(),
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
