//! Item - an object of the world, conventionally held by a character or
//! found at a site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category_enum;
use crate::{ComponentId, WorldId};

category_enum!(
    ItemType {
        Weapon => "weapon",
        Armor => "armor",
        Accessory => "accessory",
        Consumable => "consumable",
        Tool => "tool",
        Treasure => "treasure",
        Artifact => "artifact",
        Mundane => "mundane",
    }
);

category_enum!(
    Rarity {
        Common => "common",
        Uncommon => "uncommon",
        Rare => "rare",
        VeryRare => "very_rare",
        Legendary => "legendary",
        Artifact => "artifact",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ComponentId,
    pub world_id: WorldId,
    pub name: String,
    pub item_type: ItemType,
    pub rarity: Rarity,
    pub linked_character: Option<ComponentId>,
    pub linked_site: Option<ComponentId>,
    #[serde(default)]
    pub linked_components: Vec<ComponentId>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub properties: String,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(
        world_id: WorldId,
        name: impl Into<String>,
        item_type: ItemType,
        rarity: Rarity,
    ) -> Self {
        Self {
            id: ComponentId::new(),
            world_id,
            name: name.into(),
            item_type,
            rarity,
            linked_character: None,
            linked_site: None,
            linked_components: Vec::new(),
            description: String::new(),
            properties: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_character(mut self, character: ComponentId) -> Self {
        self.linked_character = Some(character);
        self
    }

    pub fn with_site(mut self, site: ComponentId) -> Self {
        self.linked_site = Some(site);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
