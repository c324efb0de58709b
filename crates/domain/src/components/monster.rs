//! Monster - a creature, with a challenge rating and habitat.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category_enum;
use crate::{ComponentId, WorldId};

category_enum!(
    MonsterType {
        Beast => "beast",
        Humanoid => "humanoid",
        Undead => "undead",
        Dragon => "dragon",
        Fiend => "fiend",
        Celestial => "celestial",
        Fey => "fey",
        Elemental => "elemental",
        Aberration => "aberration",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub id: ComponentId,
    pub world_id: WorldId,
    pub name: String,
    pub monster_type: MonsterType,
    /// Free-form rating ("1/4", "13"), kept as entered.
    #[serde(default)]
    pub challenge_rating: String,
    #[serde(default)]
    pub habitat: String,
    pub linked_region: Option<ComponentId>,
    #[serde(default)]
    pub linked_components: Vec<ComponentId>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub abilities: String,
    pub created_at: DateTime<Utc>,
}

impl Monster {
    pub fn new(world_id: WorldId, name: impl Into<String>, monster_type: MonsterType) -> Self {
        Self {
            id: ComponentId::new(),
            world_id,
            name: name.into(),
            monster_type,
            challenge_rating: String::new(),
            habitat: String::new(),
            linked_region: None,
            linked_components: Vec::new(),
            description: String::new(),
            abilities: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_challenge_rating(mut self, rating: impl Into<String>) -> Self {
        self.challenge_rating = rating.into();
        self
    }

    pub fn with_habitat(mut self, habitat: impl Into<String>) -> Self {
        self.habitat = habitat.into();
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
