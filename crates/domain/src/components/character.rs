//! Character - a named person of the world.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category_enum;
use crate::{ComponentId, WorldId};

category_enum!(
    /// The classic nine-cell alignment grid.
    Alignment {
        LawfulGood => "lawful_good",
        NeutralGood => "neutral_good",
        ChaoticGood => "chaotic_good",
        LawfulNeutral => "lawful_neutral",
        TrueNeutral => "true_neutral",
        ChaoticNeutral => "chaotic_neutral",
        LawfulEvil => "lawful_evil",
        NeutralEvil => "neutral_evil",
        ChaoticEvil => "chaotic_evil",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: ComponentId,
    pub world_id: WorldId,
    pub name: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub class_profession: String,
    pub alignment: Alignment,
    /// Conventionally references a Settlement; not enforced at the data layer.
    pub linked_settlement: Option<ComponentId>,
    #[serde(default)]
    pub linked_components: Vec<ComponentId>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Character {
    pub fn new(world_id: WorldId, name: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            id: ComponentId::new(),
            world_id,
            name: name.into(),
            race: String::new(),
            class_profession: String::new(),
            alignment,
            linked_settlement: None,
            linked_components: Vec::new(),
            role: String::new(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = race.into();
        self
    }

    pub fn with_profession(mut self, class_profession: impl Into<String>) -> Self {
        self.class_profession = class_profession.into();
        self
    }

    pub fn with_settlement(mut self, settlement: ComponentId) -> Self {
        self.linked_settlement = Some(settlement);
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
