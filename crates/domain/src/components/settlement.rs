//! Settlement - an inhabited place, from outpost to capital.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category_enum;
use crate::{ComponentId, WorldId};

category_enum!(
    SettlementType {
        Village => "village",
        Town => "town",
        City => "city",
        Capital => "capital",
        Outpost => "outpost",
        Fortress => "fortress",
        TradingPost => "trading_post",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub id: ComponentId,
    pub world_id: WorldId,
    pub name: String,
    pub settlement_type: SettlementType,
    #[serde(default)]
    pub population: i64,
    pub linked_region: Option<ComponentId>,
    pub linked_government: Option<ComponentId>,
    #[serde(default)]
    pub linked_components: Vec<ComponentId>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notable_features: String,
    pub created_at: DateTime<Utc>,
}

impl Settlement {
    pub fn new(
        world_id: WorldId,
        name: impl Into<String>,
        settlement_type: SettlementType,
    ) -> Self {
        Self {
            id: ComponentId::new(),
            world_id,
            name: name.into(),
            settlement_type,
            population: 0,
            linked_region: None,
            linked_government: None,
            linked_components: Vec::new(),
            description: String::new(),
            notable_features: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_population(mut self, population: i64) -> Self {
        self.population = population;
        self
    }

    pub fn with_region(mut self, region: ComponentId) -> Self {
        self.linked_region = Some(region);
        self
    }

    pub fn with_government(mut self, government: ComponentId) -> Self {
        self.linked_government = Some(government);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
