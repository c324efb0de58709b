//! World entity - the top-level namespace owning every component of a setting.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, UserId, WorldId};

/// Narrative tone of a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    HeroicHopeful,
    Grounded,
    DarkGritty,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeroicHopeful => "heroic_hopeful",
            Self::Grounded => "grounded",
            Self::DarkGritty => "dark_gritty",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heroic_hopeful" => Ok(Self::HeroicHopeful),
            "grounded" => Ok(Self::Grounded),
            "dark_gritty" => Ok(Self::DarkGritty),
            _ => Err(DomainError::parse(format!("Unknown tone: {s}"))),
        }
    }
}

/// How prevalent magic is in a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagicLevel {
    None,
    Low,
    Moderate,
    High,
}

impl MagicLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl fmt::Display for MagicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MagicLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            _ => Err(DomainError::parse(format!("Unknown magic level: {s}"))),
        }
    }
}

/// Technology level, an 11-point ordinal scale from stone age to space travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechLevel {
    StoneAge,
    BronzeAge,
    IronAge,
    Medieval,
    Renaissance,
    Industrial,
    ElectricalMechanized,
    Nuclear,
    InformationAge,
    NearFuture,
    FuturisticSpaceTravel,
}

impl TechLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StoneAge => "stone_age",
            Self::BronzeAge => "bronze_age",
            Self::IronAge => "iron_age",
            Self::Medieval => "medieval",
            Self::Renaissance => "renaissance",
            Self::Industrial => "industrial",
            Self::ElectricalMechanized => "electrical_mechanized",
            Self::Nuclear => "nuclear",
            Self::InformationAge => "information_age",
            Self::NearFuture => "near_future",
            Self::FuturisticSpaceTravel => "futuristic_space_travel",
        }
    }

    /// Position on the ordinal scale, 0 (stone age) through 10 (space travel).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for TechLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TechLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stone_age" => Ok(Self::StoneAge),
            "bronze_age" => Ok(Self::BronzeAge),
            "iron_age" => Ok(Self::IronAge),
            "medieval" => Ok(Self::Medieval),
            "renaissance" => Ok(Self::Renaissance),
            "industrial" => Ok(Self::Industrial),
            "electrical_mechanized" => Ok(Self::ElectricalMechanized),
            "nuclear" => Ok(Self::Nuclear),
            "information_age" => Ok(Self::InformationAge),
            "near_future" => Ok(Self::NearFuture),
            "futuristic_space_travel" => Ok(Self::FuturisticSpaceTravel),
            _ => Err(DomainError::parse(format!("Unknown tech level: {s}"))),
        }
    }
}

/// A user-owned world. Every component belongs to exactly one world, and
/// deleting a world cascades to its components at the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub id: WorldId,
    pub user_id: UserId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub tone: Option<Tone>,
    pub magic_level: Option<MagicLevel>,
    pub tech_level: Option<TechLevel>,
    #[serde(default)]
    pub authority_structure: Vec<String>,
    #[serde(default)]
    pub daily_life_pressures: Vec<String>,
    /// Shared narrative context injected into every generation request
    /// made within this world.
    #[serde(default)]
    pub general_description_style: String,
    pub created_at: DateTime<Utc>,
}

impl World {
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            id: WorldId::new(),
            user_id,
            name: name.into(),
            description: String::new(),
            tone: None,
            magic_level: None,
            tech_level: None,
            authority_structure: Vec::new(),
            daily_life_pressures: Vec::new(),
            general_description_style: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn with_magic_level(mut self, level: MagicLevel) -> Self {
        self.magic_level = Some(level);
        self
    }

    pub fn with_tech_level(mut self, level: TechLevel) -> Self {
        self.tech_level = Some(level);
        self
    }

    pub fn with_description_style(mut self, style: impl Into<String>) -> Self {
        self.general_description_style = style.into();
        self
    }

    /// The narrative context string shared with generation requests:
    /// the curated description style when set, the plain description
    /// otherwise.
    pub fn narrative_context(&self) -> &str {
        if self.general_description_style.is_empty() {
            &self.description
        } else {
            &self.general_description_style
        }
    }
}

/// Partial world fields for create/update calls. Unset fields are omitted
/// from the serialized record so the store leaves them untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magic_level: Option<MagicLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_level: Option<TechLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority_structure: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_life_pressures: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_description_style: Option<String>,
}

impl WorldPatch {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_round_trips_through_wire_names() {
        for tone in [Tone::HeroicHopeful, Tone::Grounded, Tone::DarkGritty] {
            assert_eq!(tone.as_str().parse::<Tone>().expect("parse"), tone);
        }
        let json = serde_json::to_string(&Tone::HeroicHopeful).expect("serialize");
        assert_eq!(json, "\"heroic_hopeful\"");
    }

    #[test]
    fn tech_level_is_ordinal() {
        assert_eq!(TechLevel::StoneAge.ordinal(), 0);
        assert_eq!(TechLevel::FuturisticSpaceTravel.ordinal(), 10);
        assert!(TechLevel::Medieval < TechLevel::Nuclear);
    }

    #[test]
    fn narrative_context_prefers_description_style() {
        let world = World::new(UserId::new(), "Aethermoor")
            .with_description("A drowned continent.")
            .with_description_style("Write in a mournful register.");
        assert_eq!(world.narrative_context(), "Write in a mournful register.");

        let plain = World::new(UserId::new(), "Aethermoor").with_description("A drowned continent.");
        assert_eq!(plain.narrative_context(), "A drowned continent.");
    }

    #[test]
    fn patch_omits_unset_fields() {
        let patch = WorldPatch::named("Aethermoor").with_tone(Tone::Grounded);
        let value = serde_json::to_value(&patch).expect("serialize");
        let map = value.as_object().expect("object");
        assert_eq!(map.len(), 2);
        assert_eq!(map["name"], "Aethermoor");
        assert_eq!(map["tone"], "grounded");
    }
}
