//! Draft generation wire types.
//!
//! A [`DraftRequest`] serializes to `{"type": <kind>, "data": {...}}`, the
//! exact shape the generation function accepts. Fourteen kinds exist: two
//! for worlds and one or two per component type, except Item and Settlement
//! which have no generation support.

use serde::{Deserialize, Serialize};

/// A discriminated generation request.
///
/// Link fields carry display names, not identifiers: the generated prompt
/// quotes them verbatim, so callers resolve ids to names before assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum DraftRequest {
    WorldName(WorldNameFields),
    WorldDescription(WorldDescriptionFields),
    RegionDescription(RegionFields),
    GovernmentLeadership(GovernmentFields),
    GovernmentDescription(GovernmentFields),
    CharacterDescription(CharacterFields),
    GeographicalDescription(GeographicalFields),
    SiteDescription(SiteFields),
    AdventureDescription(AdventureFields),
    AdventureObjectives(AdventureFields),
    AdventureRewards(AdventureFields),
    HistoryDescription(HistoryFields),
    MonsterDescription(MonsterFields),
    MonsterAbilities(MonsterFields),
}

impl DraftRequest {
    /// The wire tag for this request.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::WorldName(_) => "world_name",
            Self::WorldDescription(_) => "world_description",
            Self::RegionDescription(_) => "region_description",
            Self::GovernmentLeadership(_) => "government_leadership",
            Self::GovernmentDescription(_) => "government_description",
            Self::CharacterDescription(_) => "character_description",
            Self::GeographicalDescription(_) => "geographical_description",
            Self::SiteDescription(_) => "site_description",
            Self::AdventureDescription(_) => "adventure_description",
            Self::AdventureObjectives(_) => "adventure_objectives",
            Self::AdventureRewards(_) => "adventure_rewards",
            Self::HistoryDescription(_) => "history_description",
            Self::MonsterDescription(_) => "monster_description",
            Self::MonsterAbilities(_) => "monster_abilities",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldNameFields {
    pub tone: String,
    pub magic_level: String,
    pub tech_level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldDescriptionFields {
    pub tone: String,
    pub magic_level: String,
    pub tech_level: String,
    #[serde(default)]
    pub authority_structure: Vec<String>,
    #[serde(default)]
    pub daily_life_pressures: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionFields {
    pub name: String,
    pub primary_terrain: String,
    #[serde(default)]
    pub linked_components: Vec<String>,
    pub world_context: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GovernmentFields {
    pub name: String,
    pub government_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_region: Option<String>,
    #[serde(default)]
    pub linked_components: Vec<String>,
    pub world_context: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterFields {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_profession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_settlement: Option<String>,
    #[serde(default)]
    pub linked_components: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub world_context: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeographicalFields {
    pub name: String,
    pub feature_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_region: Option<String>,
    #[serde(default)]
    pub linked_components: Vec<String>,
    pub world_context: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteFields {
    pub name: String,
    pub site_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_settlement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_region: Option<String>,
    #[serde(default)]
    pub linked_components: Vec<String>,
    pub world_context: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdventureFields {
    pub name: String,
    pub difficulty: String,
    #[serde(default)]
    pub linked_components: Vec<String>,
    pub world_context: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryFields {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub era: Option<String>,
    #[serde(default)]
    pub linked_components: Vec<String>,
    pub world_context: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonsterFields {
    pub name: String,
    pub monster_type: String,
    pub challenge_rating: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habitat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_region: Option<String>,
    #[serde(default)]
    pub linked_components: Vec<String>,
    pub world_context: String,
}

/// Successful generation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftResponse {
    pub content: String,
}

/// Failure body returned by the generation function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftFailure {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_type_and_data() {
        let request = DraftRequest::RegionDescription(RegionFields {
            name: "Ashwood Forest".into(),
            primary_terrain: "forest".into(),
            linked_components: vec!["Ironvale".into()],
            world_context: "A grounded world.".into(),
        });

        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(
            value,
            json!({
                "type": "region_description",
                "data": {
                    "name": "Ashwood Forest",
                    "primary_terrain": "forest",
                    "linked_components": ["Ironvale"],
                    "world_context": "A grounded world.",
                }
            })
        );
    }

    #[test]
    fn all_fourteen_tags_round_trip() {
        let requests = [
            DraftRequest::WorldName(WorldNameFields::default()),
            DraftRequest::WorldDescription(WorldDescriptionFields::default()),
            DraftRequest::RegionDescription(RegionFields::default()),
            DraftRequest::GovernmentLeadership(GovernmentFields::default()),
            DraftRequest::GovernmentDescription(GovernmentFields::default()),
            DraftRequest::CharacterDescription(CharacterFields::default()),
            DraftRequest::GeographicalDescription(GeographicalFields::default()),
            DraftRequest::SiteDescription(SiteFields::default()),
            DraftRequest::AdventureDescription(AdventureFields::default()),
            DraftRequest::AdventureObjectives(AdventureFields::default()),
            DraftRequest::AdventureRewards(AdventureFields::default()),
            DraftRequest::HistoryDescription(HistoryFields::default()),
            DraftRequest::MonsterDescription(MonsterFields::default()),
            DraftRequest::MonsterAbilities(MonsterFields::default()),
        ];

        for request in requests {
            let value = serde_json::to_value(&request).expect("serialize");
            assert_eq!(value["type"], request.kind());
            let back: DraftRequest = serde_json::from_value(value).expect("deserialize");
            assert_eq!(back, request);
        }
    }

    #[test]
    fn optional_fields_are_omitted_from_the_wire() {
        let request = DraftRequest::CharacterDescription(CharacterFields {
            name: "Maera".into(),
            world_context: "ctx".into(),
            ..CharacterFields::default()
        });
        let value = serde_json::to_value(&request).expect("serialize");
        let data = value["data"].as_object().expect("object");
        assert!(!data.contains_key("race"));
        assert!(!data.contains_key("linked_settlement"));
        assert!(data.contains_key("linked_components"));
    }
}
