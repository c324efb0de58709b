//! Content drafting: assemble field bags from form state and call the
//! generation boundary.
//!
//! The response is opaque text. On failure nothing is written back, so a
//! failed draft can never corrupt fields the user already filled in.

use std::sync::Arc;

use worldsmith_shared::DraftRequest;

use crate::infrastructure::ports::{DraftError, DraftPort};

pub struct DraftOps {
    draft: Arc<dyn DraftPort>,
}

impl DraftOps {
    pub fn new(draft: Arc<dyn DraftPort>) -> Self {
        Self { draft }
    }

    /// Generate one field's worth of text. Whitespace-only content counts
    /// as no content. Never retried.
    pub async fn generate(&self, request: &DraftRequest) -> Result<String, DraftError> {
        let content = self.draft.draft(request).await?;
        let content = content.trim();
        if content.is_empty() {
            return Err(DraftError::EmptyContent);
        }
        Ok(content.to_string())
    }

    /// Generate into a form field. `target` is written only on success;
    /// any failure leaves it exactly as it was.
    pub async fn fill_field(
        &self,
        request: &DraftRequest,
        target: &mut String,
    ) -> Result<(), DraftError> {
        *target = self.generate(request).await?;
        Ok(())
    }
}

/// Builders mapping typed form state onto draft requests.
///
/// Link arguments are display names, already resolved by the caller from
/// its candidate set; `world` supplies the shared narrative context.
pub mod assemble {
    use worldsmith_domain::{
        Adventure, Character, GeographicalFeature, Government, History, MagicLevel, Monster,
        Region, Site, TechLevel, Tone, World,
    };
    use worldsmith_shared::{
        AdventureFields, CharacterFields, DraftRequest, GeographicalFields, GovernmentFields,
        HistoryFields, MonsterFields, RegionFields, SiteFields, WorldDescriptionFields,
        WorldNameFields,
    };

    pub fn world_name(tone: Tone, magic: MagicLevel, tech: TechLevel) -> DraftRequest {
        DraftRequest::WorldName(WorldNameFields {
            tone: tone.as_str().into(),
            magic_level: magic.as_str().into(),
            tech_level: tech.as_str().into(),
        })
    }

    pub fn world_description(
        tone: Tone,
        magic: MagicLevel,
        tech: TechLevel,
        authority_structure: &[String],
        daily_life_pressures: &[String],
    ) -> DraftRequest {
        DraftRequest::WorldDescription(WorldDescriptionFields {
            tone: tone.as_str().into(),
            magic_level: magic.as_str().into(),
            tech_level: tech.as_str().into(),
            authority_structure: authority_structure.to_vec(),
            daily_life_pressures: daily_life_pressures.to_vec(),
        })
    }

    pub fn region_description(
        region: &Region,
        world: &World,
        linked_names: Vec<String>,
    ) -> DraftRequest {
        DraftRequest::RegionDescription(RegionFields {
            name: region.name.clone(),
            primary_terrain: region.primary_terrain.as_str().into(),
            linked_components: linked_names,
            world_context: world.narrative_context().into(),
        })
    }

    fn government_fields(
        government: &Government,
        world: &World,
        linked_region: Option<String>,
        linked_names: Vec<String>,
    ) -> GovernmentFields {
        GovernmentFields {
            name: government.name.clone(),
            government_type: government.government_type.as_str().into(),
            linked_region,
            linked_components: linked_names,
            world_context: world.narrative_context().into(),
        }
    }

    pub fn government_leadership(
        government: &Government,
        world: &World,
        linked_region: Option<String>,
        linked_names: Vec<String>,
    ) -> DraftRequest {
        DraftRequest::GovernmentLeadership(government_fields(
            government,
            world,
            linked_region,
            linked_names,
        ))
    }

    pub fn government_description(
        government: &Government,
        world: &World,
        linked_region: Option<String>,
        linked_names: Vec<String>,
    ) -> DraftRequest {
        DraftRequest::GovernmentDescription(government_fields(
            government,
            world,
            linked_region,
            linked_names,
        ))
    }

    pub fn character_description(
        character: &Character,
        world: &World,
        linked_settlement: Option<String>,
        linked_names: Vec<String>,
    ) -> DraftRequest {
        DraftRequest::CharacterDescription(CharacterFields {
            name: character.name.clone(),
            race: opt(&character.race),
            class_profession: opt(&character.class_profession),
            alignment: Some(character.alignment.as_str().into()),
            linked_settlement,
            linked_components: linked_names,
            role: opt(&character.role),
            world_context: world.narrative_context().into(),
        })
    }

    pub fn geographical_description(
        feature: &GeographicalFeature,
        world: &World,
        linked_region: Option<String>,
        linked_names: Vec<String>,
    ) -> DraftRequest {
        DraftRequest::GeographicalDescription(GeographicalFields {
            name: feature.name.clone(),
            feature_type: feature.feature_type.as_str().into(),
            linked_region,
            linked_components: linked_names,
            world_context: world.narrative_context().into(),
        })
    }

    pub fn site_description(
        site: &Site,
        world: &World,
        linked_settlement: Option<String>,
        linked_region: Option<String>,
        linked_names: Vec<String>,
    ) -> DraftRequest {
        DraftRequest::SiteDescription(SiteFields {
            name: site.name.clone(),
            site_type: site.site_type.as_str().into(),
            linked_settlement,
            linked_region,
            linked_components: linked_names,
            world_context: world.narrative_context().into(),
        })
    }

    fn adventure_fields(
        adventure: &Adventure,
        world: &World,
        linked_names: Vec<String>,
    ) -> AdventureFields {
        AdventureFields {
            name: adventure.name.clone(),
            difficulty: adventure.difficulty.as_str().into(),
            linked_components: linked_names,
            world_context: world.narrative_context().into(),
        }
    }

    pub fn adventure_description(
        adventure: &Adventure,
        world: &World,
        linked_names: Vec<String>,
    ) -> DraftRequest {
        DraftRequest::AdventureDescription(adventure_fields(adventure, world, linked_names))
    }

    pub fn adventure_objectives(
        adventure: &Adventure,
        world: &World,
        linked_names: Vec<String>,
    ) -> DraftRequest {
        DraftRequest::AdventureObjectives(adventure_fields(adventure, world, linked_names))
    }

    pub fn adventure_rewards(
        adventure: &Adventure,
        world: &World,
        linked_names: Vec<String>,
    ) -> DraftRequest {
        DraftRequest::AdventureRewards(adventure_fields(adventure, world, linked_names))
    }

    pub fn history_description(
        history: &History,
        world: &World,
        linked_names: Vec<String>,
    ) -> DraftRequest {
        DraftRequest::HistoryDescription(HistoryFields {
            title: history.title.clone(),
            era: opt(&history.era),
            linked_components: linked_names,
            world_context: world.narrative_context().into(),
        })
    }

    fn monster_fields(
        monster: &Monster,
        world: &World,
        linked_region: Option<String>,
        linked_names: Vec<String>,
    ) -> MonsterFields {
        MonsterFields {
            name: monster.name.clone(),
            monster_type: monster.monster_type.as_str().into(),
            challenge_rating: monster.challenge_rating.clone(),
            habitat: opt(&monster.habitat),
            linked_region,
            linked_components: linked_names,
            world_context: world.narrative_context().into(),
        }
    }

    pub fn monster_description(
        monster: &Monster,
        world: &World,
        linked_region: Option<String>,
        linked_names: Vec<String>,
    ) -> DraftRequest {
        DraftRequest::MonsterDescription(monster_fields(monster, world, linked_region, linked_names))
    }

    pub fn monster_abilities(
        monster: &Monster,
        world: &World,
        linked_region: Option<String>,
        linked_names: Vec<String>,
    ) -> DraftRequest {
        DraftRequest::MonsterAbilities(monster_fields(monster, world, linked_region, linked_names))
    }

    fn opt(value: &str) -> Option<String> {
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}
