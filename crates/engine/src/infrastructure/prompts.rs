//! Prompt construction for draft generation.
//!
//! One template per request kind, each pairing a user prompt with a token
//! budget sized to the field it fills. The shared system prompt sets the
//! assistant's register; the user prompt lists the form's current state
//! plus the world context, then states what to write.

use worldsmith_shared::DraftRequest;

/// System prompt shared by every generation kind.
pub const SYSTEM_PROMPT: &str = "You are a creative fantasy world-building assistant. \
    Generate immersive, detailed content that fits the given parameters.";

/// A fully assembled prompt with its token budget.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: &'static str,
    pub user: String,
    pub max_tokens: u32,
}

/// Build the prompt for a draft request.
pub fn build(request: &DraftRequest) -> Prompt {
    let (user, max_tokens) = match request {
        DraftRequest::WorldName(data) => (
            format!(
                "Generate a fantasy world name based on these characteristics:\n\
                 - Tone: {}\n\
                 - Magic Level: {}\n\
                 - Tech Level: {}\n\n\
                 Return only the world name, nothing else.",
                data.tone, data.magic_level, data.tech_level
            ),
            50,
        ),
        DraftRequest::WorldDescription(data) => (
            format!(
                "Create a compelling world description based on these characteristics:\n\
                 - Tone: {}\n\
                 - Magic Level: {}\n\
                 - Tech Level: {}\n\
                 - Authority Structure: {}\n\
                 - Daily Life Pressures: {}\n\n\
                 Write a 2-3 sentence description that captures the essence of this world \
                 and will serve as context for generating world components.",
                data.tone,
                data.magic_level,
                data.tech_level,
                data.authority_structure.join(", "),
                data.daily_life_pressures.join(", ")
            ),
            200,
        ),
        DraftRequest::RegionDescription(data) => (
            format!(
                "Create a detailed description for a fantasy region with these details:\n\
                 - Region Name: {}\n\
                 - Primary Terrain: {}\n\
                 - Linked Components: {}\n\
                 - World Context: {}\n\n\
                 Write a compelling 2-3 sentence description that brings this region to life, \
                 including its atmosphere, notable features, and what makes it unique.",
                data.name,
                data.primary_terrain,
                links(&data.linked_components),
                data.world_context
            ),
            200,
        ),
        DraftRequest::GovernmentLeadership(data) => (
            format!(
                "Describe the leadership structure for this government:\n\
                 - Government Name: {}\n\
                 - Government Type: {}\n\
                 - Linked Region: {}\n\
                 - Linked Components: {}\n\
                 - World Context: {}\n\n\
                 Write 1-2 sentences describing who leads this government and how the \
                 leadership is structured.",
                data.name,
                data.government_type,
                or_none(&data.linked_region),
                links(&data.linked_components),
                data.world_context
            ),
            150,
        ),
        DraftRequest::GovernmentDescription(data) => (
            format!(
                "Create a description for this government:\n\
                 - Government Name: {}\n\
                 - Government Type: {}\n\
                 - Linked Region: {}\n\
                 - Linked Components: {}\n\
                 - World Context: {}\n\n\
                 Write 2-3 sentences describing how this government operates, its culture, \
                 laws, and relationship with its people.",
                data.name,
                data.government_type,
                or_none(&data.linked_region),
                links(&data.linked_components),
                data.world_context
            ),
            200,
        ),
        DraftRequest::CharacterDescription(data) => (
            format!(
                "Create a character description with these details:\n\
                 - Character Name: {}\n\
                 - Race: {}\n\
                 - Class/Profession: {}\n\
                 - Alignment: {}\n\
                 - Linked Settlement: {}\n\
                 - Linked Components: {}\n\
                 - Role: {}\n\
                 - World Context: {}\n\n\
                 Write 2-3 sentences describing this character's appearance, personality, \
                 background, and what makes them memorable.",
                data.name,
                or_unknown(&data.race),
                or_unknown(&data.class_profession),
                or_unknown(&data.alignment),
                or_none(&data.linked_settlement),
                links(&data.linked_components),
                or_unknown(&data.role),
                data.world_context
            ),
            200,
        ),
        DraftRequest::GeographicalDescription(data) => (
            format!(
                "Create a description for this geographical feature:\n\
                 - Feature Name: {}\n\
                 - Feature Type: {}\n\
                 - Linked Region: {}\n\
                 - Linked Components: {}\n\
                 - World Context: {}\n\n\
                 Write 2-3 sentences describing this geographical feature's appearance, \
                 significance, unique characteristics, and how it fits into the world.",
                data.name,
                data.feature_type,
                or_none(&data.linked_region),
                links(&data.linked_components),
                data.world_context
            ),
            200,
        ),
        DraftRequest::SiteDescription(data) => (
            format!(
                "Create a description for this site:\n\
                 - Site Name: {}\n\
                 - Site Type: {}\n\
                 - Linked Settlement: {}\n\
                 - Linked Region: {}\n\
                 - Linked Components: {}\n\
                 - World Context: {}\n\n\
                 Write 2-3 sentences describing this site's purpose, appearance, atmosphere, \
                 notable features, and what makes it special or important.",
                data.name,
                data.site_type,
                or_none(&data.linked_settlement),
                or_none(&data.linked_region),
                links(&data.linked_components),
                data.world_context
            ),
            200,
        ),
        DraftRequest::AdventureDescription(data) => (
            format!(
                "Create a description for this adventure:\n\
                 - Adventure Name: {}\n\
                 - Difficulty: {}\n\
                 - Linked Components: {}\n\
                 - World Context: {}\n\n\
                 Write 2-3 sentences describing this adventure's setting, plot, atmosphere, \
                 and what makes it exciting and memorable.",
                data.name,
                data.difficulty,
                links(&data.linked_components),
                data.world_context
            ),
            200,
        ),
        DraftRequest::AdventureObjectives(data) => (
            format!(
                "Create objectives for this adventure:\n\
                 - Adventure Name: {}\n\
                 - Difficulty: {}\n\
                 - Linked Components: {}\n\
                 - World Context: {}\n\n\
                 Write 2-3 clear, specific objectives that players need to complete. \
                 Make them appropriate for the {} difficulty level.",
                data.name,
                data.difficulty,
                links(&data.linked_components),
                data.world_context,
                data.difficulty
            ),
            150,
        ),
        DraftRequest::AdventureRewards(data) => (
            format!(
                "Create rewards for this adventure:\n\
                 - Adventure Name: {}\n\
                 - Difficulty: {}\n\
                 - Linked Components: {}\n\
                 - World Context: {}\n\n\
                 Write 1-2 sentences describing appropriate rewards for completing this {} \
                 difficulty adventure. Include experience, treasure, or story rewards.",
                data.name,
                data.difficulty,
                links(&data.linked_components),
                data.world_context,
                data.difficulty
            ),
            150,
        ),
        DraftRequest::HistoryDescription(data) => (
            format!(
                "Create a historical description for this event:\n\
                 - Event Title: {}\n\
                 - Era: {}\n\
                 - Linked Components: {}\n\
                 - World Context: {}\n\n\
                 Write 3-4 sentences describing this historical event, its causes, \
                 consequences, and significance to the world. Make it feel like an \
                 important moment in history.",
                data.title,
                data.era.as_deref().unwrap_or("unknown era"),
                links(&data.linked_components),
                data.world_context
            ),
            250,
        ),
        DraftRequest::MonsterDescription(data) => (
            format!(
                "Create a description for this monster:\n\
                 - Monster Name: {}\n\
                 - Monster Type: {}\n\
                 - Challenge Rating: {}\n\
                 - Habitat: {}\n\
                 - Linked Region: {}\n\
                 - Linked Components: {}\n\
                 - World Context: {}\n\n\
                 Write 2-3 sentences describing this monster's appearance, behavior, lore, \
                 and what makes it dangerous or unique. Make it appropriate for CR {}.",
                data.name,
                data.monster_type,
                data.challenge_rating,
                or_unknown(&data.habitat),
                or_none(&data.linked_region),
                links(&data.linked_components),
                data.world_context,
                data.challenge_rating
            ),
            200,
        ),
        DraftRequest::MonsterAbilities(data) => (
            format!(
                "Create abilities and powers for this monster:\n\
                 - Monster Name: {}\n\
                 - Monster Type: {}\n\
                 - Challenge Rating: {}\n\
                 - Habitat: {}\n\
                 - Linked Region: {}\n\
                 - Linked Components: {}\n\
                 - World Context: {}\n\n\
                 Write 2-3 sentences describing special abilities, attacks, and powers this \
                 monster possesses. Make them appropriate for CR {} and the {} type.",
                data.name,
                data.monster_type,
                data.challenge_rating,
                or_unknown(&data.habitat),
                or_none(&data.linked_region),
                links(&data.linked_components),
                data.world_context,
                data.challenge_rating,
                data.monster_type
            ),
            200,
        ),
    };

    Prompt {
        system: SYSTEM_PROMPT,
        user,
        max_tokens,
    }
}

fn links(names: &[String]) -> String {
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    }
}

fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("None")
}

fn or_unknown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("unknown")
}
