//! Worldsmith domain model.
//!
//! Pure data types for worlds, the ten component variants, and the weak
//! cross-link model. No I/O lives here; the engine crate supplies
//! persistence and service boundaries.

pub mod components;
pub mod error;
pub mod ids;
pub mod links;
pub mod world;

pub use components::{
    Adventure, Alignment, Character, Component, ComponentKind, Difficulty, FeatureType,
    GeographicalFeature, Government, GovernmentType, History, Item, ItemType, Monster,
    MonsterType, PrimaryTerrain, Rarity, Region, Settlement, SettlementType, Site, SiteType,
};
pub use error::DomainError;
pub use ids::{ComponentId, UserId, WorldId};
pub use links::{normalize_link_field, LinkPolicy, LinkSelection};
pub use world::{MagicLevel, TechLevel, Tone, World, WorldPatch};
