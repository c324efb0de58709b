//! Component variants.
//!
//! A component is one typed entity instance belonging to exactly one world.
//! The ten variants are a tagged union keyed by [`ComponentKind`]; shape
//! metadata (persistence table, link fields) lives in the engine's type
//! registry, not in a class hierarchy.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::{ComponentId, DomainError, WorldId};

/// Declares a component category enum with its wire names, plus the usual
/// `as_str`/`Display`/`FromStr` trio.
macro_rules! category_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $key:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok(Self::$variant),)+
                    _ => Err($crate::DomainError::parse(format!(
                        concat!("Unknown ", stringify!($name), ": {}"),
                        s
                    ))),
                }
            }
        }
    };
}
pub(crate) use category_enum;

mod adventure;
mod character;
mod geographical;
mod government;
mod history;
mod item;
mod monster;
mod region;
mod settlement;
mod site;

pub use adventure::{Adventure, Difficulty};
pub use character::{Alignment, Character};
pub use geographical::{FeatureType, GeographicalFeature};
pub use government::{Government, GovernmentType};
pub use history::History;
pub use item::{Item, ItemType, Rarity};
pub use monster::{Monster, MonsterType};
pub use region::{PrimaryTerrain, Region};
pub use settlement::{Settlement, SettlementType};
pub use site::{Site, SiteType};

/// Discriminant for the ten component variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Region,
    Government,
    GeographicalFeature,
    Site,
    Adventure,
    Character,
    History,
    Monster,
    Item,
    Settlement,
}

impl ComponentKind {
    /// All kinds in stable display order.
    pub const ALL: [ComponentKind; 10] = [
        Self::Region,
        Self::Government,
        Self::GeographicalFeature,
        Self::Site,
        Self::Adventure,
        Self::Character,
        Self::History,
        Self::Monster,
        Self::Item,
        Self::Settlement,
    ];

    /// The logical type key used by clients and the type registry.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Region => "regions",
            Self::Government => "governments",
            Self::GeographicalFeature => "geographical",
            Self::Site => "sites",
            Self::Adventure => "adventures",
            Self::Character => "characters",
            Self::History => "history",
            Self::Monster => "monsters",
            Self::Item => "items",
            Self::Settlement => "settlements",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ComponentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown component kind: {s}")))
    }
}

/// One typed component instance.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Component {
    Region(Region),
    Government(Government),
    GeographicalFeature(GeographicalFeature),
    Site(Site),
    Adventure(Adventure),
    Character(Character),
    History(History),
    Monster(Monster),
    Item(Item),
    Settlement(Settlement),
}

impl Component {
    /// Deserialize a raw store row into the variant named by `kind`.
    pub fn from_row(kind: ComponentKind, row: Value) -> Result<Self, DomainError> {
        fn decode<T: serde::de::DeserializeOwned>(
            kind: ComponentKind,
            row: Value,
        ) -> Result<T, DomainError> {
            serde_json::from_value(row)
                .map_err(|e| DomainError::parse(format!("bad {} row: {e}", kind.key())))
        }

        Ok(match kind {
            ComponentKind::Region => Self::Region(decode(kind, row)?),
            ComponentKind::Government => Self::Government(decode(kind, row)?),
            ComponentKind::GeographicalFeature => Self::GeographicalFeature(decode(kind, row)?),
            ComponentKind::Site => Self::Site(decode(kind, row)?),
            ComponentKind::Adventure => Self::Adventure(decode(kind, row)?),
            ComponentKind::Character => Self::Character(decode(kind, row)?),
            ComponentKind::History => Self::History(decode(kind, row)?),
            ComponentKind::Monster => Self::Monster(decode(kind, row)?),
            ComponentKind::Item => Self::Item(decode(kind, row)?),
            ComponentKind::Settlement => Self::Settlement(decode(kind, row)?),
        })
    }

    /// Serialize into the store's row shape.
    pub fn to_row(&self) -> Result<Value, DomainError> {
        serde_json::to_value(self)
            .map_err(|e| DomainError::parse(format!("bad {} component: {e}", self.kind().key())))
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Region(_) => ComponentKind::Region,
            Self::Government(_) => ComponentKind::Government,
            Self::GeographicalFeature(_) => ComponentKind::GeographicalFeature,
            Self::Site(_) => ComponentKind::Site,
            Self::Adventure(_) => ComponentKind::Adventure,
            Self::Character(_) => ComponentKind::Character,
            Self::History(_) => ComponentKind::History,
            Self::Monster(_) => ComponentKind::Monster,
            Self::Item(_) => ComponentKind::Item,
            Self::Settlement(_) => ComponentKind::Settlement,
        }
    }

    pub fn id(&self) -> ComponentId {
        match self {
            Self::Region(c) => c.id,
            Self::Government(c) => c.id,
            Self::GeographicalFeature(c) => c.id,
            Self::Site(c) => c.id,
            Self::Adventure(c) => c.id,
            Self::Character(c) => c.id,
            Self::History(c) => c.id,
            Self::Monster(c) => c.id,
            Self::Item(c) => c.id,
            Self::Settlement(c) => c.id,
        }
    }

    pub fn world_id(&self) -> WorldId {
        match self {
            Self::Region(c) => c.world_id,
            Self::Government(c) => c.world_id,
            Self::GeographicalFeature(c) => c.world_id,
            Self::Site(c) => c.world_id,
            Self::Adventure(c) => c.world_id,
            Self::Character(c) => c.world_id,
            Self::History(c) => c.world_id,
            Self::Monster(c) => c.world_id,
            Self::Item(c) => c.world_id,
            Self::Settlement(c) => c.world_id,
        }
    }

    /// Display name. History rows carry a `title` instead of a `name`.
    pub fn name(&self) -> &str {
        match self {
            Self::Region(c) => &c.name,
            Self::Government(c) => &c.name,
            Self::GeographicalFeature(c) => &c.name,
            Self::Site(c) => &c.name,
            Self::Adventure(c) => &c.name,
            Self::Character(c) => &c.name,
            Self::History(c) => &c.title,
            Self::Monster(c) => &c.name,
            Self::Item(c) => &c.name,
            Self::Settlement(c) => &c.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Region(c) => &c.description,
            Self::Government(c) => &c.description,
            Self::GeographicalFeature(c) => &c.description,
            Self::Site(c) => &c.description,
            Self::Adventure(c) => &c.description,
            Self::Character(c) => &c.description,
            Self::History(c) => &c.description,
            Self::Monster(c) => &c.description,
            Self::Item(c) => &c.description,
            Self::Settlement(c) => &c.description,
        }
    }

    /// The untyped multi-link set.
    pub fn linked_components(&self) -> &[ComponentId] {
        match self {
            Self::Region(c) => &c.linked_components,
            Self::Government(c) => &c.linked_components,
            Self::GeographicalFeature(c) => &c.linked_components,
            Self::Site(c) => &c.linked_components,
            Self::Adventure(c) => &c.linked_components,
            Self::Character(c) => &c.linked_components,
            Self::History(c) => &c.linked_components,
            Self::Monster(c) => &c.linked_components,
            Self::Item(c) => &c.linked_components,
            Self::Settlement(c) => &c.linked_components,
        }
    }
}
