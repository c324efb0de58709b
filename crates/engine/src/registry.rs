//! Component type registry.
//!
//! A static, immutable catalog mapping logical type keys to persistence and
//! presentation metadata. Every entity-store operation resolves its type
//! key here first; an unknown key fails fast rather than guessing a table
//! name.

use worldsmith_domain::ComponentKind;

/// The multi-link field every component row carries.
pub const MULTI_LINK_FIELD: &str = "linked_components";

/// Catalog entry for one component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentTypeInfo {
    pub kind: ComponentKind,
    /// Logical type key used by clients.
    pub key: &'static str,
    /// Persistence table name.
    pub table: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Message shown when a world has no instances of this type.
    pub empty_message: &'static str,
    /// Opaque presentation tag, passed through to clients.
    pub icon: &'static str,
    /// Fields holding zero-or-one reference to another component.
    pub single_link_fields: &'static [&'static str],
}

static CATALOG: [ComponentTypeInfo; 10] = [
    ComponentTypeInfo {
        kind: ComponentKind::Region,
        key: "regions",
        table: "regions",
        title: "Regions",
        empty_message: "No regions yet. Create your first region to start mapping the world.",
        icon: "map",
        single_link_fields: &[],
    },
    ComponentTypeInfo {
        kind: ComponentKind::Government,
        key: "governments",
        table: "governments",
        title: "Governments",
        empty_message: "No governments yet. Decide who holds power here.",
        icon: "landmark",
        single_link_fields: &["linked_region"],
    },
    ComponentTypeInfo {
        kind: ComponentKind::GeographicalFeature,
        key: "geographical",
        table: "geographical_features",
        title: "Geographical Features",
        empty_message: "No geographical features yet. Add a mountain, river, or forest.",
        icon: "mountain",
        single_link_fields: &["linked_region"],
    },
    ComponentTypeInfo {
        kind: ComponentKind::Site,
        key: "sites",
        table: "sites",
        title: "Sites",
        empty_message: "No sites yet. Add a tavern, temple, or ruin worth visiting.",
        icon: "building",
        single_link_fields: &["linked_settlement", "linked_region"],
    },
    ComponentTypeInfo {
        kind: ComponentKind::Adventure,
        key: "adventures",
        table: "adventures",
        title: "Adventures",
        empty_message: "No adventures yet. Sketch the first quest.",
        icon: "compass",
        single_link_fields: &[],
    },
    ComponentTypeInfo {
        kind: ComponentKind::Character,
        key: "characters",
        table: "characters",
        title: "Characters",
        empty_message: "No characters yet. The world needs people in it.",
        icon: "users",
        single_link_fields: &["linked_settlement"],
    },
    ComponentTypeInfo {
        kind: ComponentKind::History,
        key: "history",
        table: "history",
        title: "History",
        empty_message: "No history yet. Record the events that shaped this world.",
        icon: "scroll",
        single_link_fields: &[],
    },
    ComponentTypeInfo {
        kind: ComponentKind::Monster,
        key: "monsters",
        table: "monsters",
        title: "Monsters",
        empty_message: "No monsters yet. Every world has something lurking.",
        icon: "skull",
        single_link_fields: &["linked_region"],
    },
    ComponentTypeInfo {
        kind: ComponentKind::Item,
        key: "items",
        table: "items",
        title: "Items",
        empty_message: "No items yet. Forge something worth finding.",
        icon: "gem",
        single_link_fields: &["linked_character", "linked_site"],
    },
    ComponentTypeInfo {
        kind: ComponentKind::Settlement,
        key: "settlements",
        table: "settlements",
        title: "Settlements",
        empty_message: "No settlements yet. Found the first village.",
        icon: "castle",
        single_link_fields: &["linked_region", "linked_government"],
    },
];

/// A type key absent from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown component type: {0}")]
pub struct UnknownComponentType(pub String);

/// Resolve a logical type key to its catalog entry.
pub fn resolve(key: &str) -> Result<&'static ComponentTypeInfo, UnknownComponentType> {
    CATALOG
        .iter()
        .find(|info| info.key == key)
        .ok_or_else(|| UnknownComponentType(key.to_string()))
}

/// The full catalog in stable display order.
pub fn all() -> &'static [ComponentTypeInfo] {
    &CATALOG
}

/// Catalog entry for a known kind.
pub fn for_kind(kind: ComponentKind) -> &'static ComponentTypeInfo {
    // Every kind has a catalog entry; the registry and ComponentKind::ALL
    // are maintained together.
    CATALOG
        .iter()
        .find(|info| info.kind == kind)
        .unwrap_or(&CATALOG[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_catalog_entry() {
        for kind in ComponentKind::ALL {
            let info = for_kind(kind);
            assert_eq!(info.kind, kind);
            assert_eq!(resolve(info.key).expect("resolvable").kind, kind);
        }
        assert_eq!(all().len(), ComponentKind::ALL.len());
    }

    #[test]
    fn geographical_key_maps_to_its_own_table() {
        let info = resolve("geographical").expect("known key");
        assert_eq!(info.table, "geographical_features");
    }

    #[test]
    fn unknown_keys_fail_fast() {
        let err = resolve("dragons").expect_err("unknown key");
        assert_eq!(err, UnknownComponentType("dragons".to_string()));
    }

    #[test]
    fn single_link_fields_match_the_documented_shapes() {
        assert!(resolve("regions").expect("known").single_link_fields.is_empty());
        assert_eq!(
            resolve("settlements").expect("known").single_link_fields,
            &["linked_region", "linked_government"]
        );
        assert_eq!(
            resolve("items").expect("known").single_link_fields,
            &["linked_character", "linked_site"]
        );
    }
}
