//! Worldsmith shared wire types.
//!
//! Types that cross the generation boundary between the engine and its
//! clients.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - serde and serde_json only
//! 2. **No business logic** - pure data types and serialization
//! 3. **Stable wire shapes** - the `{type, data}` request and the
//!    `{content}` / `{error}` responses are the contract; field names never
//!    drift from what the function endpoint accepts

pub mod draft;

pub use draft::{
    AdventureFields, CharacterFields, DraftFailure, DraftRequest, DraftResponse,
    GeographicalFields, GovernmentFields, HistoryFields, MonsterFields, RegionFields, SiteFields,
    WorldDescriptionFields, WorldNameFields,
};
