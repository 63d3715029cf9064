//! # Content Module
//!
//! Thematic content the generator draws from: themes, mutations, and boss
//! templates, plus the store that pools them and the pack/default loaders.
//!
//! Content is pure data. Entities are immutable once loaded; the store only
//! supports insert/overwrite and lookup. Field names on the wire follow the
//! legacy content-pack format so existing packs load unchanged.

pub mod loader;
pub mod store;

pub use loader::*;
pub use store::*;

use serde::{Deserialize, Serialize};

/// At-will and once-per-day spell lists of a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellList {
    /// Spells castable at will
    #[serde(rename = "atwill")]
    pub at_will: Vec<String>,
    /// Spells castable once per day
    pub daily: Vec<String>,
}

/// A thematic bundle of flavor-linked content (e.g. Fire, Cold).
///
/// Lists may be empty at load time; generation fails lazily with a
/// malformed-content error when it needs a draw from an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Display name, also used lower-cased as a damage type
    pub name: String,
    /// Damage resistances granted by this theme
    #[serde(rename = "res")]
    pub resistances: Vec<String>,
    /// Special ability names
    pub abilities: Vec<String>,
    /// Spell lists
    pub spells: SpellList,
    /// Attack names
    pub attacks: Vec<String>,
}

/// A single mutation a monster can carry. Duplicates are allowed in the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mutation {
    pub name: String,
    pub effect: String,
}

/// A modifier bundle applied probabilistically to scale up a creature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossTemplate {
    /// Display name, recorded on the monster when applied
    pub name: String,
    /// Multiplier applied to the rolled hit points
    #[serde(rename = "hp")]
    pub hp_multiplier: f64,
    /// Flat bonus added to armor class
    #[serde(rename = "ac")]
    pub ac_bonus: i32,
    /// Flat bonus added to every attack's to-hit
    #[serde(rename = "atk")]
    pub attack_bonus: i32,
    /// Extra special abilities drawn from the themes' combined pool
    #[serde(rename = "abilities")]
    pub bonus_abilities: u32,
    /// Extra mutation count. Carried for format compatibility but not
    /// consumed by the generation algorithm.
    #[serde(rename = "mutations")]
    pub bonus_mutations: u32,
}
