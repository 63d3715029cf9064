//! # Monster Record
//!
//! The generated/exported/imported creature record and its component types.
//!
//! This is the single data contract shared by the generator, the renderer,
//! and export/import. Field names on the wire follow the legacy statblock
//! export format, so exported files stay interchangeable. Derived values
//! (challenge rating, saving throws, skills) are frozen at generation time
//! and are never recomputed on import.

pub mod serialize;

pub use serialize::*;

use crate::content::Mutation;
use serde::{Deserialize, Serialize};

/// Creature size category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
    Huge,
}

/// Creature type category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterType {
    Monstrosity,
    Dragon,
    Aberration,
    Fiend,
    Undead,
}

/// The six raw ability scores.
///
/// Modifiers are always derived with [`ability_modifier`] and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    #[serde(rename = "STR")]
    pub strength: i32,
    #[serde(rename = "DEX")]
    pub dexterity: i32,
    #[serde(rename = "CON")]
    pub constitution: i32,
    #[serde(rename = "INT")]
    pub intelligence: i32,
    #[serde(rename = "WIS")]
    pub wisdom: i32,
    #[serde(rename = "CHA")]
    pub charisma: i32,
}

/// Saving throw bonuses, one per ability.
///
/// These already include a random proficiency-like bonus on top of the
/// ability modifier and are stored as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingThrows {
    #[serde(rename = "STR")]
    pub strength: i32,
    #[serde(rename = "DEX")]
    pub dexterity: i32,
    #[serde(rename = "CON")]
    pub constitution: i32,
    #[serde(rename = "INT")]
    pub intelligence: i32,
    #[serde(rename = "WIS")]
    pub wisdom: i32,
    #[serde(rename = "CHA")]
    pub charisma: i32,
}

/// Skill bonuses for the three skills every statblock carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBonuses {
    #[serde(rename = "Perception")]
    pub perception: i32,
    #[serde(rename = "Stealth")]
    pub stealth: i32,
    #[serde(rename = "Arcana")]
    pub arcana: i32,
}

/// A single attack line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    /// Attack name, drawn from the chosen themes' attack pools
    pub name: String,
    /// To-hit bonus
    #[serde(rename = "bonus")]
    pub to_hit_bonus: i32,
    /// Damage expression in dice notation, e.g. "3d10"
    pub damage: String,
    /// Damage type, the lower-cased name of one of the two themes
    #[serde(rename = "type")]
    pub damage_type: String,
}

/// The spellcasting block of a statblock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spellcasting {
    /// Spell save DC
    #[serde(rename = "dc")]
    pub save_dc: i32,
    /// Spell attack bonus
    #[serde(rename = "hit")]
    pub to_hit_bonus: i32,
    /// The at-will spell
    #[serde(rename = "atwill")]
    pub at_will: String,
    /// The two once-per-day spells, one from each theme
    pub daily: [String; 2],
}

/// A complete monster record.
///
/// Created once per generation call and immutable afterwards; import replaces
/// a record wholesale, trusting every persisted value verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub size: Size,
    #[serde(rename = "type")]
    pub kind: MonsterType,
    pub alignment: String,
    pub hp: i32,
    pub ac: i32,
    /// Derived from the pre-boss hp/ac as floor((hp + ac) / 20). Boss
    /// scaling is applied to hp/ac afterwards, so the stored value reflects
    /// the creature's base power.
    #[serde(rename = "cr")]
    pub challenge_rating: i32,
    pub stats: AbilityScores,
    pub saves: SavingThrows,
    pub skills: SkillBonuses,
    pub senses: String,
    /// Deduplicated union of the two themes' resistance lists
    pub resistances: Vec<String>,
    pub abilities: Vec<String>,
    pub mutations: Vec<Mutation>,
    pub attacks: Vec<Attack>,
    pub spells: Spellcasting,
    /// Boss template name, present only when the boss roll succeeded
    pub boss: Option<String>,
}

impl Monster {
    /// True when a boss template was applied during generation.
    pub fn is_boss(&self) -> bool {
        self.boss.is_some()
    }
}

/// Derives the standard ability modifier from a raw score.
///
/// # Examples
///
/// ```
/// use bestiary::ability_modifier;
///
/// assert_eq!(ability_modifier(10), 0);
/// assert_eq!(ability_modifier(15), 2);
/// assert_eq!(ability_modifier(8), -1);
/// assert_eq!(ability_modifier(7), -2);
/// ```
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}
