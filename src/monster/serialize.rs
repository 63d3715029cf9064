//! # Export / Import
//!
//! Byte-level round trip for [`Monster`] records.
//!
//! Export produces the canonical JSON encoding of the full record. Import
//! parses and structurally validates a payload against the record types and
//! trusts every persisted value verbatim: challenge rating, saving throws,
//! and skills are NOT recomputed.

use crate::{BestiaryError, BestiaryResult, Monster};

/// Serializes a monster record to its canonical JSON encoding.
pub fn export_monster(monster: &Monster) -> BestiaryResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(monster)?)
}

/// Parses and validates a monster record from JSON bytes.
///
/// Any missing required field, wrong type, or wrong `daily` spell arity is
/// reported as [`BestiaryError::InvalidRecord`]. No derived field is
/// recomputed.
pub fn import_monster(bytes: &[u8]) -> BestiaryResult<Monster> {
    serde_json::from_slice(bytes).map_err(|e| BestiaryError::InvalidRecord(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Mutation;
    use crate::{
        AbilityScores, Attack, MonsterType, SavingThrows, Size, SkillBonuses, Spellcasting,
    };

    fn sample_monster() -> Monster {
        Monster {
            name: "Hex Serpent".to_string(),
            size: Size::Medium,
            kind: MonsterType::Aberration,
            alignment: "Neutral Evil".to_string(),
            hp: 61,
            ac: 13,
            challenge_rating: 3,
            stats: AbilityScores {
                strength: 14,
                dexterity: 11,
                constitution: 15,
                intelligence: 9,
                wisdom: 12,
                charisma: 10,
            },
            saves: SavingThrows {
                strength: 3,
                dexterity: 0,
                constitution: 2,
                intelligence: -1,
                wisdom: 2,
                charisma: 1,
            },
            skills: SkillBonuses {
                perception: 3,
                stealth: 0,
                arcana: 0,
            },
            senses: "Darkvision 60 ft., Passive Perception 11".to_string(),
            resistances: vec!["cold".to_string()],
            abilities: vec!["Freezing Touch".to_string(), "Frost Armor".to_string()],
            mutations: vec![Mutation {
                name: "Adrenal Surge".to_string(),
                effect: "+1 attack bonus".to_string(),
            }],
            attacks: vec![
                Attack {
                    name: "Frost Crack".to_string(),
                    to_hit_bonus: 4,
                    damage: "2d8".to_string(),
                    damage_type: "cold".to_string(),
                },
                Attack {
                    name: "Frozen Claw".to_string(),
                    to_hit_bonus: 4,
                    damage: "2d8".to_string(),
                    damage_type: "cold".to_string(),
                },
            ],
            spells: Spellcasting {
                save_dc: 11,
                to_hit_bonus: 3,
                at_will: "Ray of Frost".to_string(),
                daily: ["Ice Knife".to_string(), "Cone of Cold".to_string()],
            },
            boss: Some("Mini-Boss".to_string()),
        }
    }

    #[test]
    fn test_round_trip_is_deep_equal() {
        let monster = sample_monster();
        let bytes = export_monster(&monster).unwrap();
        let restored = import_monster(&bytes).unwrap();
        assert_eq!(monster, restored);
    }

    #[test]
    fn test_import_rejects_missing_stats() {
        let monster = sample_monster();
        let mut value = serde_json::to_value(&monster).unwrap();
        value.as_object_mut().unwrap().remove("stats");
        let bytes = serde_json::to_vec(&value).unwrap();

        let err = import_monster(&bytes).unwrap_err();
        assert!(matches!(err, BestiaryError::InvalidRecord(_)));
    }

    #[test]
    fn test_import_rejects_wrong_types() {
        let monster = sample_monster();
        let mut value = serde_json::to_value(&monster).unwrap();
        value["hp"] = serde_json::json!("a lot");
        let bytes = serde_json::to_vec(&value).unwrap();

        let err = import_monster(&bytes).unwrap_err();
        assert!(matches!(err, BestiaryError::InvalidRecord(_)));
    }

    #[test]
    fn test_import_rejects_wrong_daily_arity() {
        let monster = sample_monster();
        let mut value = serde_json::to_value(&monster).unwrap();
        value["spells"]["daily"] = serde_json::json!(["Ice Knife"]);
        let bytes = serde_json::to_vec(&value).unwrap();

        let err = import_monster(&bytes).unwrap_err();
        assert!(matches!(err, BestiaryError::InvalidRecord(_)));
    }

    #[test]
    fn test_import_does_not_recompute_derived_fields() {
        // An inconsistent record (cr does not match hp/ac) imports verbatim.
        let mut monster = sample_monster();
        monster.challenge_rating = 99;
        let bytes = export_monster(&monster).unwrap();
        let restored = import_monster(&bytes).unwrap();
        assert_eq!(restored.challenge_rating, 99);
    }

    #[test]
    fn test_import_rejects_non_json() {
        let err = import_monster(b"not json at all").unwrap_err();
        assert!(matches!(err, BestiaryError::InvalidRecord(_)));
    }
}
