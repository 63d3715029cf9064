//! # Generation Module
//!
//! The monster generation algorithm.
//!
//! [`MonsterGenerator`] turns a [`ContentStore`] plus a [`RandomSource`] into
//! one complete [`Monster`] record through a fixed sequence of rolls. The
//! draw order is part of the contract: under a seeded or scripted source the
//! same store produces the same monster, which is what the golden tests rely
//! on.
//!
//! One quirk is deliberate: the challenge rating is derived from the rolled
//! hp/ac *before* any boss template scales them, so a boss's displayed hp/ac
//! overshoot its CR.

pub mod random;

pub use random::*;

use crate::content::{ContentStore, Theme};
use crate::monster::{
    ability_modifier, AbilityScores, Attack, Monster, MonsterType, SavingThrows, Size,
    SkillBonuses, Spellcasting,
};
use crate::{BestiaryError, BestiaryResult};
use log::debug;

/// Name pool for generated monsters.
pub const MONSTER_NAMES: [&str; 5] = [
    "Gloomfang",
    "Storm Harrower",
    "Ash Hydra",
    "Voidprowler",
    "Hex Serpent",
];

/// Size pool for generated monsters.
pub const SIZES: [Size; 4] = [Size::Small, Size::Medium, Size::Large, Size::Huge];

/// Type pool for generated monsters.
pub const MONSTER_TYPES: [MonsterType; 5] = [
    MonsterType::Monstrosity,
    MonsterType::Dragon,
    MonsterType::Aberration,
    MonsterType::Fiend,
    MonsterType::Undead,
];

/// Alignment pool for generated monsters.
pub const ALIGNMENTS: [&str; 5] = [
    "Neutral",
    "Chaotic Evil",
    "Lawful Good",
    "Chaotic Neutral",
    "Neutral Evil",
];

/// Probability that a generated monster gets a boss template.
pub const BOSS_CHANCE: f64 = 0.35;

/// Trait for content generators.
///
/// Keeps generation behind a seam so callers depend on the contract rather
/// than a concrete generator.
pub trait Generator<T> {
    /// Generates content from the store using the provided random source.
    fn generate(&self, store: &ContentStore, rng: &mut dyn RandomSource) -> BestiaryResult<T>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Generates complete monster statblock records.
///
/// # Examples
///
/// ```
/// use bestiary::{ContentStore, Generator, MonsterGenerator};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let store = ContentStore::with_defaults();
/// let mut rng = StdRng::seed_from_u64(42);
/// let monster = MonsterGenerator.generate(&store, &mut rng).unwrap();
/// assert!((2..=4).contains(&monster.attacks.len()));
/// assert_eq!(monster.spells.daily.len(), 2);
/// ```
pub struct MonsterGenerator;

impl Generator<Monster> for MonsterGenerator {
    fn generate(&self, store: &ContentStore, rng: &mut dyn RandomSource) -> BestiaryResult<Monster> {
        if !store.is_ready() {
            return Err(BestiaryError::EmptyContent);
        }
        let themes = store.themes();
        if themes.len() < 2 {
            return Err(BestiaryError::InsufficientThemes);
        }

        let name = pick(rng, &MONSTER_NAMES, "monster names")?.to_string();
        let size = *pick(rng, &SIZES, "sizes")?;
        let kind = *pick(rng, &MONSTER_TYPES, "monster types")?;
        let alignment = pick(rng, &ALIGNMENTS, "alignments")?.to_string();

        // Two distinct themes, rejection-sampled on the second pick.
        let first = pick_index(rng, themes.len());
        let mut second = pick_index(rng, themes.len());
        while second == first {
            second = pick_index(rng, themes.len());
        }
        let theme_a = &themes[first];
        let theme_b = &themes[second];

        // Base hp/ac are frozen here for the CR derivation; boss scaling
        // mutates hp/ac afterwards without touching the CR.
        let base_hp = roll_range(rng, 40, 160);
        let base_ac = roll_range(rng, 12, 16);
        let challenge_rating = (base_hp + base_ac) / 20;

        let stats = AbilityScores {
            strength: 10 + challenge_rating + roll_range(rng, 0, 3),
            dexterity: 10 + roll_range(rng, 0, 5),
            constitution: 12 + challenge_rating,
            intelligence: 8 + roll_range(rng, 0, 6),
            wisdom: 8 + roll_range(rng, 0, 6),
            charisma: 10 + roll_range(rng, 0, 6),
        };

        let saves = SavingThrows {
            strength: ability_modifier(stats.strength) + roll_range(rng, 0, 3),
            dexterity: ability_modifier(stats.dexterity) + roll_range(rng, 0, 3),
            constitution: ability_modifier(stats.constitution) + roll_range(rng, 0, 3),
            intelligence: ability_modifier(stats.intelligence) + roll_range(rng, 0, 3),
            wisdom: ability_modifier(stats.wisdom) + roll_range(rng, 0, 3),
            charisma: ability_modifier(stats.charisma) + roll_range(rng, 0, 3),
        };

        let skills = SkillBonuses {
            perception: ability_modifier(stats.wisdom) + roll_range(rng, 0, 3),
            stealth: ability_modifier(stats.dexterity) + roll_range(rng, 0, 3),
            arcana: ability_modifier(stats.intelligence) + roll_range(rng, 0, 3),
        };

        let senses = format!(
            "Darkvision 60 ft., Passive Perception {}",
            10 + ability_modifier(stats.wisdom)
        );

        let mutation_count = mutation_count_for(challenge_rating);
        let mut mutations = Vec::with_capacity(mutation_count);
        for _ in 0..mutation_count {
            mutations.push(pick(rng, store.mutations(), "mutations")?.clone());
        }

        let mut hp = base_hp;
        let mut ac = base_ac;
        let mut boss = None;
        if rng.next_float() < BOSS_CHANCE {
            if store.boss_templates().is_empty() {
                debug!("Boss roll succeeded but no boss templates are loaded; skipping");
            } else {
                let template = pick(rng, store.boss_templates(), "boss templates")?;
                hp = (hp as f64 * template.hp_multiplier).floor() as i32;
                ac += template.ac_bonus;
                boss = Some(template.clone());
            }
        }

        let boss_attack_bonus = boss.as_ref().map_or(0, |t| t.attack_bonus);
        let attacks = generate_attacks(rng, theme_a, theme_b, challenge_rating, boss_attack_bonus)?;
        let spells = generate_spells(rng, theme_a, theme_b, ability_modifier(stats.charisma))?;

        let mut abilities = vec![
            pick(rng, &theme_a.abilities, "special abilities")?.clone(),
            pick(rng, &theme_b.abilities, "special abilities")?.clone(),
        ];
        if let Some(template) = &boss {
            let pool: Vec<String> = theme_a
                .abilities
                .iter()
                .chain(&theme_b.abilities)
                .cloned()
                .collect();
            for _ in 0..template.bonus_abilities {
                abilities.push(pick(rng, &pool, "special abilities")?.clone());
            }
        }

        // First-seen-order union, duplicates removed.
        let mut resistances: Vec<String> = Vec::new();
        for resistance in theme_a.resistances.iter().chain(&theme_b.resistances) {
            if !resistances.contains(resistance) {
                resistances.push(resistance.clone());
            }
        }

        debug!(
            "Generated {name} (CR {challenge_rating}, themes {} + {}, boss: {:?})",
            theme_a.name,
            theme_b.name,
            boss.as_ref().map(|t| t.name.as_str())
        );

        Ok(Monster {
            name,
            size,
            kind,
            alignment,
            hp,
            ac,
            challenge_rating,
            stats,
            saves,
            skills,
            senses,
            resistances,
            abilities,
            mutations,
            attacks,
            spells,
            boss: boss.map(|t| t.name),
        })
    }

    fn generator_type(&self) -> &'static str {
        "MonsterGenerator"
    }
}

/// Number of mutations a monster of the given challenge rating carries.
pub fn mutation_count_for(challenge_rating: i32) -> usize {
    if challenge_rating > 14 {
        3
    } else if challenge_rating > 8 {
        2
    } else {
        1
    }
}

/// Damage expression for the given challenge rating.
pub fn damage_for_cr(challenge_rating: i32) -> &'static str {
    if challenge_rating >= 15 {
        "4d12"
    } else if challenge_rating >= 8 {
        "3d10"
    } else {
        "2d8"
    }
}

fn generate_attacks(
    rng: &mut dyn RandomSource,
    theme_a: &Theme,
    theme_b: &Theme,
    challenge_rating: i32,
    boss_bonus: i32,
) -> BestiaryResult<Vec<Attack>> {
    let name_pool: Vec<String> = theme_a
        .attacks
        .iter()
        .chain(&theme_b.attacks)
        .cloned()
        .collect();
    let type_pool = [theme_a.name.to_lowercase(), theme_b.name.to_lowercase()];

    let count = roll_range(rng, 2, 5) as usize;
    let to_hit_bonus = challenge_rating / 2 + 3 + boss_bonus;
    let damage = damage_for_cr(challenge_rating);

    let mut attacks = Vec::with_capacity(count);
    for _ in 0..count {
        attacks.push(Attack {
            name: pick(rng, &name_pool, "attack names")?.clone(),
            to_hit_bonus,
            damage: damage.to_string(),
            damage_type: pick(rng, &type_pool, "damage types")?.clone(),
        });
    }
    Ok(attacks)
}

fn generate_spells(
    rng: &mut dyn RandomSource,
    theme_a: &Theme,
    theme_b: &Theme,
    charisma_mod: i32,
) -> BestiaryResult<Spellcasting> {
    let at_will_pool: Vec<String> = theme_a
        .spells
        .at_will
        .iter()
        .chain(&theme_b.spells.at_will)
        .cloned()
        .collect();
    let at_will = pick(rng, &at_will_pool, "at-will spells")?.clone();

    // One daily spell from each theme, never a union pick.
    let daily = [
        pick(rng, &theme_a.spells.daily, "daily spells")?.clone(),
        pick(rng, &theme_b.spells.daily, "daily spells")?.clone(),
    ];

    Ok(Spellcasting {
        save_dc: 8 + charisma_mod + 3,
        to_hit_bonus: charisma_mod + 3,
        at_will,
        daily,
    })
}
