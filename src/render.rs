//! # Rendering Module
//!
//! Plain-text statblock rendering for [`Monster`] records.
//!
//! The renderer consumes the record as-is. The only values it computes are
//! the display modifiers shown next to the raw ability scores, which the
//! data model defines as derived and never stored.

use crate::monster::{ability_modifier, Monster};
use std::fmt;

/// Display adapter that formats a monster as a text statblock.
pub struct Statblock<'a>(pub &'a Monster);

/// Renders a monster record as a text statblock.
///
/// # Examples
///
/// ```
/// use bestiary::{render_statblock, Session};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut session = Session::with_defaults();
/// let mut rng = StdRng::seed_from_u64(1);
/// let monster = session.generate(&mut rng).unwrap();
/// let text = render_statblock(monster);
/// assert!(text.contains("Challenge:"));
/// ```
pub fn render_statblock(monster: &Monster) -> String {
    Statblock(monster).to_string()
}

fn signed(value: i32) -> String {
    format!("{value:+}")
}

impl fmt::Display for Statblock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.0;

        match &m.boss {
            Some(boss) => writeln!(f, "{} - {}", m.name, boss)?,
            None => writeln!(f, "{}", m.name)?,
        }
        writeln!(f, "{:?} {:?}, {}", m.size, m.kind, m.alignment)?;
        writeln!(f, "AC: {}   HP: {}   Speed: 30 ft.", m.ac, m.hp)?;

        writeln!(f, "STR      DEX      CON      INT      WIS      CHA")?;
        for score in [
            m.stats.strength,
            m.stats.dexterity,
            m.stats.constitution,
            m.stats.intelligence,
            m.stats.wisdom,
            m.stats.charisma,
        ] {
            write!(f, "{:<9}", format!("{} ({})", score, signed(ability_modifier(score))))?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "Saving Throws: STR {}, DEX {}, CON {}",
            signed(m.saves.strength),
            signed(m.saves.dexterity),
            signed(m.saves.constitution)
        )?;
        writeln!(
            f,
            "Skills: Perception {}, Stealth {}, Arcana {}",
            signed(m.skills.perception),
            signed(m.skills.stealth),
            signed(m.skills.arcana)
        )?;

        if m.resistances.is_empty() {
            writeln!(f, "Damage Resistances: None")?;
        } else {
            writeln!(f, "Damage Resistances: {}", m.resistances.join(", "))?;
        }
        writeln!(f, "Senses: {}", m.senses)?;
        writeln!(f, "Languages: Common")?;
        writeln!(f, "Challenge: {}", m.challenge_rating)?;

        writeln!(f)?;
        writeln!(f, "Special Abilities")?;
        for ability in &m.abilities {
            writeln!(f, "  {ability}")?;
        }

        writeln!(f)?;
        writeln!(f, "Mutations")?;
        if m.mutations.is_empty() {
            writeln!(f, "  No mutations")?;
        } else {
            for mutation in &m.mutations {
                writeln!(f, "  {}. {}", mutation.name, mutation.effect)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Spellcasting")?;
        writeln!(
            f,
            "  Spell save DC {}, {} to hit. At will: {}. 1/day: {}.",
            m.spells.save_dc,
            signed(m.spells.to_hit_bonus),
            m.spells.at_will,
            m.spells.daily.join(", ")
        )?;

        writeln!(f)?;
        writeln!(f, "Actions")?;
        for attack in &m.attacks {
            writeln!(
                f,
                "  {}. {} to hit, {} {} damage.",
                attack.name,
                signed(attack.to_hit_bonus),
                attack.damage,
                attack.damage_type
            )?;
        }

        Ok(())
    }
}
