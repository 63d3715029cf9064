//! # Content Loading
//!
//! Content packs, the default data files, and the built-in fallback set.
//!
//! A pack is a single JSON object tagged with `type` ("theme", "mutation",
//! or "boss"). The default content lives in three JSON documents
//! (`themes.json`, `mutations.json`, `bossTemplates.json`); when any of them
//! cannot be read or parsed the loader logs a warning and falls back to a
//! small built-in set, so the generator's preconditions are always
//! satisfiable. Default-content failures are never surfaced as errors.

use crate::content::{BossTemplate, ContentStore, Mutation, SpellList, Theme};
use crate::{BestiaryError, BestiaryResult};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

/// File name of the default theme pool.
pub const THEMES_FILE: &str = "themes.json";
/// File name of the default mutation pool.
pub const MUTATIONS_FILE: &str = "mutations.json";
/// File name of the default boss template pool.
pub const BOSS_TEMPLATES_FILE: &str = "bossTemplates.json";

/// A single externally supplied content unit, tagged by `type`.
///
/// # Examples
///
/// ```
/// use bestiary::ContentPack;
///
/// let json = r#"{"type": "mutation", "name": "Barbed Hide", "effect": "Melee attackers take 2 damage"}"#;
/// let pack: ContentPack = serde_json::from_str(json).unwrap();
/// assert!(matches!(pack, ContentPack::Mutation(_)));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentPack {
    Theme(Theme),
    Mutation(Mutation),
    Boss(BossTemplate),
}

/// Parses a content pack from JSON bytes.
pub fn parse_pack(bytes: &[u8]) -> BestiaryResult<ContentPack> {
    serde_json::from_slice(bytes)
        .map_err(|e| BestiaryError::MalformedContent(format!("bad content pack: {e}")))
}

/// Merges a parsed pack into the store.
///
/// Themes and boss templates are keyed by their `name` field and overwrite
/// existing entries; mutations append.
pub fn apply_pack(store: &mut ContentStore, pack: ContentPack) {
    match pack {
        ContentPack::Theme(theme) => {
            debug!("Adding theme pack: {}", theme.name);
            store.add_theme(theme.name.clone(), theme);
        }
        ContentPack::Mutation(mutation) => {
            debug!("Adding mutation pack: {}", mutation.name);
            store.add_mutation(mutation);
        }
        ContentPack::Boss(template) => {
            debug!("Adding boss template pack: {}", template.name);
            store.add_boss_template(template.name.clone(), template);
        }
    }
}

/// Reads a single pack file and merges it into the store.
pub fn load_pack_file(store: &mut ContentStore, path: &Path) -> BestiaryResult<()> {
    let bytes = fs::read(path)?;
    let pack = parse_pack(&bytes)?;
    apply_pack(store, pack);
    Ok(())
}

/// Loads the default content set from a data directory, falling back to the
/// built-in defaults on any failure.
///
/// This never fails: a missing or unparseable file downgrades to the
/// fallback set and a warning.
pub fn load_default_content(data_dir: &Path) -> ContentStore {
    match read_data_dir(data_dir) {
        Ok(store) => {
            info!(
                "Loaded default content from {}: {} themes, {} mutations, {} boss templates",
                data_dir.display(),
                store.themes().len(),
                store.mutations().len(),
                store.boss_templates().len()
            );
            store
        }
        Err(e) => {
            warn!(
                "Could not load default content from {}: {e}; using built-in fallback data",
                data_dir.display()
            );
            builtin_defaults()
        }
    }
}

fn read_data_dir(data_dir: &Path) -> BestiaryResult<ContentStore> {
    let mut store = ContentStore::new();

    // themes.json and bossTemplates.json are JSON objects keyed by pool key;
    // object order is preserved and becomes the pool's iteration order.
    let themes: serde_json::Map<String, serde_json::Value> =
        serde_json::from_slice(&fs::read(data_dir.join(THEMES_FILE))?)?;
    for (key, value) in themes {
        let theme: Theme = serde_json::from_value(value).map_err(|e| {
            BestiaryError::MalformedContent(format!("theme '{key}' in {THEMES_FILE}: {e}"))
        })?;
        store.add_theme(key, theme);
    }

    let mutations: Vec<Mutation> =
        serde_json::from_slice(&fs::read(data_dir.join(MUTATIONS_FILE))?)?;
    for mutation in mutations {
        store.add_mutation(mutation);
    }

    let templates: serde_json::Map<String, serde_json::Value> =
        serde_json::from_slice(&fs::read(data_dir.join(BOSS_TEMPLATES_FILE))?)?;
    for (key, value) in templates {
        let template: BossTemplate = serde_json::from_value(value).map_err(|e| {
            BestiaryError::MalformedContent(format!(
                "boss template '{key}' in {BOSS_TEMPLATES_FILE}: {e}"
            ))
        })?;
        store.add_boss_template(key, template);
    }

    Ok(store)
}

/// The built-in fallback content set: two themes, two mutations, one boss
/// template. Always satisfies the generator's preconditions.
pub fn builtin_defaults() -> ContentStore {
    let mut store = ContentStore::new();

    store.add_theme(
        "fire",
        Theme {
            name: "Fire".to_string(),
            resistances: vec!["fire".to_string()],
            abilities: vec![
                "Burning Aura".to_string(),
                "Flame Body".to_string(),
                "Inferno Surge".to_string(),
            ],
            spells: SpellList {
                at_will: vec!["Fire Bolt".to_string()],
                daily: vec!["Burning Hands".to_string(), "Fireball".to_string()],
            },
            attacks: vec!["Fire Burst".to_string(), "Ember Bite".to_string()],
        },
    );

    store.add_theme(
        "cold",
        Theme {
            name: "Cold".to_string(),
            resistances: vec!["cold".to_string()],
            abilities: vec!["Frost Armor".to_string(), "Freezing Touch".to_string()],
            spells: SpellList {
                at_will: vec!["Ray of Frost".to_string()],
                daily: vec!["Ice Knife".to_string(), "Cone of Cold".to_string()],
            },
            attacks: vec!["Frost Crack".to_string(), "Frozen Claw".to_string()],
        },
    );

    store.add_mutation(Mutation {
        name: "Chitin Plating".to_string(),
        effect: "AC +2".to_string(),
    });
    store.add_mutation(Mutation {
        name: "Adrenal Surge".to_string(),
        effect: "+1 attack bonus".to_string(),
    });

    store.add_boss_template(
        "miniboss",
        BossTemplate {
            name: "Mini-Boss".to_string(),
            hp_multiplier: 1.25,
            ac_bonus: 0,
            attack_bonus: 2,
            bonus_abilities: 1,
            bonus_mutations: 1,
        },
    );

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_theme_pack() {
        let json = r#"{
            "type": "theme",
            "name": "Storm",
            "res": ["lightning", "thunder"],
            "abilities": ["Static Field"],
            "spells": {"atwill": ["Shocking Grasp"], "daily": ["Lightning Bolt"]},
            "attacks": ["Thunder Slam"]
        }"#;
        let pack = parse_pack(json.as_bytes()).unwrap();
        match pack {
            ContentPack::Theme(theme) => {
                assert_eq!(theme.name, "Storm");
                assert_eq!(theme.resistances.len(), 2);
            }
            other => panic!("expected theme pack, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_boss_pack() {
        let json = r#"{"type":"boss","name":"Warlord","hp":1.5,"ac":2,"atk":3,"abilities":2,"mutations":1}"#;
        let pack = parse_pack(json.as_bytes()).unwrap();
        assert!(matches!(pack, ContentPack::Boss(_)));
    }

    #[test]
    fn test_unknown_pack_type_is_malformed() {
        let err = parse_pack(br#"{"type": "trap", "name": "Pit"}"#).unwrap_err();
        assert!(matches!(err, BestiaryError::MalformedContent(_)));
    }

    #[test]
    fn test_pack_missing_fields_is_malformed() {
        let err = parse_pack(br#"{"type": "theme", "name": "Bare"}"#).unwrap_err();
        assert!(matches!(err, BestiaryError::MalformedContent(_)));
    }

    #[test]
    fn test_theme_pack_overwrites_by_name() {
        let mut store = builtin_defaults();
        let json = r#"{
            "type": "theme",
            "name": "Fire",
            "res": ["fire", "radiant"],
            "abilities": ["Solar Flare"],
            "spells": {"atwill": ["Sacred Flame"], "daily": ["Flame Strike"]},
            "attacks": ["Sun Lash"]
        }"#;
        let before = store.themes().len();
        apply_pack(&mut store, parse_pack(json.as_bytes()).unwrap());
        assert_eq!(store.themes().len(), before);
        assert_eq!(store.theme("Fire").unwrap().abilities, vec!["Solar Flare"]);
    }

    #[test]
    fn test_builtin_defaults_satisfy_preconditions() {
        let store = builtin_defaults();
        assert!(store.is_ready());
        assert!(store.themes().len() >= 2);
        assert!(!store.mutations().is_empty());
        assert!(!store.boss_templates().is_empty());
    }

    #[test]
    fn test_missing_data_dir_falls_back() {
        let store = load_default_content(Path::new("/definitely/not/here"));
        assert!(store.is_ready());
        assert_eq!(store.themes().len(), 2);
    }

    #[test]
    fn test_load_data_dir_preserves_file_order() {
        let dir = tempfile::tempdir().unwrap();

        let themes = r#"{
            "storm": {"name": "Storm", "res": ["lightning"], "abilities": ["Static Field"],
                      "spells": {"atwill": ["Shocking Grasp"], "daily": ["Lightning Bolt"]},
                      "attacks": ["Thunder Slam"]},
            "acid": {"name": "Acid", "res": ["acid"], "abilities": ["Corrosive Skin"],
                     "spells": {"atwill": ["Acid Splash"], "daily": ["Vitriolic Sphere"]},
                     "attacks": ["Caustic Spit"]}
        }"#;
        fs::write(dir.path().join(THEMES_FILE), themes).unwrap();
        fs::write(
            dir.path().join(MUTATIONS_FILE),
            r#"[{"name": "Extra Eyes", "effect": "Advantage on Perception"}]"#,
        )
        .unwrap();
        let mut boss_file = fs::File::create(dir.path().join(BOSS_TEMPLATES_FILE)).unwrap();
        boss_file
            .write_all(br#"{"tyrant": {"name":"Tyrant","hp":2.0,"ac":2,"atk":4,"abilities":2,"mutations":2}}"#)
            .unwrap();

        let store = load_default_content(dir.path());
        let names: Vec<_> = store.themes().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Storm", "Acid"]);
        assert_eq!(store.mutations().len(), 1);
        assert_eq!(store.boss_template("tyrant").unwrap().attack_bonus, 4);
    }

    #[test]
    fn test_corrupt_default_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(THEMES_FILE), "{ not json").unwrap();

        let store = load_default_content(dir.path());
        // Fallback set, not the corrupt file.
        assert_eq!(store.themes().len(), 2);
        assert!(store.theme("fire").is_some());
    }

    #[test]
    fn test_load_pack_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pack.json");
        fs::write(
            &path,
            r#"{"type": "mutation", "name": "Venom Glands", "effect": "Attacks deal +1d4 poison"}"#,
        )
        .unwrap();

        let mut store = ContentStore::new();
        load_pack_file(&mut store, &path).unwrap();
        assert_eq!(store.mutations().len(), 1);
        assert_eq!(store.mutations()[0].name, "Venom Glands");
    }
}
