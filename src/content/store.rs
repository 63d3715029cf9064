//! # Content Store
//!
//! In-memory pools of themes, mutations, and boss templates.
//!
//! Theme and boss pools are keyed maps with insert/overwrite semantics;
//! the mutation pool is a plain list that permits duplicates. All three
//! pools iterate in insertion order, which keeps seeded generation
//! deterministic. Overwriting a key keeps its original position.

use crate::content::{BossTemplate, Mutation, Theme};
use std::collections::HashMap;

/// Holds the content pools the generator draws from.
///
/// # Examples
///
/// ```
/// use bestiary::ContentStore;
///
/// let store = ContentStore::with_defaults();
/// assert!(store.is_ready());
/// assert!(store.themes().len() >= 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    themes: Vec<Theme>,
    theme_index: HashMap<String, usize>,
    mutations: Vec<Mutation>,
    boss_templates: Vec<BossTemplate>,
    boss_index: HashMap<String, usize>,
}

impl ContentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the built-in fallback content set.
    pub fn with_defaults() -> Self {
        crate::content::loader::builtin_defaults()
    }

    /// Inserts or overwrites a theme under the given key.
    pub fn add_theme(&mut self, key: impl Into<String>, theme: Theme) {
        let key = key.into();
        match self.theme_index.get(&key) {
            Some(&slot) => self.themes[slot] = theme,
            None => {
                self.theme_index.insert(key, self.themes.len());
                self.themes.push(theme);
            }
        }
    }

    /// Appends a mutation to the pool. Duplicates are permitted.
    pub fn add_mutation(&mut self, mutation: Mutation) {
        self.mutations.push(mutation);
    }

    /// Inserts or overwrites a boss template under the given key.
    pub fn add_boss_template(&mut self, key: impl Into<String>, template: BossTemplate) {
        let key = key.into();
        match self.boss_index.get(&key) {
            Some(&slot) => self.boss_templates[slot] = template,
            None => {
                self.boss_index.insert(key, self.boss_templates.len());
                self.boss_templates.push(template);
            }
        }
    }

    /// True once at least one theme is loaded, the generation precondition.
    pub fn is_ready(&self) -> bool {
        !self.themes.is_empty()
    }

    /// All themes in insertion order.
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Looks up a theme by its key.
    pub fn theme(&self, key: &str) -> Option<&Theme> {
        self.theme_index.get(key).map(|&slot| &self.themes[slot])
    }

    /// All mutations in insertion order.
    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    /// All boss templates in insertion order.
    pub fn boss_templates(&self) -> &[BossTemplate] {
        &self.boss_templates
    }

    /// Looks up a boss template by its key.
    pub fn boss_template(&self, key: &str) -> Option<&BossTemplate> {
        self.boss_index
            .get(key)
            .map(|&slot| &self.boss_templates[slot])
    }
}
