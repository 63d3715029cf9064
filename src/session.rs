//! # Session Module
//!
//! Session state: one content store plus the single current-monster slot,
//! passed explicitly instead of living in globals.
//!
//! The slot has last-writer-wins semantics. Generation and a successful
//! import each overwrite it wholesale; a failed import leaves it untouched,
//! so an error never costs the user their current monster.

use crate::content::ContentStore;
use crate::generation::{Generator, MonsterGenerator, RandomSource};
use crate::monster::{export_monster, import_monster, Monster};
use crate::{BestiaryError, BestiaryResult};

/// A generation session: content pools and the current monster.
///
/// # Examples
///
/// ```
/// use bestiary::Session;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut session = Session::with_defaults();
/// assert!(session.current().is_none());
///
/// let mut rng = StdRng::seed_from_u64(7);
/// session.generate(&mut rng).unwrap();
/// assert!(session.current().is_some());
/// ```
#[derive(Debug, Default)]
pub struct Session {
    store: ContentStore,
    current: Option<Monster>,
}

impl Session {
    /// Creates a session over the given content store.
    pub fn new(store: ContentStore) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Creates a session seeded with the built-in default content.
    pub fn with_defaults() -> Self {
        Self::new(ContentStore::with_defaults())
    }

    /// The content store.
    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Mutable access to the content store, for merging packs.
    pub fn store_mut(&mut self) -> &mut ContentStore {
        &mut self.store
    }

    /// The current monster, if one has been generated or imported.
    pub fn current(&self) -> Option<&Monster> {
        self.current.as_ref()
    }

    /// Generates a new monster and makes it current.
    pub fn generate(&mut self, rng: &mut dyn RandomSource) -> BestiaryResult<&Monster> {
        let monster = MonsterGenerator.generate(&self.store, rng)?;
        Ok(&*self.current.insert(monster))
    }

    /// Exports the current monster as canonical JSON bytes.
    pub fn export_current(&self) -> BestiaryResult<Vec<u8>> {
        let monster = self.current.as_ref().ok_or_else(|| {
            BestiaryError::InvalidState("no monster to export; generate one first".to_string())
        })?;
        export_monster(monster)
    }

    /// Imports a monster record, replacing the current one on success only.
    pub fn import(&mut self, bytes: &[u8]) -> BestiaryResult<&Monster> {
        let monster = import_monster(bytes)?;
        Ok(&*self.current.insert(monster))
    }
}
