//! # Random Source
//!
//! The injected randomness capability and the draw helpers built on it.
//!
//! Everything the generator rolls goes through [`RandomSource::next_float`],
//! so a seeded [`StdRng`] makes generation reproducible and a
//! [`ScriptedSource`] makes it exactly controllable in tests.

use crate::{BestiaryError, BestiaryResult};
use rand::rngs::StdRng;
use rand::Rng;

/// A source of uniform random floats in `[0, 1)`.
pub trait RandomSource {
    fn next_float(&mut self) -> f64;
}

impl RandomSource for StdRng {
    fn next_float(&mut self) -> f64 {
        self.gen()
    }
}

/// A random source that replays a fixed tape of floats.
///
/// Intended for tests that need to drive every draw of a generation run.
///
/// # Examples
///
/// ```
/// use bestiary::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new(vec![0.0, 0.5]);
/// assert_eq!(source.next_float(), 0.0);
/// assert_eq!(source.next_float(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    tape: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(tape: Vec<f64>) -> Self {
        Self { tape, cursor: 0 }
    }

    /// Number of draws consumed so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    /// Returns the next tape entry.
    ///
    /// # Panics
    ///
    /// Panics when the tape is exhausted; a scripted test that draws more
    /// than it scripted is a broken test.
    fn next_float(&mut self) -> f64 {
        let value = self.tape[self.cursor];
        self.cursor += 1;
        value
    }
}

/// Draws a uniform index in `[0, len)`.
pub(crate) fn pick_index(rng: &mut dyn RandomSource, len: usize) -> usize {
    (rng.next_float() * len as f64) as usize
}

/// Draws one item uniformly from a slice.
///
/// An empty slice is a lazily surfaced content problem, reported as
/// [`BestiaryError::MalformedContent`] naming the pool.
pub(crate) fn pick<'a, T>(
    rng: &mut dyn RandomSource,
    items: &'a [T],
    what: &str,
) -> BestiaryResult<&'a T> {
    if items.is_empty() {
        return Err(BestiaryError::MalformedContent(format!(
            "no {what} to draw from"
        )));
    }
    Ok(&items[pick_index(rng, items.len())])
}

/// Draws a uniform integer in `[lo, hi)`.
pub(crate) fn roll_range(rng: &mut dyn RandomSource, lo: i32, hi: i32) -> i32 {
    lo + (rng.next_float() * (hi - lo) as f64) as i32
}
