//! # Bestiary
//!
//! A random statblock generator for tabletop-game monsters. Thematic content
//! (elemental themes, mutations, boss templates) is combined with random rolls
//! into a complete creature record that can be rendered as text or exported
//! and re-imported as JSON.
//!
//! ## Architecture Overview
//!
//! The crate is organized around a handful of small, explicit objects:
//!
//! - **Content Store**: insertion-ordered pools of themes, mutations, and
//!   boss templates, fed by content packs or the built-in defaults
//! - **Generator**: turns a content store plus a random source into one
//!   [`Monster`] record through a fixed sequence of rolls
//! - **Monster record**: the single data contract shared by generation,
//!   rendering, and export/import
//! - **Session**: owns the content store and the current-monster slot, so
//!   no state lives in ambient globals
//! - **Renderer**: plain-text statblock view over a monster record
//!
//! Randomness is injected through the [`RandomSource`] trait so generation is
//! fully deterministic under a seeded or scripted source.

pub mod content;
pub mod generation;
pub mod monster;
pub mod render;
pub mod session;

pub use content::*;
pub use generation::*;
pub use monster::*;
pub use render::*;
pub use session::*;

/// Core error type for the bestiary crate.
#[derive(thiserror::Error, Debug)]
pub enum BestiaryError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// No themes are loaded, so generation cannot proceed
    #[error("No themes loaded; load content before generating")]
    EmptyContent,

    /// Generation needs two distinct themes
    #[error("At least two distinct themes are required to generate a monster")]
    InsufficientThemes,

    /// A content pack or theme is missing something generation needs
    #[error("Malformed content: {0}")]
    MalformedContent(String),

    /// An imported monster record fails structural validation
    #[error("Invalid monster record: {0}")]
    InvalidRecord(String),

    /// The session is not in a state that allows the operation
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the bestiary codebase.
pub type BestiaryResult<T> = Result<T, BestiaryError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
