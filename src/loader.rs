//! Deck file loading and validation.
//!
//! Deck files are TOML documents shaped like [`Deck`]. A deck that fails
//! validation is rejected as a whole; the presenter never shows a
//! partially loaded deck.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::content::builtin_deck;
use crate::types::Deck;

// ============================================================================
// ERRORS
// ============================================================================

/// Why a deck could not be loaded or written out.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("cannot read deck file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid deck file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid deck: {0}")]
    Invalid(String),

    #[error("cannot serialize deck: {0}")]
    Serialize(String),
}

// ============================================================================
// SOURCES
// ============================================================================

/// Where the deck shown by the presenter comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSource {
    /// A TOML deck file.
    File(PathBuf),
    /// The deck compiled into the binary.
    Builtin,
}

impl fmt::Display for DeckSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckSource::File(path) => write!(f, "{}", path.display()),
            DeckSource::Builtin => write!(f, "built-in deck"),
        }
    }
}

impl DeckSource {
    pub fn load(&self) -> Result<Deck, DeckError> {
        match self {
            DeckSource::File(path) => load_deck(path),
            DeckSource::Builtin => Ok(builtin_deck()),
        }
    }
}

/// Per-user deck file picked up when `--deck` is not given.
pub fn default_deck_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pitchdeck")
        .join("deck.toml")
}

/// Explicit path wins, then the per-user deck file if present, then the
/// built-in deck.
pub fn resolve_deck_source(explicit: Option<PathBuf>) -> DeckSource {
    choose_source(explicit, &default_deck_path())
}

fn choose_source(explicit: Option<PathBuf>, user_default: &Path) -> DeckSource {
    match explicit {
        Some(path) => DeckSource::File(path),
        None if user_default.is_file() => DeckSource::File(user_default.to_path_buf()),
        None => DeckSource::Builtin,
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Read, parse and validate a deck file.
pub fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    let contents = fs::read_to_string(path).map_err(|source| DeckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let deck = parse_deck(&contents).map_err(|source| DeckError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&deck)?;
    tracing::info!(path = %path.display(), slides = deck.slides.len(), "loaded deck file");
    Ok(deck)
}

pub fn parse_deck(contents: &str) -> Result<Deck, toml::de::Error> {
    toml::from_str(contents)
}

/// Reject decks the presenter cannot show.
///
/// A deck needs at least one slide; every slide needs a title; no block
/// may be empty.
pub fn validate(deck: &Deck) -> Result<(), DeckError> {
    if deck.slides.is_empty() {
        return Err(DeckError::Invalid("deck has no slides".into()));
    }
    for (i, slide) in deck.slides.iter().enumerate() {
        if slide.title.trim().is_empty() {
            return Err(DeckError::Invalid(format!("slide {} has no title", i + 1)));
        }
        if let Some(block) = slide.blocks.iter().find(|b| b.is_empty()) {
            return Err(DeckError::Invalid(format!(
                "slide {} has an empty {} block",
                i + 1,
                block.kind()
            )));
        }
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
