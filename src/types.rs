//! Deck content types.
//!
//! A deck is an ordered list of slides; a slide is an ordered list of
//! blocks. These types are the deck file format (TOML) as well as the
//! input to the rendering layer.

use serde::{Deserialize, Serialize};

// ============================================================================
// DECK
// ============================================================================

/// An ordered sequence of slides presented one at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Shown in the outline and the log.
    pub title: String,
    pub slides: Vec<Slide>,
}

/// One visual unit of content, addressed by its index in the deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    /// Small uppercase line above the title ("THE SOLUTION").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kicker: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

// ============================================================================
// BLOCKS
// ============================================================================

/// A piece of slide content. Blocks are revealed one after another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of prose.
    Text {
        text: String,
        #[serde(default)]
        tone: Tone,
    },
    /// A bulleted list.
    Bullets { items: Vec<String> },
    /// Headline numbers that count up from zero when the slide mounts.
    Stats { stats: Vec<Stat> },
    /// A left-to-right pipeline.
    Steps { steps: Vec<Card> },
    /// Titled cards with an optional subtitle.
    Cards { cards: Vec<Card> },
    /// Short labels shown inline.
    Tags { tags: Vec<String> },
    /// A chat-channel preview of ranked news items.
    Feed {
        channel: String,
        items: Vec<FeedItem>,
    },
}

impl Block {
    /// Number of entries the block renders. Zero means the block is empty.
    pub fn len(&self) -> usize {
        match self {
            Block::Text { text, .. } => usize::from(!text.trim().is_empty()),
            Block::Bullets { items } => items.len(),
            Block::Stats { stats } => stats.len(),
            Block::Steps { steps } => steps.len(),
            Block::Cards { cards } => cards.len(),
            Block::Tags { tags } => tags.len(),
            Block::Feed { items, .. } => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name used in validation messages and the outline.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Text { .. } => "text",
            Block::Bullets { .. } => "bullets",
            Block::Stats { .. } => "stats",
            Block::Steps { .. } => "steps",
            Block::Cards { .. } => "cards",
            Block::Tags { .. } => "tags",
            Block::Feed { .. } => "feed",
        }
    }
}

/// Emphasis of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Normal,
    Muted,
    Emphasis,
    Alert,
}

/// An animated counter: `value` is the end of the count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: u64,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sub: String,
}

/// Risk ranking attached to a feed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Risk {
    High,
    Medium,
    Low,
}

impl Risk {
    pub fn label(self) -> &'static str {
        match self {
            Risk::High => "HIGH",
            Risk::Medium => "MEDIUM",
            Risk::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub risk: Risk,
    pub headline: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Output format for the deck outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable numbered outline.
    #[default]
    Human,
    /// Full deck as pretty JSON.
    Json,
    /// Full deck as a TOML deck file.
    Toml,
}

// ============================================================================
// TESTS
// ============================================================================
