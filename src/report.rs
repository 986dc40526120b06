//! Deck outline formatting.
//!
//! Pure functions: (Deck, OutputFormat) → String. No I/O.

use crate::loader::DeckError;
use crate::types::{Block, Deck, OutputFormat};

/// Format a deck outline for output.
pub fn format_outline(deck: &Deck, format: OutputFormat) -> Result<String, DeckError> {
    match format {
        OutputFormat::Human => Ok(format_human(deck)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(deck).map_err(|e| DeckError::Serialize(e.to_string()))
        }
        OutputFormat::Toml => {
            toml::to_string_pretty(deck).map_err(|e| DeckError::Serialize(e.to_string()))
        }
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(deck: &Deck) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", deck.title));
    for (i, slide) in deck.slides.iter().enumerate() {
        out.push_str(&format!("{:>2}. {}\n", i + 1, slide.title));
        if let Some(kicker) = &slide.kicker {
            out.push_str(&format!("    ({})\n", kicker));
        }
        for block in &slide.blocks {
            out.push_str(&format!("    └─ {}\n", describe_block(block)));
        }
    }
    out.push('\n');
    out.push_str(&format!("Slides: {}\n", deck.slides.len()));

    out
}

fn describe_block(block: &Block) -> String {
    match block {
        Block::Text { text, .. } => truncate(text, 60),
        Block::Stats { stats } => {
            let values: Vec<String> = stats
                .iter()
                .map(|s| format!("{}{} {}", s.value, s.suffix, s.label))
                .collect();
            format!("stats: {}", values.join(", "))
        }
        Block::Feed { channel, items } => format!("feed #{} ({} items)", channel, items.len()),
        other => format!("{} ({} items)", other.kind(), other.len()),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin_deck;
    use crate::loader::parse_deck;

    #[test]
    fn human_outline_numbers_slides() {
        let out = format_outline(&builtin_deck(), OutputFormat::Human).unwrap();
        assert!(out.starts_with("=== Gig Work News Agent ==="));
        assert!(out.contains(" 1. \"What Do I Really Need to Know?\""));
        assert!(out.contains(" 7. This Is Bigger Than Gig Work"));
        assert!(out.contains("Slides: 7"));
    }

    #[test]
    fn human_outline_summarizes_stats() {
        let out = format_outline(&builtin_deck(), OutputFormat::Human).unwrap();
        assert!(out.contains("stats: 100+ Countries"));
        assert!(out.contains("feed #gig-news-alerts (4 items)"));
    }

    #[test]
    fn json_outline_is_valid_json() {
        let out = format_outline(&builtin_deck(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["slides"].as_array().unwrap().len(), 7);
        assert_eq!(parsed["slides"][2]["blocks"][0]["kind"], "stats");
    }

    #[test]
    fn toml_outline_loads_back_as_same_deck() {
        let deck = builtin_deck();
        let out = format_outline(&deck, OutputFormat::Toml).unwrap();
        assert_eq!(parse_deck(&out).unwrap(), deck);
    }

    #[test]
    fn truncate_long_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }
}
