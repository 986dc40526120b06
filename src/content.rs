//! The built-in pitch deck.
//!
//! Used whenever no deck file is given or found in the config directory.
//! `pitchdeck outline --format toml` prints it as a starting point for
//! custom decks.

use crate::types::{Block, Card, Deck, FeedItem, Risk, Slide, Stat, Tone};

/// Build the built-in seven-slide deck.
pub fn builtin_deck() -> Deck {
    Deck {
        title: "Gig Work News Agent".into(),
        slides: vec![
            title_slide(),
            problem_slide(),
            business_slide(),
            solution_slide(),
            how_it_works_slide(),
            why_now_slide(),
            scales_slide(),
        ],
    }
}

// ============================================================================
// SLIDES
// ============================================================================

fn title_slide() -> Slide {
    Slide {
        title: "\"What Do I Really Need to Know?\"".into(),
        kicker: Some("Gig Work News Agent".into()),
        blocks: vec![
            text(
                "An AI agent that cuts through the noise and delivers the only gig-economy news that matters.",
                Tone::Muted,
            ),
            Block::Tags {
                tags: strings(&["Regulation", "Safety", "Competitors", "Policy", "Innovation"]),
            },
        ],
    }
}

fn problem_slide() -> Slide {
    Slide {
        title: "The Gig Economy Moves Fast. The News Moves Faster.".into(),
        kicker: None,
        blocks: vec![
            Block::Bullets {
                items: strings(&[
                    "Regulatory changes across 100+ countries",
                    "Disruptive platform innovations",
                    "Safety incidents and labor disputes",
                    "Competitor moves, everywhere, all the time",
                ]),
            },
            text("Too much information. Not enough signal.", Tone::Emphasis),
        ],
    }
}

fn business_slide() -> Slide {
    Slide {
        title: "Leaders Don't Need More News. They Need the Right News.".into(),
        kicker: None,
        blocks: vec![
            Block::Stats {
                stats: vec![
                    stat(100, "+", "Countries"),
                    stat(6, "M+", "Gig Workers"),
                    stat(500, "+", "Articles / Day"),
                    stat(5, "-10", "Leaders Read"),
                ],
            },
            text(
                "Missing the right news = missing risk, opportunity, and accountability.",
                Tone::Alert,
            ),
        ],
    }
}

fn solution_slide() -> Slide {
    Slide {
        title: "Meet the Gig Work News Agent".into(),
        kicker: Some("The Solution".into()),
        blocks: vec![
            text(
                "A fully autonomous AI agent that delivers prioritized, actionable gig-economy news directly in Slack.",
                Tone::Muted,
            ),
            Block::Bullets {
                items: strings(&[
                    "Filters for gig-worker-relevant news only",
                    "Ranks content by High / Medium / Low risk",
                    "Links directly to sources for deeper dives",
                    "Runs automatically 3x per week",
                ]),
            },
            Block::Feed {
                channel: "gig-news-alerts".into(),
                items: vec![
                    feed(
                        Risk::High,
                        "EU Passes Sweeping Gig Worker Reclassification Directive",
                        "Reuters",
                        "Platforms must reclassify workers as employees across all 27 member states.",
                    ),
                    feed(
                        Risk::High,
                        "Brazil Suspends Ride-Hailing Operations in Sao Paulo",
                        "Bloomberg",
                        "48-hour suspension over safety standards affects 200K+ drivers.",
                    ),
                    feed(
                        Risk::Medium,
                        "DoorDash Launches AI-Powered Driver Safety Program",
                        "TechCrunch",
                        "Real-time safety monitoring; a potential industry benchmark.",
                    ),
                    feed(
                        Risk::Low,
                        "Australia Updates Gig Worker Insurance Framework",
                        "Financial Review",
                        "",
                    ),
                ],
            },
        ],
    }
}

fn how_it_works_slide() -> Slide {
    Slide {
        title: "From 500 Articles to 5 Insights".into(),
        kicker: None,
        blocks: vec![
            text("Automatically.", Tone::Muted),
            Block::Steps {
                steps: vec![
                    card("Scans the Web", "Multiple News APIs"),
                    card("500+ Articles", "Per Run"),
                    card("Filters", "Gig-Economy Only"),
                    card("Risk Assessment", "High / Med / Low"),
                    card("Slack Delivery", "Ranked Summary"),
                ],
            },
            text("No manual input. No dashboards. No chasing updates.", Tone::Normal),
        ],
    }
}

fn why_now_slide() -> Slide {
    Slide {
        title: "The Cost of Missing the Signal Is Rising".into(),
        kicker: None,
        blocks: vec![
            Block::Bullets {
                items: strings(&[
                    "Regulation is accelerating",
                    "Public scrutiny is increasing",
                    "Decisions are becoming more time-sensitive",
                ]),
            },
            text("The question isn't \"can we monitor this?\"", Tone::Muted),
            text("It's \"can we afford not to?\"", Tone::Alert),
        ],
    }
}

fn scales_slide() -> Slide {
    Slide {
        title: "This Is Bigger Than Gig Work".into(),
        kicker: None,
        blocks: vec![
            Block::Cards {
                cards: vec![
                    card("Payments & Fintech", "Regulation monitoring"),
                    card("E-commerce", "Policy changes"),
                    card("AI & Platform Governance", "Compliance tracking"),
                    card("Trust & Safety", "Incident monitoring"),
                ],
            },
            text(
                "The agent pattern is reusable. The value compounds.",
                Tone::Emphasis,
            ),
        ],
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn text(text: &str, tone: Tone) -> Block {
    Block::Text {
        text: text.into(),
        tone,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn stat(value: u64, suffix: &str, label: &str) -> Stat {
    Stat {
        value,
        suffix: suffix.into(),
        label: label.into(),
    }
}

fn card(title: &str, sub: &str) -> Card {
    Card {
        title: title.into(),
        sub: sub.into(),
    }
}

fn feed(risk: Risk, headline: &str, source: &str, summary: &str) -> FeedItem {
    FeedItem {
        risk,
        headline: headline.into(),
        source: source.into(),
        summary: summary.into(),
    }
}
