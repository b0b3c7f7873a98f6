//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is information-centric, not file-centric. The primary display for
//! every card is its semantic identity (positional index, id, location),
//! with generated paths shown via `→` arrows and secondary context (reveal
//! title, badges, bonus) as indented lines.
//!
//! # Output Format
//!
//! ## Check / load
//!
//! ```text
//! Cards
//! 001 WI-001 Door County
//!     Reveal: Sunrise at Cave Point
//!     Badges: FREE · DAY · HALF DAY · OUTDOOR · MODERATE · SUMMER
//!     Bonus: Free parking before 8am
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! Stylesheet → assets/style.css
//! 001 WI-001 → cards/WI-001/index.html
//! 002 WI-002 → cards/WI-002/index.html
//! QR → qr/ (2 SVG + PNG pairs)
//! Print → print/cards.html (1 page)
//!
//! Generated 2 card pages, 2 QR image pairs, 1 print page
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::deck::Card;
use crate::generate::BuildReport;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

/// Pluralize a counted noun: `1 page`, `3 pages`.
fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

// ============================================================================
// Deck listing (check / load)
// ============================================================================

/// Format the loaded deck as a content inventory.
pub fn format_deck_output(cards: &[Card]) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Cards".to_string());

    if cards.is_empty() {
        lines.push("    (deck is empty)".to_string());
        return lines;
    }

    for (i, card) in cards.iter().enumerate() {
        lines.push(format!(
            "{} {} {}",
            format_index(i + 1),
            card.id,
            card.location_title
        ));
        lines.push(format!("    Reveal: {}", card.reveal_title));
        lines.push(format!(
            "    Badges: {} · {} · {} · {} · {} · {}",
            card.cost, card.time_of_day, card.duration, card.setting, card.effort, card.season
        ));
        if let Some(bonus) = card.bonus.as_deref().filter(|b| !b.is_empty()) {
            lines.push(format!("    Bonus: {}", truncate_desc(bonus, 60)));
        }
    }

    lines
}

/// Print the deck listing to stdout.
pub fn print_deck_output(cards: &[Card]) {
    for line in format_deck_output(cards) {
        println!("{}", line);
    }
}

// ============================================================================
// Build report
// ============================================================================

/// Format build output: one `→` line per generated entity plus a summary.
pub fn format_build_output(report: &BuildReport, cards: &[Card]) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Home \u{2192} index.html".to_string());
    lines.push("Stylesheet \u{2192} assets/style.css".to_string());

    for (i, card) in cards.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} cards/{}/index.html",
            format_index(i + 1),
            card.id,
            card.id
        ));
    }

    if let Some(qr_count) = report.qr_assets {
        lines.push(format!(
            "QR \u{2192} qr/ ({})",
            count_noun(qr_count, "SVG + PNG pair")
        ));
    }
    if let Some(page_count) = report.print_pages {
        lines.push(format!(
            "Print \u{2192} print/cards.html ({})",
            count_noun(page_count, "page")
        ));
    }

    lines.push(String::new());
    let mut summary = format!("Generated {}", count_noun(report.card_pages, "card page"));
    if let Some(qr_count) = report.qr_assets {
        summary.push_str(&format!(", {}", count_noun(qr_count, "QR image pair")));
    }
    if let Some(page_count) = report.print_pages {
        summary.push_str(&format!(", {}", count_noun(page_count, "print page")));
    }
    lines.push(summary);

    lines
}

/// Print the build report to stdout.
pub fn print_build_output(report: &BuildReport, cards: &[Card]) {
    for line in format_build_output(report, cards) {
        println!("{}", line);
    }
}

// ============================================================================
// Degradation warning
// ============================================================================

/// Format the warning shown when QR generation is switched off.
pub fn format_qr_warning() -> Vec<String> {
    vec![
        "Warning: QR generation is disabled. QR assets and the print sheet".to_string(),
        "         will be skipped; card pages and the index are still built.".to_string(),
        "         Re-enable with `enabled = true` under [qr] in card-press.toml.".to_string(),
    ]
}

/// Print the QR skip warning to stdout.
pub fn print_qr_warning() {
    for line in format_qr_warning() {
        println!("{}", line);
    }
}
