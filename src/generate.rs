//! HTML site generation.
//!
//! Takes the loaded deck and produces the complete static site. Data flows
//! one way: cards → per-card HTML fragments → full pages → written files.
//! Nothing reads back what another step wrote, so re-running over the same
//! input is byte-identical.
//!
//! ## Generated Output
//!
//! ```text
//! dist/
//! ├── index.html                 # Landing page: one tile per card
//! ├── assets/
//! │   └── style.css              # Shared stylesheet
//! ├── cards/
//! │   └── WI-001/
//! │       └── index.html         # Card reveal page
//! ├── qr/                        # (QR enabled only)
//! │   ├── WI-001.svg
//! │   └── WI-001.png
//! ├── print/                     # (QR enabled only)
//! │   └── cards.html             # 2×2-per-page print sheet, inline QR
//! └── .gitignore
//! ```
//!
//! ## Templates
//!
//! Templates are data, embedded at compile time from `templates/` and
//! `static/`, and filled by literal `%%token%%` substitution
//! ([`crate::render`]). There is no conditional or loop syntax: optional
//! blocks (bonus, summary) and list bodies are built here and passed in as
//! plain values, already escaped.

use crate::badge::{badge_fields, print_badge_html};
use crate::config::SiteConfig;
use crate::deck::Card;
use crate::qr::{QrError, ScannableCode};
use crate::render::{escape, render};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("QR error: {0}")]
    Qr(#[from] QrError),
}

const STYLE_CSS: &str = include_str!("../static/style.css");
const CARD_PAGE_TEMPLATE: &str = include_str!("../templates/card_page.html");
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
const INDEX_CARD_TEMPLATE: &str = include_str!("../templates/index_card.html");
const PRINT_SHEET_TEMPLATE: &str = include_str!("../templates/print_sheet.html");
const PRINT_CARD_TEMPLATE: &str = include_str!("../templates/print_card.html");

/// Cards per print page. Fixed, not configurable: the print stylesheet
/// encodes a 2×2 letter-size grid, so a knob here would desynchronize
/// markup and CSS.
pub const CARDS_PER_PAGE: usize = 4;

/// Borderless filler block padding the last print page to a full grid.
const EMPTY_SLOT: &str = r#"    <div class="p-card p-empty"></div>"#;

/// Exclusion file written into the output root so the generated tree can be
/// committed as-is.
const OUTPUT_GITIGNORE: &str = ".DS_Store\nThumbs.db\n";

// ============================================================================
// File writer
// ============================================================================

/// Write content to a file, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

// ============================================================================
// Card page builder
// ============================================================================

/// Output path of one card's page, relative to the output root.
pub fn card_page_path(id: &str) -> PathBuf {
    PathBuf::from("cards").join(id).join("index.html")
}

/// Render one complete card reveal page.
pub fn card_page_html(card: &Card, config: &SiteConfig) -> String {
    let bonus_html = match present(&card.bonus) {
        Some(bonus) => format!(
            r#"      <div class="bonus"><span class="bonus-label">Bonus: </span>{}</div>"#,
            escape(bonus)
        ),
        None => String::new(),
    };

    let summary_html = match present(&card.summary_blurb) {
        Some(blurb) => format!(r#"      <p class="summary">{}</p>"#, escape(blurb)),
        None => String::new(),
    };

    let links_html = card
        .links
        .iter()
        .map(|link| {
            format!(
                r#"      <a href="{}" target="_blank" rel="noopener">{}</a>"#,
                escape(&link.url),
                escape(&link.label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut replacements = vec![
        ("site_title", escape(&config.site.title)),
        ("card_id", escape(&card.id)),
        ("location_title", escape(&card.location_title)),
        ("reveal_title", escape(&card.reveal_title)),
        ("bonus_html", bonus_html),
        ("summary_html", summary_html),
        ("steps_html", list_items(&card.steps)),
        ("notes_html", list_items(&card.notes)),
        ("links_html", links_html),
    ];
    replacements.extend(badge_replacements(card));

    render(CARD_PAGE_TEMPLATE, &replacements)
}

/// An optional field counts as present only when non-empty.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Render a string sequence as `<li>` items, preserving order. Empty input
/// yields an empty string (an empty list, not an error).
fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("        <li>{}</li>", escape(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The six badge tokens shared by the card page and index tile templates,
/// in fixed order.
fn badge_replacements(card: &Card) -> [(&'static str, String); 6] {
    [
        ("cost", escape(&card.cost)),
        ("time_of_day", escape(&card.time_of_day)),
        ("duration", escape(&card.duration)),
        ("setting", escape(&card.setting)),
        ("effort", escape(&card.effort)),
        ("season", escape(&card.season)),
    ]
}

// ============================================================================
// Index builder
// ============================================================================

/// Render the landing page: one clickable tile per card, input order.
pub fn index_html(cards: &[Card], config: &SiteConfig) -> String {
    let tiles = cards
        .iter()
        .map(|card| {
            let mut replacements = vec![
                ("card_url", format!("cards/{}/index.html", escape(&card.id))),
                ("card_id", escape(&card.id)),
                ("location_title", escape(&card.location_title)),
            ];
            replacements.extend(badge_replacements(card));
            render(INDEX_CARD_TEMPLATE.trim_end(), &replacements)
        })
        .collect::<Vec<_>>()
        .join("\n");

    render(
        INDEX_TEMPLATE,
        &[
            ("site_title", escape(&config.site.title)),
            ("tagline", escape(&config.site.tagline)),
            ("card_items", tiles),
        ],
    )
}

// ============================================================================
// Print sheet builder
// ============================================================================

/// Render the print document: consecutive groups of [`CARDS_PER_PAGE`]
/// cards, the last group padded with empty slots to a full 2×2 grid. An
/// empty deck yields a document with zero pages.
///
/// QR images are embedded as data URIs so the sheet is self-contained.
pub fn print_sheet_html(cards: &[Card], config: &SiteConfig) -> Result<String, GenerateError> {
    let mut pages = Vec::new();

    for group in cards.chunks(CARDS_PER_PAGE) {
        let mut blocks = Vec::new();
        for card in group {
            let code = ScannableCode::encode(&config.card_url(&card.id))?;
            let qr_src = code.png_data_uri(config.qr.png_scale)?;
            blocks.push(print_card_html(card, &qr_src));
        }
        while blocks.len() < CARDS_PER_PAGE {
            blocks.push(EMPTY_SLOT.to_string());
        }
        pages.push(format!(
            "  <div class=\"p-page\">\n{}\n  </div>",
            blocks.join("\n")
        ));
    }

    Ok(render(
        PRINT_SHEET_TEMPLATE,
        &[
            ("site_title", escape(&config.site.title)),
            ("pages", pages.join("\n")),
        ],
    ))
}

/// One physical card block: banner, inline QR, badge row.
fn print_card_html(card: &Card, qr_src: &str) -> String {
    let badges = badge_fields(card)
        .iter()
        .map(|(category, value)| print_badge_html(*category, value))
        .collect::<String>();

    render(
        PRINT_CARD_TEMPLATE.trim_end(),
        &[
            ("card_id", escape(&card.id)),
            ("location_title", escape(&card.location_title)),
            // Machine-generated base64; bypasses escaping by construction.
            ("qr_src", qr_src.to_string()),
            ("badges", badges),
        ],
    )
}

// ============================================================================
// Orchestrator
// ============================================================================

/// What a build run produced, for CLI reporting.
#[derive(Debug)]
pub struct BuildReport {
    pub card_pages: usize,
    /// Per-card QR image pairs written, or `None` when QR is disabled.
    pub qr_assets: Option<usize>,
    /// Print pages laid out, or `None` when QR is disabled.
    pub print_pages: Option<usize>,
}

/// Run the full generation sequence into `output_dir`.
///
/// Order: stylesheet → card pages → index → QR assets + print sheet (only
/// when `[qr] enabled`) → output `.gitignore`. With QR disabled the run
/// still succeeds; the caller is responsible for surfacing the skip warning.
pub fn generate(
    cards: &[Card],
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<BuildReport, GenerateError> {
    write_file(&output_dir.join("assets/style.css"), STYLE_CSS)?;

    for card in cards {
        let path = output_dir.join(card_page_path(&card.id));
        write_file(&path, &card_page_html(card, config))?;
    }

    write_file(&output_dir.join("index.html"), &index_html(cards, config))?;

    let (qr_assets, print_pages) = if config.qr.enabled {
        let qr_dir = output_dir.join("qr");
        fs::create_dir_all(&qr_dir)?;
        for card in cards {
            let code = ScannableCode::encode(&config.card_url(&card.id))?;
            code.save_svg(&qr_dir.join(format!("{}.svg", card.id)), config.qr.svg_scale)?;
            code.save_png(&qr_dir.join(format!("{}.png", card.id)), config.qr.png_scale)?;
        }

        let sheet = print_sheet_html(cards, config)?;
        write_file(&output_dir.join("print/cards.html"), &sheet)?;

        (Some(cards.len()), Some(cards.len().div_ceil(CARDS_PER_PAGE)))
    } else {
        (None, None)
    };

    write_file(&output_dir.join(".gitignore"), OUTPUT_GITIGNORE)?;

    Ok(BuildReport {
        card_pages: cards.len(),
        qr_assets,
        print_pages,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{sample_card, sample_deck};

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        // Keep test QR payloads small.
        config.qr.png_scale = 2;
        config.qr.svg_scale = 2;
        config
    }

    // -- card page ----------------------------------------------------------

    #[test]
    fn card_page_no_leftover_tokens() {
        let html = card_page_html(&sample_card("WI-001"), &test_config());
        assert!(!html.contains("%%"), "unsubstituted token in:\n{html}");
    }

    #[test]
    fn card_page_bonus_absent_emits_no_block() {
        let mut card = sample_card("WI-001");
        card.bonus = None;
        let html = card_page_html(&card, &test_config());
        assert!(!html.contains("class=\"bonus\""));

        // Empty string counts as absent too.
        card.bonus = Some(String::new());
        let html = card_page_html(&card, &test_config());
        assert!(!html.contains("class=\"bonus\""));
    }

    #[test]
    fn card_page_bonus_present_emits_one_block() {
        let mut card = sample_card("WI-001");
        card.bonus = Some("Free parking".to_string());
        let html = card_page_html(&card, &test_config());
        assert_eq!(html.matches("class=\"bonus\"").count(), 1);
        assert!(html.contains("Free parking"));
    }

    #[test]
    fn card_page_summary_toggles_like_bonus() {
        let mut card = sample_card("WI-001");
        card.summary_blurb = None;
        assert!(!card_page_html(&card, &test_config()).contains("class=\"summary\""));

        card.summary_blurb = Some("Quiet & scenic".to_string());
        let html = card_page_html(&card, &test_config());
        assert_eq!(html.matches("class=\"summary\"").count(), 1);
        assert!(html.contains("Quiet &amp; scenic"));
    }

    #[test]
    fn card_page_steps_preserve_order() {
        let mut card = sample_card("WI-001");
        card.steps = vec!["first".into(), "second".into(), "third".into()];
        let html = card_page_html(&card, &test_config());
        let first = html.find("<li>first</li>").unwrap();
        let second = html.find("<li>second</li>").unwrap();
        let third = html.find("<li>third</li>").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn card_page_empty_steps_is_empty_list() {
        let mut card = sample_card("WI-001");
        card.steps = vec![];
        let html = card_page_html(&card, &test_config());
        assert!(!html.contains("<li>"));
        assert!(html.contains("<ul>"));
    }

    #[test]
    fn card_page_links_open_new_context() {
        let html = card_page_html(&sample_card("WI-001"), &test_config());
        assert!(html.contains(r#"target="_blank" rel="noopener""#));
        assert!(html.contains("Park info"));
    }

    #[test]
    fn card_page_escapes_data_text() {
        let mut card = sample_card("WI-001");
        card.location_title = "Fish & Chips <Stand>".to_string();
        card.links[0].url = "https://example.com/?a=1&b=2".to_string();
        let html = card_page_html(&card, &test_config());
        assert!(html.contains("Fish &amp; Chips &lt;Stand&gt;"));
        assert!(html.contains("https://example.com/?a=1&amp;b=2"));
        assert!(!html.contains("<Stand>"));
    }

    #[test]
    fn card_page_badges_in_fixed_order() {
        let html = card_page_html(&sample_card("WI-001"), &test_config());
        let card = sample_card("WI-001");
        let cost = html.find(&format!(">{}<", card.cost)).unwrap();
        let season = html.find(&format!(">{}<", card.season)).unwrap();
        assert!(cost < season);
    }

    #[test]
    fn card_page_path_is_per_card_directory() {
        assert_eq!(
            card_page_path("WI-007"),
            PathBuf::from("cards/WI-007/index.html")
        );
    }

    // -- index --------------------------------------------------------------

    #[test]
    fn index_lists_every_card_in_order() {
        let cards = sample_deck(3);
        let html = index_html(&cards, &test_config());
        let first = html.find("cards/WI-001/index.html").unwrap();
        let second = html.find("cards/WI-002/index.html").unwrap();
        let third = html.find("cards/WI-003/index.html").unwrap();
        assert!(first < second && second < third);
        assert_eq!(html.matches("grid-card").count(), 3);
    }

    #[test]
    fn index_empty_deck_renders_empty_grid() {
        let html = index_html(&[], &test_config());
        assert!(html.contains("card-grid"));
        assert!(!html.contains("grid-card\""));
        assert!(!html.contains("%%"));
    }

    #[test]
    fn index_uses_site_identity() {
        let mut config = test_config();
        config.site.title = "Badger Deck".to_string();
        config.site.tagline = "50 trips".to_string();
        let html = index_html(&sample_deck(1), &config);
        assert!(html.contains("<title>Badger Deck</title>"));
        assert!(html.contains("50 trips"));
    }

    // -- print sheet --------------------------------------------------------

    #[test]
    fn print_sheet_groups_by_four_and_pads_last_page() {
        let cards = sample_deck(10);
        let html = print_sheet_html(&cards, &test_config()).unwrap();
        assert_eq!(html.matches(r#"<div class="p-page">"#).count(), 3);
        assert_eq!(html.matches(r#"<div class="p-card p-empty">"#).count(), 2);
        assert_eq!(html.matches(r#"<div class="p-banner">"#).count(), 10);
    }

    #[test]
    fn print_sheet_exact_multiple_has_no_padding() {
        let cards = sample_deck(8);
        let html = print_sheet_html(&cards, &test_config()).unwrap();
        assert_eq!(html.matches(r#"<div class="p-page">"#).count(), 2);
        assert_eq!(html.matches(r#"<div class="p-card p-empty">"#).count(), 0);
    }

    #[test]
    fn print_sheet_empty_deck_has_zero_pages() {
        let html = print_sheet_html(&[], &test_config()).unwrap();
        assert_eq!(html.matches(r#"<div class="p-page">"#).count(), 0);
        assert!(!html.contains("%%"));
    }

    #[test]
    fn print_sheet_embeds_inline_qr() {
        let html = print_sheet_html(&sample_deck(1), &test_config()).unwrap();
        assert!(html.contains("data:image/png;base64,"));
        // Self-contained: no file references to the qr/ directory.
        assert!(!html.contains("qr/WI-001"));
    }

    #[test]
    fn print_sheet_badges_carry_icons() {
        let html = print_sheet_html(&sample_deck(1), &test_config()).unwrap();
        assert!(html.contains("fa-solid fa-dollar-sign"));
        assert!(html.contains("p-icon"));
    }

    // -- orchestrator -------------------------------------------------------

    #[test]
    fn generate_writes_expected_layout() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("dist");
        let report = generate(&sample_deck(2), &test_config(), &out).unwrap();

        assert!(out.join("assets/style.css").is_file());
        assert!(out.join("index.html").is_file());
        assert!(out.join("cards/WI-001/index.html").is_file());
        assert!(out.join("cards/WI-002/index.html").is_file());
        assert!(out.join("qr/WI-001.svg").is_file());
        assert!(out.join("qr/WI-002.png").is_file());
        assert!(out.join("print/cards.html").is_file());
        assert!(out.join(".gitignore").is_file());

        assert_eq!(report.card_pages, 2);
        assert_eq!(report.qr_assets, Some(2));
        assert_eq!(report.print_pages, Some(1));
    }

    #[test]
    fn generate_with_qr_disabled_degrades() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("dist");
        let mut config = test_config();
        config.qr.enabled = false;

        let report = generate(&sample_deck(2), &config, &out).unwrap();

        assert!(out.join("index.html").is_file());
        assert!(out.join("cards/WI-001/index.html").is_file());
        assert!(!out.join("qr").exists());
        assert!(!out.join("print").exists());
        assert_eq!(report.qr_assets, None);
        assert_eq!(report.print_pages, None);
    }

    #[test]
    fn generate_empty_deck_still_produces_site_shell() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("dist");
        let report = generate(&[], &test_config(), &out).unwrap();

        assert!(out.join("index.html").is_file());
        assert!(out.join("print/cards.html").is_file());
        assert_eq!(report.card_pages, 0);
        assert_eq!(report.print_pages, Some(0));
    }
}
