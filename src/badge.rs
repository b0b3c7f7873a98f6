//! Categorical attribute badges and the print icon table.
//!
//! Every card carries six categorical attributes drawn from small fixed
//! vocabularies. They appear as text badges on the card and index pages, and
//! as icon + label badges on the print sheet. The icon table is a two-level
//! lookup: exact value first, then a per-category default, then nothing:
//! an unrecognized value still gets a readable text badge, just without an
//! icon.
//!
//! Icon classes are Font Awesome 6; the print sheet pulls the stylesheet
//! from a CDN.

use crate::deck::Card;
use crate::render::escape;

/// The six badge categories, in the fixed order they render everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Cost,
    Time,
    Duration,
    Setting,
    Effort,
    Season,
}

/// Value used by [`icon_class`] to mean "any value in this category".
const DEFAULT: &str = "_default";

/// Icon table: per category, `(value, icon class)` pairs. A [`DEFAULT`]
/// entry is the category-level fallback for unrecognized values.
const BADGE_ICONS: &[(Category, &[(&str, &str)])] = &[
    (Category::Cost, &[(DEFAULT, "fa-solid fa-dollar-sign")]),
    (
        Category::Time,
        &[
            ("DAY", "fa-solid fa-sun"),
            ("NIGHT", "fa-solid fa-moon"),
            ("EITHER", "fa-solid fa-clock"),
        ],
    ),
    (Category::Duration, &[(DEFAULT, "fa-solid fa-hourglass-half")]),
    (
        Category::Setting,
        &[
            ("INDOOR", "fa-solid fa-house"),
            ("OUTDOOR", "fa-solid fa-mountain-sun"),
            ("BOTH", "fa-solid fa-door-open"),
        ],
    ),
    (
        Category::Effort,
        &[
            ("CHILL", "fa-solid fa-couch"),
            ("MODERATE", "fa-solid fa-person-walking"),
            ("ACTIVE", "fa-solid fa-person-running"),
        ],
    ),
    (
        Category::Season,
        &[
            ("WINTER", "fa-solid fa-snowflake"),
            ("SPRING", "fa-solid fa-seedling"),
            ("SUMMER", "fa-solid fa-sun"),
            ("FALL", "fa-solid fa-leaf"),
            ("ANY", "fa-solid fa-calendar"),
            (DEFAULT, "fa-solid fa-calendar"),
        ],
    ),
];

/// A card's badge values paired with their category, in render order:
/// cost, time, duration, setting, effort, season.
pub fn badge_fields(card: &Card) -> [(Category, &str); 6] {
    [
        (Category::Cost, card.cost.as_str()),
        (Category::Time, card.time_of_day.as_str()),
        (Category::Duration, card.duration.as_str()),
        (Category::Setting, card.setting.as_str()),
        (Category::Effort, card.effort.as_str()),
        (Category::Season, card.season.as_str()),
    ]
}

/// Icon class for a category/value pair: exact value, else the category
/// default, else empty.
pub fn icon_class(category: Category, value: &str) -> &'static str {
    let Some((_, icons)) = BADGE_ICONS.iter().find(|(c, _)| *c == category) else {
        return "";
    };
    icons
        .iter()
        .find(|(v, _)| *v == value)
        .or_else(|| icons.iter().find(|(v, _)| *v == DEFAULT))
        .map(|(_, class)| *class)
        .unwrap_or("")
}

/// Print-sheet icon markup for a badge, or empty when the category has no
/// icon for the value.
pub fn icon_html(category: Category, value: &str) -> String {
    let class = icon_class(category, value);
    if class.is_empty() {
        String::new()
    } else {
        format!(r#"<i class="p-icon {class}"></i>"#)
    }
}

/// One complete print badge: icon (if any) followed by the escaped value.
pub fn print_badge_html(category: Category, value: &str) -> String {
    format!(
        r#"<span class="p-badge">{}{}</span>"#,
        icon_html(category, value),
        escape(value)
    )
}
