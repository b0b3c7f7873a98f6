//! Shared test fixtures for the card-press test suite.
//!
//! Provides canonical card/deck builders and a serializer back to the JSON
//! input format, so unit tests across modules agree on what a well-formed
//! card looks like.

use crate::deck::{Card, CardLink};
use serde_json::json;

/// A fully-populated card with the given id.
///
/// Tests that need an absent optional or a different attribute mutate the
/// returned value.
pub fn sample_card(id: &str) -> Card {
    Card {
        id: id.to_string(),
        location_title: "Door County".to_string(),
        reveal_title: "Sunrise at Cave Point".to_string(),
        cost: "FREE".to_string(),
        time_of_day: "DAY".to_string(),
        duration: "HALF DAY".to_string(),
        setting: "OUTDOOR".to_string(),
        effort: "MODERATE".to_string(),
        season: "SUMMER".to_string(),
        bonus: Some("Free parking before 8am".to_string()),
        summary_blurb: Some("Waves on limestone ledges.".to_string()),
        steps: vec![
            "Drive to the county park".to_string(),
            "Walk the shoreline trail".to_string(),
        ],
        notes: vec!["Rocks are slippery when wet".to_string()],
        links: vec![CardLink {
            label: "Park info".to_string(),
            url: "https://example.com/park".to_string(),
        }],
    }
}

/// `n` cards with ids `WI-001`..`WI-<n>` and varied attributes.
pub fn sample_deck(n: usize) -> Vec<Card> {
    const SEASONS: [&str; 5] = ["WINTER", "SPRING", "SUMMER", "FALL", "ANY"];
    (1..=n)
        .map(|i| {
            let mut card = sample_card(&format!("WI-{i:03}"));
            card.location_title = format!("Location {i}");
            card.season = SEASONS[i % SEASONS.len()].to_string();
            card
        })
        .collect()
}

/// Serialize cards back to the JSON input format.
///
/// `Card` itself is deserialize-only (the deck is never written by the
/// program), so fixtures build the JSON by hand. Absent optionals are
/// omitted entirely, matching hand-authored data files.
pub fn deck_json(cards: &[Card]) -> String {
    let records: Vec<serde_json::Value> = cards
        .iter()
        .map(|card| {
            let mut record = json!({
                "id": card.id,
                "location_title": card.location_title,
                "reveal_title": card.reveal_title,
                "cost": card.cost,
                "time_of_day": card.time_of_day,
                "duration": card.duration,
                "setting": card.setting,
                "effort": card.effort,
                "season": card.season,
                "steps": card.steps,
                "notes": card.notes,
                "links": card.links.iter().map(|link| {
                    json!({"label": link.label, "url": link.url})
                }).collect::<Vec<_>>(),
            });
            if let Some(bonus) = &card.bonus {
                record["bonus"] = json!(bonus);
            }
            if let Some(blurb) = &card.summary_blurb {
                record["summary_blurb"] = json!(blurb);
            }
            record
        })
        .collect();
    serde_json::to_string_pretty(&records).unwrap()
}
