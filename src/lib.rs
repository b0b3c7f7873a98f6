//! # Card Press
//!
//! A minimal static site generator for printable adventure card decks.
//! A single JSON file is the data source: each record is one adventure card
//! with display text, categorical badges, and action content (steps, notes,
//! links). One run produces a browsable site and a printable card sheet.
//!
//! # Architecture: One-Way Pipeline
//!
//! ```text
//! Load      data/cards.json  →  Vec<Card>      (parse + validate)
//! Generate  Vec<Card>        →  dist/          (pages, QR assets, print sheet)
//! ```
//!
//! Data flows strictly one way: cards → HTML fragments → full pages →
//! written files. No step reads back what another wrote, generation is a
//! pure function of the deck plus fixed templates, and re-running over
//! unchanged input reproduces byte-identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`deck`] | Loads and validates the card deck from JSON |
//! | [`render`] | Literal `%%token%%` template substitution and HTML escaping |
//! | [`badge`] | Categorical attribute badges and the print icon table |
//! | [`qr`] | Scannable-code rendering: SVG/PNG files and inline data URIs |
//! | [`generate`] | Page builders, file writer, and the build orchestrator |
//! | [`config`] | `card-press.toml` loading, validation, stock config |
//! | [`output`] | CLI output formatting, information-first build reports |
//!
//! # Design Decisions
//!
//! ## Templates Are Data
//!
//! Pages are produced by literal token replacement over fixed HTML/CSS
//! templates embedded at compile time (`templates/`, `static/`), not by a
//! template engine. The templates have no conditional or loop syntax; all
//! branching (optional bonus/summary blocks, list bodies) happens in Rust,
//! which hands the finished fragment to [`render::render`] as a plain
//! value. This keeps the template files readable as the HTML they produce
//! and makes substitution trivially auditable: unknown tokens survive into
//! the output where they are easy to spot.
//!
//! ## Escape Once, At The Edge
//!
//! Every piece of data-sourced text passes through [`render::escape`]
//! exactly once, at the point it is placed into a fragment: element
//! bodies, attribute values, and link targets alike. Fragments are never
//! re-escaped when composed into larger fragments.
//!
//! ## Configuration-Time QR Switch
//!
//! Whether the QR/imaging collaborator is wired in is decided by
//! `[qr] enabled` in `card-press.toml`, checked once by the orchestrator,
//! not probed at runtime. A disabled run still produces card pages and the
//! index, and skips QR assets and the print sheet with a visible warning.
//! The print sheet embeds its QR images as base64 data URIs so the single
//! HTML file can be carried to any printer.
//!
//! ## Fail Fast On Bad Data
//!
//! A record missing a required field, a duplicate id, or an id unsafe as a
//! path segment aborts the whole run with an error naming the record.
//! There is no per-card skip policy: malformed source data is a systemic
//! input error, and a half-generated deck is worse than no deck.
//!
//! ## Fixed 2×2 Print Grid
//!
//! Print pages hold exactly four cards ([`generate::CARDS_PER_PAGE`]); the
//! last page is padded with borderless placeholder blocks. The grid is a
//! constant, not config: the print stylesheet encodes a letter-size 2×2
//! layout and a knob would let markup and CSS drift apart.

pub mod badge;
pub mod config;
pub mod deck;
pub mod generate;
pub mod output;
pub mod qr;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
