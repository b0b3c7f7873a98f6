//! Literal template rendering and HTML escaping.
//!
//! Templates are plain text with `%%name%%` placeholder tokens. Rendering is
//! literal substitution over an ordered mapping of token name → value: no
//! loops, no conditionals, no filters. All branching (optional blocks, list
//! bodies) is decided by the caller, which passes the already-built fragment
//! as a plain value.
//!
//! Two properties the page builders rely on:
//!
//! - **Unknown tokens survive.** A placeholder with no entry in the mapping is
//!   left in the output verbatim, which makes a missing substitution visible
//!   in the generated page instead of silently vanishing.
//! - **Replacement is not recursive.** The template is scanned in a single
//!   pass and substituted values are never rescanned, so data containing
//!   `%%...%%` cannot inject into the template.

/// Replace every `%%name%%` token with its mapped value.
///
/// Single left-to-right pass: each delimited token is looked up in the
/// mapping, substituted if present, and emitted verbatim otherwise. Values
/// are inserted as-is; callers escape data-sourced text with [`escape`]
/// before it goes into the mapping. Mapping order is irrelevant: no
/// delimited token name prefixes another.
pub fn render(template: &str, replacements: &[(&str, String)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("%%") {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("%%") else {
            // No closing delimiter, so the remainder is literal text.
            result.push_str("%%");
            rest = after_open;
            continue;
        };

        let name = &after_open[..end];
        match replacements.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => {
                result.push_str(value);
                rest = &after_open[end + 2..];
            }
            None => {
                // Unknown token: keep the opening delimiter and rescan from
                // just past it, so adjacent tokens still resolve.
                result.push_str("%%");
                rest = after_open;
            }
        }
    }

    result.push_str(rest);
    result
}

/// Escape the five reserved HTML characters.
///
/// Applied exactly once to every piece of data-sourced text before it is
/// placed inside a template: element bodies, attribute values, and link
/// targets alike.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
