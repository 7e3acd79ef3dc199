//! Label lookup over a parsed RC search page.
//!
//! The page renders each value as:
//!
//! ```html
//! <div>
//!   <span>Owner Name</span>
//!   <p>JOHN DOE</p>
//! </div>
//! ```
//!
//! A value is read by locating the label `<span>`, walking up to its nearest
//! `<div>`, and taking the text of the first `<p>` inside it. Every step may
//! fail on a page that does not follow this shape; failure means the field is
//! absent, never an error.

use scraper::{ElementRef, Html};

use crate::record::{Field, VehicleRecord};

/// Read the value shown next to `label`, or `None` if any step of the walk
/// finds nothing.
pub fn extract(document: &Html, label: &str) -> Option<String> {
    let span = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "span" && collapsed_text(*el).trim() == label)?;

    let container = span
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "div")?;

    let value = container
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "p")?;

    Some(stripped_text(value))
}

/// Parse `html` once and look up every field.
pub fn extract_record(html: &str) -> VehicleRecord {
    let document = Html::parse_document(html);
    Field::ALL
        .into_iter()
        .filter_map(|f| extract(&document, f.label()).map(|v| (f, v)))
        .collect()
}

fn collapsed_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

// Each text node trimmed on its own, then joined without separator.
fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|s| !s.is_empty()).collect()
}
