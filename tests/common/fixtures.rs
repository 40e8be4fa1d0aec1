//! Static FAQ corpora used across harnesses.

use faqs_core::{config::SearchConfig, RenderedItem};

use super::builders::{items, FakeView};

/// The two-record corpus used to illustrate two-term scoring.
pub const TOWN_HALL: &[(&str, &str, &str)] = &[
    ("How do I renew my ID card", "Visit the town hall", "Documents"),
    ("Where is the town hall", "Central square", "Locations"),
];

/// A larger page with categories, overlapping terms, and score ties.
pub const MUNICIPAL: &[(&str, &str, &str)] = &[
    ("Opening hours of the town hall", "Monday to Friday, 8:30 to 17:00", "Practical"),
    ("Renew a passport", "Book an appointment at the town hall", "Documents"),
    ("Renew an ID card", "Book an appointment, bring a photo", "Documents"),
    ("Recycling collection days", "Every other Tuesday", "Waste"),
    ("Bulky items pickup", "Book a free pickup by phone", "Waste"),
    ("School enrolment", "Enrolment opens in March", "Family"),
];

pub fn town_hall_items() -> Vec<RenderedItem> {
    items(TOWN_HALL)
}

pub fn municipal_view() -> FakeView {
    FakeView::new(items(MUNICIPAL))
}

/// The shipped timing defaults: 2 chars, 300 ms debounce, 2000 ms highlight.
pub fn settings() -> SearchConfig {
    SearchConfig::default()
}
