//! faqs TUI: ratatui rendering layer for the FAQ search engine.
//!
//! The page is drawn as collapsible cards under a search bar. [`screen::FaqScreen`]
//! is the view the search engine drives; [`App`] owns it together with the
//! search controller and runs the terminal event loop.

pub mod app;
pub mod event;
pub mod screen;
pub mod theme;
pub mod widgets;

pub use app::App;

use faqs_core::{config::Config, page::FaqPage};

/// Start the TUI on `page`.
pub fn run(page: &FaqPage, config: Config) -> anyhow::Result<()> {
    let theme = app::theme_for(&config);
    tracing::info!(theme = ?theme.kind, "starting faqs");
    App::new(page, config, theme).run()
}

const DEMO_PAGE: &str = include_str!("demo_page.json");

/// The built-in page shown when no `--faq` file is given.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed, which the unit tests rule out.
pub fn demo_page() -> FaqPage {
    FaqPage::from_json_str(DEMO_PAGE).expect("embedded demo page must be valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_page_parses() {
        let page = demo_page();
        assert!(page.title.is_some());
        assert!(page.items().len() >= 8);
    }
}
