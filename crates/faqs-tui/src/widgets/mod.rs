//! Ratatui widgets for the faqs TUI.

pub mod card_list;
pub mod chatbot;
pub mod help;
pub mod search_bar;
pub mod status_line;
