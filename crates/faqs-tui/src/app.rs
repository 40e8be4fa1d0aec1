//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Between key presses the
//! loop sleeps no longer than the search controller's next timer deadline,
//! then lets the controller fire whatever is due.

use crate::{
    event::{self, AppEvent},
    screen::FaqScreen,
    theme::{Theme, ThemeKind},
    widgets::{
        card_list::CardList, chatbot::ChatbotPopup, help::HelpPopup, search_bar::SearchBar,
        status_line::StatusLine,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use faqs_core::{config::Config, page::FaqPage, Anchor, FaqView, SearchController};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout},
    Frame, Terminal,
};
use std::{io, time::Duration};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Cards,
    Search,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub screen: FaqScreen,
    pub controller: SearchController,
    pub focus: Focus,
    pub theme: Theme,
    pub show_categories: bool,
    pub show_help: bool,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(page: &FaqPage, config: Config, theme: Theme) -> Self {
        let mut screen = FaqScreen::from_page(page);
        let controller = SearchController::attach(&mut screen, config.search.clone());

        let state = AppState {
            screen,
            controller,
            focus: Focus::Cards,
            theme,
            show_categories: config.ui.show_categories,
            show_help: false,
            quit: false,
        };

        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(self.poll_timeout())? {
                match ct_event::read()? {
                    Event::Key(key)
                        if key.kind == crossterm::event::KeyEventKind::Press =>
                    {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when the search bar is focused
                        let app_event = if self.state.focus == Focus::Search {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(
                                focus = ?self.state.focus,
                                event = ?ev,
                                "key event"
                            );
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }

            self.tick();
        }
        Ok(())
    }

    /// Time until the next frame or the next search timer, whichever is sooner.
    fn poll_timeout(&self) -> Duration {
        match self.state.controller.next_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(tokio::time::Instant::now())
                .min(FRAME_INTERVAL),
            None => FRAME_INTERVAL,
        }
    }

    /// Fire due search timers.
    pub fn tick(&mut self) {
        let s = &mut self.state;
        if s.controller.poll_timers(&mut s.screen) {
            s.screen.cards.settle_cursor();
        }
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        if s.screen.chatbot.is_open() {
            match event {
                AppEvent::Enter | AppEvent::Escape => s.screen.chatbot.close(),
                AppEvent::Quit => s.quit = true,
                _ => {}
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::ToggleTheme => {
                s.theme = s.theme.toggled();
                tracing::debug!(theme = ?s.theme.kind, "theme toggled");
            }

            AppEvent::AskChatbot => {
                if !s.controller.request_chatbot(&mut s.screen) {
                    tracing::debug!("no empty search to hand off");
                }
            }

            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::Cards => Focus::Search,
                    Focus::Search => Focus::Cards,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => match s.focus {
                Focus::Search => handle_search(s, other),
                Focus::Cards => handle_cards(s, other),
            },
        }
    }
}

/// Events while the search bar has focus.
fn handle_search(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Enter => {
            let text = s.screen.search.query.clone();
            s.controller.on_submit(&mut s.screen, &text);
            s.screen.cards.settle_cursor();
        }
        AppEvent::Escape => {
            s.controller.on_cancel(&mut s.screen);
            tracing::debug!("focus: Search -> Cards");
            s.focus = Focus::Cards;
        }
        AppEvent::Nav(dir) if is_vertical(&dir) => {
            s.screen.cards.handle(&AppEvent::Nav(dir));
        }
        AppEvent::PageUp | AppEvent::PageDown => s.screen.cards.handle(&event),
        other => {
            if s.screen.search.handle(&other) {
                let text = s.screen.search.query.clone();
                s.controller.on_input(&mut s.screen, &text);
                s.screen.cards.settle_cursor();
            }
        }
    }
}

/// Events while the card list has focus.
fn handle_cards(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::SearchFocus => {
            tracing::debug!("focus -> Search");
            s.focus = Focus::Search;
        }
        AppEvent::Char('?') => {
            tracing::debug!("help popup opened");
            s.show_help = true;
        }
        AppEvent::Enter | AppEvent::Char(' ') => {
            let anchor = Anchor(s.screen.cards.cursor);
            let record = s.screen.selected_record();
            match s.screen.toggle_expanded(anchor) {
                Ok(expanded) => tracing::debug!(%anchor, ?record, expanded, "card toggled"),
                Err(err) => tracing::warn!(%err, "card toggle failed"),
            }
        }
        AppEvent::Escape => s.screen.collapse_all(),
        other => s.screen.cards.handle(&other),
    }
}

fn is_vertical(direction: &event::Direction) -> bool {
    matches!(direction, event::Direction::Up | event::Direction::Down)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 3-line search bar | 1-line status | cards
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

    let screen = &state.screen;
    let search_focused = state.focus == Focus::Search;

    frame.render_widget(SearchBar::new(&screen.search, search_focused, &state.theme), vert[0]);
    frame.render_widget(StatusLine::new(screen.status.as_ref(), &state.theme), vert[1]);
    frame.render_widget(
        CardList::new(
            &screen.cards,
            &screen.title,
            state.focus == Focus::Cards,
            state.show_categories,
            &state.theme,
        ),
        vert[2],
    );

    if screen.chatbot.is_open() {
        frame.render_widget(ChatbotPopup::new(&screen.chatbot, &state.theme), area);
    } else if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    } else if search_focused {
        let bar = SearchBar::new(&screen.search, true, &state.theme);
        frame.set_cursor_position(bar.cursor_position(vert[0]));
    }
}

/// Resolve the `[ui] theme` setting to a loaded theme.
pub fn theme_for(config: &Config) -> Theme {
    Theme::load(ThemeKind::from_setting(&config.ui.theme))
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
