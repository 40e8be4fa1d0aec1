use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use faqs::{Config, FaqPage};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
    Auto,
}

impl ThemeArg {
    fn as_setting(self) -> &'static str {
        match self {
            ThemeArg::Light => "light",
            ThemeArg::Dark => "dark",
            ThemeArg::Auto => "auto",
        }
    }
}

#[derive(Parser)]
#[command(name = "faqs", about = "Search a page of frequently asked questions")]
struct Cli {
    /// FAQ page to show (JSON). Defaults to a built-in demo page.
    #[arg(long, value_name = "PATH")]
    faq: Option<PathBuf>,

    /// Colour theme. Overrides `[ui] theme` in the config file.
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Write debug logs to /tmp/faqs-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/faqs-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("faqs debug log started, tail -f /tmp/faqs-debug.log");
    }

    let mut config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "config: falling back to defaults");
        Config::defaults()
    });
    if let Some(theme) = cli.theme {
        config.ui.theme = theme.as_setting().to_string();
    }

    let page = match &cli.faq {
        Some(path) => FaqPage::load(path)
            .with_context(|| format!("cannot open FAQ page {}", path.display()))?,
        None => faqs::tui::demo_page(),
    };

    faqs::tui::run(&page, config)
}
