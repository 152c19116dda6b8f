mod config;
#[cfg(feature = "preview")]
mod preview;
mod theme;
mod ui;
mod view;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::AppConfig;
use theme::Theme;
use view::{Greeting, View};

#[derive(Parser, Debug)]
#[command(name = "aisatsu")]
#[command(author = "Sean Fournier")]
#[command(version = "0.1.0")]
#[command(about = "A themed hello-world greeting card for the terminal")]
struct Args {
    /// Print the render tree as JSON and exit
    #[arg(short, long)]
    dump: bool,

    /// Run the live preview harness (re-renders every frame)
    #[cfg(feature = "preview")]
    #[arg(short, long)]
    preview: bool,

    /// Stop the preview after this many frames
    #[cfg(feature = "preview")]
    #[arg(long)]
    frames: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Handle CLI-only commands
    if args.dump {
        return dump_tree();
    }

    #[cfg(feature = "preview")]
    if args.preview {
        return preview::run(args.frames);
    }

    // Run TUI
    run_tui()
}

/// Emit the greeting's render tree as JSON (for scripts and debugging)
fn dump_tree() -> Result<()> {
    let body = Greeting.body();
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

fn run_tui() -> Result<()> {
    let config = AppConfig::load()?;
    let theme = Theme::load(&config);
    tracing::debug!("Loaded theme, accent: {:?}", theme.accent);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &theme);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, theme: &Theme) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &Greeting, theme))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(())
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}
