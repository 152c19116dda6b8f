//! Live preview harness (development builds only, `--features preview`).
//!
//! Re-invokes the stateless render entry point on an interval, reloading
//! the system theme every frame. Edit the theme file while this runs and
//! the glyph tint follows along.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::AppConfig;
use crate::theme::Theme;
use crate::ui;
use crate::view::Greeting;

const FRAME_INTERVAL: Duration = Duration::from_millis(250);

/// Run the preview loop, optionally stopping after `frames` redraws.
pub fn run(frames: Option<u64>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = preview_loop(&mut terminal, frames);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn preview_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    frames: Option<u64>,
) -> Result<()> {
    let config = AppConfig::load()?;
    let mut frame: u64 = 0;

    loop {
        // Fresh theme every frame so live theme edits show immediately.
        let theme = Theme::load(&config);

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(f.area());

            ui::draw_in(f, &Greeting, &theme, chunks[0]);

            let footer = Paragraph::new(Line::from(vec![
                Span::styled("preview ", Style::default().fg(theme.accent)),
                Span::styled(
                    format!("frame {} │ q quits", frame),
                    Style::default().fg(theme.text_dim),
                ),
            ]))
            .alignment(Alignment::Center);
            f.render_widget(footer, chunks[1]);
        })?;

        frame += 1;
        if cap_reached(frame, frames) {
            return Ok(());
        }

        if event::poll(FRAME_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let KeyCode::Char('q') | KeyCode::Esc = key.code {
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// True once the optional `--frames` cap has been spent.
fn cap_reached(frame: u64, cap: Option<u64>) -> bool {
    cap.map_or(false, |max| frame >= max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_cap_ends_the_preview() {
        assert!(!cap_reached(100, None));
        assert!(!cap_reached(3, Some(4)));
        assert!(cap_reached(4, Some(4)));
        assert!(cap_reached(5, Some(4)));
    }
}
