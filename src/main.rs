use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    style::Color,
    Terminal,
};
use std::{io, time::Duration};

mod app;
mod constants;
mod game;
mod input;
mod ui;

use app::App;
use constants::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, EVENT_POLL_MS};
use input::handle_input;
use ui::ui;

/// Two-player Connect Four in the terminal
#[derive(Parser)]
#[command(name = "confour", version, about)]
struct Args {
    /// Board width in columns (column hotkeys cover 1-9)
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH as u16,
          value_parser = clap::value_parser!(u16).range(4..=9))]
    width: u16,

    /// Board height in rows
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT as u16,
          value_parser = clap::value_parser!(u16).range(4..=16))]
    height: u16,

    /// Player 1 piece color (name or #rrggbb)
    #[arg(long, default_value = "red")]
    p1_color: Color,

    /// Player 2 piece color (name or #rrggbb)
    #[arg(long, default_value = "blue")]
    p2_color: Color,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(
        args.height as usize,
        args.width as usize,
        args.p1_color,
        args.p2_color,
    );
    let res = run(&mut terminal, &mut app);

    // Restore terminal state even when the loop errored
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if kind != KeyEventKind::Press {
                    continue;
                }
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                    KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
                    _ => handle_input(app, code),
                }
            }
        }
    }

    Ok(())
}
