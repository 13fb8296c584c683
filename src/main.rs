use std::env;
use std::io;
use std::process;

use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use alien_invasion::app::App;
use alien_invasion::event::{Event, EventHandler};
use alien_invasion::settings::{Settings, SettingsError};
use alien_invasion::ui;

const DEFAULT_CONFIG: &str = "alien_invasion.ron";

fn load_settings() -> Result<Settings, SettingsError> {
    match env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::load_or_default(DEFAULT_CONFIG),
    }
}

fn main() -> io::Result<()> {
    // Configuration problems are reported before the terminal goes raw.
    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("alien_invasion: {err}");
            process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Create app and event handler
    let mut app = App::new(settings, release_events);
    let event_handler = EventHandler::new(16); // ~60 FPS

    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
            Event::Click { column, row } => app.on_click(column, row),
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    if release_events {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
