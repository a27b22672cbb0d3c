use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use qpick::app::App;
use qpick::config::{self, Cli};
use qpick::lookup::{HttpBackend, LookupHandle};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

/// How long one event-loop pass waits before ticking debounce timers anyway
const TICK_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let cli = Cli::parse();
    let config = config::load(&cli)?;

    let backend = Arc::new(HttpBackend::new(&config.server)?);
    let lookup = LookupHandle::spawn(backend);
    let mut app = App::new(&config, lookup);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal before printing anything
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    if let Some(payload) = app.output() {
        println!("{payload}");
    }

    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events, then tick debounce timers and lookup replies
        app.handle_events(TICK_INTERVAL)?;
    }

    Ok(())
}

/// Debug-build logging to the file named by QPICK_LOG. The terminal is in
/// raw mode while the app runs, so stderr output would wreck the screen.
#[cfg(debug_assertions)]
fn init_logging() {
    use std::fs::File;

    let Ok(path) = std::env::var("QPICK_LOG") else {
        return;
    };
    let Ok(file) = File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
