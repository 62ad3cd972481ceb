//! Clipstash - a clipboard snippet history manager
//!
//! Keeps the last copied text snippets in a small local file and lets
//! you search, re-copy, and delete them from a terminal window.

mod app;
mod ui;

use std::io;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use clipstash::clipboard::SystemClipboard;
use clipstash::config::Settings;
use clipstash::controller::Controller;
use clipstash::history::History;
use clipstash::log;
use clipstash::store::Store;

use app::App;

fn main() -> io::Result<()> {
    // Initialize logging first
    log::init();
    clipstash::log!("main() starting");

    let settings = Settings::load();
    clipstash::log!(
        "Settings: max_items={}, history file {:?}",
        settings.max_items,
        settings.history_path()
    );

    let store = Store::new(settings.history_path(), settings.max_items);
    let history = History::load(store, settings.max_items);
    clipstash::log!("Loaded {} snippets", history.len());

    let controller = Controller::new(history, SystemClipboard::new());
    let mut app = App::new(controller);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    clipstash::log!("Clipstash exited normally.");
    result
}
