//! Interactive surface
//!
//! Terminal event loop: translates key presses into controller
//! commands and redraws after every event. The clear-all confirmation
//! is answered here, before the command reaches the controller.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use clipstash::clipboard::Clipboard;
use clipstash::controller::{Command, Controller};

use crate::ui;

/// Event-loop state around the controller
pub struct App<C: Clipboard> {
    pub controller: Controller<C>,
    /// The clear-all confirmation overlay is showing
    pub confirm_clear: bool,
    should_quit: bool,
}

impl<C: Clipboard> App<C> {
    /// Wrap a controller for interactive use
    pub fn new(controller: Controller<C>) -> Self {
        Self {
            controller,
            confirm_clear: false,
            should_quit: false,
        }
    }

    /// Run the event loop until the user quits
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        loop {
            terminal.draw(|f| ui::draw(f, self))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.confirm_clear {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.controller.handle(Command::ClearAll);
                    self.confirm_clear = false;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.confirm_clear = false;
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.controller.handle(Command::CopySelected),
            KeyCode::Delete => self.controller.handle(Command::DeleteSelected),
            KeyCode::Up => self.controller.handle(Command::SelectUp),
            KeyCode::Down => self.controller.handle(Command::SelectDown),
            KeyCode::Backspace => {
                let mut query = self.controller.query().to_string();
                query.pop();
                self.controller.handle(Command::Search(query));
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.handle(Command::AddClipboard);
            }
            KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if !self.controller.history().is_empty() {
                    self.confirm_clear = true;
                }
            }
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                let mut query = self.controller.query().to_string();
                query.push(c);
                self.controller.handle(Command::Search(query));
            }
            _ => {}
        }
    }
}
