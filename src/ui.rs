//! Rendering
//!
//! Draws the search bar, snippet list, preview pane, and status line
//! from controller state. Pure rendering; no state lives here.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use clipstash::clipboard::Clipboard;

use crate::app::App;

/// Widest list line before truncation
const MAX_LINE_LEN: usize = 80;

/// First line of an entry, shortened for the list
fn display_line(entry: &str) -> String {
    let line = entry.lines().next().unwrap_or("");
    if line.chars().count() > MAX_LINE_LEN {
        let truncated: String = line.chars().take(MAX_LINE_LEN - 3).collect();
        format!("{}...", truncated)
    } else {
        line.to_string()
    }
}

/// Draw one frame
pub fn draw<C: Clipboard>(f: &mut Frame, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Search bar
    let search = Paragraph::new(app.controller.query()).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(search, chunks[0]);

    // List beside preview
    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let items: Vec<ListItem> = app
        .controller
        .filtered_entries()
        .map(|entry| ListItem::new(Line::from(display_line(entry))))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(
                    " Snippets ({}/{}) ",
                    app.controller.filtered_len(),
                    app.controller.history().len()
                ))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(app.controller.selected());
    f.render_stateful_widget(list, middle[0], &mut list_state);

    let preview = Paragraph::new(app.controller.selected_entry().unwrap_or(""))
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" Preview ").borders(Borders::ALL));
    f.render_widget(preview, middle[1]);

    // Status line
    let status = Paragraph::new(app.controller.status().to_string())
        .style(Style::default().fg(Color::White));
    f.render_widget(status, chunks[2]);

    // Key hints
    let hints = Paragraph::new(
        "Type to search │ ↑↓ Select │ Ctrl+A Add │ Enter Copy │ Del Delete │ Ctrl+X Clear │ Esc Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(hints, chunks[3]);

    if app.confirm_clear {
        draw_clear_confirm(f);
    }
}

/// Centered confirmation box over the main view
fn draw_clear_confirm(f: &mut Frame) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(5),
            Constraint::Percentage(40),
        ])
        .split(f.area());

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(vertical[1]);

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            "Clear all saved clipboard items?",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Y to confirm • N or Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );

    f.render_widget(ratatui::widgets::Clear, horizontal[1]);
    f.render_widget(text, horizontal[1]);
}
