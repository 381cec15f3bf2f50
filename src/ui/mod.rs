//! Terminal drawing. Screens produce lines; this module frames them.

use crate::screens::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draws the active screen, the status line and the input prompt.
pub fn draw(frame: &mut Frame, app: &App, input: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Screen body
            Constraint::Length(1), // Status message
            Constraint::Length(3), // Input
        ])
        .split(frame.size());

    draw_body(frame, chunks[0], app);
    draw_status(frame, chunks[1], app);
    draw_input(frame, chunks[2], input);
}

fn draw_body(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", app.title()));
    let body = Paragraph::new(app.render())
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(body, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.context().message {
        Some(message) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_input(frame: &mut Frame, area: Rect, input: &str) {
    let prompt = Paragraph::new(Line::from(vec![
        Span::styled(
            "> ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{}_", input)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" [Enter] submit  [Esc] back "),
    )
    .alignment(Alignment::Left);
    frame.render_widget(prompt, area);
}
