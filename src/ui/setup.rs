use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, DIFFICULTIES};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(14),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "ALGEBRA QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(format!("topic: {}", app.topic()).fg(Color::DarkGray)),
        Line::from(""),
    ];

    for (index, difficulty) in DIFFICULTIES.iter().enumerate() {
        let is_selected = index == app.selected_difficulty();
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        content.push(Line::from(Span::styled(
            format!(" {} {} ", marker, difficulty),
            style,
        )));
    }

    content.push(Line::from(""));
    match app.setup_error() {
        Some(error) => content.push(Line::from(error.to_string().fg(Color::Red))),
        None => content.push(Line::from("j/k select  ·  enter start  ·  q quit".fg(Color::DarkGray))),
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
