use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{QuestionKind, Response};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], session.position() + 1, session.len());
    render_prompt(frame, chunks[1], &question.prompt);

    match &question.kind {
        QuestionKind::MultipleChoice {
            options,
            correct_index,
        } => render_options(frame, chunks[2], app, options, *correct_index),
        QuestionKind::FreeResponse { correct_answer, .. } => {
            render_input(frame, chunks[2], app, correct_answer)
        }
    }

    render_feedback(frame, chunks[3], app, &question.explanation);
    render_controls(frame, chunks[4], app);
}

fn render_progress(frame: &mut Frame, area: Rect, current: usize, total: usize) {
    let widget = Paragraph::new(format!("{}/{}", current, total))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    options: &[String],
    correct_index: usize,
) {
    let revealed = app.feedback().is_some();
    let chosen = app.session().and_then(|s| match s.pending_response() {
        Some(Response::Choice(index)) => Some(*index),
        _ => None,
    });

    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);
    for (index, option) in options.iter().enumerate() {
        let is_selected = index == app.selected_option();
        let style = if revealed {
            if index == correct_index {
                Style::default().fg(Color::Green).bold()
            } else if chosen == Some(index) {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        } else if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if !revealed && is_selected { ">" } else { " " };
        let label = (b'A' + index as u8) as char;

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App, correct_answer: &str) {
    let revealed = app.feedback().is_some();
    let typed = match app.session().and_then(|s| s.pending_response()) {
        Some(Response::Text(text)) => text.as_str(),
        _ => app.input(),
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(" answer: ", Style::default().fg(Color::DarkGray)),
        Span::styled(typed, Style::default().fg(Color::Cyan).bold()),
        Span::styled(if revealed { "" } else { "_" }, Style::default().fg(Color::Cyan)),
    ])];
    if revealed {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" correct answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(correct_answer, Style::default().fg(Color::Green).bold()),
        ]));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App, explanation: &str) {
    let Some(correct) = app.feedback() else {
        return;
    };
    let (verdict, color) = if correct {
        ("Correct!", Color::Green)
    } else {
        ("Incorrect", Color::Red)
    };

    let lines = vec![
        Line::from(Span::styled(verdict, Style::default().fg(color).bold())),
        Line::from(""),
        Line::from(explanation.fg(Color::Gray)),
    ];
    let widget = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let is_choice = app
        .session()
        .and_then(|s| s.current_question())
        .map(|q| q.is_multiple_choice())
        .unwrap_or(false);
    let text = if app.feedback().is_some() {
        "enter continue  ·  esc quit"
    } else if is_choice {
        "j/k select  ·  enter submit  ·  esc quit"
    } else {
        "type your answer  ·  enter submit  ·  esc quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
