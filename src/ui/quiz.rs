use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::quiz::{QuizScreen, QuizSession};
use crate::ui::layout::{quiz_chunks, screen_chunks};

fn key_span(label: &str) -> Span<'static> {
    Span::styled(
        label.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn draw_quiz(f: &mut Frame, app: &App) {
    match &app.quiz {
        QuizScreen::Loading { error } => draw_loading(f, error.as_deref()),
        QuizScreen::Ready(session) => {
            if session.is_finished() {
                draw_results(f, session);
            } else {
                draw_card(f, session);
            }
        }
    }
}

fn draw_loading(f: &mut Frame, error: Option<&str>) {
    let layout = screen_chunks(f.area());

    let title = Paragraph::new("Word Test")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let body = match error {
        Some(error) => Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Could not load your words",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(error.to_string()),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL)),
        None => Paragraph::new(vec![Line::from(""), Line::from("Loading your words...")])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
    };
    f.render_widget(body, layout.body_area);

    let mut help_spans = Vec::new();
    if error.is_some() {
        help_spans.extend([key_span("r"), Span::from(" Retry  ")]);
    }
    help_spans.extend([key_span("Esc"), Span::from(" Back to menu")]);
    let help = Paragraph::new(vec![Line::from(help_spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_card(f: &mut Frame, session: &QuizSession) {
    let layout = quiz_chunks(f.area());

    let word = match session.current() {
        Some(word) => word,
        None => return,
    };

    let header = Paragraph::new(format!(
        "Word Test - {} / {}",
        session.cursor() + 1,
        session.total()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let progress = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio((session.cursor() + 1) as f64 / session.total() as f64)
        .label(format!("{} / {}", session.cursor() + 1, session.total()));
    f.render_widget(progress, layout.progress_area);

    let mut text = Text::default();
    text.push_line(Line::from(vec![
        Span::styled(
            word.term.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  Lv.{}", word.level),
            Style::default().fg(Color::Magenta),
        ),
    ]));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        "Example",
        Style::default().fg(Color::DarkGray),
    )));
    text.push_line(Line::from(word.example_sentence.clone()));

    if session.revealed() {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            "Definition",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(word.definition.clone()));
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            "Translation",
            Style::default().fg(Color::DarkGray),
        )));
        text.push_line(Line::from(word.meaning_of_example_sentence.clone()));
    }

    let card = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Card"));
    f.render_widget(card, layout.card_area);

    let help_spans = if session.revealed() {
        vec![
            key_span("Enter"),
            Span::from(" Got it (level up)  "),
            key_span("n"),
            Span::from(" Not yet  "),
            key_span("d"),
            Span::from(" Delete  "),
            key_span("Esc"),
            Span::from(" Back"),
        ]
    } else {
        vec![
            key_span("Enter"),
            Span::from(" Show meaning  "),
            key_span("n"),
            Span::from(" Skip  "),
            key_span("d"),
            Span::from(" Delete  "),
            key_span("Esc"),
            Span::from(" Back"),
        ]
    };
    let help = Paragraph::new(vec![Line::from(help_spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_results(f: &mut Frame, session: &QuizSession) {
    let layout = screen_chunks(f.area());

    let title = Paragraph::new("Test Results")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Well done!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "You went through {} words this round.",
            session.total()
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, layout.body_area);

    let help_text = vec![Line::from(vec![
        key_span("Enter"),
        Span::from(" Main menu  "),
        key_span("w"),
        Span::from(" Word list"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
