use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::layout::screen_chunks;

fn key_span(label: &str) -> Span<'static> {
    Span::styled(
        label.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn draw_menu(f: &mut Frame, app: &App) {
    let layout = screen_chunks(f.area());

    let name = app
        .context
        .selected()
        .map(|p| p.name.as_str())
        .unwrap_or("?");
    let title = Paragraph::new(format!("Welcome, {}!", name))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let body_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(layout.body_area);

    let count_line = match app.menu_word_count {
        Some(count) => format!("Words in your book: {}", count),
        None => "Words in your book: ...".to_string(),
    };
    let summary = Paragraph::new(vec![
        Line::from(Span::styled(
            "My Vocabulary",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(count_line),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, body_chunks[0]);

    let entries = vec![
        Line::from(""),
        Line::from(vec![key_span("w"), Span::from("  My word list")]),
        Line::from(""),
        Line::from(vec![key_span("t"), Span::from("  Word test")]),
        Line::from(""),
        Line::from(vec![key_span("l"), Span::from("  Log out")]),
    ];
    let menu = Paragraph::new(entries)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Menu"));
    f.render_widget(menu, body_chunks[1]);

    let help_text = vec![Line::from(vec![
        key_span("w"),
        Span::from(" Words  "),
        key_span("t"),
        Span::from(" Test  "),
        key_span("l"),
        Span::from(" Log out  "),
        key_span("Ctrl+C"),
        Span::from(" Exit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
