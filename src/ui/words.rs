use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::AppState;
use crate::ui::form::draw_word_fields;
use crate::ui::layout::{centered_rect, screen_chunks};
use crate::utils::truncate_display;

fn key_span(label: &str) -> Span<'static> {
    Span::styled(
        label.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn draw_word_list(f: &mut Frame, app: &App) {
    let layout = screen_chunks(f.area());

    let name = app
        .context
        .selected()
        .map(|p| p.name.as_str())
        .unwrap_or("?");
    let title = Paragraph::new(format!("My Words - {}", name))
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
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(layout.body_area);

    let direction = if app.words.ascending() { "A→Z" } else { "Z→A" };
    let info = Paragraph::new(format!(
        "{} words total  (next sort: {})",
        app.words.len(),
        direction
    ))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(info, body_chunks[0]);

    let row_width = body_chunks[1].width.saturating_sub(14) as usize;
    let items: Vec<ListItem> = if app.words.is_empty() {
        vec![ListItem::new("No words yet - press a to add one").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        app.words
            .words()
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let row = format!(
                    "{:>3}. {}  -  {}",
                    i + 1,
                    word.term,
                    truncate_display(&word.definition, row_width)
                );
                ListItem::new(Line::from(vec![
                    Span::from(row),
                    Span::styled(
                        format!("  Lv.{}", word.level),
                        Style::default().fg(Color::Magenta),
                    ),
                ]))
            })
            .collect()
    };

    let mut list_state = ListState::default();
    if !app.words.is_empty() {
        list_state.select(Some(app.word_index));
    }
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(list, body_chunks[1], &mut list_state);

    let help_text = vec![Line::from(vec![
        key_span("↑/↓"),
        Span::from(" Navigate  "),
        key_span("Enter"),
        Span::from(" Details  "),
        key_span("s"),
        Span::from(" Sort  "),
        key_span("a"),
        Span::from(" Add  "),
        key_span("Esc"),
        Span::from(" Back"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);

    match app.state {
        AppState::WordDetail => draw_word_detail(f, app),
        AppState::WordEdit => draw_word_edit(f, app),
        _ => {}
    }
}

fn draw_word_detail(f: &mut Frame, app: &App) {
    let word = match app.words.get(app.word_index) {
        Some(word) => word,
        None => return,
    };

    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);

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
        "Definition",
        Style::default().fg(Color::DarkGray),
    )));
    text.push_line(Line::from(word.definition.clone()));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        "Example",
        Style::default().fg(Color::DarkGray),
    )));
    text.push_line(Line::from(word.example_sentence.clone()));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        "Translation",
        Style::default().fg(Color::DarkGray),
    )));
    text.push_line(Line::from(word.meaning_of_example_sentence.clone()));
    text.push_line(Line::from(""));
    text.push_line(Line::from(vec![
        key_span("e"),
        Span::from(" Edit  "),
        key_span("d"),
        Span::from(" Delete  "),
        key_span("Esc"),
        Span::from(" Close"),
    ]));

    let detail = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Word"));
    f.render_widget(detail, area);
}

fn draw_word_edit(f: &mut Frame, app: &App) {
    let area = centered_rect(70, 80, f.area());
    f.render_widget(Clear, area);

    let block = Block::default().borders(Borders::ALL).title("Edit word");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(12), Constraint::Length(1)])
        .split(inner);

    draw_word_fields(f, chunks[0], &app.edit_form);

    let help = Paragraph::new(Line::from(vec![
        key_span("Tab"),
        Span::from(" Next field  "),
        key_span("Enter"),
        Span::from(" Save  "),
        key_span("Esc"),
        Span::from(" Cancel"),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(help, chunks[1]);
}
