use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::form::draw_word_fields;
use crate::ui::layout::screen_chunks;

fn key_span(label: &str) -> Span<'static> {
    Span::styled(
        label.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn draw_add_word(f: &mut Frame, app: &App) {
    let layout = screen_chunks(f.area());

    let title = Paragraph::new("Add New Word")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    draw_word_fields(f, layout.body_area, &app.add_form);

    let mut help_spans = vec![
        key_span("Tab"),
        Span::from(" Next field  "),
        key_span("Enter"),
        Span::from(" Save  "),
        key_span("Esc"),
        Span::from(" Back to list"),
    ];
    if app.add_form.submitted && !app.add_form.is_valid() {
        help_spans.push(Span::styled(
            "   Fill in every field",
            Style::default().fg(Color::Red),
        ));
    }
    let help = Paragraph::new(vec![Line::from(help_spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
