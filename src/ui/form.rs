use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::WordForm;

/// Render the four word fields as stacked input boxes. The focused field gets
/// a cyan border and the cursor; fields left empty after a submit attempt are
/// outlined red.
pub fn draw_word_fields(f: &mut Frame, area: Rect, form: &WordForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    for (i, label) in WordForm::LABELS.iter().enumerate() {
        let focused = form.focus == i;
        let border_style = if form.missing(i) {
            Style::default().fg(Color::Red)
        } else if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let content = if form.fields[i].is_empty() {
            Span::styled(*label, Style::default().fg(Color::DarkGray))
        } else {
            Span::from(form.fields[i].as_str())
        };

        let input = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(*label),
        );
        f.render_widget(input, chunks[i]);

        if focused {
            let cursor_x = chunks[i].x + 1 + form.fields[i].chars().count() as u16;
            f.set_cursor_position((cursor_x, chunks[i].y + 1));
        }
    }
}
