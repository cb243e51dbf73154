use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
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

pub fn draw_profile_select(f: &mut Frame, app: &App) {
    let layout = screen_chunks(f.area());

    let title = Paragraph::new("Wordbook - Who is studying today?")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let items: Vec<ListItem> = if app.context.is_empty() {
        vec![ListItem::new("No profiles yet - press n to create one").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        app.context
            .profiles()
            .iter()
            .enumerate()
            .map(|(i, profile)| {
                let style = if i == app.profile_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(profile.name.clone()).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Select a profile"),
    );
    f.render_widget(list, layout.body_area);

    let help_text = vec![Line::from(vec![
        key_span("↑/↓"),
        Span::from(" Navigate  "),
        key_span("Enter"),
        Span::from(" Select  "),
        key_span("n"),
        Span::from(" New  "),
        key_span("d"),
        Span::from(" Delete  "),
        key_span("q"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_create_profile(f: &mut Frame, app: &App) {
    let layout = screen_chunks(f.area());

    let title = Paragraph::new("Create a profile")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let input = Paragraph::new(if app.name_input.is_empty() {
        Span::styled(
            "Type a profile name",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::from(app.name_input.as_str())
    })
    .block(Block::default().borders(Borders::ALL).title("Profile name"));
    f.render_widget(input, layout.body_area);

    let cursor_x = layout.body_area.x + 1 + app.name_input.chars().count() as u16;
    f.set_cursor_position((cursor_x, layout.body_area.y + 1));

    let help_text = vec![Line::from(vec![
        key_span("Enter"),
        Span::from(" Create  "),
        key_span("Esc"),
        Span::from(" Back"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
