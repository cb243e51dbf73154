mod add_word;
mod form;
pub mod layout;
mod menu;
mod popup;
mod profiles;
mod quiz;
mod words;

use ratatui::style::Color;
use ratatui::Frame;

use crate::app::App;
use crate::models::AppState;

pub use layout::{centered_rect, quiz_chunks, screen_chunks};

/// Render the current screen plus any overlay (confirmation or notification).
pub fn draw(f: &mut Frame, app: &App) {
    match app.state {
        AppState::ProfileSelect | AppState::ProfileDeleteConfirm => {
            profiles::draw_profile_select(f, app)
        }
        AppState::CreateProfile => profiles::draw_create_profile(f, app),
        AppState::Menu | AppState::LogoutConfirm => menu::draw_menu(f, app),
        AppState::WordList
        | AppState::WordDetail
        | AppState::WordEdit
        | AppState::WordDeleteConfirm => words::draw_word_list(f, app),
        AppState::AddWord => add_word::draw_add_word(f, app),
        AppState::Quiz | AppState::QuizDeleteConfirm => quiz::draw_quiz(f, app),
    }

    match app.state {
        AppState::ProfileDeleteConfirm => popup::draw_confirm(
            f,
            "Delete profile",
            "Delete this profile and all of its words?",
        ),
        AppState::LogoutConfirm => {
            popup::draw_confirm(f, "Log out", "Return to profile selection?")
        }
        AppState::WordDeleteConfirm | AppState::QuizDeleteConfirm => {
            popup::draw_confirm(f, "Delete word", "Really delete this word?")
        }
        _ => {}
    }

    if let Some(message) = &app.error {
        popup::draw_message(f, "Error", message, Color::Red);
    } else if let Some(message) = &app.notice {
        popup::draw_message(f, "Done", message, Color::Green);
    }
}
