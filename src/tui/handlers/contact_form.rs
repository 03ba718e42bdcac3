use crate::contact::FormField;
use crate::tui::app::App;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle ContactForm mode key events
/// Returns true if the application should quit
pub fn handle_contact_form(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.close_contact_form(),
        KeyCode::Enter => app.submit_contact_form(),
        KeyCode::Tab | KeyCode::Down => app.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.previous_field(),
        KeyCode::Right => app.next_subject(),
        KeyCode::Left => app.previous_subject(),
        KeyCode::Backspace => app.backspace(),
        // Space cycles the subject selector, like the arrows
        KeyCode::Char(' ') if app.focused_field == FormField::Subject => app.next_subject(),
        KeyCode::Char(c) => app.type_char(c),
        _ => {}
    }

    false
}
