use crate::tui::app::{App, PAGE_SCROLL};
use crossterm::event::{KeyCode, KeyEvent};

/// Handle Normal mode key events
/// Returns true if the application should quit
pub fn handle_normal_mode(app: &mut App, key: KeyEvent) -> bool {
    // The help popup swallows everything except its own toggles and quit
    if app.show_help {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc | KeyCode::Char('?') => app.show_help = false,
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.next(),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.previous(),
        KeyCode::Char(c @ '1'..='8') => app.jump(c as usize - '0' as usize),
        KeyCode::Char('J') => app.scroll_down(1),
        KeyCode::Char('K') => app.scroll_up(1),
        KeyCode::PageDown => app.scroll_down(PAGE_SCROLL),
        KeyCode::PageUp => app.scroll_up(PAGE_SCROLL),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_top(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_end(),
        KeyCode::Char('f') | KeyCode::Enter => app.open_contact_form(),
        KeyCode::Char(c) => {
            app.trigger_link(c);
        }
        _ => {}
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_normal_mode(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_help_popup_blocks_navigation() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        for code in [
            KeyCode::Down,
            KeyCode::Char('j'),
            KeyCode::Tab,
            KeyCode::Char('3'),
            KeyCode::PageDown,
            KeyCode::Char('G'),
            KeyCode::Enter,
        ] {
            assert!(!press(&mut app, code));
        }
        assert_eq!(app.active(), Section::Home);
        assert_eq!(app.content_scroll, 0);
        assert!(app.show_help);

        assert!(!press(&mut app, KeyCode::Esc));
        assert!(!app.show_help);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.active(), Section::About);
    }

    #[test]
    fn test_question_mark_closes_help_and_q_quits() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('?'));
        assert!(!app.show_help);

        press(&mut app, KeyCode::Char('?'));
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_esc_quits_without_help() {
        let mut app = App::new();
        assert!(press(&mut app, KeyCode::Esc));
    }
}
