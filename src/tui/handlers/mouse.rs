use crate::tui::app::{App, InputMode};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Handle mouse events
pub fn handle_mouse(app: &mut App, mouse_event: MouseEvent) {
    if app.show_help {
        return;
    }
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.input_mode == InputMode::Normal {
                app.handle_mouse_click(mouse_event.column, mouse_event.row);
            }
        }
        MouseEventKind::ScrollDown => app.scroll_down(1),
        MouseEventKind::ScrollUp => app.scroll_up(1),
        _ => {}
    }
}
