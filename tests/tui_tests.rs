use folio::{
    contact::{ACKNOWLEDGMENT, FormField, FormStatus, Subject},
    content,
    model::Section,
    render::Block,
    tui::{
        app::{App, InputMode},
        ui,
    },
};
use ratatui::{Terminal, backend::TestBackend};

fn draw(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    buffer.content().iter().map(|c| c.symbol()).collect()
}

/// Text inside the content pane, whitespace and glyph decorations dropped,
/// so wrapped words read as one run.
fn content_text(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let left = app.sidebar_area.right() + 1;
    let mut text = String::new();
    for y in 1..height.saturating_sub(2) {
        for x in left..width - 1 {
            text.push_str(buffer[(x, y)].symbol());
        }
    }
    squash(&text)
}

fn squash(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_ascii_punctuation())
        .collect()
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.type_char(c);
    }
}

fn fill_form(app: &mut App, name: &str, email: &str, message: &str) {
    app.select(Section::Contact);
    app.open_contact_form();
    type_text(app, name);
    app.next_field();
    type_text(app, email);
    app.next_field();
    app.next_field();
    type_text(app, message);
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_starts_on_home() {
    let app = App::new();
    assert_eq!(app.active(), Section::Home);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.list_state.selected(), Some(0));
    assert_eq!(app.tree.section, Section::Home);
}

#[test]
fn test_next_and_previous_cycle() {
    let mut app = App::new();
    app.previous();
    assert_eq!(app.active(), Section::Contact);
    app.next();
    assert_eq!(app.active(), Section::Home);
    app.next();
    assert_eq!(app.active(), Section::About);
    assert_eq!(app.list_state.selected(), Some(1));
}

#[test]
fn test_jump_by_number() {
    let mut app = App::new();
    app.jump(3);
    assert_eq!(app.active(), Section::Skills);
    app.jump(8);
    assert_eq!(app.active(), Section::Contact);
    app.jump(0);
    app.jump(9);
    assert_eq!(app.active(), Section::Contact);
}

#[test]
fn test_changing_section_resets_scroll() {
    let mut app = App::new();
    app.select(Section::Skills);
    draw(&mut app, 100, 20);
    assert!(app.content_max_scroll > 0);
    app.scroll_down(5);
    assert_eq!(app.content_scroll, 5);
    app.next();
    assert_eq!(app.content_scroll, 0);
}

#[test]
fn test_scroll_is_clamped() {
    let mut app = App::new();
    app.select(Section::Projects);
    draw(&mut app, 100, 20);
    app.scroll_end();
    let max = app.content_max_scroll;
    app.scroll_down(50);
    assert_eq!(app.content_scroll, max);
    app.scroll_top();
    app.scroll_up(3);
    assert_eq!(app.content_scroll, 0);
}

// ============================================================================
// Contact form
// ============================================================================

#[test]
fn test_form_only_opens_on_contact() {
    let mut app = App::new();
    app.open_contact_form();
    assert_eq!(app.input_mode, InputMode::Normal);

    app.select(Section::Contact);
    app.open_contact_form();
    assert_eq!(app.input_mode, InputMode::ContactForm);
    assert_eq!(app.focused_field, FormField::Name);

    app.close_contact_form();
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_field_navigation_wraps() {
    let mut app = App::new();
    app.select(Section::Contact);
    app.open_contact_form();
    app.previous_field();
    assert_eq!(app.focused_field, FormField::Message);
    app.next_field();
    assert_eq!(app.focused_field, FormField::Name);
}

#[test]
fn test_subject_changes_only_when_focused() {
    let mut app = App::new();
    app.select(Section::Contact);
    app.open_contact_form();
    app.next_subject();
    assert_eq!(app.router.form().subject, Subject::JobOpportunity);

    app.next_field();
    app.next_field();
    app.next_subject();
    assert_eq!(app.router.form().subject, Subject::ProjectCollaboration);
    app.previous_subject();
    app.previous_subject();
    assert_eq!(app.router.form().subject, Subject::Other);

    // The subject selector takes no text
    app.type_char('x');
    assert_eq!(app.router.form().subject, Subject::Other);
}

#[test]
fn test_typing_and_backspace() {
    let mut app = App::new();
    app.select(Section::Contact);
    app.open_contact_form();
    type_text(&mut app, "Janex");
    app.backspace();
    assert_eq!(app.router.form().name, "Jane");
}

#[test]
fn test_submit_valid_form_acknowledges() {
    let mut app = App::new();
    fill_form(&mut app, "Jane", "jane@x.com", "Hi");
    app.submit_contact_form();

    assert_eq!(app.message.as_deref(), Some(ACKNOWLEDGMENT));
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.router.form().is_empty());
    assert_eq!(
        app.router.status(),
        &FormStatus::Acknowledged(ACKNOWLEDGMENT.to_string())
    );
    assert!(
        app.tree
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Notice { text, .. } if text == ACKNOWLEDGMENT))
    );
}

#[test]
fn test_submit_invalid_form_keeps_fields() {
    let mut app = App::new();
    fill_form(&mut app, "Jane", "not-an-email", "Hi");
    app.submit_contact_form();

    assert_eq!(app.input_mode, InputMode::ContactForm);
    assert_eq!(app.router.form().email, "not-an-email");
    assert!(matches!(app.router.status(), FormStatus::Rejected(_)));
    assert!(app.message.as_deref().unwrap().contains("not a valid address"));
}

#[test]
fn test_leaving_contact_clears_outcome() {
    let mut app = App::new();
    fill_form(&mut app, "Jane", "jane@x.com", "Hi");
    app.submit_contact_form();
    app.select(Section::Home);
    app.select(Section::Contact);
    assert_eq!(app.router.status(), &FormStatus::Idle);
    assert!(
        !app.tree
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Notice { .. }))
    );
}

#[test]
fn test_link_placeholders() {
    let mut app = App::new();
    assert!(!app.trigger_link('l'));

    app.select(Section::Contact);
    assert!(app.trigger_link('l'));
    assert!(app.message.as_deref().unwrap().contains("LinkedIn"));
    assert!(app.trigger_link('h'));
    assert!(app.message.as_deref().unwrap().contains("GitHub"));
    assert!(app.trigger_link('m'));
    assert!(app.message.as_deref().unwrap().contains("Email"));
    assert!(!app.trigger_link('z'));
}

// ============================================================================
// Drawing
// ============================================================================

#[test]
fn test_every_section_draws() {
    let mut app = App::new();
    for section in Section::ALL {
        app.select(section);
        let screen = draw(&mut app, 140, 50);
        assert!(screen.contains(section.label()), "{section} not drawn");
        assert!(screen.contains("NORMAL"));
    }
}

#[test]
fn test_narrow_pane_keeps_every_heading() {
    for section in [
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Certifications,
    ] {
        for width in [50, 60, 70] {
            let mut app = App::new();
            app.select(section);
            let text = content_text(&mut app, width, 600);
            assert_eq!(app.content_max_scroll, 0, "{section} at {width} does not fit");

            let tree = app.tree.clone();
            for heading in tree.headings() {
                assert!(
                    text.contains(&squash(heading)),
                    "{section} at {width}: {heading:?} was overdrawn"
                );
            }
            for block in &tree.blocks {
                block.walk(&mut |b| {
                    if let Block::Badges { labels, .. } = b {
                        for label in labels {
                            assert!(text.contains(&squash(label)), "{section} at {width}: {label}");
                        }
                    }
                });
            }
            for line in content::FOOTER {
                assert!(text.contains(&squash(line)), "{section} at {width}: footer");
            }
        }
    }
}

#[test]
fn test_scroll_reaches_the_footer() {
    let mut app = App::new();
    app.select(Section::Skills);
    draw(&mut app, 60, 30);
    app.scroll_end();
    let text = content_text(&mut app, 60, 30);
    assert!(text.contains(&squash(content::FOOTER[1])));
}

#[test]
fn test_draw_shows_form_mode() {
    let mut app = App::new();
    app.select(Section::Contact);
    app.open_contact_form();
    type_text(&mut app, "Jane");
    let screen = draw(&mut app, 140, 60);
    assert!(screen.contains("FORM"));
    assert!(screen.contains("Jane_"));
}

#[test]
fn test_help_popup() {
    let mut app = App::new();
    app.show_help = true;
    let screen = draw(&mut app, 120, 40);
    assert!(screen.contains("Keyboard Shortcuts"));
}

#[test]
fn test_click_sidebar_selects_section() {
    let mut app = App::new();
    draw(&mut app, 120, 40);
    let area = app.sidebar_area;
    // Row 0 is the border, Skills is the third entry
    app.handle_mouse_click(area.x + 2, area.y + 3);
    assert_eq!(app.active(), Section::Skills);

    // Clicks outside the sidebar are ignored
    app.handle_mouse_click(area.x + area.width + 5, area.y + 1);
    assert_eq!(app.active(), Section::Skills);
}
