use super::handlers::{handle_contact_form, handle_mouse, handle_normal_mode};
use super::ui;
use crate::{
    config::{FolioConfig, init_tui_config},
    contact::FormField,
    content,
    error::Result,
    model::Section,
    render::RenderTree,
    router::Router,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect, widgets::ListState};
use std::io;

/// Lines moved by PageUp/PageDown
pub const PAGE_SCROLL: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    ContactForm,
}

pub struct App {
    pub router: Router,
    /// Render tree of the active section, recomputed on every change
    pub tree: RenderTree,
    pub input_mode: InputMode,
    pub focused_field: FormField,
    pub list_state: ListState,
    pub content_scroll: u16,
    pub content_max_scroll: u16,
    pub show_help: bool,
    pub message: Option<String>,
    /// Last drawn sidebar area, used for mouse hit-testing
    pub sidebar_area: Rect,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let router = Router::new();
        let tree = router.render();
        let mut list_state = ListState::default();
        list_state.select(Some(router.active().index()));

        Self {
            router,
            tree,
            input_mode: InputMode::Normal,
            focused_field: FormField::Name,
            list_state,
            content_scroll: 0,
            content_max_scroll: 0,
            show_help: false,
            message: None,
            sidebar_area: Rect::default(),
        }
    }

    pub fn active(&self) -> Section {
        self.router.active()
    }

    pub fn select(&mut self, section: Section) {
        if section != self.active() {
            self.leave_current();
        }
        self.tree = self.router.select(section);
        self.list_state.select(Some(section.index()));
    }

    pub fn next(&mut self) {
        self.leave_current();
        self.tree = self.router.next();
        self.list_state.select(Some(self.active().index()));
    }

    pub fn previous(&mut self) {
        self.leave_current();
        self.tree = self.router.previous();
        self.list_state.select(Some(self.active().index()));
    }

    fn leave_current(&mut self) {
        self.content_scroll = 0;
        self.input_mode = InputMode::Normal;
    }

    /// Jumps to the section at 1-based position `n`.
    pub fn jump(&mut self, n: usize) {
        if let Some(section) = n.checked_sub(1).and_then(Section::from_index) {
            self.select(section);
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.content_scroll = self
            .content_scroll
            .saturating_add(lines)
            .min(self.content_max_scroll);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.content_scroll = self.content_scroll.saturating_sub(lines);
    }

    pub fn scroll_top(&mut self) {
        self.content_scroll = 0;
    }

    pub fn scroll_end(&mut self) {
        self.content_scroll = self.content_max_scroll;
    }

    /// Enters form editing; only available on the contact section.
    pub fn open_contact_form(&mut self) {
        if self.active() == Section::Contact {
            self.input_mode = InputMode::ContactForm;
            self.focused_field = FormField::Name;
        }
    }

    pub fn close_contact_form(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn previous_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn type_char(&mut self, c: char) {
        if let Some(text) = self.router.form_mut().text_mut(self.focused_field) {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.router.form_mut().text_mut(self.focused_field) {
            text.pop();
        }
    }

    pub fn next_subject(&mut self) {
        if self.focused_field == FormField::Subject {
            let form = self.router.form_mut();
            form.subject = form.subject.next();
        }
    }

    pub fn previous_subject(&mut self) {
        if self.focused_field == FormField::Subject {
            let form = self.router.form_mut();
            form.subject = form.subject.prev();
        }
    }

    /// Submits the contact form. The outcome is shown in the contact
    /// section and echoed in the footer.
    pub fn submit_contact_form(&mut self) {
        match self.router.submit_contact() {
            Ok(ack) => {
                self.message = Some(ack.message.to_string());
                self.input_mode = InputMode::Normal;
                self.focused_field = FormField::Name;
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
        self.tree = self.router.render();
    }

    /// Shows the notice of the link placeholder bound to `key`.
    pub fn trigger_link(&mut self, key: char) -> bool {
        if self.active() != Section::Contact {
            return false;
        }
        match content::LINKS.iter().find(|l| l.key == key) {
            Some(link) => {
                tracing::debug!(link = link.label, "link placeholder");
                self.message = Some(link.notice.to_string());
                true
            }
            None => false,
        }
    }

    /// Selects the sidebar entry under the given terminal cell.
    pub fn handle_mouse_click(&mut self, column: u16, row: u16) {
        let area = self.sidebar_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row > area.y
            && row < area.y + area.height.saturating_sub(1);
        if !inside {
            return;
        }
        let index = (row - area.y - 1) as usize + self.list_state.offset();
        if let Some(section) = Section::from_index(index) {
            self.select(section);
        }
    }
}

pub fn run_tui(config: FolioConfig) -> Result<()> {
    init_tui_config(config.tui);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    tracing::info!("tui started");
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "tui loop failed");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Clear message on the next key press
                app.message = None;

                let quit = match app.input_mode {
                    InputMode::Normal => handle_normal_mode(app, key),
                    InputMode::ContactForm => handle_contact_form(app, key),
                };
                if quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
        }
    }
}
