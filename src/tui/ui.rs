use super::app::{App, InputMode};
use super::theme::theme;
use super::{ui_utils, ui_views};
use crate::config::tui_config;
use crate::content;
use crate::model::Section;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar and content
            Constraint::Length(1), // Footer (keybindings only)
        ])
        .split(f.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(tui_config().sidebar_width),
            Constraint::Min(0),
        ])
        .split(chunks[0]);

    draw_sidebar(f, app, body[0]);
    ui_views::draw_content(f, app, body[1]);
    draw_footer(f, app, chunks[1]);

    if app.show_help {
        draw_help_popup(f);
    }
}

fn draw_sidebar(f: &mut Frame, app: &mut App, area: Rect) {
    let t = theme();
    let show_icons = tui_config().show_icons;

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| {
            let label = if show_icons {
                format!("{} {}", section.icon(), section.label())
            } else {
                section.label().to_string()
            };
            ListItem::new(Line::from(Span::styled(label, Style::default().fg(t.text))))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", content::NAME),
                    Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(t.border_style(app.input_mode == InputMode::Normal)),
        )
        .highlight_style(t.selected_style())
        .highlight_symbol("▶ ");

    app.sidebar_area = area;
    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().bg(t.mode_normal.0).fg(t.mode_normal.1),
        ),
        InputMode::ContactForm => Span::styled(
            " FORM ",
            Style::default().bg(t.mode_form.0).fg(t.mode_form.1),
        ),
    };

    let help_text = match app.input_mode {
        InputMode::Normal if app.active() == Section::Contact => {
            " ↑↓:section  f:form  l/h/m:links  J/K:scroll  ?:help  q:quit "
        }
        InputMode::Normal => " ↑↓:section  1-8:jump  J/K:scroll  g/G:top/end  ?:help  q:quit ",
        InputMode::ContactForm => " Tab:next field  ←→:subject  Enter:send  Esc:back ",
    };

    let mut footer_spans = vec![mode_indicator];

    if let Some(ref msg) = app.message {
        footer_spans.push(Span::raw(" "));
        footer_spans.push(Span::styled(
            msg,
            Style::default().fg(t.message).add_modifier(Modifier::BOLD),
        ));
    }

    footer_spans.push(Span::styled(help_text, Style::default().fg(t.text_muted)));

    let keybindings = Paragraph::new(Line::from(footer_spans));
    f.render_widget(keybindings, area);
}

fn draw_help_popup(f: &mut Frame) {
    let area = ui_utils::centered_rect(60, 70, f.area());
    let t = theme();
    let key_style = Style::default().fg(t.help_key);
    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![Span::styled(format!("{:<10}", k), key_style), Span::raw(what)])
    };
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default().add_modifier(Modifier::UNDERLINED),
        ))
    };

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Navigation"),
        key("↑/↓ j/k", "Previous/next section"),
        key("Tab", "Next section"),
        key("1-8", "Jump to section"),
        key("J/K", "Scroll content"),
        key("PgDn/PgUp", "Scroll a page"),
        key("g/G", "Top/end of content"),
        Line::from(""),
        heading("Contact"),
        key("f", "Fill in the contact form"),
        key("Tab", "Next field (in form)"),
        key("←/→", "Change subject (in form)"),
        key("Enter", "Send message (in form)"),
        key("l/h/m", "LinkedIn, GitHub, Email"),
        Line::from(""),
        key("?", "Toggle help"),
        key("Esc", "Close / Leave form / Quit"),
        key("q", "Quit"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(t.help_border)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
