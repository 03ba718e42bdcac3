//! Render tree painting for the content pane.
//!
//! Blocks become styled text; charts are cut out as separate pieces so the
//! chart widgets can be laid out between the text.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span, Text},
    widgets::{self, Borders, Paragraph, Wrap},
};

use super::app::{App, InputMode};
use super::theme::theme;
use super::ui_charts::{chart_height, draw_chart};
use super::ui_utils::wrapped_height;
use crate::contact::{ContactForm, FormField};
use crate::content;
use crate::model::ChartSpec;
use crate::render::{self, Block, RenderTree};

/// A vertical slice of the content pane.
pub enum Piece<'a> {
    Text(Text<'static>),
    Chart(&'a ChartSpec),
}

impl Piece<'_> {
    pub fn height(&self, width: u16) -> u16 {
        match self {
            Piece::Text(text) => wrapped_height(text, width),
            Piece::Chart(spec) => chart_height(spec),
        }
    }
}

/// Live contact form values painted into the form block.
pub struct FormState<'a> {
    pub form: &'a ContactForm,
    pub focus: Option<FormField>,
}

#[derive(Default)]
struct PieceBuilder<'a> {
    pieces: Vec<Piece<'a>>,
    lines: Vec<Line<'static>>,
}

impl<'a> PieceBuilder<'a> {
    fn line(&mut self, indent: usize, spans: Vec<Span<'static>>) {
        let mut line = Vec::with_capacity(spans.len() + 1);
        if indent > 0 {
            line.push(Span::raw(" ".repeat(indent)));
        }
        line.extend(spans);
        self.lines.push(Line::from(line));
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn flush(&mut self) {
        if !self.lines.is_empty() {
            let lines = std::mem::take(&mut self.lines);
            self.pieces.push(Piece::Text(Text::from(lines)));
        }
    }

    fn chart(&mut self, spec: &'a ChartSpec) {
        self.flush();
        self.pieces.push(Piece::Chart(spec));
    }

    fn finish(mut self) -> Vec<Piece<'a>> {
        self.flush();
        self.pieces
    }
}

fn rich(spans: &[render::Span], base: Style) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|s| {
            let style = if s.strong {
                base.add_modifier(Modifier::BOLD)
            } else {
                base
            };
            Span::styled(s.text.clone(), style)
        })
        .collect()
}

/// Splits a render tree into text and chart pieces.
pub fn pieces<'a>(tree: &'a RenderTree, form: &FormState) -> Vec<Piece<'a>> {
    let mut builder = PieceBuilder::default();
    for block in &tree.blocks {
        paint_block(&mut builder, block, 0, form);
    }
    builder.finish()
}

fn paint_block<'a>(out: &mut PieceBuilder<'a>, block: &'a Block, indent: usize, form: &FormState) {
    let t = theme();
    let text = Style::default().fg(t.text);
    let muted = Style::default().fg(t.text_muted);

    match block {
        Block::Title { text: title, subtitle } => {
            out.line(
                indent,
                vec![Span::styled(
                    title.clone(),
                    Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
                )],
            );
            if let Some(sub) = subtitle {
                out.line(indent, vec![Span::styled(sub.clone(), muted.add_modifier(Modifier::ITALIC))]);
            }
            out.blank();
        }
        Block::Heading { text: heading } => {
            out.line(
                indent,
                vec![Span::styled(
                    heading.clone(),
                    text.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )],
            );
        }
        Block::Paragraph { spans } => {
            out.line(indent, rich(spans, text));
            out.blank();
        }
        Block::Bullets { items } => {
            for item in items {
                let mut spans = vec![Span::styled("• ", Style::default().fg(t.accent))];
                spans.extend(rich(item, text));
                out.line(indent + 2, spans);
            }
            out.blank();
        }
        Block::Badges { tone, labels } => {
            let color = t.tone_color(*tone);
            let mut spans = Vec::new();
            for label in labels {
                spans.push(Span::styled(
                    format!(" {} ", label),
                    Style::default().bg(color).fg(Color::Black),
                ));
                spans.push(Span::raw(" "));
            }
            out.line(indent, spans);
            out.blank();
        }
        Block::Metrics { cards } => {
            for card in cards {
                let mut spans = Vec::new();
                if let Some(icon) = &card.icon {
                    spans.push(Span::raw(format!("{} ", icon)));
                }
                spans.push(Span::styled(format!("{}: ", card.label), muted));
                spans.push(Span::styled(
                    card.value.clone(),
                    Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
                ));
                out.line(indent + 2, spans);
            }
            out.blank();
        }
        Block::Card {
            tone,
            title,
            subtitle,
            fields,
            body,
        } => {
            let color = t.tone_color(*tone);
            out.line(
                indent,
                vec![
                    Span::styled("▌ ", Style::default().fg(color)),
                    Span::styled(title.clone(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                ],
            );
            if let Some(sub) = subtitle {
                out.line(indent + 2, vec![Span::styled(sub.clone(), muted.add_modifier(Modifier::ITALIC))]);
            }
            for field in fields {
                out.line(
                    indent + 2,
                    vec![
                        Span::styled(format!("{}: ", field.label), muted),
                        Span::styled(field.value.clone(), text),
                    ],
                );
            }
            for child in body {
                paint_block(out, child, indent + 2, form);
            }
            if body.is_empty() {
                out.blank();
            }
        }
        Block::Table { headers, rows } => {
            let widths: Vec<usize> = (0..headers.len())
                .map(|i| {
                    rows.iter()
                        .filter_map(|r| r.get(i))
                        .chain(headers.get(i))
                        .map(|c| c.chars().count())
                        .max()
                        .unwrap_or(0)
                })
                .collect();
            let row_spans = |cells: &[String], style: Style| -> Vec<Span<'static>> {
                cells
                    .iter()
                    .zip(&widths)
                    .map(|(c, w)| Span::styled(format!("{:<w$}  ", c, w = *w), style))
                    .collect()
            };
            out.line(
                indent,
                row_spans(headers.as_slice(), text.add_modifier(Modifier::BOLD)),
            );
            for row in rows {
                out.line(indent, row_spans(row.as_slice(), text));
            }
            out.blank();
        }
        Block::Chart { spec } => {
            out.chart(spec);
            out.blank();
        }
        Block::Notice { tone, text: notice } => {
            let style = t.tone_style(*tone).add_modifier(Modifier::BOLD);
            out.line(indent, vec![Span::styled(format!("● {}", notice), style)]);
            out.blank();
        }
        Block::Actions { actions } => {
            let mut spans = Vec::new();
            for action in actions {
                spans.push(Span::styled(format!("[{}] ", action.key), Style::default().fg(t.help_key)));
                spans.push(Span::styled(format!("{}   ", action.label), text));
            }
            out.line(indent, spans);
            out.blank();
        }
        Block::Form { form: view } => paint_form(out, view, indent, form),
        Block::Divider => {
            out.line(indent, vec![Span::styled("─".repeat(40), muted)]);
        }
    }
}

fn paint_form(out: &mut PieceBuilder, view: &render::FormView, indent: usize, state: &FormState) {
    let t = theme();
    let muted = Style::default().fg(t.text_muted);

    for (field, label) in FormField::ALL.iter().zip(&view.fields) {
        let focused = state.focus == Some(*field);
        let label_style = if focused {
            Style::default().fg(t.field_focused).add_modifier(Modifier::BOLD)
        } else {
            muted
        };
        let marker = if focused { "▶ " } else { "  " };
        out.line(indent, vec![Span::styled(format!("{}{}", marker, label), label_style)]);

        let value = match field {
            FormField::Name => state.form.name.as_str(),
            FormField::Email => state.form.email.as_str(),
            FormField::Subject => state.form.subject.label(),
            FormField::Message => state.form.message.as_str(),
        };
        let mut spans = match field {
            FormField::Subject => vec![
                Span::styled("◀ ", muted),
                Span::styled(value.to_string(), Style::default().fg(t.text)),
                Span::styled(" ▶", muted),
            ],
            _ => vec![
                Span::styled("│ ", muted),
                Span::styled(value.to_string(), Style::default().fg(t.text)),
            ],
        };
        if focused && *field != FormField::Subject {
            spans.push(Span::styled("_", Style::default().fg(t.field_cursor)));
        }
        out.line(indent + 4, spans);
    }

    out.blank();
    let button = if state.focus.is_some() {
        Style::default()
            .bg(t.accent)
            .fg(t.text_highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(t.accent)
    };
    let hint = if state.focus.is_some() {
        "  Enter to send, Esc to go back"
    } else {
        "  press f to fill in the form"
    };
    out.line(
        indent + 2,
        vec![
            Span::styled(format!("[ {} ]", view.submit_label), button),
            Span::styled(hint, muted),
        ],
    );
    out.blank();
}

fn footer_text() -> Text<'static> {
    let muted = Style::default().fg(theme().text_muted);
    let mut lines = vec![Line::from(Span::styled("─".repeat(40), muted))];
    lines.extend(
        content::FOOTER
            .iter()
            .map(|l| Line::from(Span::styled(*l, muted))),
    );
    Text::from(lines)
}

pub fn draw_content(f: &mut Frame, app: &mut App, area: Rect) {
    let t = theme();
    let section = app.router.active();
    let editing = app.input_mode == InputMode::ContactForm;

    let block = widgets::Block::default()
        .title(Span::styled(
            format!(" {} {} ", section.icon(), section.label()),
            Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(t.border_style(editing));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let state = FormState {
        form: app.router.form(),
        focus: editing.then_some(app.focused_field),
    };
    let mut pieces = pieces(&app.tree, &state);
    pieces.push(Piece::Text(footer_text()));

    let width = inner.width;
    let heights: Vec<u16> = pieces.iter().map(|p| p.height(width)).collect();
    let total = heights.iter().fold(0u16, |acc, h| acc.saturating_add(*h));
    app.content_max_scroll = total.saturating_sub(inner.height);
    app.content_scroll = app.content_scroll.min(app.content_max_scroll);

    let scroll = app.content_scroll;
    let view_end = scroll.saturating_add(inner.height);
    let mut top = 0u16;
    for (piece, height) in pieces.iter().zip(heights) {
        let bottom = top.saturating_add(height);
        if bottom > scroll && top < view_end {
            let visible_top = top.max(scroll);
            let rect = Rect {
                x: inner.x,
                y: inner.y + (visible_top - scroll),
                width: inner.width,
                height: bottom.min(view_end) - visible_top,
            };
            match piece {
                Piece::Text(text) => {
                    let paragraph = Paragraph::new(text.clone())
                        .wrap(Wrap { trim: false })
                        .scroll((visible_top - top, 0));
                    f.render_widget(paragraph, rect);
                }
                Piece::Chart(spec) => {
                    draw_chart_rows(f.buffer_mut(), spec, rect, visible_top - top, height)
                }
            }
        }
        top = bottom;
    }
}

/// Paints a chart at full `height` off-screen, then copies the rows from
/// `skip` onward into `rect`, so a partly scrolled chart is clipped.
fn draw_chart_rows(buf: &mut Buffer, spec: &ChartSpec, rect: Rect, skip: u16, height: u16) {
    let area = Rect::new(0, 0, rect.width, height);
    let mut scratch = Buffer::empty(area);
    draw_chart(&mut scratch, spec, area);
    for y in 0..rect.height {
        for x in 0..rect.width {
            buf[(rect.x + x, rect.y + y)] = scratch[(x, skip + y)].clone();
        }
    }
}
