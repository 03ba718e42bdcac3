//! Small builders that turn literal content into blocks.
//!
//! Content strings may mark emphasis with `**double asterisks**`; [`rich`]
//! splits them into spans so painters never see markup.

use super::tree::{Block, Field, MetricCard, Span, Tone};
use crate::model::{ChartKind, ChartSpec, ColorScale, Highlight, Palette, Series, SkillEntry};

/// Splits `**strong**` markers into spans. An unterminated marker is kept
/// as literal text.
pub fn rich(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        if start > 0 {
            spans.push(Span::plain(&rest[..start]));
        }
        spans.push(Span::strong(&after[..end]));
        rest = &after[end + 2..];
    }
    if !rest.is_empty() {
        spans.push(Span::plain(rest));
    }
    spans
}

pub fn title(text: impl Into<String>) -> Block {
    Block::Title {
        text: text.into(),
        subtitle: None,
    }
}

pub fn title_with_subtitle(text: impl Into<String>, subtitle: impl Into<String>) -> Block {
    Block::Title {
        text: text.into(),
        subtitle: Some(subtitle.into()),
    }
}

pub fn heading(text: impl Into<String>) -> Block {
    Block::Heading { text: text.into() }
}

pub fn paragraph(text: &str) -> Block {
    Block::Paragraph { spans: rich(text) }
}

pub fn bullets(items: &[&str]) -> Block {
    Block::Bullets {
        items: items.iter().map(|item| rich(item)).collect(),
    }
}

pub fn badges(labels: &[&str]) -> Block {
    Block::Badges {
        tone: Tone::Accent,
        labels: labels.iter().map(|l| l.to_string()).collect(),
    }
}

pub fn highlights(items: &[Highlight]) -> Block {
    Block::Metrics {
        cards: items
            .iter()
            .map(|h| MetricCard {
                icon: Some(h.icon.to_string()),
                label: h.label.to_string(),
                value: h.value.to_string(),
            })
            .collect(),
    }
}

pub fn stats(items: &[(&str, u32)]) -> Block {
    Block::Metrics {
        cards: items
            .iter()
            .map(|(label, value)| MetricCard {
                icon: None,
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect(),
    }
}

pub fn table<const N: usize>(
    headers: [&str; N],
    rows: impl IntoIterator<Item = [String; N]>,
) -> Block {
    Block::Table {
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows: rows.into_iter().map(Vec::from).collect(),
    }
}

pub fn chart(spec: ChartSpec) -> Block {
    Block::Chart { spec }
}

/// Builder for [`Block::Card`].
#[derive(Debug, Clone)]
pub struct CardBuilder {
    tone: Tone,
    title: String,
    subtitle: Option<String>,
    fields: Vec<Field>,
    body: Vec<Block>,
}

pub fn card(tone: Tone, title: impl Into<String>) -> CardBuilder {
    CardBuilder {
        tone,
        title: title.into(),
        subtitle: None,
        fields: Vec::new(),
        body: Vec::new(),
    }
}

impl CardBuilder {
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(Field {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    pub fn child(mut self, block: Block) -> Self {
        self.body.push(block);
        self
    }

    pub fn build(self) -> Block {
        Block::Card {
            tone: self.tone,
            title: self.title,
            subtitle: self.subtitle,
            fields: self.fields,
            body: self.body,
        }
    }
}

/// Horizontal 0–100 bar chart over named scores.
pub fn score_bars(
    title: &str,
    value_label: &str,
    entries: &[SkillEntry],
    scale: ColorScale,
) -> ChartSpec {
    ChartSpec::new(ChartKind::Bar, title, entries.iter().map(|e| e.name))
        .with_series(Series::new(
            value_label,
            entries.iter().map(|e| e.proficiency.value()),
        ))
        .with_value_label(value_label)
        .with_value_bounds(0.0, 100.0)
        .horizontal()
        .with_palette(Palette::Scale(scale))
}

/// 0–100 radar chart over named scores.
pub fn score_radar(title: &str, series_name: &str, entries: &[SkillEntry]) -> ChartSpec {
    ChartSpec::new(ChartKind::Radar, title, entries.iter().map(|e| e.name))
        .with_series(Series::new(
            series_name,
            entries.iter().map(|e| e.proficiency.value()),
        ))
        .with_value_bounds(0.0, 100.0)
        .with_palette(Palette::Single("#1f77b4".to_string()))
}
