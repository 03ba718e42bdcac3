use colored::{ColoredString, Colorize};

use crate::model::{ChartKind, ChartSpec};
use crate::render::{Block, RenderTree, Span, Tone};

const BAR_WIDTH: usize = 30;

/// Lines of a render tree as it is printed to the terminal.
pub fn tree_lines(tree: &RenderTree) -> Vec<String> {
    let mut lines = Vec::new();
    for block in &tree.blocks {
        block_lines(block, "", &mut lines);
    }
    lines
}

pub fn print_tree(tree: &RenderTree) {
    for line in tree_lines(tree) {
        println!("{}", line);
    }
}

fn tone(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Plain => text.normal(),
        Tone::Accent => text.cyan(),
        Tone::Muted => text.dimmed(),
        Tone::Info => text.blue(),
        Tone::Success => text.green(),
        Tone::Warning => text.yellow(),
        Tone::Danger => text.red(),
        Tone::Highlight => text.magenta(),
    }
}

fn spans(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|s| {
            if s.strong {
                s.text.bold().to_string()
            } else {
                s.text.clone()
            }
        })
        .collect()
}

fn block_lines(block: &Block, indent: &str, out: &mut Vec<String>) {
    match block {
        Block::Title { text, subtitle } => {
            out.push(format!("{}{}", indent, text.cyan().bold()));
            if let Some(sub) = subtitle {
                out.push(format!("{}{}", indent, sub.dimmed()));
            }
            out.push(String::new());
        }
        Block::Heading { text } => {
            out.push(format!("{}{}", indent, text.bold()));
        }
        Block::Paragraph { spans: s } => {
            out.push(format!("{}{}", indent, spans(s)));
            out.push(String::new());
        }
        Block::Bullets { items } => {
            for item in items {
                out.push(format!("{}  • {}", indent, spans(item)));
            }
            out.push(String::new());
        }
        Block::Badges { tone: t, labels } => {
            let badges: Vec<String> = labels
                .iter()
                .map(|l| tone(&format!("[{}]", l), *t).to_string())
                .collect();
            out.push(format!("{}{}", indent, badges.join(" ")));
            out.push(String::new());
        }
        Block::Metrics { cards } => {
            for card in cards {
                let icon = card.icon.as_deref().map(|i| format!("{} ", i)).unwrap_or_default();
                out.push(format!(
                    "{}{}{}: {}",
                    indent,
                    icon,
                    card.label.bold(),
                    card.value.cyan()
                ));
            }
            out.push(String::new());
        }
        Block::Card {
            tone: t,
            title,
            subtitle,
            fields,
            body,
        } => {
            out.push(format!("{}{}", indent, tone(title, *t).bold()));
            if let Some(sub) = subtitle {
                out.push(format!("{}  {}", indent, sub.italic()));
            }
            for field in fields {
                out.push(format!("{}  {}: {}", indent, field.label.dimmed(), field.value));
            }
            let nested = format!("{}  ", indent);
            for child in body {
                block_lines(child, &nested, out);
            }
            if body.is_empty() {
                out.push(String::new());
            }
        }
        Block::Table { headers, rows } => {
            out.push(format!("{}{}", indent, headers.join(" | ").bold()));
            for row in rows {
                out.push(format!("{}{}", indent, row.join(" | ")));
            }
            out.push(String::new());
        }
        Block::Chart { spec } => {
            chart_lines(spec, indent, out);
            out.push(String::new());
        }
        Block::Notice { tone: t, text } => {
            out.push(format!("{}{}", indent, tone(text, *t)));
        }
        Block::Actions { actions } => {
            for action in actions {
                out.push(format!("{}  [{}] {}", indent, action.key, action.label));
            }
            out.push(String::new());
        }
        Block::Form { form } => {
            out.push(format!(
                "{}{} {}",
                indent,
                "Fields:".dimmed(),
                form.fields.join(", ")
            ));
            out.push(format!(
                "{}{} {}",
                indent,
                "Subjects:".dimmed(),
                form.subjects.join(" / ")
            ));
            out.push(format!(
                "{}{}",
                indent,
                format!("Use `folio contact` to {}", form.submit_label.to_lowercase()).dimmed()
            ));
            out.push(String::new());
        }
        Block::Divider => out.push(format!("{}{}", indent, "─".repeat(40).dimmed())),
    }
}

/// Text rendition of a chart: bars for bar/radar, shares for pie, a table
/// for line/scatter.
pub fn chart_lines(spec: &ChartSpec, indent: &str, out: &mut Vec<String>) {
    out.push(format!(
        "{}{} {}",
        indent,
        spec.title.bold(),
        format!("({})", spec.kind).dimmed()
    ));
    let Some(series) = spec.series.first() else {
        return;
    };
    let width = spec.categories.iter().map(|c| c.chars().count()).max().unwrap_or(0);
    match spec.kind {
        ChartKind::Bar | ChartKind::Radar => {
            let max = spec
                .value_axis
                .bounds
                .map(|[_, hi]| hi)
                .or_else(|| spec.max_value())
                .unwrap_or(1.0)
                .max(f64::EPSILON);
            for (label, value) in spec.categories.iter().zip(&series.values) {
                let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
                out.push(format!(
                    "{}  {:<width$}  {} {}",
                    indent,
                    label,
                    "█".repeat(len).cyan(),
                    value
                ));
            }
        }
        ChartKind::Pie => {
            let total: f64 = series.values.iter().sum();
            for (label, value) in spec.categories.iter().zip(&series.values) {
                let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
                out.push(format!(
                    "{}  {:<width$}  {} ({:.1}%)",
                    indent, label, value, share
                ));
            }
        }
        ChartKind::Line | ChartKind::Scatter => {
            let value_label = spec.value_axis.label.as_deref().unwrap_or(&series.name);
            for (i, (label, value)) in spec.categories.iter().zip(&series.values).enumerate() {
                let size = series
                    .sizes
                    .as_ref()
                    .and_then(|s| s.get(i))
                    .map(|s| format!("  size {}", s))
                    .unwrap_or_default();
                out.push(format!(
                    "{}  {:<width$}  {} {}{}",
                    indent, label, value_label, value, size
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::FormStatus;
    use crate::model::{Section, Series};
    use crate::router::render;

    #[test]
    fn test_pie_shares() {
        let spec = ChartSpec::new(ChartKind::Pie, "Split", ["a", "b"])
            .with_series(Series::new("Count", [1u8, 3]));
        let mut out = Vec::new();
        chart_lines(&spec, "", &mut out);
        let text = out.join("\n");
        assert!(text.contains("25.0%"));
        assert!(text.contains("75.0%"));
    }

    #[test]
    fn test_skills_lines_contain_every_skill() {
        let lines = tree_lines(&render(Section::Skills, &FormStatus::Idle));
        let text = lines.join("\n");
        for skill in ["Python", "Power BI", "Machine Learning", "Scikit-Learn"] {
            assert!(text.contains(skill), "missing {skill}");
        }
    }

    #[test]
    fn test_scatter_lists_sizes() {
        let lines = tree_lines(&render(Section::Certifications, &FormStatus::Idle));
        assert!(lines.join("\n").contains("size 10"));
    }
}
