//! Chart painting: one ratatui widget per chart kind.

use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::{self, Marker},
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Widget,
        canvas::{Canvas, Line as CanvasLine, Points},
    },
};

use super::theme::theme;
use super::ui_utils::{normalize, palette_color};
use crate::model::{ChartKind, ChartSpec, Orientation};

const AXIS_LABEL_WIDTH: usize = 18;
const PIE_STEP: f64 = 0.02;

/// Rows a chart occupies in the content pane, borders included.
pub fn chart_height(spec: &ChartSpec) -> u16 {
    let n = spec.categories.len() as u16;
    match spec.kind {
        ChartKind::Bar => match spec.orientation {
            Orientation::Horizontal => n * 2 + 2,
            Orientation::Vertical => 14,
        },
        ChartKind::Radar | ChartKind::Pie => 18,
        ChartKind::Line | ChartKind::Scatter => n.max(4) * 2 + 4,
    }
}

/// Paints `spec` into `area` of `buf`. The area is expected to be
/// `chart_height(spec)` rows tall.
pub fn draw_chart(buf: &mut Buffer, spec: &ChartSpec, area: Rect) {
    let block = chart_block(spec);
    match spec.kind {
        ChartKind::Bar => draw_bar(buf, spec, block, area),
        ChartKind::Radar => draw_radar(buf, spec, block, area),
        ChartKind::Line => draw_xy(buf, spec, block, area, GraphType::Line),
        ChartKind::Pie => draw_pie(buf, spec, block, area),
        ChartKind::Scatter => draw_xy(buf, spec, block, area, GraphType::Scatter),
    }
}

fn chart_block(spec: &ChartSpec) -> Block<'static> {
    let t = theme();
    Block::default()
        .title(Span::styled(
            format!(" {} ", spec.title),
            Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_set(symbols::border::ROUNDED)
        .border_style(t.border_style(false))
}

fn value_range(spec: &ChartSpec) -> (f64, f64) {
    match spec.value_axis.bounds {
        Some([lo, hi]) => (lo, hi),
        None => (
            spec.min_value().unwrap_or(0.0).min(0.0),
            spec.max_value().unwrap_or(1.0),
        ),
    }
}

/// Canvas bounds that keep circles round on a braille grid of `inner`.
fn round_bounds(inner: Rect, radius: f64) -> ([f64; 2], [f64; 2]) {
    let width = inner.width.max(1) as f64 * 2.0;
    let height = inner.height.max(1) as f64 * 4.0;
    let ratio = width / height;
    ([-radius * ratio, radius * ratio], [-radius, radius])
}

fn truncate(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        label.to_string()
    } else {
        let head: String = label.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

fn draw_bar(buf: &mut Buffer, spec: &ChartSpec, block: Block<'static>, area: Rect) {
    let Some(series) = spec.series.first() else {
        return;
    };
    let (min, max) = value_range(spec);
    let t = theme();

    let bars: Vec<Bar> = spec
        .categories
        .iter()
        .zip(&series.values)
        .enumerate()
        .map(|(i, (label, value))| {
            let color = palette_color(&spec.palette, i, normalize(*value, min, max));
            Bar::default()
                .value(value.round().max(0.0) as u64)
                .label(Line::from(label.clone()))
                .text_value(format!("{}", value))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(t.text_highlight).bg(color))
        })
        .collect();

    let direction = match spec.orientation {
        Orientation::Horizontal => Direction::Horizontal,
        Orientation::Vertical => Direction::Vertical,
    };
    let chart = BarChart::default()
        .block(block)
        .direction(direction)
        .bar_width(if direction == Direction::Horizontal { 1 } else { 7 })
        .bar_gap(1)
        .max(max.round().max(1.0) as u64)
        .data(BarGroup::default().bars(&bars));
    chart.render(area, buf);
}

fn draw_radar(buf: &mut Buffer, spec: &ChartSpec, block: Block<'static>, area: Rect) {
    let Some(series) = spec.series.first() else {
        return;
    };
    let (_, max) = value_range(spec);
    let max = max.max(f64::EPSILON);
    let n = spec.categories.len();
    let t = theme();
    let color = palette_color(&spec.palette, 0, 1.0);
    let grid = t.text_muted;

    let corner = |i: usize, r: f64| {
        let angle = FRAC_PI_2 - TAU * i as f64 / n as f64;
        (r * angle.cos(), r * angle.sin())
    };
    let vertices: Vec<(f64, f64)> = series
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| corner(i, (v / max).clamp(0.0, 1.0)))
        .collect();
    let (x_bounds, y_bounds) = round_bounds(block.inner(area), 1.35);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for ring in [0.25, 0.5, 0.75, 1.0] {
                for i in 0..n {
                    let (x1, y1) = corner(i, ring);
                    let (x2, y2) = corner((i + 1) % n, ring);
                    ctx.draw(&CanvasLine { x1, y1, x2, y2, color: grid });
                }
            }
            for i in 0..n {
                let (x2, y2) = corner(i, 1.0);
                ctx.draw(&CanvasLine { x1: 0.0, y1: 0.0, x2, y2, color: grid });
            }
            ctx.layer();
            for (i, &(x1, y1)) in vertices.iter().enumerate() {
                let (x2, y2) = vertices[(i + 1) % vertices.len()];
                ctx.draw(&CanvasLine { x1, y1, x2, y2, color });
            }
            ctx.draw(&Points { coords: &vertices, color });
            for (i, label) in spec.categories.iter().enumerate() {
                let (x, y) = corner(i, 1.15);
                let x = if x < -0.1 { x - 0.1 * label.len() as f64 / 2.0 } else { x };
                ctx.print(x, y, Span::styled(label.clone(), Style::default().fg(t.text)));
            }
        });
    canvas.render(area, buf);
}

/// Line and scatter charts: x is the value, y the category position.
fn draw_xy(buf: &mut Buffer, spec: &ChartSpec, block: Block<'static>, area: Rect, graph: GraphType) {
    let Some(series) = spec.series.first() else {
        return;
    };
    let t = theme();
    let n = spec.categories.len();
    let (min, max) = (
        spec.min_value().unwrap_or(0.0).floor() - 1.0,
        spec.max_value().unwrap_or(1.0).ceil() + 1.0,
    );
    let points: Vec<(f64, f64)> = series
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| (*v, i as f64))
        .collect();

    let (size_min, size_max) = series
        .sizes
        .as_ref()
        .map(|s| {
            s.iter()
                .fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(*v), hi.max(*v)))
        })
        .unwrap_or((0.0, 0.0));

    let datasets: Vec<Dataset> = match graph {
        GraphType::Line => vec![
            Dataset::default()
                .name(series.name.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(palette_color(&spec.palette, 0, 1.0)))
                .data(&points),
        ],
        _ => points
            .chunks(1)
            .enumerate()
            .map(|(i, point)| {
                let size = series.sizes.as_ref().and_then(|s| s.get(i)).copied();
                let tint = size.map(|s| normalize(s, size_min, size_max)).unwrap_or(1.0);
                let marker = match size {
                    Some(s) if s >= size_max => Marker::Block,
                    Some(s) if s > size_min => Marker::HalfBlock,
                    _ => Marker::Dot,
                };
                Dataset::default()
                    .marker(marker)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(palette_color(&spec.palette, i, tint)))
                    .data(point)
            })
            .collect(),
    };

    let x_labels: Vec<String> = [min, (min + max) / 2.0, max]
        .iter()
        .map(|v| format!("{:.0}", v))
        .collect();
    let y_labels: Vec<String> = spec
        .categories
        .iter()
        .map(|c| truncate(c, AXIS_LABEL_WIDTH))
        .collect();
    let axis_style = Style::default().fg(t.text_muted);

    let chart = Chart::new(datasets)
        .block(block)
        .legend_position(None)
        .x_axis(
            Axis::default()
                .title(spec.value_axis.label.clone().unwrap_or_default())
                .style(axis_style)
                .bounds([min, max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(spec.category_axis.label.clone().unwrap_or_default())
                .style(axis_style)
                .bounds([0.0, n.saturating_sub(1).max(1) as f64])
                .labels(y_labels),
        );
    chart.render(area, buf);
}

fn draw_pie(buf: &mut Buffer, spec: &ChartSpec, block: Block<'static>, area: Rect) {
    let Some(series) = spec.series.first() else {
        return;
    };
    let t = theme();
    let total: f64 = series.values.iter().sum();

    let inner = block.inner(area);
    block.render(area, buf);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    // Cumulative upper bound of each sector, clockwise from twelve o'clock
    let mut acc = 0.0;
    let bounds: Vec<f64> = series
        .values
        .iter()
        .map(|v| {
            acc += if total > 0.0 { v / total } else { 0.0 };
            acc * TAU
        })
        .collect();

    let mut sectors: Vec<Vec<(f64, f64)>> = vec![Vec::new(); bounds.len()];
    let steps = (2.0 / PIE_STEP) as i32;
    for yi in 0..=steps {
        for xi in 0..=steps {
            let (x, y) = (-1.0 + xi as f64 * PIE_STEP, -1.0 + yi as f64 * PIE_STEP);
            if x * x + y * y > 1.0 {
                continue;
            }
            let angle = x.atan2(y).rem_euclid(TAU);
            if let Some(i) = bounds.iter().position(|b| angle <= *b) {
                sectors[i].push((x, y));
            }
        }
    }
    let colors: Vec<_> = (0..sectors.len())
        .map(|i| palette_color(&spec.palette, i, 1.0))
        .collect();

    let (x_bounds, y_bounds) = round_bounds(columns[0], 1.05);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for (coords, color) in sectors.iter().zip(&colors) {
                ctx.draw(&Points { coords, color: *color });
            }
        });
    canvas.render(columns[0], buf);

    let mut legend = vec![Line::from("")];
    for ((label, value), color) in spec.categories.iter().zip(&series.values).zip(&colors) {
        let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
        legend.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(*color)),
            Span::styled(label.clone(), Style::default().fg(t.text)),
            Span::styled(
                format!("  {} ({:.1}%)", value, share),
                Style::default().fg(t.text_muted),
            ),
        ]));
    }
    Paragraph::new(legend).render(columns[1], buf);
}
