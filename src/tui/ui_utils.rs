use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    text::Text,
    widgets::{Paragraph, Wrap},
};

use super::theme::theme;
use crate::model::{ColorScale, Palette};

/// Rows `text` occupies once word-wrapped to `width` columns, counted
/// with the same wrapping and display widths the paragraph renders with.
pub fn wrapped_height(text: &Text, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let rows = Paragraph::new(text.clone())
        .wrap(Wrap { trim: false })
        .line_count(width);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Parses `#RRGGBB`, falling back to the theme accent.
pub fn hex_color(hex: &str) -> Color {
    hex.parse::<Color>().unwrap_or(theme().accent)
}

/// Color at position `t` in `[0, 1]` along a continuous scale.
pub fn scale_color(scale: ColorScale, t: f64) -> Color {
    let stops: &[(u8, u8, u8)] = match scale {
        ColorScale::Blues => &[(198, 219, 239), (107, 174, 214), (33, 113, 181), (8, 48, 107)],
        ColorScale::Greens => &[(199, 233, 192), (116, 196, 118), (35, 139, 69), (0, 68, 27)],
        ColorScale::Viridis => &[
            (68, 1, 84),
            (59, 82, 139),
            (33, 145, 140),
            (94, 201, 98),
            (253, 231, 37),
        ],
    };
    let t = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
    let lower = (t.floor() as usize).min(stops.len() - 2);
    let frac = t - lower as f64;
    let (a, b) = (stops[lower], stops[lower + 1]);
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
    Color::Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Color of category `index`; `t` is its normalized value for scales.
pub fn palette_color(palette: &Palette, index: usize, t: f64) -> Color {
    match palette {
        Palette::Default => theme().accent,
        Palette::Scale(scale) => scale_color(*scale, t),
        Palette::Discrete(colors) => colors
            .get(index)
            .map(|c| hex_color(c))
            .unwrap_or(theme().accent),
        Palette::Single(color) => hex_color(color),
    }
}

/// Position of `value` within `[min, max]`, `1.0` when the range is empty.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        (value - min) / (max - min)
    } else {
        1.0
    }
}

/// Calculate a centered rectangle within a parent rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Line;

    #[test]
    fn test_wrapped_height_counts_plain_lines() {
        let text = Text::from(vec![Line::from("abcdefghij"), Line::from("")]);
        assert_eq!(wrapped_height(&text, 4), 4);
        assert_eq!(wrapped_height(&text, 0), 0);
    }

    #[test]
    fn test_wrapped_height_breaks_on_words() {
        // Twelve columns of text, but no two words share a 6-column row
        let text = Text::from("aaa bbbb ccc");
        assert_eq!(wrapped_height(&text, 6), 3);
    }

    #[test]
    fn test_wrapped_height_counts_wide_glyphs() {
        // Six two-column glyphs fill twelve columns
        let text = Text::from("📅📅📅📅📅📅");
        assert_eq!(wrapped_height(&text, 6), 2);
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#1f77b4"), Color::Rgb(31, 119, 180));
        assert_eq!(hex_color("nope"), theme().accent);
    }

    #[test]
    fn test_scale_endpoints() {
        assert_eq!(scale_color(ColorScale::Blues, 0.0), Color::Rgb(198, 219, 239));
        assert_eq!(scale_color(ColorScale::Viridis, 1.0), Color::Rgb(253, 231, 37));
        assert_eq!(scale_color(ColorScale::Greens, 7.0), Color::Rgb(0, 68, 27));
    }

    #[test]
    fn test_palette_color() {
        let discrete = Palette::Discrete(vec!["#ff7f0e".to_string()]);
        assert_eq!(palette_color(&discrete, 0, 0.0), Color::Rgb(255, 127, 14));
        assert_eq!(palette_color(&discrete, 5, 0.0), theme().accent);
    }
}
