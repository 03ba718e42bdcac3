use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Radar,
    Line,
    Pie,
    Scatter,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Radar => write!(f, "radar"),
            ChartKind::Line => write!(f, "line"),
            ChartKind::Pie => write!(f, "pie"),
            ChartKind::Scatter => write!(f, "scatter"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Named continuous color scales used by value-colored charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScale {
    Blues,
    Greens,
    Viridis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Default,
    Scale(ColorScale),
    /// One `#RRGGBB` color per category.
    Discrete(Vec<String>),
    /// A single `#RRGGBB` color for the whole series.
    Single(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Axis {
    pub label: Option<String>,
    /// Inclusive `[min, max]`; values outside fail validation.
    pub bounds: Option<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    /// Marker sizes for scatter charts, parallel to `values`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<f64>>,
}

impl Series {
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<f64>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
            sizes: None,
        }
    }

    pub fn with_sizes<I, V>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<f64>,
    {
        self.sizes = Some(sizes.into_iter().map(Into::into).collect());
        self
    }
}

/// Declarative chart description handed to a chart renderer. The category
/// labels run along one axis (or around the radar/pie) and every series
/// supplies one value per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    #[serde(default)]
    pub category_axis: Axis,
    #[serde(default)]
    pub value_axis: Axis,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub palette: Palette,
}

impl ChartSpec {
    pub fn new<I, S>(kind: ChartKind, title: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            title: title.into(),
            categories: categories.into_iter().map(Into::into).collect(),
            series: Vec::new(),
            category_axis: Axis::default(),
            value_axis: Axis::default(),
            orientation: Orientation::default(),
            palette: Palette::default(),
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_category_label(mut self, label: impl Into<String>) -> Self {
        self.category_axis.label = Some(label.into());
        self
    }

    pub fn with_value_label(mut self, label: impl Into<String>) -> Self {
        self.value_axis.label = Some(label.into());
        self
    }

    pub fn with_value_bounds(mut self, min: f64, max: f64) -> Self {
        self.value_axis.bounds = Some([min, max]);
        self
    }

    pub fn horizontal(mut self) -> Self {
        self.orientation = Orientation::Horizontal;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Checks that the literal data is internally consistent.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(self.invalid("has no categories".to_string()));
        }
        if self.series.is_empty() {
            return Err(self.invalid("has no series".to_string()));
        }
        for series in &self.series {
            if series.values.len() != self.categories.len() {
                return Err(self.invalid(format!(
                    "series '{}' has {} values for {} categories",
                    series.name,
                    series.values.len(),
                    self.categories.len()
                )));
            }
            if let Some(ref sizes) = series.sizes
                && sizes.len() != series.values.len()
            {
                return Err(self.invalid(format!(
                    "series '{}' has {} sizes for {} values",
                    series.name,
                    sizes.len(),
                    series.values.len()
                )));
            }
            if let Some([min, max]) = self.value_axis.bounds
                && let Some(v) = series.values.iter().find(|v| **v < min || **v > max)
            {
                return Err(self.invalid(format!(
                    "value {} in series '{}' is outside [{}, {}]",
                    v, series.name, min, max
                )));
            }
        }
        if let Palette::Discrete(ref colors) = self.palette
            && colors.len() != self.categories.len()
        {
            return Err(self.invalid(format!(
                "palette has {} colors for {} categories",
                colors.len(),
                self.categories.len()
            )));
        }
        Ok(())
    }

    /// Largest value across all series, if any.
    pub fn max_value(&self) -> Option<f64> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .reduce(f64::max)
    }

    /// Smallest value across all series, if any.
    pub fn min_value(&self) -> Option<f64> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .reduce(f64::min)
    }

    fn invalid(&self, reason: String) -> FolioError {
        FolioError::InvalidValue(format!("{} chart '{}' {}", self.kind, self.title, reason))
    }
}
