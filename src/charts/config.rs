//! Chart Configuration Module
//! Typed, renderer-independent description of a chart: the declarative
//! data-to-visual mapping handed to whatever renderer is injected.

use serde::{Deserialize, Serialize};

/// Packed RGB color.
pub type Rgb = (u8, u8, u8);

// Palette matching the dashboard theme.
pub const PAID_COLOR: Rgb = (40, 167, 69);
pub const UNPAID_COLOR: Rgb = (220, 53, 69);
pub const PRIMARY_COLOR: Rgb = (13, 110, 253);
pub const CLIENTS_COLOR: Rgb = (54, 162, 235);

/// Slice colors for doughnut charts, cycled per slice.
pub const SLICE_PALETTE: [Rgb; 4] = [PAID_COLOR, UNPAID_COLOR, PRIMARY_COLOR, CLIENTS_COLOR];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
}

/// A named series of numeric values plotted by a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub color: Rgb,
    pub fill: bool,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<f64>, color: Rgb) -> Self {
        Self {
            label: label.into(),
            data,
            color,
            fill: false,
        }
    }

    /// Fill the area under the series.
    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub title: Option<String>,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartConfig {
    /// Largest value across all datasets; 0 when there is no data.
    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|dataset| dataset.data.iter().copied())
            .fold(0.0_f64, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_value_spans_all_datasets() {
        let config = ChartConfig {
            kind: ChartKind::Line,
            title: None,
            labels: vec!["Jan".into(), "Feb".into()],
            datasets: vec![
                Dataset::new("a", vec![1.0, 5.0], PAID_COLOR),
                Dataset::new("b", vec![9.0, 2.0], UNPAID_COLOR),
            ],
        };
        assert_eq!(config.max_value(), 9.0);
    }

    #[test]
    fn max_value_defaults_to_zero_when_empty() {
        let config = ChartConfig {
            kind: ChartKind::Bar,
            title: None,
            labels: Vec::new(),
            datasets: Vec::new(),
        };
        assert_eq!(config.max_value(), 0.0);
    }

    #[test]
    fn chart_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ChartKind::Doughnut).unwrap(),
            "\"doughnut\""
        );
    }
}
