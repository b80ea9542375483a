//! Chart Renderer Module
//! The injected rendering capability, plus the concrete plotters-backed PNG
//! renderer shipped with the crate.

use crate::charts::config::{ChartConfig, ChartKind, SLICE_PALETTE};
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw chart: {0}")]
    Draw(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn draw_err(err: impl std::fmt::Display) -> RenderError {
    RenderError::Draw(err.to_string())
}

/// Rendering capability injected into the dashboard, decoupling chart
/// construction from any particular charting backend.
pub trait ChartRenderer {
    fn render(&mut self, config: &ChartConfig) -> Result<(), RenderError>;
}

/// Renders each chart configuration to a PNG file under an output directory.
pub struct PngRenderer {
    out_dir: PathBuf,
    width: u32,
    height: u32,
}

impl PngRenderer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self::with_size(out_dir, 800, 450)
    }

    pub fn with_size(out_dir: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            out_dir: out_dir.into(),
            width,
            height,
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    fn output_path(&self, config: &ChartConfig) -> PathBuf {
        let stem = config
            .title
            .as_deref()
            .map(slug)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                match config.kind {
                    ChartKind::Line => "line",
                    ChartKind::Doughnut => "doughnut",
                    ChartKind::Bar => "bar",
                }
                .to_string()
            });
        self.out_dir.join(format!("{stem}.png"))
    }

    fn draw_line<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        config: &ChartConfig,
    ) -> Result<(), RenderError> {
        let labels = &config.labels;
        let x_max = labels.len().saturating_sub(1).max(1);
        let y_max = (config.max_value() * 1.1).max(1.0);

        let mut builder = ChartBuilder::on(root);
        builder
            .margin(12)
            .x_label_area_size(28)
            .y_label_area_size(52);
        if let Some(title) = &config.title {
            builder.caption(title, ("sans-serif", 22));
        }
        let mut chart = builder
            .build_cartesian_2d(0..x_max, 0.0..y_max)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len().max(2))
            .x_label_formatter(&|idx| labels.get(*idx).cloned().unwrap_or_default())
            .y_label_formatter(&|v| format!("{v:.0}"))
            .draw()
            .map_err(draw_err)?;

        for dataset in &config.datasets {
            let color = RGBColor(dataset.color.0, dataset.color.1, dataset.color.2);
            let points: Vec<(usize, f64)> = dataset.data.iter().copied().enumerate().collect();

            if dataset.fill {
                chart
                    .draw_series(
                        AreaSeries::new(points.iter().copied(), 0.0, color.mix(0.3))
                            .border_style(color.stroke_width(2)),
                    )
                    .map_err(draw_err)?
                    .label(dataset.label.as_str())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
                    });
            } else {
                chart
                    .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
                    .map_err(draw_err)?
                    .label(dataset.label.as_str())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
                    });
            }

            chart
                .draw_series(
                    points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
                )
                .map_err(draw_err)?;
        }

        if !config.datasets.is_empty() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK.mix(0.3))
                .draw()
                .map_err(draw_err)?;
        }
        Ok(())
    }

    fn draw_bar<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        config: &ChartConfig,
    ) -> Result<(), RenderError> {
        let labels = &config.labels;
        let n = labels.len().max(1);
        let y_max = (config.max_value() * 1.1).max(1.0);

        let mut builder = ChartBuilder::on(root);
        builder
            .margin(12)
            .x_label_area_size(28)
            .y_label_area_size(52);
        if let Some(title) = &config.title {
            builder.caption(title, ("sans-serif", 22));
        }
        let mut chart = builder
            .build_cartesian_2d((0..n).into_segmented(), 0.0..y_max)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&|seg| match seg {
                SegmentValue::CenterOf(idx) | SegmentValue::Exact(idx) => {
                    labels.get(*idx).cloned().unwrap_or_default()
                }
                SegmentValue::Last => String::new(),
            })
            .y_label_formatter(&|v| format!("{v:.0}"))
            .draw()
            .map_err(draw_err)?;

        if let Some(dataset) = config.datasets.first() {
            let color = RGBColor(dataset.color.0, dataset.color.1, dataset.color.2);
            chart
                .draw_series(
                    Histogram::vertical(&chart)
                        .style(color.mix(0.85).filled())
                        .margin(8)
                        .data(dataset.data.iter().copied().enumerate()),
                )
                .map_err(draw_err)?;
        }
        Ok(())
    }

    fn draw_doughnut<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        config: &ChartConfig,
    ) -> Result<(), RenderError> {
        let root = match &config.title {
            Some(title) => root
                .titled(title, ("sans-serif", 22))
                .map_err(draw_err)?,
            None => root.clone(),
        };

        let sizes: Vec<f64> = config
            .datasets
            .first()
            .map(|dataset| dataset.data.clone())
            .unwrap_or_default();
        // An all-zero or empty breakdown renders an empty frame, not an error.
        if sizes.is_empty() || sizes.iter().sum::<f64>() <= 0.0 {
            return Ok(());
        }

        let (w, h) = root.dim_in_pixel();
        let center = (w as i32 / 2, h as i32 / 2);
        let radius = f64::from(w.min(h)) * 0.35;
        let colors: Vec<RGBColor> = (0..sizes.len())
            .map(|i| {
                let (r, g, b) = SLICE_PALETTE[i % SLICE_PALETTE.len()];
                RGBColor(r, g, b)
            })
            .collect();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &config.labels);
        pie.donut_hole(radius * 0.55);
        pie.label_style(("sans-serif", 16).into_font());
        root.draw(&pie).map_err(draw_err)?;
        Ok(())
    }
}

impl ChartRenderer for PngRenderer {
    fn render(&mut self, config: &ChartConfig) -> Result<(), RenderError> {
        std::fs::create_dir_all(&self.out_dir)?;
        let path = self.output_path(config);

        let root = BitMapBackend::new(&path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;
        match config.kind {
            ChartKind::Line => Self::draw_line(&root, config)?,
            ChartKind::Bar => Self::draw_bar(&root, config)?,
            ChartKind::Doughnut => Self::draw_doughnut(&root, config)?,
        }
        root.present().map_err(draw_err)?;

        tracing::info!(path = %path.display(), "chart rendered");
        Ok(())
    }
}

/// Lowercase alphanumeric file stem from a chart title.
fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}

/// Test double that records every rendered configuration.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingRenderer {
    pub rendered: Vec<ChartConfig>,
}

#[cfg(test)]
impl ChartRenderer for RecordingRenderer {
    fn render(&mut self, config: &ChartConfig) -> Result<(), RenderError> {
        self.rendered.push(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::config::{Dataset, PAID_COLOR};

    fn line_config(title: Option<&str>) -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Line,
            title: title.map(str::to_string),
            labels: vec!["Jan".into(), "Feb".into()],
            datasets: vec![Dataset::new("Revenue", vec![100.0, 200.0], PAID_COLOR).filled()],
        }
    }

    #[test]
    fn slug_flattens_titles() {
        assert_eq!(slug("Monthly Revenue (Paid vs Unpaid)"), "monthly_revenue_paid_vs_unpaid");
        assert_eq!(slug("Top Clients"), "top_clients");
        assert_eq!(slug("!!!"), "");
    }

    #[test]
    fn output_path_falls_back_to_chart_kind() {
        let renderer = PngRenderer::new("out");
        let untitled = line_config(None);
        assert_eq!(renderer.output_path(&untitled), PathBuf::from("out/line.png"));

        let titled = line_config(Some("Monthly Revenue"));
        assert_eq!(
            renderer.output_path(&titled),
            PathBuf::from("out/monthly_revenue.png")
        );
    }

    #[test]
    #[ignore = "draws text; requires a system font"]
    fn renders_line_chart_png() {
        let dir = tempfile::tempdir().unwrap();
        let mut renderer = PngRenderer::new(dir.path());
        renderer.render(&line_config(Some("Monthly Revenue"))).unwrap();
        assert!(dir.path().join("monthly_revenue.png").exists());
    }

    #[test]
    fn recording_renderer_captures_configs() {
        let mut renderer = RecordingRenderer::default();
        renderer.render(&line_config(None)).unwrap();
        assert_eq!(renderer.rendered.len(), 1);
        assert_eq!(renderer.rendered[0].kind, ChartKind::Line);
    }
}
