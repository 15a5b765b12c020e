//! Time-vs-amount chart of a [`Comparison`], drawn with `plotters`.
//!
//! Charts are written as SVG so text rendering needs no system font stack.

use std::path::Path;

use log::info;
use plotters::prelude::*;

use crate::bench::Comparison;
use crate::error::{Error, Result};

/// Chart appearance.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
    pub greedy_color: RGBColor,
    pub dp_color: RGBColor,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Greedy vs Dynamic Programming Coin Change Performance".to_string(),
            x_label: "Amount".to_string(),
            y_label: "Time (µs)".to_string(),
            width: 1000,
            height: 600,
            greedy_color: GREEN,
            dp_color: RED,
        }
    }
}

fn plot_error<E: std::fmt::Display>(err: E) -> Error {
    Error::Plot(err.to_string())
}

fn micros(times: &[std::time::Duration]) -> Vec<f64> {
    times.iter().map(|t| t.as_secs_f64() * 1e6).collect()
}

/// Draws both timing series as lines and writes the chart to `path` as SVG.
///
/// # Errors
///
/// [`Error::Plot`] if `comparison` is empty or the file cannot be written.
pub fn plot_times<P: AsRef<Path>>(
    comparison: &Comparison,
    config: &PlotConfig,
    path: P,
) -> Result<()> {
    if comparison.is_empty() {
        return Err(Error::Plot("no timings to plot".to_string()));
    }

    let path = path.as_ref();
    let greedy = micros(&comparison.greedy_times);
    let dp = micros(&comparison.dp_times);

    let x_max = comparison.amounts.iter().copied().max().unwrap_or(1) as f64;
    let y_max = greedy.iter().chain(dp.iter()).copied().fold(0.0, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)
        .map_err(plot_error)?;

    // Mesh lines double as the grid
    chart
        .configure_mesh()
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .draw()
        .map_err(plot_error)?;

    let greedy_color = config.greedy_color;
    chart
        .draw_series(LineSeries::new(
            comparison.amounts.iter().map(|&a| a as f64).zip(greedy),
            greedy_color,
        ))
        .map_err(plot_error)?
        .label("Greedy Algorithm")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], greedy_color));

    let dp_color = config.dp_color;
    chart
        .draw_series(LineSeries::new(
            comparison.amounts.iter().map(|&a| a as f64).zip(dp),
            dp_color,
        ))
        .map_err(plot_error)?
        .label("Dynamic Programming")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], dp_color));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    info!("wrote timing chart to {}", path.display());
    Ok(())
}
