use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::info;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use thiserror::Error;

use crate::config::{DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH};
use crate::core::ballistics::sample_analytic_trajectory;
use crate::core::model::MotionModel;
use crate::core::window::AxisWindow;
use crate::simulation::SimulationReport;

const ANALYTIC_SAMPLES: usize = 200;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("nothing to plot: trajectory has no samples")]
    EmptySeries,
    #[error("failed to create plot directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to draw plot: {0}")]
    Backend(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
    pub caption: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_PLOT_WIDTH,
            height: DEFAULT_PLOT_HEIGHT,
            caption: "Projectile trajectory".to_string(),
        }
    }
}

/// One labelled line on the chart.
#[derive(Clone, Debug)]
pub struct Curve {
    pub label: &'static str,
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
}

/// `plots/trajectory-YYYYmmdd-HHMMSS.png`
pub fn default_output_path(now: DateTime<Local>) -> PathBuf {
    PathBuf::from("plots").join(format!("trajectory-{}.png", now.format("%Y%m%d-%H%M%S")))
}

/// The integrated path, plus the closed-form frictionless path when drag is on.
pub fn report_curves(report: &SimulationReport) -> Vec<Curve> {
    let mut curves = vec![Curve {
        label: "RK4 trajectory",
        points: report.series.points().collect(),
        color: RGBColor(54, 123, 245),
    }];

    if let MotionModel::Drag(_) = report.model() {
        curves.push(Curve {
            label: "Analytic (no drag)",
            points: sample_analytic_trajectory(
                &report.params,
                report.flight.time_of_flight_s,
                ANALYTIC_SAMPLES,
            ),
            color: RGBColor(150, 150, 150),
        });
    }
    curves
}

/// Creates the directory a plot file will be written into, if it has one.
fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn backend_error<E>(err: DrawingAreaErrorKind<E>) -> PlotError
where
    E: std::error::Error + Send + Sync,
{
    PlotError::Backend(err.to_string())
}

fn draw_curves<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    curves: &[Curve],
    options: &PlotOptions,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let window = AxisWindow::fit(curves.iter().flat_map(|c| c.points.iter().copied()));

    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .caption(&options.caption, ("sans-serif", 24).into_font())
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(window.x.clone(), window.y.clone())?;

    chart
        .configure_mesh()
        .x_desc("Range (m)")
        .y_desc("Height (m)")
        .x_labels(10)
        .y_labels(8)
        .draw()?;

    for curve in curves {
        let style = ShapeStyle::from(&curve.color).stroke_width(2);
        chart
            .draw_series(LineSeries::new(curve.points.iter().copied(), style))?
            .label(curve.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Draws `curves` to `path`. `.svg` files use the SVG backend; anything else
/// is rendered as a bitmap.
pub fn render_curves(path: &Path, curves: &[Curve], options: &PlotOptions) -> Result<(), PlotError> {
    if curves.iter().all(|c| c.points.is_empty()) {
        return Err(PlotError::EmptySeries);
    }
    ensure_parent_dir(path)?;

    let size = (options.width, options.height);
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_curves(&root, curves, options).map_err(backend_error)?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw_curves(&root, curves, options).map_err(backend_error)?;
    }

    info!("wrote trajectory plot to {}", path.display());
    Ok(())
}

pub fn render_report(
    report: &SimulationReport,
    path: &Path,
    options: &PlotOptions,
) -> Result<(), PlotError> {
    render_curves(path, &report_curves(report), options)
}
