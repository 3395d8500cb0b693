/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of torque-curves.
 *
 * torque-curves is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * torque-curves is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with torque-curves. If not, see <https://www.gnu.org/licenses/>.
 */

use std::ops::Range;
use std::path::{Path, PathBuf};
use itertools::{Itertools, MinMaxResult};
use plotters::chart::{ChartBuilder, LabelAreaPosition};
use plotters::drawing::{DrawingAreaErrorKind, IntoDrawingArea};
use plotters::element::PathElement;
use plotters::prelude::{BLACK, FontDesc, FontFamily, FontStyle, LineSeries, SVGBackend, WHITE};
use plotters::style::{Color, CYAN, Palette, Palette99, ShapeStyle, YELLOW};
use thiserror::Error;
use tracing::info;
use utils::filesystem::create_safe_filename_in_path;
use crate::calculator::CurveCalculator;
use crate::error::{Error, ErrorKind, Result};

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("failed to draw chart: {0}")]
    Drawing(String)
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for PlotError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Drawing(e.to_string())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Figure {
    TorqueAndHorsepower,
    WheelTorque
}

impl Figure {
    pub fn title(&self) -> &'static str {
        match self {
            Figure::TorqueAndHorsepower => "Torque and HP curves",
            Figure::WheelTorque => "Wheel Torque Curves per Gear"
        }
    }

    fn y_desc(&self) -> &'static str {
        match self {
            Figure::TorqueAndHorsepower => "Torque (Nm) / Horsepower",
            Figure::WheelTorque => "Wheel Torque (Nm)"
        }
    }

    fn filename_suffix(&self) -> &'static str {
        match self {
            Figure::TorqueAndHorsepower => "torque-hp",
            Figure::WheelTorque => "wheel-torque"
        }
    }
}

/// A labelled line on a chart
struct Series {
    label: String,
    points: Vec<(f64, f64)>,
    style: ShapeStyle
}

/// Y axis range covering all of `values` with some headroom above the
/// largest. Always includes 0
pub fn value_axis_range(values: impl IntoIterator<Item=f64>) -> Range<f64> {
    let (min, max) = match values.into_iter().minmax() {
        MinMaxResult::NoElements => (0.0, 0.0),
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(min, max) => (min, max)
    };
    let start = min.min(0.0);
    let mut end = max.max(0.0) * 1.1;
    if end <= start {
        end = start + 1.0;
    }
    start..end
}

fn rpm_axis_range(calculator: &CurveCalculator) -> Range<f64> {
    let curve = calculator.torque_curve();
    let start = crate::torque_curve::START_RPM as f64;
    let end = (curve.max_rpm() + crate::torque_curve::RPM_STEP) as f64;
    start..end
}

fn figure_series(calculator: &CurveCalculator, figure: Figure) -> Result<Vec<Series>> {
    let engine_series = calculator.compute_engine_series();
    let rpm: Vec<f64> = engine_series.rpm.iter().map(|r| *r as f64).collect();
    match figure {
        Figure::TorqueAndHorsepower => {
            let torque = calculator.torque_curve().values();
            Ok(vec![
                Series {
                    label: String::from("Torque (Nm)"),
                    points: rpm.iter().copied().zip(torque.iter().copied()).collect(),
                    style: YELLOW.stroke_width(2)
                },
                Series {
                    label: String::from("Horsepower"),
                    points: rpm.iter().copied().zip(engine_series.horsepower.iter().copied()).collect(),
                    style: CYAN.stroke_width(2)
                }
            ])
        }
        Figure::WheelTorque => {
            let wheel_torque = calculator.compute_wheel_torque_series()?;
            Ok(wheel_torque.into_iter().enumerate().map(|(idx, gear)| {
                Series {
                    label: format!("gear {}", idx + 1),
                    points: rpm.iter().copied().zip(gear.into_iter()).collect(),
                    style: Palette99::pick(idx).stroke_width(2)
                }
            }).collect())
        }
    }
}

fn draw_chart(path: &Path,
              dimensions: (u32, u32),
              figure: Figure,
              x_range: Range<f64>,
              series: Vec<Series>) -> std::result::Result<(), PlotError> {
    let y_range = value_axis_range(series.iter().flat_map(|s| s.points.iter().map(|(_, y)| *y)));
    let font_desc = FontDesc::new(FontFamily::Name("sans-serif"), 20.0, FontStyle::Normal);

    let background_colour = BLACK.mix(0.9);
    let root = SVGBackend::new(path, dimensions).into_drawing_area();
    root.fill(&background_colour)?;
    let mut context = ChartBuilder::on(&root)
        .margin(15)
        .caption(figure.title(), font_desc.color(&WHITE))
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .build_cartesian_2d(x_range, y_range)?;

    context
        .configure_mesh()
        .x_label_formatter(&as_usize)
        .x_desc("RPM")
        .y_desc(figure.y_desc())
        .label_style(&WHITE)
        .bold_line_style(&WHITE.mix(0.2))
        .light_line_style(&WHITE.mix(0.1))
        .draw()?;

    for s in series {
        let style = s.style;
        context
            .draw_series(LineSeries::new(s.points, style))?
            .label(s.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    context
        .configure_series_labels()
        .label_font(&WHITE)
        .background_style(&BLACK.mix(0.8))
        .border_style(&WHITE)
        .draw()?;

    root.present()?;
    Ok(())
}

fn as_usize(x: &f64) -> String {
    format!("{}", *x as usize)
}

fn export_path(figure: Figure, name: &str, output_dir: &Path) -> PathBuf {
    create_safe_filename_in_path(output_dir,
                                 &format!("{}-{}", name.trim(), figure.filename_suffix()),
                                 "svg")
}

/// Render `figure` for the current state of `calculator` into an SVG file in
/// `output_dir`.
///
/// - `name`: Base name chosen by the user. Sanitised and made unique within
///   `output_dir`
///
/// Returns the path of the written file
pub fn export_figure(calculator: &CurveCalculator,
                     figure: Figure,
                     name: &str,
                     output_dir: &Path,
                     dimensions: (u32, u32)) -> Result<PathBuf> {
    if name.trim().is_empty() {
        return Err(Error::new(ErrorKind::ArgumentError, String::from("An export name is required")));
    }
    let series = figure_series(calculator, figure)?;
    let path = export_path(figure, name, output_dir);
    draw_chart(&path, dimensions, figure, rpm_axis_range(calculator), series)?;
    info!("Exported '{}' to {}", figure.title(), path.display());
    Ok(path)
}

/// Export every figure available for `calculator`. The wheel torque figure is
/// skipped when there is no drivetrain data
pub fn export_all(calculator: &CurveCalculator,
                  name: &str,
                  output_dir: &Path,
                  dimensions: (u32, u32)) -> Result<Vec<PathBuf>> {
    let mut paths = vec![export_figure(calculator, Figure::TorqueAndHorsepower, name, output_dir, dimensions)?];
    if calculator.has_drivetrain() {
        paths.push(export_figure(calculator, Figure::WheelTorque, name, output_dir, dimensions)?);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use crate::calculator::CurveCalculator;
    use crate::drivetrain::DrivetrainConfig;
    use crate::error::ErrorKind;
    use crate::plot::{export_all, export_figure, export_path, figure_series, value_axis_range, Figure};
    use crate::torque_curve::TorqueCurve;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("torque-curves-plot-{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn calculator(with_drivetrain: bool) -> CurveCalculator {
        let drivetrain = match with_drivetrain {
            true => Some(DrivetrainConfig::new(vec![3.5, 2.1, 1.4], 4.0)),
            false => None
        };
        CurveCalculator::new(TorqueCurve::new(vec![150.0, 180.0, 200.0, 195.0]).unwrap(), drivetrain)
    }

    #[test]
    fn axis_range_tests() {
        let range = value_axis_range(vec![0.0, 50.0, 100.0]);
        assert_eq!(range.start, 0.0);
        assert!((range.end - 110.0).abs() < 1e-9);
        assert_eq!(value_axis_range(Vec::new()), 0.0..1.0);
        assert_eq!(value_axis_range(vec![0.0]), 0.0..1.0);
        let range = value_axis_range(vec![-20.0, 10.0]);
        assert_eq!(range.start, -20.0);
        assert!(range.end > 10.0);
    }

    #[test]
    fn series_per_figure() {
        let calc = calculator(true);
        let engine = figure_series(&calc, Figure::TorqueAndHorsepower).unwrap();
        assert_eq!(engine.len(), 2);
        assert_eq!(engine[0].label, "Torque (Nm)");
        assert_eq!(engine[0].points[0], (1000.0, 150.0));
        assert_eq!(engine[1].label, "Horsepower");
        let wheels = figure_series(&calc, Figure::WheelTorque).unwrap();
        let labels: Vec<&str> = wheels.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["gear 1", "gear 2", "gear 3"]);
        assert_eq!(wheels[0].points.len(), 4);
    }

    #[test]
    fn empty_name_rejected() {
        let dir = test_dir("empty-name");
        let err = export_figure(&calculator(true), Figure::TorqueAndHorsepower, "  ", &dir, (800, 600)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentError);
    }

    #[test]
    fn wheel_torque_figure_needs_drivetrain() {
        let dir = test_dir("no-drivetrain");
        let err = export_figure(&calculator(false), Figure::WheelTorque, "car", &dir, (800, 600)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigurationMissing);
    }

    #[test]
    fn export_paths() {
        let dir = test_dir("paths");
        assert_eq!(export_path(Figure::TorqueAndHorsepower, " my car ", &dir),
                   dir.join("my_car-torque-hp.svg"));
        fs::write(dir.join("my_car-wheel-torque.svg"), "").unwrap();
        assert_eq!(export_path(Figure::WheelTorque, "my car", &dir),
                   dir.join("my_car-wheel-torque2.svg"));
    }

    #[test]
    fn export_all_draws_both_charts() {
        let dir = test_dir("export-all");
        let paths = export_all(&calculator(true), "my car", &dir, (800, 600)).unwrap();
        assert_eq!(paths, vec![dir.join("my_car-torque-hp.svg"), dir.join("my_car-wheel-torque.svg")]);
        for path in &paths {
            assert!(path.is_file());
        }
        let engine_svg = fs::read_to_string(&paths[0]).unwrap();
        assert!(engine_svg.contains("<svg"));
        assert!(engine_svg.contains("Torque and HP curves"));
        assert!(engine_svg.contains("Horsepower"));
        let wheel_svg = fs::read_to_string(&paths[1]).unwrap();
        assert!(wheel_svg.contains("Wheel Torque Curves per Gear"));
        assert!(wheel_svg.contains("gear 1"));
        assert!(wheel_svg.contains("gear 3"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_single_zero_sample() {
        let dir = test_dir("export-zero");
        let calc = CurveCalculator::new(TorqueCurve::new(vec![0.0]).unwrap(), None);
        let paths = export_all(&calc, "flat", &dir, (640, 480)).unwrap();
        assert_eq!(paths, vec![dir.join("flat-torque-hp.svg")]);
        let svg = fs::read_to_string(&paths[0]).unwrap();
        assert!(svg.contains("Torque and HP curves"));
        let _ = fs::remove_dir_all(&dir);
    }
}
