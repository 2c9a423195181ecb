use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use log::{info, warn};
use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::{Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::color::series_palette;
use crate::data::filter::filtered_indices;
use crate::data::model::{BenchmarkDataset, Factor};
use crate::speedup::{speedup_points, Variant};

/// Rasterized output size in pixels, shared by all passes.
pub const FIGURE_SIZE: (u32, u32) = (1280, 960);

const Y_AXIS_LABEL: &str = "Speedup over std::sort";

// ---------------------------------------------------------------------------
// Chart parameterization
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    Logarithmic,
}

/// Everything that distinguishes one rendering pass from another. The three
/// charts of a run are the same draw logic fed three of these.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub title: String,
    /// One series pair per distinct value of this factor; `None` draws a
    /// single pair over all (filtered) rows.
    pub group_by: Option<Factor>,
    /// Factor plotted along the x-axis.
    pub x_axis: Factor,
    pub x_scale: AxisScale,
    /// Optional pre-filter: keep only rows where the factor has this value.
    pub filter: Option<(Factor, u64)>,
    pub output: PathBuf,
}

/// One labelled line of the chart: `(x, speedup)` points sorted by x.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedupSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

// ---------------------------------------------------------------------------
// Series building (pure, data-level)
// ---------------------------------------------------------------------------

/// Derive the full set of speedup series for one chart. Kept separate from
/// drawing so tests can assert on the data level rather than on pixels.
///
/// Non-finite ratios (from zero timings) are retained here; only the draw
/// stage skips them.
pub fn build_series(dataset: &BenchmarkDataset, spec: &ChartSpec) -> Vec<SpeedupSeries> {
    let indices: Vec<usize> = match spec.filter {
        Some((factor, value)) => filtered_indices(dataset, factor, value),
        None => (0..dataset.rows.len()).collect(),
    };

    if spec.filter.is_some() && indices.is_empty() {
        warn!(
            "no rows match the filter for '{}'; the chart will be empty",
            spec.title
        );
    }

    let mut series = Vec::new();
    match spec.group_by {
        Some(factor) => {
            // BTreeMap keeps group order ascending, so legend order is stable.
            let mut groups: BTreeMap<u64, Vec<usize>> = BTreeMap::new();
            for &i in &indices {
                groups
                    .entry(factor.value_of(&dataset.rows[i]))
                    .or_default()
                    .push(i);
            }
            for (value, members) in &groups {
                for variant in Variant::ALL {
                    series.push(SpeedupSeries {
                        label: format!("{} {} {}", variant.label(), factor.short_label(), value),
                        points: speedup_points(
                            members.iter().map(|&i| &dataset.rows[i]),
                            spec.x_axis,
                            variant,
                        ),
                    });
                }
            }
        }
        None => {
            // Single implicit group; label carries the filter context.
            let context = spec
                .filter
                .map(|(factor, value)| format!(" {} {}", factor.short_label(), value))
                .unwrap_or_default();
            for variant in Variant::ALL {
                series.push(SpeedupSeries {
                    label: format!("{}{}", variant.label(), context),
                    points: speedup_points(
                        indices.iter().map(|&i| &dataset.rows[i]),
                        spec.x_axis,
                        variant,
                    ),
                });
            }
        }
    }
    series
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render one chart pass to its PNG file, overwriting any existing file.
pub fn render(dataset: &BenchmarkDataset, spec: &ChartSpec) -> Result<()> {
    let series = build_series(dataset, spec);

    // Degenerate ratios are data, not errors, but they cannot be drawn.
    let mut dropped = 0usize;
    let drawable: Vec<SpeedupSeries> = series
        .into_iter()
        .map(|s| {
            let points: Vec<(f64, f64)> = s
                .points
                .iter()
                .copied()
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .collect();
            dropped += s.points.len() - points.len();
            SpeedupSeries {
                label: s.label,
                points,
            }
        })
        .collect();
    if dropped > 0 {
        warn!(
            "skipped {dropped} non-finite speedup point(s) in '{}'",
            spec.title
        );
    }

    let (x_range, y_max) = axis_bounds(&drawable, spec.x_scale);

    let root = BitMapBackend::new(&spec.output, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(&root);
    builder
        .caption(&spec.title, ("sans-serif", 34))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(70);

    match spec.x_scale {
        AxisScale::Linear => {
            let mut chart = builder.build_cartesian_2d(x_range, 0f64..y_max)?;
            draw_speedup_lines(&mut chart, spec, &drawable)?;
        }
        AxisScale::Logarithmic => {
            let mut chart = builder.build_cartesian_2d(x_range.log_scale(), 0f64..y_max)?;
            draw_speedup_lines(&mut chart, spec, &drawable)?;
        }
    }

    root.present()?;
    info!("wrote {}", spec.output.display());
    Ok(())
}

/// Axis bounds over the finite points, with fallbacks so an empty chart
/// still builds (log-scale x must stay positive).
fn axis_bounds(series: &[SpeedupSeries], x_scale: AxisScale) -> (std::ops::Range<f64>, f64) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_max = 0f64;
    for s in series {
        for &(x, y) in &s.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_max = y_max.max(y);
        }
    }

    if !x_min.is_finite() || !x_max.is_finite() {
        x_min = 1.0;
        x_max = 10.0;
    }
    if x_scale == AxisScale::Logarithmic && x_min <= 0.0 {
        x_min = 1.0;
        x_max = x_max.max(10.0);
    }
    if x_min == x_max {
        // Single x value; widen so the coordinate range is non-degenerate.
        match x_scale {
            AxisScale::Linear => {
                x_min -= 1.0;
                x_max += 1.0;
            }
            AxisScale::Logarithmic => {
                x_min *= 0.5;
                x_max *= 2.0;
            }
        }
    }
    if y_max <= 0.0 {
        y_max = 1.0;
    }

    (x_min..x_max, y_max * 1.05)
}

/// Mesh, line series, and legend for one chart. Generic over the x coord
/// spec so the linear and logarithmic passes share the draw logic.
fn draw_speedup_lines<'a, X>(
    chart: &mut ChartContext<'a, BitMapBackend<'a>, Cartesian2d<X, RangedCoordf64>>,
    spec: &ChartSpec,
    series: &[SpeedupSeries],
) -> Result<()>
where
    X: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    chart
        .configure_mesh()
        .x_desc(spec.x_axis.axis_label())
        .y_desc(Y_AXIS_LABEL)
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 24))
        .draw()?;

    let colors = series_palette(series.len());
    for (s, color) in series.iter().zip(colors) {
        if s.points.is_empty() {
            continue;
        }
        chart
            .draw_series(LineSeries::new(s.points.clone(), color.stroke_width(2)))?
            .label(&s.label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 18))
        .draw()?;

    Ok(())
}
