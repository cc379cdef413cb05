use std::path::Path;

use eframe::egui::Color32;

use crate::color::{generate_palette, SINGLE_SERIES_COLOR};
use crate::config;
use crate::data::loader::{load_samples, load_table};
use crate::data::model::{Samples, Table};
use crate::data::LoadError;

// ---------------------------------------------------------------------------
// Figure description
// ---------------------------------------------------------------------------

/// Everything needed to draw one chart, independent of rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Window title.
    pub title: String,
    /// Inner window size in logical pixels.
    pub size: [f32; 2],
    pub axes: Axes,
}

/// A single set of axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    pub series: Vec<Series>,
    /// Fixed visible y-range; `None` fits the data.
    pub y_limits: Option<(f64, f64)>,
    pub legend: Option<Legend>,
}

/// One drawn line. `points` are `[index, value]` pairs, `NaN` values included.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: Option<String>,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    /// Reference corner in axes-fraction coordinates; the box extends outward from it.
    pub anchor: (f64, f64),
    pub entries: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color32,
}

// Bitwise on points so a missing (`NaN`) sample equals itself.
impl PartialEq for Series {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.color == other.color
            && self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(a, b)| a[0].to_bits() == b[0].to_bits() && a[1].to_bits() == b[1].to_bits())
    }
}

impl Axes {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Fixed `(min, max)` view corners when the y-range is pinned.
    /// x spans the longest series' indices, at least `[0, 1]`.
    pub fn view_bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let (y_min, y_max) = self.y_limits?;
        let last_index = self
            .series
            .iter()
            .map(|s| s.points.len())
            .max()
            .unwrap_or(0)
            .saturating_sub(1)
            .max(1);
        Some(([0.0, y_min], [last_index as f64, y_max]))
    }
}

impl Figure {
    /// Pinned-range figures get the whole window so the plot keeps its aspect.
    pub fn has_status_line(&self) -> bool {
        self.axes.y_limits.is_none()
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

impl Figure {
    /// One line per column against the row index, legend at the top-right corner.
    pub fn multi_series(title: &str, table: &Table) -> Self {
        let palette = generate_palette(table.columns().len());
        let series: Vec<Series> = table
            .columns()
            .iter()
            .zip(palette)
            .map(|(column, color)| Series {
                label: Some(column.name.clone()),
                color,
                points: indexed(&column.values),
            })
            .collect();

        let entries = series
            .iter()
            .filter_map(|s| {
                Some(LegendEntry {
                    label: s.label.clone()?,
                    color: s.color,
                })
            })
            .collect();

        log::debug!(
            "Built multi-series figure: {} series x {} points",
            series.len(),
            table.row_count()
        );

        Figure {
            title: title.to_string(),
            size: config::DEFAULT_FIGURE_SIZE,
            axes: Axes {
                series,
                y_limits: None,
                legend: Some(Legend {
                    anchor: config::LEGEND_ANCHOR,
                    entries,
                }),
            },
        }
    }

    /// A single wide, short line with the y-range pinned to the waveform limits.
    pub fn waveform(title: &str, samples: &Samples) -> Self {
        log::debug!("Built waveform figure: {} samples", samples.len());

        Figure {
            title: title.to_string(),
            size: config::WAVEFORM_FIGURE_SIZE,
            axes: Axes {
                series: vec![Series {
                    label: None,
                    color: SINGLE_SERIES_COLOR,
                    points: indexed(samples.values()),
                }],
                y_limits: Some(config::WAVEFORM_Y_LIMITS),
                legend: None,
            },
        }
    }
}

fn indexed(values: &[f64]) -> Vec<[f64; 2]> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| [i as f64, v])
        .collect()
}

// ---------------------------------------------------------------------------
// File → Figure
// ---------------------------------------------------------------------------

/// Load a header CSV and build the multi-series figure. Fails before any figure exists.
pub fn open_multi_series(path: &Path) -> Result<Figure, LoadError> {
    let table = load_table(path)?;
    Ok(Figure::multi_series(&path.display().to_string(), &table))
}

/// Load a flat sample CSV and build the waveform figure.
pub fn open_waveform(path: &Path) -> Result<Figure, LoadError> {
    let samples = load_samples(path)?;
    Ok(Figure::waveform(&path.display().to_string(), &samples))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::data::loader::{read_samples, read_table};

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "capture-plot-{}-{name}",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn one_series_per_column_with_every_row() {
        let table = read_table("A,B,C\n1,2,3\n4,5,6\n7,8,9\n10,11,12\n".as_bytes()).unwrap();
        let figure = Figure::multi_series("bins", &table);

        assert_eq!(figure.axes.series.len(), 3);
        for series in &figure.axes.series {
            assert_eq!(series.points.len(), 4);
        }
        assert_eq!(figure.axes.series[2].points[1], [1.0, 6.0]);

        let legend = figure.axes.legend.as_ref().unwrap();
        let labels: Vec<&str> = legend.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert_eq!(figure.axes.y_limits, None);
    }

    #[test]
    fn legend_colours_match_series() {
        let table = read_table("A,B\n1,2\n".as_bytes()).unwrap();
        let figure = Figure::multi_series("bins", &table);
        let legend = figure.axes.legend.as_ref().unwrap();
        for (entry, series) in legend.entries.iter().zip(&figure.axes.series) {
            assert_eq!(entry.color, series.color);
        }
    }

    #[test]
    fn legend_anchor_is_top_right_for_any_series_count() {
        for width in 1..=6 {
            let header: Vec<String> = (0..width).map(|i| format!("c{i}")).collect();
            let row: Vec<String> = (0..width).map(|i| i.to_string()).collect();
            let csv = format!("{}\n{}\n", header.join(","), row.join(","));
            let figure = Figure::multi_series("bins", &read_table(csv.as_bytes()).unwrap());
            assert_eq!(figure.axes.legend.unwrap().anchor, (1.0, 1.0));
        }
    }

    #[test]
    fn waveform_has_single_series_and_fixed_limits() {
        let samples = read_samples("0.1,-0.5,5.0,0.25,-3.0".as_bytes()).unwrap();
        let figure = Figure::waveform("left", &samples);

        assert_eq!(figure.axes.series.len(), 1);
        assert_eq!(figure.axes.series[0].points.len(), 5);
        assert_eq!(figure.axes.series[0].points[2], [2.0, 5.0]);
        assert_eq!(figure.axes.y_limits, Some((-1.0, 1.0)));
        assert!(figure.axes.legend.is_none());
    }

    #[test]
    fn waveform_is_ten_to_one() {
        let samples = read_samples("0.0\n0.5\n".as_bytes()).unwrap();
        let [w, h] = Figure::waveform("left", &samples).size;
        assert_eq!(w / h, 10.0);
    }

    #[test]
    fn waveform_view_spans_all_samples() {
        let samples = read_samples("0.0\n0.5\n-0.5\n2.0\n".as_bytes()).unwrap();
        let figure = Figure::waveform("left", &samples);
        assert_eq!(figure.axes.view_bounds(), Some(([0.0, -1.0], [3.0, 1.0])));
    }

    #[test]
    fn single_sample_view_keeps_unit_width() {
        let samples = read_samples("0.25".as_bytes()).unwrap();
        let figure = Figure::waveform("left", &samples);
        assert_eq!(figure.axes.view_bounds(), Some(([0.0, -1.0], [1.0, 1.0])));
    }

    #[test]
    fn view_bounds_without_series() {
        let axes = Axes {
            series: Vec::new(),
            y_limits: Some((-1.0, 1.0)),
            legend: None,
        };
        assert_eq!(axes.view_bounds(), Some(([0.0, -1.0], [1.0, 1.0])));
    }

    #[test]
    fn unpinned_axes_fit_data() {
        let table = read_table("A\n1\n2\n".as_bytes()).unwrap();
        let figure = Figure::multi_series("bins", &table);
        assert_eq!(figure.axes.view_bounds(), None);
        assert!(figure.has_status_line());
    }

    #[test]
    fn waveform_window_has_no_status_line() {
        let samples = read_samples("0.0\n0.5\n".as_bytes()).unwrap();
        assert!(!Figure::waveform("left", &samples).has_status_line());
    }

    #[test]
    fn missing_file_fails_before_drawing() {
        let path = std::env::temp_dir().join("capture-plot-missing-input.csv");
        assert!(matches!(open_multi_series(&path), Err(LoadError::Io { .. })));
        assert!(matches!(open_waveform(&path), Err(LoadError::Io { .. })));
    }

    #[test]
    fn empty_file_fails_for_both_views() {
        let path = write_temp("empty.csv", "");
        assert!(matches!(open_multi_series(&path), Err(LoadError::Empty)));
        assert!(matches!(open_waveform(&path), Err(LoadError::Empty)));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn reopening_the_same_file_is_identical() {
        let bins = write_temp("bins.csv", "0,100,\n0.5,0.25,\n0.75,0.125,\n");
        assert_eq!(
            open_multi_series(&bins).unwrap(),
            open_multi_series(&bins).unwrap()
        );

        let left = write_temp("left.csv", "0.1\n0.2\n-0.3\n");
        assert_eq!(open_waveform(&left).unwrap(), open_waveform(&left).unwrap());

        std::fs::remove_file(bins).unwrap();
        std::fs::remove_file(left).unwrap();
    }

    #[test]
    fn reopening_with_missing_cells_is_identical() {
        let path = write_temp("gaps.csv", "A,B\n1,\n2,3\n");
        let first = open_multi_series(&path).unwrap();
        let second = open_multi_series(&path).unwrap();
        assert!(first.axes.series[1].points[0][1].is_nan());
        assert_eq!(first, second);

        let left = write_temp("gaps-left.csv", "0.1,,0.3\n");
        assert_eq!(open_waveform(&left).unwrap(), open_waveform(&left).unwrap());

        std::fs::remove_file(path).unwrap();
        std::fs::remove_file(left).unwrap();
    }
}
