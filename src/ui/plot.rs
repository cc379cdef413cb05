use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotBounds, PlotPoints};

use crate::figure::Axes;

// ---------------------------------------------------------------------------
// Figure plot (central panel)
// ---------------------------------------------------------------------------

/// Render the axes of a figure. The view is fixed: no zoom, drag or scroll.
pub fn figure_plot(ui: &mut Ui, axes: &Axes) {
    Plot::new("figure_plot")
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            if let Some((min, max)) = axes.view_bounds() {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));
            }

            for series in &axes.series {
                // Missing cells are not drawn.
                let points: PlotPoints = series
                    .points
                    .iter()
                    .filter(|p| p[1].is_finite())
                    .copied()
                    .collect();

                let mut line = Line::new(points).color(series.color).width(1.5);
                if let Some(label) = &series.label {
                    line = line.name(label);
                }
                plot_ui.line(line);
            }
        });
}
