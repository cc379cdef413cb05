use eframe::egui::{self, RichText, ScrollArea, Sense, Ui};

use crate::figure::{Figure, Legend};

// ---------------------------------------------------------------------------
// Right side panel – legend
// ---------------------------------------------------------------------------

/// Render the legend, top-aligned, just outside the plot's top-right corner.
pub fn legend_panel(ui: &mut Ui, legend: &Legend) {
    ScrollArea::vertical()
        .auto_shrink([true, false])
        .show(ui, |ui: &mut Ui| {
            for entry in &legend.entries {
                ui.horizontal(|ui: &mut Ui| {
                    let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 3.0), Sense::hover());
                    ui.painter().rect_filled(rect, 0.0, entry.color);
                    ui.label(&entry.label);
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the status line: title, series and point counts.
pub fn top_bar(ui: &mut Ui, figure: &Figure) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(&figure.title).strong());
        ui.separator();
        ui.label(format!(
            "{} series, {} points",
            figure.axes.series.len(),
            figure.axes.point_count()
        ));
    });
}
