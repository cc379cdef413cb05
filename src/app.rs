use eframe::egui;

use crate::figure::Figure;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ChartApp {
    pub figure: Figure,
}

impl ChartApp {
    pub fn new(figure: Figure) -> Self {
        Self { figure }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status line ----
        if self.figure.has_status_line() {
            egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
                panels::top_bar(ui, &self.figure);
            });
        }

        // ---- Right side panel: legend ----
        if let Some(legend) = &self.figure.axes.legend {
            egui::SidePanel::right("legend_panel")
                .resizable(false)
                .show(ctx, |ui| {
                    panels::legend_panel(ui, legend);
                });
        }

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::figure_plot(ui, &self.figure.axes);
        });
    }
}

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// Open a native window for `figure` and block until it is closed.
pub fn show(figure: Figure) -> anyhow::Result<()> {
    let title = figure.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(figure.size)
            .with_title(&title),
        ..Default::default()
    };

    log::info!("Showing '{title}'");
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(ChartApp::new(figure)))),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}
