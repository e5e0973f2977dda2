use crate::app::SketchApp;
use crate::choices::*;
use crate::plotter::{DetachedPort, Plotter, PlotterOptions};
use eframe::egui::ViewportBuilder;
use tracing::info;

mod app;
mod choices;
mod follow;
mod path;
mod plotter;
mod utils;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let paper = get_paper(
        PaperChoice::choice("Which paper is on the plotter bed?")
            .expect("Failed to get user input"),
    );
    let model = get_model(
        ModelChoice::choice("Which AxiDraw model is attached?")
            .expect("Failed to get user input"),
    );

    let options = PlotterOptions {
        model,
        ..PlotterOptions::default()
    };

    // Hardware drivers implement `PlotterPort`; the stock build ships a
    // detached port, so without one the canvas runs offline.
    let mut plotter = Plotter::new(Box::new(DetachedPort));
    info!("connect to axidraw...");
    plotter.connect(&options);

    let native_options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([720.0, 576.0])
            .with_min_inner_size([720.0, 576.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Axidraw by Hand",
        native_options,
        Box::new(move |_cc| Ok(Box::new(SketchApp::new(plotter, paper)))),
    )
    .map_err(|err| anyhow::anyhow!("window shell failed: {err}"))?;

    Ok(())
}
