use crate::app::TwinviewApp;
use crate::picker::DialogSource;

pub fn show(ctx: &egui::Context, app: &mut TwinviewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let busy = app.pipeline.in_flight() > 0;
        super::section_header(ui, "Image", busy.then_some("Loading..."));
        ui.add_space(4.0);

        // One picker at a time: the button stays disabled until the result is drained.
        if ui
            .add_enabled(!busy, egui::Button::new("Choose image..."))
            .clicked()
        {
            if let Err(e) = app.pipeline.request_load(DialogSource) {
                tracing::warn!("failed to start file picker: {e}");
                app.ui_state.add_log(format!("ERROR: failed to start file picker: {e}"));
            }
        }

        ui.add_space(4.0);
        match app.ui_state.current {
            Some((ref label, size)) => {
                ui.label(label);
                ui.small(format!("{size}"));
            }
            None => {
                ui.small("No image loaded");
            }
        }
    });
}
