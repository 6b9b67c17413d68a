use std::sync::mpsc;

use twinview_core::config::GestureConfig;
use twinview_core::store::{ImageStore, StoreSnapshot};

use crate::convert::image_to_color_image;
use crate::messages::ViewerEvent;
use crate::panels;
use crate::states::ViewportState;

/// The image window. Runs as a deferred egui viewport with its own repaint
/// cadence; talks to the rest of the app only through the store and the
/// relay's event queue.
pub struct ViewerSurface {
    store: ImageStore,
    events: mpsc::Receiver<ViewerEvent>,
    viewport: ViewportState,
}

impl ViewerSurface {
    pub fn new(
        store: ImageStore,
        events: mpsc::Receiver<ViewerEvent>,
        gesture: GestureConfig,
    ) -> Self {
        Self {
            store,
            events,
            viewport: ViewportState::new(gesture),
        }
    }

    /// One frame of the viewer window.
    pub fn show(&mut self, ctx: &egui::Context, class: egui::ViewportClass) {
        self.poll_events();
        self.refresh_texture(ctx);
        self.handle_keys(ctx);

        if class == egui::ViewportClass::Embedded {
            // Backend without multi-window support: show as a floating window.
            egui::Window::new("Viewer")
                .default_size([640.0, 480.0])
                .show(ctx, |ui| panels::viewport::show(ui, &mut self.viewport));
        } else {
            egui::CentralPanel::default()
                .show(ctx, |ui| panels::viewport::show(ui, &mut self.viewport));
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            tracing::info!("viewer window closed");
            ctx.send_viewport_cmd_to(egui::ViewportId::ROOT, egui::ViewportCommand::Close);
        }
    }

    /// Drain relay events. Every store change resets navigation.
    fn poll_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                ViewerEvent::ImageChanged(change) => {
                    tracing::debug!(generation = change.generation, "viewer notified");
                    self.viewport.reset_view();
                }
            }
        }
    }

    /// Rebuild the texture if the store moved on. Never waits for a writer:
    /// if the store is locked, keep painting the old texture this frame.
    fn refresh_texture(&mut self, ctx: &egui::Context) {
        let Some(snapshot) = self.store.try_read_snapshot() else {
            ctx.request_repaint();
            return;
        };
        if snapshot.generation == self.viewport.generation {
            return;
        }
        self.apply_snapshot(ctx, snapshot);
    }

    fn apply_snapshot(&mut self, ctx: &egui::Context, snapshot: StoreSnapshot) {
        self.viewport.generation = snapshot.generation;
        match snapshot.image {
            Some(image) if snapshot.loaded => {
                let texture = ctx.load_texture(
                    "viewer-image",
                    image_to_color_image(&image),
                    egui::TextureOptions::NEAREST,
                );
                self.viewport.texture = Some(texture);
                self.viewport.image_size = Some(image.size());
                self.viewport.viewing_label = image.label.clone();
            }
            _ => {
                self.viewport.texture = None;
                self.viewport.image_size = None;
                self.viewport.viewing_label.clear();
            }
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (fit, zoom_in, zoom_out) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::F),
                i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
                i.key_pressed(egui::Key::Minus),
            )
        });
        if fit {
            self.viewport.reset_view();
        }
        if zoom_in {
            self.viewport.view.step_zoom(1);
        }
        if zoom_out {
            self.viewport.view.step_zoom(-1);
        }
    }
}
