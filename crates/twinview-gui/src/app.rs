use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex, PoisonError};

use twinview_core::config::ViewerConfig;
use twinview_core::error::Result;
use twinview_core::io::decode::{ImageDecoder, RasterDecoder};
use twinview_core::io::source::PathSource;
use twinview_core::load::{LoadPipeline, RepaintHandle};
use twinview_core::notify::{notification_channel, spawn_relay};
use twinview_core::store::ImageStore;

use crate::messages::ViewerEvent;
use crate::panels;
use crate::states::UIState;
use crate::viewer::ViewerSurface;

/// The control panel (root viewport). Owns the load pipeline and the writing
/// side of the image store, and keeps the viewer viewport alive.
pub struct TwinviewApp {
    pub store: ImageStore,
    pub pipeline: LoadPipeline,
    pub ui_state: UIState,
    viewer: Arc<Mutex<ViewerSurface>>,
    viewer_id: egui::ViewportId,
    viewer_size: [f32; 2],
}

impl TwinviewApp {
    pub fn new(
        ctx: &egui::Context,
        config: ViewerConfig,
        initial: Option<PathBuf>,
    ) -> Result<Self> {
        let viewer_id = egui::ViewportId::from_hash_of("twinview-viewer");

        // Store -> relay thread -> viewer queue + viewer repaint.
        let (notifier, receiver) = notification_channel();
        let (event_tx, event_rx) = mpsc::channel();
        let relay_ctx = ctx.clone();
        spawn_relay(receiver, move |change| {
            let _ = event_tx.send(ViewerEvent::ImageChanged(change));
            relay_ctx.request_repaint_of(viewer_id);
        })?;

        let store = ImageStore::new(notifier);

        let waker_ctx = ctx.clone();
        let waker: Arc<dyn RepaintHandle> =
            Arc::new(move || waker_ctx.request_repaint_of(egui::ViewportId::ROOT));
        let decoder: Arc<dyn ImageDecoder> = Arc::new(RasterDecoder);
        let mut pipeline = LoadPipeline::new(
            decoder,
            config.loading.extensions.clone(),
            config.loading.failure_policy,
            waker,
        );

        let mut ui_state = UIState::default();
        if let Some(path) = initial {
            ui_state.add_log(format!("Opening {}", path.display()));
            pipeline.request_load(PathSource::new(path))?;
        }

        let viewer = ViewerSurface::new(store.clone(), event_rx, config.gesture);

        Ok(Self {
            store,
            pipeline,
            ui_state,
            viewer: Arc::new(Mutex::new(viewer)),
            viewer_id,
            viewer_size: config.windows.viewer_size,
        })
    }

    /// Drain finished loads into the store.
    fn poll_loads(&mut self) {
        for outcome in self.pipeline.consume_ready(&self.store) {
            self.ui_state.record(&outcome);
        }
    }

    fn show_viewer(&self, ctx: &egui::Context) {
        let viewer = Arc::clone(&self.viewer);
        ctx.show_viewport_deferred(
            self.viewer_id,
            egui::ViewportBuilder::default()
                .with_title("twinview")
                .with_inner_size(self.viewer_size)
                .with_min_inner_size([320.0, 240.0]),
            move |ctx, class| {
                viewer
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .show(ctx, class);
            },
        );
    }
}

impl eframe::App for TwinviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loads();

        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);

        self.show_viewer(ctx);
    }
}
