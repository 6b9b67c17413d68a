//! Whole-system scenario: load through the pipeline, react to the store
//! notification the way the viewer does, then navigate with gestures.

mod common;

use std::f32::consts::SQRT_2;

use approx::assert_relative_eq;

use common::{ms, pipeline, png_bytes, store_with_relay, RECV_TIMEOUT};
use twinview_core::config::GestureConfig;
use twinview_core::frame::ImageSize;
use twinview_core::gesture::{GestureInterpreter, Point, PointerEvent};
use twinview_core::io::source::MemorySource;
use twinview_core::load::{FailurePolicy, LoadOutcome};
use twinview_core::view::{compute_transform, Placement, ViewerState, ViewportSize};

struct Viewer {
    state: ViewerState,
    gestures: GestureInterpreter,
}

impl Viewer {
    fn new() -> Self {
        Self {
            state: ViewerState::default(),
            gestures: GestureInterpreter::new(GestureConfig::default()),
        }
    }

    fn frame(&mut self, events: &[PointerEvent]) {
        let intent = self.gestures.interpret(events);
        self.state.apply(&intent);
    }

    fn placement(&self, image: ImageSize, viewport: ViewportSize) -> Placement {
        compute_transform(
            image,
            viewport,
            self.state.zoom_to_fit,
            self.state.zoom_level,
            self.gestures.live_offset(&self.state),
        )
    }
}

#[test]
fn test_load_fit_double_click_scroll() {
    let (store, notifications) = store_with_relay();
    let mut loader = pipeline(FailurePolicy::ClearAndNotify);
    let mut viewer = Viewer::new();
    let viewport = ViewportSize::new(400.0, 300.0);

    loader
        .request_load(MemorySource::new(png_bytes(800, 600), "a.png"))
        .unwrap();
    assert!(matches!(loader.consume_next(&store), Some(LoadOutcome::Loaded { .. })));

    let change = notifications.recv_timeout(RECV_TIMEOUT).unwrap();
    assert!(change.loaded);
    viewer.state.reset();
    viewer.gestures.cancel_drag();

    let image = store.try_read_snapshot().unwrap().image.unwrap().size();

    // Fit mode.
    let p = viewer.placement(image, viewport);
    assert_relative_eq!(p.scale, 0.5);
    assert_relative_eq!(p.origin_x, 0.0);
    assert_relative_eq!(p.origin_y, 0.0);

    // Double-click: 100%, centered.
    viewer.frame(&[
        PointerEvent::press(200, 150, ms(1000)),
        PointerEvent::release(200, 150, ms(1040)),
        PointerEvent::press(200, 150, ms(1150)),
        PointerEvent::release(200, 150, ms(1190)),
    ]);
    assert!(!viewer.state.zoom_to_fit);
    assert_eq!(viewer.state.zoom_level, 0);
    let p = viewer.placement(image, viewport);
    assert_relative_eq!(p.scale, 1.0);
    assert_relative_eq!(p.origin_x, -200.0);
    assert_relative_eq!(p.origin_y, -150.0);

    // Scroll up once.
    viewer.frame(&[PointerEvent::scroll(-1, 200, 150, ms(2000))]);
    assert_eq!(viewer.state.zoom_level, 1);
    let p = viewer.placement(image, viewport);
    assert_relative_eq!(p.scale, SQRT_2, max_relative = 1e-3);
}

#[test]
fn test_live_drag_preview_then_commit() {
    let (store, _notifications) = store_with_relay();
    let mut loader = pipeline(FailurePolicy::ClearAndNotify);
    loader
        .request_load(MemorySource::new(png_bytes(100, 100), "sq.png"))
        .unwrap();
    loader.consume_next(&store).unwrap();
    let image = store.read_snapshot().image.unwrap().size();

    let viewport = ViewportSize::new(200.0, 200.0);
    let mut viewer = Viewer::new();
    viewer.state = ViewerState {
        zoom_to_fit: false,
        zoom_level: 0,
        pan_offset: Point::ZERO,
    };

    viewer.frame(&[PointerEvent::press(10, 10, ms(0)), PointerEvent::drag(30, 40, ms(16))]);
    let preview = viewer.placement(image, viewport);
    assert_relative_eq!(preview.origin_x, 50.0 + 20.0);
    assert_relative_eq!(preview.origin_y, 50.0 + 30.0);
    assert_eq!(viewer.state.pan_offset, Point::ZERO);

    viewer.frame(&[PointerEvent::release(30, 40, ms(32))]);
    let committed = viewer.placement(image, viewport);
    assert_eq!(preview, committed);
    assert_eq!(viewer.state.pan_offset, Point::new(20, 30));
}

#[test]
fn test_new_image_resets_view() {
    let (store, notifications) = store_with_relay();
    let mut loader = pipeline(FailurePolicy::ClearAndNotify);
    let mut viewer = Viewer::new();
    viewer.state = ViewerState {
        zoom_to_fit: false,
        zoom_level: 4,
        pan_offset: Point::new(-80, 12),
    };

    loader
        .request_load(MemorySource::new(png_bytes(5, 5), "b.png"))
        .unwrap();
    loader.consume_next(&store).unwrap();
    if notifications.recv_timeout(RECV_TIMEOUT).is_ok() {
        viewer.state.reset();
    }
    assert_eq!(viewer.state, ViewerState::default());
}
