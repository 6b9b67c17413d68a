//! Pointer gesture interpretation.
//!
//! A viewer surface feeds every frame's pointer events, in arrival order, to
//! [`GestureInterpreter::interpret`]. The interpreter keeps the drag session,
//! the last press time (double-click detection) and the last accepted scroll
//! time (duplicate wheel suppression) across frames, and returns one
//! [`NavigationIntent`] per frame for the surface to apply to its
//! [`ViewerState`](crate::view::ViewerState).
//!
//! ```text
//!            press                  drag (update current)
//!   Idle ─────────────▶ Dragging ◀──────────┐
//!    ▲                     │  └─────────────┘
//!    └──── release ────────┘   (commit current - anchor)
//!
//!   scroll: any state, dropped if < debounce after the last accepted one
//! ```

use std::time::Duration;

use crate::config::GestureConfig;
use crate::view::ViewerState;

/// Integer position in content-local pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset_by(self, other: Point) -> Point {
        Point::new(
            self.x.saturating_add(other.x),
            self.y.saturating_add(other.y),
        )
    }

    pub fn delta_from(self, origin: Point) -> Point {
        Point::new(
            self.x.saturating_sub(origin.x),
            self.y.saturating_sub(origin.y),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Press,
    Release,
    Drag,
    /// Vertical wheel delta; negative is "up" (away from the user).
    Scroll { delta_y: i32 },
}

/// One raw pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub pos: Point,
    /// Monotonic timestamp; only differences between events matter.
    pub time: Duration,
}

impl PointerEvent {
    pub fn press(x: i32, y: i32, time: Duration) -> Self {
        Self {
            kind: PointerKind::Press,
            pos: Point::new(x, y),
            time,
        }
    }

    pub fn release(x: i32, y: i32, time: Duration) -> Self {
        Self {
            kind: PointerKind::Release,
            pos: Point::new(x, y),
            time,
        }
    }

    pub fn drag(x: i32, y: i32, time: Duration) -> Self {
        Self {
            kind: PointerKind::Drag,
            pos: Point::new(x, y),
            time,
        }
    }

    pub fn scroll(delta_y: i32, x: i32, y: i32, time: Duration) -> Self {
        Self {
            kind: PointerKind::Scroll { delta_y },
            pos: Point::new(x, y),
            time,
        }
    }
}

/// In-progress drag. Exists only between a press and its release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragSession {
    pub anchor: Point,
    pub current: Point,
    pub active: bool,
}

impl DragSession {
    /// Uncommitted pan delta.
    pub fn delta(&self) -> Point {
        if self.active {
            self.current.delta_from(self.anchor)
        } else {
            Point::ZERO
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ClickHistory {
    pub last_press: Option<Duration>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollThrottleState {
    pub last_scroll: Option<Duration>,
}

/// What one frame of pointer input asks the viewer to do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationIntent {
    /// Sum of pans committed by releases in this frame.
    pub pan_delta: Point,
    /// Sum of accepted zoom steps (positive zooms in).
    pub zoom_delta: i32,
    /// A double-click happened in this frame.
    pub toggle_fit: bool,
}

impl NavigationIntent {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Default)]
pub struct GestureInterpreter {
    config: GestureConfig,
    drag: DragSession,
    clicks: ClickHistory,
    scroll: ScrollThrottleState,
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    /// Consume one frame of events, in order.
    pub fn interpret(&mut self, events: &[PointerEvent]) -> NavigationIntent {
        let mut intent = NavigationIntent::default();

        for event in events {
            match event.kind {
                PointerKind::Press => {
                    if self.is_double_click(event.time) {
                        intent.toggle_fit = true;
                    }
                    self.clicks.last_press = Some(event.time);
                    // A press without a release in between abandons the old session.
                    self.drag = DragSession {
                        anchor: event.pos,
                        current: event.pos,
                        active: true,
                    };
                }
                PointerKind::Drag => {
                    if self.drag.active {
                        self.drag.current = event.pos;
                    }
                }
                PointerKind::Release => {
                    if self.drag.active {
                        self.drag.current = event.pos;
                        intent.pan_delta = intent.pan_delta.offset_by(self.drag.delta());
                        self.drag = DragSession::default();
                    }
                }
                PointerKind::Scroll { delta_y } => {
                    if delta_y == 0 {
                        continue;
                    }
                    if self.is_duplicate_scroll(event.time) {
                        tracing::trace!(time = ?event.time, "duplicate scroll dropped");
                        continue;
                    }
                    self.scroll.last_scroll = Some(event.time);
                    intent.zoom_delta = intent.zoom_delta.saturating_sub(delta_y);
                }
            }
        }

        if !intent.is_empty() {
            tracing::debug!(?intent, "gesture intent");
        }
        intent
    }

    /// Committed pan plus the uncommitted drag delta. Zero in fit mode.
    pub fn live_offset(&self, state: &ViewerState) -> Point {
        if state.zoom_to_fit {
            return Point::ZERO;
        }
        state.pan_offset.offset_by(self.drag.delta())
    }

    /// Forget any drag in progress (new image loaded).
    pub fn cancel_drag(&mut self) {
        self.drag = DragSession::default();
    }

    fn is_double_click(&self, time: Duration) -> bool {
        self.clicks
            .last_press
            .and_then(|last| time.checked_sub(last))
            .is_some_and(|gap| gap < self.config.double_click())
    }

    fn is_duplicate_scroll(&self, time: Duration) -> bool {
        self.scroll
            .last_scroll
            .and_then(|last| time.checked_sub(last))
            .is_some_and(|gap| gap < self.config.scroll_debounce())
    }
}
