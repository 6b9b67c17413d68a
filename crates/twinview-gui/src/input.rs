//! egui raw input → core pointer events.

use std::time::Duration;

use twinview_core::gesture::{Point, PointerEvent, PointerKind};

/// Translates a frame's raw egui events into content-local pointer events.
///
/// Presses and scrolls count only inside the content rect; moves and
/// releases are always forwarded so a drag that leaves the rect still ends.
#[derive(Debug, Default)]
pub struct InputTranslator {
    last_pos: Option<egui::Pos2>,
}

impl InputTranslator {
    pub fn translate(
        &mut self,
        events: &[egui::Event],
        content: egui::Rect,
        time: Duration,
    ) -> Vec<PointerEvent> {
        let mut out = Vec::new();

        for event in events {
            match event {
                egui::Event::PointerMoved(pos) => {
                    self.last_pos = Some(*pos);
                    out.push(pointer(PointerKind::Drag, *pos, content, time));
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    self.last_pos = Some(*pos);
                    if !*pressed {
                        out.push(pointer(PointerKind::Release, *pos, content, time));
                    } else if content.contains(*pos) {
                        out.push(pointer(PointerKind::Press, *pos, content, time));
                    }
                }
                egui::Event::MouseWheel { delta, .. } => {
                    let Some(pos) = self.last_pos.filter(|p| content.contains(*p)) else {
                        continue;
                    };
                    if let Some(delta_y) = wheel_step(delta.y) {
                        out.push(pointer(PointerKind::Scroll { delta_y }, pos, content, time));
                    }
                }
                egui::Event::PointerGone => {
                    self.last_pos = None;
                }
                _ => {}
            }
        }

        out
    }
}

/// One ladder step per wheel event. egui reports wheel-up as positive y,
/// the core expects wheel-up as negative.
fn wheel_step(dy: f32) -> Option<i32> {
    if dy > 0.0 {
        Some(-1)
    } else if dy < 0.0 {
        Some(1)
    } else {
        None
    }
}

fn pointer(
    kind: PointerKind,
    pos: egui::Pos2,
    content: egui::Rect,
    time: Duration,
) -> PointerEvent {
    PointerEvent {
        kind,
        pos: Point::new(
            (pos.x - content.min.x).round() as i32,
            (pos.y - content.min.y).round() as i32,
        ),
        time,
    }
}
