use std::time::Duration;

use twinview_core::view::{compute_transform, Placement, ViewportSize};

use crate::states::ViewportState;

/// Paint the viewer content and feed this frame's pointer input through the
/// gesture interpreter.
pub fn show(ui: &mut egui::Ui, vp: &mut ViewportState) {
    let rect = ui.available_rect_before_wrap();
    paint_background(ui, rect);
    let _response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

    handle_pointer(ui, vp, rect);

    let (Some(texture), Some(image_size)) = (vp.texture.as_ref(), vp.image_size) else {
        show_placeholder(ui);
        return;
    };

    let placement = compute_transform(
        image_size,
        ViewportSize::new(rect.width(), rect.height()),
        vp.view.zoom_to_fit,
        vp.view.zoom_level,
        vp.gestures.live_offset(&vp.view),
    );
    let placed = placement.image_rect(image_size);
    let img_rect = egui::Rect::from_min_max(
        rect.min + egui::vec2(placed.min_x, placed.min_y),
        rect.min + egui::vec2(placed.max_x, placed.max_y),
    );
    draw_image(ui, rect, texture.id(), img_rect);
    draw_viewing_label(ui, rect, &zoom_label(vp, &placement));

    if vp.gestures.is_dragging() && !vp.view.zoom_to_fit {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    }
}

fn handle_pointer(ui: &egui::Ui, vp: &mut ViewportState, rect: egui::Rect) {
    let (events, time) = ui.input(|i| (i.events.clone(), i.time));
    let pointer_events = vp
        .input
        .translate(&events, rect, Duration::from_secs_f64(time.max(0.0)));
    if pointer_events.is_empty() {
        return;
    }

    let intent = vp.gestures.interpret(&pointer_events);
    if !intent.is_empty() {
        vp.view.apply(&intent);
        ui.ctx().request_repaint();
    }
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Draw clipped to the content rect; the texture itself samples nearest.
fn draw_image(ui: &egui::Ui, clip: egui::Rect, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter_at(clip).image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn zoom_label(vp: &ViewportState, placement: &Placement) -> String {
    let percent = placement.scale * 100.0;
    let mode = if vp.view.zoom_to_fit {
        format!("Fit {percent:.0}%")
    } else {
        format!("{percent:.0}% (step {})", vp.view.zoom_level)
    };
    if vp.viewing_label.is_empty() {
        mode
    } else {
        format!("{}  {mode}", vp.viewing_label)
    }
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Choose an image in the control panel")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
