use eframe::egui::{self, Color32, Painter, Pos2, Rect, Stroke};

use focus_graph::geometry::Vec2;

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, pan: egui::Vec2, zoom: f32) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(19, 23, 29));

    let step = (56.0 * zoom.clamp(0.6, 1.8)).max(20.0);
    let origin = rect.center() + pan;
    let stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 70));

    let mut x = origin.x.rem_euclid(step);
    while x < rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        x += step;
    }

    let mut y = origin.y.rem_euclid(step);
    while y < rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
        y += step;
    }
}

pub(super) fn world_to_screen(rect: Rect, pan: egui::Vec2, zoom: f32, world: Vec2) -> Pos2 {
    rect.center() + pan + egui::vec2(world.x, world.y) * zoom
}

pub(super) fn screen_to_world(rect: Rect, pan: egui::Vec2, zoom: f32, screen: Pos2) -> Vec2 {
    let world = (screen - rect.center() - pan) / zoom;
    Vec2::new(world.x, world.y)
}

// Pulls both ends of a segment in by the node radius so lines meet circle outlines.
pub(super) fn trim_segment(start: Pos2, end: Pos2, radius: f32) -> Option<(Pos2, Pos2)> {
    let delta = end - start;
    let length = delta.length();
    if length <= radius * 2.0 {
        return None;
    }

    let direction = delta / length;
    Some((start + direction * radius, end - direction * radius))
}

pub(super) fn draw_arrow(painter: &Painter, start: Pos2, end: Pos2, stroke: Stroke) {
    painter.line_segment([start, end], stroke);

    let delta = end - start;
    let length = delta.length();
    if length <= f32::EPSILON {
        return;
    }

    let direction = delta / length;
    let head = (8.0 + stroke.width * 2.0).min(length * 0.5);
    let back = end - direction * head;
    let normal = egui::vec2(-direction.y, direction.x) * (head * 0.45);
    painter.line_segment([end, back + normal], stroke);
    painter.line_segment([end, back - normal], stroke);
}
