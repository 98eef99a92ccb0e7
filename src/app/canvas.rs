use eframe::egui::{Align2, Color32, CursorIcon, FontId, Sense, Stroke, Ui};

use focus_graph::focus::FocusError;

use super::FocusView;
use super::render_utils::{blend_color, draw_arrow, draw_background, trim_segment, world_to_screen};

const FOCUS_COLOR: Color32 = Color32::from_rgb(245, 206, 93);
const HOVER_COLOR: Color32 = Color32::from_rgb(255, 164, 101);
const SATELLITE_COLOR: Color32 = Color32::from_rgb(84, 142, 196);
const EDGE_COLOR: Color32 = Color32::from_rgba_premultiplied(120, 128, 140, 200);

impl FocusView {
    pub(in crate::app) fn draw_canvas(&mut self, ui: &mut Ui) -> Result<(), FocusError> {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        self.handle_zoom(ui, rect, &response);
        self.handle_pan(&response);
        draw_background(&painter, rect, self.pan, self.zoom);

        let input = self.poll_input(ui, rect, &response);
        let pan = self.pan;
        let zoom = self.zoom;
        let node_radius = (self.config.hit_radius * zoom).max(3.0);
        let zoom_sqrt = zoom.sqrt();

        let view = self.controller.tick(&input)?;
        if input.click || input.advance || input.retreat {
            // The tick that consumes a click only picks the next focus.
            ui.ctx().request_repaint();
        }

        let mut drawn_edges = 0usize;
        for (_edge, start, end) in view.visible_edges() {
            let start = world_to_screen(rect, pan, zoom, start);
            let end = world_to_screen(rect, pan, zoom, end);
            let Some((start, end)) = trim_segment(start, end, node_radius) else {
                continue;
            };

            let stroke = Stroke::new((1.4 * zoom_sqrt).clamp(0.8, 3.2), EDGE_COLOR);
            draw_arrow(&painter, start, end, stroke);
            drawn_edges += 1;
        }

        let label_font = FontId::proportional((13.0 * zoom_sqrt).clamp(9.0, 22.0));
        for visual in &view.nodes {
            let center = world_to_screen(rect, pan, zoom, visual.position);
            let fill = match (visual.highlight, visual.focused) {
                (true, true) => blend_color(FOCUS_COLOR, Color32::WHITE, 0.3),
                (true, false) => FOCUS_COLOR,
                (false, true) => HOVER_COLOR,
                (false, false) => SATELLITE_COLOR,
            };
            let outline = if visual.focused {
                Stroke::new(2.4, Color32::WHITE)
            } else {
                Stroke::new(1.2, blend_color(fill, Color32::BLACK, 0.45))
            };

            painter.circle(center, node_radius, fill, outline);
            painter.text(
                center,
                Align2::CENTER_CENTER,
                visual.node.as_str(),
                label_font.clone(),
                Color32::from_rgb(18, 20, 24),
            );
        }

        if view.hovered().is_some() {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }

        self.drawn_node_count = view.nodes.len();
        self.drawn_edge_count = drawn_edges;
        Ok(())
    }
}
