use eframe::egui::{self, Key, Rect, Ui};

use focus_graph::focus::InputSnapshot;

use super::FocusView;
use super::render_utils::screen_to_world;

const ADVANCE_KEYS: [Key; 3] = [Key::ArrowRight, Key::ArrowDown, Key::N];
const RETREAT_KEYS: [Key; 3] = [Key::ArrowLeft, Key::ArrowUp, Key::P];

impl FocusView {
    pub(in crate::app) fn handle_zoom(&mut self, ui: &Ui, rect: Rect, response: &egui::Response) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .unwrap_or_else(|| rect.center());
        let world_before = (pointer - rect.center() - self.pan) / self.zoom;

        let zoom_factor = (1.0 + (scroll * 0.0018)).clamp(0.85, 1.15);
        self.zoom = (self.zoom * zoom_factor).clamp(0.2, 4.0);
        self.pan = pointer - rect.center() - (world_before * self.zoom);
    }

    pub(in crate::app) fn handle_pan(&mut self, response: &egui::Response) {
        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            self.pan += response.drag_delta();
        }
    }

    // Key presses and clicks are edge-triggered by egui, so each lasts one frame.
    pub(in crate::app) fn poll_input(
        &self,
        ui: &Ui,
        rect: Rect,
        response: &egui::Response,
    ) -> InputSnapshot {
        let keyboard_free = ui.ctx().memory(|memory| memory.focused().is_none());
        let (advance, retreat) = if keyboard_free {
            ui.input(|input| {
                (
                    ADVANCE_KEYS.iter().any(|key| input.key_pressed(*key)),
                    RETREAT_KEYS.iter().any(|key| input.key_pressed(*key)),
                )
            })
        } else {
            (false, false)
        };

        let mut snapshot = InputSnapshot {
            advance,
            retreat,
            click: response.clicked_by(egui::PointerButton::Primary),
            ..InputSnapshot::default()
        };

        if let Some(pointer) = response.hover_pos() {
            let world = screen_to_world(rect, self.pan, self.zoom, pointer);
            if world != self.controller.pointer_position() {
                snapshot.pointer_moved = true;
                snapshot.pointer_position = world;
            }
        }

        snapshot
    }
}
