use eframe::egui::{self, Align, Context, Layout};

use focus_graph::focus::FocusError;

use super::super::FocusView;

impl FocusView {
    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        source: &str,
        reload_requested: &mut bool,
        is_loading: bool,
    ) -> Result<(), FocusError> {
        let graph = self.controller.graph();
        let node_count = graph.len();
        let edge_count = graph.edges().len();

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("focus-graph");
                    ui.separator();
                    ui.label(format!("source: {source}"));
                    ui.label(format!("nodes: {node_count}"));
                    ui.label(format!("edges: {edge_count}"));
                    let reload_button =
                        ui.add_enabled(!is_loading, egui::Button::new("Reload graph"));
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }
                    if ui.button("Reset view").clicked() {
                        self.pan = egui::Vec2::ZERO;
                        self.zoom = 1.0;
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!(
                            "drawn: {} nodes / {} edges",
                            self.drawn_node_count, self.drawn_edge_count
                        ));
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.draw_details(ui);
                    ui.separator();
                    self.draw_controls(ui);
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_canvas(ui))
            .inner
    }
}
