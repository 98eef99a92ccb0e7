use eframe::egui::{RichText, Ui};

use focus_graph::graph::NodeId;

use super::super::FocusView;

fn neighbor_list(ui: &mut Ui, title: &str, focus: &NodeId, neighbors: &[NodeId]) {
    let satellites = neighbors
        .iter()
        .filter(|neighbor| *neighbor != focus)
        .collect::<Vec<_>>();

    ui.label(RichText::new(format!("{title} ({})", satellites.len())).strong());
    if satellites.is_empty() {
        ui.small("none");
        return;
    }
    for neighbor in satellites {
        ui.label(format!("- {neighbor}"));
    }
}

impl FocusView {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Focus");
        ui.add_space(6.0);

        let graph = self.controller.graph();
        let Ok(focus) = self.controller.focus() else {
            ui.label("Focus cursor is outside the graph.");
            return;
        };

        ui.label(RichText::new(focus.as_str()).strong());
        ui.small(format!("node {} of {}", self.controller.cursor() + 1, graph.len()));
        ui.add_space(6.0);

        let adjacency = self.controller.adjacency();
        neighbor_list(ui, "Predecessors", focus, adjacency.afferent(focus));
        ui.add_space(4.0);
        neighbor_list(ui, "Successors", focus, adjacency.efferent(focus));

        let pointer = self.controller.pointer_position();
        ui.add_space(6.0);
        ui.small(format!("pointer: {pointer}"));
    }
}
