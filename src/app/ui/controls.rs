use eframe::egui::{self, RichText, Ui};
use tracing::debug;

use super::super::FocusView;

impl FocusView {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Layout");
        ui.add_space(6.0);

        let mut config = self.config;
        ui.add(
            egui::Slider::new(&mut config.satellite_radius, 60.0..=600.0)
                .text("satellite radius"),
        );
        ui.add(egui::Slider::new(&mut config.hit_radius, 4.0..=120.0).text("hit radius"));
        ui.add(
            egui::Slider::new(&mut config.successor_arc_offset, 0.0..=0.5)
                .text("successor arc offset"),
        );

        if config != self.config {
            debug!(?config, "layout constants changed");
            self.config = config;
            self.controller.set_config(config);
        }

        ui.add_space(10.0);
        ui.label(RichText::new("Keys").strong());
        ui.label("Right / Down / N: next node");
        ui.label("Left / Up / P: previous node");
        ui.label("Click a neighbor: focus it");
        ui.label("Right or middle drag: pan");
        ui.label("Scroll: zoom");
    }
}
