// SPDX-License-Identifier: MIT

//! Hero banner: greeting, name, role, tagline, and a contact call-to-action.

use eframe::egui;

use crate::i18n::{Catalog, Direction};
use crate::mvu::{Msg, Section};

pub fn view(ui: &mut egui::Ui, catalog: &Catalog, dir: Direction) -> Vec<Msg> {
    let mut msgs = Vec::new();

    let align = if dir.is_rtl() {
        egui::Align::Max
    } else {
        egui::Align::Min
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        ui.add_space(24.0);
        ui.label(
            egui::RichText::new(catalog.t("hero-greeting"))
                .size(16.0)
                .color(ui.visuals().weak_text_color()),
        );
        ui.label(
            egui::RichText::new(catalog.t("hero-name"))
                .size(42.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );
        ui.label(egui::RichText::new(catalog.t("hero-role")).size(22.0).strong());
        ui.add_space(8.0);
        ui.label(egui::RichText::new(catalog.t("hero-tagline")).size(15.0));
        ui.add_space(16.0);

        let cta = egui::Button::new(format!(
            "{} {}",
            egui_phosphor::regular::PAPER_PLANE_TILT,
            catalog.t("hero-cta")
        ));
        if ui.add(cta).clicked() {
            msgs.push(Msg::SectionSelected(Section::Contact));
        }
        ui.add_space(24.0);
    });

    msgs
}
