// SPDX-License-Identifier: MIT

//! About section: intro, headline stats, and skill groups.

use eframe::egui;

use crate::i18n::{Catalog, Direction};
use crate::models::project::{SKILL_GROUPS, STATS};

pub fn view(ui: &mut egui::Ui, catalog: &Catalog, dir: Direction) {
    let align = if dir.is_rtl() {
        egui::Align::Max
    } else {
        egui::Align::Min
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        ui.heading(catalog.t("about-title"));
        ui.label(
            egui::RichText::new(catalog.t("about-subtitle"))
                .color(ui.visuals().weak_text_color()),
        );
        ui.add_space(8.0);
        ui.label(catalog.t("about-intro"));
        ui.add_space(16.0);

        render_stats(ui, catalog, dir);
        ui.add_space(16.0);
        render_skills(ui, catalog);
    });
}

fn render_stats(ui: &mut egui::Ui, catalog: &Catalog, dir: Direction) {
    let layout = if dir.is_rtl() {
        egui::Layout::right_to_left(egui::Align::Center)
    } else {
        egui::Layout::left_to_right(egui::Align::Center)
    };

    ui.with_layout(layout, |ui| {
        for stat in STATS {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(stat.value)
                            .size(22.0)
                            .strong()
                            .color(ui.visuals().hyperlink_color),
                    );
                    ui.label(egui::RichText::new(catalog.t(stat.label_key)).small());
                });
            });
        }
    });
}

fn render_skills(ui: &mut egui::Ui, catalog: &Catalog) {
    ui.label(egui::RichText::new(catalog.t("about-skills-title")).strong());
    ui.add_space(6.0);

    for group in SKILL_GROUPS {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(catalog.t(group.title_key))
                    .strong()
                    .color(ui.visuals().hyperlink_color),
            );
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                for skill in group.skills {
                    ui.label(egui::RichText::new(*skill).small());
                    ui.separator();
                }
            });
        });
        ui.add_space(6.0);
    }
}
