// SPDX-License-Identifier: MIT

//! Project gallery: a responsive grid of cards with preview/code links.

use eframe::egui;

use crate::i18n::{Catalog, Direction};
use crate::models::project::{PROJECTS, Project};
use crate::mvu::Msg;

pub fn view(ui: &mut egui::Ui, catalog: &Catalog, dir: Direction) -> Vec<Msg> {
    let mut msgs = Vec::new();

    let align = if dir.is_rtl() {
        egui::Align::Max
    } else {
        egui::Align::Min
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        ui.heading(catalog.t("projects-title"));
        ui.label(
            egui::RichText::new(catalog.t("projects-subtitle"))
                .color(ui.visuals().weak_text_color()),
        );
        ui.add_space(12.0);

        render_cards_grid(ui, catalog, &mut msgs);
    });

    msgs
}

/// Lay cards out in as many columns as the width allows.
fn render_cards_grid(ui: &mut egui::Ui, catalog: &Catalog, msgs: &mut Vec<Msg>) {
    let available = ui.available_width();
    let approx_card_width = 320.0;
    let cols = (available / approx_card_width).floor().max(1.0) as usize;

    egui::Grid::new("projects_grid")
        .num_columns(cols)
        .spacing(egui::vec2(12.0, 12.0))
        .min_col_width(260.0)
        .show(ui, |ui| {
            for (i, project) in PROJECTS.iter().enumerate() {
                render_card(ui, catalog, project, msgs);
                if (i + 1) % cols == 0 {
                    ui.end_row();
                }
            }
            if !PROJECTS.len().is_multiple_of(cols) {
                ui.end_row();
            }
        });
}

fn render_card(ui: &mut egui::Ui, catalog: &Catalog, project: &Project, msgs: &mut Vec<Msg>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width().min(320.0));
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(catalog.t(project.title_key)).strong());
            ui.add_space(4.0);

            ui.horizontal_wrapped(|ui| {
                for tech in project.technologies {
                    ui.label(
                        egui::RichText::new(*tech)
                            .small()
                            .color(ui.visuals().weak_text_color()),
                    );
                }
            });
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                if let Some(preview) = project.preview_url {
                    let label = format!(
                        "{} {}",
                        egui_phosphor::regular::ARROW_SQUARE_OUT,
                        catalog.t("project-preview")
                    );
                    if ui.button(label).clicked() {
                        msgs.push(Msg::OpenLink(preview));
                    }
                }
                let label = format!(
                    "{} {}",
                    egui_phosphor::regular::GITHUB_LOGO,
                    catalog.t("project-code")
                );
                if ui.button(label).clicked() {
                    msgs.push(Msg::OpenLink(project.code_url));
                }
            });
        });
    });
}
