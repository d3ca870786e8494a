// SPDX-License-Identifier: MIT

//! Top-level egui application shell for the portfolio.
//! Handles layout, the navbar, and wiring between views and the MVU kernel.

pub mod components;
pub mod theme;

use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::i18n::{Catalog, Language};
use crate::mvu::{self, AppModel, Command, Msg, Section};
use crate::prefs::{PrefEvent, PrefStore, ThemeMode};
use crate::relay::RelayClient;
use crate::ui::components::{about, contact_form, hero, projects};

/// Stateful egui application presenting the portfolio sections.
pub struct PortfolioApp {
    model: AppModel,
    catalog: Catalog,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
    pref_events: crossbeam_channel::Receiver<PrefEvent>,
}

impl Default for PortfolioApp {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioApp {
    pub fn new() -> Self {
        let mut store = PrefStore::open_default();
        let prefs = store.prefs();
        let pref_events = store.subscribe();
        let store = Arc::new(Mutex::new(store));

        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        // Two workers cover the app's needs: one submission in flight at most,
        // plus the occasional preference write or link open.
        let runner = mvu::CommandRunner::new(RelayClient::default(), store);
        for _ in 0..2 {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let runner = runner.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    if let Some(msg) = runner.run(cmd) {
                        let _ = msg_tx.send(msg);
                    }
                }
            });
        }

        let mut catalog = Catalog::new();
        catalog.set_language(prefs.language);

        Self {
            model: AppModel::from_prefs(prefs),
            catalog,
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
            pref_events,
        }
    }
}

impl eframe::App for PortfolioApp {
    /// Drives a single UI frame: drains worker messages, applies them to the
    /// model, emits resulting commands, and renders navbar, content, and toast.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.inbox.push(msg);
        }

        // Process pending messages until exhausted.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                let _ = self.cmd_tx.send(cmd);
            }
        }
        self.inbox = msgs;

        // Store-confirmed preference changes, surfaced for diagnostics.
        while let Ok(event) = self.pref_events.try_recv() {
            tracing::debug!(?event, "preference persisted");
        }

        // Document-level side effects of the preference state: catalog
        // language and theme visuals are synchronized before painting, so
        // every consumer observes the change in the same frame.
        if self.catalog.language() != self.model.language {
            self.catalog.set_language(self.model.language);
            tracing::debug!(lang = self.model.language.tag(), "applied language change");
        }
        ctx.set_visuals(theme::visuals(self.model.theme));

        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            ui.add_space(6.0);
            self.render_navbar(ui);
            ui.add_space(4.0);
        });

        self.render_toast(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| {
                let dir = self.model.language.direction();
                match self.model.section {
                    Section::Home => {
                        self.inbox.extend(hero::view(ui, &self.catalog, dir));
                    }
                    Section::About => about::view(ui, &self.catalog, dir),
                    Section::Projects => {
                        self.inbox.extend(projects::view(ui, &self.catalog, dir));
                    }
                    Section::Contact => {
                        let form_msgs =
                            contact_form::view(ui, &self.catalog, &self.model.contact, dir);
                        self.inbox.extend(form_msgs.into_iter().map(Msg::Contact));
                    }
                }
                ui.add_space(8.0);
            });
        });
    }
}

impl PortfolioApp {
    fn render_navbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(self.catalog.t("app-title"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.render_theme_button(ui);
                self.render_language_switcher(ui);
                ui.separator();
                self.render_section_tabs(ui);
            });
        });
    }

    fn render_section_tabs(&mut self, ui: &mut egui::Ui) {
        // Rendered right-to-left by the surrounding layout, so iterate in
        // reverse to keep the visual order Home..Contact.
        for section in Section::all().iter().rev() {
            let selected = self.model.section == *section;
            if ui
                .selectable_label(selected, self.catalog.t(section.label_key()))
                .clicked()
            {
                self.inbox.push(Msg::SectionSelected(*section));
            }
        }
    }

    fn render_language_switcher(&mut self, ui: &mut egui::Ui) {
        for lang in Language::all() {
            let selected = self.model.language == *lang;
            if ui
                .selectable_label(selected, lang.display_name())
                .clicked()
            {
                self.inbox.push(Msg::SetLanguage(*lang));
            }
        }
        ui.label(egui_phosphor::regular::TRANSLATE.to_string());
    }

    fn render_theme_button(&mut self, ui: &mut egui::Ui) {
        let (icon, tooltip_key) = match self.model.theme {
            ThemeMode::Light => (egui_phosphor::regular::MOON, "theme-switch-to-dark"),
            ThemeMode::Dark => (egui_phosphor::regular::SUN, "theme-switch-to-light"),
        };

        if ui
            .button(icon.to_string())
            .on_hover_text(self.catalog.t(tooltip_key))
            .clicked()
        {
            self.inbox.push(Msg::SetTheme(self.model.theme.toggled()));
        }
    }

    /// Corner notification for submission feedback.
    fn render_toast(&mut self, ctx: &egui::Context) {
        let Some(toast) = self.model.toast.clone() else {
            return;
        };

        let title_color = if toast.is_error {
            ctx.style().visuals.error_fg_color
        } else {
            ctx.style().visuals.hyperlink_color
        };

        egui::Window::new("toast")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(self.catalog.t(toast.title_key))
                        .strong()
                        .color(title_color),
                );
                ui.label(self.catalog.t(toast.body_key));
                if let Some(detail) = &toast.detail {
                    ui.label(
                        egui::RichText::new(detail)
                            .small()
                            .color(ui.visuals().weak_text_color()),
                    );
                }
                ui.add_space(4.0);
                if ui.button("OK").clicked() {
                    self.inbox.push(Msg::DismissToast);
                }
            });
    }
}
