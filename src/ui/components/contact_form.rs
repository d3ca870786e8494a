// SPDX-License-Identifier: MIT

//! Contact form in MVU shape: field buffers, inline errors, submit state.

use eframe::egui;

use crate::i18n::{Catalog, Direction};
use crate::models::contact::{ContactDraft, FieldError, FieldErrors};

/// UI model for the contact form, free of side effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormModel {
    pub draft: ContactDraft,
    pub errors: FieldErrors,
    /// True while a submission is in flight; the send button is disabled.
    pub sending: bool,
}

/// Messages emitted by the contact form view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactFormMsg {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    /// Intercepted by the root update, which validates and enqueues the send.
    Submit,
}

/// Apply a field edit. Editing a field clears its inline error so the user
/// sees immediate recovery feedback.
pub fn update(model: &mut ContactFormModel, msg: ContactFormMsg) {
    match msg {
        ContactFormMsg::NameChanged(text) => {
            model.draft.name = text;
            model.errors.name = None;
        }
        ContactFormMsg::EmailChanged(text) => {
            model.draft.email = text;
            model.errors.email = None;
        }
        ContactFormMsg::MessageChanged(text) => {
            model.draft.message = text;
            model.errors.message = None;
        }
        // Validation and dispatch happen in the root update.
        ContactFormMsg::Submit => {}
    }
}

/// Render the form and return any messages triggered by user interaction.
pub fn view(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    model: &ContactFormModel,
    dir: Direction,
) -> Vec<ContactFormMsg> {
    let mut msgs = Vec::new();

    let layout = if dir.is_rtl() {
        egui::Layout::top_down(egui::Align::Max)
    } else {
        egui::Layout::top_down(egui::Align::Min)
    };

    ui.with_layout(layout, |ui| {
        ui.heading(catalog.t("contact-title"));
        ui.label(
            egui::RichText::new(catalog.t("contact-subtitle"))
                .color(ui.visuals().weak_text_color()),
        );
        ui.add_space(12.0);

        render_singleline(
            ui,
            catalog,
            "contact-name",
            "contact-name-placeholder",
            &model.draft.name,
            model.errors.name.map(|err| ("contact-name-error", err)),
            &mut msgs,
            ContactFormMsg::NameChanged,
        );
        ui.add_space(8.0);

        render_singleline(
            ui,
            catalog,
            "contact-email",
            "contact-email-placeholder",
            &model.draft.email,
            model.errors.email.map(|err| ("contact-email-error", err)),
            &mut msgs,
            ContactFormMsg::EmailChanged,
        );
        ui.add_space(8.0);

        ui.label(catalog.t("contact-message"));
        ui.add_space(4.0);
        let mut message = model.draft.message.clone();
        if ui
            .add(
                egui::TextEdit::multiline(&mut message)
                    .hint_text(catalog.t("contact-message-placeholder"))
                    .desired_rows(5)
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            msgs.push(ContactFormMsg::MessageChanged(message));
        }
        if let Some(err) = model.errors.message {
            render_error(ui, catalog, "contact-message-error", err);
        }
        ui.add_space(12.0);

        render_send_button(ui, catalog, model, &mut msgs);
    });

    msgs
}

#[allow(clippy::too_many_arguments)]
fn render_singleline(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    label_key: &str,
    placeholder_key: &str,
    value: &str,
    error: Option<(&str, FieldError)>,
    msgs: &mut Vec<ContactFormMsg>,
    to_msg: impl Fn(String) -> ContactFormMsg,
) {
    ui.label(catalog.t(label_key));
    ui.add_space(4.0);
    let mut buffer = value.to_owned();
    if ui
        .add(
            egui::TextEdit::singleline(&mut buffer)
                .hint_text(catalog.t(placeholder_key))
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        msgs.push(to_msg(buffer));
    }
    if let Some((key, err)) = error {
        render_error(ui, catalog, key, err);
    }
}

fn render_error(ui: &mut egui::Ui, catalog: &Catalog, key: &str, err: FieldError) {
    let text = match err {
        FieldError::TooShort { min } => catalog.t_args(key, &[("min", &min.to_string())]),
        FieldError::InvalidEmail => catalog.t(key),
    };
    let color = ui.visuals().error_fg_color;
    ui.label(egui::RichText::new(text).small().color(color));
}

fn render_send_button(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    model: &ContactFormModel,
    msgs: &mut Vec<ContactFormMsg>,
) {
    ui.horizontal(|ui| {
        let label = if model.sending {
            catalog.t("contact-sending")
        } else {
            format!(
                "{} {}",
                egui_phosphor::regular::PAPER_PLANE_TILT,
                catalog.t("contact-send")
            )
        };

        let button = egui::Button::new(label);
        if ui.add_enabled(!model.sending, button).clicked() {
            msgs.push(ContactFormMsg::Submit);
        }

        if model.sending {
            ui.add(egui::Spinner::new().size(14.0));
        }
    });
}
