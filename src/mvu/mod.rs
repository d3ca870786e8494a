// SPDX-License-Identifier: MIT

//! Root Model-View-Update kernel wiring portfolio state, messages, and commands.

use std::sync::{Arc, Mutex};

use crate::i18n::Language;
use crate::models::contact::{self, ContactMessage};
use crate::prefs::{PrefStore, Prefs, ThemeMode};
use crate::relay::{RelayClient, RelayReceipt};
use crate::ui::components::contact_form::{self, ContactFormModel, ContactFormMsg};

/// Page sections reachable from the navbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub fn label_key(&self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::About => "nav-about",
            Section::Projects => "nav-projects",
            Section::Contact => "nav-contact",
        }
    }

    pub fn all() -> &'static [Section] {
        &[
            Section::Home,
            Section::About,
            Section::Projects,
            Section::Contact,
        ]
    }
}

/// Transient notification shown in the corner of the window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title_key: &'static str,
    pub body_key: &'static str,
    /// Raw error detail for the curious; not localized.
    pub detail: Option<String>,
    pub is_error: bool,
}

impl Toast {
    fn success() -> Self {
        Self {
            title_key: "contact-success-title",
            body_key: "contact-success-body",
            detail: None,
            is_error: false,
        }
    }

    fn error(detail: String) -> Self {
        Self {
            title_key: "contact-error-title",
            body_key: "contact-error-body",
            detail: Some(detail),
            is_error: true,
        }
    }
}

/// Top-level application state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppModel {
    /// Currently selected navbar section.
    pub section: Section,
    /// Active UI language; drives catalog lookups and layout direction.
    pub language: Language,
    /// Active theme mode; drives the visuals set.
    pub theme: ThemeMode,
    /// Contact form state.
    pub contact: ContactFormModel,
    /// Latest submission/notification feedback, if any.
    pub toast: Option<Toast>,
}

impl AppModel {
    pub fn from_prefs(prefs: Prefs) -> Self {
        Self {
            language: prefs.language,
            theme: prefs.theme,
            ..Default::default()
        }
    }

    /// Snapshot of the persistable preference state.
    pub fn prefs(&self) -> Prefs {
        Prefs {
            language: self.language,
            theme: self.theme,
        }
    }
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    SectionSelected(Section),
    SetLanguage(Language),
    SetTheme(ThemeMode),
    Contact(ContactFormMsg),
    SubmitCompleted(Result<RelayReceipt, String>),
    OpenLink(&'static str),
    DismissToast,
}

/// Commands represent side effects executed on worker threads between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    SendContact(ContactMessage),
    PersistPrefs(Prefs),
    OpenLink(&'static str),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::SectionSelected(section) => model.section = section,
        Msg::SetLanguage(language) => {
            if model.language != language {
                model.language = language;
                cmds.push(Command::PersistPrefs(model.prefs()));
            }
        }
        Msg::SetTheme(theme) => {
            if model.theme != theme {
                model.theme = theme;
                cmds.push(Command::PersistPrefs(model.prefs()));
            }
        }
        Msg::Contact(ContactFormMsg::Submit) => submit(model, cmds),
        Msg::Contact(m) => contact_form::update(&mut model.contact, m),
        Msg::SubmitCompleted(Ok(_receipt)) => {
            model.contact.sending = false;
            model.contact.draft.clear();
            model.contact.errors = Default::default();
            model.toast = Some(Toast::success());
        }
        Msg::SubmitCompleted(Err(detail)) => {
            // Buffers are left untouched so the user can retry.
            model.contact.sending = false;
            model.toast = Some(Toast::error(detail));
        }
        Msg::OpenLink(url) => cmds.push(Command::OpenLink(url)),
        Msg::DismissToast => model.toast = None,
    }
}

/// Validate the draft; enqueue exactly one send on success, surface field
/// errors otherwise. Ignored while a submission is already in flight.
fn submit(model: &mut AppModel, cmds: &mut Vec<Command>) {
    if model.contact.sending {
        return;
    }
    match contact::validate(&model.contact.draft) {
        Ok(message) => {
            model.contact.errors = Default::default();
            model.contact.sending = true;
            cmds.push(Command::SendContact(message));
        }
        Err(errors) => model.contact.errors = errors,
    }
}

/// Executes commands on worker threads and turns results back into messages.
#[derive(Clone)]
pub struct CommandRunner {
    relay: RelayClient,
    prefs: Arc<Mutex<PrefStore>>,
}

impl CommandRunner {
    pub fn new(relay: RelayClient, prefs: Arc<Mutex<PrefStore>>) -> Self {
        Self { relay, prefs }
    }

    /// Run one command. Commands that only persist or open something produce
    /// no follow-up message.
    pub fn run(&self, cmd: Command) -> Option<Msg> {
        match cmd {
            Command::SendContact(message) => {
                let result = self.relay.send(&message).map_err(|err| {
                    tracing::error!(%err, "contact relay failed");
                    err.to_string()
                });
                Some(Msg::SubmitCompleted(result))
            }
            Command::PersistPrefs(prefs) => {
                let mut store = self.prefs.lock().unwrap_or_else(|p| p.into_inner());
                let saved = store
                    .set_language(prefs.language)
                    .and_then(|_| store.set_theme(prefs.theme));
                if let Err(err) = saved {
                    tracing::warn!(%err, "failed to persist preferences");
                }
                None
            }
            Command::OpenLink(url) => {
                if let Err(err) = open::that(url) {
                    tracing::warn!(url, %err, "failed to open link");
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::field_reassign_with_default)]

    use super::*;
    use crate::i18n::Direction;
    use tempfile::TempDir;

    fn model_with_draft(name: &str, email: &str, message: &str) -> AppModel {
        let mut model = AppModel::default();
        model.contact.draft.name = name.into();
        model.contact.draft.email = email.into();
        model.contact.draft.message = message.into();
        model
    }

    #[test]
    fn valid_submit_enqueues_single_send_with_all_fields() {
        let mut model = model_with_draft("Jo", "jo@x.com", "Hello there, testing");
        let mut cmds = Vec::new();

        update(&mut model, Msg::Contact(ContactFormMsg::Submit), &mut cmds);

        assert_eq!(cmds.len(), 1, "exactly one send should be enqueued");
        match &cmds[0] {
            Command::SendContact(msg) => {
                assert_eq!(msg.name, "Jo");
                assert_eq!(msg.email, "jo@x.com");
                assert_eq!(msg.message, "Hello there, testing");
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(model.contact.sending);
        assert!(model.contact.errors.is_empty());
    }

    #[test]
    fn one_char_name_sets_inline_error_and_sends_nothing() {
        let mut model = model_with_draft("J", "jo@x.com", "Hello there, testing");
        let mut cmds = Vec::new();

        update(&mut model, Msg::Contact(ContactFormMsg::Submit), &mut cmds);

        assert!(cmds.is_empty(), "no network command for invalid input");
        assert!(model.contact.errors.name.is_some());
        assert!(!model.contact.sending);
    }

    #[test]
    fn submit_while_sending_is_ignored() {
        let mut model = model_with_draft("Jo", "jo@x.com", "Hello there, testing");
        model.contact.sending = true;
        let mut cmds = Vec::new();

        update(&mut model, Msg::Contact(ContactFormMsg::Submit), &mut cmds);

        assert!(cmds.is_empty());
    }

    #[test]
    fn success_clears_draft_and_shows_success_toast() {
        let mut model = model_with_draft("Jo", "jo@x.com", "Hello there, testing");
        model.contact.sending = true;
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::SubmitCompleted(Ok(RelayReceipt {
                message: Some("Email sent".into()),
            })),
            &mut cmds,
        );

        assert!(cmds.is_empty());
        assert!(!model.contact.sending);
        assert!(model.contact.draft.name.is_empty());
        assert!(model.contact.draft.email.is_empty());
        assert!(model.contact.draft.message.is_empty());
        let toast = model.toast.expect("success toast expected");
        assert!(!toast.is_error);
        assert_eq!(toast.title_key, "contact-success-title");
    }

    #[test]
    fn failure_preserves_draft_and_shows_error_toast() {
        let mut model = model_with_draft("Jo", "jo@x.com", "Hello there, testing");
        model.contact.sending = true;
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::SubmitCompleted(Err("relay rejected submission: X".into())),
            &mut cmds,
        );

        assert!(!model.contact.sending);
        assert_eq!(model.contact.draft.name, "Jo");
        assert_eq!(model.contact.draft.email, "jo@x.com");
        assert_eq!(model.contact.draft.message, "Hello there, testing");
        let toast = model.toast.expect("error toast expected");
        assert!(toast.is_error);
        assert_eq!(toast.detail.as_deref(), Some("relay rejected submission: X"));
    }

    #[test]
    fn language_change_updates_direction_and_persists() {
        let mut model = AppModel::default();
        assert_eq!(model.language.direction(), Direction::Rtl);
        let mut cmds = Vec::new();

        update(&mut model, Msg::SetLanguage(Language::En), &mut cmds);

        assert_eq!(model.language.direction(), Direction::Ltr);
        assert_eq!(
            cmds,
            vec![Command::PersistPrefs(Prefs {
                language: Language::En,
                theme: ThemeMode::Light,
            })]
        );
    }

    #[test]
    fn setting_current_language_is_a_no_op() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(&mut model, Msg::SetLanguage(Language::Ar), &mut cmds);

        assert!(cmds.is_empty());
    }

    #[test]
    fn double_theme_toggle_returns_to_original_mode() {
        let mut model = AppModel::default();
        let original = model.theme;
        let mut cmds = Vec::new();

        let toggled = model.theme.toggled();
        update(&mut model, Msg::SetTheme(toggled), &mut cmds);
        let toggled = model.theme.toggled();
        update(&mut model, Msg::SetTheme(toggled), &mut cmds);

        assert_eq!(model.theme, original);
        assert_eq!(cmds.len(), 2);
    }

    #[test]
    fn dismiss_toast_clears_feedback() {
        let mut model = AppModel::default();
        model.toast = Some(Toast::success());
        let mut cmds = Vec::new();

        update(&mut model, Msg::DismissToast, &mut cmds);

        assert!(model.toast.is_none());
        assert!(cmds.is_empty());
    }

    #[test]
    fn open_link_becomes_a_command() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(&mut model, Msg::OpenLink("https://example.com"), &mut cmds);

        assert_eq!(cmds, vec![Command::OpenLink("https://example.com")]);
    }

    #[test]
    fn persist_prefs_command_writes_through_the_store() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.toml");
        let store = Arc::new(Mutex::new(PrefStore::load_from(&path).unwrap()));
        let runner = CommandRunner::new(RelayClient::default(), Arc::clone(&store));

        let msg = runner.run(Command::PersistPrefs(Prefs {
            language: Language::En,
            theme: ThemeMode::Dark,
        }));

        assert!(msg.is_none());
        let reloaded = PrefStore::load_from(&path).unwrap();
        assert_eq!(reloaded.language(), Language::En);
        assert_eq!(reloaded.theme(), ThemeMode::Dark);
    }
}
