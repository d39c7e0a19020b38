#![allow(non_snake_case)]

use dioxus::{logger::tracing::info, prelude::*};
use crate::{
  components::{feedback::{show_toast, SuccessToast}, language_switch::LanguageSelect},
  i18n::{tr, use_language},
  mock::models::Role,
};

const TOAST_ID: &str = "settings-toast";

#[derive(Debug, Clone, PartialEq)]
struct NotificationPrefs {
  email: bool,
  reminders: bool,
  digest: bool,
}

/// Profile, notification and language settings. Kept in page state only.
#[component]
pub fn SettingsPanel(role: Role, name: String, email: String) -> Element {
  let lang = use_language()();
  let mut profile_name = use_signal(|| name.clone());
  let mut profile_email = use_signal(|| email.clone());
  let mut prefs = use_signal(|| NotificationPrefs { email: true, reminders: role == Role::Student, digest: false });

  let toggles = [
    ("settings.notify_email", prefs().email),
    ("settings.notify_reminders", prefs().reminders),
    ("settings.notify_digest", prefs().digest),
  ];

  rsx! {
    div {
      class: "page-header",
      h1 { {tr(lang, "settings.title")} }
    }
    form {
      class: "settings-form",
      onsubmit: move |evt: FormEvent| {
        evt.prevent_default();
        info!("settings saved for {}: {:?}", profile_email(), prefs());
        show_toast(TOAST_ID);
      },
      fieldset {
        class: "settings-section",
        legend { {tr(lang, "settings.profile")} }
        div {
          class: "form-group",
          label { class: "form-label", r#for: "settings-name", {tr(lang, "settings.name")} }
          input {
            id: "settings-name",
            class: "form-input",
            r#type: "text",
            value: "{profile_name}",
            oninput: move |evt| profile_name.set(evt.value()),
          }
        }
        div {
          class: "form-group",
          label { class: "form-label", r#for: "settings-email", {tr(lang, "settings.email")} }
          input {
            id: "settings-email",
            class: "form-input",
            r#type: "email",
            value: "{profile_email}",
            oninput: move |evt| profile_email.set(evt.value()),
          }
        }
      }
      fieldset {
        class: "settings-section",
        legend { {tr(lang, "settings.notifications")} }
        for (idx, (key, enabled)) in toggles.into_iter().enumerate() {
          label {
            key: "{key}",
            class: "toggle",
            input {
              r#type: "checkbox",
              checked: enabled,
              onchange: move |_| {
                let mut p = prefs.write();
                match idx {
                  0 => p.email = !p.email,
                  1 => p.reminders = !p.reminders,
                  _ => p.digest = !p.digest,
                }
              },
            }
            span { {tr(lang, key)} }
          }
        }
      }
      fieldset {
        class: "settings-section",
        legend { {tr(lang, "settings.language")} }
        div {
          class: "form-group",
          LanguageSelect { label: tr(lang, "common.language") }
        }
      }
      div {
        class: "form-actions",
        button { r#type: "submit", class: "button button-primary", {tr(lang, "common.save")} }
      }
    }
    SuccessToast { id: TOAST_ID.to_string(), text: tr(lang, "settings.saved") }
  }
}
