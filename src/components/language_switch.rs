use dioxus::{logger::tracing::info, prelude::*};
use crate::i18n::{use_language, Language};

/// Compact EN/RU toggle for the site header and dashboard sidebar.
#[component]
pub fn LanguageSwitch() -> Element {
  let mut language = use_language();

  rsx! {
    div {
      class: "language-switch",
      for choice in Language::all().iter().copied() {
        button {
          key: "{choice:?}",
          class: if language() == choice { "lang-button active" } else { "lang-button" },
          title: choice.native_name(),
          onclick: move |_| {
            if language() != choice {
              info!("language changed to {}", choice.code());
              language.set(choice);
            }
          },
          {choice.code().to_uppercase()}
        }
      }
    }
  }
}

/// `<select>` variant used on settings pages.
#[component]
pub fn LanguageSelect(label: String) -> Element {
  let mut language = use_language();

  rsx! {
    label {
      class: "form-label",
      r#for: "language-select",
      "{label}"
    }
    select {
      id: "language-select",
      class: "form-input",
      value: language().code(),
      onchange: move |evt: FormEvent| {
        if let Some(selected) = Language::from_code(&evt.value()) {
          info!("language changed to {}", selected.code());
          language.set(selected);
        }
      },
      for choice in Language::all().iter().copied() {
        option {
          key: "{choice:?}",
          value: choice.code(),
          selected: language() == choice,
          {choice.native_name()}
        }
      }
    }
  }
}
