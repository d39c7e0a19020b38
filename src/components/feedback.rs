#![allow(non_snake_case)]

use dioxus::prelude::*;
use crate::i18n::{tr, use_language};

#[component]
pub fn ErrorState(message: String) -> Element {
  let lang = use_language()();
  rsx! {
    div {
      class: "error-state",
      div { class: "error-state-icon", "⚠️" }
      h3 { {tr(lang, "error.title")} }
      pre { "{message}" }
    }
  }
}

#[component]
pub fn EmptyState(text: String) -> Element {
  rsx! {
    div { class: "empty-state", "{text}" }
  }
}

/// Hidden until [`show_toast`] is called with the same id.
#[component]
pub fn SuccessToast(id: String, text: String) -> Element {
  rsx! {
    div {
      id: "{id}",
      class: "toast toast-success",
      "{text}"
    }
  }
}

pub fn show_toast(id: &str) {
  document::eval(&format!(
    r#"
      var x = document.getElementById("{id}");
      if (x) {{
        x.classList.add("show");
        setTimeout(function(){{x.classList.remove("show");}}, 2000);
      }}
    "#
  ));
}
