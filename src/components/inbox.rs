#![allow(non_snake_case)]

use dioxus::prelude::*;
use crate::{components::{feedback::EmptyState, sidebar::InboxState}, i18n::{tr, use_language}};

/// Message list of the current dashboard. Opening a message marks it read.
#[component]
pub fn Inbox() -> Element {
  let lang = use_language()();
  let inbox = use_context::<InboxState>();
  let mut messages = inbox.messages;
  let mut selected: Signal<Option<u32>> = use_signal(|| None);

  let list = messages();
  let unread = inbox.unread();
  let unread_label = tr(lang, "messages.unread");
  let from_label = tr(lang, "messages.from");
  let open = selected().and_then(|id| list.iter().find(|m| m.id == id).cloned());

  rsx! {
    div {
      class: "page-header",
      h1 { {tr(lang, "messages.title")} }
      span { class: "page-subtitle", "{unread} {unread_label}" }
    }
    if list.is_empty() {
      EmptyState { text: tr(lang, "messages.empty") }
    } else {
      div {
        class: "inbox",
        ul {
          class: "inbox-list",
          for msg in list {
            li {
              key: "msg{msg.id}",
              class: { if selected() == Some(msg.id) { "inbox-item selected" } else if msg.read { "inbox-item" } else { "inbox-item unread" } },
              onclick: move |_| {
                selected.set(Some(msg.id));
                if let Some(m) = messages.write().iter_mut().find(|m| m.id == msg.id) {
                  m.read = true;
                }
              },
              div { class: "inbox-from", "{msg.from}" }
              div { class: "inbox-subject", "{msg.subject}" }
              div { class: "inbox-date", "{msg.sent_at}" }
            }
          }
        }
        div {
          class: "inbox-reader",
          {match open {
            Some(msg) => rsx! {
              h2 { "{msg.subject}" }
              p { class: "inbox-meta", "{from_label}: {msg.from} · {msg.sent_at}" }
              p { class: "inbox-body", "{msg.body}" }
            },
            None => rsx! {
              EmptyState { text: tr(lang, "messages.select") }
            }
          }}
        }
      }
    }
  }
}
