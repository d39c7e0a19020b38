use dioxus::{logger::tracing::info, prelude::*};
use crate::{
  components::feedback::{EmptyState, ErrorState},
  i18n::{tr, use_language},
  mock::{self, models::{Role, User}},
  utils::filters::{self, ALL},
};

#[component]
pub fn CuratorUsers() -> Element {
  let lang = use_language()();
  let mut query = use_signal(String::new);
  let mut role: Signal<Option<Role>> = use_signal(|| None);
  let mut users: Signal<Vec<User>> = use_signal(|| mock::store().map(|s| s.users.clone()).unwrap_or_default());
  if let Err(e) = mock::store() {
    return rsx! { ErrorState { message: e.to_string() } };
  }

  let rows = filters::search_users(&users.read(), &query(), role());
  let placeholder = tr(lang, "common.search");
  let current = role().map_or(ALL, |r| r.slug());

  rsx! {
    div {
      class: "page-header",
      h1 { {tr(lang, "nav.users")} }
      div {
        class: "toolbar",
        input {
          class: "form-input",
          r#type: "search",
          placeholder: "{placeholder}",
          value: "{query}",
          oninput: move |evt| query.set(evt.value()),
        }
        select {
          class: "form-input",
          onchange: move |evt: FormEvent| role.set(Role::from_slug(&evt.value())),
          option { value: ALL, selected: current == ALL, {tr(lang, "common.all")} }
          for r in Role::all().iter().copied() {
            option { key: "{r:?}", value: r.slug(), selected: current == r.slug(), {tr(lang, r.label_key())} }
          }
        }
      }
    }
    if rows.is_empty() {
      EmptyState { text: tr(lang, "common.empty") }
    } else {
      table {
        class: "data-table",
        thead {
          tr {
            th { scope: "col", {tr(lang, "users.name")} }
            th { scope: "col", {tr(lang, "students.email")} }
            th { scope: "col", {tr(lang, "users.role")} }
            th { scope: "col", {tr(lang, "users.joined")} }
            th { scope: "col", {tr(lang, "common.status")} }
            th { scope: "col", {tr(lang, "common.actions")} }
          }
        }
        tbody {
          for user in rows {
            tr {
              key: "u{user.id}",
              td { "{user.name}" }
              td { class: "muted", "{user.email}" }
              td { {tr(lang, user.role.label_key())} }
              td { "{user.joined}" }
              td {
                span {
                  class: if user.active { "badge badge-green" } else { "badge badge-grey" },
                  {tr(lang, if user.active { "users.active" } else { "users.inactive" })}
                }
              }
              td {
                button {
                  class: "button",
                  onclick: move |_| {
                    if let Some(u) = users.write().iter_mut().find(|u| u.id == user.id) {
                      u.active = !u.active;
                      info!("user {} active = {}", u.id, u.active);
                    }
                  },
                  {tr(lang, if user.active { "users.deactivate" } else { "users.activate" })}
                }
              }
            }
          }
        }
      }
    }
  }
}
