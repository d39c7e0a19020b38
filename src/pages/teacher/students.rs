use dioxus::prelude::*;
use crate::{
  components::{feedback::{EmptyState, ErrorState}, widgets::ProgressBar},
  config,
  i18n::{tr, use_language},
  mock,
  utils::filters::{self, StudentSort},
};

#[component]
pub fn TeacherStudents() -> Element {
  let lang = use_language()();
  let mut query = use_signal(String::new);
  let mut sort = use_signal(|| StudentSort::Name);
  let mut descending = use_signal(|| false);
  let store = match mock::store() {
    Ok(s) => s,
    Err(e) => return rsx! { ErrorState { message: e.to_string() } },
  };

  let roster: Vec<_> = store.students_of_teacher(config::demo_teacher_id()).into_iter().cloned().collect();
  let rows = filters::search_students(&roster, &query(), sort(), descending());
  let placeholder = tr(lang, "common.search");

  rsx! {
    div {
      class: "page-header",
      h1 { {tr(lang, "nav.students")} }
      div {
        class: "toolbar",
        input {
          class: "form-input",
          r#type: "search",
          placeholder: "{placeholder}",
          value: "{query}",
          oninput: move |evt| query.set(evt.value()),
        }
        label { class: "form-label", r#for: "student-sort", {tr(lang, "common.sort_by")} }
        select {
          id: "student-sort",
          class: "form-input",
          onchange: move |evt: FormEvent| {
            if let Some(s) = StudentSort::from_slug(&evt.value()) {
              sort.set(s);
            }
          },
          for s in StudentSort::all().iter().copied() {
            option { key: "{s:?}", value: s.slug(), selected: sort() == s, {tr(lang, s.label_key())} }
          }
        }
        button {
          class: "tab",
          onclick: move |_| descending.toggle(),
          if descending() { {tr(lang, "common.descending")} } else { {tr(lang, "common.ascending")} }
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
            th { scope: "col", {tr(lang, "students.name")} }
            th { scope: "col", {tr(lang, "students.email")} }
            th { scope: "col", {tr(lang, "students.progress")} }
            th { scope: "col", {tr(lang, "students.grade")} }
            th { scope: "col", {tr(lang, "students.last_active")} }
          }
        }
        tbody {
          for st in rows {
            tr {
              key: "st{st.id}",
              td { "{st.name}" }
              td { class: "muted", "{st.email}" }
              td { ProgressBar { percent: st.progress as f64 } }
              td { if st.average_grade > 0.0 { "{st.average_grade:.1}%" } else { "—" } }
              td { "{st.last_active}" }
            }
          }
        }
      }
    }
  }
}
