use dioxus::prelude::*;
use crate::{
  components::{feedback::{EmptyState, ErrorState}, widgets::{assignment_status_class, format_grade, Badge}},
  i18n::{tr, use_language},
  mock::{self, models::AssignmentStatus},
  utils::filters,
};
use super::{demo_student, MissingStudent};

#[component]
pub fn StudentAssignments() -> Element {
  let lang = use_language()();
  let mut status: Signal<Option<AssignmentStatus>> = use_signal(|| None);
  let store = match mock::store() {
    Ok(s) => s,
    Err(e) => return rsx! { ErrorState { message: e.to_string() } },
  };
  let Some((_, assignments)) = demo_student(store) else {
    return rsx! { MissingStudent {} };
  };

  let rows: Vec<_> = filters::by_assignment_status(&assignments, status())
    .into_iter()
    .map(|a| {
      let course = store.course(a.course_id).map(|c| c.title.clone()).unwrap_or_default();
      (a, course)
    })
    .collect();

  rsx! {
    div {
      class: "page-header",
      h1 { {tr(lang, "nav.assignments")} }
    }
    div {
      class: "tabs",
      button {
        class: if status().is_none() { "tab active" } else { "tab" },
        onclick: move |_| status.set(None),
        {tr(lang, "common.all")}
      }
      for s in AssignmentStatus::all().iter().copied() {
        button {
          key: "{s:?}",
          class: if status() == Some(s) { "tab active" } else { "tab" },
          onclick: move |_| status.set(Some(s)),
          {tr(lang, s.label_key())}
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
            th { scope: "col", {tr(lang, "assignment.title")} }
            th { scope: "col", {tr(lang, "assignment.course")} }
            th { scope: "col", {tr(lang, "assignment.due")} }
            th { scope: "col", {tr(lang, "common.status")} }
            th { scope: "col", {tr(lang, "assignment.grade")} }
          }
        }
        tbody {
          for (a, course) in rows {
            tr {
              key: "as{a.id}",
              td { "{a.title}" }
              td { "{course}" }
              td { "{a.due}" }
              td { Badge { tone: assignment_status_class(a.status), text: tr(lang, a.status.label_key()) } }
              td { {format_grade(a.grade, a.max_grade)} }
            }
          }
        }
      }
    }
  }
}
