use dioxus::prelude::*;
use crate::{
  components::{feedback::ErrorState, widgets::ProgressBar},
  i18n::{tr, use_language},
  mock,
  utils::analytics,
};

#[component]
pub fn CuratorReports() -> Element {
  let lang = use_language()();
  let store = match mock::store() {
    Ok(s) => s,
    Err(e) => return rsx! { ErrorState { message: e.to_string() } },
  };
  let rows = analytics::course_report(&store.courses);
  let total: u32 = rows.iter().map(|r| r.enrolled).sum();

  rsx! {
    div {
      class: "page-header",
      h1 { {tr(lang, "reports.title")} }
      span { class: "page-subtitle", {tr(lang, "course.enrolled")} ": {total}" }
    }
    table {
      class: "data-table",
      thead {
        tr {
          th { scope: "col", {tr(lang, "assignment.course")} }
          th { scope: "col", {tr(lang, "course.enrolled")} }
          th { scope: "col", {tr(lang, "course.lessons")} }
          th { scope: "col", {tr(lang, "course.rating")} }
          th { scope: "col", {tr(lang, "reports.share")} }
        }
      }
      tbody {
        for row in rows {
          tr {
            key: "r{row.course_id}",
            td { "{row.title}" }
            td { "{row.enrolled}" }
            td { "{row.lessons}" }
            td { if row.rating > 0.0 { "★ {row.rating:.1}" } else { "—" } }
            td { ProgressBar { percent: row.share } }
          }
        }
      }
    }
  }
}
