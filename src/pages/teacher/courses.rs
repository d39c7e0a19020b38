use dioxus::prelude::*;
use crate::{
  components::{feedback::{EmptyState, ErrorState}, widgets::{course_status_class, Badge}},
  config,
  i18n::{tr, use_language},
  mock,
};

#[component]
pub fn TeacherCourses() -> Element {
  let lang = use_language()();
  let store = match mock::store() {
    Ok(s) => s,
    Err(e) => return rsx! { ErrorState { message: e.to_string() } },
  };
  let courses = store.courses_by_teacher(config::demo_teacher_id());

  rsx! {
    div {
      class: "page-header",
      h1 { {tr(lang, "nav.courses")} }
    }
    if courses.is_empty() {
      EmptyState { text: tr(lang, "common.empty") }
    } else {
      table {
        class: "data-table",
        thead {
          tr {
            th { scope: "col", {tr(lang, "assignment.course")} }
            th { scope: "col", {tr(lang, "course.level")} }
            th { scope: "col", {tr(lang, "common.status")} }
            th { scope: "col", {tr(lang, "course.enrolled")} }
            th { scope: "col", {tr(lang, "course.lessons")} }
            th { scope: "col", {tr(lang, "course.rating")} }
            th { scope: "col", {tr(lang, "course.price")} }
          }
        }
        tbody {
          for course in courses {
            tr {
              key: "tc{course.id}",
              td {
                div { "{course.title}" }
                div { class: "muted", "{course.category}" }
              }
              td { {tr(lang, course.level.label_key())} }
              td { Badge { tone: course_status_class(course.status), text: tr(lang, course.status.label_key()) } }
              td { "{course.enrolled}" }
              td { {course.lessons.len().to_string()} }
              td { if course.rating > 0.0 { "★ {course.rating:.1}" } else { "—" } }
              td { "${course.price}" }
            }
          }
        }
      }
    }
  }
}
