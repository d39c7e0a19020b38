use dioxus::{logger::tracing::info, prelude::*};
use crate::{
  components::{feedback::{EmptyState, ErrorState}, widgets::{course_status_class, Badge}},
  i18n::{tr, use_language},
  mock::{self, models::{Course, CourseStatus}},
  utils::filters::{self, ALL},
};

/// Moderation decision on a course. Only courses awaiting review can change.
fn moderate(courses: &mut [Course], id: u32, decision: CourseStatus) -> bool {
  match courses.iter_mut().find(|c| c.id == id) {
    Some(c) if c.status == CourseStatus::PendingReview => {
      c.status = decision;
      true
    }
    _ => false,
  }
}

#[component]
pub fn CuratorCourses() -> Element {
  let lang = use_language()();
  let mut status = use_signal(|| Some(CourseStatus::PendingReview));
  let mut courses: Signal<Vec<Course>> = use_signal(|| mock::store().map(|s| s.courses.clone()).unwrap_or_default());
  let store = match mock::store() {
    Ok(s) => s,
    Err(e) => return rsx! { ErrorState { message: e.to_string() } },
  };

  let rows: Vec<_> = filters::by_course_status(&courses.read(), status())
    .into_iter()
    .map(|c| {
      let author = store.teacher(c.teacher_id).map(|u| u.name.clone()).unwrap_or_default();
      (c, author)
    })
    .collect();
  let current = status().map_or(ALL, |s| s.slug());

  rsx! {
    div {
      class: "page-header",
      h1 { {tr(lang, "nav.moderation")} }
      div {
        class: "toolbar",
        select {
          class: "form-input",
          onchange: move |evt: FormEvent| status.set(CourseStatus::from_slug(&evt.value())),
          option { value: ALL, selected: current == ALL, {tr(lang, "common.all")} }
          for s in CourseStatus::all().iter().copied() {
            option { key: "{s:?}", value: s.slug(), selected: current == s.slug(), {tr(lang, s.label_key())} }
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
            th { scope: "col", {tr(lang, "assignment.course")} }
            th { scope: "col", {tr(lang, "role.teacher")} }
            th { scope: "col", {tr(lang, "course.lessons")} }
            th { scope: "col", {tr(lang, "course.price")} }
            th { scope: "col", {tr(lang, "common.status")} }
            th { scope: "col", {tr(lang, "common.actions")} }
          }
        }
        tbody {
          for (course, author) in rows {
            tr {
              key: "m{course.id}",
              td {
                div { "{course.title}" }
                div { class: "muted", "{course.category}" }
              }
              td { "{author}" }
              td { {course.lessons.len().to_string()} }
              td { "${course.price}" }
              td { Badge { tone: course_status_class(course.status), text: tr(lang, course.status.label_key()) } }
              td {
                if course.status == CourseStatus::PendingReview {
                  div {
                    class: "row-actions",
                    button {
                      class: "button button-primary",
                      onclick: move |_| {
                        if moderate(&mut courses.write(), course.id, CourseStatus::Published) {
                          info!("course {} approved", course.id);
                        }
                      },
                      {tr(lang, "moderation.approve")}
                    }
                    button {
                      class: "button button-danger",
                      onclick: move |_| {
                        if moderate(&mut courses.write(), course.id, CourseStatus::Rejected) {
                          info!("course {} rejected", course.id);
                        }
                      },
                      {tr(lang, "moderation.reject")}
                    }
                  }
                } else {
                  span { class: "muted", "—" }
                }
              }
            }
          }
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::mock::MockStore;

  #[test]
  fn only_pending_courses_are_moderated() {
    let mut courses = MockStore::load().unwrap().courses;
    let pending = courses.iter().find(|c| c.status == CourseStatus::PendingReview).unwrap().id;
    let published = courses.iter().find(|c| c.status == CourseStatus::Published).unwrap().id;

    assert!(moderate(&mut courses, pending, CourseStatus::Rejected));
    assert_eq!(courses.iter().find(|c| c.id == pending).unwrap().status, CourseStatus::Rejected);
    assert!(!moderate(&mut courses, pending, CourseStatus::Published));
    assert!(!moderate(&mut courses, published, CourseStatus::Rejected));
    assert!(!moderate(&mut courses, 999, CourseStatus::Published));
  }
}
