use dioxus::prelude::*;
use crate::{
  components::{feedback::ErrorState, widgets::{course_status_class, Badge, StatCard}},
  config,
  i18n::{tr, use_language},
  mock,
  utils::{analytics, filters::{self, ReviewFilter}},
  Route,
};

#[component]
pub fn TeacherDashboard() -> Element {
  let lang = use_language()();
  let store = match mock::store() {
    Ok(s) => s,
    Err(e) => return rsx! { ErrorState { message: e.to_string() } },
  };
  let teacher_id = config::demo_teacher_id();

  let courses = store.courses_by_teacher(teacher_id);
  let students = store.students_of_teacher(teacher_id);
  let submissions: Vec<_> = store.submissions_for_teacher(teacher_id).into_iter().cloned().collect();
  let awaiting = filters::review_queue(&submissions, Some(ReviewFilter::Awaiting));
  let class_avg = analytics::class_average(&students).map_or("—".to_string(), |g| format!("{}%", g));
  let name = store.teacher(teacher_id).map(|u| u.name.clone()).unwrap_or_default();

  let queue: Vec<_> = awaiting
    .iter()
    .take(5)
    .map(|sub| {
      let student = store.student(sub.student_id).map(|s| s.name.clone()).unwrap_or_default();
      let title = store.assignment(sub.assignment_id).map(|a| a.title.clone()).unwrap_or_default();
      (sub.id, student, title, sub.submitted_at.clone())
    })
    .collect();
  let course_rows: Vec<_> = courses
    .iter()
    .map(|c| (c.id, c.title.clone(), c.status, c.enrolled))
    .collect();

  rsx! {
    div {
      class: "page-header",
      h1 { {tr(lang, "nav.dashboard")} }
      span { class: "page-subtitle", "{name}" }
    }
    div {
      class: "stat-grid",
      StatCard { icon: "▶", label: tr(lang, "stat.my_courses"), value: courses.len().to_string() }
      StatCard { icon: "☺", label: tr(lang, "stat.my_students"), value: students.len().to_string() }
      StatCard { icon: "✎", label: tr(lang, "stat.awaiting_review"), value: awaiting.len().to_string() }
      StatCard { icon: "★", label: tr(lang, "stat.class_grade"), value: class_avg }
    }
    div {
      class: "dashboard-grid",
      div {
        class: "panel",
        h3 { {tr(lang, "review.awaiting")} }
        if queue.is_empty() {
          p { class: "muted", {tr(lang, "common.empty")} }
        }
        ul {
          class: "upcoming-list",
          for (id, student, title, at) in queue {
            li {
              key: "q{id}",
              div { class: "upcoming-title", "{title}" }
              div { class: "upcoming-meta", span { "{student}" } span { "{at}" } }
            }
          }
        }
        Link { class: "panel-link", to: Route::TeacherAssignments {}, {tr(lang, "nav.assignments")} " →" }
      }
      div {
        class: "panel",
        h3 { {tr(lang, "stat.my_courses")} }
        ul {
          class: "upcoming-list",
          for (id, title, status, enrolled) in course_rows {
            li {
              key: "c{id}",
              div { class: "upcoming-title", "{title}" }
              div {
                class: "upcoming-meta",
                span { {tr(lang, "course.enrolled")} ": {enrolled}" }
                Badge { tone: course_status_class(status), text: tr(lang, status.label_key()) }
              }
            }
          }
        }
        Link { class: "panel-link", to: Route::TeacherCourses {}, {tr(lang, "nav.courses")} " →" }
      }
    }
  }
}
