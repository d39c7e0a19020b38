use dioxus::prelude::*;
use crate::{
  components::{feedback::{EmptyState, ErrorState}, widgets::ProgressBar},
  i18n::{tr, use_language},
  mock,
  utils::{analytics, filters},
  Route,
};
use super::{demo_student, MissingStudent};

#[component]
pub fn StudentCourses() -> Element {
  let lang = use_language()();
  let mut category: Signal<Option<String>> = use_signal(|| None);
  let store = match mock::store() {
    Ok(s) => s,
    Err(e) => return rsx! { ErrorState { message: e.to_string() } },
  };
  let Some((student, _)) = demo_student(store) else {
    return rsx! { MissingStudent {} };
  };

  let enrolled: Vec<_> = store.courses_of_student(student).into_iter().cloned().collect();
  let categories = filters::categories(&enrolled);
  let choices = categories.clone();
  let active = category();
  let shown: Vec<_> = filters::by_category(enrolled, active.as_deref())
    .into_iter()
    .map(|course| {
      let summary = analytics::lesson_summary(&course);
      (course, summary)
    })
    .collect();
  let lessons_label = tr(lang, "course.lessons");

  rsx! {
    div {
      class: "page-header",
      h1 { {tr(lang, "nav.courses")} }
      div {
        class: "toolbar",
        label { class: "form-label", r#for: "category-filter", {tr(lang, "course.category")} }
        select {
          id: "category-filter",
          class: "form-input",
          // option values index into the category list, empty means all
          onchange: move |evt: FormEvent| {
            category.set(evt.value().parse::<usize>().ok().and_then(|i| choices.get(i).cloned()));
          },
          option { value: "", selected: active.is_none(), {tr(lang, "common.all")} }
          for (idx, c) in categories.iter().enumerate() {
            option { key: "{c}", value: "{idx}", selected: active.as_ref() == Some(c), "{c}" }
          }
        }
      }
    }
    if shown.is_empty() {
      EmptyState { text: tr(lang, "common.empty") }
    }
    div {
      class: "card-grid",
      for (course, summary) in shown {
        div {
          key: "course{course.id}",
          class: "course-card",
          span { class: "course-category", "{course.category}" }
          h3 { "{course.title}" }
          p { class: "muted", {tr(lang, course.level.label_key())} " · {summary.total} {lessons_label}" }
          ProgressBar { percent: summary.completion }
          Link { class: "panel-link", to: Route::StudentCourse { id: course.id }, {tr(lang, "course.open")} " →" }
        }
      }
    }
  }
}

#[component]
pub fn StudentCourse(id: u32) -> Element {
  let lang = use_language()();
  let store = match mock::store() {
    Ok(s) => s,
    Err(e) => return rsx! { ErrorState { message: e.to_string() } },
  };

  let Some(course) = store.course(id) else {
    return rsx! {
      Link { class: "back-link", to: Route::StudentCourses {}, "← " {tr(lang, "course.back")} }
      EmptyState { text: tr(lang, "course.not_found") }
    };
  };

  let summary = analytics::lesson_summary(course);
  let minutes = tr(lang, "common.minutes");

  rsx! {
    Link { class: "back-link", to: Route::StudentCourses {}, "← " {tr(lang, "course.back")} }
    div {
      class: "page-header",
      h1 { "{course.title}" }
      span { class: "page-subtitle", "{course.category} · " {tr(lang, course.level.label_key())} }
    }
    div {
      class: "stat-grid",
      div {
        class: "stat-card",
        label { {tr(lang, "course.completed")} }
        span { class: "stat-value", "{summary.completed}/{summary.total}" }
      }
      div {
        class: "stat-card",
        label { {tr(lang, "course.total_time")} }
        span { class: "stat-value", "{summary.total_minutes} {minutes}" }
      }
      div {
        class: "stat-card",
        label { {tr(lang, "course.progress")} }
        ProgressBar { percent: summary.completion }
      }
    }
    div {
      class: "panel",
      h3 { {tr(lang, "course.lessons")} }
      ol {
        class: "lesson-list",
        for (idx, lesson) in course.lessons.iter().enumerate() {
          li {
            key: "lesson{idx}",
            class: if lesson.completed { "lesson done" } else { "lesson" },
            span { class: "lesson-mark", if lesson.completed { "✓" } else { "○" } }
            span { class: "lesson-title", "{lesson.title}" }
            span { class: "lesson-duration", "{lesson.duration_min} {minutes}" }
          }
        }
      }
    }
  }
}
