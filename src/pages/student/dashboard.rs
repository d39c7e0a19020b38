use dioxus::prelude::*;
use crate::{
  components::{feedback::ErrorState, plot::ActivityChart, widgets::{assignment_status_class, Badge, ProgressBar, StatCard}},
  i18n::{tr, use_language},
  mock,
  utils::analytics,
  Route,
};
use super::{demo_student, MissingStudent};

#[component]
pub fn StudentDashboard() -> Element {
  let lang = use_language()();
  let store = match mock::store() {
    Ok(s) => s,
    Err(e) => return rsx! { ErrorState { message: e.to_string() } },
  };
  let Some((student, assignments)) = demo_student(store) else {
    return rsx! { MissingStudent {} };
  };

  let courses = store.courses_of_student(student);
  let completion = analytics::average_completion(&courses);
  let avg_grade = analytics::average_grade(&assignments).map_or("—".to_string(), |g| format!("{}%", g));
  let open = analytics::open_assignments(&assignments);
  let upcoming: Vec<_> = analytics::upcoming(&assignments).into_iter().take(4).collect();
  let progress: Vec<_> = courses
    .iter()
    .map(|c| (c.id, c.title.clone(), analytics::lesson_summary(c).completion))
    .collect();
  let activity = store.analytics.weekly_activity.clone();
  let weekly_total = analytics::total_minutes(&activity);
  let minutes = tr(lang, "common.minutes");
  let name = &student.name;

  rsx! {
    div {
      class: "page-header",
      h1 { {tr(lang, "nav.dashboard")} }
      span { class: "page-subtitle", "{name}" }
    }
    div {
      class: "stat-grid",
      StatCard { icon: "▶", label: tr(lang, "stat.enrolled"), value: courses.len().to_string() }
      StatCard { icon: "◔", label: tr(lang, "stat.completion"), value: format!("{}%", completion) }
      StatCard { icon: "★", label: tr(lang, "stat.avg_grade"), value: avg_grade }
      StatCard { icon: "✎", label: tr(lang, "stat.pending"), value: open.to_string() }
    }
    div {
      class: "dashboard-grid",
      div {
        class: "panel wide",
        ActivityChart { points: activity }
        p { class: "panel-note", "Σ {weekly_total} {minutes}" }
      }
      div {
        class: "panel",
        h3 { {tr(lang, "student.upcoming")} }
        if upcoming.is_empty() {
          p { class: "muted", {tr(lang, "student.no_upcoming")} }
        }
        ul {
          class: "upcoming-list",
          for a in upcoming {
            li {
              key: "up{a.id}",
              div { class: "upcoming-title", "{a.title}" }
              div {
                class: "upcoming-meta",
                span { {tr(lang, "assignment.due")} ": {a.due}" }
                Badge { tone: assignment_status_class(a.status), text: tr(lang, a.status.label_key()) }
              }
            }
          }
        }
        Link { class: "panel-link", to: Route::StudentAssignments {}, {tr(lang, "nav.assignments")} " →" }
      }
      div {
        class: "panel",
        h3 { {tr(lang, "student.progress")} }
        for (id, title, pct) in progress {
          div {
            key: "prog{id}",
            class: "progress-row",
            Link { to: Route::StudentCourse { id }, "{title}" }
            ProgressBar { percent: pct }
          }
        }
      }
    }
  }
}
