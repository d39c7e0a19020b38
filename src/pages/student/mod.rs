mod assignments;
mod courses;
mod dashboard;

pub use assignments::StudentAssignments;
pub use courses::{StudentCourse, StudentCourses};
pub use dashboard::StudentDashboard;

use dioxus::prelude::*;
use crate::{
  components::{feedback::EmptyState, inbox::Inbox, settings_panel::SettingsPanel},
  config,
  i18n::{tr, use_language},
  mock::{models::{Assignment, Role, Student}, MockStore},
};

/// The demo student and the assignments of their courses.
fn demo_student(store: &MockStore) -> Option<(&Student, Vec<Assignment>)> {
  let student = store.student(config::demo_student_id())?;
  let assignments = store.assignments
    .iter()
    .filter(|a| student.course_ids.contains(&a.course_id))
    .cloned()
    .collect();
  Some((student, assignments))
}

#[component]
fn MissingStudent() -> Element {
  let lang = use_language()();
  rsx! { EmptyState { text: tr(lang, "common.empty") } }
}

#[component]
pub fn StudentMessages() -> Element {
  rsx! { Inbox {} }
}

#[component]
pub fn StudentSettings() -> Element {
  let (name, email) = crate::mock::store()
    .ok()
    .and_then(|s| s.student(config::demo_student_id()))
    .map(|s| (s.name.clone(), s.email.clone()))
    .unwrap_or_default();
  rsx! { SettingsPanel { role: Role::Student, name, email } }
}
