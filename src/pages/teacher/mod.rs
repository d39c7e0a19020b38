mod assignments;
mod courses;
mod dashboard;
mod students;

pub use assignments::TeacherAssignments;
pub use courses::TeacherCourses;
pub use dashboard::TeacherDashboard;
pub use students::TeacherStudents;

use dioxus::prelude::*;
use crate::{
  components::{inbox::Inbox, settings_panel::SettingsPanel},
  config,
  mock::{self, models::Role},
};

#[component]
pub fn TeacherMessages() -> Element {
  rsx! { Inbox {} }
}

#[component]
pub fn TeacherSettings() -> Element {
  let (name, email) = mock::store()
    .ok()
    .and_then(|s| s.teacher(config::demo_teacher_id()))
    .map(|u| (u.name.clone(), u.email.clone()))
    .unwrap_or_default();
  rsx! { SettingsPanel { role: Role::Teacher, name, email } }
}
