mod courses;
mod dashboard;
mod reports;
mod users;

pub use courses::CuratorCourses;
pub use dashboard::CuratorDashboard;
pub use reports::CuratorReports;
pub use users::CuratorUsers;

use dioxus::prelude::*;
use crate::{
  components::{inbox::Inbox, settings_panel::SettingsPanel},
  mock::{self, models::Role},
};

#[component]
pub fn CuratorMessages() -> Element {
  rsx! { Inbox {} }
}

#[component]
pub fn CuratorSettings() -> Element {
  let (name, email) = mock::store()
    .ok()
    .and_then(|s| s.users.iter().find(|u| u.role == Role::Curator))
    .map(|u| (u.name.clone(), u.email.clone()))
    .unwrap_or_default();
  rsx! { SettingsPanel { role: Role::Curator, name, email } }
}
