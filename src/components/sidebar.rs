use dioxus::prelude::*;
use crate::{
  components::{feedback::ErrorState, language_switch::LanguageSwitch},
  i18n::{tr, use_language},
  mock::{self, models::{Message, Role}},
  Route,
};

pub struct NavItem {
  pub label_key: &'static str,
  pub icon: &'static str,
  pub to: Route,
  /// Shows the unread message badge.
  pub inbox: bool,
}

impl NavItem {
  fn new(label_key: &'static str, icon: &'static str, to: Route) -> Self {
    Self { label_key, icon, to, inbox: false }
  }

  fn inbox(to: Route) -> Self {
    Self { label_key: "nav.messages", icon: "✉", to, inbox: true }
  }
}

/// Sidebar entries for a role, top to bottom.
pub fn nav_items(role: Role) -> Vec<NavItem> {
  match role {
    Role::Student => vec![
      NavItem::new("nav.dashboard", "▦", Route::StudentDashboard {}),
      NavItem::new("nav.courses", "▶", Route::StudentCourses {}),
      NavItem::new("nav.assignments", "✎", Route::StudentAssignments {}),
      NavItem::inbox(Route::StudentMessages {}),
      NavItem::new("nav.settings", "⚙", Route::StudentSettings {}),
    ],
    Role::Teacher => vec![
      NavItem::new("nav.dashboard", "▦", Route::TeacherDashboard {}),
      NavItem::new("nav.courses", "▶", Route::TeacherCourses {}),
      NavItem::new("nav.students", "☺", Route::TeacherStudents {}),
      NavItem::new("nav.assignments", "✎", Route::TeacherAssignments {}),
      NavItem::inbox(Route::TeacherMessages {}),
      NavItem::new("nav.settings", "⚙", Route::TeacherSettings {}),
    ],
    Role::Curator => vec![
      NavItem::new("nav.dashboard", "▦", Route::CuratorDashboard {}),
      NavItem::new("nav.users", "☺", Route::CuratorUsers {}),
      NavItem::new("nav.moderation", "✓", Route::CuratorCourses {}),
      NavItem::new("nav.reports", "☷", Route::CuratorReports {}),
      NavItem::inbox(Route::CuratorMessages {}),
      NavItem::new("nav.settings", "⚙", Route::CuratorSettings {}),
    ],
  }
}

/// Inbox of the current dashboard, shared by the sidebar badge and the messages page.
#[derive(Clone, Copy)]
pub struct InboxState {
  pub messages: Signal<Vec<Message>>,
}

impl InboxState {
  pub fn unread(&self) -> usize {
    self.messages.read().iter().filter(|m| !m.read).count()
  }
}

#[component]
pub fn StudentLayout() -> Element {
  rsx! { DashboardShell { role: Role::Student } }
}

#[component]
pub fn TeacherLayout() -> Element {
  rsx! { DashboardShell { role: Role::Teacher } }
}

#[component]
pub fn CuratorLayout() -> Element {
  rsx! { DashboardShell { role: Role::Curator } }
}

#[component]
fn DashboardShell(role: Role) -> Element {
  static CSS: Asset = asset!("/assets/dashboard.css");
  let lang = use_language()();

  let inbox = use_context_provider(|| InboxState {
    messages: Signal::new(
      mock::store()
        .map(|s| s.inbox(role).into_iter().cloned().collect())
        .unwrap_or_default(),
    ),
  });
  let unread = inbox.unread();

  let content = match mock::store() {
    Ok(_) => rsx! { Outlet::<Route> {} },
    Err(e) => rsx! { ErrorState { message: e.to_string() } },
  };

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "dashboard",
      aside {
        class: "sidebar",
        div {
          class: "sidebar-header",
          span { class: "sidebar-role", {tr(lang, role.label_key())} }
          h2 { class: "sidebar-title", {tr(lang, role.title_key())} }
        }
        nav {
          class: "sidebar-nav",
          for (idx, item) in nav_items(role).into_iter().enumerate() {
            Link {
              key: "nav{idx}",
              class: "sidebar-link",
              active_class: "sidebar-active",
              to: item.to,
              span { class: "sidebar-icon", "{item.icon}" }
              span { class: "sidebar-label", {tr(lang, item.label_key)} }
              if item.inbox && unread > 0 {
                span { class: "sidebar-badge", "{unread}" }
              }
            }
          }
        }
        div {
          class: "sidebar-footer",
          LanguageSwitch { }
          Link {
            class: "sidebar-back",
            to: Route::Home {},
            "← "
            {tr(lang, "common.back_to_site")}
          }
        }
      }
      section {
        class: "dashboard-content",
        {content}
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::i18n::{LabelTable, Language};

  #[test]
  fn every_role_has_dashboard_messages_and_settings() {
    for &role in Role::all() {
      let items = nav_items(role);
      assert_eq!(items[0].label_key, "nav.dashboard");
      assert_eq!(items.iter().filter(|i| i.inbox).count(), 1);
      assert_eq!(items.last().map(|i| i.label_key), Some("nav.settings"));
    }
  }

  #[test]
  fn nav_labels_are_translated() {
    let table = LabelTable::builtin();
    for &role in Role::all() {
      let keys = nav_items(role).into_iter().map(|i| i.label_key).chain([role.label_key(), role.title_key()]);
      for key in keys {
        for &language in Language::all() {
          assert_ne!(table.resolve(key, language), key);
        }
      }
    }
  }

  #[test]
  fn nav_routes_stay_inside_the_role_tree() {
    for &role in Role::all() {
      let prefix = format!("/{}", role.slug());
      for item in nav_items(role) {
        assert!(item.to.to_string().starts_with(&prefix), "{} outside {}", item.to, prefix);
      }
    }
  }
}
