use dioxus::prelude::*;
use crate::{
  components::{feedback::ErrorState, plot::RevenueChart, widgets::{Badge, StatCard}},
  i18n::{tr, use_language},
  mock::{self, models::{CourseStatus, Role}},
  utils::analytics,
  Route,
};

#[component]
pub fn CuratorDashboard() -> Element {
  let lang = use_language()();
  let store = match mock::store() {
    Ok(s) => s,
    Err(e) => return rsx! { ErrorState { message: e.to_string() } },
  };

  let pending: Vec<_> = store.courses
    .iter()
    .filter(|c| c.status == CourseStatus::PendingReview)
    .map(|c| (c.id, c.title.clone(), c.category.clone()))
    .collect();
  let by_role: Vec<_> = Role::all()
    .iter()
    .map(|&r| (r, store.users.iter().filter(|u| u.role == r).count()))
    .collect();
  let active = analytics::active_share(&store.users);
  let revenue = analytics::total_revenue(&store.analytics.monthly_revenue);
  let points = store.analytics.monthly_revenue.clone();

  rsx! {
    div {
      class: "page-header",
      h1 { {tr(lang, "nav.dashboard")} }
    }
    div {
      class: "stat-grid",
      StatCard { icon: "☺", label: tr(lang, "stat.users"), value: store.users.len().to_string() }
      StatCard { icon: "◔", label: tr(lang, "stat.active_share"), value: format!("{}%", active) }
      StatCard { icon: "✓", label: tr(lang, "stat.pending_courses"), value: pending.len().to_string() }
      StatCard { icon: "$", label: tr(lang, "stat.revenue"), value: format!("${}", revenue) }
    }
    div {
      class: "dashboard-grid",
      div {
        class: "panel wide",
        RevenueChart { points }
      }
      div {
        class: "panel",
        h3 { {tr(lang, "stat.users")} }
        ul {
          class: "upcoming-list",
          for (role, count) in by_role {
            li {
              key: "{role:?}",
              div {
                class: "upcoming-meta",
                span { {tr(lang, role.label_key())} }
                span { class: "stat-value", "{count}" }
              }
            }
          }
        }
        Link { class: "panel-link", to: Route::CuratorUsers {}, {tr(lang, "nav.users")} " →" }
      }
      div {
        class: "panel",
        h3 { {tr(lang, "stat.pending_courses")} }
        if pending.is_empty() {
          p { class: "muted", {tr(lang, "common.empty")} }
        }
        ul {
          class: "upcoming-list",
          for (id, title, category) in pending {
            li {
              key: "p{id}",
              div { class: "upcoming-title", "{title}" }
              div {
                class: "upcoming-meta",
                span { "{category}" }
                Badge { tone: "badge badge-amber", text: tr(lang, CourseStatus::PendingReview.label_key()) }
              }
            }
          }
        }
        Link { class: "panel-link", to: Route::CuratorCourses {}, {tr(lang, "nav.moderation")} " →" }
      }
    }
  }
}
