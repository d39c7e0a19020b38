#![allow(non_snake_case)]

use dioxus::prelude::*;
use crate::mock::models::{AssignmentStatus, CourseStatus};

#[component]
pub fn StatCard(icon: &'static str, label: String, value: String) -> Element {
  rsx! {
    div {
      class: "stat-card",
      span { class: "stat-icon", "{icon}" }
      div {
        class: "stat-content",
        label { "{label}" }
        span { class: "stat-value", "{value}" }
      }
    }
  }
}

#[component]
pub fn ProgressBar(percent: f64) -> Element {
  let width = percent.clamp(0.0, 100.0);
  rsx! {
    div {
      class: "progress",
      div {
        class: "progress-fill",
        width: "{width}%",
      }
      span { class: "progress-label", "{width:.0}%" }
    }
  }
}

pub fn course_status_class(status: CourseStatus) -> &'static str {
  match status {
    CourseStatus::Published => "badge badge-green",
    CourseStatus::Draft => "badge badge-grey",
    CourseStatus::PendingReview => "badge badge-amber",
    CourseStatus::Rejected => "badge badge-red",
  }
}

pub fn assignment_status_class(status: AssignmentStatus) -> &'static str {
  match status {
    AssignmentStatus::Pending => "badge badge-blue",
    AssignmentStatus::Submitted => "badge badge-amber",
    AssignmentStatus::Graded => "badge badge-green",
    AssignmentStatus::Overdue => "badge badge-red",
  }
}

#[component]
pub fn Badge(tone: &'static str, text: String) -> Element {
  rsx! {
    span { class: tone, "{text}" }
  }
}

/// Formats an optional grade as `17/20 (85%)`, or a dash when ungraded.
pub fn format_grade(grade: Option<u8>, max_grade: u8) -> String {
  match grade {
    Some(g) => {
      let pct = crate::utils::analytics::percentage(g as u32, max_grade as u32);
      format!("{}/{} ({}%)", g, max_grade, pct)
    }
    None => "—".to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn grades_format_with_percentage() {
    assert_eq!(format_grade(Some(17), 20), "17/20 (85%)");
    assert_eq!(format_grade(Some(1), 3), "1/3 (33.3%)");
    assert_eq!(format_grade(None, 20), "—");
  }
}
