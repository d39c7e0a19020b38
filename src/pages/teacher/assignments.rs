use dioxus::{logger::tracing::info, prelude::*};
use crate::{
  components::{feedback::{EmptyState, ErrorState}, widgets::format_grade},
  config,
  i18n::{tr, use_language},
  mock::{self, models::Submission},
  utils::filters::{self, ReviewFilter},
};

/// Parses a grade typed by the teacher, clamped to `0..=max_grade`.
/// Non-numeric input yields `None`.
fn parse_grade(raw: &str, max_grade: u8) -> Option<u8> {
  let value: i128 = raw.trim().parse().ok()?;
  Some(value.clamp(0, max_grade as i128) as u8)
}

#[component]
pub fn TeacherAssignments() -> Element {
  let lang = use_language()();
  let mut filter = use_signal(|| Some(ReviewFilter::Awaiting));
  let queue: Signal<Vec<Submission>> = use_signal(|| {
    mock::store()
      .map(|s| s.submissions_for_teacher(config::demo_teacher_id()).into_iter().cloned().collect())
      .unwrap_or_default()
  });
  let store = match mock::store() {
    Ok(s) => s,
    Err(e) => return rsx! { ErrorState { message: e.to_string() } },
  };

  let rows: Vec<_> = filters::review_queue(&queue.read(), filter())
    .into_iter()
    .map(|sub| {
      let student = store.student(sub.student_id).map(|s| s.name.clone()).unwrap_or_default();
      let title = store.assignment(sub.assignment_id).map(|a| a.title.clone()).unwrap_or_default();
      (sub, student, title)
    })
    .collect();
  let choices = [
    (ReviewFilter::Awaiting.slug(), "review.awaiting"),
    (ReviewFilter::Reviewed.slug(), "review.reviewed"),
    (filters::ALL, "common.all"),
  ];
  let current = filter().map_or(filters::ALL, |f| f.slug());

  rsx! {
    div {
      class: "page-header",
      h1 { {tr(lang, "nav.assignments")} }
      div {
        class: "tabs",
        for (slug, key) in choices {
          button {
            key: "{slug}",
            class: if current == slug { "tab active" } else { "tab" },
            onclick: move |_| filter.set(ReviewFilter::from_slug(slug)),
            {tr(lang, key)}
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
            th { scope: "col", {tr(lang, "review.student")} }
            th { scope: "col", {tr(lang, "assignment.title")} }
            th { scope: "col", {tr(lang, "review.submitted_at")} }
            th { scope: "col", {tr(lang, "assignment.grade")} }
            th { scope: "col", {tr(lang, "common.actions")} }
          }
        }
        tbody {
          for (sub, student, title) in rows {
            GradeRow { key: "sub{sub.id}", submission: sub, student, title, queue }
          }
        }
      }
    }
  }
}

#[component]
fn GradeRow(submission: Submission, student: String, title: String, mut queue: Signal<Vec<Submission>>) -> Element {
  let lang = use_language()();
  let mut draft = use_signal(|| submission.grade.map(|g| g.to_string()).unwrap_or_default());
  let id = submission.id;
  let max_grade = submission.max_grade;
  let parsed = parse_grade(&draft(), max_grade);

  rsx! {
    tr {
      td { "{student}" }
      td { "{title}" }
      td { "{submission.submitted_at}" }
      td { {format_grade(submission.grade, max_grade)} }
      td {
        div {
          class: "grade-form",
          input {
            class: "form-input grade-input",
            r#type: "number",
            min: "0",
            max: "{max_grade}",
            value: "{draft}",
            oninput: move |evt| draft.set(evt.value()),
          }
          span { class: "muted", "/ {max_grade}" }
          button {
            class: "button button-primary",
            disabled: parsed.is_none(),
            onclick: move |_| {
              let Some(grade) = parsed else { return };
              if let Some(sub) = queue.write().iter_mut().find(|s| s.id == id) {
                sub.grade = Some(grade);
              }
              info!("submission {} graded {}/{}", id, grade, max_grade);
            },
            {tr(lang, "review.submit")}
          }
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn grades_are_parsed_and_clamped() {
    assert_eq!(parse_grade("17", 20), Some(17));
    assert_eq!(parse_grade(" 8 ", 10), Some(8));
    assert_eq!(parse_grade("0", 20), Some(0));
    assert_eq!(parse_grade("35", 20), Some(20));
    assert_eq!(parse_grade("-2", 20), Some(0));
    assert_eq!(parse_grade("99999999999", 20), Some(20));
    assert_eq!(parse_grade("-99999999999", 10), Some(0));
  }

  #[test]
  fn non_numeric_grades_are_rejected() {
    assert_eq!(parse_grade("", 20), None);
    assert_eq!(parse_grade("nine", 20), None);
    assert_eq!(parse_grade("7.5", 20), None);
  }
}
