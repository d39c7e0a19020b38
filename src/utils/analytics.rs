/* Display arithmetic for dashboards.
All percentages are rounded to one decimal place and are 0.0 for an empty whole. */

use rust_decimal::Decimal;

use crate::mock::models::{ActivityPoint, Assignment, Course, CourseStatus, RevenuePoint, Student, User};

pub fn percentage(part: u32, whole: u32) -> f64 {
  if whole == 0 {
    return 0.0;
  }
  round1(part as f64 * 100.0 / whole as f64)
}

fn round1(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}

pub fn average(values: impl IntoIterator<Item = f64>) -> Option<f64> {
  let (sum, count) = values.into_iter().fold((0.0, 0u32), |(sum, count), v| (sum + v, count + 1));
  (count > 0).then(|| sum / count as f64)
}

pub struct LessonSummary {
  pub completed: u32,
  pub total: u32,
  pub completion: f64,
  pub total_minutes: u32,
}

pub fn lesson_summary(course: &Course) -> LessonSummary {
  let completed = course.lessons.iter().filter(|l| l.completed).count() as u32;
  let total = course.lessons.len() as u32;
  LessonSummary {
    completed,
    total,
    completion: percentage(completed, total),
    total_minutes: course.lessons.iter().map(|l| l.duration_min).sum(),
  }
}

/// Mean lesson completion over a set of courses.
pub fn average_completion(courses: &[&Course]) -> f64 {
  average(courses.iter().map(|c| lesson_summary(c).completion)).map(round1).unwrap_or(0.0)
}

/// Grade as a share of the maximum, `None` for ungraded work.
pub fn grade_percent(grade: Option<u8>, max_grade: u8) -> Option<f64> {
  grade.map(|g| percentage(g as u32, max_grade as u32))
}

/// Mean of graded assignments, in percent.
pub fn average_grade(assignments: &[Assignment]) -> Option<f64> {
  average(assignments.iter().filter_map(|a| grade_percent(a.grade, a.max_grade))).map(round1)
}

/// Mean grade of students that have one. Zero means not graded yet.
pub fn class_average(students: &[&Student]) -> Option<f64> {
  average(students.iter().filter(|s| s.average_grade > 0.0).map(|s| s.average_grade as f64)).map(round1)
}

pub fn open_assignments(assignments: &[Assignment]) -> usize {
  assignments.iter().filter(|a| a.status.is_open()).count()
}

/// Open assignments, earliest due date first.
pub fn upcoming(assignments: &[Assignment]) -> Vec<Assignment> {
  let mut open: Vec<Assignment> = assignments.iter().filter(|a| a.status.is_open()).cloned().collect();
  open.sort_by(|a, b| a.due.cmp(&b.due));
  open
}

pub fn average_rating(courses: &[Course]) -> Option<f64> {
  average(courses.iter().filter(|c| c.rating > 0.0).map(|c| c.rating as f64)).map(round1)
}

pub fn total_minutes(points: &[ActivityPoint]) -> u32 {
  points.iter().map(|p| p.minutes).sum()
}

pub fn total_revenue(points: &[RevenuePoint]) -> Decimal {
  points.iter().map(|p| p.amount).sum()
}

pub fn active_share(users: &[User]) -> f64 {
  let active = users.iter().filter(|u| u.active).count() as u32;
  percentage(active, users.len() as u32)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformStats {
  pub published: usize,
  /// Seats taken across courses, not distinct students.
  pub enrollments: u32,
  pub rating: f64,
}

pub fn platform_stats(courses: &[Course]) -> PlatformStats {
  PlatformStats {
    published: courses.iter().filter(|c| c.status == CourseStatus::Published).count(),
    enrollments: courses.iter().map(|c| c.enrolled).sum(),
    rating: average_rating(courses).unwrap_or(0.0),
  }
}

pub struct CourseReportRow {
  pub course_id: u32,
  pub title: String,
  pub enrolled: u32,
  pub rating: f32,
  pub lessons: usize,
  pub share: f64,
}

/// Per-course enrollment report, largest enrollment first.
pub fn course_report(courses: &[Course]) -> Vec<CourseReportRow> {
  let total: u32 = courses.iter().map(|c| c.enrolled).sum();
  let mut rows: Vec<CourseReportRow> = courses
    .iter()
    .map(|c| CourseReportRow {
      course_id: c.id,
      title: c.title.clone(),
      enrolled: c.enrolled,
      rating: c.rating,
      lessons: c.lessons.len(),
      share: percentage(c.enrolled, total),
    })
    .collect();
  rows.sort_by(|a, b| b.enrolled.cmp(&a.enrolled).then(a.course_id.cmp(&b.course_id)));
  rows
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::mock::models::{AssignmentStatus, CourseLevel, Lesson};
  use rust_decimal_macros::dec;

  fn course(id: u32, done: &[bool], enrolled: u32, rating: f32) -> Course {
    Course {
      id,
      title: format!("course {}", id),
      category: "Risk".into(),
      level: CourseLevel::Beginner,
      teacher_id: 1,
      status: CourseStatus::Published,
      price: dec!(10),
      rating,
      enrolled,
      lessons: done
        .iter()
        .map(|&completed| Lesson { title: "l".into(), duration_min: 10, completed })
        .collect(),
    }
  }

  fn assignment(id: u32, due: &str, status: AssignmentStatus, grade: Option<u8>) -> Assignment {
    Assignment { id, course_id: 1, title: format!("a{}", id), due: due.into(), status, grade, max_grade: 20 }
  }

  #[test]
  fn percentage_rounds_and_handles_zero() {
    assert_eq!(percentage(1, 3), 33.3);
    assert_eq!(percentage(2, 3), 66.7);
    assert_eq!(percentage(5, 5), 100.0);
    assert_eq!(percentage(3, 0), 0.0);
  }

  #[test]
  fn lesson_summary_counts_completed() {
    let summary = lesson_summary(&course(1, &[true, true, false, false], 0, 0.0));
    assert_eq!((summary.completed, summary.total), (2, 4));
    assert_eq!(summary.completion, 50.0);
    assert_eq!(summary.total_minutes, 40);
  }

  #[test]
  fn average_completion_over_courses() {
    let a = course(1, &[true, false], 0, 0.0);
    let b = course(2, &[true, true, true, true], 0, 0.0);
    assert_eq!(average_completion(&[&a, &b]), 75.0);
    assert_eq!(average_completion(&[]), 0.0);
  }

  #[test]
  fn grades_ignore_ungraded_work() {
    let items = vec![
      assignment(1, "2026-10-01", AssignmentStatus::Graded, Some(18)),
      assignment(2, "2026-10-02", AssignmentStatus::Graded, Some(15)),
      assignment(3, "2026-10-03", AssignmentStatus::Pending, None),
    ];
    assert_eq!(average_grade(&items), Some(82.5));
    assert_eq!(average_grade(&items[2..]), None);
    assert_eq!(grade_percent(None, 20), None);
  }

  #[test]
  fn upcoming_sorts_open_work_by_due_date() {
    let items = vec![
      assignment(1, "2026-10-29", AssignmentStatus::Pending, None),
      assignment(2, "2026-10-14", AssignmentStatus::Overdue, None),
      assignment(3, "2026-10-01", AssignmentStatus::Graded, Some(10)),
      assignment(4, "2026-10-21", AssignmentStatus::Submitted, None),
    ];
    let ids: Vec<u32> = upcoming(&items).iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(open_assignments(&items), 2);
  }

  #[test]
  fn report_shares_sum_to_whole() {
    let courses = vec![course(1, &[true], 300, 4.0), course(2, &[true], 100, 5.0), course(3, &[true], 0, 0.0)];
    let rows = course_report(&courses);
    assert_eq!(rows.iter().map(|r| r.course_id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(rows[0].share, 75.0);
    assert_eq!(rows[1].share, 25.0);
    assert_eq!(rows[2].share, 0.0);
    assert_eq!(average_rating(&courses), Some(4.5));
  }

  #[test]
  fn revenue_and_activity_totals() {
    let revenue = vec![
      RevenuePoint { month: "2026-09".into(), amount: dec!(100.50) },
      RevenuePoint { month: "2026-10".into(), amount: dec!(200.25) },
    ];
    assert_eq!(total_revenue(&revenue), dec!(300.75));
    let activity = vec![
      ActivityPoint { day_key: "day.mon".into(), minutes: 30 },
      ActivityPoint { day_key: "day.tue".into(), minutes: 45 },
    ];
    assert_eq!(total_minutes(&activity), 75);
  }

  #[test]
  fn platform_stats_count_enrollments_not_students() {
    let mut draft = course(3, &[false], 7, 0.0);
    draft.status = CourseStatus::Draft;
    let courses = vec![course(1, &[true], 120, 4.0), course(2, &[false], 30, 5.0), draft];
    let stats = platform_stats(&courses);
    assert_eq!(stats.published, 2);
    assert_eq!(stats.enrollments, 157);
    assert_eq!(stats.rating, 4.5);
    assert_eq!(platform_stats(&[]), PlatformStats { published: 0, enrollments: 0, rating: 0.0 });
  }
}
