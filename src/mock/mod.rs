//! Static sample data bundled into the binary.
//!
//! Every file under `data/` is decoded once into a read-only [`MockStore`].
//! Pages that edit records (grading, moderation) copy them into their own
//! signals first.

pub mod models;

use std::sync::OnceLock;

use dioxus::logger::tracing::{error, info};
use serde::de::DeserializeOwned;

use crate::utils::error::AppError;
use models::{Analytics, Assignment, BlogPost, Course, Message, PricingPlan, Role, Student, Submission, User};

const COURSES: &str = include_str!("../../data/courses.json");
const STUDENTS: &str = include_str!("../../data/students.json");
const ASSIGNMENTS: &str = include_str!("../../data/assignments.json");
const SUBMISSIONS: &str = include_str!("../../data/submissions.json");
const MESSAGES: &str = include_str!("../../data/messages.json");
const BLOG: &str = include_str!("../../data/blog.json");
const PLANS: &str = include_str!("../../data/plans.json");
const USERS: &str = include_str!("../../data/users.json");
const ANALYTICS: &str = include_str!("../../data/analytics.json");

#[derive(Debug, Clone, PartialEq)]
pub struct MockStore {
  pub courses: Vec<Course>,
  pub students: Vec<Student>,
  pub assignments: Vec<Assignment>,
  pub submissions: Vec<Submission>,
  pub messages: Vec<Message>,
  pub posts: Vec<BlogPost>,
  pub plans: Vec<PricingPlan>,
  pub users: Vec<User>,
  pub analytics: Analytics,
}

fn decode<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T, AppError> {
  serde_json::from_str(raw).map_err(|e| AppError::MockDataError(format!("{}: {}", name, e)))
}

impl MockStore {
  pub fn load() -> Result<Self, AppError> {
    Ok(Self {
      courses: decode("courses.json", COURSES)?,
      students: decode("students.json", STUDENTS)?,
      assignments: decode("assignments.json", ASSIGNMENTS)?,
      submissions: decode("submissions.json", SUBMISSIONS)?,
      messages: decode("messages.json", MESSAGES)?,
      posts: decode("blog.json", BLOG)?,
      plans: decode("plans.json", PLANS)?,
      users: decode("users.json", USERS)?,
      analytics: decode("analytics.json", ANALYTICS)?,
    })
  }

  pub fn course(&self, id: u32) -> Option<&Course> {
    self.courses.iter().find(|c| c.id == id)
  }

  pub fn student(&self, id: u32) -> Option<&Student> {
    self.students.iter().find(|s| s.id == id)
  }

  pub fn assignment(&self, id: u32) -> Option<&Assignment> {
    self.assignments.iter().find(|a| a.id == id)
  }

  pub fn post(&self, slug: &str) -> Option<&BlogPost> {
    self.posts.iter().find(|p| p.slug == slug)
  }

  pub fn courses_by_teacher(&self, teacher_id: u32) -> Vec<&Course> {
    self.courses.iter().filter(|c| c.teacher_id == teacher_id).collect()
  }

  /// Courses the student is enrolled in, in enrollment order.
  pub fn courses_of_student(&self, student: &Student) -> Vec<&Course> {
    student.course_ids.iter().filter_map(|id| self.course(*id)).collect()
  }

  /// Students enrolled in at least one of the teacher's courses.
  pub fn students_of_teacher(&self, teacher_id: u32) -> Vec<&Student> {
    let course_ids: Vec<u32> = self.courses_by_teacher(teacher_id).iter().map(|c| c.id).collect();
    self.students
      .iter()
      .filter(|s| s.course_ids.iter().any(|id| course_ids.contains(id)))
      .collect()
  }

  /// Submissions for assignments that belong to the teacher's courses.
  pub fn submissions_for_teacher(&self, teacher_id: u32) -> Vec<&Submission> {
    self.submissions
      .iter()
      .filter(|sub| {
        self.assignment(sub.assignment_id)
          .and_then(|a| self.course(a.course_id))
          .is_some_and(|c| c.teacher_id == teacher_id)
      })
      .collect()
  }

  /// Account of a course author. Teacher ids count teacher accounts in listing order, from 1.
  pub fn teacher(&self, teacher_id: u32) -> Option<&User> {
    let idx = teacher_id.checked_sub(1)? as usize;
    self.users.iter().filter(|u| u.role == Role::Teacher).nth(idx)
  }

  pub fn inbox(&self, role: Role) -> Vec<&Message> {
    self.messages.iter().filter(|m| m.role == role).collect()
  }
}

/// The decoded store, shared for the lifetime of the app.
pub fn store() -> Result<&'static MockStore, AppError> {
  static STORE: OnceLock<Result<MockStore, AppError>> = OnceLock::new();
  STORE
    .get_or_init(|| {
      let loaded = MockStore::load();
      match &loaded {
        Ok(s) => info!(
          "mock data loaded: {} courses, {} students, {} assignments, {} posts, {} users",
          s.courses.len(),
          s.students.len(),
          s.assignments.len(),
          s.posts.len(),
          s.users.len()
        ),
        Err(e) => error!("{}", e),
      }
      loaded
    })
    .as_ref()
    .map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config;
  use crate::i18n::{Language, LabelTable};

  #[test]
  fn bundled_data_decodes() {
    let s = MockStore::load().expect("bundled mock data should decode");
    assert!(!s.courses.is_empty());
    assert!(!s.posts.is_empty());
    assert_eq!(s.plans.len(), 3);
    assert_eq!(s.analytics.weekly_activity.len(), 7);
  }

  #[test]
  fn references_point_at_existing_records() {
    let s = MockStore::load().unwrap();
    for course in &s.courses {
      assert!(!course.lessons.is_empty(), "course {} has no lessons", course.id);
    }
    for a in &s.assignments {
      assert!(s.course(a.course_id).is_some(), "assignment {} -> missing course", a.id);
      if let Some(grade) = a.grade {
        assert!(grade <= a.max_grade);
      }
    }
    for sub in &s.submissions {
      assert!(s.assignment(sub.assignment_id).is_some());
      assert!(s.student(sub.student_id).is_some());
    }
    for student in &s.students {
      assert_eq!(s.courses_of_student(student).len(), student.course_ids.len());
    }
  }

  #[test]
  fn demo_accounts_exist() {
    let s = MockStore::load().unwrap();
    assert!(s.student(config::demo_student_id()).is_some());
    assert!(!s.courses_by_teacher(config::demo_teacher_id()).is_empty());
  }

  #[test]
  fn label_keys_in_data_are_translated() {
    let s = MockStore::load().unwrap();
    let table = LabelTable::builtin();
    let keys = s.plans
      .iter()
      .flat_map(|p| std::iter::once(p.name_key.as_str()).chain(p.feature_keys.iter().map(String::as_str)))
      .chain(s.analytics.weekly_activity.iter().map(|p| p.day_key.as_str()));
    for key in keys {
      assert_ne!(table.resolve(key, Language::Russian), key, "untranslated key {}", key);
    }
  }

  #[test]
  fn teacher_views_only_see_their_courses() {
    let s = MockStore::load().unwrap();
    let subs = s.submissions_for_teacher(1);
    assert!(!subs.is_empty());
    for sub in subs {
      let course_id = s.assignment(sub.assignment_id).unwrap().course_id;
      assert_eq!(s.course(course_id).unwrap().teacher_id, 1);
    }
    assert!(s.students_of_teacher(1).iter().all(|st| st.course_ids.iter().any(|id| [1, 2, 5, 8].contains(id))));
    assert!(s.submissions_for_teacher(99).is_empty());
  }

  #[test]
  fn teacher_ids_map_to_teacher_accounts() {
    let s = MockStore::load().unwrap();
    assert_eq!(s.teacher(1).map(|u| u.name.as_str()), Some("Viktor Lebedev"));
    assert_eq!(s.teacher(3).map(|u| u.role), Some(Role::Teacher));
    assert!(s.teacher(0).is_none());
    assert!(s.teacher(4).is_none());
  }

  #[test]
  fn inbox_filters_by_role() {
    let s = MockStore::load().unwrap();
    for &role in Role::all() {
      assert!(s.inbox(role).iter().all(|m| m.role == role));
    }
  }
}
