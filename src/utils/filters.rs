use std::cmp::Ordering;

use crate::mock::models::{Assignment, AssignmentStatus, BlogPost, Course, CourseStatus, Role, Student, Submission, User};

/// Value of the "all" option in filter selects.
pub const ALL: &str = "all";

fn contains_ci(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(needle)
}

fn normalize(query: &str) -> String {
  query.trim().to_lowercase()
}

pub fn search_posts<'a>(posts: &'a [BlogPost], query: &str, tag: Option<&str>) -> Vec<&'a BlogPost> {
  let query = normalize(query);
  let mut found: Vec<&BlogPost> = posts
    .iter()
    .filter(|p| tag.map_or(true, |t| p.tags.iter().any(|pt| pt == t)))
    .filter(|p| query.is_empty() || contains_ci(&p.title, &query) || contains_ci(&p.excerpt, &query))
    .collect();
  // newest first
  found.sort_by(|a, b| b.published.cmp(&a.published));
  found
}

/// All distinct tags in first-seen order.
pub fn post_tags(posts: &[BlogPost]) -> Vec<String> {
  let mut tags: Vec<String> = vec![];
  for tag in posts.iter().flat_map(|p| p.tags.iter()) {
    if !tags.contains(tag) {
      tags.push(tag.clone());
    }
  }
  tags
}

/// Distinct categories of the given courses, sorted.
pub fn categories(courses: &[Course]) -> Vec<String> {
  let mut found: Vec<String> = courses.iter().map(|c| c.category.clone()).collect();
  found.sort();
  found.dedup();
  found
}

/// Courses in `category`, or all of them for `None`.
pub fn by_category(courses: Vec<Course>, category: Option<&str>) -> Vec<Course> {
  match category {
    Some(category) => courses.into_iter().filter(|c| c.category == category).collect(),
    None => courses,
  }
}

pub fn by_course_status(courses: &[Course], status: Option<CourseStatus>) -> Vec<Course> {
  courses.iter().filter(|c| status.map_or(true, |s| c.status == s)).cloned().collect()
}

pub fn by_assignment_status(assignments: &[Assignment], status: Option<AssignmentStatus>) -> Vec<Assignment> {
  let mut found: Vec<Assignment> = assignments
    .iter()
    .filter(|a| status.map_or(true, |s| a.status == s))
    .cloned()
    .collect();
  found.sort_by(|a, b| a.due.cmp(&b.due));
  found
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewFilter {
  Awaiting,
  Reviewed,
}

impl ReviewFilter {
  pub fn slug(self) -> &'static str {
    match self {
      ReviewFilter::Awaiting => "awaiting",
      ReviewFilter::Reviewed => "reviewed",
    }
  }

  pub fn from_slug(slug: &str) -> Option<Self> {
    match slug {
      "awaiting" => Some(ReviewFilter::Awaiting),
      "reviewed" => Some(ReviewFilter::Reviewed),
      _ => None,
    }
  }
}

/// Submissions matching the filter, oldest first so the queue is worked in order.
pub fn review_queue(submissions: &[Submission], filter: Option<ReviewFilter>) -> Vec<Submission> {
  let mut found: Vec<Submission> = submissions
    .iter()
    .filter(|s| match filter {
      Some(ReviewFilter::Awaiting) => !s.is_reviewed(),
      Some(ReviewFilter::Reviewed) => s.is_reviewed(),
      None => true,
    })
    .cloned()
    .collect();
  found.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at));
  found
}

pub fn search_users(users: &[User], query: &str, role: Option<Role>) -> Vec<User> {
  let query = normalize(query);
  users
    .iter()
    .filter(|u| role.map_or(true, |r| u.role == r))
    .filter(|u| query.is_empty() || contains_ci(&u.name, &query) || contains_ci(&u.email, &query))
    .cloned()
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentSort {
  Name,
  Progress,
  Grade,
}

impl StudentSort {
  pub fn all() -> &'static [StudentSort] {
    &[StudentSort::Name, StudentSort::Progress, StudentSort::Grade]
  }

  pub fn slug(self) -> &'static str {
    match self {
      StudentSort::Name => "name",
      StudentSort::Progress => "progress",
      StudentSort::Grade => "grade",
    }
  }

  pub fn from_slug(slug: &str) -> Option<Self> {
    StudentSort::all().iter().copied().find(|s| s.slug() == slug)
  }

  pub fn label_key(self) -> &'static str {
    match self {
      StudentSort::Name => "students.name",
      StudentSort::Progress => "students.progress",
      StudentSort::Grade => "students.grade",
    }
  }
}

pub fn search_students(students: &[Student], query: &str, sort: StudentSort, descending: bool) -> Vec<Student> {
  let query = normalize(query);
  let mut found: Vec<Student> = students
    .iter()
    .filter(|s| query.is_empty() || contains_ci(&s.name, &query) || contains_ci(&s.email, &query))
    .cloned()
    .collect();
  found.sort_by(|a, b| {
    let ord = match sort {
      StudentSort::Name => a.name.cmp(&b.name),
      StudentSort::Progress => a.progress.cmp(&b.progress),
      StudentSort::Grade => a.average_grade.partial_cmp(&b.average_grade).unwrap_or(Ordering::Equal),
    };
    if descending { ord.reverse() } else { ord }
  });
  found
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::mock::MockStore;

  fn student(id: u32, name: &str, progress: u8, grade: f32) -> Student {
    Student {
      id,
      name: name.into(),
      email: format!("{}@example.com", name.to_lowercase()),
      course_ids: vec![1],
      progress,
      average_grade: grade,
      last_active: "2026-10-01".into(),
    }
  }

  #[test]
  fn posts_search_is_case_insensitive_and_newest_first() {
    let store = MockStore::load().unwrap();
    let all = search_posts(&store.posts, "", None);
    assert_eq!(all.len(), store.posts.len());
    assert!(all.windows(2).all(|w| w[0].published >= w[1].published));

    let found = search_posts(&store.posts, "  ORDER BOOK ", None);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].slug, "reading-the-order-book");

    let risk = search_posts(&store.posts, "", Some("risk"));
    assert!(risk.iter().all(|p| p.tags.iter().any(|t| t == "risk")));
    assert!(search_posts(&store.posts, "no such words anywhere", None).is_empty());
  }

  #[test]
  fn tags_are_unique() {
    let store = MockStore::load().unwrap();
    let tags = post_tags(&store.posts);
    let mut deduped = tags.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(tags.len(), deduped.len());
  }

  #[test]
  fn category_filter_keeps_all_for_none() {
    let store = MockStore::load().unwrap();
    assert_eq!(by_category(store.courses.clone(), None).len(), store.courses.len());
    let risk = by_category(store.courses.clone(), Some("Risk"));
    assert!(!risk.is_empty());
    assert!(risk.iter().all(|c| c.category == "Risk"));
    assert!(categories(&store.courses).windows(2).all(|w| w[0] < w[1]));
  }

  #[test]
  fn category_named_all_is_an_ordinary_category() {
    let mut courses = MockStore::load().unwrap().courses;
    courses[0].category = ALL.to_string();
    let found = by_category(courses.clone(), Some(ALL));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, courses[0].id);
  }

  #[test]
  fn tag_named_all_is_an_ordinary_tag() {
    let mut posts = MockStore::load().unwrap().posts;
    posts[0].tags.push(ALL.to_string());
    let tagged = search_posts(&posts, "", Some(ALL));
    assert_eq!(tagged.len(), 1);
    assert_eq!(tagged[0].slug, posts[0].slug);
    assert!(post_tags(&posts).iter().any(|t| t == ALL));
    assert_eq!(search_posts(&posts, "", None).len(), posts.len());
  }

  #[test]
  fn review_queue_splits_by_grade() {
    let store = MockStore::load().unwrap();
    let awaiting = review_queue(&store.submissions, Some(ReviewFilter::Awaiting));
    let reviewed = review_queue(&store.submissions, Some(ReviewFilter::Reviewed));
    assert_eq!(awaiting.len() + reviewed.len(), store.submissions.len());
    assert!(awaiting.iter().all(|s| s.grade.is_none()));
    assert!(awaiting.windows(2).all(|w| w[0].submitted_at <= w[1].submitted_at));
  }

  #[test]
  fn students_sort_both_directions() {
    let students = vec![student(1, "Cleo", 40, 80.0), student(2, "Abe", 90, 60.0), student(3, "Bea", 10, 95.0)];
    let names = |v: Vec<Student>| v.into_iter().map(|s| s.name).collect::<Vec<_>>();
    assert_eq!(names(search_students(&students, "", StudentSort::Name, false)), ["Abe", "Bea", "Cleo"]);
    assert_eq!(names(search_students(&students, "", StudentSort::Progress, true)), ["Abe", "Cleo", "Bea"]);
    assert_eq!(names(search_students(&students, "", StudentSort::Grade, true)), ["Bea", "Cleo", "Abe"]);
    assert_eq!(names(search_students(&students, "bea@", StudentSort::Name, false)), ["Bea"]);
  }

  #[test]
  fn users_filter_by_role_and_query() {
    let store = MockStore::load().unwrap();
    let teachers = search_users(&store.users, "", Some(Role::Teacher));
    assert!(!teachers.is_empty());
    assert!(teachers.iter().all(|u| u.role == Role::Teacher));
    assert_eq!(search_users(&store.users, "", None).len(), store.users.len());
    let found = search_users(&store.users, "petrova", None);
    assert_eq!(found.len(), 1);
  }

  #[test]
  fn slugs_round_trip_through_selects() {
    for &sort in StudentSort::all() {
      assert_eq!(StudentSort::from_slug(sort.slug()), Some(sort));
    }
    assert_eq!(ReviewFilter::from_slug(ALL), None);
  }
}
