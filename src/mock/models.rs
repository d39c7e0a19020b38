use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
  Student,
  Teacher,
  Curator,
}

impl Role {
  pub fn all() -> &'static [Role] {
    &[Role::Student, Role::Teacher, Role::Curator]
  }

  pub fn label_key(self) -> &'static str {
    match self {
      Role::Student => "role.student",
      Role::Teacher => "role.teacher",
      Role::Curator => "role.curator",
    }
  }

  pub fn title_key(self) -> &'static str {
    match self {
      Role::Student => "role.student.title",
      Role::Teacher => "role.teacher.title",
      Role::Curator => "role.curator.title",
    }
  }

  /// Stable identifier used as a `<select>` value.
  pub fn slug(self) -> &'static str {
    match self {
      Role::Student => "student",
      Role::Teacher => "teacher",
      Role::Curator => "curator",
    }
  }

  pub fn from_slug(slug: &str) -> Option<Self> {
    Role::all().iter().copied().find(|role| role.slug() == slug)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseLevel {
  Beginner,
  Intermediate,
  Advanced,
}

impl CourseLevel {
  pub fn label_key(self) -> &'static str {
    match self {
      CourseLevel::Beginner => "level.beginner",
      CourseLevel::Intermediate => "level.intermediate",
      CourseLevel::Advanced => "level.advanced",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
  Published,
  Draft,
  PendingReview,
  Rejected,
}

impl CourseStatus {
  pub fn all() -> &'static [CourseStatus] {
    &[CourseStatus::Published, CourseStatus::Draft, CourseStatus::PendingReview, CourseStatus::Rejected]
  }

  pub fn label_key(self) -> &'static str {
    match self {
      CourseStatus::Published => "course.status.published",
      CourseStatus::Draft => "course.status.draft",
      CourseStatus::PendingReview => "course.status.pending_review",
      CourseStatus::Rejected => "course.status.rejected",
    }
  }

  pub fn slug(self) -> &'static str {
    match self {
      CourseStatus::Published => "published",
      CourseStatus::Draft => "draft",
      CourseStatus::PendingReview => "pending_review",
      CourseStatus::Rejected => "rejected",
    }
  }

  pub fn from_slug(slug: &str) -> Option<Self> {
    CourseStatus::all().iter().copied().find(|status| status.slug() == slug)
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Lesson {
  pub title: String,
  pub duration_min: u32,
  pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
  pub id: u32,
  pub title: String,
  pub category: String,
  pub level: CourseLevel,
  pub teacher_id: u32,
  pub status: CourseStatus,
  pub price: Decimal,
  pub rating: f32,
  pub enrolled: u32,
  pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Student {
  pub id: u32,
  pub name: String,
  pub email: String,
  pub course_ids: Vec<u32>,
  /// Overall progress in percent.
  pub progress: u8,
  pub average_grade: f32,
  pub last_active: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
  Pending,
  Submitted,
  Graded,
  Overdue,
}

impl AssignmentStatus {
  pub fn all() -> &'static [AssignmentStatus] {
    &[AssignmentStatus::Pending, AssignmentStatus::Submitted, AssignmentStatus::Graded, AssignmentStatus::Overdue]
  }

  pub fn label_key(self) -> &'static str {
    match self {
      AssignmentStatus::Pending => "assignment.status.pending",
      AssignmentStatus::Submitted => "assignment.status.submitted",
      AssignmentStatus::Graded => "assignment.status.graded",
      AssignmentStatus::Overdue => "assignment.status.overdue",
    }
  }

  /// Still expects work from the student.
  pub fn is_open(self) -> bool {
    matches!(self, AssignmentStatus::Pending | AssignmentStatus::Overdue)
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Assignment {
  pub id: u32,
  pub course_id: u32,
  pub title: String,
  /// ISO date, `YYYY-MM-DD`
  pub due: String,
  pub status: AssignmentStatus,
  pub grade: Option<u8>,
  pub max_grade: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Submission {
  pub id: u32,
  pub assignment_id: u32,
  pub student_id: u32,
  pub submitted_at: String,
  pub grade: Option<u8>,
  pub max_grade: u8,
}

impl Submission {
  pub fn is_reviewed(&self) -> bool {
    self.grade.is_some()
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
  pub id: u32,
  pub role: Role,
  pub from: String,
  pub subject: String,
  pub body: String,
  pub sent_at: String,
  pub read: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlogPost {
  pub slug: String,
  pub title: String,
  pub author: String,
  pub published: String,
  pub tags: Vec<String>,
  pub excerpt: String,
  pub body: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricingPlan {
  pub id: u32,
  pub name_key: String,
  pub monthly_price: Decimal,
  pub feature_keys: Vec<String>,
  #[serde(default)]
  pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
  pub id: u32,
  pub name: String,
  pub email: String,
  pub role: Role,
  pub active: bool,
  pub joined: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityPoint {
  pub day_key: String,
  pub minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RevenuePoint {
  pub month: String,
  pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Analytics {
  pub weekly_activity: Vec<ActivityPoint>,
  pub monthly_revenue: Vec<RevenuePoint>,
}
