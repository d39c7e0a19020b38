pub mod blog;
pub mod curator;
pub mod home;
pub mod pricing;
pub mod student;
pub mod teacher;
