use std::fmt;

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  MockDataError(String),
  ChartRenderError(String),
  DomError(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::MockDataError(msg) => write!(f, "Mock data error: {}", msg),
      AppError::ChartRenderError(msg) => write!(f, "Chart render error: {}", msg),
      AppError::DomError(msg) => write!(f, "DOM error: {}", msg),
    }
  }
}
