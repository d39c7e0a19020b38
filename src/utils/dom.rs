use web_sys::window;

use super::error::AppError;

/// Sets the `lang` attribute of the root `<html>` element.
pub fn set_document_language(code: &str) -> Result<(), AppError> {
  let root = window()
    .and_then(|w| w.document())
    .and_then(|d| d.document_element())
    .ok_or_else(|| AppError::DomError("document root element is not available".to_string()))?;

  root.set_attribute("lang", code).map_err(|e| AppError::DomError(format!("{:?}", e)))
}
