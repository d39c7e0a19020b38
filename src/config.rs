use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::i18n::Language;

/* Compile-time settings forwarded by build.rs (see .env.example) */
pub const APP_NAME: &str = env!("APP_NAME");
pub const SUPPORT_EMAIL: &str = env!("SUPPORT_EMAIL");
pub const COPYRIGHT_HOLDER: &str = env!("COPYRIGHT_HOLDER");
const DEFAULT_LANGUAGE: &str = env!("DEFAULT_LANGUAGE");
const ANNUAL_DISCOUNT_PERCENT: &str = env!("ANNUAL_DISCOUNT_PERCENT");
const DEMO_STUDENT_ID: &str = env!("DEMO_STUDENT_ID");
const DEMO_TEACHER_ID: &str = env!("DEMO_TEACHER_ID");

/// Language the app starts in. Unknown codes fall back to the primary language.
pub fn default_language() -> Language {
  Language::from_code(DEFAULT_LANGUAGE).unwrap_or_default()
}

/// Discount applied to annual billing, in percent. Clamped to 0..=100.
pub fn annual_discount_percent() -> Decimal {
  parse_discount(ANNUAL_DISCOUNT_PERCENT)
}

/// Student whose dashboard is shown in the demo.
pub fn demo_student_id() -> u32 {
  DEMO_STUDENT_ID.trim().parse().unwrap_or(1)
}

/// Teacher whose dashboard is shown in the demo.
pub fn demo_teacher_id() -> u32 {
  DEMO_TEACHER_ID.trim().parse().unwrap_or(1)
}

fn parse_discount(raw: &str) -> Decimal {
  raw.trim()
    .parse::<Decimal>()
    .map(|d| d.clamp(Decimal::ZERO, dec!(100)))
    .unwrap_or(dec!(20))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn discount_parses_and_clamps() {
    assert_eq!(parse_discount("15"), dec!(15));
    assert_eq!(parse_discount(" 12.5 "), dec!(12.5));
    assert_eq!(parse_discount("250"), dec!(100));
    assert_eq!(parse_discount("-3"), Decimal::ZERO);
    assert_eq!(parse_discount("lots"), dec!(20));
  }
}
