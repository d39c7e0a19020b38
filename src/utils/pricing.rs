use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Billing {
  Monthly,
  Annual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
  pub amount: Decimal,
  /// Compared to paying monthly for a year. Zero for monthly billing.
  pub savings: Decimal,
}

fn cents(value: Decimal) -> Decimal {
  value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Price of a plan for the chosen billing period.
pub fn quote(monthly_price: Decimal, billing: Billing, discount_percent: Decimal) -> Quote {
  match billing {
    Billing::Monthly => Quote { amount: cents(monthly_price), savings: Decimal::ZERO },
    Billing::Annual => {
      let full_year = monthly_price * dec!(12);
      let discount = discount_percent.clamp(Decimal::ZERO, dec!(100));
      let amount = cents(full_year * (dec!(100) - discount) / dec!(100));
      Quote { amount, savings: cents(full_year) - amount }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn monthly_is_unchanged() {
    assert_eq!(quote(dec!(39.00), Billing::Monthly, dec!(20)), Quote { amount: dec!(39.00), savings: Decimal::ZERO });
  }

  #[test]
  fn annual_applies_discount() {
    let q = quote(dec!(39.00), Billing::Annual, dec!(20));
    assert_eq!(q.amount, dec!(374.40));
    assert_eq!(q.savings, dec!(93.60));
  }

  #[test]
  fn annual_rounds_to_cents() {
    // 19.99 * 12 = 239.88, 15% off = 203.898
    let q = quote(dec!(19.99), Billing::Annual, dec!(15));
    assert_eq!(q.amount, dec!(203.90));
    assert_eq!(q.savings, dec!(35.98));
  }

  #[test]
  fn discount_outside_range_is_clamped() {
    assert_eq!(quote(dec!(10), Billing::Annual, dec!(0)).amount, dec!(120));
    assert_eq!(quote(dec!(10), Billing::Annual, dec!(150)).amount, Decimal::ZERO);
  }
}
