use dioxus::prelude::*;
use rust_decimal::Decimal;
use crate::{
  components::feedback::ErrorState,
  config,
  i18n::{tr, use_language},
  mock,
  utils::pricing::{quote, Billing},
  Route,
};

#[component]
pub fn Pricing() -> Element {
  static CSS: Asset = asset!("/assets/pricing.css");
  let lang = use_language()();
  let mut billing = use_signal(|| Billing::Monthly);

  let store = match mock::store() {
    Ok(s) => s,
    Err(e) => return rsx! { ErrorState { message: e.to_string() } },
  };

  let discount = config::annual_discount_percent();
  let period = tr(lang, match billing() {
    Billing::Monthly => "pricing.per_month",
    Billing::Annual => "pricing.per_year",
  });
  let save_label = tr(lang, "pricing.save");
  let discount_note = tr(lang, "pricing.discount_note");
  let plans: Vec<_> = store.plans
    .iter()
    .map(|plan| (plan, quote(plan.monthly_price, billing(), discount)))
    .collect();

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "pricing-page",
      div {
        class: "page-header center",
        h1 { {tr(lang, "pricing.title")} }
        p { class: "page-subtitle", {tr(lang, "pricing.subtitle")} }
      }
      div {
        class: "billing-toggle",
        button {
          class: if billing() == Billing::Monthly { "tab active" } else { "tab" },
          onclick: move |_| billing.set(Billing::Monthly),
          {tr(lang, "pricing.monthly")}
        }
        button {
          class: if billing() == Billing::Annual { "tab active" } else { "tab" },
          onclick: move |_| billing.set(Billing::Annual),
          {tr(lang, "pricing.annual")}
        }
        span { class: "discount-note", "−{discount}% {discount_note}" }
      }
      div {
        class: "plan-grid",
        for (plan, q) in plans {
          div {
            key: "plan{plan.id}",
            class: if plan.highlighted { "plan-card highlighted" } else { "plan-card" },
            if plan.highlighted {
              span { class: "plan-ribbon", {tr(lang, "pricing.popular")} }
            }
            h2 { {tr(lang, &plan.name_key)} }
            div {
              class: "plan-price",
              span { class: "plan-amount", "${q.amount}" }
              span { class: "plan-period", " {period}" }
            }
            if q.savings > Decimal::ZERO {
              p { class: "plan-savings", "{save_label} ${q.savings}" }
            }
            ul {
              class: "plan-features",
              for feature in plan.feature_keys.iter() {
                li { key: "{feature}", "✓ " {tr(lang, feature)} }
              }
            }
            Link {
              class: "cta-button",
              to: Route::StudentDashboard {},
              {tr(lang, "pricing.choose")}
            }
          }
        }
      }
    }
  }
}
