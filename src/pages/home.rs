use dioxus::prelude::*;
use crate::{i18n::{tr, use_language}, mock, utils::analytics, Route};

#[component]
pub fn Home() -> Element {
  static CSS: Asset = asset!("/assets/home.css");
  let lang = use_language()();

  // hidden when mock data failed to decode
  let stats = mock::store().ok().map(|s| analytics::platform_stats(&s.courses));

  let features = [
    ("📈", "home.feature.courses.title", "home.feature.courses.body"),
    ("🧑‍🏫", "home.feature.mentors.title", "home.feature.mentors.body"),
    ("📊", "home.feature.analytics.title", "home.feature.analytics.body"),
  ];

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "home-page",
      section {
        class : "hero",
        h1 { {tr(lang, "home.hero.title")} },
        p { {tr(lang, "home.hero.subtitle")} },
        div {
          class: "hero-actions",
          Link {
            class: "cta-button",
            to: Route::Pricing { },
            {tr(lang, "home.cta.pricing")}
          }
          Link {
            class: "cta-button cta-secondary",
            to: Route::StudentDashboard { },
            {tr(lang, "home.cta.demo")}
          }
        }
      },
      section {
        class: "features",
        for (icon, title, body) in features {
          div {
            key: "{title}",
            class: "feature-card",
            h3 {
              class: "feature-card-title",
              span {"{icon}"}
              {tr(lang, title)}
            }
            p { {tr(lang, body)} }
          }
        }
      }
      {stats.map(|stats| rsx! {
        section {
          class: "platform-stats",
          div {
            class: "platform-stat",
            span { class: "platform-stat-value", "{stats.published}" }
            span { {tr(lang, "home.stats.courses")} }
          }
          div {
            class: "platform-stat",
            span { class: "platform-stat-value", "{stats.enrollments}" }
            span { {tr(lang, "home.stats.enrollments")} }
          }
          div {
            class: "platform-stat",
            span { class: "platform-stat-value", "{stats.rating:.1}" }
            span { {tr(lang, "home.stats.rating")} }
          }
        }
      })}
    }
  }
}
