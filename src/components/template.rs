use dioxus::prelude::*;
use crate::{components::language_switch::LanguageSwitch, config, i18n::{tr, use_language}, Route};

#[component]
pub fn Template() -> Element {
  static CSS: Asset = asset!("/assets/template.css");

  rsx! {
    document::Stylesheet {href: CSS},
    Header { }
    main {
      class: "site-main",
      Outlet::<Route> {}
    }
    Footer { }
  }
}


#[component]
fn Header() -> Element {
  let lang = use_language()();
  let mut menu_open = use_signal(|| false);
  let links_class = if menu_open() { "nav-links open" } else { "nav-links" };
  let brand = config::APP_NAME;

  rsx!{
    nav {
      div {
        class: "nav-container",
        Link {
          class: "logo",
          to: Route::Home { },
          "{brand}",
        }
        button {
          class: "menu-button",
          onclick: move |_| menu_open.set(!menu_open()),
          span {
            class: "menu-icon",
            svg {
              class: "menu-icon-svg",
              xmlns: "http://www.w3.org/2000/svg",
              view_box: "0 0 24 24",
              path {
                d: "M6 12H18",
                stroke: "currentcolor",
                stroke_linecap: "round"
              }
              path {
                d: "M6 15.5H18",
                stroke: "currentcolor",
                stroke_linecap: "round"
              }
              path {
                d: "M6 8.5H18",
                stroke: "currentcolor",
                stroke_linecap: "round"
              }
            }
          }
        },
        div {
          class: links_class,
          onclick: move |_| menu_open.set(false),
          Link {
            active_class: "nav-active",
            to: Route::Blog { },
            {tr(lang, "nav.blog")}
          },
          Link {
            active_class: "nav-active",
            to: Route::Pricing { },
            {tr(lang, "nav.pricing")}
          },
          Link {
            to: Route::StudentDashboard { },
            {tr(lang, "nav.student_demo")}
          },
          Link {
            to: Route::TeacherDashboard { },
            {tr(lang, "nav.teacher_demo")}
          },
          Link {
            to: Route::CuratorDashboard { },
            {tr(lang, "nav.curator_demo")}
          },
          LanguageSwitch { }
        }
      }
    }
  }
}

#[component]
fn Footer() -> Element {
  let lang = use_language()();
  let holder = config::COPYRIGHT_HOLDER;
  let email = config::SUPPORT_EMAIL;
  let rights = tr(lang, "footer.rights");

  rsx!{
    footer {
      div {
        class: "footer-container",
        div {
          class: "copyright",
          p { "© 2026 {holder}. {rights}" }
          p { class: "tagline", {tr(lang, "app.tagline")} }
        },
        div {
          class: "social-links",
          a {
            href: "mailto:{email}",
            class: "social-link",
            title: tr(lang, "footer.support"),
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "24",
              height: "24",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              path {
                d: "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"
              }
              polyline {
                points: "22,6 12,13 2,6"
              }
            }
            span { "{email}" }
          }
        }
      }
    }
  }
}
