#![allow(non_snake_case)]
mod components;
mod config;
mod i18n;
mod mock;
mod pages;
mod utils;

use components::{sidebar::{CuratorLayout, StudentLayout, TeacherLayout}, template::Template};
use dioxus::{logger::tracing::{info, warn}, prelude::*};
use i18n::{tr, use_language, LabelTable, Language, LanguageProvider};
use pages::{
  blog::{Blog, BlogPost},
  curator::{CuratorCourses, CuratorDashboard, CuratorMessages, CuratorReports, CuratorSettings, CuratorUsers},
  home::Home,
  pricing::Pricing,
  student::{StudentAssignments, StudentCourse, StudentCourses, StudentDashboard, StudentMessages, StudentSettings},
  teacher::{TeacherAssignments, TeacherCourses, TeacherDashboard, TeacherMessages, TeacherSettings, TeacherStudents},
};

#[derive(Routable, PartialEq, Clone)]
#[rustfmt::skip]
enum Route {
    #[layout(Template)]
        #[route("/")]
        Home {},
        #[route("/blog")]
        Blog {},
        #[route("/blog/:slug")]
        BlogPost { slug: String },
        #[route("/pricing")]
        Pricing {},
    #[end_layout]

    #[nest("/student")]
        #[layout(StudentLayout)]
            #[route("/")]
            StudentDashboard {},
            #[route("/courses")]
            StudentCourses {},
            #[route("/courses/:id")]
            StudentCourse { id: u32 },
            #[route("/assignments")]
            StudentAssignments {},
            #[route("/messages")]
            StudentMessages {},
            #[route("/settings")]
            StudentSettings {},
        #[end_layout]
    #[end_nest]

    #[nest("/teacher")]
        #[layout(TeacherLayout)]
            #[route("/")]
            TeacherDashboard {},
            #[route("/courses")]
            TeacherCourses {},
            #[route("/students")]
            TeacherStudents {},
            #[route("/assignments")]
            TeacherAssignments {},
            #[route("/messages")]
            TeacherMessages {},
            #[route("/settings")]
            TeacherSettings {},
        #[end_layout]
    #[end_nest]

    #[nest("/curator")]
        #[layout(CuratorLayout)]
            #[route("/")]
            CuratorDashboard {},
            #[route("/users")]
            CuratorUsers {},
            #[route("/courses")]
            CuratorCourses {},
            #[route("/reports")]
            CuratorReports {},
            #[route("/messages")]
            CuratorMessages {},
            #[route("/settings")]
            CuratorSettings {},
        #[end_layout]
    #[end_nest]

    #[route("/:..route")]
    PageNotFound { route: Vec<String> }
}

fn main() {
  dioxus::launch(App);
}

/// Logs primary-language keys that have no translation. Rendering falls back
/// to the primary text, so this never blocks startup.
fn audit_labels() {
  let table = LabelTable::builtin();
  for &language in Language::all().iter().filter(|&&l| l != Language::PRIMARY) {
    for key in table.missing_in(language) {
      warn!("label `{}` has no {} translation", key, language.code());
    }
    for key in table.unknown_in(language) {
      warn!("{} label `{}` has no primary text", language.code(), key);
    }
  }
  info!("starting {} with default language `{}`", config::APP_NAME, config::default_language().code());
}

fn App() -> Element {
  static CSS: Asset = asset!("/assets/main.css");
  let title = config::APP_NAME;
  use_hook(audit_labels);
  rsx! {
    document::Stylesheet { href: CSS },
    document::Script { src: "https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js" },
    document::Title { "{title}" },
    LanguageProvider {
      initial: config::default_language(),
      Router::<Route> {}
    }
  }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
  let lang = use_language()();
  let path = route.join("/");
  rsx! {
    div {
      class: "not-found",
      h1 { {tr(lang, "notfound.title")} }
      p { {tr(lang, "notfound.body")} }
      pre { class: "not-found-path", "/{path}" }
      Link { class: "cta-button", to: Route::Home {}, {tr(lang, "notfound.home")} }
    }
  }
}
