use dioxus::prelude::*;
use crate::{
  components::feedback::{EmptyState, ErrorState},
  i18n::{tr, use_language},
  mock,
  utils::filters::{post_tags, search_posts},
  Route,
};

#[component]
pub fn Blog() -> Element {
  static CSS: Asset = asset!("/assets/blog.css");
  let lang = use_language()();
  let mut query = use_signal(String::new);
  let mut tag: Signal<Option<String>> = use_signal(|| None);

  let store = match mock::store() {
    Ok(s) => s,
    Err(e) => return rsx! { ErrorState { message: e.to_string() } },
  };

  let tags = post_tags(&store.posts);
  let active_tag = tag();
  let posts: Vec<_> = search_posts(&store.posts, &query(), active_tag.as_deref()).into_iter().cloned().collect();
  let by = tr(lang, "blog.by");

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "blog-page",
      div {
        class: "page-header",
        h1 { {tr(lang, "blog.title")} }
        p { class: "page-subtitle", {tr(lang, "blog.subtitle")} }
      }
      div {
        class: "toolbar",
        input {
          class: "form-input search-input",
          r#type: "search",
          placeholder: tr(lang, "common.search"),
          value: "{query}",
          oninput: move |evt| query.set(evt.value()),
        }
        div {
          class: "tag-list",
          button {
            class: if active_tag.is_none() { "tag active" } else { "tag" },
            onclick: move |_| tag.set(None),
            {tr(lang, "blog.all_tags")}
          }
          for t in tags {
            button {
              key: "{t}",
              class: if active_tag.as_ref() == Some(&t) { "tag active" } else { "tag" },
              onclick: {
                let t = t.clone();
                move |_| tag.set(Some(t.clone()))
              },
              "#{t}"
            }
          }
        }
      }
      if posts.is_empty() {
        EmptyState { text: tr(lang, "blog.empty") }
      }
      div {
        class: "post-list",
        for post in posts {
          article {
            key: "{post.slug}",
            class: "post-card",
            h2 {
              Link { to: Route::BlogPost { slug: post.slug.clone() }, "{post.title}" }
            }
            p { class: "post-meta", "{post.published} · {by} {post.author}" }
            p { "{post.excerpt}" }
            Link {
              class: "read-more",
              to: Route::BlogPost { slug: post.slug.clone() },
              {tr(lang, "blog.read_more")}
              " →"
            }
          }
        }
      }
    }
  }
}

#[component]
pub fn BlogPost(slug: String) -> Element {
  static CSS: Asset = asset!("/assets/blog.css");
  let lang = use_language()();

  let store = match mock::store() {
    Ok(s) => s,
    Err(e) => return rsx! { ErrorState { message: e.to_string() } },
  };
  let by = tr(lang, "blog.by");

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "blog-page",
      Link { class: "back-link", to: Route::Blog {}, "← " {tr(lang, "blog.back")} }
      {match store.post(&slug) {
        Some(post) => rsx! {
          article {
            class: "post",
            h1 { "{post.title}" }
            p { class: "post-meta", "{post.published} · {by} {post.author}" }
            div {
              class: "tag-list",
              for t in post.tags.iter() {
                span { key: "{t}", class: "tag", "#{t}" }
              }
            }
            for (idx, paragraph) in post.body.iter().enumerate() {
              p { key: "p{idx}", "{paragraph}" }
            }
          }
        },
        None => rsx! {
          EmptyState { text: tr(lang, "blog.not_found") }
        }
      }}
    }
  }
}
