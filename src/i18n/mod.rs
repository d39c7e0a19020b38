//! Bilingual UI labels.
//!
//! Labels are looked up by symbolic key in a read-only [`LabelTable`]. The
//! active [`Language`] is never global state: the app root provides a
//! `Signal<Language>` through context and render sites pass its value to
//! [`tr`] explicitly.

mod labels;

use std::collections::HashMap;
use std::sync::OnceLock;

use dioxus::prelude::*;

/// Supported languages. [`Language::English`] is the primary language and
/// the fallback for missing translations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
  #[default]
  English,
  Russian,
}

impl Language {
  pub const PRIMARY: Language = Language::English;

  pub fn all() -> &'static [Language] {
    &[Language::English, Language::Russian]
  }

  pub fn code(self) -> &'static str {
    match self {
      Language::English => "en",
      Language::Russian => "ru",
    }
  }

  /// Name of the language written in that language.
  pub fn native_name(self) -> &'static str {
    match self {
      Language::English => "English",
      Language::Russian => "Русский",
    }
  }

  /// Parses `en`, `RU`, `en-US`, `ru_RU.UTF-8` and similar tags.
  pub fn from_code(raw: &str) -> Option<Self> {
    let normalized = raw.trim().to_ascii_lowercase();
    let primary = normalized.split(['-', '_', '.']).next().unwrap_or("");
    match primary {
      "en" => Some(Language::English),
      "ru" => Some(Language::Russian),
      _ => None,
    }
  }
}

/// Mapping of (language, key) to display text. Built once, never mutated.
#[derive(Debug, Default)]
pub struct LabelTable {
  entries: HashMap<Language, HashMap<&'static str, &'static str>>,
}

impl LabelTable {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_language(mut self, language: Language, pairs: &[(&'static str, &'static str)]) -> Self {
    self.entries.entry(language).or_default().extend(pairs.iter().copied());
    self
  }

  /// The table compiled into the app, initialized on first use.
  pub fn builtin() -> &'static LabelTable {
    static TABLE: OnceLock<LabelTable> = OnceLock::new();
    TABLE.get_or_init(|| {
      LabelTable::new()
        .with_language(Language::English, labels::EN)
        .with_language(Language::Russian, labels::RU)
    })
  }

  fn lookup(&self, language: Language, key: &str) -> Option<&'static str> {
    self.entries.get(&language).and_then(|table| table.get(key)).copied()
  }

  /// Resolves `key` for `language`.
  ///
  /// Order: the requested language (if the entry is non-empty), then the
  /// primary language, then `key` itself. Never fails.
  pub fn resolve<'a>(&'a self, key: &'a str, language: Language) -> &'a str {
    self.lookup(language, key)
      .filter(|text| !text.is_empty())
      .or_else(|| self.lookup(Language::PRIMARY, key))
      .unwrap_or(key)
  }

  /// Keys present in the primary language but missing from `language`, sorted.
  pub fn missing_in(&self, language: Language) -> Vec<&'static str> {
    let Some(primary) = self.entries.get(&Language::PRIMARY) else {
      return Vec::new();
    };
    let mut missing: Vec<&'static str> = primary
      .keys()
      .copied()
      .filter(|key| self.lookup(language, key).is_none())
      .collect();
    missing.sort_unstable();
    missing
  }

  /// Keys of `language` that the primary language lacks, sorted. These can
  /// only ever render through their own table.
  pub fn unknown_in(&self, language: Language) -> Vec<&'static str> {
    let Some(table) = self.entries.get(&language) else {
      return Vec::new();
    };
    let mut unknown: Vec<&'static str> = table
      .keys()
      .copied()
      .filter(|key| self.lookup(Language::PRIMARY, key).is_none())
      .collect();
    unknown.sort_unstable();
    unknown
  }
}

/// Resolves `key` against the built-in table.
pub fn tr(language: Language, key: &str) -> String {
  LabelTable::builtin().resolve(key, language).to_string()
}

/// The active language signal provided by [`LanguageProvider`].
pub fn use_language() -> Signal<Language> {
  use_context::<Signal<Language>>()
}

#[component]
pub fn LanguageProvider(initial: Language, children: Element) -> Element {
  let language = use_signal(|| initial);
  use_context_provider(|| language);

  use_effect(move || {
    let code = language().code();
    if let Err(e) = crate::utils::dom::set_document_language(code) {
      dioxus::logger::tracing::error!("{}", e);
    }
  });

  rsx! { {children} }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn scenario() -> LabelTable {
    LabelTable::new()
      .with_language(Language::English, &[("home", "Home"), ("pricing", "Pricing"), ("blank", "Blank")])
      .with_language(Language::Russian, &[("home", "Главная"), ("blank", "")])
  }

  #[test]
  fn resolves_requested_language_first() {
    let table = scenario();
    assert_eq!(table.resolve("home", Language::Russian), "Главная");
    assert_eq!(table.resolve("home", Language::English), "Home");
  }

  #[test]
  fn falls_back_to_primary_then_key() {
    let table = scenario();
    assert_eq!(table.resolve("pricing", Language::Russian), "Pricing");
    assert_eq!(table.resolve("missing", Language::Russian), "missing");
    assert_eq!(table.resolve("missing", Language::English), "missing");
  }

  #[test]
  fn empty_translation_falls_back_to_primary() {
    assert_eq!(scenario().resolve("blank", Language::Russian), "Blank");
  }

  #[test]
  fn empty_table_returns_key() {
    let table = LabelTable::new();
    for &language in Language::all() {
      assert_eq!(table.resolve("nav.home", language), "nav.home");
    }
  }

  #[test]
  fn resolve_is_idempotent() {
    let table = scenario();
    for key in ["home", "pricing", "blank", "missing"] {
      for &language in Language::all() {
        assert_eq!(table.resolve(key, language), table.resolve(key, language));
      }
    }
  }

  #[test]
  fn audit_lists_untranslated_keys() {
    assert_eq!(scenario().missing_in(Language::Russian), vec!["pricing"]);
    assert!(scenario().missing_in(Language::English).is_empty());
  }

  #[test]
  fn audit_lists_keys_unknown_to_primary() {
    let table = scenario().with_language(Language::Russian, &[("stray", "Лишний"), ("astray", "Мимо")]);
    assert_eq!(table.unknown_in(Language::Russian), vec!["astray", "stray"]);
    assert!(table.unknown_in(Language::English).is_empty());
  }

  #[test]
  fn builtin_tables_are_complete() {
    let table = LabelTable::builtin();
    assert!(table.missing_in(Language::Russian).is_empty(), "{:?}", table.missing_in(Language::Russian));
    assert!(table.unknown_in(Language::Russian).is_empty(), "{:?}", table.unknown_in(Language::Russian));
  }

  #[test]
  fn builtin_tables_have_no_duplicate_keys() {
    for pairs in [labels::EN, labels::RU] {
      let mut keys: Vec<_> = pairs.iter().map(|(key, _)| *key).collect();
      let total = keys.len();
      keys.sort_unstable();
      keys.dedup();
      assert_eq!(keys.len(), total);
    }
  }

  #[test]
  fn parses_language_tags() {
    assert_eq!(Language::from_code("ru"), Some(Language::Russian));
    assert_eq!(Language::from_code(" EN-us "), Some(Language::English));
    assert_eq!(Language::from_code("ru_RU.UTF-8"), Some(Language::Russian));
    assert_eq!(Language::from_code("de"), None);
    assert_eq!(Language::from_code(""), None);
  }

  #[test]
  fn tr_uses_builtin_table() {
    assert_eq!(tr(Language::English, "nav.home"), "Home");
    assert_eq!(tr(Language::Russian, "nav.home"), "Главная");
    assert_eq!(tr(Language::Russian, "no.such.key"), "no.such.key");
  }
}
