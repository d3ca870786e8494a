// SPDX-License-Identifier: MIT

//! Internationalization: supported languages, text direction, and the
//! key/value translation catalog compiled in from Fluent-style files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Supported UI languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    /// Arabic is the site's primary audience and the startup default.
    #[default]
    Ar,
}

/// Text direction implied by the selected language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Language {
    /// BCP 47-style language tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Native display name, as shown in the language switcher.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Language::En => Direction::Ltr,
            Language::Ar => Direction::Rtl,
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Ar]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Direction {
    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

/// Translation catalog: per-language key/value pairs with Arabic fallback.
///
/// Injectable rather than global so view code and tests can hold their own
/// instance without process-wide state.
pub struct Catalog {
    current: Language,
    translations: HashMap<Language, HashMap<String, String>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        let mut translations = HashMap::new();
        for lang in Language::all() {
            translations.insert(*lang, parse_ftl(ftl_content(*lang)));
        }
        Self {
            current: Language::default(),
            translations,
        }
    }

    pub fn language(&self) -> Language {
        self.current
    }

    pub fn set_language(&mut self, lang: Language) {
        self.current = lang;
    }

    /// Look up a key in the current language, falling back to Arabic (the
    /// catalog's primary language) and finally to the key itself.
    pub fn t(&self, key: &str) -> String {
        if let Some(value) = self.lookup(self.current, key) {
            return value;
        }
        if self.current != Language::Ar {
            if let Some(value) = self.lookup(Language::Ar, key) {
                return value;
            }
        }
        key.to_string()
    }

    /// Look up a key and substitute `{ $name }` placeholders.
    pub fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut result = self.t(key);
        for (name, value) in args {
            result = result.replace(&format!("{{ ${} }}", name), value);
            result = result.replace(&format!("{{${}}}", name), value);
        }
        result
    }

    fn lookup(&self, lang: Language, key: &str) -> Option<String> {
        self.translations.get(&lang)?.get(key).cloned()
    }
}

fn ftl_content(lang: Language) -> &'static str {
    match lang {
        Language::En => include_str!("locales/en/main.ftl"),
        Language::Ar => include_str!("locales/ar/main.ftl"),
    }
}

/// Parse the `key = value` subset of Fluent used by the bundled catalogs.
fn parse_ftl(content: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ftl_skips_comments_and_blanks() {
        let parsed = parse_ftl("# comment\n\nkey-a = Value A\n  key-b =  Spaced  \n");

        assert_eq!(parsed.get("key-a").map(String::as_str), Some("Value A"));
        assert_eq!(parsed.get("key-b").map(String::as_str), Some("Spaced"));
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn direction_follows_language() {
        assert_eq!(Language::Ar.direction(), Direction::Rtl);
        assert_eq!(Language::En.direction(), Direction::Ltr);
        assert!(Language::Ar.direction().is_rtl());
    }

    #[test]
    fn t_args_substitutes_placeholders() {
        let mut catalog = Catalog::new();
        catalog.set_language(Language::En);

        let text = catalog.t_args("contact-name-error", &[("min", "2")]);

        assert!(text.contains('2'), "substituted text: {text}");
        assert!(!text.contains("$min"));
    }

    #[test]
    fn default_language_is_arabic() {
        assert_eq!(Language::default(), Language::Ar);
        assert_eq!(Catalog::new().language(), Language::Ar);
    }

    #[test]
    fn translate_switches_language_and_falls_back() {
        let mut catalog = Catalog::new();
        catalog.set_language(Language::En);
        let en = catalog.t("contact-title");

        catalog.set_language(Language::Ar);
        let ar = catalog.t("contact-title");

        assert_ne!(en, "contact-title");
        assert_ne!(ar, "contact-title");
        assert_ne!(en, ar);

        // Unknown keys come back verbatim.
        assert_eq!(catalog.t("no-such-key"), "no-such-key");
    }

    #[test]
    fn catalogs_define_the_same_keys() {
        let en = parse_ftl(ftl_content(Language::En));
        let ar = parse_ftl(ftl_content(Language::Ar));

        let mut en_keys: Vec<_> = en.keys().collect();
        let mut ar_keys: Vec<_> = ar.keys().collect();
        en_keys.sort();
        ar_keys.sort();

        assert_eq!(en_keys, ar_keys);
    }
}
