use once_cell::sync::Lazy;
use std::collections::HashMap;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Languages the form can be displayed in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum Language {
    #[default]
    #[strum(serialize = "en")]
    English,
    #[strum(serialize = "id")]
    Indonesian,
}

impl Language {
    /// The language tag sent as `Accept-Language` and used by the translation provider.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Indonesian => "id",
        }
    }
}

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub language: Language,
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
    /// Translation key of the language's name in the selector.
    pub label_key: &'static str,
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "en",
            LanguageInfo {
                language: Language::English,
                code: "en",
                flag: "🇺🇸",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
                label_key: "english",
            },
        ),
        (
            "id",
            LanguageInfo {
                language: Language::Indonesian,
                code: "id",
                flag: "🇮🇩",
                translation: include_str!("../translations/id.json"),
                native_name: "Bahasa Indonesia",
                label_key: "indonesian",
            },
        ),
    ])
}

/// Supported languages in selector order.
pub fn ordered_languages() -> Vec<LanguageInfo> {
    let supported = supported_languages();
    Language::iter()
        .filter_map(|language| supported.get(language.code()).cloned())
        .collect()
}

static CATALOGS: Lazy<HashMap<Language, HashMap<String, String>>> = Lazy::new(|| {
    supported_languages()
        .into_values()
        .map(|info| {
            let catalog: HashMap<String, String> = serde_json::from_str(info.translation)
                .unwrap_or_else(|err| {
                    log::error!("translation catalog for {} is invalid: {err}", info.code);
                    HashMap::new()
                });
            (info.language, catalog)
        })
        .collect()
});

/// Looks up `key` for `language`, falling back to English and then to the key itself.
///
/// Used where no translation provider is in scope, such as the document title.
pub fn translate(language: Language, key: &str) -> String {
    [language, Language::English]
        .iter()
        .find_map(|lang| CATALOGS.get(lang).and_then(|catalog| catalog.get(key)))
        .cloned()
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use test_case::test_case;

    const REQUIRED_KEYS: [&str; 6] = [
        "signUp",
        "username",
        "email",
        "password",
        "passwordRepeat",
        "passwordMismatch",
    ];

    #[test]
    fn test_every_language_defines_required_keys() {
        for language in Language::iter() {
            let catalog = CATALOGS.get(&language).unwrap();
            for key in REQUIRED_KEYS {
                assert!(
                    catalog.contains_key(key),
                    "{} is missing {key}",
                    language.code()
                );
            }
        }
    }

    #[test]
    fn test_catalogs_share_the_same_keys() {
        let english = CATALOGS.get(&Language::English).unwrap();
        let indonesian = CATALOGS.get(&Language::Indonesian).unwrap();
        let mut english_keys: Vec<_> = english.keys().collect();
        let mut indonesian_keys: Vec<_> = indonesian.keys().collect();
        english_keys.sort();
        indonesian_keys.sort();
        assert_eq!(english_keys, indonesian_keys);
    }

    #[test_case(Language::English, "signUp", "Sign Up")]
    #[test_case(Language::English, "username", "User Name")]
    #[test_case(Language::English, "passwordRepeat", "Password Repeat")]
    #[test_case(Language::Indonesian, "signUp", "Daftar")]
    #[test_case(Language::Indonesian, "passwordMismatch", "Kata sandi tidak sama")]
    fn test_translate(language: Language, key: &str, expected: &str) {
        assert_eq!(translate(language, key), expected);
    }

    #[test]
    fn test_translate_unknown_key_returns_key() {
        assert_eq!(translate(Language::Indonesian, "noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_language_codes_round_trip_through_strum() {
        assert_eq!(Language::from_str("id"), Ok(Language::Indonesian));
        assert_eq!(Language::English.to_string(), "en");
        assert_eq!(Language::Indonesian.as_ref(), Language::Indonesian.code());
        assert!(Language::from_str("fr").is_err());
    }

    #[test]
    fn test_ordered_languages_starts_with_english() {
        let codes: Vec<_> = ordered_languages().iter().map(|info| info.code).collect();
        assert_eq!(codes, vec!["en", "id"]);
        assert_eq!(
            supported_languages().get("id").map(|info| info.language),
            Some(Language::Indonesian)
        );
    }
}
