//! Contains metadata implementations for `hitomi.la`.

use crate::stdx::text::capitalize;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// An error that can occur when parsing a language name.
#[derive(Debug, Error)]
#[error("failed to parse `{0}` into a known `Language`")]
pub struct ParseLanguageError(String);

/// Represents the languages a gallery can be listed under.
#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    Arabic,
    Bulgarian,
    Catalan,
    Chinese,
    Czech,
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Greek,
    Hebrew,
    Hungarian,
    Indonesian,
    Italian,
    Japanese,
    Korean,
    Malay,
    Norwegian,
    Polish,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
    Thai,
    Turkish,
    Vietnamese,
}

impl Language {
    /// Every known language, ordered by name.
    pub const ALL: [Self; 29] = [
        Self::Arabic,
        Self::Bulgarian,
        Self::Catalan,
        Self::Chinese,
        Self::Czech,
        Self::Danish,
        Self::Dutch,
        Self::English,
        Self::Finnish,
        Self::French,
        Self::German,
        Self::Greek,
        Self::Hebrew,
        Self::Hungarian,
        Self::Indonesian,
        Self::Italian,
        Self::Japanese,
        Self::Korean,
        Self::Malay,
        Self::Norwegian,
        Self::Polish,
        Self::Portuguese,
        Self::Romanian,
        Self::Russian,
        Self::Spanish,
        Self::Swedish,
        Self::Thai,
        Self::Turkish,
        Self::Vietnamese,
    ];

    /// Returns the two letter ISO 639-1 code.
    ///
    /// Example:
    /// - `Language::English => "en"`,
    /// - `Language::Japanese => "ja"`,
    #[inline]
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::Bulgarian => "bg",
            Self::Catalan => "ca",
            Self::Chinese => "zh",
            Self::Czech => "cs",
            Self::Danish => "da",
            Self::Dutch => "nl",
            Self::English => "en",
            Self::Finnish => "fi",
            Self::French => "fr",
            Self::German => "de",
            Self::Greek => "el",
            Self::Hebrew => "he",
            Self::Hungarian => "hu",
            Self::Indonesian => "id",
            Self::Italian => "it",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Malay => "ms",
            Self::Norwegian => "no",
            Self::Polish => "pl",
            Self::Portuguese => "pt",
            Self::Romanian => "ro",
            Self::Russian => "ru",
            Self::Spanish => "es",
            Self::Swedish => "sv",
            Self::Thai => "th",
            Self::Turkish => "tr",
            Self::Vietnamese => "vi",
        }
    }

    /// Returns the English name of the language, as the site displays it.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Arabic => "Arabic",
            Self::Bulgarian => "Bulgarian",
            Self::Catalan => "Catalan",
            Self::Chinese => "Chinese",
            Self::Czech => "Czech",
            Self::Danish => "Danish",
            Self::Dutch => "Dutch",
            Self::English => "English",
            Self::Finnish => "Finnish",
            Self::French => "French",
            Self::German => "German",
            Self::Greek => "Greek",
            Self::Hebrew => "Hebrew",
            Self::Hungarian => "Hungarian",
            Self::Indonesian => "Indonesian",
            Self::Italian => "Italian",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Malay => "Malay",
            Self::Norwegian => "Norwegian",
            Self::Polish => "Polish",
            Self::Portuguese => "Portuguese",
            Self::Romanian => "Romanian",
            Self::Russian => "Russian",
            Self::Spanish => "Spanish",
            Self::Swedish => "Swedish",
            Self::Thai => "Thai",
            Self::Turkish => "Turkish",
            Self::Vietnamese => "Vietnamese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    // Names are matched after capitalizing, so `english` and `ENGLISH` both work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = capitalize(s.trim());

        Self::ALL
            .into_iter()
            .find(|language| language.name() == name)
            .ok_or_else(|| ParseLanguageError(s.to_owned()))
    }
}

/// Maps a language name to its two letter code.
///
/// Absent or unknown names map to `None`; an unrecognized language never fails
/// an extraction.
#[must_use]
pub fn language_to_code(language: Option<&str>) -> Option<&'static str> {
    let language = language?;

    match Language::from_str(language) {
        Ok(language) => Some(language.code()),
        Err(err) => {
            tracing::debug!("{err}, leaving language code empty");
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn should_parse_language_names_case_insensitively() -> Result<(), ParseLanguageError> {
        assert_eq!(Language::English, Language::from_str("English")?);
        assert_eq!(Language::Japanese, Language::from_str("japanese")?);
        assert_eq!(Language::Chinese, Language::from_str("CHINESE")?);

        Ok(())
    }

    #[test]
    fn should_map_names_to_codes() {
        assert_eq!(Some("en"), language_to_code(Some("English")));
        assert_eq!(Some("ja"), language_to_code(Some("japanese")));
        assert_eq!(Some("ko"), language_to_code(Some("Korean")));
    }

    #[test]
    fn should_leave_unknown_or_absent_languages_empty() {
        assert_eq!(None, language_to_code(Some("Klingon")));
        assert_eq!(None, language_to_code(Some("")));
        assert_eq!(None, language_to_code(None));
    }

    #[test]
    fn should_round_trip_every_name() {
        for language in Language::ALL {
            assert_eq!(
                Some(language),
                Language::from_str(language.name()).ok(),
                "`{language}` should parse back from its own name"
            );
        }
    }
}
