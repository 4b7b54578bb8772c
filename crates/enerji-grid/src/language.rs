//! The two-valued language selector.

use std::fmt;
use std::str::FromStr;

use icu::locid::{locale, Locale};
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Active display language. Turkish is the primary language of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    /// Turkish, the primary language.
    #[default]
    Tr,
    /// English, the alternate language.
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Tr, Language::En];

    /// Upper-case code, as used in export file names (`TR`, `EN`).
    pub fn code(self) -> &'static str {
        match self {
            Language::Tr => "TR",
            Language::En => "EN",
        }
    }

    /// Record field that holds the name in this language.
    pub fn name_key(self) -> &'static str {
        match self {
            Language::Tr => crate::project::PRIMARY_NAME_KEY,
            Language::En => crate::project::ALTERNATE_NAME_KEY,
        }
    }

    /// Locale used for collation and number formatting.
    pub fn locale(self) -> Locale {
        match self {
            Language::Tr => locale!("tr"),
            Language::En => locale!("en"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tr" => Ok(Language::Tr),
            "en" => Ok(Language::En),
            _ => Err(GridError::UnknownLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes() {
        assert_eq!("tr".parse::<Language>().unwrap(), Language::Tr);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" En ".parse::<Language>().unwrap(), Language::En);
        assert!(matches!(
            "de".parse::<Language>(),
            Err(GridError::UnknownLanguage(code)) if code == "de"
        ));
    }

    #[test]
    fn name_keys() {
        assert_eq!(Language::Tr.name_key(), "name");
        assert_eq!(Language::En.name_key(), "nameEN");
    }

    #[test]
    fn serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), r#""EN""#);
        let parsed: Language = serde_json::from_str(r#""TR""#).unwrap();
        assert_eq!(parsed, Language::Tr);
    }

    #[test]
    fn default_is_primary() {
        assert_eq!(Language::default(), Language::Tr);
        assert_eq!(Language::En.to_string(), "EN");
    }
}
