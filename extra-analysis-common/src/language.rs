//! Languages with a stemmer in this workspace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AnalysisError;

/// Supported stemming languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Esperanto
    Esperanto,
    /// Serbian/Croatian (Ljubešić–Pandžić), Latin or Cyrillic script
    SerbianCroatian,
}

impl Default for Language {
    fn default() -> Self {
        Language::Esperanto
    }
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 2] = [Language::Esperanto, Language::SerbianCroatian];

    /// Get language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Esperanto => "eo",
            Language::SerbianCroatian => "sr",
        }
    }

    /// Name of the token filter this language's stemmer is registered under.
    pub fn filter_name(&self) -> &'static str {
        match self {
            Language::Esperanto => "esperanto_stemmer",
            Language::SerbianCroatian => "serbian_stemmer",
        }
    }
}

impl FromStr for Language {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eo" | "esperanto" | "esperanto_stemmer" => Ok(Language::Esperanto),
            "sr" | "hr" | "bs" | "sh" | "serbian" | "croatian" | "serbian_croatian"
            | "serbian_stemmer" => Ok(Language::SerbianCroatian),
            _ => Err(AnalysisError::UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes_and_aliases() {
        assert_eq!("eo".parse::<Language>().unwrap(), Language::Esperanto);
        assert_eq!("Esperanto".parse::<Language>().unwrap(), Language::Esperanto);
        assert_eq!("hr".parse::<Language>().unwrap(), Language::SerbianCroatian);
        assert_eq!(
            "serbian_stemmer".parse::<Language>().unwrap(),
            Language::SerbianCroatian
        );
    }

    #[test]
    fn test_unknown_language() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert!(matches!(err, AnalysisError::UnknownLanguage(ref s) if s == "klingon"));
    }

    #[test]
    fn test_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
            assert_eq!(lang.filter_name().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Language::SerbianCroatian).unwrap();
        assert_eq!(json, "\"serbian_croatian\"");
        let lang: Language = serde_json::from_str("\"esperanto\"").unwrap();
        assert_eq!(lang, Language::Esperanto);
    }
}
