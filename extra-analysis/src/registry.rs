//! Named token filters, the way a search engine plugin exposes them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use extra_analysis_common::{AnalysisConfig, AnalysisError, Language, Stemmer, StemmerFilter};
use extra_analysis_esperanto::EsperantoStemmer;
use extra_analysis_serbian::SerbianStemmer;
use tracing::{debug, warn};

/// The built-in stemmer for a language.
pub fn stemmer_for(language: Language) -> Arc<dyn Stemmer> {
    match language {
        Language::Esperanto => Arc::new(EsperantoStemmer::new()),
        Language::SerbianCroatian => Arc::new(SerbianStemmer::new()),
    }
}

/// Filter for the configured language, built-in stemmer included.
pub fn analyzer_for(config: &AnalysisConfig) -> StemmerFilter {
    StemmerFilter::from_config(stemmer_for(config.language), config)
}

/// Stemmers keyed by token filter name.
#[derive(Clone, Default)]
pub struct StemmerRegistry {
    stemmers: HashMap<String, Arc<dyn Stemmer>>,
}

impl StemmerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `esperanto_stemmer` and `serbian_stemmer`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for language in Language::ALL {
            registry.register(language.filter_name(), stemmer_for(language));
        }
        registry
    }

    /// Register `stemmer` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, stemmer: Arc<dyn Stemmer>) {
        let name = name.into();
        let language = stemmer.language();
        match self.stemmers.insert(name.clone(), stemmer) {
            Some(previous) => warn!(
                name = %name,
                previous = %previous.language(),
                language = %language,
                "replaced registered stemmer"
            ),
            None => debug!(name = %name, language = %language, "registered stemmer"),
        }
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn Stemmer>, AnalysisError> {
        self.stemmers
            .get(name)
            .cloned()
            .ok_or_else(|| AnalysisError::UnknownFilter(name.to_string()))
    }

    /// The stemmer registered under the language's filter name.
    pub fn for_language(&self, language: Language) -> Result<Arc<dyn Stemmer>, AnalysisError> {
        self.get(language.filter_name())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.stemmers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Filter over the stemmer registered for the configured language.
    ///
    /// Fails if that name has since been given a stemmer for another language.
    pub fn filter(&self, config: &AnalysisConfig) -> Result<StemmerFilter, AnalysisError> {
        let stemmer = self.for_language(config.language)?;
        let found = stemmer.language();
        if found != config.language {
            return Err(AnalysisError::LanguageMismatch {
                name: config.language.filter_name().to_string(),
                expected: config.language,
                found,
            });
        }
        Ok(StemmerFilter::from_config(stemmer, config))
    }
}

impl fmt::Debug for StemmerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemmerRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_registered() {
        let registry = StemmerRegistry::with_defaults();
        assert_eq!(registry.names(), vec!["esperanto_stemmer", "serbian_stemmer"]);
        assert_eq!(
            registry.get("esperanto_stemmer").unwrap().language(),
            Language::Esperanto
        );
        assert_eq!(
            registry.for_language(Language::SerbianCroatian).unwrap().stem("zabave"),
            "zabav"
        );
    }

    #[test]
    fn test_unknown_filter() {
        let registry = StemmerRegistry::new();
        assert!(registry.names().is_empty());
        match registry.get("latin_stemmer") {
            Err(AnalysisError::UnknownFilter(name)) => assert_eq!(name, "latin_stemmer"),
            other => panic!("unexpected lookup result: {:?}", other.map(|s| s.language())),
        }
        assert!(registry.for_language(Language::Esperanto).is_err());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = StemmerRegistry::with_defaults();
        registry.register("esperanto_stemmer", stemmer_for(Language::SerbianCroatian));
        assert_eq!(registry.names().len(), 2);
        assert_eq!(
            registry.get("esperanto_stemmer").unwrap().language(),
            Language::SerbianCroatian
        );
    }

    #[test]
    fn test_filter_rejects_replaced_language() {
        let mut registry = StemmerRegistry::with_defaults();
        registry.register("esperanto_stemmer", stemmer_for(Language::SerbianCroatian));

        match registry.filter(&AnalysisConfig::for_language(Language::Esperanto)) {
            Err(AnalysisError::LanguageMismatch {
                name,
                expected,
                found,
            }) => {
                assert_eq!(name, "esperanto_stemmer");
                assert_eq!(expected, Language::Esperanto);
                assert_eq!(found, Language::SerbianCroatian);
            }
            other => panic!("unexpected filter result: {:?}", other.map(|_| ())),
        }
        // the untouched entry still works
        let config = AnalysisConfig::for_language(Language::SerbianCroatian);
        assert_eq!(registry.filter(&config).unwrap().stem("zabave"), "zabav");
    }

    #[test]
    fn test_filter_from_config() {
        let registry = StemmerRegistry::with_defaults();
        let mut config = AnalysisConfig::for_language(Language::SerbianCroatian);
        config.lowercase = true;
        let filter = registry.filter(&config).unwrap();
        assert_eq!(filter.stem("Добро"), "dobr");
        assert_eq!(analyzer_for(&config).stem("Добро"), "dobr");
    }
}
