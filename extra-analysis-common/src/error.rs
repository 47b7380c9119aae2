use thiserror::Error;

use crate::Language;

/// Errors raised while configuring or looking up stemmers.
///
/// Stemming itself never fails; these only come from the surrounding setup.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("no stemmer registered under the name {0:?}")]
    UnknownFilter(String),

    #[error("stemmer {name:?} is for {found}, config asks for {expected}")]
    LanguageMismatch {
        name: String,
        expected: Language,
        found: Language,
    },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
