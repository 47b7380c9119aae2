//! Esperanto and Serbian/Croatian stemmers, ready to drop into an analysis
//! pipeline.
//!
//! ```
//! use extra_analysis::{analyzer_for, AnalysisConfig, Language};
//!
//! let filter = analyzer_for(&AnalysisConfig::for_language(Language::Esperanto));
//! assert_eq!(filter.stem("vikipediojn"), "vikipedi");
//! ```

mod registry;

pub use extra_analysis_common::{
    AnalysisConfig, AnalysisError, Language, Stemmer, StemmerFilter, Token, CONFIG_ENV_VAR,
};
pub use extra_analysis_esperanto::EsperantoStemmer;
pub use extra_analysis_serbian::{cyrillic_to_latin, SerbianStemmer};
pub use registry::{analyzer_for, stemmer_for, StemmerRegistry};
