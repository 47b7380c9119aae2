//! Shared building blocks for the extra analysis stemmers.
//!
//! The stemmer crates implement [`Stemmer`]; everything a host pipeline needs
//! to drive them (language selection, configuration, the per-token filter)
//! lives here so the stemmers themselves stay pure table lookups.

mod config;
mod error;
mod filter;
mod language;
mod stemmer;

pub use config::{AnalysisConfig, CONFIG_ENV_VAR};
pub use error::AnalysisError;
pub use filter::{StemmerFilter, Token};
pub use language::Language;
pub use stemmer::Stemmer;
