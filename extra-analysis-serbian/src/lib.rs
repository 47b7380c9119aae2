//! Serbian/Croatian stemmer after Nikola Ljubešić and Ivan Pandžić's
//! "Simple stemmer for Croatian".
//!
//! Cyrillic input is transliterated to Latin first, so both scripts stem to
//! the same Latin form.

mod rules;
mod stemmer;
mod transliterate;

pub use stemmer::SerbianStemmer;
pub use transliterate::cyrillic_to_latin;
