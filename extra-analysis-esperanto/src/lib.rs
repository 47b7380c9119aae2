//! Esperanto stemmer.
//!
//! Strips the plural (`-j`) and direct-object (`-n`) markers, then the longest
//! known part-of-speech or verb ending, leaving uninflectable words, numerals
//! and hyphen-inflected symbols (`1930-oj`) in their base form.

mod stemmer;
mod tables;

pub use stemmer::EsperantoStemmer;
