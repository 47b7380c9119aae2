//! Token filter that runs a [`Stemmer`] over already-tokenized text.

use std::borrow::Cow;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use crate::{AnalysisConfig, Stemmer};

/// A token produced by some upstream tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Byte offset of the token start in the source text.
    pub start: usize,
    /// Byte offset one past the token end in the source text.
    pub end: usize,
    pub position_increment: u32,
}

impl Token {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            position_increment: 1,
        }
    }
}

/// Replaces each token's text with its stem.
#[derive(Clone)]
pub struct StemmerFilter {
    stemmer: Arc<dyn Stemmer>,
    lowercase: bool,
    parallel_threshold: usize,
}

impl StemmerFilter {
    pub fn new(stemmer: Arc<dyn Stemmer>) -> Self {
        Self {
            stemmer,
            lowercase: false,
            parallel_threshold: usize::MAX,
        }
    }

    /// Build a filter with the lowercase and batching settings of an
    /// [`AnalysisConfig`]. The stemmer is used as given; `config.language`
    /// only matters to whoever picked the stemmer.
    pub fn from_config(stemmer: Arc<dyn Stemmer>, config: &AnalysisConfig) -> Self {
        Self::new(stemmer)
            .with_lowercase(config.lowercase)
            .with_parallel_threshold(config.parallel_threshold)
    }

    /// Lowercase every token before it reaches the stemmer.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Batches at least this long go to the rayon pool in [`StemmerFilter::stem_batch`].
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }

    /// Stem one token.
    pub fn stem(&self, word: &str) -> String {
        let word = if self.lowercase {
            Cow::Owned(word.to_lowercase())
        } else {
            Cow::Borrowed(word)
        };
        self.stemmer.stem(&word)
    }

    /// Rewrite the text of every token in place. Offsets and position
    /// increments are left as the tokenizer produced them.
    pub fn apply(&self, tokens: &mut [Token]) {
        for token in tokens.iter_mut() {
            token.text = self.stem(&token.text);
        }
    }

    pub fn stem_all<I, S>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().map(|w| self.stem(w.as_ref())).collect()
    }

    /// Same as [`StemmerFilter::stem_all`], spread over the rayon pool.
    pub fn par_stem_all(&self, words: &[String]) -> Vec<String> {
        words.par_iter().map(|w| self.stem(w)).collect()
    }

    /// Stem a batch, going parallel once it reaches the configured threshold.
    pub fn stem_batch(&self, words: &[String]) -> Vec<String> {
        if words.len() >= self.parallel_threshold {
            debug!(len = words.len(), "stemming batch in parallel");
            self.par_stem_all(words)
        } else {
            self.stem_all(words)
        }
    }
}

impl std::fmt::Debug for StemmerFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemmerFilter")
            .field("language", &self.stemmer.language())
            .field("lowercase", &self.lowercase)
            .field("parallel_threshold", &self.parallel_threshold)
            .finish()
    }
}
