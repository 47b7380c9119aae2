//! Ljubešić–Pandžić stemmer
//!
//! Cyrillic is transliterated to Latin, stop words are returned as they are,
//! then a handful of endings are normalized (`-alan` to `-alni`, `-ajac`
//! to `-ajca`) before the ordered rule list strips the inflection. A rule only
//! wins if the stem it leaves has a vowel or a syllabic `r` and is longer
//! than one letter.

use std::borrow::Cow;

use extra_analysis_common::{Language, Stemmer};
use tracing::trace;

use crate::rules::{RULES, STOP_SET, SYLLABIC_R, TRANSFORMS, VOWEL};
use crate::transliterate::cyrillic_to_latin;

/// Ljubešić–Pandžić stemmer for Serbian and Croatian.
///
/// Output is always in Latin script. Stop words (forms of a handful of
/// auxiliary and modal verbs) come back transliterated but otherwise as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerbianStemmer;

impl SerbianStemmer {
    pub fn new() -> Self {
        Self
    }

    /// Stem a Serbian or Croatian word written in either script.
    pub fn stem_word(&self, word: &str) -> String {
        let word = cyrillic_to_latin(word);
        if STOP_SET.contains(word.to_lowercase().as_str()) {
            return word;
        }

        let transformed = transform(&word);
        let matching = RULES.set.matches(&transformed);
        for idx in matching.iter() {
            let Some(caps) = RULES.patterns[idx].captures(&transformed) else {
                continue;
            };
            let stem = &caps[1];
            if stem.chars().count() > 1 && has_a_vowel(stem) {
                trace!(word = %transformed, rule = idx, stem, "serbian rule matched");
                return stem.to_string();
            }
        }

        transformed.into_owned()
    }
}

impl Stemmer for SerbianStemmer {
    fn stem(&self, word: &str) -> String {
        self.stem_word(word)
    }

    fn language(&self) -> Language {
        Language::SerbianCroatian
    }
}

/// Replace the longest known ending of `word` with its normalized form.
fn transform(word: &str) -> Cow<'_, str> {
    let starts: Vec<usize> = word.char_indices().map(|(idx, _)| idx).collect();
    let len = starts.len();
    if len < TRANSFORMS.min_len {
        return Cow::Borrowed(word);
    }

    for tail_len in (TRANSFORMS.min_len..=len.min(TRANSFORMS.max_len)).rev() {
        let split = starts[len - tail_len];
        if let Some(replacement) = TRANSFORMS.get(&word[split..]) {
            return Cow::Owned(format!("{}{}", &word[..split], replacement));
        }
    }

    Cow::Borrowed(word)
}

/// A stem needs a vowel or a syllabic r ("prst", "crkv").
fn has_a_vowel(stem: &str) -> bool {
    let marked = SYLLABIC_R.replace_all(stem, "${1}R${2}");
    VOWEL.is_match(&marked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_longest_ending_first() {
        assert_eq!(transform("bijesan"), "bijesni");
        assert_eq!(transform("vašljivac"), "vašljivca");
        assert_eq!(transform("zabava"), "zabava");
    }

    #[test]
    fn test_transform_short_words_untouched() {
        assert_eq!(transform(""), "");
        assert_eq!(transform("ac"), "ac");
    }

    #[test]
    fn test_transform_only_touches_the_tail() {
        assert!(transform("kovacevac").starts_with("kovacev"));
        assert!(transform("raveraverave").starts_with("raverav"));
    }

    #[test]
    fn test_has_a_vowel() {
        assert!(has_a_vowel("zabav"));
        assert!(has_a_vowel("prst"));
        assert!(has_a_vowel("r"));
        assert!(!has_a_vowel("bzdž"));
        // r next to a vowel is an ordinary consonant
        assert!(has_a_vowel("ra"));
        assert!(!has_a_vowel("ñ"));
    }

    #[test]
    fn test_stem_basic() {
        let stemmer = SerbianStemmer::new();
        assert_eq!(stemmer.stem("zabave"), "zabav");
        assert_eq!(stemmer.stem("забавама"), "zabav");
        assert_eq!(stemmer.stem("jesam"), "jesam");
        assert_eq!(stemmer.stem(""), "");
        assert_eq!(stemmer.stem_opt(None), None);
        assert_eq!(stemmer.language(), Language::SerbianCroatian);
    }

    #[test]
    fn test_stop_words_are_case_insensitive() {
        assert_eq!(SerbianStemmer.stem("Moramo"), "Moramo");
        assert_eq!(SerbianStemmer.stem("ЖЕЛИМО"), "ŽELIMO");
    }
}
