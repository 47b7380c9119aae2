//! Esperanto stemmer
//!
//! Order of checks:
//! - exceptions and numerals, spelled out or compound, pass through
//! - digits inflected without a hyphen lose the inflection
//! - `-j`, `-n`, `-jn` come off after a vowel or hyphen
//! - hyphen-inflected symbols and names lose the hyphenated ending
//! - the longest known ending after the first vowel is stripped

use extra_analysis_common::{Language, Stemmer};

use crate::tables::{
    is_vowel, BARE, BIG_NUMBER_WORDS, INFLECTED_NUMBER, LIMITED_INFLECTION_WORDS,
    MAX_SUFFIX_LENGTH, MIN_STEM_LENGTH, NUMERALS, PLURAL_DIRECT_SUFFIXES, STEMMER_EXCEPTIONS,
    STEMMER_SUFFIXES,
};

/// Esperanto stemmer.
///
/// A zero-sized handle over process-wide tables; copy it freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct EsperantoStemmer;

impl EsperantoStemmer {
    pub fn new() -> Self {
        Self
    }

    /// Stem an Esperanto word.
    pub fn stem_word(&self, word: &str) -> String {
        if is_exception_or_number(word) {
            return word.to_string();
        }

        if let Some(caps) = INFLECTED_NUMBER.captures(word) {
            return caps[1].to_string();
        }

        let chars: Vec<char> = word.chars().collect();
        let local_min_stem_length =
            MIN_STEM_LENGTH.max(first_vowel_pos(&chars).map_or(0, |pos| pos + 1));
        let offset = plural_direct_offset(word, &chars);

        let stem = &chars[..chars.len() - offset];
        let stem_str: String = stem.iter().collect();

        if offset > 0
            && (LIMITED_INFLECTION_WORDS.contains(stem_str.as_str())
                || STEMMER_EXCEPTIONS.contains(stem_str.as_str()))
        {
            return stem_str;
        }

        // a bare placeholder like "-oj" keeps its -j/-n too
        if BARE.contains(stem_str.as_str()) {
            return word.to_string();
        }

        // hyphen-offset inflections on symbols and foreign words: "1-oj", "wolfgang-on"
        if let Some(dash) = stem.iter().rposition(|&c| c == '-') {
            let ending: String = stem[dash..].iter().collect();
            if BARE.contains(ending.as_str()) {
                return stem[..dash].iter().collect();
            }
        }

        let suffix_len = find_suffix_length(stem, local_min_stem_length);
        chars[..chars.len() - offset - suffix_len].iter().collect()
    }
}

impl Stemmer for EsperantoStemmer {
    fn stem(&self, word: &str) -> String {
        self.stem_word(word)
    }

    fn language(&self) -> Language {
        Language::Esperanto
    }
}

/// The first vowel always belongs to the stem.
fn first_vowel_pos(chars: &[char]) -> Option<usize> {
    chars.iter().position(|&c| is_vowel(c))
}

/// Listed exceptions and numerals, plus compounds ending in a big number
/// word followed by a basic numeral ("dudekunu", "milnaŭcentokdekkvar").
fn is_exception_or_number(word: &str) -> bool {
    if STEMMER_EXCEPTIONS.contains(word) || NUMERALS.contains(word) {
        return true;
    }

    // the big number words cannot overlap, so the largest end is the rightmost one
    let numeral_end = BIG_NUMBER_WORDS
        .iter()
        .filter_map(|big| word.rfind(big).map(|idx| idx + big.len()))
        .max();

    match numeral_end {
        Some(end) => NUMERALS.contains(&word[end..]),
        None => false,
    }
}

/// Length of a trailing -jn, -n or -j, counted only after a vowel or hyphen.
fn plural_direct_offset(word: &str, chars: &[char]) -> usize {
    for suffix in PLURAL_DIRECT_SUFFIXES {
        if word == *suffix {
            return 0;
        }
        if word.ends_with(suffix) {
            let suffix_len = suffix.len();
            let prev = chars[chars.len() - suffix_len - 1];
            if prev == '-' || is_vowel(prev) {
                return suffix_len;
            }
        }
    }
    0
}

/// Length of the longest known suffix at the end of `stem` that leaves at
/// least `local_min_stem_length` characters in front of it.
fn find_suffix_length(stem: &[char], local_min_stem_length: usize) -> usize {
    let initial_len = stem.len();
    let skip = initial_len
        .saturating_sub(MAX_SUFFIX_LENGTH)
        .max(local_min_stem_length);

    if initial_len < skip {
        return 0;
    }

    let mut window = &stem[skip..];
    let mut candidate = String::with_capacity(MAX_SUFFIX_LENGTH * 2);
    while !window.is_empty() {
        candidate.clear();
        candidate.extend(window);
        if STEMMER_SUFFIXES.contains(candidate.as_str()) {
            break;
        }
        window = &window[1..];
    }

    window.len()
}
