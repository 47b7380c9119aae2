//! Word lists driving the Esperanto stemmer. Built once, read-only after.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

/// Global floor on the number of characters kept as stem.
pub(crate) const MIN_STEM_LENGTH: usize = 2;

// Part-of-speech and verb endings, after https://en.wikipedia.org/wiki/Esperanto_grammar
static SUFFIXES: &[&str] = &[
    // part of speech
    "o", "a", "e", "i",
    // mood
    "u", "us",
    // indicative
    "is", "as", "os",
    // voice
    "inta", "anta", "onta", "ita", "ata", "ota",
    // compound tense
    "intas", "antas", "ontas", "itas", "atas", "otas", "intis", "antis", "ontis",
    "itis", "atis", "otis", "intos", "antos", "ontos", "itos", "atos", "otos", "intus",
    "antus", "ontus", "itus", "atus", "otus",
    // nominal participles
    "inte", "ante", "onte", "ite", "ate", "ote", "into", "anto", "onto", "ito", "ato", "oto",
];

// Words that look inflected but are not.
static EXCEPTIONS: &[&str] = &[
    // article
    "la",
    // conjunctions
    "kaj", "ke", "kie", "minus", "plus", "se",
    // interjections
    "aha", "bis", "damne", "dirlididi", "fi", "forfikiĝu", "ha", "ho", "hola", "hu",
    "hura", "muu", "nedankinde", "nu", "oho", "ve",
    // pronouns
    "aliu", "ĉio", "ĉiu", "ili", "io", "iŝi", "iu", "kio", "kiu", "nenio", "neniu",
    "oni", "tio", "tiu",
    // determiners
    "ĉies", "ia", "kelka", "kia", "nenia", "tia", "tie",
    // prepositions
    "cis", "ĉe", "da", "de", "disde", "ekde", "en", "ĝis", "je", "kun", "na", "po",
    "pri", "pro", "sen", "tra",
    // adverbs
    "malplej", "malpli", "plej", "pli", "plu", "tamen",
    // particles
    "ajn", "ĉu", "ĉi", "jen", "ju", "ne",
    // dates
    "a", "an",
    // roman numerals up to 20 that would otherwise lose a final vowel
    "i", "ii", "iii", "vi", "vii", "viii", "xi", "xii", "xiii", "xvi", "xvii", "xviii",
    // irregular numeral
    "unu",
];

// Pronouns and determiners whose only inflection is -j/-n.
static LIMITED_INFLECTION: &[&str] = &[
    // pronouns
    "ci", "ĝi", "gi", "iŝi", "li", "mi", "ni", "ri", "ŝi", "si", "ŝli", "vi",
    // determiners
    "ia", "io", "iu",
];

// 1 through 9
static BASIC_NUMERALS: &[&str] = &["unu", "du", "tri", "kvar", "kvin", "ses", "sep", "ok", "naŭ"];

// Bare grammatical placeholders. -j and -n are stripped before these are checked.
static BARE_SUFFIXES: &[&str] = &["-o", "-a", "-e", "-"];

/// Thousand, hundred, ten.
pub(crate) static BIG_NUMBER_WORDS: &[&str] = &["mil", "cent", "dek"];

/// Plural and direct-object markers, longest first.
pub(crate) static PLURAL_DIRECT_SUFFIXES: &[&str] = &["jn", "n", "j"];

/// Longest entry in the suffix list; bounds the suffix search window.
pub(crate) const MAX_SUFFIX_LENGTH: usize = 5;

pub(crate) fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn to_set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

lazy_static! {
    pub(crate) static ref STEMMER_SUFFIXES: HashSet<&'static str> = {
        let set = to_set(SUFFIXES);
        debug!(suffixes = set.len(), "built esperanto suffix table");
        set
    };
    pub(crate) static ref STEMMER_EXCEPTIONS: HashSet<&'static str> = to_set(EXCEPTIONS);
    pub(crate) static ref LIMITED_INFLECTION_WORDS: HashSet<&'static str> = to_set(LIMITED_INFLECTION);
    pub(crate) static ref NUMERALS: HashSet<&'static str> = to_set(BASIC_NUMERALS);
    pub(crate) static ref BARE: HashSet<&'static str> = to_set(BARE_SUFFIXES);

    // digits inflected without the hyphen they ought to have, like "1930oj"
    pub(crate) static ref INFLECTED_NUMBER: Regex =
        Regex::new(r"^([^\n\r\x{85}\x{2028}\x{2029}]*[0-9])(a|an|aj|ajn|j|oj|ojn)$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_suffix_length_matches_table() {
        let longest = SUFFIXES.iter().map(|s| s.chars().count()).max().unwrap();
        assert_eq!(longest, MAX_SUFFIX_LENGTH);
    }

    #[test]
    fn test_tables_have_no_duplicates() {
        assert_eq!(STEMMER_SUFFIXES.len(), SUFFIXES.len());
        assert_eq!(STEMMER_EXCEPTIONS.len(), EXCEPTIONS.len());
        assert_eq!(LIMITED_INFLECTION_WORDS.len(), LIMITED_INFLECTION.len());
        assert_eq!(NUMERALS.len(), BASIC_NUMERALS.len());
    }

    #[test]
    fn test_inflected_number_pattern() {
        let caps = INFLECTED_NUMBER.captures("1930oj").unwrap();
        assert_eq!(&caps[1], "1930");
        assert!(INFLECTED_NUMBER.captures("1930-oj").is_none());
        assert!(INFLECTED_NUMBER.captures("domoj").is_none());
        assert!(INFLECTED_NUMBER.captures("19\r30oj").is_none());
    }
}
