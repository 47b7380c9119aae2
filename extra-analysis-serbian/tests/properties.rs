use extra_analysis_common::Stemmer;
use extra_analysis_serbian::{cyrillic_to_latin, SerbianStemmer};
use proptest::prelude::*;

const STOP_WORDS: &[&str] = &[
    "biti", "jesam", "budem", "bijaše", "bismo", "bio", "ćemo", "želim", "moraju", "trebamo",
    "mogu", "možete",
];

proptest! {
    #[test]
    fn stem_is_deterministic(word in "\\PC{0,24}") {
        prop_assert_eq!(SerbianStemmer.stem(&word), SerbianStemmer.stem(&word));
    }

    #[test]
    fn scripts_converge(word in "[абвгдђежзијклљмнњопрстћуфхцчџш]{1,16}") {
        let latin = cyrillic_to_latin(&word);
        prop_assert_eq!(SerbianStemmer.stem(&word), SerbianStemmer.stem(&latin));
    }

    #[test]
    fn serbian_cyrillic_comes_out_latin(word in "[абвгдђежзијклљмнњопрстћуфхцчџш]{1,16}") {
        let stem = SerbianStemmer.stem(&word);
        prop_assert!(stem.chars().all(|c| !('\u{0400}'..='\u{04ff}').contains(&c)), "{:?} -> {:?}", word, stem);
    }

    #[test]
    fn stop_words_are_unchanged(word in prop::sample::select(STOP_WORDS)) {
        prop_assert_eq!(SerbianStemmer.stem(word), word);
    }

    #[test]
    fn latin_stems_never_grow(word in "[a-zčćđšž]{0,16}") {
        let stem = SerbianStemmer.stem(&word);
        prop_assert!(stem.chars().count() <= word.chars().count(), "{:?} -> {:?}", word, stem);
    }
}
