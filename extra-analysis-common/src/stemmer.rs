use crate::Language;

/// A stateless word-to-stem transformer.
///
/// Implementations read only immutable tables, so one instance can be shared
/// by any number of tokenization pipelines at once.
pub trait Stemmer: Send + Sync {
    /// Stem a single token. Never fails; unknown input comes back unchanged.
    fn stem(&self, word: &str) -> String;

    /// The language this stemmer handles.
    fn language(&self) -> Language;

    /// Stem a token that may be absent. An absent token stays absent.
    fn stem_opt(&self, word: Option<&str>) -> Option<String> {
        word.map(|w| self.stem(w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Truncate;

    impl Stemmer for Truncate {
        fn stem(&self, word: &str) -> String {
            word.chars().take(3).collect()
        }

        fn language(&self) -> Language {
            Language::Esperanto
        }
    }

    #[test]
    fn test_stem_opt_passes_none_through() {
        assert_eq!(Truncate.stem_opt(None), None);
        assert_eq!(Truncate.stem_opt(Some("vortoj")), Some("vor".to_string()));
    }

    #[test]
    fn test_trait_object_is_shareable() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Stemmer>();
    }
}
