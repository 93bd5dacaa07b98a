use super::{capitalize, Case};
use crate::initialisms::Initialisms;
use crate::splitter::split_words;

/// Case converter bound to a table of initialisms.
///
/// Only the CapWords and mixedCase joiners consult the table; the other
/// conventions behave exactly like the free functions.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    initialisms: Initialisms,
}

impl Converter {
    pub fn new(initialisms: Initialisms) -> Self {
        Self { initialisms }
    }

    pub fn initialisms(&self) -> &Initialisms {
        &self.initialisms
    }

    pub fn convert(&self, s: &str, case: Case) -> String {
        match case {
            Case::CapWords => self.to_cap_words(s),
            Case::Mixed => self.to_mixed_case(s),
            other => other.apply(s),
        }
    }

    pub fn to_cap_words(&self, s: &str) -> String {
        split_words(s)
            .into_iter()
            .map(|word| self.title(word))
            .collect()
    }

    /// The first word is always lower-cased, even when it is an initialism.
    pub fn to_mixed_case(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for (i, word) in split_words(s).into_iter().enumerate() {
            if i == 0 {
                out.push_str(&word.to_ascii_lowercase());
            } else {
                out.push_str(&self.title(word));
            }
        }
        out
    }

    fn title(&self, word: &str) -> String {
        if self.initialisms.contains(word) {
            word.to_ascii_uppercase()
        } else {
            capitalize(word)
        }
    }
}
