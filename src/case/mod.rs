pub mod converter;

use crate::error::CaseError;
use crate::splitter::split_words;
use converter::Converter;
use std::fmt;
use std::str::FromStr;

/// A casing convention for re-joining split words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// `snake_case`
    Snake,
    /// `CONSTANT_CASE`
    Constant,
    /// `kebab-case`
    Kebab,
    /// `CapWords`, with initialisms upper-cased
    CapWords,
    /// `mixedCase`, with initialisms upper-cased after the first word
    Mixed,
}

impl Case {
    pub const ALL: [Case; 5] = [
        Case::Snake,
        Case::Constant,
        Case::Kebab,
        Case::CapWords,
        Case::Mixed,
    ];

    /// Convert `s` to this case using the built-in initialisms.
    pub fn apply(self, s: &str) -> String {
        match self {
            Case::Snake => to_snake_case(s),
            Case::Constant => to_constant_case(s),
            Case::Kebab => to_kebab_case(s),
            Case::CapWords => to_cap_words(s),
            Case::Mixed => to_mixed_case(s),
        }
    }
}

impl FromStr for Case {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "snake_case" | "snake" => Ok(Case::Snake),
            "constant_case" | "constant" | "screaming_snake_case" => Ok(Case::Constant),
            "kebab-case" | "kebab" => Ok(Case::Kebab),
            "capwords" | "pascal" | "pascalcase" => Ok(Case::CapWords),
            "mixedcase" | "mixed" | "camel" | "camelcase" => Ok(Case::Mixed),
            _ => Err(CaseError::UnknownCase(s.to_string())),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Snake => write!(f, "snake_case"),
            Case::Constant => write!(f, "CONSTANT_CASE"),
            Case::Kebab => write!(f, "kebab-case"),
            Case::CapWords => write!(f, "CapWords"),
            Case::Mixed => write!(f, "mixedCase"),
        }
    }
}

/// Convert `s` to `case` using the built-in initialisms.
pub fn convert(s: &str, case: Case) -> String {
    case.apply(s)
}

/// `"ThisIsATest"` -> `"this_is_a_test"`
pub fn to_snake_case(s: &str) -> String {
    split_words(s).join("_").to_ascii_lowercase()
}

/// `"ThisIsATest"` -> `"THIS_IS_A_TEST"`
pub fn to_constant_case(s: &str) -> String {
    split_words(s).join("_").to_ascii_uppercase()
}

/// `"ThisIsATest"` -> `"this-is-a-test"`
pub fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-").to_ascii_lowercase()
}

/// `"xml-http-request"` -> `"XMLHTTPRequest"`
pub fn to_cap_words(s: &str) -> String {
    Converter::default().to_cap_words(s)
}

/// `"xml-http-request"` -> `"xmlHTTPRequest"`
pub fn to_mixed_case(s: &str) -> String {
    Converter::default().to_mixed_case(s)
}

/// Upper-case the first character and lower-case everything after it.
///
/// `"ABC"` -> `"Abc"`. Works per character, so a multi-byte first character is
/// upper-cased whole.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
    }
}
