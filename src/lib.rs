pub mod case;
pub mod config;
pub mod error;
pub mod initialisms;
pub mod splitter;

pub use case::converter::Converter;
pub use case::{
    capitalize, convert, to_cap_words, to_constant_case, to_kebab_case, to_mixed_case,
    to_snake_case, Case,
};
pub use config::Config;
pub use error::CaseError;
pub use initialisms::{is_initialism, Initialisms};
pub use splitter::split_words;
