// src/generators/mod.rs
use thiserror::Error;

pub mod charset;
pub mod entropy;
pub mod password;
pub mod words;

pub use charset::{Charset, CharsetOptions, SecurityStandard};
pub use entropy::{round_bits, Strength};
pub use password::{PassphraseOptions, PasswordGenerator, PronounceableOptions, ReadableOptions};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("At least one character type must be selected")]
    NoCharacterClass,

    #[error("No valid characters available with current settings")]
    EmptyCharset,

    #[error("Requested {requested} words but only {available} are available")]
    TooManyWords { requested: usize, available: usize },
}
