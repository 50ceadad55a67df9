// src/generators/charset.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::GeneratorError;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const AMBIGUOUS_CHARS: &str = "1l0OiI";

/// Symbols offered under the stricter standard. Also used for the single
/// trailing symbol of pronounceable passwords and passphrases.
pub const CONSERVATIVE_SYMBOLS: &str = "!@#$%^&*";
pub const EXTENDED_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Policy deciding which symbol alphabet is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SecurityStandard {
    #[default]
    Nist,
    Owasp,
}

impl SecurityStandard {
    pub fn symbols(&self) -> &'static str {
        match self {
            SecurityStandard::Owasp => CONSERVATIVE_SYMBOLS,
            SecurityStandard::Nist => EXTENDED_SYMBOLS,
        }
    }
}

impl std::fmt::Display for SecurityStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecurityStandard::Nist => write!(f, "NIST"),
            SecurityStandard::Owasp => write!(f, "OWASP"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetOptions {
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
    pub security_standard: SecurityStandard,
}

impl Default for CharsetOptions {
    fn default() -> Self {
        Self {
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_ambiguous: true,
            security_standard: SecurityStandard::Nist,
        }
    }
}

pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS_CHARS.contains(c)
}

/// Ordered, duplicate free alphabet a password is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    /// Assemble the alphabet from the class flags, in the order lowercase,
    /// uppercase, numbers, symbols, then drop ambiguous glyphs if requested.
    pub fn build(options: &CharsetOptions) -> Result<Self, GeneratorError> {
        if !options.include_lowercase
            && !options.include_uppercase
            && !options.include_numbers
            && !options.include_symbols
        {
            return Err(GeneratorError::NoCharacterClass);
        }

        let classes = [
            (options.include_lowercase, LOWERCASE),
            (options.include_uppercase, UPPERCASE),
            (options.include_numbers, NUMBERS),
            (options.include_symbols, options.security_standard.symbols()),
        ];

        let mut chars: Vec<char> = Vec::new();
        for (_, alphabet) in classes.iter().filter(|(enabled, _)| *enabled) {
            for c in alphabet.chars() {
                if options.exclude_ambiguous && is_ambiguous(c) {
                    continue;
                }
                if !chars.contains(&c) {
                    chars.push(c);
                }
            }
        }

        // Unreachable with the fixed alphabets, still checked.
        if chars.is_empty() {
            return Err(GeneratorError::EmptyCharset);
        }

        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(lower: bool, upper: bool, numbers: bool, symbols: bool) -> CharsetOptions {
        CharsetOptions {
            include_lowercase: lower,
            include_uppercase: upper,
            include_numbers: numbers,
            include_symbols: symbols,
            exclude_ambiguous: false,
            security_standard: SecurityStandard::Nist,
        }
    }

    #[test]
    fn every_valid_combination_is_non_empty_and_unambiguous_when_excluded() {
        for mask in 1u8..16 {
            for exclude in [false, true] {
                for standard in [SecurityStandard::Nist, SecurityStandard::Owasp] {
                    let mut opts = options(mask & 1 != 0, mask & 2 != 0, mask & 4 != 0, mask & 8 != 0);
                    opts.exclude_ambiguous = exclude;
                    opts.security_standard = standard;

                    let charset = Charset::build(&opts).expect("charset should build");
                    assert!(!charset.is_empty());
                    if exclude {
                        assert!(charset.as_slice().iter().all(|c| !is_ambiguous(*c)));
                    }
                }
            }
        }
    }

    #[test]
    fn no_class_selected_is_rejected() {
        let err = Charset::build(&options(false, false, false, false)).unwrap_err();
        assert_eq!(err, GeneratorError::NoCharacterClass);
    }

    #[test]
    fn alphanumeric_without_ambiguous_has_56_chars() {
        let mut opts = options(true, true, true, false);
        opts.exclude_ambiguous = true;
        assert_eq!(Charset::build(&opts).unwrap().len(), 56);
    }

    #[test]
    fn symbol_set_follows_security_standard() {
        let mut opts = options(false, false, false, true);
        opts.security_standard = SecurityStandard::Owasp;
        assert_eq!(Charset::build(&opts).unwrap().len(), 8);

        opts.security_standard = SecurityStandard::Nist;
        let nist = Charset::build(&opts).unwrap();
        assert_eq!(nist.len(), EXTENDED_SYMBOLS.chars().count());
        assert!(nist.contains('['));
    }

    #[test]
    fn chars_keep_class_order() {
        let charset = Charset::build(&options(true, true, true, false)).unwrap();
        assert_eq!(charset.as_slice()[0], 'a');
        assert_eq!(charset.as_slice()[26], 'A');
        assert_eq!(charset.as_slice()[52], '0');
    }

    #[test]
    fn standard_uses_uppercase_wire_names() {
        assert_eq!(serde_json::to_string(&SecurityStandard::Owasp).unwrap(), "\"OWASP\"");
        let parsed: SecurityStandard = serde_json::from_str("\"NIST\"").unwrap();
        assert_eq!(parsed, SecurityStandard::Nist);
        assert!(serde_json::from_str::<SecurityStandard>("\"ISO\"").is_err());
    }
}
