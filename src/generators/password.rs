// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};

use super::charset::{is_ambiguous, Charset, CONSERVATIVE_SYMBOLS, LOWERCASE, NUMBERS};
use super::entropy::{entropy_bits, word_entropy};
use super::words::{capitalize, COMMON_WORDS};
use super::GeneratorError;
use crate::models::GeneratedCredential;

const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";
const VOWELS: &str = "aeiou";
const UPPERCASE_PROBABILITY: f64 = 0.3;
const PASSPHRASE_WORDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadableOptions {
    pub word_count: usize,
    pub separator: String,
    pub include_numbers: bool,
    pub capitalize: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PronounceableOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassphraseOptions {
    pub length: usize,
    pub include_spaces: bool,
}

/// Credential generator over a cryptographically secure RNG.
///
/// Every selection, including the cosmetic upper-casing of pronounceable
/// letters, is drawn from the same secure source.
pub struct PasswordGenerator<R: RngCore + CryptoRng> {
    rng: R,
}

impl PasswordGenerator<OsRng> {
    pub fn from_os() -> Self {
        PasswordGenerator { rng: OsRng }
    }
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    pub fn new(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    fn pick(&mut self, alphabet: &[char]) -> char {
        alphabet[self.rng.gen_range(0..alphabet.len())]
    }

    /// `length` independent uniform draws from `charset`.
    pub fn random(&mut self, charset: &Charset, length: usize) -> GeneratedCredential {
        let alphabet = charset.as_slice();
        let password: String = (0..length).map(|_| self.pick(alphabet)).collect();
        GeneratedCredential::new(password, entropy_bits(length, charset.len()))
    }

    pub fn bulk(&mut self, charset: &Charset, length: usize, count: usize) -> Vec<GeneratedCredential> {
        (0..count).map(|_| self.random(charset, length)).collect()
    }

    /// Distinct words from the fixed list, joined by the caller's separator,
    /// with an optional two digit suffix.
    pub fn readable(&mut self, options: &ReadableOptions) -> Result<GeneratedCredential, GeneratorError> {
        if options.word_count > COMMON_WORDS.len() {
            return Err(GeneratorError::TooManyWords {
                requested: options.word_count,
                available: COMMON_WORDS.len(),
            });
        }

        let words: Vec<String> = COMMON_WORDS
            .choose_multiple(&mut self.rng, options.word_count)
            .map(|word| if options.capitalize { capitalize(word) } else { word.to_string() })
            .collect();

        let mut password = words.join(&options.separator);
        let suffix_range = if options.include_numbers {
            password.push_str(&self.rng.gen_range(10..=99).to_string());
            Some(90)
        } else {
            None
        };

        let bits = word_entropy(options.word_count, COMMON_WORDS.len(), suffix_range);
        Ok(GeneratedCredential::new(password, bits))
    }

    /// Alternating consonant/vowel letters with optional digits and a trailing
    /// symbol.
    ///
    /// The entropy is an approximation: it treats every position as an
    /// independent draw from consonants + vowels (+10 digits, +8 symbols when
    /// enabled), although the fixed consonant/vowel pattern gives a guesser
    /// far fewer candidates than that. With `exclude_ambiguous` the digit pool
    /// shrinks to 8 (no `0` or `1`) while the formula still counts 10.
    pub fn pronounceable(&mut self, options: &PronounceableOptions) -> GeneratedCredential {
        let keep = |c: &char| !(options.exclude_ambiguous && is_ambiguous(*c));
        let consonants: Vec<char> = CONSONANTS.chars().filter(keep).collect();
        let vowels: Vec<char> = VOWELS.chars().filter(keep).collect();
        let digits: Vec<char> = NUMBERS.chars().filter(keep).collect();
        let symbols: Vec<char> = CONSERVATIVE_SYMBOLS.chars().filter(keep).collect();

        let mut letters: Vec<char> = (0..options.length)
            .map(|i| {
                let c = if i % 2 == 0 { self.pick(&consonants) } else { self.pick(&vowels) };
                if options.include_uppercase && self.rng.gen_bool(UPPERCASE_PROBABILITY) {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();

        if options.include_numbers && !letters.is_empty() {
            // Positions are drawn independently, so they may collide.
            let replacements = (options.length / 4).min(2);
            for _ in 0..replacements {
                let pos = self.rng.gen_range(0..letters.len());
                letters[pos] = self.pick(&digits);
            }
        }

        if options.include_symbols {
            letters.push(self.pick(&symbols));
        }

        let mut alphabet_size = consonants.len() + vowels.len();
        if options.include_numbers {
            alphabet_size += 10;
        }
        if options.include_symbols {
            alphabet_size += 8;
        }

        let bits = entropy_bits(letters.len(), alphabet_size);
        GeneratedCredential::new(letters.into_iter().collect(), bits)
    }

    /// Three title-cased words, a three digit number, and one symbol, padded
    /// with lowercase letters or truncated to exactly `length` characters.
    ///
    /// The entropy is fixed at `3*log2(words) + log2(900) + log2(8)` whatever
    /// the requested length; padding and truncation are not accounted for.
    pub fn passphrase(&mut self, options: &PassphraseOptions) -> GeneratedCredential {
        let separator = if options.include_spaces { " " } else { "-" };
        let words: Vec<String> = COMMON_WORDS
            .choose_multiple(&mut self.rng, PASSPHRASE_WORDS)
            .map(|word| capitalize(word))
            .collect();

        let mut passphrase = words.join(separator);
        passphrase.push_str(&self.rng.gen_range(100..=999).to_string());
        let symbols: Vec<char> = CONSERVATIVE_SYMBOLS.chars().collect();
        passphrase.push(self.pick(&symbols));

        let lowercase: Vec<char> = LOWERCASE.chars().collect();
        while passphrase.len() < options.length {
            passphrase.push(self.pick(&lowercase));
        }
        // ASCII only, so byte and char positions agree.
        passphrase.truncate(options.length);

        let bits = word_entropy(PASSPHRASE_WORDS, COMMON_WORDS.len(), Some(900)) + 8f64.log2();
        GeneratedCredential::new(passphrase, bits)
    }
}
