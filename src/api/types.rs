// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::generators::{
    round_bits, CharsetOptions, PassphraseOptions, PronounceableOptions, ReadableOptions,
    SecurityStandard, Strength,
};
use crate::models::{BreachResult, BreachStatus, GeneratedCredential};

pub const LENGTH_RANGE: std::ops::RangeInclusive<usize> = 8..=128;
pub const BULK_COUNT_RANGE: std::ops::RangeInclusive<usize> = 1..=100;
pub const WORD_COUNT_RANGE: std::ops::RangeInclusive<usize> = 2..=8;
pub const PASSPHRASE_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 16..=128;

fn default_true() -> bool { true }
fn default_length() -> usize { 16 }
fn default_count() -> usize { 1 }
fn default_word_count() -> usize { 4 }
fn default_separator() -> String { "-".to_string() }
fn default_passphrase_length() -> usize { 32 }

fn check_range(field: &str, value: usize, range: &std::ops::RangeInclusive<usize>) -> Result<(), String> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "{} must be between {} and {}",
            field,
            range.start(),
            range.end()
        ))
    }
}

/// Single random-character password (also used for pronounceable passwords)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PasswordRequest {
    /// Password length (8-128)
    #[serde(default = "default_length")]
    pub length: usize,
    /// Include uppercase letters
    #[serde(default = "default_true")]
    pub include_uppercase: bool,
    /// Include lowercase letters
    #[serde(default = "default_true")]
    pub include_lowercase: bool,
    /// Include numbers
    #[serde(default = "default_true")]
    pub include_numbers: bool,
    /// Include symbols
    #[serde(default = "default_true")]
    pub include_symbols: bool,
    /// Exclude ambiguous characters (1, l, 0, O, i, I)
    #[serde(default = "default_true")]
    pub exclude_ambiguous: bool,
    /// Security standard (NIST, OWASP)
    #[serde(default)]
    pub security_standard: SecurityStandard,
    /// Check if the password has been compromised
    #[serde(default)]
    pub check_compromised: bool,
}

impl Default for PasswordRequest {
    fn default() -> Self {
        Self {
            length: default_length(),
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_ambiguous: true,
            security_standard: SecurityStandard::default(),
            check_compromised: false,
        }
    }
}

impl PasswordRequest {
    pub fn validate(&self) -> Result<(), String> {
        check_range("length", self.length, &LENGTH_RANGE)
    }

    pub fn charset_options(&self) -> CharsetOptions {
        CharsetOptions {
            include_lowercase: self.include_lowercase,
            include_uppercase: self.include_uppercase,
            include_numbers: self.include_numbers,
            include_symbols: self.include_symbols,
            exclude_ambiguous: self.exclude_ambiguous,
            security_standard: self.security_standard,
        }
    }

    pub fn pronounceable_options(&self) -> PronounceableOptions {
        PronounceableOptions {
            length: self.length,
            include_uppercase: self.include_uppercase,
            include_numbers: self.include_numbers,
            include_symbols: self.include_symbols,
            exclude_ambiguous: self.exclude_ambiguous,
        }
    }
}

/// Several random-character passwords in one call
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkPasswordRequest {
    /// Number of passwords to generate (1-100)
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(flatten)]
    pub password: PasswordRequest,
}

impl BulkPasswordRequest {
    pub fn validate(&self) -> Result<(), String> {
        check_range("count", self.count, &BULK_COUNT_RANGE)?;
        self.password.validate()
    }
}

/// Word based password (correct-horse-battery-staple style)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadablePasswordRequest {
    /// Number of words (2-8)
    #[serde(default = "default_word_count")]
    pub word_count: usize,
    /// Word separator
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Append a two digit number
    #[serde(default = "default_true")]
    pub include_numbers: bool,
    /// Capitalize the first letter of each word
    #[serde(default = "default_true")]
    pub capitalize: bool,
    #[serde(default)]
    pub check_compromised: bool,
}

impl ReadablePasswordRequest {
    pub fn validate(&self) -> Result<(), String> {
        check_range("word_count", self.word_count, &WORD_COUNT_RANGE)
    }

    pub fn options(&self) -> ReadableOptions {
        ReadableOptions {
            word_count: self.word_count,
            separator: self.separator.clone(),
            include_numbers: self.include_numbers,
            capitalize: self.capitalize,
        }
    }
}

/// Passphrase for MFA/SSH use
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PassphraseRequest {
    /// Passphrase length (16-128)
    #[serde(default = "default_passphrase_length")]
    pub length: usize,
    /// Separate words with spaces instead of hyphens
    #[serde(default = "default_true")]
    pub include_spaces: bool,
    #[serde(default)]
    pub check_compromised: bool,
}

impl PassphraseRequest {
    pub fn validate(&self) -> Result<(), String> {
        check_range("length", self.length, &PASSPHRASE_LENGTH_RANGE)
    }

    pub fn options(&self) -> PassphraseOptions {
        PassphraseOptions {
            length: self.length,
            include_spaces: self.include_spaces,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompromiseCheckRequest {
    /// Password to look up
    #[serde(default)]
    pub password: String,
}

/// Breach fields shared by every generated credential.
///
/// `is_compromised` stays false for an undetermined lookup; `breach_status`
/// (present only when a check was requested) tells "unknown" apart.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompromiseInfo {
    pub is_compromised: bool,
    pub compromise_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breach_status: Option<BreachStatus>,
}

impl CompromiseInfo {
    pub fn from_result(result: Option<BreachResult>) -> Self {
        Self {
            is_compromised: result.map(|r| r.is_compromised()).unwrap_or(false),
            compromise_count: result.and_then(|r| r.compromise_count()),
            breach_status: result.map(|r| r.status()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratedPassword {
    pub password: String,
    pub length: usize,
    pub entropy_bits: f64,
    pub strength: Strength,
    #[serde(flatten)]
    pub compromise: CompromiseInfo,
}

impl From<&GeneratedCredential> for GeneratedPassword {
    fn from(credential: &GeneratedCredential) -> Self {
        Self {
            password: credential.value.clone(),
            length: credential.length(),
            entropy_bits: round_bits(credential.entropy_bits),
            strength: credential.strength,
            compromise: CompromiseInfo::from_result(credential.breach),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PasswordResponse {
    #[serde(flatten)]
    pub generated: GeneratedPassword,
    pub charset_size: usize,
    pub security_standard: SecurityStandard,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkPasswordResponse {
    pub passwords: Vec<GeneratedPassword>,
    pub count: usize,
    pub charset_size: usize,
    pub security_standard: SecurityStandard,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadablePasswordResponse {
    #[serde(flatten)]
    pub generated: GeneratedPassword,
    pub word_count: usize,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PronounceablePasswordResponse {
    #[serde(flatten)]
    pub generated: GeneratedPassword,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PassphraseResponse {
    pub passphrase: String,
    pub length: usize,
    pub entropy_bits: f64,
    pub strength: Strength,
    #[serde(flatten)]
    pub compromise: CompromiseInfo,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<&GeneratedCredential> for PassphraseResponse {
    fn from(credential: &GeneratedCredential) -> Self {
        Self {
            passphrase: credential.value.clone(),
            length: credential.length(),
            entropy_bits: round_bits(credential.entropy_bits),
            strength: credential.strength,
            compromise: CompromiseInfo::from_result(credential.breach),
            kind: "passphrase".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompromiseCheckResponse {
    pub is_compromised: bool,
    pub compromise_count: Option<u64>,
    pub breach_status: BreachStatus,
    /// RFC 3339 timestamp of the lookup
    pub checked_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfoResponse {
    pub message: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Explanation of why the request was rejected
    pub detail: String,
}
