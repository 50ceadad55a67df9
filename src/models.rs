// src/models.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::generators::entropy::Strength;

/// Why a breach lookup could not give an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownReason {
    RateLimited,
    LookupFailed,
}

/// Outcome of a breach lookup. `Unknown` means "could not determine" and is
/// never treated as safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachResult {
    NotCompromised,
    Compromised(u64),
    Unknown(UnknownReason),
}

/// Wire label for a `BreachResult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BreachStatus {
    NotCompromised,
    Compromised,
    Unknown,
}

impl BreachResult {
    pub fn is_compromised(&self) -> bool {
        matches!(self, BreachResult::Compromised(_))
    }

    /// Count for the response, only when it is known and positive.
    pub fn compromise_count(&self) -> Option<u64> {
        match self {
            BreachResult::Compromised(count) if *count > 0 => Some(*count),
            _ => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, BreachResult::Unknown(_))
    }

    pub fn status(&self) -> BreachStatus {
        match self {
            BreachResult::NotCompromised => BreachStatus::NotCompromised,
            BreachResult::Compromised(_) => BreachStatus::Compromised,
            BreachResult::Unknown(_) => BreachStatus::Unknown,
        }
    }
}

/// A generated secret with its entropy estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCredential {
    pub value: String,
    pub entropy_bits: f64,
    pub strength: Strength,
    pub breach: Option<BreachResult>,
}

impl GeneratedCredential {
    pub fn new(value: String, entropy_bits: f64) -> Self {
        Self {
            value,
            entropy_bits,
            strength: Strength::from_entropy(entropy_bits),
            breach: None,
        }
    }

    pub fn length(&self) -> usize {
        self.value.chars().count()
    }

    pub fn with_breach(mut self, result: BreachResult) -> Self {
        self.breach = Some(result);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_is_not_reported_as_compromised() {
        let unknown = BreachResult::Unknown(UnknownReason::RateLimited);
        assert!(!unknown.is_compromised());
        assert!(unknown.is_unknown());
        assert_eq!(unknown.compromise_count(), None);
        assert_eq!(unknown.status(), BreachStatus::Unknown);
    }

    #[test]
    fn compromised_count_is_only_reported_when_positive() {
        assert_eq!(BreachResult::Compromised(42).compromise_count(), Some(42));
        assert_eq!(BreachResult::Compromised(0).compromise_count(), None);
        assert_eq!(BreachResult::NotCompromised.compromise_count(), None);
    }

    #[test]
    fn credential_strength_follows_entropy() {
        let credential = GeneratedCredential::new("abc".to_string(), 61.0);
        assert_eq!(credential.strength, Strength::Strong);
        assert_eq!(credential.length(), 3);
        assert!(credential.breach.is_none());
    }
}
