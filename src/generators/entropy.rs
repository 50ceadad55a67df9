// src/generators/entropy.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Strength bands, ordered weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Bands are inclusive on their lower edge: 40.0 is medium, 60.0 strong,
    /// 80.0 very strong.
    pub fn from_entropy(bits: f64) -> Self {
        if bits < 40.0 {
            Strength::Weak
        } else if bits < 60.0 {
            Strength::Medium
        } else if bits < 80.0 {
            Strength::Strong
        } else {
            Strength::VeryStrong
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very_strong",
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bits for `length` independent uniform draws from an alphabet.
pub fn entropy_bits(length: usize, alphabet_size: usize) -> f64 {
    if alphabet_size == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_size as f64).log2()
}

/// Bits for outputs composed of words from a fixed list, plus an optional
/// numeric suffix drawn from `suffix_range` values. Bounded by vocabulary
/// size rather than by character permutations.
pub fn word_entropy(word_slots: usize, list_size: usize, suffix_range: Option<usize>) -> f64 {
    let mut bits = entropy_bits(word_slots, list_size);
    if let Some(range) = suffix_range {
        if range > 0 {
            bits += (range as f64).log2();
        }
    }
    bits
}

/// Two decimal places, for display only.
pub fn round_bits(bits: f64) -> f64 {
    (bits * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_is_length_times_log2_alphabet() {
        for (length, size) in [(8, 26), (12, 56), (16, 88), (128, 8)] {
            let expected = length as f64 * (size as f64).log2();
            assert!((entropy_bits(length, size) - expected).abs() < 1e-9);
        }
        assert_eq!(entropy_bits(10, 0), 0.0);
    }

    #[test]
    fn band_edges_are_lower_inclusive() {
        assert_eq!(Strength::from_entropy(39.99), Strength::Weak);
        assert_eq!(Strength::from_entropy(40.0), Strength::Medium);
        assert_eq!(Strength::from_entropy(59.99), Strength::Medium);
        assert_eq!(Strength::from_entropy(60.0), Strength::Strong);
        assert_eq!(Strength::from_entropy(79.99), Strength::Strong);
        assert_eq!(Strength::from_entropy(80.0), Strength::VeryStrong);
    }

    #[test]
    fn strength_is_monotonic() {
        let mut previous = Strength::Weak;
        let mut bits = 0.0;
        while bits < 200.0 {
            let current = Strength::from_entropy(bits);
            assert!(current >= previous);
            previous = current;
            bits += 0.25;
        }
    }

    #[test]
    fn word_entropy_adds_suffix_range() {
        let words = word_entropy(4, 64, None);
        assert!((words - 24.0).abs() < 1e-9);
        let with_suffix = word_entropy(4, 64, Some(90));
        assert!((with_suffix - (24.0 + 90f64.log2())).abs() < 1e-9);
    }

    #[test]
    fn sample_request_is_strong() {
        let bits = entropy_bits(12, 56);
        assert_eq!(round_bits(bits), 69.69);
        assert_eq!(Strength::from_entropy(bits), Strength::Strong);
    }

    #[test]
    fn strength_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Strength::VeryStrong).unwrap(), "\"very_strong\"");
    }
}
