// src/generators/words.rs

// Fixed vocabulary for readable passwords and passphrases.
pub const COMMON_WORDS: [&str; 64] = [
    "correct", "horse", "battery", "staple", "apple", "banana", "orange", "grape",
    "table", "chair", "house", "window", "door", "book", "paper", "pencil",
    "computer", "keyboard", "mouse", "screen", "phone", "camera", "music", "video",
    "garden", "flower", "tree", "grass", "water", "fire", "earth", "wind",
    "mountain", "ocean", "river", "forest", "desert", "island", "bridge", "road",
    "happy", "brave", "quick", "smart", "strong", "gentle", "bright", "calm",
    "magic", "wonder", "dream", "smile", "laugh", "peace", "hope", "love",
    "cloud", "storm", "rainbow", "sunshine", "moonlight", "starlight", "crystal", "diamond",
];

/// Upper-case the first letter, lower-case the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}
