//! Trending keyword suggestions.

use rand::Rng;
use rand::seq::SliceRandom;

/// Suggested keywords, grouped by theme.
pub const TRENDING_KEYWORDS: [(&str, [&str; 4]); 5] = [
    ("love", ["romance", "heartbreak", "soulmate", "forever"]),
    ("humor", ["cats", "coffee", "Monday", "sleep"]),
    ("motivation", ["success", "dreams", "hustle", "growth"]),
    ("tech", ["AI", "coding", "future", "innovation"]),
    ("life", ["friendship", "family", "happiness", "peace"]),
];

/// Default number of suggestions shown.
pub const DEFAULT_SAMPLE_SIZE: usize = 8;

/// Every trending keyword, theme by theme.
pub fn all_keywords() -> impl Iterator<Item = &'static str> {
    TRENDING_KEYWORDS
        .iter()
        .flat_map(|(_, keywords)| keywords.iter().copied())
}

/// Pick up to `count` distinct keywords in random order.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<&'static str> {
    let keywords: Vec<&'static str> = all_keywords().collect();
    keywords.choose_multiple(rng, count).copied().collect()
}
